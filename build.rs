use csv::StringRecord;
use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
    str::FromStr,
};

const DEFAULT_TABLE: &str = "special_occasions.csv";

#[derive(Clone, Copy, PartialEq, Eq)]
struct Date {
    year: i32,
    day_index: i32,
}

pub const fn ymd_as_i32(y: i32, m: i32, d: i32) -> i32 {
    // Source: https://howardhinnant.github.io/date_algorithms.html
    let adjusted_year = y - if m <= 2 { 1 } else { 0 };

    let era = if adjusted_year >= 0 {
        adjusted_year / 400
    } else {
        (adjusted_year - 399) / 400
    };

    let year_of_era = adjusted_year - era * 400;
    let month_part = if m > 2 { m - 3 } else { m + 9 };
    let day_of_year = (153 * month_part + 2) / 5 + d - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    let days_since_civil = era * 146097 + day_of_era;

    days_since_civil - 719468
}

impl FromStr for Date {
    type Err = ();

    fn from_str(date: &str) -> Result<Self, Self::Err> {
        let mut date = date.split("-");
        let year = date.next().ok_or(())?.parse().map_err(|_| ())?;
        let month: i32 = date.next().ok_or(())?.parse().map_err(|_| ())?;
        let day: i32 = date.next().ok_or(())?.parse().map_err(|_| ())?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(());
        }
        Ok(Date {
            year,
            day_index: ymd_as_i32(year, month, day),
        })
    }
}

struct SpecialOccasion {
    date: Date,
    name_ja: String,
    name_en: String,
}

fn parse_occasion_row(row: StringRecord) -> SpecialOccasion {
    let mut it = row.iter().map(String::from);

    SpecialOccasion {
        date: {
            let date = it.next().expect("invalid row in special occasion table");
            date.parse()
                .expect("invalid date format in special occasion table")
        },
        name_ja: it.next().expect("invalid row in special occasion table"),
        name_en: it.next().expect("invalid row in special occasion table"),
    }
}

fn gen_special_table<W: Write>(out: &mut W, occasions: &[SpecialOccasion]) -> std::io::Result<()> {
    let mut by_year = BTreeMap::new();
    for occasion in occasions {
        if by_year.insert(occasion.date.year, occasion).is_some() {
            panic!(
                "special occasion table lists two entries for {}",
                occasion.date.year
            );
        }
    }

    let mut lookup = phf_codegen::Map::<i32>::new();
    for (year, occasion) in &by_year {
        lookup.entry(
            *year,
            format!(
                "SpecialOccasion {{ date: Date({}), name_ja: {:?}, name_en: {:?} }}",
                occasion.date.day_index, occasion.name_ja, occasion.name_en
            ),
        );
    }

    writeln!(
        out,
        "pub(crate) static SPECIAL_OCCASIONS: phf::Map<i32, SpecialOccasion> = {};",
        lookup.build()
    )?;

    Ok(())
}

fn main() {
    println!("cargo:rerun-if-env-changed=HOLIDAYS_SPECIAL_OCCASIONS");

    let root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());
    let table_path = std::env::var("HOLIDAYS_SPECIAL_OCCASIONS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| root.join(DEFAULT_TABLE));
    println!("cargo:rerun-if-changed={}", table_path.display());

    let occasions: Vec<SpecialOccasion> = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(match File::open(&table_path) {
            Ok(it) => it,
            Err(_) => {
                panic!("missing {}", table_path.display())
            }
        }))
        .records()
        .map(|it| it.expect("unreadable row in special occasion table"))
        .map(parse_occasion_row)
        .collect();

    let out_dir = PathBuf::from(&std::env::var("OUT_DIR").unwrap());
    let table_out = out_dir.join("special_occasions.rs");
    let mut table_out =
        BufWriter::new(File::create(table_out).expect("unable to create special_occasions.rs"));
    gen_special_table(&mut table_out, &occasions).unwrap();
}
