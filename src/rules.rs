//! Statutory holiday rules.
//!
//! Each rule yields the holidays it contributes to one year. The year
//! thresholds follow the amendments of the National Holiday Law and must not
//! be merged or simplified.

use crate::date::{Date, Weekday};
use crate::equinox::{equinox_date, Equinox};
use crate::{Error, Holiday};

pub(crate) type Rule = fn(i32) -> Result<Vec<Holiday>, Error>;

/// All rules, in evaluation order.
pub(crate) static RULES: [Rule; 16] = [
    new_years_day,
    coming_of_age_day,
    national_foundation_day,
    vernal_equinox_day,
    showa_day,
    constitution_memorial_day,
    greenery_day,
    childrens_day,
    marine_day,
    mountain_day,
    respect_for_the_aged_day,
    autumnal_equinox_day,
    sports_day,
    culture_day,
    labor_thanksgiving_day,
    emperors_birthday,
];

fn observed(
    date: Date,
    name_ja: &'static str,
    name_en: &'static str,
) -> Result<Vec<Holiday>, Error> {
    Ok(vec![Holiday::new(date, name_ja, name_en)])
}

fn none() -> Result<Vec<Holiday>, Error> {
    Ok(Vec::new())
}

fn new_years_day(year: i32) -> Result<Vec<Holiday>, Error> {
    match year {
        1949.. => observed(Date::from_ymd(year, 1, 1), "元日", "New Year's Day"),
        _ => none(),
    }
}

fn coming_of_age_day(year: i32) -> Result<Vec<Holiday>, Error> {
    let date = match year {
        2000.. => Date::nth_weekday(year, 1, 2, Weekday::Monday),
        1949..=1999 => Date::from_ymd(year, 1, 15),
        _ => return none(),
    };
    observed(date, "成人の日", "Coming of Age Day")
}

fn national_foundation_day(year: i32) -> Result<Vec<Holiday>, Error> {
    match year {
        1967.. => observed(
            Date::from_ymd(year, 2, 11),
            "建国記念の日",
            "National Foundation Day",
        ),
        _ => none(),
    }
}

fn vernal_equinox_day(year: i32) -> Result<Vec<Holiday>, Error> {
    match year {
        1949.. => observed(
            equinox_date(year, Equinox::Vernal)?,
            "春分の日",
            "Vernal Equinox Day",
        ),
        _ => none(),
    }
}

/// April 29th under its post-Showa names, plus the 2019 accession day.
fn showa_day(year: i32) -> Result<Vec<Holiday>, Error> {
    let mut holidays = match year {
        2007.. => observed(Date::from_ymd(year, 4, 29), "昭和の日", "Showa Day")?,
        1989..=2006 => observed(Date::from_ymd(year, 4, 29), "みどりの日", "Greenery Day")?,
        _ => Vec::new(),
    };

    if year == 2019 {
        holidays.push(Holiday::new(
            Date::from_ymd(year, 5, 1),
            "天皇の即位の日",
            "Enthronement Day",
        ));
    }

    Ok(holidays)
}

fn constitution_memorial_day(year: i32) -> Result<Vec<Holiday>, Error> {
    match year {
        1949.. => observed(
            Date::from_ymd(year, 5, 3),
            "憲法記念日",
            "Constitution Memorial Day",
        ),
        _ => none(),
    }
}

/// Greenery Day in its May 4th slot. Before 2007 it was held on April 29th,
/// see [`showa_day`].
fn greenery_day(year: i32) -> Result<Vec<Holiday>, Error> {
    match year {
        2007.. => observed(Date::from_ymd(year, 5, 4), "みどりの日", "Greenery Day"),
        _ => none(),
    }
}

fn childrens_day(year: i32) -> Result<Vec<Holiday>, Error> {
    match year {
        1949.. => observed(Date::from_ymd(year, 5, 5), "こどもの日", "Children's Day"),
        _ => none(),
    }
}

fn marine_day(year: i32) -> Result<Vec<Holiday>, Error> {
    let date = match year {
        // Tokyo Olympics
        2020 => Date::from_ymd(year, 7, 23),
        2003.. => Date::nth_weekday(year, 7, 3, Weekday::Monday),
        1996..=2002 => Date::from_ymd(year, 7, 20),
        _ => return none(),
    };
    observed(date, "海の日", "Marine Day")
}

fn mountain_day(year: i32) -> Result<Vec<Holiday>, Error> {
    let date = match year {
        // Tokyo Olympics
        2020 => Date::from_ymd(year, 8, 10),
        2016.. => Date::from_ymd(year, 8, 11),
        _ => return none(),
    };
    observed(date, "山の日", "Mountain Day")
}

fn respect_for_the_aged_day(year: i32) -> Result<Vec<Holiday>, Error> {
    let date = match year {
        2003.. => Date::nth_weekday(year, 9, 3, Weekday::Monday),
        1966..=2002 => Date::from_ymd(year, 9, 15),
        _ => return none(),
    };
    observed(date, "敬老の日", "Respect for the Aged Day")
}

fn autumnal_equinox_day(year: i32) -> Result<Vec<Holiday>, Error> {
    match year {
        1948.. => observed(
            equinox_date(year, Equinox::Autumnal)?,
            "秋分の日",
            "Autumnal Equinox Day",
        ),
        _ => none(),
    }
}

/// Sports Day, called Health and Sports Day until 2019.
fn sports_day(year: i32) -> Result<Vec<Holiday>, Error> {
    match year {
        // Tokyo Olympics opening ceremony
        2020 => observed(Date::from_ymd(year, 7, 24), "スポーツの日", "Sports Day"),
        2021.. => observed(
            Date::nth_weekday(year, 10, 2, Weekday::Monday),
            "スポーツの日",
            "Sports Day",
        ),
        2000..=2019 => observed(
            Date::nth_weekday(year, 10, 2, Weekday::Monday),
            "体育の日",
            "Health and Sports Day",
        ),
        1966..=1999 => observed(
            Date::from_ymd(year, 10, 10),
            "体育の日",
            "Health and Sports Day",
        ),
        _ => none(),
    }
}

fn culture_day(year: i32) -> Result<Vec<Holiday>, Error> {
    match year {
        1948.. => observed(Date::from_ymd(year, 11, 3), "文化の日", "Culture Day"),
        _ => none(),
    }
}

fn labor_thanksgiving_day(year: i32) -> Result<Vec<Holiday>, Error> {
    match year {
        1948.. => observed(
            Date::from_ymd(year, 11, 23),
            "勤労感謝の日",
            "Labor Thanksgiving Day",
        ),
        _ => none(),
    }
}

/// Birthday of the reigning emperor. 2019 has none: the Heisei emperor
/// abdicated before December and the Reiwa emperor's birthday had passed.
fn emperors_birthday(year: i32) -> Result<Vec<Holiday>, Error> {
    let date = match year {
        2020.. => Date::from_ymd(year, 2, 23),
        1989..=2018 => Date::from_ymd(year, 12, 23),
        1949..=1988 => Date::from_ymd(year, 4, 29),
        _ => return none(),
    };
    observed(date, "天皇誕生日", "Emperor's Birthday")
}
