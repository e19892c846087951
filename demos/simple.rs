use chrono::NaiveDate;
use jp_holidays::Locale;

fn main() -> Result<(), jp_holidays::Error> {
    let d = NaiveDate::from_ymd_opt(2025, 5, 6).expect("Invalid date");
    println!(
        "Is {d} a holiday in Japan? Answer is {}",
        jp_holidays::is_holiday(d)?
    );

    if let Some(name) = jp_holidays::holiday_name(d, Locale::En)? {
        println!("{d} is {name}");
    }

    Ok(())
}
