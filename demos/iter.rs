use chrono::NaiveDate;

fn main() -> Result<(), jp_holidays::Error> {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("Invalid date");
    let end = NaiveDate::from_ymd_opt(2025, 12, 31).expect("Invalid date");

    for holiday in jp_holidays::holidays_between(start, end)? {
        println!("{holiday}");
    }
    println!(
        "{} work days in 2025",
        jp_holidays::count_work_days(start, end)?
    );

    Ok(())
}
