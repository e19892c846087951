//! Citizens' holidays (国民の休日): from 1988 a single ordinary day between
//! two holidays becomes a holiday itself, unless it's a Sunday.

use tracing::trace;

use crate::date::{Date, Weekday};
use crate::Holiday;

const FIRST_YEAR: i32 = 1988;

pub(crate) const NAME_JA: &str = "国民の休日";
pub(crate) const NAME_EN: &str = "Citizens' Holiday";

/// Sorts `holidays` by date and appends a citizens' holiday for every
/// one-day gap between neighbours.
///
/// Gaps are taken from the sorted input only, so a new citizens' holiday
/// never closes another gap in the same pass.
pub(crate) fn with_citizens_holidays(year: i32, mut holidays: Vec<Holiday>) -> Vec<Holiday> {
    holidays.sort_by_key(|it| it.date);
    if year < FIRST_YEAR {
        return holidays;
    }

    let gaps: Vec<Date> = holidays
        .windows(2)
        .filter(|pair| pair[1].date.days_since(&pair[0].date) == 2)
        .map(|pair| pair[0].date.succ())
        .filter(|date| date.weekday() != Weekday::Sunday)
        .collect();

    for date in gaps {
        if holidays.iter().any(|it| it.date == date) {
            continue;
        }
        trace!(%date, "citizens' holiday");
        holidays.push(Holiday::new(date, NAME_JA, NAME_EN));
    }

    holidays
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(y: i32, m: u32, d: u32) -> Holiday {
        Holiday::new(Date::from_ymd_opt(y, m, d).unwrap(), "祝日", "Holiday")
    }

    fn citizens(holidays: &[Holiday]) -> Vec<Date> {
        holidays
            .iter()
            .filter(|it| it.name_en == NAME_EN)
            .map(|it| it.date)
            .collect()
    }

    #[test]
    fn fills_single_day_gap() {
        // 2026-09-21 (Mon) and 2026-09-23 (Wed)
        let output = with_citizens_holidays(2026, vec![holiday(2026, 9, 23), holiday(2026, 9, 21)]);
        assert_eq!(citizens(&output), vec![Date::from_ymd(2026, 9, 22)]);
        assert_eq!(output[2].name_ja, NAME_JA);
    }

    #[test]
    fn sorts_before_scanning() {
        let output = with_citizens_holidays(
            2019,
            vec![holiday(2019, 5, 1), holiday(2019, 5, 3), holiday(2019, 4, 29)],
        );
        assert_eq!(
            citizens(&output),
            vec![Date::from_ymd(2019, 4, 30), Date::from_ymd(2019, 5, 2)]
        );
    }

    #[test]
    fn never_on_sunday() {
        // 2025-01-05 is a Sunday
        let output = with_citizens_holidays(2025, vec![holiday(2025, 1, 4), holiday(2025, 1, 6)]);
        assert!(citizens(&output).is_empty());
    }

    #[test]
    fn only_exact_two_day_gaps() {
        let output = with_citizens_holidays(
            2025,
            vec![holiday(2025, 3, 3), holiday(2025, 3, 4), holiday(2025, 3, 7)],
        );
        assert!(citizens(&output).is_empty());
    }

    #[test]
    fn inactive_before_1988() {
        // 1987-05-04 was a Monday between two holidays
        let output = with_citizens_holidays(1987, vec![holiday(1987, 5, 5), holiday(1987, 5, 3)]);
        assert_eq!(output.len(), 2);
        assert_eq!(output[0].date, Date::from_ymd(1987, 5, 3));

        let output = with_citizens_holidays(1988, vec![holiday(1988, 5, 3), holiday(1988, 5, 5)]);
        assert_eq!(citizens(&output), vec![Date::from_ymd(1988, 5, 4)]);
    }
}
