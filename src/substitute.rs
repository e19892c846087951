//! Substitute holidays (振替休日).
//!
//! From 1973 a holiday falling on a Sunday is also observed on the next day
//! that isn't already a holiday. From 2007 a Sunday May 3rd or May 4th is
//! observed on May 6th, past Children's Day.

use tracing::trace;

use crate::date::{Date, Weekday};
use crate::{Error, Holiday};

const FIRST_YEAR: i32 = 1973;
const GOLDEN_WEEK_FIRST_YEAR: i32 = 2007;

/// Days searched past a Sunday holiday before giving up.
const MAX_SEARCH_DAYS: i32 = 10;

pub(crate) fn substitute_for(holiday: &Holiday, date: Date) -> Holiday {
    Holiday {
        date,
        name_ja: format!("{}の振替休日", holiday.name_ja).into(),
        name_en: format!("{} (Substitute Holiday)", holiday.name_en).into(),
    }
}

fn is_golden_week_sunday(date: Date) -> bool {
    let (_, month, day) = date.ymd();
    month == 5 && (day == 3 || day == 4)
}

fn is_observed(holidays: &[Holiday], date: Date) -> bool {
    holidays.iter().any(|it| it.date == date)
}

/// First day after `from` that holds no holiday yet.
fn next_free_day(holidays: &[Holiday], from: Date) -> Result<Date, Error> {
    (1..=MAX_SEARCH_DAYS)
        .map(|offset| from + offset)
        .find(|date| !is_observed(holidays, *date))
        .ok_or(Error::InternalConsistency(
            "no free day found for a substitute holiday",
        ))
}

/// Appends substitutes for every Sunday holiday of `holidays`.
///
/// Only the holidays passed in are considered; the substitutes appended here
/// are never themselves substituted, but they do occupy their day for later
/// substitutes.
pub(crate) fn with_substitutes(
    year: i32,
    mut holidays: Vec<Holiday>,
) -> Result<Vec<Holiday>, Error> {
    if year < FIRST_YEAR {
        return Ok(holidays);
    }

    for i in 0..holidays.len() {
        let date = holidays[i].date;
        if date.weekday() != Weekday::Sunday {
            continue;
        }

        let observed_on = if year >= GOLDEN_WEEK_FIRST_YEAR && is_golden_week_sunday(date) {
            let may_6 = Date::from_ymd(year, 5, 6);
            if is_observed(&holidays, may_6) {
                continue;
            }
            may_6
        } else {
            next_free_day(&holidays, date)?
        };

        let substitute = substitute_for(&holidays[i], observed_on);
        trace!(date = %substitute.date, name = %substitute.name_en, "substitute holiday");
        holidays.push(substitute);
    }

    Ok(holidays)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(y: i32, m: u32, d: u32, name: &'static str) -> Holiday {
        Holiday::new(Date::from_ymd_opt(y, m, d).unwrap(), name, name)
    }

    fn substitutes(holidays: &[Holiday], originals: usize) -> Vec<(Date, String)> {
        holidays[originals..]
            .iter()
            .map(|it| (it.date, it.name_en.to_string()))
            .collect()
    }

    #[test]
    fn sunday_holiday_moves_to_monday() {
        // 2025-11-23 is a Sunday
        let input = vec![holiday(2025, 11, 23, "Labor Thanksgiving Day")];
        let output = with_substitutes(2025, input).unwrap();
        assert_eq!(
            substitutes(&output, 1),
            vec![(
                Date::from_ymd(2025, 11, 24),
                "Labor Thanksgiving Day (Substitute Holiday)".to_string()
            )]
        );
        assert_eq!(output[1].name_ja, "Labor Thanksgiving Dayの振替休日");
    }

    #[test]
    fn weekday_holidays_are_untouched() {
        let input = vec![holiday(2025, 1, 1, "New Year's Day")];
        assert_eq!(with_substitutes(2025, input.clone()).unwrap(), input);
    }

    #[test]
    fn no_substitutes_before_1973() {
        // 1950-01-01 is a Sunday
        let input = vec![holiday(1950, 1, 1, "New Year's Day")];
        assert_eq!(with_substitutes(1950, input.clone()).unwrap(), input);
        assert_eq!(with_substitutes(1972, Vec::new()).unwrap(), Vec::new());
    }

    #[test]
    fn skips_past_consecutive_holidays() {
        // 2023-01-01 is a Sunday; pretend the next two days are holidays too.
        let input = vec![
            holiday(2023, 1, 1, "First"),
            holiday(2023, 1, 2, "Second"),
            holiday(2023, 1, 3, "Third"),
        ];
        let output = with_substitutes(2023, input).unwrap();
        assert_eq!(
            substitutes(&output, 3),
            vec![(Date::from_ymd(2023, 1, 4), "First (Substitute Holiday)".to_string())]
        );
    }

    #[test]
    fn later_substitutes_avoid_earlier_ones() {
        // Two Sundays, 2023-01-01 and 2023-01-08, with every day between them
        // a holiday as well.
        let input: Vec<Holiday> = (0..8)
            .map(|offset| Holiday::new(Date::from_ymd(2023, 1, 1) + offset, "Day", "Day"))
            .collect();
        let output = with_substitutes(2023, input).unwrap();
        let moved: Vec<Date> = substitutes(&output, 8).into_iter().map(|it| it.0).collect();
        assert_eq!(moved, vec![Date::from_ymd(2023, 1, 9), Date::from_ymd(2023, 1, 10)]);
    }

    #[test]
    fn golden_week_sunday_moves_to_may_6() {
        // 2025-05-04 is a Sunday
        let input = vec![
            holiday(2025, 5, 3, "Constitution Memorial Day"),
            holiday(2025, 5, 4, "Greenery Day"),
            holiday(2025, 5, 5, "Children's Day"),
        ];
        let output = with_substitutes(2025, input).unwrap();
        assert_eq!(
            substitutes(&output, 3),
            vec![(Date::from_ymd(2025, 5, 6), "Greenery Day (Substitute Holiday)".to_string())]
        );

        // 2020-05-03 is a Sunday
        let input = vec![holiday(2020, 5, 3, "Constitution Memorial Day")];
        let output = with_substitutes(2020, input).unwrap();
        assert_eq!(output[1].date, Date::from_ymd(2020, 5, 6));
    }

    #[test]
    fn golden_week_substitute_keeps_existing_may_6() {
        // 2020-05-03 is a Sunday and May 6 already holds a holiday.
        let input = vec![
            holiday(2020, 5, 3, "Constitution Memorial Day"),
            holiday(2020, 5, 6, "Existing"),
        ];
        let output = with_substitutes(2020, input.clone()).unwrap();
        assert_eq!(output, input);
        let may_6 = output.iter().filter(|it| it.date == Date::from_ymd(2020, 5, 6)).count();
        assert_eq!(may_6, 1);
    }

    #[test]
    fn golden_week_before_2007_takes_next_day() {
        // 1998-05-03 is a Sunday
        let input = vec![
            holiday(1998, 5, 3, "Constitution Memorial Day"),
            holiday(1998, 5, 5, "Children's Day"),
        ];
        let output = with_substitutes(1998, input).unwrap();
        assert_eq!(substitutes(&output, 2)[0].0, Date::from_ymd(1998, 5, 4));
    }

    #[test]
    fn unbounded_search_is_an_error() {
        // 2023-01-01 is a Sunday followed by more holidays than the search allows.
        let input: Vec<Holiday> = (0..=MAX_SEARCH_DAYS)
            .map(|offset| Holiday::new(Date::from_ymd(2023, 1, 1) + offset, "Day", "Day"))
            .collect();
        assert!(matches!(
            with_substitutes(2023, input),
            Err(Error::InternalConsistency(_))
        ));
    }
}
