//! Queries spanning more than one day.

use std::collections::HashSet;
use std::ops::{Bound, RangeBounds};

use tracing::debug;

use crate::date::Date;
use crate::{check_year, holidays, is_holiday, Error, Holiday, MAX_YEAR, MIN_YEAR};

/// Holidays from `start` to `end`, both inclusive, in ascending order.
///
/// The range may span several years; every year it touches must be
/// supported. An empty range (`start > end`) yields no holidays.
pub fn holidays_between(
    start: impl Into<Date>,
    end: impl Into<Date>,
) -> Result<Vec<Holiday>, Error> {
    let (start, end) = (start.into(), end.into());
    check_year(start.year())?;
    check_year(end.year())?;
    let range = start..=end;

    // Years are visited in order and each year is already sorted.
    let mut found = Vec::new();
    for year in start.year()..=end.year() {
        found.extend(
            holidays(year)?
                .into_iter()
                .filter(|it| range.contains(&it.date)),
        );
    }
    Ok(found)
}

/// Holidays within any date range, e.g. `a..b`, `a..=b` or `a..`.
///
/// Unbounded ends stop at the first or last supported day.
pub fn holidays_in<D, R>(range: R) -> Result<Vec<Holiday>, Error>
where
    D: Into<Date> + Clone,
    R: RangeBounds<D>,
{
    let (start, end) = inclusive_bounds(&range);
    holidays_between(start, end)
}

fn inclusive_bounds<D, R>(range: &R) -> (Date, Date)
where
    D: Into<Date> + Clone,
    R: RangeBounds<D>,
{
    let start = match range.start_bound() {
        Bound::Included(it) => it.clone().into(),
        Bound::Excluded(it) => {
            let it: Date = it.clone().into();
            it.succ()
        }
        Bound::Unbounded => Date::from_year(MIN_YEAR),
    };

    let end = match range.end_bound() {
        Bound::Included(it) => it.clone().into(),
        Bound::Excluded(it) => {
            let it: Date = it.clone().into();
            it - 1
        }
        Bound::Unbounded => Date::from_ymd(MAX_YEAR, 12, 31),
    };

    (start, end)
}

/// Whether `date` is neither a weekend nor a holiday.
pub fn is_work_day(date: impl Into<Date>) -> Result<bool, Error> {
    let date = date.into();
    let holiday = is_holiday(date)?;
    Ok(!holiday && !date.is_weekend())
}

/// Number of days from `start` to `end`, both inclusive, that are neither
/// Saturday, Sunday nor a holiday.
pub fn count_work_days(start: impl Into<Date>, end: impl Into<Date>) -> Result<usize, Error> {
    let (start, end) = (start.into(), end.into());
    let days_off: HashSet<Date> = holidays_between(start, end)?
        .into_iter()
        .map(|it| it.date)
        .collect();

    let count = (start.0..=end.0)
        .map(Date)
        .filter(|date| !date.is_weekend() && !days_off.contains(date))
        .count();

    debug!(%start, %end, count, "counted work days");
    Ok(count)
}
