use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::{Error, Locale};

/// Days between 0000-03-01 and the UNIX epoch.
const CIVIL_TO_UNIX: i32 = 719468;
/// `num_days_from_ce` of the UNIX epoch (0001-01-01 is day 1).
#[cfg(feature = "chrono")]
const CE_TO_UNIX: i32 = 719163;
const SECONDS_IN_DAY: i64 = 86400;
/// Largest year magnitude whose day index fits an `i32`.
const MAX_CIVIL_YEAR: i32 = 5_000_000;
const FIRST_DAY: Date = Date::from_ymd(-MAX_CIVIL_YEAR, 1, 1);
const LAST_DAY: Date = Date::from_ymd(MAX_CIVIL_YEAR, 12, 31);

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Date(
    /// Days since 1st of January, 1970. (UNIX epoch)
    pub(crate) i32,
);

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Days since Monday, `0..7`.
    #[inline]
    pub const fn days_from_monday(self) -> i32 {
        self as i32
    }
}

impl Date {
    /// Builds a date without validating it. Out-of-range months or days
    /// roll over into the neighbouring month.
    pub(crate) const fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        // Source: https://howardhinnant.github.io/date_algorithms.html

        let y = year;
        let m = month as i32;
        let d = day as i32;

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

        Self(days_since_civil - CIVIL_TO_UNIX)
    }

    /// Builds a date, returning `None` when `(year, month, day)` does not
    /// name a real calendar day or lies more than 5 000 000 years from 0 CE.
    pub const fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<Self> {
        if year < -MAX_CIVIL_YEAR || year > MAX_CIVIL_YEAR {
            return None;
        }
        if month < 1 || month > 12 || day < 1 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self::from_ymd(year, month, day))
    }

    #[inline]
    pub(crate) const fn from_year(year: i32) -> Self {
        Self::from_ymd(year, 1, 1)
    }

    /// The `n`th (1-based) `weekday` of the given month.
    ///
    /// `n` must be at least 1. Only `1..=4` is guaranteed to stay within the
    /// month; a fifth weekday exists in some months only.
    pub(crate) const fn nth_weekday(year: i32, month: u32, n: u32, weekday: Weekday) -> Self {
        let first = Self::from_ymd(year, month, 1);
        let offset =
            (weekday.days_from_monday() - first.weekday().days_from_monday()).rem_euclid(7);
        Self(first.0 + offset + 7 * (n as i32 - 1))
    }

    pub const fn ymd(&self) -> (i32, u32, u32) {
        // Source: https://howardhinnant.github.io/date_algorithms.html

        let z = self.0 + CIVIL_TO_UNIX;
        let era = (if z >= 0 { z } else { z - 146096 }) / 146097;
        let day_of_era = z - era * 146097;
        let year_of_era =
            (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let month_part = (5 * day_of_year + 2) / 153;

        let day = day_of_year - (153 * month_part + 2) / 5 + 1;
        let month = if month_part < 10 { month_part + 3 } else { month_part - 9 };
        let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };

        (year, month as u32, day as u32)
    }

    /// Day of the month
    #[inline]
    pub const fn day(&self) -> u32 {
        self.ymd().2
    }

    /// Month of the year
    #[inline]
    pub const fn month(&self) -> u32 {
        self.ymd().1
    }

    /// Year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.ymd().0
    }

    pub const fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday.
        Weekday::ALL[(self.0 + 3).rem_euclid(7) as usize]
    }

    #[inline]
    pub const fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// The following calendar day.
    #[inline]
    pub const fn succ(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Signed number of days from `other` to `self`.
    #[inline]
    pub const fn days_since(&self, other: &Self) -> i32 {
        self.0 - other.0
    }
}

pub(crate) const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub(crate) const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl Add<i32> for Date {
    type Output = Date;

    #[inline]
    fn add(self, days: i32) -> Date {
        Date(self.0 + days)
    }
}

impl Sub<i32> for Date {
    type Output = Date;

    #[inline]
    fn sub(self, days: i32) -> Date {
        Date(self.0 - days)
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parses `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '-');
        let mut next = || parts.next().ok_or(Error::InvalidDate);
        let year = next()?.parse().map_err(|_| Error::InvalidDate)?;
        let month = next()?.parse().map_err(|_| Error::InvalidDate)?;
        let day = next()?.parse().map_err(|_| Error::InvalidDate)?;
        Date::from_ymd_opt(year, month, day).ok_or(Error::InvalidDate)
    }
}

impl TryFrom<Date> for std::time::SystemTime {
    type Error = crate::Error;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        let offset = std::time::Duration::from_secs(
            (value.0 as i64).unsigned_abs() * SECONDS_IN_DAY as u64,
        );
        if value.0 >= 0 {
            std::time::SystemTime::UNIX_EPOCH.checked_add(offset)
        } else {
            std::time::SystemTime::UNIX_EPOCH.checked_sub(offset)
        }
        .ok_or(crate::Error::DateTooLarge)
    }
}

impl TryFrom<std::time::SystemTime> for Date {
    type Error = crate::Error;

    fn try_from(value: std::time::SystemTime) -> Result<Self, Self::Error> {
        let days = match value.duration_since(std::time::SystemTime::UNIX_EPOCH) {
            Ok(duration) => i64::try_from(duration.as_secs() / SECONDS_IN_DAY as u64).ok(),
            Err(err) => {
                let secs = err.duration().as_secs();
                // Any partial day before the epoch belongs to the previous date.
                i64::try_from(secs.div_ceil(SECONDS_IN_DAY as u64)).ok().map(|days| -days)
            }
        };

        days.and_then(Date::from_days).ok_or(crate::Error::DateTooLarge)
    }
}

impl Date {
    /// Date `days` after the UNIX epoch, if it lies in the representable years.
    fn from_days(days: i64) -> Option<Self> {
        let days = i32::try_from(days).ok()?;
        (FIRST_DAY.0..=LAST_DAY.0).contains(&days).then_some(Date(days))
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = crate::Error;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        let days = value
            .0
            .checked_add(CE_TO_UNIX)
            .ok_or(crate::Error::DateTooLarge)?;
        chrono::NaiveDate::from_num_days_from_ce_opt(days).ok_or(crate::Error::DateTooLarge)
    }
}
#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::DateTime<chrono::Utc> {
    type Error = crate::Error;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        let naive = chrono::NaiveDate::try_from(value)?
            .and_hms_opt(0, 0, 0)
            .ok_or(crate::Error::DateTooLarge)?;

        Ok(chrono::TimeZone::from_utc_datetime(&chrono::Utc, &naive))
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for Date {
    #[inline]
    fn from(value: chrono::NaiveDate) -> Self {
        Date(chrono::Datelike::num_days_from_ce(&value) - CE_TO_UNIX)
    }
}
#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Utc>> for Date {
    #[inline]
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        Date::from(value.date_naive())
    }
}
#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Local>> for Date {
    #[inline]
    fn from(value: chrono::DateTime<chrono::Local>) -> Self {
        Date::from(value.naive_local().date())
    }
}

/// Julian day number of 1970-01-01.
#[cfg(feature = "time")]
const JULIAN_DAY_OF_EPOCH: i32 = 2440588;

#[cfg(feature = "time")]
impl TryFrom<Date> for time::Date {
    type Error = crate::Error;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        let julian_day = value
            .0
            .checked_add(JULIAN_DAY_OF_EPOCH)
            .ok_or(crate::Error::DateTooLarge)?;
        time::Date::from_julian_day(julian_day).map_err(|_| crate::Error::DateTooLarge)
    }
}
#[cfg(feature = "time")]
impl From<time::Date> for Date {
    #[inline]
    fn from(value: time::Date) -> Self {
        Date(value.to_julian_day() - JULIAN_DAY_OF_EPOCH)
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

/// Holiday lookups on foreign date types.
///
/// Each method fails with [`Error::InvalidYear`] when the date lies outside
/// the supported years, and with [`Error::DateTooLarge`] when the value
/// can't be expressed as a [`Date`] at all.
pub trait DateExt {
    /// Calendar day this value falls on.
    fn to_date(&self) -> Result<Date, Error>;

    fn is_holiday(&self) -> Result<bool, Error> {
        crate::is_holiday(self.to_date()?)
    }

    fn holiday_name(
        &self,
        locale: Locale,
    ) -> Result<Option<std::borrow::Cow<'static, str>>, Error> {
        crate::holiday_name(self.to_date()?, locale)
    }

    fn is_work_day(&self) -> Result<bool, Error> {
        crate::query::is_work_day(self.to_date()?)
    }
}

macro_rules! impl_date_ext {
    ($($(#[$attr:meta])* $ty:ty),+ $(,)?) => {
        $(
            $(#[$attr])*
            impl DateExt for $ty {
                #[inline]
                fn to_date(&self) -> Result<Date, Error> {
                    Ok(Date::from(self.clone()))
                }
            }
        )+
    };
}

impl_date_ext! {
    Date,
    #[cfg(feature = "chrono")]
    chrono::NaiveDate,
    #[cfg(feature = "chrono")]
    chrono::DateTime<chrono::Utc>,
    #[cfg(feature = "chrono")]
    chrono::DateTime<chrono::Local>,
    #[cfg(feature = "time")]
    time::Date,
}

impl DateExt for std::time::SystemTime {
    fn to_date(&self) -> Result<Date, Error> {
        Date::try_from(*self)
    }
}
