//! Japanese national holidays (国民の祝日) computed from the succession of
//! holiday laws since 1948.
//!
//! Every year is derived from scratch: the statutory rules for the year are
//! evaluated, one-off imperial ceremonies are added, and then substitute
//! holidays (振替休日) and citizens' holidays (国民の休日) are derived from the
//! assembled set.
//!
//! ```
//! use jp_holidays::{Date, Locale};
//!
//! let new_year = Date::from_ymd_opt(2025, 1, 1).unwrap();
//! assert!(jp_holidays::is_holiday(new_year).unwrap());
//! assert_eq!(
//!     jp_holidays::holiday_name(new_year, Locale::En).unwrap().as_deref(),
//!     Some("New Year's Day")
//! );
//! ```

mod calendar;
mod citizens;
mod date;
mod equinox;
pub mod query;
mod rules;
mod special;
mod substitute;

use std::borrow::Cow;

use phf::phf_map;

pub use calendar::holidays;
pub use date::{Date, DateExt, Weekday};
pub use query::{count_work_days, holidays_between, holidays_in, is_work_day};

/// First year holidays can be computed for.
pub const MIN_YEAR: i32 = 1948;
/// Last year holidays can be computed for.
pub const MAX_YEAR: i32 = 2150;

/// Represents a holiday.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Holiday {
    /// Date of holiday.
    pub date: Date,
    /// Japanese name of holiday.
    pub name_ja: Cow<'static, str>,
    /// English name of holiday.
    pub name_en: Cow<'static, str>,
}

impl Holiday {
    pub(crate) const fn new(date: Date, name_ja: &'static str, name_en: &'static str) -> Self {
        Holiday {
            date,
            name_ja: Cow::Borrowed(name_ja),
            name_en: Cow::Borrowed(name_en),
        }
    }

    /// Name of holiday in the requested language.
    pub fn name(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ja => &self.name_ja,
            Locale::En => &self.name_en,
        }
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.date, self.name_ja, self.name_en)
    }
}

/// Language of holiday names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Ja,
    En,
}

static LOCALES: phf::Map<&'static str, Locale> = phf_map! {
    "ja" => Locale::Ja,
    "en" => Locale::En,
};

impl std::str::FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LOCALES.get(s).copied().ok_or(Error::UnsupportedLocale)
    }
}

/// Whether `date` is a national holiday.
pub fn is_holiday(date: impl Into<Date>) -> Result<bool, Error> {
    let date = date.into();
    Ok(holidays(date.year())?.iter().any(|it| it.date == date))
}

/// Name of the holiday on `date`, or `None` on an ordinary day.
pub fn holiday_name(
    date: impl Into<Date>,
    locale: Locale,
) -> Result<Option<Cow<'static, str>>, Error> {
    let date = date.into();
    Ok(holidays(date.year())?
        .into_iter()
        .find(|it| it.date == date)
        .map(|it| match locale {
            Locale::Ja => it.name_ja,
            Locale::En => it.name_en,
        }))
}

pub(crate) fn check_year(year: i32) -> Result<(), Error> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(Error::InvalidYear(year))
    }
}

/// Error states the holiday crate might encounter.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Holidays are not available for this year.
    #[error(
        "year {0} is outside the supported range {min}..={max}",
        min = MIN_YEAR,
        max = MAX_YEAR
    )]
    InvalidYear(i32),
    /// A holiday table produced a result the rules can't place.
    #[error("internal consistency error: {0}")]
    InternalConsistency(&'static str),
    /// Year, month and day don't name a calendar day.
    #[error("invalid date")]
    InvalidDate,
    /// Only `ja` and `en` names are available.
    #[error("unsupported locale")]
    UnsupportedLocale,
    /// Conversion to another date format is not supported.
    #[error("Date is too large for conversion")]
    DateTooLarge,
}
