//! Approximate equinox dates.
//!
//! The day of month is `floor(C + 0.242194 * (y - 1980) - floor((y - 1980) / 4))`
//! with a base constant `C` that depends on the era of the year.

use crate::date::Date;
use crate::Error;

const BASE_YEAR: i32 = 1980;
const DRIFT_PER_YEAR: f64 = 0.242194;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Equinox {
    Vernal,
    Autumnal,
}

struct Band {
    first: i32,
    last: i32,
    base: f64,
}

static VERNAL_BANDS: [Band; 4] = [
    Band { first: 1851, last: 1899, base: 19.8277 },
    Band { first: 1900, last: 1979, base: 20.8357 },
    Band { first: 1980, last: 2099, base: 20.8431 },
    Band { first: 2100, last: i32::MAX, base: 21.851 },
];

static AUTUMNAL_BANDS: [Band; 4] = [
    Band { first: 1851, last: 1899, base: 22.2588 },
    Band { first: 1900, last: 1979, base: 23.2588 },
    Band { first: 1980, last: 2099, base: 23.2488 },
    Band { first: 2100, last: i32::MAX, base: 24.2488 },
];

impl Equinox {
    pub(crate) const fn month(self) -> u32 {
        match self {
            Equinox::Vernal => 3,
            Equinox::Autumnal => 9,
        }
    }

    fn bands(self) -> &'static [Band] {
        match self {
            Equinox::Vernal => &VERNAL_BANDS,
            Equinox::Autumnal => &AUTUMNAL_BANDS,
        }
    }
}

/// Day of month of the equinox in `year`.
pub(crate) fn equinox_day(year: i32, equinox: Equinox) -> Result<u32, Error> {
    let band = equinox
        .bands()
        .iter()
        .find(|band| (band.first..=band.last).contains(&year))
        .ok_or(Error::InternalConsistency("no equinox coefficients for year"))?;

    let elapsed = year - BASE_YEAR;
    let day = band.base + DRIFT_PER_YEAR * elapsed as f64 - elapsed.div_euclid(4) as f64;
    Ok(day.floor() as u32)
}

pub(crate) fn equinox_date(year: i32, equinox: Equinox) -> Result<Date, Error> {
    let day = equinox_day(year, equinox)?;
    Ok(Date::from_ymd(year, equinox.month(), day))
}
