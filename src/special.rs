use crate::date::Date;
use crate::Holiday;

/// One-off holiday declared for an imperial ceremony.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SpecialOccasion {
    pub(crate) date: Date,
    pub(crate) name_ja: &'static str,
    pub(crate) name_en: &'static str,
}

// Generated by build.rs from special_occasions.csv, keyed by year.
include!(concat!(env!("OUT_DIR"), "/special_occasions.rs"));

pub(crate) fn special_occasion(year: i32) -> Option<Holiday> {
    SPECIAL_OCCASIONS
        .get(&year)
        .map(|it| Holiday::new(it.date, it.name_ja, it.name_en))
}

pub(crate) fn with_special_occasions(year: i32, mut holidays: Vec<Holiday>) -> Vec<Holiday> {
    holidays.extend(special_occasion(year));
    holidays
}
