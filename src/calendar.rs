use tracing::{debug, debug_span};

use crate::rules::RULES;
use crate::{check_year, citizens, special, substitute, Error, Holiday};

/// All national holidays of `year`, in ascending date order.
///
/// The set is recomputed on every call: statutory rules, then special
/// occasions, then substitute holidays, then citizens' holidays.
pub fn holidays(year: i32) -> Result<Vec<Holiday>, Error> {
    check_year(year)?;
    let _span = debug_span!("holidays", year).entered();

    let mut statutory = Vec::with_capacity(24);
    for rule in RULES.iter() {
        statutory.extend(rule(year)?);
    }

    let with_special = special::with_special_occasions(year, statutory);
    let with_substitutes = substitute::with_substitutes(year, with_special)?;
    let mut holidays = citizens::with_citizens_holidays(year, with_substitutes);
    holidays.sort_by_key(|it| it.date);

    debug!(count = holidays.len(), "computed holidays");
    Ok(holidays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::{Date, Weekday};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    fn find(holidays: &[Holiday], date: Date) -> Option<&Holiday> {
        holidays.iter().find(|it| it.date == date)
    }

    #[test]
    fn holidays_of_2025() {
        let holidays = holidays(2025).unwrap();
        assert_eq!(holidays.len(), 19);
        assert_eq!(holidays[0].date, date(2025, 1, 1));
        assert_eq!(holidays[0].name_ja, "元日");
        assert_eq!(holidays[0].name_en, "New Year's Day");

        let substitutes: Vec<Date> = holidays
            .iter()
            .filter(|it| it.name_en.ends_with("(Substitute Holiday)"))
            .map(|it| it.date)
            .collect();
        assert_eq!(
            substitutes,
            vec![date(2025, 2, 24), date(2025, 5, 6), date(2025, 11, 24)]
        );
    }

    #[test]
    fn holidays_of_2019() {
        let holidays = holidays(2019).unwrap();
        assert_eq!(holidays.len(), 22);
        assert_eq!(find(&holidays, date(2019, 4, 29)).unwrap().name_en, "Showa Day");
        assert_eq!(find(&holidays, date(2019, 4, 30)).unwrap().name_en, "Citizens' Holiday");
        assert_eq!(find(&holidays, date(2019, 5, 1)).unwrap().name_en, "Enthronement Day");
        assert_eq!(find(&holidays, date(2019, 5, 2)).unwrap().name_en, "Citizens' Holiday");
        assert_eq!(
            find(&holidays, date(2019, 5, 6)).unwrap().name_en,
            "Children's Day (Substitute Holiday)"
        );
        assert_eq!(
            find(&holidays, date(2019, 10, 22)).unwrap().name_en,
            "Ceremony of the Enthronement of the Emperor"
        );
        assert!(find(&holidays, date(2019, 12, 23)).is_none());
    }

    #[test]
    fn olympic_year_2020() {
        let holidays = holidays(2020).unwrap();
        assert_eq!(find(&holidays, date(2020, 7, 23)).unwrap().name_en, "Marine Day");
        assert_eq!(find(&holidays, date(2020, 7, 24)).unwrap().name_en, "Sports Day");
        assert_eq!(find(&holidays, date(2020, 8, 10)).unwrap().name_en, "Mountain Day");
        assert!(find(&holidays, date(2020, 10, 12)).is_none());
        assert!(find(&holidays, date(2020, 8, 11)).is_none());
        assert_eq!(
            find(&holidays, date(2020, 5, 6)).unwrap().name_ja,
            "憲法記念日の振替休日"
        );
    }

    #[test]
    fn silver_week() {
        for year in [2009, 2015, 2026] {
            let holidays = holidays(year).unwrap();
            let gap = find(&holidays, date(year, 9, 22)).unwrap();
            assert_eq!(gap.name_ja, "国民の休日", "{year}");
        }
    }

    #[test]
    fn first_and_last_supported_years() {
        let first: Vec<Date> = holidays(1948).unwrap().iter().map(|it| it.date).collect();
        assert_eq!(first, vec![date(1948, 9, 23), date(1948, 11, 3), date(1948, 11, 23)]);
        assert_eq!(holidays(2150).unwrap().len(), 18);
    }

    #[test]
    fn rejects_unsupported_years() {
        assert_eq!(holidays(1947), Err(Error::InvalidYear(1947)));
        assert_eq!(holidays(2151), Err(Error::InvalidYear(2151)));
        assert_eq!(holidays(-1), Err(Error::InvalidYear(-1)));
    }

    #[test]
    fn every_year_is_sorted_and_unique() {
        for year in crate::MIN_YEAR..=crate::MAX_YEAR {
            let holidays = holidays(year).unwrap();
            assert!(
                holidays.windows(2).all(|pair| pair[0].date < pair[1].date),
                "{year}"
            );
            for holiday in &holidays {
                assert_eq!(holiday.date.year(), year);
                if holiday.name_en == citizens::NAME_EN {
                    assert_ne!(holiday.date.weekday(), Weekday::Sunday);
                }
            }
        }
    }
}
