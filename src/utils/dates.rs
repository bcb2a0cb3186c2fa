use chrono::{Datelike, NaiveDate};

/// Monday = 0 .. Sunday = 6, matching `duty_schedules.day_of_week`.
pub fn weekday_index(date: NaiveDate) -> i64 {
    i64::from(date.weekday().num_days_from_monday())
}

/// Year is ignored; only month and day take part in the match.
pub fn same_month_day(birth_date: NaiveDate, target: NaiveDate) -> bool {
    birth_date.month() == target.month() && birth_date.day() == target.day()
}

/// Plain year delta. Exact for same-day matches; an "upcoming birthdays"
/// window would have to subtract one when the birthday is still ahead.
pub fn age_on(birth_date: NaiveDate, target: NaiveDate) -> i32 {
    target.year() - birth_date.year()
}

pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekday_index_starts_on_monday() {
        assert_eq!(weekday_index(date(2023, 10, 23)), 0);
        assert_eq!(weekday_index(date(2023, 10, 25)), 2);
        assert_eq!(weekday_index(date(2023, 10, 29)), 6);
    }

    #[test]
    fn month_day_match_ignores_year() {
        assert!(same_month_day(date(1990, 10, 25), date(2023, 10, 25)));
        assert!(!same_month_day(date(1990, 10, 25), date(2023, 10, 26)));
        assert!(!same_month_day(date(1990, 11, 25), date(2023, 10, 25)));
        assert!(same_month_day(date(2000, 2, 29), date(2024, 2, 29)));
    }

    #[test]
    fn age_is_year_delta() {
        assert_eq!(age_on(date(1990, 10, 25), date(2023, 10, 25)), 33);
        assert_eq!(age_on(date(2000, 2, 29), date(2024, 2, 29)), 24);
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert_eq!(parse_date("1990-10-25").unwrap(), date(1990, 10, 25));
        assert!(parse_date("1990-13-01").is_err());
        assert!(parse_date("25.10.1990").is_err());
        assert!(parse_date("").is_err());
    }
}
