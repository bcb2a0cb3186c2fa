use chrono::{Local, NaiveDate};
use std::env;
use std::str::FromStr;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::handlers::birthday::DEFAULT_BATCH_SIZE;
use crate::utils::dates::parse_date;
use crate::utils::validation::{validate_log_level, validate_payload};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://birthdays.db";
pub const DEFAULT_EMPLOYEE_COUNT: i64 = 100;
pub const DEFAULT_CHANNEL: &str = "#general_test";

#[derive(Debug, Clone, Validate)]
pub struct Config {
    #[validate(length(min = 1))]
    pub database_url: String,
    #[validate(range(min = 1, max = 100000))]
    pub employee_count: i64,
    /// `None` means today.
    pub target_date: Option<NaiveDate>,
    #[validate(custom = "validate_log_level")]
    pub log_level: String,
    #[validate(length(min = 1))]
    pub notification_channel: String,
    #[validate(range(min = 1, max = 10000))]
    pub batch_size: i64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            employee_count: DEFAULT_EMPLOYEE_COUNT,
            target_date: None,
            log_level: "info".to_string(),
            notification_channel: DEFAULT_CHANNEL.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_source(|key| env::var(key).ok())
    }

    pub fn from_source<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let target_date = match non_empty(lookup("TARGET_DATE")) {
            Some(raw) => Some(
                parse_date(&raw).map_err(|err| AppError::config(format!("TARGET_DATE {:?}: {}", raw, err)))?,
            ),
            None => None,
        };

        let config = Config {
            database_url: non_empty(lookup("DATABASE_URL")).unwrap_or(defaults.database_url),
            employee_count: parse_or("EMPLOYEE_COUNT", lookup("EMPLOYEE_COUNT"), defaults.employee_count)?,
            target_date,
            log_level: non_empty(lookup("LOG_LEVEL")).unwrap_or(defaults.log_level),
            notification_channel: non_empty(lookup("NOTIFICATION_CHANNEL")).unwrap_or(defaults.notification_channel),
            batch_size: parse_or("MATCH_BATCH_SIZE", lookup("MATCH_BATCH_SIZE"), defaults.batch_size)?,
        };

        validate_payload(&config)?;
        Ok(config)
    }

    /// Positional `YYYY-MM-DD` from the command line wins over `TARGET_DATE`.
    pub fn with_date_arg(mut self, arg: Option<String>) -> AppResult<Self> {
        if let Some(raw) = non_empty(arg) {
            let date = parse_date(&raw).map_err(|err| AppError::config(format!("Target date {:?}: {}", raw, err)))?;
            self.target_date = Some(date);
        }
        Ok(self)
    }

    pub fn resolve_target_date(&self) -> NaiveDate {
        self.target_date.unwrap_or_else(|| Local::now().date_naive())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> AppResult<T>
where
    T::Err: std::fmt::Display,
{
    match non_empty(value) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|err| AppError::config(format!("{} {:?}: {}", key, raw, err))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppResult<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.employee_count, 100);
        assert_eq!(config.target_date, None);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.notification_channel, "#general_test");
        assert_eq!(config.batch_size, 50);
    }

    #[test]
    fn reads_every_option() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("EMPLOYEE_COUNT", "250"),
            ("TARGET_DATE", "2023-10-25"),
            ("LOG_LEVEL", "debug"),
            ("NOTIFICATION_CHANNEL", "#birthdays"),
            ("MATCH_BATCH_SIZE", "10"),
        ])
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.employee_count, 250);
        assert_eq!(config.target_date, NaiveDate::from_ymd_opt(2023, 10, 25));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.notification_channel, "#birthdays");
        assert_eq!(config.batch_size, 10);
    }

    #[test]
    fn blank_target_date_means_today() {
        let config = config_from(&[("TARGET_DATE", "  ")]).unwrap();
        assert_eq!(config.target_date, None);
        assert_eq!(config.resolve_target_date(), Local::now().date_naive());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(config_from(&[("TARGET_DATE", "2023-02-30")]), Err(AppError::Config(_))));
        assert!(matches!(config_from(&[("EMPLOYEE_COUNT", "lots")]), Err(AppError::Config(_))));
        assert!(matches!(config_from(&[("EMPLOYEE_COUNT", "0")]), Err(AppError::Config(_))));
        assert!(matches!(config_from(&[("MATCH_BATCH_SIZE", "-5")]), Err(AppError::Config(_))));
        assert!(matches!(config_from(&[("LOG_LEVEL", "loud")]), Err(AppError::Config(_))));
    }

    #[test]
    fn date_argument_overrides_env() {
        let config = config_from(&[("TARGET_DATE", "2023-10-25")])
            .unwrap()
            .with_date_arg(Some("2024-02-29".to_string()))
            .unwrap();
        assert_eq!(config.target_date, NaiveDate::from_ymd_opt(2024, 2, 29));

        let unchanged = config.clone().with_date_arg(None).unwrap();
        assert_eq!(unchanged.target_date, config.target_date);

        assert!(config.with_date_arg(Some("tomorrow".to_string())).is_err());
    }
}
