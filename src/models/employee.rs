use chrono::NaiveDate;
use serde::Serialize;

/// Internal roster row. Personal details live in the HR profile, keyed by `external_id`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub external_id: i64,
    pub department_id: i64,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EmployeeProfile {
    pub external_id: i64,
    pub full_name: String,
    pub is_active: bool,
    pub birth_date: NaiveDate,
}

/// Profile as stored; the birth date is kept as `YYYY-MM-DD` text.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ProfileRow {
    pub external_id: i64,
    pub full_name: String,
    pub is_active: bool,
    pub birth_date: String,
}

impl ProfileRow {
    pub fn from_profile(profile: &EmployeeProfile) -> Self {
        ProfileRow {
            external_id: profile.external_id,
            full_name: profile.full_name.clone(),
            is_active: profile.is_active,
            birth_date: profile.birth_date.format("%Y-%m-%d").to_string(),
        }
    }
}
