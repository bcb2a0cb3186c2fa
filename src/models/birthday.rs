use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BirthdayMatch {
    pub employee_id: i64,
    pub external_id: i64,
    pub full_name: String,
    pub department_name: String,
    pub birth_date: NaiveDate,
    pub age: i32,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub evaluated: usize,
    pub matches: Vec<BirthdayMatch>,
}
