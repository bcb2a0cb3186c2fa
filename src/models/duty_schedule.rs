use chrono::NaiveTime;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DutySchedule {
    pub id: i64,
    pub employee_id: i64,
    /// Monday = 0 .. Sunday = 6
    pub day_of_week: i64,
    pub is_working: bool,
    pub shift_start: NaiveTime,
    pub shift_end: NaiveTime,
}
