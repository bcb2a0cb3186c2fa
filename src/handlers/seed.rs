use chrono::{NaiveDate, NaiveTime};
use log::info;
use rand::seq::SliceRandom;
use rand::Rng;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::db::count_employees;
use crate::errors::{AppError, AppResult};
use crate::models::department::Department;
use crate::models::duty_schedule::DutySchedule;
use crate::models::employee::{Employee, EmployeeProfile, ProfileRow};
use crate::utils::dates::weekday_index;
use crate::utils::rng::{employee_rng, RngStream};

pub const EXTERNAL_ID_BASE: i64 = 1000;

const DEPARTMENTS: [(i64, &str); 3] = [(1, "IT"), (2, "Accounting"), (3, "Marketing")];
const FIRST_NAMES: [&str; 5] = ["Ivan", "Peter", "Maria", "Anna", "Sergey"];
const SURNAMES: [&str; 5] = ["Ivanov", "Petrov", "Sidorova", "Kuznetsova", "Smirnov"];
const BIRTH_YEARS: std::ops::RangeInclusive<i32> = 1970..=2005;
const ACTIVE_DRAW: [bool; 3] = [true, true, false];

const WEEKDAY_WORKING_P: f64 = 0.8;
const WEEKEND_WORKING_P: f64 = 0.2;

// Employees per INSERT round. 20 * 7 duty rows * 6 binds stays under SQLite's 999 limit.
const INSERT_CHUNK: usize = 20;

pub const FIXTURE_NAME: &str = "Victor Testov";

/// Birth date of the first seeded employee.
pub fn fixture_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 10, 25).unwrap_or_default()
}

/// The date the first seeded employee is guaranteed to match on.
pub fn fixture_target_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 10, 25).unwrap_or_default()
}

fn shift_window() -> (NaiveTime, NaiveTime) {
    (
        NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
        NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { employees: i64 },
    Skipped { existing: i64 },
}

/// Everything generated for one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEmployee {
    pub employee: Employee,
    pub profile: EmployeeProfile,
    pub schedule: Vec<DutySchedule>,
}

pub fn departments() -> Vec<Department> {
    DEPARTMENTS
        .iter()
        .map(|(id, name)| Department { id: *id, name: name.to_string() })
        .collect()
}

/// Builds employee `index` (1-based) from its own random streams only.
pub fn generate_employee(index: i64, departments: &[Department]) -> GeneratedEmployee {
    let external_id = EXTERNAL_ID_BASE + index;
    let mut profile_rng = employee_rng(external_id, RngStream::Profile);
    let mut duty_rng = employee_rng(external_id, RngStream::Duty);

    let first = FIRST_NAMES.choose(&mut profile_rng).copied().unwrap_or_default();
    let surname = SURNAMES.choose(&mut profile_rng).copied().unwrap_or_default();
    let year = profile_rng.gen_range(BIRTH_YEARS);
    let month = profile_rng.gen_range(1..=12);
    let day = profile_rng.gen_range(1..=28);
    let department_id = departments
        .choose(&mut profile_rng)
        .map(|d| d.id)
        .unwrap_or(DEPARTMENTS[0].0);
    let is_active = ACTIVE_DRAW.choose(&mut profile_rng).copied().unwrap_or(true);

    let mut profile = EmployeeProfile {
        external_id,
        full_name: format!("{} {}", surname, first),
        is_active,
        birth_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
    };
    let mut employee = Employee { id: index, external_id, department_id };

    let fixture_weekday = weekday_index(fixture_target_date());
    let is_fixture = index == 1;
    if is_fixture {
        profile.full_name = FIXTURE_NAME.to_string();
        profile.is_active = true;
        profile.birth_date = fixture_birth_date();
        employee.department_id = DEPARTMENTS[0].0;
    }

    let (shift_start, shift_end) = shift_window();
    let schedule = (0..7)
        .map(|day_of_week| {
            let p = if day_of_week < 5 { WEEKDAY_WORKING_P } else { WEEKEND_WORKING_P };
            let drawn = duty_rng.gen_bool(p);
            DutySchedule {
                id: (index - 1) * 7 + day_of_week + 1,
                employee_id: index,
                day_of_week,
                is_working: drawn || (is_fixture && day_of_week == fixture_weekday),
                shift_start,
                shift_end,
            }
        })
        .collect();

    GeneratedEmployee { employee, profile, schedule }
}

/// Populates an empty store with `target_count` employees. A store that
/// already holds employees is left untouched. The department catalog is
/// inserted only where missing, so a store holding departments but no
/// employees can still be seeded.
pub async fn seed(pool: &SqlitePool, target_count: i64) -> AppResult<SeedOutcome> {
    if target_count < 1 {
        return Err(AppError::config(format!("Employee count must be positive, got {}", target_count)));
    }

    let mut tx = pool.begin().await?;

    let existing = count_employees(&mut *tx).await?;
    if existing > 0 {
        info!("Store already holds {} employees, skipping seeding", existing);
        return Ok(SeedOutcome::Skipped { existing });
    }

    info!("Seeding {} test employees", target_count);

    let departments = departments();
    let mut builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new("INSERT OR IGNORE INTO departments (id, name) ");
    builder.push_values(&departments, |mut b, d| {
        b.push_bind(d.id).push_bind(d.name.clone());
    });
    builder.build().execute(&mut *tx).await?;

    let generated: Vec<GeneratedEmployee> = (1..=target_count)
        .map(|index| generate_employee(index, &departments))
        .collect();

    for chunk in generated.chunks(INSERT_CHUNK) {
        let mut builder: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new("INSERT INTO employees (id, external_id, department_id) ");
        builder.push_values(chunk, |mut b, g| {
            b.push_bind(g.employee.id)
                .push_bind(g.employee.external_id)
                .push_bind(g.employee.department_id);
        });
        builder.build().execute(&mut *tx).await?;

        let rows: Vec<ProfileRow> = chunk.iter().map(|g| ProfileRow::from_profile(&g.profile)).collect();
        let mut builder: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new("INSERT INTO employee_profiles (external_id, full_name, is_active, birth_date) ");
        builder.push_values(rows, |mut b, row| {
            b.push_bind(row.external_id)
                .push_bind(row.full_name)
                .push_bind(row.is_active)
                .push_bind(row.birth_date);
        });
        builder.build().execute(&mut *tx).await?;

        let mut builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new(
            "INSERT INTO duty_schedules (id, employee_id, day_of_week, is_working, shift_start, shift_end) ",
        );
        builder.push_values(chunk.iter().flat_map(|g| g.schedule.iter()), |mut b, s| {
            b.push_bind(s.id)
                .push_bind(s.employee_id)
                .push_bind(s.day_of_week)
                .push_bind(s.is_working)
                .push_bind(s.shift_start)
                .push_bind(s.shift_end);
        });
        builder.build().execute(&mut *tx).await?;
    }

    tx.commit().await?;
    info!("Seeded {} employees across {} departments", target_count, departments.len());
    Ok(SeedOutcome::Seeded { employees: target_count })
}
