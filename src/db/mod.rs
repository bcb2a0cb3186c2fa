use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Executor, Sqlite, SqlitePool};
use std::str::FromStr;
use log::debug;

use crate::errors::AppResult;

const SCHEMA: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS departments (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY,
        external_id INTEGER NOT NULL UNIQUE,
        department_id INTEGER NOT NULL REFERENCES departments(id)
    )",
    // Stand-in for the external HR system, keyed by external id
    "CREATE TABLE IF NOT EXISTS employee_profiles (
        external_id INTEGER PRIMARY KEY,
        full_name TEXT NOT NULL,
        is_active INTEGER NOT NULL,
        birth_date TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS duty_schedules (
        id INTEGER PRIMARY KEY,
        employee_id INTEGER NOT NULL REFERENCES employees(id),
        day_of_week INTEGER NOT NULL CHECK (day_of_week BETWEEN 0 AND 6),
        is_working INTEGER NOT NULL,
        shift_start TEXT NOT NULL,
        shift_end TEXT NOT NULL,
        UNIQUE (employee_id, day_of_week)
    )",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Departments,
    Employees,
    EmployeeProfiles,
    DutySchedules,
}

impl Table {
    #[cfg(test)]
    pub const ALL: [Table; 4] = [Table::Departments, Table::Employees, Table::EmployeeProfiles, Table::DutySchedules];

    pub fn name(self) -> &'static str {
        match self {
            Table::Departments => "departments",
            Table::Employees => "employees",
            Table::EmployeeProfiles => "employee_profiles",
            Table::DutySchedules => "duty_schedules",
        }
    }
}

/// Opens the job's store. One connection: the job runs as a single exclusive process.
pub async fn create_pool(database_url: &str) -> AppResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    debug!("Connected to {}", database_url);
    Ok(pool)
}

/// Safe to call against an already-seeded store.
pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

pub async fn count_rows<'e, E>(executor: E, table: Table) -> AppResult<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table.name()))
        .fetch_one(executor)
        .await?;
    Ok(count)
}

/// Row-count probe used to decide whether the store needs seeding.
pub async fn count_employees<'e, E>(executor: E) -> AppResult<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    count_rows(executor, Table::Employees).await
}

#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    init_schema(&pool).await.unwrap();
    pool
}
