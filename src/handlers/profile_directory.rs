use sqlx::SqlitePool;

use crate::errors::{AppError, AppResult};
use crate::models::employee::{EmployeeProfile, ProfileRow};
use crate::utils::dates::parse_date;

/// Source of employee details keyed by external id, standing in for the HR system.
///
/// `Ok(None)` means the HR system has no profile for that id. A stored birth date
/// that cannot be read comes back as [`AppError::MalformedDate`].
#[allow(async_fn_in_trait)]
pub trait ProfileDirectory {
    async fn lookup(&self, external_id: i64) -> AppResult<Option<EmployeeProfile>>;
}

pub struct SqliteProfileDirectory {
    pool: SqlitePool,
}

impl SqliteProfileDirectory {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteProfileDirectory { pool }
    }
}

impl ProfileDirectory for SqliteProfileDirectory {
    async fn lookup(&self, external_id: i64) -> AppResult<Option<EmployeeProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT external_id, full_name, is_active, birth_date FROM employee_profiles WHERE external_id = ?",
        )
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let birth_date = parse_date(&row.birth_date).map_err(|_| AppError::MalformedDate {
            external_id,
            value: row.birth_date.clone(),
        })?;

        Ok(Some(EmployeeProfile {
            external_id: row.external_id,
            full_name: row.full_name,
            is_active: row.is_active,
            birth_date,
        }))
    }
}
