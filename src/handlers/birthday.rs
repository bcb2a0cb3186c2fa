use chrono::NaiveDate;
use log::{debug, info, warn};
use sqlx::SqlitePool;

use crate::errors::{AppError, AppResult};
use crate::handlers::profile_directory::ProfileDirectory;
use crate::models::birthday::{BirthdayMatch, MatchReport};
use crate::utils::dates::{age_on, same_month_day, weekday_index};

pub const DEFAULT_BATCH_SIZE: i64 = 50;

#[derive(sqlx::FromRow, Debug)]
struct RosterRow {
    id: i64,
    external_id: i64,
    department_name: String,
    is_working: bool,
}

async fn fetch_page(pool: &SqlitePool, weekday: i64, after_id: i64, page_size: i64) -> AppResult<Vec<RosterRow>> {
    let rows = sqlx::query_as::<_, RosterRow>(
        "SELECT e.id, e.external_id, d.name AS department_name, COALESCE(s.is_working, 0) AS is_working
         FROM employees e
         JOIN departments d ON d.id = e.department_id
         LEFT JOIN duty_schedules s ON s.employee_id = e.id AND s.day_of_week = ?
         WHERE e.id > ?
         ORDER BY e.id
         LIMIT ?",
    )
    .bind(weekday)
    .bind(after_id)
    .bind(page_size)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Active employees rostered on `target_date` whose birthday falls on it,
/// in employee id order.
///
/// The roster is read in pages of `page_size` rows. Any storage failure aborts
/// the whole run; a partial report is never returned.
pub async fn find_matches<D: ProfileDirectory>(
    pool: &SqlitePool,
    directory: &D,
    target_date: NaiveDate,
    page_size: i64,
) -> AppResult<MatchReport> {
    let weekday = weekday_index(target_date);
    let page_size = page_size.max(1);
    let mut report = MatchReport::default();
    let mut after_id = 0;

    info!("Looking for birthdays on {} (weekday {})", target_date, weekday);

    loop {
        let page = fetch_page(pool, weekday, after_id, page_size).await?;
        let Some(last) = page.last() else {
            break;
        };
        after_id = last.id;
        debug!("Evaluating page of {} employees up to id {}", page.len(), after_id);

        for row in page {
            report.evaluated += 1;
            if !row.is_working {
                continue;
            }

            let profile = match directory.lookup(row.external_id).await {
                Ok(Some(profile)) => profile,
                Ok(None) => continue,
                Err(AppError::MalformedDate { external_id, value }) => {
                    warn!("Skipping employee {}: malformed birth date {:?}", external_id, value);
                    continue;
                }
                Err(err) => return Err(err),
            };

            if !profile.is_active || !same_month_day(profile.birth_date, target_date) {
                continue;
            }

            let age = age_on(profile.birth_date, target_date);
            info!("Birthday: {} ({}), turning {}", profile.full_name, row.department_name, age);
            report.matches.push(BirthdayMatch {
                employee_id: row.id,
                external_id: row.external_id,
                full_name: profile.full_name,
                department_name: row.department_name,
                birth_date: profile.birth_date,
                age,
            });
        }
    }

    Ok(report)
}
