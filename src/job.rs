use chrono::NaiveDate;
use log::{debug, info};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::db;
use crate::errors::AppResult;
use crate::handlers::birthday::find_matches;
use crate::handlers::notification::{NotificationMessage, NotificationSink, WebhookPayload};
use crate::handlers::profile_directory::SqliteProfileDirectory;
use crate::handlers::seed::{seed, SeedOutcome};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    pub target_date: NaiveDate,
    pub evaluated: usize,
    pub matched: usize,
}

/// Seeds the store if it is empty, finds today's birthdays and hands one
/// notification per match to `sink`. The store is closed on every exit path.
pub async fn run_job<S: NotificationSink>(config: &Config, sink: &S) -> AppResult<JobSummary> {
    let pool = db::create_pool(&config.database_url).await?;
    let result = run_with_pool(&pool, config, sink).await;
    pool.close().await;
    result
}

async fn run_with_pool<S: NotificationSink>(pool: &SqlitePool, config: &Config, sink: &S) -> AppResult<JobSummary> {
    db::init_schema(pool).await?;
    match seed(pool, config.employee_count).await? {
        SeedOutcome::Seeded { employees } => {
            let departments = db::count_rows(pool, db::Table::Departments).await?;
            debug!("Fresh store with {} employees in {} departments", employees, departments);
        }
        SeedOutcome::Skipped { existing } => debug!("Reusing store with {} employees", existing),
    }

    let target_date = config.resolve_target_date();
    info!("Running birthday check for {}", target_date);

    let directory = SqliteProfileDirectory::new(pool.clone());
    let report = find_matches(pool, &directory, target_date, config.batch_size).await?;

    for m in &report.matches {
        debug!("Notifying employee {} (external id {}, born {})", m.employee_id, m.external_id, m.birth_date);
        let message = NotificationMessage::from(m);
        sink.send(&WebhookPayload::new(&message, &config.notification_channel));
    }

    if report.matches.is_empty() {
        info!("No birthdays to celebrate today");
    }
    info!("Done. Evaluated: {}, congratulated: {}", report.evaluated, report.matches.len());

    Ok(JobSummary {
        target_date,
        evaluated: report.evaluated,
        matched: report.matches.len(),
    })
}
