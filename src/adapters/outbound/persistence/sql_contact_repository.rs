use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    Row, SqlitePool,
    sqlite::{SqlitePoolOptions, SqliteRow},
};
use uuid::Uuid;

use crate::{
    domain::{
        errors::{SubmissionError, SubmissionResult},
        models::ContactSubmission,
        value_objects::EmailAddress,
    },
    ports::repositories::ContactRepository,
};

/// SQL-based implementation of ContactRepository using SQLite
#[derive(Clone)]
pub struct SqlContactRepository {
    pool: SqlitePool,
}

impl SqlContactRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `url`; an in-memory database is pinned to one connection
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let max_connections = if url.contains(":memory:") { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Initialize database tables
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contact_submissions (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                service TEXT NOT NULL,
                message TEXT NOT NULL,
                submitted_at TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'new'
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_contact_submissions_submitted_at \
             ON contact_submissions(submitted_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn db_error(context: &str, e: sqlx::Error) -> SubmissionError {
    SubmissionError::persistence(format!("{}: {}", context, e))
}

fn row_to_submission(row: &SqliteRow) -> SubmissionResult<ContactSubmission> {
    let id: String = row.try_get("id").map_err(|e| db_error("reading id", e))?;
    let email: String = row.try_get("email").map_err(|e| db_error("reading email", e))?;
    let service: String = row
        .try_get("service")
        .map_err(|e| db_error("reading service", e))?;
    let status: String = row
        .try_get("status")
        .map_err(|e| db_error("reading status", e))?;
    let submitted_at: DateTime<Utc> = row
        .try_get("submitted_at")
        .map_err(|e| db_error("reading submitted_at", e))?;

    Ok(ContactSubmission {
        id: Uuid::parse_str(&id).map_err(SubmissionError::persistence)?,
        name: row.try_get("name").map_err(|e| db_error("reading name", e))?,
        email: EmailAddress::new(email).map_err(SubmissionError::persistence)?,
        service: service.parse().map_err(SubmissionError::persistence)?,
        message: row
            .try_get("message")
            .map_err(|e| db_error("reading message", e))?,
        submitted_at,
        status: status.parse().map_err(SubmissionError::persistence)?,
    })
}

#[async_trait]
impl ContactRepository for SqlContactRepository {
    async fn save(&self, submission: &ContactSubmission) -> SubmissionResult<()> {
        sqlx::query(
            r#"
            INSERT INTO contact_submissions (
                id, name, email, service, message, submitted_at, status
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(submission.id.to_string())
        .bind(&submission.name)
        .bind(submission.email.as_str())
        .bind(submission.service.as_str())
        .bind(&submission.message)
        .bind(submission.submitted_at)
        .bind(submission.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Database error storing submission", e))?;

        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> SubmissionResult<Vec<ContactSubmission>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, service, message, submitted_at, status
            FROM contact_submissions
            ORDER BY rowid DESC
            LIMIT ?
            "#,
        )
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Database error listing submissions", e))?;

        rows.iter().map(row_to_submission).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{models::ContactDraft, value_objects::ServiceKey};

    async fn repository() -> SqlContactRepository {
        let repo = SqlContactRepository::connect("sqlite::memory:").await.unwrap();
        repo.migrate().await.unwrap();
        repo
    }

    fn record(name: &str, service: &str) -> ContactSubmission {
        let draft = ContactDraft::builder()
            .name(name)
            .email("guest@example.com")
            .service(service)
            .message("When are classes?")
            .build();
        ContactSubmission::from_new(draft.validate().unwrap())
    }

    #[tokio::test]
    async fn test_save_and_list() {
        let repo = repository().await;
        let saved = record("Sarah", "prenatal-yoga");
        repo.save(&saved).await.unwrap();

        let listed = repo.list_recent(10).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, saved.id);
        assert_eq!(listed[0].service, ServiceKey::PrenatalYoga);
        assert_eq!(listed[0].email.as_str(), "guest@example.com");
        assert_eq!(listed[0].submitted_at, saved.submitted_at);
    }

    #[tokio::test]
    async fn test_newest_first_with_limit() {
        let repo = repository().await;
        for name in ["one", "two", "three"] {
            repo.save(&record(name, "sound-healing")).await.unwrap();
        }

        let names: Vec<_> = repo
            .list_recent(2)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["three", "two"]);
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let repo = repository().await;
        assert!(repo.migrate().await.is_ok());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_a_persistence_error() {
        let repo = repository().await;
        let saved = record("Dup", "online-sessions");
        repo.save(&saved).await.unwrap();

        let err = repo.save(&saved).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Persistence { .. }));
    }
}
