use time::OffsetDateTime;

use crate::db::SqlitePool;
use crate::error::AppError;
use crate::screening::repo_types::Diagnosis;

impl Diagnosis {
    /// Persist one submission. `created_at` is bound explicitly so the
    /// returned row round-trips without relying on the column default.
    pub async fn create(
        db: &SqlitePool,
        user_id: i64,
        symptom_answers: &str,
        result: &str,
    ) -> Result<Diagnosis, AppError> {
        let diagnosis = sqlx::query_as::<_, Diagnosis>(
            r#"
            INSERT INTO diagnoses (user_id, symptom_answers, result, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, user_id, symptom_answers, result, created_at
            "#,
        )
        .bind(user_id)
        .bind(symptom_answers)
        .bind(result)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(db)
        .await?;
        Ok(diagnosis)
    }

    /// A user's past diagnoses, newest first.
    pub async fn list_by_user(
        db: &SqlitePool,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Diagnosis>, AppError> {
        let rows = sqlx::query_as::<_, Diagnosis>(
            r#"
            SELECT id, user_id, symptom_answers, result, created_at
            FROM diagnoses
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
