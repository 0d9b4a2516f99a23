use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::screening::dto::decode_answers;

/// Diagnosis record in the database. Written once per submission,
/// never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Diagnosis {
    pub id: i64,
    pub user_id: i64,
    pub symptom_answers: String, // JSON list of (index, flag) pairs
    pub result: String,
    pub created_at: OffsetDateTime,
}

impl Diagnosis {
    /// The answer sheet this record was built from, in question order.
    pub fn answers(&self) -> Result<Vec<(usize, bool)>, AppError> {
        decode_answers(&self.symptom_answers)
    }
}
