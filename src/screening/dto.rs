use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::screening::questionnaire::Severity;

/// What the caller gets back after a submission.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisOutcome {
    pub id: i64,
    pub severity: Severity,
    pub label: String,
    pub created_at: OffsetDateTime,
}

/// Answers are stored as a JSON list of 1-based `(index, flag)` pairs,
/// preserving the order the questions were asked in.
pub fn encode_answers(answers: &[bool]) -> Result<String, AppError> {
    let pairs: Vec<(usize, bool)> = answers
        .iter()
        .enumerate()
        .map(|(i, &flag)| (i + 1, flag))
        .collect();
    Ok(serde_json::to_string(&pairs)?)
}

pub fn decode_answers(encoded: &str) -> Result<Vec<(usize, bool)>, AppError> {
    Ok(serde_json::from_str(encoded)?)
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    20
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
        }
    }
}
