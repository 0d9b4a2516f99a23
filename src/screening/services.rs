use tracing::{info, instrument};

use crate::error::AppError;
use crate::screening::dto::{encode_answers, DiagnosisOutcome, Pagination};
use crate::screening::questionnaire::Questionnaire;
use crate::screening::repo_types::Diagnosis;
use crate::state::AppState;

/// Score an answer sheet and record the outcome for the user.
///
/// One write total; a storage failure propagates to the caller.
#[instrument(skip(state, answers))]
pub async fn diagnose(
    state: &AppState,
    user_id: i64,
    answers: &[bool],
) -> Result<DiagnosisOutcome, AppError> {
    let questionnaire = Questionnaire::standard();
    let severity = questionnaire.evaluate(answers)?;
    let encoded = encode_answers(answers)?;

    let record = Diagnosis::create(&state.db, user_id, &encoded, &severity.to_string()).await?;

    info!(
        user_id,
        diagnosis_id = record.id,
        result = %severity,
        "diagnosis recorded"
    );
    Ok(DiagnosisOutcome {
        id: record.id,
        severity,
        label: severity.to_string(),
        created_at: record.created_at,
    })
}

/// A user's diagnosis history, newest first.
#[instrument(skip(state))]
pub async fn history(
    state: &AppState,
    user_id: i64,
    page: Pagination,
) -> Result<Vec<Diagnosis>, AppError> {
    Diagnosis::list_by_user(&state.db, user_id, page.limit, page.offset).await
}
