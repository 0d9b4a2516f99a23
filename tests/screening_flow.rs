use mindcheck::accounts::{LoginRequest, RegisterRequest};
use mindcheck::screening::Pagination;
use mindcheck::{App, AppError, AppState};

async fn signed_in_app() -> (App, mindcheck::Session, i64) {
    let state = AppState::in_memory().await.expect("in-memory state");
    let app = App::with_state(state);
    let mut session = app.session();
    app.register(
        &mut session,
        RegisterRequest {
            username: "alice".into(),
            email: "a@x.com".into(),
            password: "pw123".into(),
            confirm_password: "pw123".into(),
        },
    )
    .await
    .expect("registration should succeed");
    let user = app
        .login(
            &mut session,
            LoginRequest {
                username: "alice".into(),
                password: "pw123".into(),
            },
        )
        .await
        .expect("login should succeed");
    (app, session, user.id)
}

#[tokio::test]
async fn all_yes_answers_persist_a_severe_diagnosis() {
    let (app, session, user_id) = signed_in_app().await;

    let outcome = app
        .submit_answers(&session, &[true; 8])
        .await
        .expect("submission should succeed");
    assert_eq!(outcome.label, "Severe depression");

    let history = app
        .history(&session, Pagination::default())
        .await
        .expect("history should succeed");
    assert_eq!(history.len(), 1);
    let record = &history[0];
    assert_eq!(record.id, outcome.id);
    assert_eq!(record.user_id, user_id);
    assert_eq!(record.result, "Severe depression");
    assert_eq!(record.created_at, outcome.created_at);

    let answers = record.answers().expect("stored answers should decode");
    assert_eq!(answers.len(), 8);
    assert!(answers.iter().all(|&(_, yes)| yes));
    assert_eq!(answers[0].0, 1);
}

#[tokio::test]
async fn submission_is_deterministic_for_a_fixed_sheet() {
    let (app, session, _) = signed_in_app().await;
    let sheet = [true, false, true, true, false, false, true, false];

    let first = app
        .submit_answers(&session, &sheet)
        .await
        .expect("first submission");
    let second = app
        .submit_answers(&session, &sheet)
        .await
        .expect("second submission");
    assert_eq!(first.label, second.label);
    assert_eq!(first.label, "Moderate depression");
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn anonymous_sessions_cannot_submit_or_browse() {
    let state = AppState::in_memory().await.expect("in-memory state");
    let app = App::with_state(state);
    let session = app.session();

    let err = app.submit_answers(&session, &[true; 8]).await.unwrap_err();
    assert!(matches!(err, AppError::Authentication));

    let err = app
        .history(&session, Pagination::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Authentication));
}

#[tokio::test]
async fn incomplete_answer_sheets_are_rejected_unwritten() {
    let (app, session, _) = signed_in_app().await;

    let err = app.submit_answers(&session, &[true; 5]).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM diagnoses")
        .fetch_one(&app.state().db)
        .await
        .expect("count");
    assert_eq!(count, 0);
}

#[tokio::test]
async fn history_lists_newest_first_with_pagination() {
    let (app, session, _) = signed_in_app().await;

    let severe = app
        .submit_answers(&session, &[true; 8])
        .await
        .expect("severe submission");
    let clear = app
        .submit_answers(&session, &[false; 8])
        .await
        .expect("clear submission");

    let history = app
        .history(&session, Pagination::default())
        .await
        .expect("history");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, clear.id);
    assert_eq!(history[0].result, "No depression");
    assert_eq!(history[1].id, severe.id);
    assert_eq!(history[1].result, "Severe depression");

    let newest_only = app
        .history(
            &session,
            Pagination {
                limit: 1,
                offset: 0,
            },
        )
        .await
        .expect("paged history");
    assert_eq!(newest_only.len(), 1);
    assert_eq!(newest_only[0].id, clear.id);
}

#[tokio::test]
async fn questionnaire_exposes_eight_prompts() {
    let state = AppState::in_memory().await.expect("in-memory state");
    let app = App::with_state(state);
    let questionnaire = app.questionnaire();
    assert_eq!(questionnaire.len(), 8);
    assert!(questionnaire
        .questions()
        .iter()
        .all(|q| q.ends_with('?')));
}
