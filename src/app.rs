//! Facade gluing the account store, the diagnosis engine and the
//! session state machine together for an embedding UI.

use anyhow::Context;
use tracing::warn;

use crate::accounts::{self, LoginRequest, PublicUser, RegisterRequest};
use crate::error::AppError;
use crate::screening::{self, Diagnosis, DiagnosisOutcome, Pagination, Questionnaire};
use crate::session::Session;
use crate::state::AppState;

pub struct App {
    state: AppState,
}

impl App {
    /// Open the configured database and build the facade.
    pub async fn init() -> anyhow::Result<Self> {
        let state = AppState::init()
            .await
            .context("initialize application state")?;
        Ok(Self::with_state(state))
    }

    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// A fresh anonymous session for one user interaction.
    pub fn session(&self) -> Session {
        Session::new()
    }

    /// The questionnaire the UI should render.
    pub fn questionnaire(&self) -> Questionnaire {
        Questionnaire::standard()
    }

    /// Create an account. On success the session moves to the login
    /// screen; the user is not signed in yet.
    pub async fn register(
        &self,
        session: &mut Session,
        req: RegisterRequest,
    ) -> Result<PublicUser, AppError> {
        let user = accounts::services::register(&self.state, req).await?;
        session.registered();
        Ok(user)
    }

    /// Verify credentials. On success the session becomes
    /// authenticated and moves to the questionnaire.
    pub async fn login(
        &self,
        session: &mut Session,
        req: LoginRequest,
    ) -> Result<PublicUser, AppError> {
        let user = accounts::services::authenticate(&self.state, req).await?;
        session.signed_in(user.id);
        Ok(user)
    }

    pub fn logout(&self, session: &mut Session) {
        session.sign_out();
    }

    /// Score and record an answer sheet for the signed-in user.
    pub async fn submit_answers(
        &self,
        session: &Session,
        answers: &[bool],
    ) -> Result<DiagnosisOutcome, AppError> {
        let user_id = match session.user_id() {
            Some(id) => id,
            None => {
                warn!("questionnaire submitted without a signed-in session");
                return Err(AppError::Authentication);
            }
        };
        screening::services::diagnose(&self.state, user_id, answers).await
    }

    /// Past diagnoses for the signed-in user, newest first.
    pub async fn history(
        &self,
        session: &Session,
        page: Pagination,
    ) -> Result<Vec<Diagnosis>, AppError> {
        let user_id = match session.user_id() {
            Some(id) => id,
            None => {
                warn!("history requested without a signed-in session");
                return Err(AppError::Authentication);
            }
        };
        screening::services::history(&self.state, user_id, page).await
    }
}
