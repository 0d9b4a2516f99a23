use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::accounts::dto::{LoginRequest, PublicUser, RegisterRequest};
use crate::accounts::password::{hash_password, verify_password};
use crate::accounts::repo_types::User;
use crate::error::AppError;
use crate::state::AppState;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Register a new account. Validation happens before any write;
/// hashing happens before the single insert.
#[instrument(skip(state, req))]
pub async fn register(state: &AppState, mut req: RegisterRequest) -> Result<PublicUser, AppError> {
    req.email = req.email.trim().to_lowercase();
    let username = req.username.trim().to_string();

    if username.is_empty() {
        warn!("registration with empty username");
        return Err(AppError::validation("Username must not be empty"));
    }

    if !is_valid_email(&req.email) {
        warn!(email = %req.email, "invalid email");
        return Err(AppError::validation("Invalid email"));
    }

    if req.password != req.confirm_password {
        warn!(username = %username, "password confirmation mismatch");
        return Err(AppError::validation("Passwords do not match"));
    }

    // Ensure username is not taken
    if User::find_by_username(&state.db, &username).await?.is_some() {
        warn!(username = %username, "username already registered");
        return Err(AppError::validation("Username already taken"));
    }

    let hash = hash_password(&req.password)?;
    let user = User::create(&state.db, &username, &req.email, &hash).await?;

    info!(user_id = user.id, username = %user.username, "user registered");
    Ok(user.into_public())
}

/// Verify credentials and return the stored identity.
///
/// An unknown username and a wrong password both return
/// `AppError::Authentication`; callers see one outcome.
#[instrument(skip(state, req))]
pub async fn authenticate(state: &AppState, req: LoginRequest) -> Result<PublicUser, AppError> {
    let username = req.username.trim();

    let user = match User::find_by_username(&state.db, username).await? {
        Some(u) => u,
        None => {
            warn!(username = %username, "login with unknown username");
            return Err(AppError::Authentication);
        }
    };

    let ok = verify_password(&req.password, &user.password_hash)?;
    if !ok {
        warn!(user_id = user.id, "login with invalid password");
        return Err(AppError::Authentication);
    }

    info!(user_id = user.id, username = %user.username, "user logged in");
    Ok(user.into_public())
}
