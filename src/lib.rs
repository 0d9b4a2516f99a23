//! Backend of a small depression-screening application: accounts with
//! salted password hashing, a fixed 8-question questionnaire scored
//! into a severity label, and SQLite persistence of both.
//!
//! The crate deliberately has no network or CLI surface; a UI wrapper
//! drives [`App`] with a [`Session`] per user interaction.

pub mod accounts;
pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod screening;
pub mod session;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use error::AppError;
pub use session::{AuthState, Screen, Session};
pub use state::AppState;
