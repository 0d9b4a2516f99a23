mod dto;
pub mod questionnaire;
pub mod repo;
mod repo_types;
pub mod services;

pub use dto::{decode_answers, encode_answers, DiagnosisOutcome, Pagination};
pub use questionnaire::{Questionnaire, Severity};
pub use repo_types::Diagnosis;
