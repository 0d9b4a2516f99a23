//! The fixed screening questionnaire and its scoring rules.
//!
//! Both the question set and the severity bands are data, not inline
//! logic; the thresholds themselves are fixed by the screening rules.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Severity classification produced by scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Severe,
    Moderate,
    Mild,
    None,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Severe => "Severe depression",
            Self::Moderate => "Moderate depression",
            Self::Mild => "Mild depression",
            Self::None => "No depression",
        };
        write!(f, "{label}")
    }
}

const QUESTIONS: [&str; 8] = [
    "Do you often feel sad?",
    "Do you often feel tired for no reason?",
    "Do you have trouble sleeping, or sleep too much?",
    "Have you lost interest in activities you usually enjoy?",
    "Do you often feel restless or anxious?",
    "Have you experienced significant changes in weight?",
    "Do you feel worthless or guilty without a clear reason?",
    "Do you have difficulty concentrating or making decisions?",
];

/// Minimum score for each band, evaluated high to low. Every score
/// from 0 up matches the last entry, so lookup cannot fail.
const BANDS: [(u8, Severity); 4] = [
    (6, Severity::Severe),
    (4, Severity::Moderate),
    (2, Severity::Mild),
    (0, Severity::None),
];

/// A questionnaire of yes/no prompts with severity thresholds.
#[derive(Debug, Clone, Copy)]
pub struct Questionnaire {
    questions: &'static [&'static str],
    bands: &'static [(u8, Severity)],
}

impl Questionnaire {
    /// The standard 8-question depression screening form.
    pub fn standard() -> Self {
        Self {
            questions: &QUESTIONS,
            bands: &BANDS,
        }
    }

    pub fn questions(&self) -> &[&'static str] {
        self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Each "yes" contributes one point.
    pub fn score(&self, answers: &[bool]) -> u8 {
        answers.iter().filter(|&&yes| yes).count() as u8
    }

    pub fn classify(&self, score: u8) -> Severity {
        self.bands
            .iter()
            .find(|&&(min, _)| score >= min)
            .map(|&(_, severity)| severity)
            .unwrap_or(Severity::None)
    }

    /// Score a full answer sheet. The sheet must answer every question.
    pub fn evaluate(&self, answers: &[bool]) -> Result<Severity, AppError> {
        if answers.len() != self.questions.len() {
            return Err(AppError::validation(format!(
                "Expected {} answers, got {}",
                self.questions.len(),
                answers.len()
            )));
        }
        Ok(self.classify(self.score(answers)))
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::standard()
    }
}
