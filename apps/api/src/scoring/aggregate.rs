//! Aggregation — runs every classifier and the deduction detector over one
//! letter and folds the results into a `ScoreBreakdown`.
//!
//! The whole engine is a pure function of the input text: no I/O, no shared
//! state, identical input always yields identical output.

use serde::{Deserialize, Serialize};

use crate::scoring::deductions::detect_deductions;
use crate::scoring::dimensions::{
    score_author_credibility, score_interpersonal, score_medical_knowledge, score_patient_care,
    score_professionalism, score_scholarly,
};

/// Full structured result of one scoring invocation. Callers get every
/// sub-score for display and audit, not just the composite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub patient_care: i32,
    pub medical_knowledge: i32,
    pub interpersonal: i32,
    pub professionalism: i32,
    pub scholarly: i32,
    pub author_credibility: i32,
    pub deductions: i32,
    pub final_score: i32,
}

/// The letter scorer seam. Carried in `AppState` as `Arc<dyn LetterScorer>`
/// so the backend can be swapped without touching handlers. Synchronous: the
/// engine performs no blocking work.
pub trait LetterScorer: Send + Sync {
    fn score(&self, text: &str) -> ScoreBreakdown;
}

/// Default backend: deterministic pattern cascades over the letter text.
pub struct RubricScorer;

impl LetterScorer for RubricScorer {
    fn score(&self, text: &str) -> ScoreBreakdown {
        score_letter(text)
    }
}

/// Scores a letter: six dimension classifiers plus the deduction detector,
/// then `final_score = round_ties_even(mean of dimensions) + deductions`.
/// No clamping; a severe deduction can push the final score negative.
pub fn score_letter(text: &str) -> ScoreBreakdown {
    let patient_care = score_patient_care(text);
    let medical_knowledge = score_medical_knowledge(text);
    let interpersonal = score_interpersonal(text);
    let professionalism = score_professionalism(text);
    let scholarly = score_scholarly(text);
    let author_credibility = score_author_credibility(text);
    let deductions = detect_deductions(text);

    let mean = (patient_care
        + medical_knowledge
        + interpersonal
        + professionalism
        + scholarly
        + author_credibility) as f64
        / 6.0;
    let final_score = mean.round_ties_even() as i32 + deductions;

    ScoreBreakdown {
        patient_care,
        medical_knowledge,
        interpersonal,
        professionalism,
        scholarly,
        author_credibility,
        deductions,
        final_score,
    }
}
