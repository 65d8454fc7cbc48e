use serde::{Deserialize, Serialize};

/// One captured exam mark: a student, a subject, and a percentage score.
///
/// Constructed once with all three fields and never mutated afterwards.
/// Scores are stored exactly as given; the registry does not range-check
/// percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamMark {
    student_id: String,
    subject_id: String,
    score: f64,
}

impl ExamMark {
    pub fn new(student_id: &str, subject_id: &str, score: f64) -> Self {
        Self {
            student_id: student_id.into(),
            subject_id: subject_id.into(),
            score,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}
