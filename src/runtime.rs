//! Answer checking for a rendered question
//!
//! Mirrors the behaviour of the embedded runtime script: selecting a
//! choice enables submit; submitting compares the selection with the
//! correct id and answers with success, the choice's own feedback, or a
//! generic incorrect message.

use std::collections::HashMap;

use crate::model::Document;

pub const CORRECT_MESSAGE: &str = "Correct!";
pub const INCORRECT_MESSAGE: &str = "Incorrect, please select another answer choice.";

/// Outcome of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { message: String },
}

impl Verdict {
    pub fn message(&self) -> &str {
        match self {
            Verdict::Correct => CORRECT_MESSAGE,
            Verdict::Incorrect { message } => message,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// Runtime state of one question widget
#[derive(Debug, Clone)]
pub struct QuestionWidget {
    hint: String,
    correct: String,
    feedback: HashMap<String, String>,
    selected: Option<String>,
}

impl QuestionWidget {
    /// Build a widget from the data attributes a rendered question carries
    pub fn new(
        hint: impl Into<String>,
        correct: impl Into<String>,
        feedback: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            hint: hint.into(),
            correct: correct.into(),
            feedback: feedback.into_iter().collect(),
            selected: None,
        }
    }

    pub fn from_document(doc: &Document) -> Self {
        Self::new(
            doc.hint.clone(),
            doc.correct().unwrap_or_default(),
            doc.choices()
                .iter()
                .map(|c| (c.id.clone(), c.feedback.clone())),
        )
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Check a choice; any selection enables submit
    pub fn select(&mut self, value: impl Into<String>) {
        self.selected = Some(value.into());
    }

    pub fn submit_enabled(&self) -> bool {
        self.selected.is_some()
    }

    /// Submit the current selection; `None` while submit is disabled
    pub fn submit(&self) -> Option<Verdict> {
        let selected = self.selected.as_deref()?;
        if selected == self.correct {
            return Some(Verdict::Correct);
        }

        let message = self
            .feedback
            .get(selected)
            .filter(|f| !f.is_empty())
            .cloned()
            .unwrap_or_else(|| INCORRECT_MESSAGE.to_string());
        Some(Verdict::Incorrect { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> QuestionWidget {
        QuestionWidget::new(
            "Look up",
            "a-1",
            vec![
                ("a-1".to_string(), String::new()),
                ("a-2".to_string(), "Try again".to_string()),
                ("a-3".to_string(), String::new()),
            ],
        )
    }

    #[test]
    fn test_submit_disabled_until_selection() {
        let mut w = widget();
        assert!(!w.submit_enabled());
        assert_eq!(w.submit(), None);
        w.select("a-3");
        assert!(w.submit_enabled());
    }

    #[test]
    fn test_correct_selection() {
        let mut w = widget();
        w.select("a-1");
        assert_eq!(w.submit(), Some(Verdict::Correct));
        assert_eq!(w.submit().unwrap().message(), "Correct!");
    }

    #[test]
    fn test_incorrect_uses_choice_feedback() {
        let mut w = widget();
        w.select("a-2");
        assert_eq!(
            w.submit(),
            Some(Verdict::Incorrect {
                message: "Try again".into()
            })
        );
    }

    #[test]
    fn test_incorrect_without_feedback_is_generic() {
        let mut w = widget();
        w.select("a-3");
        assert_eq!(w.submit().unwrap().message(), INCORRECT_MESSAGE);
    }

    #[test]
    fn test_unknown_selection_is_generic_incorrect() {
        let mut w = widget();
        w.select("nope");
        let verdict = w.submit().unwrap();
        assert!(!verdict.is_correct());
        assert_eq!(verdict.message(), INCORRECT_MESSAGE);
    }

    #[test]
    fn test_no_correct_answer_never_matches() {
        let mut w = QuestionWidget::new("", "", Vec::new());
        w.select("a-1");
        assert!(!w.submit().unwrap().is_correct());
    }

    #[test]
    fn test_hint() {
        assert_eq!(widget().hint(), "Look up");
    }
}
