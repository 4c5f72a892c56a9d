//! The editable question document and its choice list operations
//!
//! `Document` is the single source of truth for the editor. All
//! operations are total: an unknown choice id is a no-op, never an error.

/// Question text a fresh session starts with
pub const DEFAULT_QUESTION_TEXT: &str = "What color is the sky?";

/// One answer choice
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Choice {
    /// Unique within the document; never changes once created
    pub id: String,
    /// Visible label / answer text
    pub text: String,
    /// Shown when this choice is submitted and is not the correct one
    pub feedback: String,
}

impl Choice {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
            feedback: String::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = feedback.into();
        self
    }
}

/// Editable text field of a choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceField {
    Text,
    Feedback,
}

/// The unit that is edited and persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub question_text: String,
    pub hint: String,
    pub redirect: String,
    choices: Vec<Choice>,
    correct: Option<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            question_text: DEFAULT_QUESTION_TEXT.to_string(),
            hint: String::new(),
            redirect: String::new(),
            choices: Vec::new(),
            correct: None,
        }
    }
}

impl Document {
    /// Build a document from raw parts, restoring the invariants:
    /// duplicate ids keep their first occurrence and a dangling
    /// correct reference is dropped.
    pub fn from_parts(
        question_text: String,
        hint: String,
        redirect: String,
        choices: Vec<Choice>,
        correct: Option<String>,
    ) -> Self {
        let mut unique: Vec<Choice> = Vec::with_capacity(choices.len());
        for choice in choices {
            if unique.iter().any(|c| c.id == choice.id) {
                tracing::warn!("Dropping duplicate choice id {}", choice.id);
                continue;
            }
            unique.push(choice);
        }

        let correct = correct
            .filter(|id| !id.is_empty())
            .filter(|id| unique.iter().any(|c| &c.id == id));

        Self {
            question_text,
            hint,
            redirect,
            choices: unique,
            correct,
        }
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn choice(&self, id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.choices.iter().position(|c| c.id == id)
    }

    /// Id of the correct choice, if one is selected
    pub fn correct(&self) -> Option<&str> {
        self.correct.as_deref()
    }

    pub fn is_correct(&self, id: &str) -> bool {
        self.correct.as_deref() == Some(id)
    }

    pub fn set_question_text(&mut self, text: impl Into<String>) {
        self.question_text = text.into();
    }

    pub fn set_hint(&mut self, text: impl Into<String>) {
        self.hint = text.into();
    }

    pub fn set_redirect(&mut self, text: impl Into<String>) {
        self.redirect = text.into();
    }

    /// Append a blank choice with the given (fresh) id.
    ///
    /// The first choice added to an empty list becomes the correct one
    /// when nothing is selected yet.
    pub fn add_choice(&mut self, id: String) {
        let was_empty = self.choices.is_empty();
        self.choices.push(Choice::new(id));
        if was_empty && self.correct.is_none() {
            self.correct = self.choices.first().map(|c| c.id.clone());
        }
    }

    /// Remove the choice with `id`. Returns false if no such choice.
    ///
    /// Removing the correct choice clears the correct reference.
    pub fn remove_choice(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.choices.remove(index);
        if self.is_correct(id) {
            self.correct = None;
        }
        true
    }

    /// Replace one text field of a choice. Returns false if no such choice.
    pub fn update_choice_field(&mut self, id: &str, field: ChoiceField, value: String) -> bool {
        let Some(choice) = self.choices.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        match field {
            ChoiceField::Text => choice.text = value,
            ChoiceField::Feedback => choice.feedback = value,
        }
        true
    }

    /// Toggle the correct selection: selecting the current correct
    /// choice again clears it.
    pub fn set_correct(&mut self, id: &str) {
        if self.is_correct(id) {
            self.correct = None;
        } else {
            self.correct = Some(id.to_string());
        }
    }

    /// Move the choice at `from` to `to`, shifting the ones in between.
    ///
    /// Both indices must be `< len()`; callers only issue valid indices.
    pub fn reorder(&mut self, from: usize, to: usize) {
        debug_assert!(from < self.choices.len() && to < self.choices.len());
        if from == to {
            return;
        }
        let choice = self.choices.remove(from);
        self.choices.insert(to, choice);
    }

    /// Assert id uniqueness and correct-reference invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        for (i, choice) in self.choices.iter().enumerate() {
            debug_assert!(
                !self.choices[..i].iter().any(|c| c.id == choice.id),
                "[{}] duplicate choice id {}",
                context,
                choice.id
            );
        }
        if let Some(correct) = &self.correct {
            debug_assert!(
                self.position(correct).is_some(),
                "[{}] correct choice {} is not in the list",
                context,
                correct
            );
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants_with_context(&self, _context: &str) {}
}
