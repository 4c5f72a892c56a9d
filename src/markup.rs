//! Block-markup serializer
//!
//! Renders a document as fenced blocks for the downstream content
//! pipeline:
//!
//! ```text
//! :::{ .question id="q-1" text="…" correct="a-1" hint="…" redirect="…" }
//! ::::{ .answer-choice questionId="q-1" name="a-1" text="…" feedback="…" }
//! ::::
//! :::
//! ```
//!
//! The outer fence is `:::`, each inner fence `::::`.

use crate::model::{Choice, Document, QuestionId};

pub const QUESTION_FENCE: &str = ":::";
pub const CHOICE_FENCE: &str = "::::";
pub const QUESTION_CLASS: &str = "question";
pub const CHOICE_CLASS: &str = "answer-choice";

/// How attribute values are written between the quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributeEscaping {
    /// Values written as-is. A `"` in a value breaks the block, but the
    /// output matches existing consumers byte for byte.
    #[default]
    Verbatim,
    /// `\` and `"` are backslash-escaped
    Backslash,
}

impl AttributeEscaping {
    pub fn from_flag(escape: bool) -> Self {
        if escape {
            Self::Backslash
        } else {
            Self::Verbatim
        }
    }

    fn apply(self, value: &str) -> std::borrow::Cow<'_, str> {
        match self {
            Self::Verbatim => value.into(),
            Self::Backslash if !value.contains(|c| c == '\\' || c == '"') => value.into(),
            Self::Backslash => {
                let mut out = String::with_capacity(value.len() + 4);
                for ch in value.chars() {
                    if ch == '\\' || ch == '"' {
                        out.push('\\');
                    }
                    out.push(ch);
                }
                out.into()
            }
        }
    }
}

/// One fenced block with ordered attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub fence: &'static str,
    pub class: &'static str,
    pub attrs: Vec<(&'static str, &'a str)>,
    pub children: Vec<Block<'a>>,
}

impl<'a> Block<'a> {
    /// Outer block for the question itself
    pub fn question(doc: &'a Document, question_id: &'a QuestionId) -> Self {
        Self {
            fence: QUESTION_FENCE,
            class: QUESTION_CLASS,
            attrs: vec![
                ("id", question_id.as_str()),
                ("text", doc.question_text.as_str()),
                ("correct", doc.correct().unwrap_or_default()),
                ("hint", doc.hint.as_str()),
                ("redirect", doc.redirect.as_str()),
            ],
            children: doc
                .choices()
                .iter()
                .map(|choice| Self::choice(choice, question_id))
                .collect(),
        }
    }

    /// Inner block for one answer choice
    pub fn choice(choice: &'a Choice, question_id: &'a QuestionId) -> Self {
        Self {
            fence: CHOICE_FENCE,
            class: CHOICE_CLASS,
            attrs: vec![
                ("questionId", question_id.as_str()),
                ("name", choice.id.as_str()),
                ("text", choice.text.as_str()),
                ("feedback", choice.feedback.as_str()),
            ],
            children: Vec::new(),
        }
    }

    /// `key="value"` pairs joined by single spaces
    pub fn attributes(&self, escaping: AttributeEscaping) -> String {
        self.attrs
            .iter()
            .map(|(key, value)| format!("{}=\"{}\"", key, escaping.apply(value)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn write_lines(&self, escaping: AttributeEscaping, lines: &mut Vec<String>) {
        lines.push(format!(
            "{}{{ .{} {} }}",
            self.fence,
            self.class,
            self.attributes(escaping)
        ));
        for child in &self.children {
            child.write_lines(escaping, lines);
        }
        lines.push(self.fence.to_string());
    }

    pub fn render(&self, escaping: AttributeEscaping) -> String {
        let mut lines = Vec::new();
        self.write_lines(escaping, &mut lines);
        lines.join("\n")
    }
}

/// Serialize the document as block markup
pub fn to_markup(doc: &Document, question_id: &QuestionId, escaping: AttributeEscaping) -> String {
    Block::question(doc, question_id).render(escaping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChoiceField;

    fn qid() -> QuestionId {
        QuestionId::new("q-test")
    }

    #[test]
    fn test_empty_question() {
        let doc = Document::default();
        assert_eq!(
            to_markup(&doc, &qid(), AttributeEscaping::Verbatim),
            ":::{ .question id=\"q-test\" text=\"What color is the sky?\" correct=\"\" hint=\"\" redirect=\"\" }\n:::"
        );
    }

    #[test]
    fn test_choices_in_order() {
        let mut doc = Document::default();
        doc.add_choice("a-1".into());
        doc.add_choice("a-2".into());
        doc.update_choice_field("a-1", ChoiceField::Text, "Blue".into());
        doc.update_choice_field("a-2", ChoiceField::Text, "Red".into());
        doc.update_choice_field("a-2", ChoiceField::Feedback, "Try again".into());

        let expected = [
            ":::{ .question id=\"q-test\" text=\"What color is the sky?\" correct=\"a-1\" hint=\"\" redirect=\"\" }",
            "::::{ .answer-choice questionId=\"q-test\" name=\"a-1\" text=\"Blue\" feedback=\"\" }",
            "::::",
            "::::{ .answer-choice questionId=\"q-test\" name=\"a-2\" text=\"Red\" feedback=\"Try again\" }",
            "::::",
            ":::",
        ]
        .join("\n");
        assert_eq!(to_markup(&doc, &qid(), AttributeEscaping::Verbatim), expected);
    }

    #[test]
    fn test_verbatim_keeps_quotes() {
        let mut doc = Document::default();
        doc.set_hint(r#"say "blue""#);
        let out = to_markup(&doc, &qid(), AttributeEscaping::Verbatim);
        assert!(out.contains(r#"hint="say "blue"""#));
    }

    #[test]
    fn test_backslash_escaping() {
        let mut doc = Document::default();
        doc.set_hint(r#"say "blue" \ now"#);
        let out = to_markup(&doc, &qid(), AttributeEscaping::Backslash);
        assert!(out.contains(r#"hint="say \"blue\" \\ now""#));
    }

    #[test]
    fn test_attribute_order_is_fixed() {
        let doc = Document::default();
        let id = qid();
        let block = Block::question(&doc, &id);
        let keys: Vec<_> = block.attrs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["id", "text", "correct", "hint", "redirect"]);
    }
}
