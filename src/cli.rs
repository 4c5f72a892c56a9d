//! Command-line interface for the question editor
//!
//! Every editing command is translated into `Msg`s and run through
//! `update`, exactly like an interactive host would. Choice arguments
//! accept either a choice id or a 1-based position.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::commands::Cmd;
use crate::drag::RowBounds;
use crate::messages::{AppMsg, DocumentMsg, DragMsg, Msg};
use crate::model::{AppModel, Document};
use crate::update::update;

/// Row height used when a `move` is replayed as a pointer drag
const SIMULATED_ROW_HEIGHT: f32 = 40.0;

/// Author multiple-choice question widgets
#[derive(Parser, Debug)]
#[command(name = "quiz-author", version, about = "Author multiple-choice question widgets")]
pub struct CliArgs {
    /// Directory holding the storage slots (default: ~/.config/quiz-author/storage)
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Config file (default: ~/.config/quiz-author/config.yaml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More console logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the question and its choices
    Show,
    /// Print the block markup
    Markup,
    /// Write (or print) the HTML preview
    Preview {
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Open the written file in the default browser
        #[arg(long, requires = "out")]
        open: bool,
    },
    /// Write a standalone interactive HTML page
    Export {
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
        #[arg(long)]
        open: bool,
    },
    /// Set the question text
    Question { text: String },
    /// Set the hint text
    Hint { text: String },
    /// Set the redirect target
    Redirect { text: String },
    /// Append a new answer choice
    Add {
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        feedback: Option<String>,
    },
    /// Remove an answer choice
    Remove { choice: String },
    /// Change the text or feedback of a choice
    Edit {
        choice: String,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        feedback: Option<String>,
    },
    /// Toggle which choice is correct
    Correct { choice: String },
    /// Move a choice from one position to another (1-based)
    Move { from: usize, to: usize },
    /// Submit a choice the way a reader would and print the response
    Check { choice: String },
    /// Print the hint a reader would see
    ShowHint,
    /// Discard the stored question
    Reset,
}

/// Resolve a choice argument: a 1-based position or a choice id
pub fn resolve_choice(document: &Document, key: &str) -> Option<String> {
    if let Ok(position) = key.parse::<usize>() {
        if position >= 1 {
            if let Some(choice) = document.choices().get(position - 1) {
                return Some(choice.id.clone());
            }
        }
    }
    document.choice(key).map(|c| c.id.clone())
}

/// Messages replaying a drag of row `from` onto row `to` (0-based),
/// hovering each row in between past its midpoint
pub fn drag_messages(from: usize, to: usize) -> Vec<Msg> {
    let rows: Vec<usize> = if to > from {
        (from + 1..=to).collect()
    } else {
        (to..from).rev().collect()
    };
    let downward = to > from;

    let mut msgs = vec![Msg::Drag(DragMsg::Start { index: from })];
    for index in rows {
        let row = RowBounds::uniform(index, SIMULATED_ROW_HEIGHT);
        let pointer_y = if downward {
            row.top + SIMULATED_ROW_HEIGHT * 0.75
        } else {
            row.top + SIMULATED_ROW_HEIGHT * 0.25
        };
        msgs.push(Msg::Drag(DragMsg::Hover {
            index,
            pointer_y,
            row,
        }));
    }
    msgs.push(Msg::Drag(DragMsg::Drop));
    msgs
}

/// Run messages through `update`, collecting the commands to execute
pub fn dispatch(model: &mut AppModel, msgs: impl IntoIterator<Item = Msg>) -> Vec<Cmd> {
    msgs.into_iter()
        .filter_map(|msg| update(model, msg))
        .flat_map(Cmd::flatten)
        .collect()
}

fn require_choice(document: &Document, key: &str) -> Result<String, String> {
    resolve_choice(document, key).ok_or_else(|| format!("No such choice: {}", key))
}

fn field_edits(id: &str, text: Option<String>, feedback: Option<String>) -> Vec<Msg> {
    let mut msgs = Vec::new();
    if let Some(text) = text {
        msgs.push(Msg::set_text(id, text));
    }
    if let Some(feedback) = feedback {
        msgs.push(Msg::set_feedback(id, feedback));
    }
    msgs
}

impl Command {
    /// Whether the command only reads the document
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Command::Show
                | Command::Markup
                | Command::Preview { .. }
                | Command::Export { .. }
                | Command::Check { .. }
                | Command::ShowHint
        )
    }

    /// Apply an editing command to the model, returning the commands
    /// produced along the way. Read-only commands do nothing here.
    pub fn apply(&self, model: &mut AppModel) -> Result<Vec<Cmd>, String> {
        let cmds = match self.clone() {
            Command::Question { text } => {
                dispatch(model, [Msg::Document(DocumentMsg::SetQuestionText(text))])
            }
            Command::Hint { text } => dispatch(model, [Msg::Document(DocumentMsg::SetHint(text))]),
            Command::Redirect { text } => {
                dispatch(model, [Msg::Document(DocumentMsg::SetRedirect(text))])
            }
            Command::Add { text, feedback } => {
                let mut cmds = dispatch(model, [Msg::add_choice()]);
                if let Some(new_choice) = model.document.choices().last() {
                    let id = new_choice.id.clone();
                    cmds.extend(dispatch(model, field_edits(&id, text, feedback)));
                }
                cmds
            }
            Command::Remove { choice } => {
                let id = require_choice(&model.document, &choice)?;
                dispatch(model, [Msg::remove_choice(id)])
            }
            Command::Edit {
                choice,
                text,
                feedback,
            } => {
                let id = require_choice(&model.document, &choice)?;
                dispatch(model, field_edits(&id, text, feedback))
            }
            Command::Correct { choice } => {
                let id = require_choice(&model.document, &choice)?;
                dispatch(model, [Msg::set_correct(id)])
            }
            Command::Move { from, to } => {
                let len = model.document.len();
                if from == 0 || to == 0 || from > len || to > len {
                    return Err(format!(
                        "Positions must be between 1 and {} (got {} -> {})",
                        len, from, to
                    ));
                }
                dispatch(model, drag_messages(from - 1, to - 1))
            }
            Command::Reset => dispatch(model, [Msg::App(AppMsg::Reset)]),
            _ => Vec::new(),
        };
        Ok(cmds)
    }
}

/// Human-readable listing of the document
pub fn describe(model: &AppModel) -> String {
    let doc = &model.document;
    let mut out = String::new();
    out.push_str(&format!("Question: {}\n", doc.question_text));
    out.push_str(&format!("Hint:     {}\n", doc.hint));
    out.push_str(&format!("Redirect: {}\n", doc.redirect));
    if doc.is_empty() {
        out.push_str("No answer choices\n");
    }
    for (i, choice) in doc.choices().iter().enumerate() {
        let marker = if doc.is_correct(&choice.id) { "*" } else { " " };
        out.push_str(&format!(
            "{} {}. [{}] {}",
            marker,
            i + 1,
            choice.id,
            choice.text
        ));
        if !choice.feedback.is_empty() {
            out.push_str(&format!("  (feedback: {})", choice.feedback));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthorConfig;
    use crate::model::Session;

    fn model() -> AppModel {
        AppModel::new(Document::default(), Session::seeded(5), &AuthorConfig::default())
    }

    fn texts(model: &AppModel) -> Vec<String> {
        model.document.choices().iter().map(|c| c.text.clone()).collect()
    }

    #[test]
    fn test_parse_add() {
        let args = CliArgs::parse_from(["quiz-author", "add", "--text", "Blue"]);
        assert!(matches!(args.command, Command::Add { text: Some(ref t), .. } if t == "Blue"));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = CliArgs::parse_from(["quiz-author", "show", "--store", "/tmp/x", "-vv"]);
        assert_eq!(args.store, Some(PathBuf::from("/tmp/x")));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_add_with_fields() {
        let mut m = model();
        let cmds = Command::Add {
            text: Some("Blue".into()),
            feedback: Some("Nope".into()),
        }
        .apply(&mut m)
        .unwrap();
        assert!(cmds.iter().any(|c| matches!(c, Cmd::Persist { .. })));
        assert_eq!(texts(&m), vec!["Blue"]);
        assert_eq!(m.document.choices()[0].feedback, "Nope");
    }

    #[test]
    fn test_resolve_by_position_or_id() {
        let mut m = model();
        dispatch(&mut m, [Msg::add_choice(), Msg::add_choice()]);
        let second = m.document.choices()[1].id.clone();
        assert_eq!(resolve_choice(&m.document, "2"), Some(second.clone()));
        assert_eq!(resolve_choice(&m.document, &second), Some(second));
        assert_eq!(resolve_choice(&m.document, "3"), None);
        assert_eq!(resolve_choice(&m.document, "0"), None);
    }

    #[test]
    fn test_move_runs_through_drag() {
        let mut m = model();
        for text in ["A", "B", "C", "D"] {
            Command::Add {
                text: Some(text.into()),
                feedback: None,
            }
            .apply(&mut m)
            .unwrap();
        }

        Command::Move { from: 1, to: 3 }.apply(&mut m).unwrap();
        assert_eq!(texts(&m), vec!["B", "C", "A", "D"]);

        Command::Move { from: 4, to: 1 }.apply(&mut m).unwrap();
        assert_eq!(texts(&m), vec!["D", "B", "C", "A"]);
        assert!(!m.drag.is_dragging());
    }

    #[test]
    fn test_move_rejects_bad_positions() {
        let mut m = model();
        dispatch(&mut m, [Msg::add_choice()]);
        assert!(Command::Move { from: 1, to: 2 }.apply(&mut m).is_err());
        assert!(Command::Move { from: 0, to: 1 }.apply(&mut m).is_err());
    }

    #[test]
    fn test_unknown_choice_is_error() {
        let mut m = model();
        let err = Command::Remove {
            choice: "a-missing".into(),
        }
        .apply(&mut m)
        .unwrap_err();
        assert!(err.contains("a-missing"));
    }

    #[test]
    fn test_read_only_commands_do_nothing() {
        let mut m = model();
        assert!(Command::Show.is_read_only());
        assert!(Command::Show.apply(&mut m).unwrap().is_empty());
    }

    #[test]
    fn test_describe_marks_correct() {
        let mut m = model();
        Command::Add {
            text: Some("Blue".into()),
            feedback: None,
        }
        .apply(&mut m)
        .unwrap();
        let listing = describe(&m);
        assert!(listing.contains("* 1. ["));
        assert!(listing.contains("] Blue"));
    }
}
