//! Durable storage for the question document
//!
//! The whole document lives in a single string-keyed slot as JSON:
//! `{questionText, hint, redirect, choices: [{name, text, feedback}], correct}`.
//! There is no schema version; every field is optional on load and
//! default-filled. Unreadable content is treated as absent.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::model::{Choice, Document};

/// Default slot key
pub const DEFAULT_SLOT_KEY: &str = "questions-data";

/// A store of named string slots
pub trait SlotStorage {
    /// Read a slot, `None` if it does not exist or cannot be read
    fn read(&self, key: &str) -> Option<String>;
    /// Overwrite a slot
    fn write(&mut self, key: &str, content: &str) -> std::io::Result<()>;
}

/// Slots kept in memory for the lifetime of the value
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn write(&mut self, key: &str, content: &str) -> std::io::Result<()> {
        self.slots.insert(key.to_string(), content.to_string());
        Ok(())
    }
}

/// Slots stored as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage under the user config directory, if one is available
    pub fn user_default() -> Option<Self> {
        crate::config_paths::storage_dir().map(Self::new)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SlotStorage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.slot_path(key)).ok()
    }

    fn write(&mut self, key: &str, content: &str) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.slot_path(key), content)
    }
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A choice as stored in the slot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedChoice {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub feedback: String,
}

/// On-disk shape of the document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hint: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub redirect: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub choices: Vec<PersistedChoice>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub correct: String,
}

impl From<&Document> for PersistedDocument {
    fn from(doc: &Document) -> Self {
        Self {
            question_text: Some(doc.question_text.clone()),
            hint: doc.hint.clone(),
            redirect: doc.redirect.clone(),
            choices: doc
                .choices()
                .iter()
                .map(|c| PersistedChoice {
                    name: c.id.clone(),
                    text: c.text.clone(),
                    feedback: c.feedback.clone(),
                })
                .collect(),
            correct: doc.correct().unwrap_or_default().to_string(),
        }
    }
}

impl From<PersistedDocument> for Document {
    fn from(stored: PersistedDocument) -> Self {
        let defaults = Document::default();
        let choices = stored
            .choices
            .into_iter()
            .filter(|c| !c.name.is_empty())
            .map(|c| Choice::new(c.name).with_text(c.text).with_feedback(c.feedback))
            .collect();

        Document::from_parts(
            stored.question_text.unwrap_or(defaults.question_text),
            stored.hint,
            stored.redirect,
            choices,
            Some(stored.correct),
        )
    }
}

/// Serialize a document to its slot representation
pub fn encode(doc: &Document) -> serde_json::Result<String> {
    serde_json::to_string(&PersistedDocument::from(doc))
}

/// Parse slot content; malformed content yields `None`
pub fn decode(content: &str) -> Option<Document> {
    match serde_json::from_str::<PersistedDocument>(content) {
        Ok(stored) => Some(stored.into()),
        Err(e) => {
            tracing::warn!("Ignoring unreadable stored document: {}", e);
            None
        }
    }
}

/// Load the document from `key`, or the default document
pub fn load(storage: &dyn SlotStorage, key: &str) -> Document {
    match storage.read(key) {
        Some(content) => decode(&content).unwrap_or_default(),
        None => {
            tracing::debug!("No stored document in slot {}, using defaults", key);
            Document::default()
        }
    }
}

/// Save the document to `key`, overwriting prior content
pub fn save(storage: &mut dyn SlotStorage, key: &str, doc: &Document) -> std::io::Result<()> {
    let content = encode(doc)?;
    storage.write(key, &content)
}
