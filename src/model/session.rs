//! Per-session identity: the question id and the choice id generator
//!
//! Ids are short random alphanumeric strings with a type prefix
//! (`q-` for the question, `a-` for answer choices).

use std::collections::HashSet;

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length of the random part of a generated id
const ID_LEN: usize = 9;

/// Prefix for question ids
pub const QUESTION_PREFIX: &str = "q-";
/// Prefix for answer choice ids
pub const CHOICE_PREFIX: &str = "a-";

/// Identifier grouping every choice of one question into a single
/// exclusive-choice control (the radio group name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Issues ids that are unique for the lifetime of the session.
///
/// Every id handed out (or registered from a loaded document) is
/// remembered, so a removed choice's id is never issued again.
#[derive(Debug)]
pub struct IdGenerator {
    rng: StdRng,
    issued: HashSet<String>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            issued: HashSet::new(),
        }
    }

    /// Deterministic generator (tests, reproducible output)
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            issued: HashSet::new(),
        }
    }

    /// Mark an externally created id as taken
    pub fn register(&mut self, id: &str) {
        self.issued.insert(id.to_string());
    }

    /// Issue a fresh id with the given prefix
    pub fn next_with_prefix(&mut self, prefix: &str) -> String {
        loop {
            let suffix: String = (&mut self.rng)
                .sample_iter(&Alphanumeric)
                .take(ID_LEN)
                .map(char::from)
                .collect();
            let id = format!("{}{}", prefix, suffix);
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }

    pub fn next_choice_id(&mut self) -> String {
        self.next_with_prefix(CHOICE_PREFIX)
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}

/// Explicit session context: created once at startup, owns the identity
/// state that would otherwise be global.
#[derive(Debug)]
pub struct Session {
    pub question_id: QuestionId,
    pub ids: IdGenerator,
}

impl Session {
    pub fn new() -> Self {
        Self::with_generator(IdGenerator::new())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_generator(IdGenerator::seeded(seed))
    }

    fn with_generator(mut ids: IdGenerator) -> Self {
        let question_id = QuestionId::new(ids.next_with_prefix(QUESTION_PREFIX));
        Self { question_id, ids }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
