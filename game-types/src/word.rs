use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::WordId;

/// A French infinitive from the reference word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Verb {
    pub id: WordId,
    pub verb: String,
}

/// A French verb together with its English translation and the hints shown
/// to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Word {
    pub id: WordId,
    pub french: String,
    pub english: String,
    pub length: u32,
    pub first_letter: String,
}

impl Word {
    /// Build a word response, deriving the hints from the translation.
    /// Length counts characters, not bytes.
    pub fn new(id: WordId, french: String, english: String) -> Self {
        let length = english.chars().count() as u32;
        let first_letter = english.chars().next().map(String::from).unwrap_or_default();

        Self {
            id,
            french,
            english,
            length,
            first_letter,
        }
    }
}
