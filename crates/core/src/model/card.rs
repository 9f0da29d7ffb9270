use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::CardId;

//
// ─── CARD ERRORS ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("source file tag cannot be empty")]
    EmptyFile,

    #[error("question text cannot be empty")]
    EmptyQuestion,

    #[error("answer text cannot be empty")]
    EmptyAnswer,
}

//
// ─── CARD DRAFT ────────────────────────────────────────────────────────────────
//

/// Unvalidated card input, e.g. from an import file or a generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDraft {
    pub file: String,
    pub question: String,
    pub answer: String,
}

impl CardDraft {
    #[must_use]
    pub fn new(
        file: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Sanitize and validate the draft.
    ///
    /// Null bytes are stripped everywhere. The file tag is additionally folded
    /// onto a single line since it is used as a selection key.
    ///
    /// # Errors
    ///
    /// Returns `CardError` if any field is empty after trimming.
    pub fn validate(self) -> Result<ValidatedCard, CardError> {
        let file = sanitize_single_line(&self.file);
        if file.is_empty() {
            return Err(CardError::EmptyFile);
        }

        let question = strip_nul(&self.question);
        if question.is_empty() {
            return Err(CardError::EmptyQuestion);
        }

        let answer = strip_nul(&self.answer);
        if answer.is_empty() {
            return Err(CardError::EmptyAnswer);
        }

        Ok(ValidatedCard {
            file,
            question,
            answer,
        })
    }
}

fn strip_nul(input: &str) -> String {
    input.replace('\0', "").trim().to_owned()
}

fn sanitize_single_line(input: &str) -> String {
    input
        .replace('\0', "")
        .replace(['\r', '\n'], " ")
        .trim()
        .to_owned()
}

/// A card that passed validation but has no identity yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCard {
    file: String,
    question: String,
    answer: String,
}

impl ValidatedCard {
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// New cards are due immediately.
    #[must_use]
    pub fn assign_id(self, id: CardId) -> Card {
        Card {
            id,
            file: self.file,
            question: self.question,
            answer: self.answer,
            revisit_in: 0,
        }
    }
}

//
// ─── CARD ──────────────────────────────────────────────────────────────────────
//

/// A question/answer pair with its current revisit interval in days.
///
/// `revisit_in <= 0` means the card is due.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    file: String,
    question: String,
    answer: String,
    revisit_in: i64,
}

impl Card {
    /// Rehydrate a card from storage. Persisted rows are trusted as-is.
    #[must_use]
    pub fn from_persisted(
        id: CardId,
        file: String,
        question: String,
        answer: String,
        revisit_in: i64,
    ) -> Self {
        Self {
            id,
            file,
            question,
            answer,
            revisit_in,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn revisit_in(&self) -> i64 {
        self.revisit_in
    }

    #[must_use]
    pub fn is_due(&self) -> bool {
        self.revisit_in <= 0
    }

    /// Returns a copy of this card with a new revisit interval.
    #[must_use]
    pub fn with_revisit_in(&self, days: i64) -> Self {
        Self {
            revisit_in: days,
            ..self.clone()
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
