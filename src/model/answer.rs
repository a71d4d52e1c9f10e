use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::model::question::QuestionId;

/// Unique numeric answer identifier, assigned by the store on creation.
pub type AnswerId = u32;

/// Core candidate answer data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCore {
    /// The question this answer belongs to. A back-reference only; the
    /// question owns its answers, not the other way around.
    pub question_id: QuestionId,
    /// Answer text.
    pub text: String,
    /// Whether this is the correct answer to its question.
    pub is_true: bool,
}

/// An answer without an ID.
pub type NewAnswer = AnswerCore;

/// An answer from the database, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "_id")]
    pub id: AnswerId,
    #[serde(flatten)]
    pub answer: AnswerCore,
}

impl Deref for Answer {
    type Target = AnswerCore;

    fn deref(&self) -> &Self::Target {
        &self.answer
    }
}

impl DerefMut for Answer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.answer
    }
}
