use serde::{Deserialize, Serialize};

use crate::model::answer::{Answer, AnswerId};
use crate::model::question::{Question, QuestionId};

/// A question as returned to callers, with its full answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDescription {
    pub id: QuestionId,
    pub text: String,
    pub answers: Vec<AnswerDescription>,
}

impl QuestionDescription {
    /// Assemble the caller-facing view from stored records.
    pub fn new(question: Question, answers: Vec<Answer>) -> Self {
        Self {
            id: question.id,
            text: question.question.text,
            answers: answers.into_iter().map(AnswerDescription::from).collect(),
        }
    }
}

/// A candidate answer as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerDescription {
    pub id: AnswerId,
    pub text: String,
    pub is_true: bool,
}

impl From<Answer> for AnswerDescription {
    fn from(answer: Answer) -> Self {
        Self {
            id: answer.id,
            text: answer.answer.text,
            is_true: answer.answer.is_true,
        }
    }
}
