use serde::{Deserialize, Serialize};

use crate::model::answer::NewAnswer;
use crate::model::question::QuestionId;

/// A question specification: everything a caller supplies to create or
/// update a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSpec {
    /// Question text.
    pub text: String,
    /// Candidate answers. Exactly one must be marked true.
    pub answers: Vec<AnswerSpec>,
}

/// A candidate answer specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSpec {
    /// Answer text.
    pub text: String,
    /// Whether this is the correct answer.
    pub is_true: bool,
}

impl AnswerSpec {
    /// Bind this answer to the question that owns it.
    pub fn into_answer(self, question_id: QuestionId) -> NewAnswer {
        NewAnswer {
            question_id,
            text: self.text,
            is_true: self.is_true,
        }
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl AnswerSpec {
        pub fn right(text: &str) -> Self {
            Self {
                text: text.to_string(),
                is_true: true,
            }
        }

        pub fn wrong(text: &str) -> Self {
            Self {
                text: text.to_string(),
                is_true: false,
            }
        }
    }

    impl QuestionSpec {
        pub fn example1() -> Self {
            Self {
                text: "What is the capital of France?".to_string(),
                answers: vec![
                    AnswerSpec::right("Paris"),
                    AnswerSpec::wrong("London"),
                    AnswerSpec::wrong("Berlin"),
                ],
            }
        }

        pub fn example2() -> Self {
            Self {
                text: "Which planet is closest to the Sun?".to_string(),
                answers: vec![AnswerSpec::right("Mercury"), AnswerSpec::wrong("Venus")],
            }
        }

        pub fn example3() -> Self {
            Self {
                text: "How many continents are there?".to_string(),
                answers: vec![
                    AnswerSpec::right("Seven"),
                    AnswerSpec::wrong("Six"),
                    AnswerSpec::wrong("Five"),
                ],
            }
        }
    }
}
