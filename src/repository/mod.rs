use async_trait::async_trait;

use crate::error::Result;
use crate::model::answer::{Answer, NewAnswer};
use crate::model::question::{NewQuestion, Question, QuestionId};

pub mod memory;
pub mod mongodb;

/// Persistence collaborator for question records.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Persist a new question, assigning it a fresh ID.
    async fn save(&self, question: NewQuestion) -> Result<Question>;

    /// Look up a question by ID.
    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>>;

    /// Look up a question by its exact text.
    async fn find_by_text(&self, text: &str) -> Result<Option<Question>>;

    /// All questions, in insertion order.
    async fn find_all(&self) -> Result<Vec<Question>>;

    /// Replace the stored fields of the question with this ID, preserving
    /// its identity. Returns whether such a question existed.
    async fn replace(&self, id: QuestionId, question: NewQuestion) -> Result<bool>;

    /// Remove the question with this ID. Returns whether such a question
    /// existed.
    async fn delete_by_id(&self, id: QuestionId) -> Result<bool>;

    /// Remove every question.
    async fn delete_all(&self) -> Result<()>;
}

/// Persistence collaborator for answer records.
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Persist a new answer, assigning it a fresh ID.
    async fn save(&self, answer: NewAnswer) -> Result<Answer>;

    /// Persist a batch of new answers, assigning each a fresh ID.
    async fn save_all(&self, answers: Vec<NewAnswer>) -> Result<Vec<Answer>>;

    /// All answers belonging to the given question, in insertion order.
    async fn find_by_question(&self, question_id: QuestionId) -> Result<Vec<Answer>>;

    /// All answers, in insertion order.
    async fn find_all(&self) -> Result<Vec<Answer>>;

    /// Remove every answer belonging to the given question.
    async fn delete_by_question(&self, question_id: QuestionId) -> Result<()>;

    /// Remove every answer.
    async fn delete_all(&self) -> Result<()>;
}
