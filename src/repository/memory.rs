//! Map-backed repositories for tests and local development.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{AnswerRepository, QuestionRepository};
use crate::error::Result;
use crate::model::answer::{Answer, NewAnswer};
use crate::model::question::{NewQuestion, Question, QuestionId};

/// Records keyed by their store-assigned ID. IDs increase monotonically, so
/// iterating the map visits records in insertion order.
#[derive(Debug)]
struct Rows<T> {
    last_id: u32,
    rows: BTreeMap<u32, T>,
}

// `derive(Default)` would demand `T: Default`, which the record types don't have.
impl<T> Default for Rows<T> {
    fn default() -> Self {
        Self {
            last_id: 0,
            rows: BTreeMap::new(),
        }
    }
}

impl<T> Rows<T> {
    fn next_id(&mut self) -> u32 {
        self.last_id += 1;
        self.last_id
    }
}

/// In-memory question store. Cloned handles share the same underlying map.
#[derive(Clone, Default)]
pub struct MemoryQuestionRepository {
    state: Arc<Mutex<Rows<NewQuestion>>>,
}

#[async_trait]
impl QuestionRepository for MemoryQuestionRepository {
    async fn save(&self, question: NewQuestion) -> Result<Question> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.rows.insert(id, question.clone());
        Ok(Question { id, question })
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.get(&id).map(|question| Question {
            id,
            question: question.clone(),
        }))
    }

    async fn find_by_text(&self, text: &str) -> Result<Option<Question>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .rows
            .iter()
            .find(|(_, question)| question.text == text)
            .map(|(id, question)| Question {
                id: *id,
                question: question.clone(),
            }))
    }

    async fn find_all(&self) -> Result<Vec<Question>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .rows
            .iter()
            .map(|(id, question)| Question {
                id: *id,
                question: question.clone(),
            })
            .collect())
    }

    async fn replace(&self, id: QuestionId, question: NewQuestion) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        match state.rows.get_mut(&id) {
            Some(row) => {
                *row = question;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: QuestionId) -> Result<bool> {
        Ok(self.state.lock().unwrap().rows.remove(&id).is_some())
    }

    async fn delete_all(&self) -> Result<()> {
        self.state.lock().unwrap().rows.clear();
        Ok(())
    }
}

/// In-memory answer store. Cloned handles share the same underlying map.
#[derive(Clone, Default)]
pub struct MemoryAnswerRepository {
    state: Arc<Mutex<Rows<NewAnswer>>>,
}

#[async_trait]
impl AnswerRepository for MemoryAnswerRepository {
    async fn save(&self, answer: NewAnswer) -> Result<Answer> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.rows.insert(id, answer.clone());
        Ok(Answer { id, answer })
    }

    async fn save_all(&self, answers: Vec<NewAnswer>) -> Result<Vec<Answer>> {
        let mut state = self.state.lock().unwrap();
        Ok(answers
            .into_iter()
            .map(|answer| {
                let id = state.next_id();
                state.rows.insert(id, answer.clone());
                Answer { id, answer }
            })
            .collect())
    }

    async fn find_by_question(&self, question_id: QuestionId) -> Result<Vec<Answer>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .rows
            .iter()
            .filter(|(_, answer)| answer.question_id == question_id)
            .map(|(id, answer)| Answer {
                id: *id,
                answer: answer.clone(),
            })
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Answer>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .rows
            .iter()
            .map(|(id, answer)| Answer {
                id: *id,
                answer: answer.clone(),
            })
            .collect())
    }

    async fn delete_by_question(&self, question_id: QuestionId) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.rows.retain(|_, answer| answer.question_id != question_id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        self.state.lock().unwrap().rows.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_assigns_fresh_increasing_ids() {
        let questions = MemoryQuestionRepository::default();

        let first = questions
            .save(NewQuestion {
                text: "first".to_string(),
            })
            .await
            .unwrap();
        let second = questions
            .save(NewQuestion {
                text: "second".to_string(),
            })
            .await
            .unwrap();

        assert!(second.id > first.id);
        assert_eq!(vec![first, second], questions.find_all().await.unwrap());
    }

    #[tokio::test]
    async fn find_by_text_matches_exactly() {
        let questions = MemoryQuestionRepository::default();
        let saved = questions
            .save(NewQuestion {
                text: "exact".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(
            Some(saved),
            questions.find_by_text("exact").await.unwrap()
        );
        assert_eq!(None, questions.find_by_text("exac").await.unwrap());
    }

    #[tokio::test]
    async fn replace_preserves_identity() {
        let questions = MemoryQuestionRepository::default();
        let saved = questions
            .save(NewQuestion {
                text: "before".to_string(),
            })
            .await
            .unwrap();

        let replaced = questions
            .replace(
                saved.id,
                NewQuestion {
                    text: "after".to_string(),
                },
            )
            .await
            .unwrap();
        assert!(replaced);

        let found = questions.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found.id, saved.id);
        assert_eq!(found.text, "after");

        // Replacing an unknown ID must not create a record.
        assert!(!questions
            .replace(
                999,
                NewQuestion {
                    text: "ghost".to_string(),
                },
            )
            .await
            .unwrap());
        assert_eq!(1, questions.find_all().await.unwrap().len());
    }

    #[tokio::test]
    async fn answers_are_scoped_to_their_question() {
        let answers = MemoryAnswerRepository::default();

        answers
            .save(NewAnswer {
                question_id: 1,
                text: "yes".to_string(),
                is_true: true,
            })
            .await
            .unwrap();
        answers
            .save_all(vec![
                NewAnswer {
                    question_id: 2,
                    text: "no".to_string(),
                    is_true: false,
                },
                NewAnswer {
                    question_id: 2,
                    text: "maybe".to_string(),
                    is_true: true,
                },
            ])
            .await
            .unwrap();

        assert_eq!(1, answers.find_by_question(1).await.unwrap().len());
        assert_eq!(2, answers.find_by_question(2).await.unwrap().len());

        answers.delete_by_question(2).await.unwrap();
        assert!(answers.find_by_question(2).await.unwrap().is_empty());
        assert_eq!(1, answers.find_all().await.unwrap().len());
    }
}
