use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, Database};

use super::collection::{id_filter, Coll};
use super::counter::{Counter, QUESTION_ID_COUNTER};
use crate::error::Result;
use crate::model::question::{NewQuestion, Question, QuestionId};
use crate::repository::QuestionRepository;

/// Question store backed by the `questions` collection.
#[derive(Clone)]
pub struct MongoQuestionRepository {
    questions: Coll<Question>,
    counters: Coll<Counter>,
}

impl MongoQuestionRepository {
    /// Get a handle on the question store in the given database.
    pub fn from_db(db: &Database) -> Self {
        Self {
            questions: Coll::from_db(db),
            counters: Coll::from_db(db),
        }
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn save(&self, question: NewQuestion) -> Result<Question> {
        let id = Counter::next(&self.counters, QUESTION_ID_COUNTER).await?;
        let question = Question { id, question };
        self.questions.insert_one(&question, None).await?;
        Ok(question)
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>> {
        Ok(self.questions.find_one(id_filter(id), None).await?)
    }

    async fn find_by_text(&self, text: &str) -> Result<Option<Question>> {
        Ok(self
            .questions
            .find_one(doc! { "text": text }, None)
            .await?)
    }

    async fn find_all(&self) -> Result<Vec<Question>> {
        let by_insertion = FindOptions::builder().sort(doc! { "_id": 1 }).build();
        Ok(self
            .questions
            .find(None, by_insertion)
            .await?
            .try_collect()
            .await?)
    }

    async fn replace(&self, id: QuestionId, question: NewQuestion) -> Result<bool> {
        let question = Question { id, question };
        let result = self
            .questions
            .replace_one(id_filter(id), &question, None)
            .await?;
        Ok(result.matched_count == 1)
    }

    async fn delete_by_id(&self, id: QuestionId) -> Result<bool> {
        let result = self.questions.delete_one(id_filter(id), None).await?;
        Ok(result.deleted_count == 1)
    }

    async fn delete_all(&self) -> Result<()> {
        self.questions.delete_many(doc! {}, None).await?;
        Ok(())
    }
}
