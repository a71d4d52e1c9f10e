use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, Database};

use super::collection::{question_id_filter, Coll};
use super::counter::{Counter, ANSWER_ID_COUNTER};
use crate::error::Result;
use crate::model::answer::{Answer, NewAnswer};
use crate::model::question::QuestionId;
use crate::repository::AnswerRepository;

/// Answer store backed by the `answers` collection.
#[derive(Clone)]
pub struct MongoAnswerRepository {
    answers: Coll<Answer>,
    counters: Coll<Counter>,
}

impl MongoAnswerRepository {
    /// Get a handle on the answer store in the given database.
    pub fn from_db(db: &Database) -> Self {
        Self {
            answers: Coll::from_db(db),
            counters: Coll::from_db(db),
        }
    }
}

#[async_trait]
impl AnswerRepository for MongoAnswerRepository {
    async fn save(&self, answer: NewAnswer) -> Result<Answer> {
        let id = Counter::next(&self.counters, ANSWER_ID_COUNTER).await?;
        let answer = Answer { id, answer };
        self.answers.insert_one(&answer, None).await?;
        Ok(answer)
    }

    async fn save_all(&self, answers: Vec<NewAnswer>) -> Result<Vec<Answer>> {
        // `insert_many` rejects an empty batch.
        if answers.is_empty() {
            return Ok(Vec::new());
        }

        let mut rows = Vec::with_capacity(answers.len());
        for answer in answers {
            let id = Counter::next(&self.counters, ANSWER_ID_COUNTER).await?;
            rows.push(Answer { id, answer });
        }
        self.answers.insert_many(&rows, None).await?;
        Ok(rows)
    }

    async fn find_by_question(&self, question_id: QuestionId) -> Result<Vec<Answer>> {
        let by_insertion = FindOptions::builder().sort(doc! { "_id": 1 }).build();
        Ok(self
            .answers
            .find(question_id_filter(question_id), by_insertion)
            .await?
            .try_collect()
            .await?)
    }

    async fn find_all(&self) -> Result<Vec<Answer>> {
        let by_insertion = FindOptions::builder().sort(doc! { "_id": 1 }).build();
        Ok(self
            .answers
            .find(None, by_insertion)
            .await?
            .try_collect()
            .await?)
    }

    async fn delete_by_question(&self, question_id: QuestionId) -> Result<()> {
        self.answers
            .delete_many(question_id_filter(question_id), None)
            .await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        self.answers.delete_many(doc! {}, None).await?;
        Ok(())
    }
}
