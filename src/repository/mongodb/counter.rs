use log::debug;
use mongodb::{
    bson::doc,
    error::Error as DbError,
    options::{FindOneAndUpdateOptions, ReturnDocument, UpdateOptions},
};
use serde::{Deserialize, Serialize};

use super::collection::Coll;
use crate::error::Result;

/// Counter allocating question IDs.
pub const QUESTION_ID_COUNTER: &str = "question_id";
/// Counter allocating answer IDs.
pub const ANSWER_ID_COUNTER: &str = "answer_id";

/// A counter object used to implement auto-increment IDs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counter {
    #[serde(rename = "_id")]
    pub id: String,
    pub next: u32,
}

impl Counter {
    /// Atomically retrieve the next value of the counter with the given ID.
    pub async fn next(counters: &Coll<Counter>, id: &str) -> Result<u32> {
        let update = doc! {
            "$inc": { "next": 1 }
        };
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::Before)
            .build();
        let counter = counters
            .find_one_and_update(doc! { "_id": id }, update, options)
            .await?
            .ok_or_else(|| DbError::custom(format!("Missing counter {id}")))?;
        Ok(counter.next)
    }
}

/// Ensure the auto-increment counters exist, starting at 1.
///
/// This operation is idempotent.
pub async fn ensure_counters_exist(counters: &Coll<Counter>) -> Result<()> {
    debug!("Ensuring ID counters exist");

    for id in [QUESTION_ID_COUNTER, ANSWER_ID_COUNTER] {
        let update = doc! {
            "$setOnInsert": { "next": 1 }
        };
        let options = UpdateOptions::builder().upsert(true).build();
        counters
            .update_one(doc! { "_id": id }, update, options)
            .await?;
    }

    Ok(())
}
