//! MongoDB-backed repositories: the production store.

mod answer;
mod collection;
mod counter;
mod question;

pub use answer::MongoAnswerRepository;
pub use collection::{ensure_indexes_exist, id_filter, question_id_filter, Coll, MongoCollection};
pub use counter::{ensure_counters_exist, Counter, ANSWER_ID_COUNTER, QUESTION_ID_COUNTER};
pub use question::MongoQuestionRepository;

use log::{debug, info};
use mongodb::{Client, Database};

use crate::config::Config;
use crate::error::Result;

/// Connect to the backing store, performing any required setup: collection
/// indexes and ID counters are created if missing.
pub async fn connect(config: &Config) -> Result<Database> {
    debug!("Connecting to database...");
    let client = Client::with_uri_str(config.db_uri()).await?;
    let db = client.database(&database_name());

    // Ensure the required indexes and ID counters exist.
    ensure_indexes_exist(&db).await?;
    ensure_counters_exist(&Coll::from_db(&db)).await?;

    info!("Database connection online");
    Ok(db)
}

/// Get the name of the database to use (production version).
#[cfg(not(test))]
fn database_name() -> String {
    "quiz".to_string()
}

/// Get the name of the database to use (test version).
/// Use a random name to avoid collisions between tests.
#[cfg(test)]
fn database_name() -> String {
    let random: u32 = rand::random();
    let db = format!("test{random}");
    debug!("Using database {db}");
    db
}

// These tests need a running MongoDB instance, e.g.:
//   docker run --rm -p 27017:27017 mongo
#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::answer::NewAnswer;
    use crate::model::question::NewQuestion;
    use crate::repository::{AnswerRepository, QuestionRepository};

    #[tokio::test]
    #[ignore = "needs a running MongoDB"]
    async fn question_round_trip() {
        let db = connect(&Config::example()).await.unwrap();
        let questions = MongoQuestionRepository::from_db(&db);

        let saved = questions
            .save(NewQuestion {
                text: "Which ocean is the deepest?".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(
            Some(saved.clone()),
            questions.find_by_id(saved.id).await.unwrap()
        );
        assert_eq!(
            Some(saved.clone()),
            questions
                .find_by_text("Which ocean is the deepest?")
                .await
                .unwrap()
        );

        assert!(questions.delete_by_id(saved.id).await.unwrap());
        assert!(questions.find_all().await.unwrap().is_empty());

        db.drop(None).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "needs a running MongoDB"]
    async fn answers_cascade_by_question() {
        let db = connect(&Config::example()).await.unwrap();
        let answers = MongoAnswerRepository::from_db(&db);

        answers
            .save_all(vec![
                NewAnswer {
                    question_id: 1,
                    text: "Pacific".to_string(),
                    is_true: true,
                },
                NewAnswer {
                    question_id: 1,
                    text: "Atlantic".to_string(),
                    is_true: false,
                },
                NewAnswer {
                    question_id: 2,
                    text: "Nile".to_string(),
                    is_true: false,
                },
            ])
            .await
            .unwrap();

        assert_eq!(2, answers.find_by_question(1).await.unwrap().len());

        answers.delete_by_question(1).await.unwrap();
        assert!(answers.find_by_question(1).await.unwrap().is_empty());
        assert_eq!(1, answers.find_all().await.unwrap().len());

        db.drop(None).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "needs a running MongoDB"]
    async fn counter_increment() {
        let db = connect(&Config::example()).await.unwrap();
        let counters = Coll::<Counter>::from_db(&db);

        let first = Counter::next(&counters, QUESTION_ID_COUNTER).await.unwrap();
        let second = Counter::next(&counters, QUESTION_ID_COUNTER).await.unwrap();
        assert_eq!(second, first + 1);

        db.drop(None).await.unwrap();
    }
}
