use thiserror::Error;

use crate::model::question::QuestionId;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while serving a request.
///
/// The set is closed so callers can match exhaustively and translate each
/// kind into their own failure response.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Db(#[from] mongodb::error::Error),
    #[error(transparent)]
    Config(#[from] figment::Error),
    #[error("No question with ID {0}")]
    NotFound(QuestionId),
    #[error("A question with the text \"{0}\" already exists")]
    AlreadyExists(String),
    #[error("The answer set contains no true answer")]
    NoTrueAnswer,
    #[error("The answer set contains more than one true answer")]
    SeveralTrueAnswers,
}
