use envy::Error as EnvyError;
use warden_client_sdk::utils::signature::SigningError;
use warden_interfaces::{
    api::error::ServerError,
    data::{question_list::QuestionListError, repeat_range::InvalidRepeatRange},
};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Env error: {0}")]
    EnvError(#[from] EnvyError),

    #[error("PRIVATE_KEY is not set")]
    MissingPrivateKey,

    #[error("PRIVATE_KEY is invalid: {0}")]
    InvalidPrivateKey(#[from] SigningError),

    #[error("Invalid {name} setting: {source}")]
    InvalidRange {
        name: &'static str,
        source: InvalidRepeatRange,
    },

    #[error("Question list error: {0}")]
    QuestionListError(#[from] QuestionListError),

    #[error("Server error: {0}")]
    ServerError(#[from] ServerError),
}
