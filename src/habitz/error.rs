use thiserror::Error;

#[derive(Error, Debug)]
pub enum HabitzError {
    #[error("Invalid habit: {0}")]
    Validation(String),

    #[error("Habit already exists: {0}")]
    HabitExists(String),

    #[error("Habit not found: {0}")]
    HabitNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HabitzError>;
