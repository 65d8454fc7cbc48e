use thiserror::Error;

// The registry itself raises no errors: capture drops silently on a mode
// mismatch and averaging signals through its return value. This taxonomy
// covers the configuration and file-loading layer around it.
#[derive(Error, Debug)]
pub enum MarksError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Marks file error: {message}")]
    TomlParseError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, MarksError>;
