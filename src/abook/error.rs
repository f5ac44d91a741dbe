use thiserror::Error;

/// Rejections raised while constructing or assigning a contact field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("Invalid phone number: {0} (expected exactly 10 digits)")]
    InvalidPhone(String),

    #[error("Invalid birthday: {0} (expected DD.MM.YYYY)")]
    InvalidBirthday(String),
}

#[derive(Error, Debug)]
pub enum AbookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Phone {phone} not found for {contact}")]
    PhoneNotFound { contact: String, phone: String },

    #[error("No birthday set for {0}")]
    NoBirthday(String),

    #[error("Birthday {birthday} has no date in year {year}")]
    BirthdayOutOfRange { birthday: String, year: i32 },

    #[error("Invalid row at line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: ValidationError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, AbookError>;
