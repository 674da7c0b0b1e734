use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Lookup request failed: {message}")]
    LookupError { message: String },

    #[error("Erro na adição do produto")]
    ProductAdditionError,

    #[error("Erro na remoção do produto")]
    ProductRemovalError,

    #[error("Erro na alteração de quantidade do produto")]
    ProductUpdateError,

    #[error("Quantidade solicitada fora de estoque")]
    OutOfStockError,

    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<reqwest::Error> for CartError {
    fn from(err: reqwest::Error) -> Self {
        CartError::LookupError {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A remote lookup could not be completed.
    Transport,
    /// A cart rule rejected the operation.
    Rule,
    Storage,
    Configuration,
    System,
}

impl CartError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CartError::LookupError { .. } => ErrorCategory::Transport,
            CartError::ProductAdditionError
            | CartError::ProductRemovalError
            | CartError::ProductUpdateError
            | CartError::OutOfStockError => ErrorCategory::Rule,
            CartError::StorageError(_) | CartError::SerializationError(_) => {
                ErrorCategory::Storage
            }
            CartError::ConfigError { .. }
            | CartError::InvalidConfigValueError { .. }
            | CartError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            CartError::ActorCommunicationError(_) => ErrorCategory::System,
        }
    }

    /// Text handed to the notification sink.
    ///
    /// Rule violations use their own message. Everything else is prefixed so a
    /// shopper can tell a failed request apart from a refused one.
    pub fn user_message(&self) -> String {
        match self.category() {
            ErrorCategory::Rule => self.to_string(),
            ErrorCategory::Transport => format!("Falha de comunicação: {}", self),
            _ => format!("Erro interno do carrinho: {}", self),
        }
    }

    pub fn is_rule_violation(&self) -> bool {
        self.category() == ErrorCategory::Rule
    }
}

pub type Result<T> = std::result::Result<T, CartError>;
