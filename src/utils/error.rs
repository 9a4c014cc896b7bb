use thiserror::Error;

#[derive(Error, Debug)]
pub enum LotteryError {
    #[error("a set must have between {min} and {max} numbers, got {actual}")]
    LengthError { min: usize, max: usize, actual: usize },

    #[error("number {value} is outside the range 1 to 60")]
    RangeError { value: i32 },

    #[error("number {value} appears more than once")]
    DuplicateError { value: i32 },

    #[error("Failed to read game store '{path}': {message}")]
    StorageReadError { path: String, message: String },

    #[error("Failed to write game store '{path}': {message}")]
    StorageWriteError { path: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Storage,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LotteryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LotteryError::LengthError { .. }
            | LotteryError::RangeError { .. }
            | LotteryError::DuplicateError { .. } => ErrorCategory::Validation,
            LotteryError::StorageReadError { .. } | LotteryError::StorageWriteError { .. } => {
                ErrorCategory::Storage
            }
            LotteryError::ConfigError { .. } => ErrorCategory::Configuration,
            LotteryError::RenderError { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage | ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn is_validation_error(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }

    /// 給使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            LotteryError::LengthError { min, max, actual } if min == max => {
                format!("O resultado deve ter exatamente {} números (recebidos {})", min, actual)
            }
            LotteryError::LengthError { min, max, actual } => {
                format!("O jogo deve ter entre {} e {} números (recebidos {})", min, max, actual)
            }
            LotteryError::RangeError { value } => {
                format!("Os números devem estar entre 1 e 60 (recebido {})", value)
            }
            LotteryError::DuplicateError { value } => {
                format!("Os números não podem se repetir ({} repetido)", value)
            }
            LotteryError::StorageReadError { path, .. } => {
                format!("Erro ao carregar jogos de '{}'", path)
            }
            LotteryError::StorageWriteError { path, .. } => {
                format!("Erro ao salvar jogos em '{}'", path)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LotteryError::LengthError { .. } => "Check how many numbers were passed on the command line",
            LotteryError::RangeError { .. } => "Use only numbers from 1 to 60",
            LotteryError::DuplicateError { .. } => "Remove the repeated number and try again",
            LotteryError::StorageReadError { .. } => {
                "Check that the store file is valid JSON, or move it away to start a new store"
            }
            LotteryError::StorageWriteError { .. } => {
                "Check write permissions and free space for the store path"
            }
            LotteryError::ConfigError { .. } => "Check the TOML configuration file syntax",
            LotteryError::RenderError { .. } => "Try another output format with --format",
        }
    }
}

pub type Result<T> = std::result::Result<T, LotteryError>;
