use thiserror::Error;

#[derive(Error, Debug)]
pub enum AmountWordsError {
    // 金额错误
    #[error("Amount out of range: {amount} exceeds the largest supported whole part ({max})")]
    OutOfRange { amount: String, max: u64 },

    #[error("Negative amount not supported: {0}")]
    NegativeAmount(String),

    #[error("Invalid number format: {0}")]
    InvalidAmount(String),

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config directory not available")]
    ConfigDirUnavailable,

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AmountWordsResult<T> = Result<T, AmountWordsError>;
