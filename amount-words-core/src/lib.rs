//! amount-words Core
//!
//! 金额转文字核心库（英语 / 西班牙语，美元 / 比索）

#![warn(rust_2018_idioms)]

pub mod words;
pub mod selftest;
pub mod config;
pub mod error;

// Re-export key types
pub use error::{AmountWordsError, AmountWordsResult};
pub use words::{parse_amount, to_words, Converter, Currency, Language};
pub use config::{AmountWordsConfig, ConverterConfig};

/// 初始化日志系统
///
/// 生产模式: 静默
/// 调试模式 (--features debug-logs): 按 AMOUNT_WORDS_LOG 过滤，默认 warn
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("AMOUNT_WORDS_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // 使用 try_init() 代替 init()，避免重复初始化时 panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_init_logging_twice() {
        super::init_logging();
        super::init_logging();
    }
}
