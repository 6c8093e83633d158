//! 金额转文字模块
//!
//! 将十进制金额转换为英语或西班牙语的货币文字表达

pub mod lexicon;
pub mod amount;
pub mod english_number;
pub mod spanish_number;
pub mod converter;

// 导出核心类型
pub use lexicon::{Currency, CurrencyNames, Language, WordLexicon};
pub use amount::{parse_amount, AmountToConvert};
pub use english_number::EnglishNumberSpeller;
pub use spanish_number::SpanishNumberSpeller;
pub use converter::{to_words, Converter};
