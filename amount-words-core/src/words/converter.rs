//! 金额转大写 - 主入口
//!
//! 组合金额拆分、数字拼写和货币名词，输出完整的金额短语

use rust_decimal::Decimal;

use crate::config::ConverterConfig;
use crate::error::AmountWordsResult;
use crate::words::{
    AmountToConvert, CurrencyNames, Currency, EnglishNumberSpeller, Language,
    SpanishNumberSpeller,
};

const MILLION: u64 = 1_000_000;

/// 将金额转换为文字
///
/// # 参数
/// - `amount`: 非负金额，最多两位小数（更多位数按四舍六入五成双处理）
/// - `language`: 输出语言
/// - `currency`: 货币
///
/// # 返回
/// - `Ok(String)`: 首字母大写的金额短语（例如："One hundred and one dollars and fifty cents"）
/// - `Err`: 金额为负或整数部分超出范围
pub fn to_words(amount: Decimal, language: Language, currency: Currency) -> AmountWordsResult<String> {
    let split = AmountToConvert::split(amount).map_err(|e| {
        tracing::warn!("Amount conversion rejected: {}", e);
        e
    })?;

    let phrase = compose(split, language, currency);
    tracing::debug!("{} ({}, {}) => {}", amount, language, currency, phrase);
    Ok(phrase)
}

/// 拼接整数、货币名词、连接词和辅币
fn compose(amount: AmountToConvert, language: Language, currency: Currency) -> String {
    let lexicon = language.lexicon();
    let names = CurrencyNames::lookup(language, currency);

    if amount.is_zero() {
        return format!("{} {}", lexicon.zero_title, names.major_plural);
    }

    let mut parts: Vec<String> = Vec::new();

    if amount.whole > 0 {
        let words = spell(language, amount.whole);
        let needs_de = language == Language::Spanish
            && (words.ends_with("millón") || words.ends_with("millones"))
            && amount.whole % MILLION == 0;

        parts.push(words);
        // "un millón de pesos"：整百万后接名词需要 "de"
        if needs_de {
            parts.push("de".to_string());
        }
        parts.push(names.major(amount.whole).to_string());
    }

    if amount.cents > 0 {
        if amount.whole > 0 {
            parts.push(lexicon.connector.to_string());
        }
        parts.push(spell(language, u64::from(amount.cents)));
        parts.push(names.minor(amount.cents).to_string());
    }

    capitalize_first(parts.join(" ").trim())
}

/// 计数用法拼写
fn spell(language: Language, number: u64) -> String {
    match language {
        Language::English => EnglishNumberSpeller::spell(number),
        Language::Spanish => SpanishNumberSpeller::spell(number),
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 带默认语言/货币的转换器
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    language: Language,
    currency: Currency,
}

impl Converter {
    pub fn new(language: Language, currency: Currency) -> Self {
        Self { language, currency }
    }

    /// 从配置创建
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(config.default_language, config.default_currency)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// 使用默认语言和货币转换
    pub fn convert(&self, amount: Decimal) -> AmountWordsResult<String> {
        to_words(amount, self.language, self.currency)
    }
}
