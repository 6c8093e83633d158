//! 英文数字拼写模块
//!
//! 将整数拼写为英文单词
//!
//! 支持：zero ~ nineteen, twenty, ..., ninety, hundred, thousand, million, billion
//! 百位之后的 1-99 前插入 "and"（"one hundred and one"）

use crate::words::lexicon::ENGLISH;

/// 英文数量级（从大到小）
const SCALES: [(u64, &str); 4] = [
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
    (100, "hundred"),
];

/// 英文数字拼写器
pub struct EnglishNumberSpeller;

impl EnglishNumberSpeller {
    /// 将整数拼写为英文单词
    ///
    /// # 示例
    /// ```
    /// # use amount_words_core::words::EnglishNumberSpeller;
    /// assert_eq!(EnglishNumberSpeller::spell(1001), "one thousand and one");
    /// ```
    pub fn spell(number: u64) -> String {
        if number == 0 {
            return ENGLISH.ones[0].to_string();
        }

        let mut words = String::new();
        let mut number = number;

        for (divisor, scale) in SCALES {
            let multiplier = number / divisor;
            if multiplier > 0 {
                words.push_str(&Self::spell(multiplier));
                words.push(' ');
                words.push_str(scale);
                words.push(' ');
                number %= divisor;
            }
        }

        if number > 0 {
            if !words.is_empty() {
                words.push_str("and ");
            }
            words.push_str(&Self::spell_below_hundred(number));
        }

        words.trim_end().to_string()
    }

    /// 拼写 1-99
    fn spell_below_hundred(number: u64) -> String {
        let number = number as usize;
        if number < 20 {
            return ENGLISH.ones[number].to_string();
        }

        let tens = ENGLISH.tens[number / 10];
        match number % 10 {
            0 => tens.to_string(),
            ones => format!("{}-{}", tens, ENGLISH.ones[ones]),
        }
    }
}
