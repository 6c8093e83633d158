//! 西班牙语数字拼写模块
//!
//! 将整数拼写为西班牙语单词
//!
//! 与英语不同：
//! - "mil" 前不加 "un"，"millón/millones" 按乘数是否为 1 选择单复数
//! - 100 单独出现时为 "cien"，其余为 "ciento ..."
//! - 计数用法（名词或数量级之前）做词尾脱落："uno" → "un"，"veintiuno" → "veintiún"

use crate::words::lexicon::{SPANISH, SPANISH_HUNDREDS};

const MILLION: u64 = 1_000_000;
const THOUSAND: u64 = 1_000;

/// 西班牙语数字拼写器
pub struct SpanishNumberSpeller;

impl SpanishNumberSpeller {
    /// 计数用法拼写（后接名词或数量级）
    ///
    /// # 示例
    /// ```
    /// # use amount_words_core::words::SpanishNumberSpeller;
    /// assert_eq!(SpanishNumberSpeller::spell(21), "veintiún");
    /// assert_eq!(SpanishNumberSpeller::spell(1_000_000), "un millón");
    /// ```
    pub fn spell(number: u64) -> String {
        if number == 0 {
            return SPANISH.ones[0].to_string();
        }

        let mut words = String::new();
        let mut number = number;

        // 百万
        let millions = number / MILLION;
        if millions > 0 {
            if millions == 1 {
                words.push_str("un millón ");
            } else {
                words.push_str(&Self::spell(millions));
                words.push_str(" millones ");
            }
            number %= MILLION;
        }

        // 千
        let thousands = number / THOUSAND;
        if thousands > 0 {
            if thousands == 1 {
                words.push_str("mil ");
            } else {
                words.push_str(&Self::spell_up_to_999(thousands));
                words.push_str(" mil ");
            }
            number %= THOUSAND;
        }

        if number > 0 {
            words.push_str(&Self::spell_up_to_999(number));
        }

        words.trim_end().to_string()
    }

    /// 拼写 1-999，末尾的 "uno" 做词尾脱落
    fn spell_up_to_999(number: u64) -> String {
        if number == 100 {
            return "cien".to_string();
        }

        let mut words = String::new();
        let hundreds = (number / 100) as usize;
        let tens_and_ones = (number % 100) as usize;

        if hundreds > 0 {
            words.push_str(SPANISH_HUNDREDS[hundreds]);
        }

        if tens_and_ones > 0 {
            if hundreds > 0 {
                words.push(' ');
            }
            if tens_and_ones < 30 {
                words.push_str(SPANISH.ones[tens_and_ones]);
            } else {
                words.push_str(SPANISH.tens[tens_and_ones / 10]);
                let ones = tens_and_ones % 10;
                if ones > 0 {
                    words.push_str(" y ");
                    words.push_str(SPANISH.ones[ones]);
                }
            }
        }

        Self::apply_apocope(words)
    }

    /// 词尾脱落："veintiuno" → "veintiún"，其余以 "uno" 结尾的去掉末尾 "o"
    fn apply_apocope(mut words: String) -> String {
        if let Some(head) = words.strip_suffix("veintiuno") {
            return format!("{}veintiún", head);
        }
        if words.ends_with("uno") {
            words.pop();
        }
        words
    }
}
