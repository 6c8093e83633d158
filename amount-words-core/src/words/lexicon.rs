//! 词表模块
//!
//! Language / Currency 枚举，以及各语言的数字词表与货币名词

use std::fmt;

use serde::{Deserialize, Serialize};

/// 输出语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    /// 全部语言（界面下拉框顺序）
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
        }
    }

    /// 该语言的词表
    pub fn lexicon(&self) -> &'static WordLexicon {
        match self {
            Language::English => &ENGLISH,
            Language::Spanish => &SPANISH,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 货币
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    Dollar,
    Peso,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Dollar, Currency::Peso];

    pub fn name(&self) -> &'static str {
        match self {
            Currency::Dollar => "Dollar",
            Currency::Peso => "Peso",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 货币单位名词（主单位 / 辅币，单数 / 复数）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyNames {
    pub major_singular: &'static str,
    pub major_plural: &'static str,
    pub minor_singular: &'static str,
    pub minor_plural: &'static str,
}

impl CurrencyNames {
    /// 按语言和货币查找单位名词
    ///
    /// 西班牙语的美元是 "dólar"，辅币统一为 "centavo"；英语辅币统一为 "cent"
    pub fn lookup(language: Language, currency: Currency) -> &'static CurrencyNames {
        match (language, currency) {
            (Language::English, Currency::Dollar) => &EN_DOLLAR,
            (Language::English, Currency::Peso) => &EN_PESO,
            (Language::Spanish, Currency::Dollar) => &ES_DOLLAR,
            (Language::Spanish, Currency::Peso) => &ES_PESO,
        }
    }

    /// 主单位名词，数量为 1 时用单数
    pub fn major(&self, count: u64) -> &'static str {
        if count == 1 {
            self.major_singular
        } else {
            self.major_plural
        }
    }

    /// 辅币名词，数量为 1 时用单数
    pub fn minor(&self, count: u32) -> &'static str {
        if count == 1 {
            self.minor_singular
        } else {
            self.minor_plural
        }
    }
}

const EN_DOLLAR: CurrencyNames = CurrencyNames {
    major_singular: "dollar",
    major_plural: "dollars",
    minor_singular: "cent",
    minor_plural: "cents",
};

const EN_PESO: CurrencyNames = CurrencyNames {
    major_singular: "peso",
    major_plural: "pesos",
    minor_singular: "cent",
    minor_plural: "cents",
};

const ES_DOLLAR: CurrencyNames = CurrencyNames {
    major_singular: "dólar",
    major_plural: "dólares",
    minor_singular: "centavo",
    minor_plural: "centavos",
};

const ES_PESO: CurrencyNames = CurrencyNames {
    major_singular: "peso",
    major_plural: "pesos",
    minor_singular: "centavo",
    minor_plural: "centavos",
};

/// 单语言数字词表
///
/// `ones` 覆盖 0-19（英语）或 0-29（西班牙语），`tens` 以十位数字为下标
#[derive(Debug)]
pub struct WordLexicon {
    pub ones: &'static [&'static str],
    pub tens: &'static [&'static str; 10],
    /// 金额为零时的句首词
    pub zero_title: &'static str,
    /// 整数与辅币之间的连接词
    pub connector: &'static str,
}

pub static ENGLISH: WordLexicon = WordLexicon {
    ones: &[
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
        "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
        "seventeen", "eighteen", "nineteen",
    ],
    tens: &[
        "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    ],
    zero_title: "Zero",
    connector: "and",
};

pub static SPANISH: WordLexicon = WordLexicon {
    ones: &[
        "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
        "diez", "once", "doce", "trece", "catorce", "quince", "dieciséis", "diecisiete",
        "dieciocho", "diecinueve", "veinte", "veintiuno", "veintidós", "veintitrés",
        "veinticuatro", "veinticinco", "veintiséis", "veintisiete", "veintiocho",
        "veintinueve",
    ],
    tens: &[
        "", "", "veinte", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta",
        "noventa",
    ],
    zero_title: "Cero",
    connector: "con",
};

/// 西班牙语百位词（下标为百位数字，0 为空；100 单独出现时另作 "cien"）
pub const SPANISH_HUNDREDS: [&str; 10] = [
    "", "ciento", "doscientos", "trescientos", "cuatrocientos", "quinientos", "seiscientos",
    "setecientos", "ochocientos", "novecientos",
];
