//! 自检模块
//!
//! 用固定用例表逐条调用 `to_words`，输出 PASS/FAIL 报告

mod cases;

use std::fmt;

use rust_decimal::Decimal;

pub use cases::SELF_TEST_CASES;

use crate::words::{to_words, Currency, Language};

/// 自检用例
#[derive(Debug, Clone, Copy)]
pub struct SelfTestCase {
    pub language: Language,
    pub currency: Currency,
    pub amount: Decimal,
    pub expected: &'static str,
}

/// 单条用例的执行结果
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub case: SelfTestCase,
    /// 实际输出（出错时为错误信息）
    pub actual: String,
    pub passed: bool,
}

/// 一组（语言, 货币）用例的报告
#[derive(Debug, Clone)]
pub struct SuiteReport {
    pub language: Language,
    pub currency: Currency,
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.outcomes.is_empty() {
            return writeln!(
                f,
                "No test suite found for Language: {} and Currency: {}.",
                self.language, self.currency
            );
        }

        writeln!(f, "--- Testing {} ({}) ---", self.language, self.currency)?;
        for outcome in &self.outcomes {
            let status = if outcome.passed { "PASS" } else { "FAIL" };
            writeln!(f, "{} => {} ({})", outcome.case.amount, outcome.actual, status)?;
        }
        Ok(())
    }
}

/// 运行单组用例
pub fn run_suite(language: Language, currency: Currency) -> SuiteReport {
    let outcomes: Vec<CaseOutcome> = SELF_TEST_CASES
        .iter()
        .filter(|case| case.language == language && case.currency == currency)
        .map(|case| {
            let (actual, passed) = match to_words(case.amount, case.language, case.currency) {
                Ok(text) => {
                    let passed = text == case.expected;
                    (text, passed)
                }
                Err(e) => (e.to_string(), false),
            };
            CaseOutcome {
                case: *case,
                actual,
                passed,
            }
        })
        .collect();

    let report = SuiteReport {
        language,
        currency,
        outcomes,
    };

    if report.all_passed() {
        tracing::info!("Self-test {} ({}): {} passed", language, currency, report.passed());
    } else {
        tracing::warn!(
            "Self-test {} ({}): {} passed, {} failed",
            language,
            currency,
            report.passed(),
            report.failed()
        );
    }

    report
}

/// 运行全部用例组（Spanish/Peso, Spanish/Dollar, English/Dollar, English/Peso）
pub fn run_all() -> Vec<SuiteReport> {
    [
        (Language::Spanish, Currency::Peso),
        (Language::Spanish, Currency::Dollar),
        (Language::English, Currency::Dollar),
        (Language::English, Currency::Peso),
    ]
    .into_iter()
    .map(|(language, currency)| run_suite(language, currency))
    .collect()
}

/// 将多组报告拼成一段文本（组间空两行）
pub fn render_reports(reports: &[SuiteReport]) -> String {
    reports
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
