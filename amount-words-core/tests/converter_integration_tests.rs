//! 金额转文字集成测试
//!
//! 通过公开 API 测试完整的转换管道
//!
//! 运行方式（带详细日志）：
//!   RUST_LOG=debug cargo test --test converter_integration_tests -- --nocapture

use amount_words_core::{
    selftest, to_words, AmountWordsConfig, AmountWordsError, Converter, Currency, Language,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// 初始化日志（忽略重复初始化错误）
fn init_log() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

fn es_peso(amount: Decimal) -> String {
    to_words(amount, Language::Spanish, Currency::Peso).unwrap()
}

fn en_dollar(amount: Decimal) -> String {
    to_words(amount, Language::English, Currency::Dollar).unwrap()
}

#[test]
fn test_spanish_peso_scenarios() {
    init_log();

    assert_eq!(es_peso(dec!(0)), "Cero pesos");
    assert_eq!(es_peso(dec!(1.00)), "Un peso");
    assert_eq!(es_peso(dec!(21.00)), "Veintiún pesos");
    assert_eq!(es_peso(dec!(100.00)), "Cien pesos");
    assert_eq!(es_peso(dec!(101.50)), "Ciento un pesos con cincuenta centavos");
    assert_eq!(es_peso(dec!(1000000.00)), "Un millón de pesos");
}

#[test]
fn test_english_dollar_scenarios() {
    init_log();

    assert_eq!(en_dollar(dec!(0)), "Zero dollars");
    assert_eq!(en_dollar(dec!(21.00)), "Twenty-one dollars");
    assert_eq!(
        en_dollar(dec!(101.50)),
        "One hundred and one dollars and fifty cents"
    );
    assert_eq!(en_dollar(dec!(1001.00)), "One thousand and one dollars");
}

#[test]
fn test_zero_uses_plural_for_every_combination() {
    for language in Language::ALL {
        for currency in Currency::ALL {
            let text = to_words(Decimal::ZERO, language, currency).unwrap();
            let expected_start = match language {
                Language::English => "Zero ",
                Language::Spanish => "Cero ",
            };
            assert!(text.starts_with(expected_start), "{}", text);
            assert!(text.ends_with('s'), "{}", text);
        }
    }
}

#[test]
fn test_spanish_apocope_before_nouns_and_scales() {
    // 名词前
    assert_eq!(es_peso(dec!(31)), "Treinta y un pesos");
    assert_eq!(es_peso(dec!(0.01)), "Un centavo");
    // 数量级前
    assert_eq!(es_peso(dec!(21000)), "Veintiún mil pesos");
    assert_eq!(es_peso(dec!(41000000)), "Cuarenta y un millones de pesos");
    assert_eq!(es_peso(dec!(121)), "Ciento veintiún pesos");
}

#[test]
fn test_spanish_de_only_for_exact_millions() {
    assert!(es_peso(dec!(3000000)).ends_with("millones de pesos"));
    assert!(es_peso(dec!(3000000.40)).contains("millones de pesos con"));
    assert!(!es_peso(dec!(3000001)).contains(" de "));
    assert!(!es_peso(dec!(3001000)).contains(" de "));
}

#[test]
fn test_spanish_dollar_nouns() {
    assert_eq!(
        to_words(dec!(1.01), Language::Spanish, Currency::Dollar).unwrap(),
        "Un dólar con un centavo"
    );
}

#[test]
fn test_english_peso_uses_cents() {
    assert_eq!(
        to_words(dec!(2.02), Language::English, Currency::Peso).unwrap(),
        "Two pesos and two cents"
    );
}

#[test]
fn test_rejects_negative_and_overflow() {
    let negative = to_words(dec!(-0.50), Language::English, Currency::Dollar);
    assert!(matches!(negative, Err(AmountWordsError::NegativeAmount(_))));

    let overflow = to_words(
        dec!(99999999999999999999999),
        Language::Spanish,
        Currency::Peso,
    );
    match overflow {
        Err(e @ AmountWordsError::OutOfRange { .. }) => {
            assert!(e.to_string().contains("out of range"));
        }
        other => panic!("expected OutOfRange, got {:?}", other),
    }
}

#[test]
fn test_largest_whole_amount() {
    let text = en_dollar(Decimal::from(u64::MAX));
    assert!(text.starts_with("Eighteen billion"), "{}", text);
    assert!(text.ends_with("six hundred and fifteen dollars"), "{}", text);
}

#[test]
fn test_self_test_harness_all_pass() {
    init_log();

    let reports = selftest::run_all();
    assert_eq!(reports.len(), 4);
    for report in &reports {
        assert!(report.all_passed(), "{}", report);
    }

    let rendered = selftest::render_reports(&reports);
    assert!(rendered.starts_with("--- Testing Spanish (Peso) ---"));
    assert!(!rendered.contains("(FAIL)"));
}

#[test]
fn test_converter_from_default_config() {
    let config = AmountWordsConfig::default();
    let converter = Converter::from_config(&config.converter);
    assert_eq!(converter.convert(dec!(1)).unwrap(), "One dollar");
}

#[test]
fn test_concurrent_calls_are_consistent() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                (0..200u32)
                    .map(|n| es_peso(Decimal::from(n * 1013)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for other in &results[1..] {
        assert_eq!(&results[0], other);
    }
}
