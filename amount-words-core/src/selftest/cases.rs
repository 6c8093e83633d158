//! 自检用例表
//!
//! 每种语言/货币组合的固定用例：金额 → 期望文字

use rust_decimal_macros::dec;

use super::SelfTestCase;
use crate::words::{Currency, Language};

const fn case(
    language: Language,
    currency: Currency,
    amount: rust_decimal::Decimal,
    expected: &'static str,
) -> SelfTestCase {
    SelfTestCase {
        language,
        currency,
        amount,
        expected,
    }
}

pub static SELF_TEST_CASES: &[SelfTestCase] = &[
    // Spanish / Peso
    case(Language::Spanish, Currency::Peso, dec!(0), "Cero pesos"),
    case(Language::Spanish, Currency::Peso, dec!(1.00), "Un peso"),
    case(Language::Spanish, Currency::Peso, dec!(21.00), "Veintiún pesos"),
    case(Language::Spanish, Currency::Peso, dec!(100.00), "Cien pesos"),
    case(Language::Spanish, Currency::Peso, dec!(101.50), "Ciento un pesos con cincuenta centavos"),
    case(Language::Spanish, Currency::Peso, dec!(1000.00), "Mil pesos"),
    case(Language::Spanish, Currency::Peso, dec!(1001.00), "Mil un pesos"),
    case(Language::Spanish, Currency::Peso, dec!(2000.00), "Dos mil pesos"),
    case(Language::Spanish, Currency::Peso, dec!(1000000.00), "Un millón de pesos"),
    case(Language::Spanish, Currency::Peso, dec!(2000000.00), "Dos millones de pesos"),
    case(Language::Spanish, Currency::Peso, dec!(1151021.21), "Un millón ciento cincuenta y un mil veintiún pesos con veintiún centavos"),
    case(Language::Spanish, Currency::Peso, dec!(1000005150.79), "Mil millones cinco mil ciento cincuenta pesos con setenta y nueve centavos"),
    case(Language::Spanish, Currency::Peso, dec!(1234567890.50), "Mil doscientos treinta y cuatro millones quinientos sesenta y siete mil ochocientos noventa pesos con cincuenta centavos"),
    case(Language::Spanish, Currency::Peso, dec!(330015551000.02), "Trescientos treinta mil quince millones quinientos cincuenta y un mil pesos con dos centavos"),
    // Spanish / Dollar
    case(Language::Spanish, Currency::Dollar, dec!(0), "Cero dólares"),
    case(Language::Spanish, Currency::Dollar, dec!(1.00), "Un dólar"),
    case(Language::Spanish, Currency::Dollar, dec!(21.00), "Veintiún dólares"),
    case(Language::Spanish, Currency::Dollar, dec!(100.00), "Cien dólares"),
    case(Language::Spanish, Currency::Dollar, dec!(101.50), "Ciento un dólares con cincuenta centavos"),
    case(Language::Spanish, Currency::Dollar, dec!(1000.00), "Mil dólares"),
    case(Language::Spanish, Currency::Dollar, dec!(1001.00), "Mil un dólares"),
    case(Language::Spanish, Currency::Dollar, dec!(2000.00), "Dos mil dólares"),
    case(Language::Spanish, Currency::Dollar, dec!(1000000.00), "Un millón de dólares"),
    case(Language::Spanish, Currency::Dollar, dec!(2000000.00), "Dos millones de dólares"),
    case(Language::Spanish, Currency::Dollar, dec!(1151021.21), "Un millón ciento cincuenta y un mil veintiún dólares con veintiún centavos"),
    case(Language::Spanish, Currency::Dollar, dec!(1000005150.79), "Mil millones cinco mil ciento cincuenta dólares con setenta y nueve centavos"),
    case(Language::Spanish, Currency::Dollar, dec!(1234567890.50), "Mil doscientos treinta y cuatro millones quinientos sesenta y siete mil ochocientos noventa dólares con cincuenta centavos"),
    case(Language::Spanish, Currency::Dollar, dec!(330015551000.02), "Trescientos treinta mil quince millones quinientos cincuenta y un mil dólares con dos centavos"),
    // English / Dollar
    case(Language::English, Currency::Dollar, dec!(0), "Zero dollars"),
    case(Language::English, Currency::Dollar, dec!(1.00), "One dollar"),
    case(Language::English, Currency::Dollar, dec!(21.00), "Twenty-one dollars"),
    case(Language::English, Currency::Dollar, dec!(100.00), "One hundred dollars"),
    case(Language::English, Currency::Dollar, dec!(101.50), "One hundred and one dollars and fifty cents"),
    case(Language::English, Currency::Dollar, dec!(1000.00), "One thousand dollars"),
    case(Language::English, Currency::Dollar, dec!(1001.00), "One thousand and one dollars"),
    case(Language::English, Currency::Dollar, dec!(2000.00), "Two thousand dollars"),
    case(Language::English, Currency::Dollar, dec!(1000000.00), "One million dollars"),
    case(Language::English, Currency::Dollar, dec!(1151021.21), "One million one hundred and fifty-one thousand and twenty-one dollars and twenty-one cents"),
    case(Language::English, Currency::Dollar, dec!(1000005150.79), "One billion five thousand one hundred and fifty dollars and seventy-nine cents"),
    case(Language::English, Currency::Dollar, dec!(1234567890.50), "One billion two hundred and thirty-four million five hundred and sixty-seven thousand eight hundred and ninety dollars and fifty cents"),
    case(Language::English, Currency::Dollar, dec!(330015551000.02), "Three hundred and thirty billion fifteen million five hundred and fifty-one thousand dollars and two cents"),
    // English / Peso
    case(Language::English, Currency::Peso, dec!(0), "Zero pesos"),
    case(Language::English, Currency::Peso, dec!(1.00), "One peso"),
    case(Language::English, Currency::Peso, dec!(21.00), "Twenty-one pesos"),
    case(Language::English, Currency::Peso, dec!(100.00), "One hundred pesos"),
    case(Language::English, Currency::Peso, dec!(101.50), "One hundred and one pesos and fifty cents"),
    case(Language::English, Currency::Peso, dec!(1000.00), "One thousand pesos"),
    case(Language::English, Currency::Peso, dec!(1001.00), "One thousand and one pesos"),
    case(Language::English, Currency::Peso, dec!(2000.00), "Two thousand pesos"),
    case(Language::English, Currency::Peso, dec!(1000000.00), "One million pesos"),
    case(Language::English, Currency::Peso, dec!(1151021.21), "One million one hundred and fifty-one thousand and twenty-one pesos and twenty-one cents"),
    case(Language::English, Currency::Peso, dec!(1000005150.79), "One billion five thousand one hundred and fifty pesos and seventy-nine cents"),
    case(Language::English, Currency::Peso, dec!(1234567890.50), "One billion two hundred and thirty-four million five hundred and sixty-seven thousand eight hundred and ninety pesos and fifty cents"),
    case(Language::English, Currency::Peso, dec!(330015551000.02), "Three hundred and thirty billion fifteen million five hundred and fifty-one thousand pesos and two cents"),
];
