//! 金额拆分模块
//!
//! 将十进制金额拆分为整数部分和两位辅币部分

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{AmountWordsError, AmountWordsResult};

/// 待转换金额
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountToConvert {
    /// 整数部分（截断）
    pub whole: u64,
    /// 辅币部分 0-99（四舍六入五成双）
    pub cents: u32,
}

impl AmountToConvert {
    /// 整数部分上限
    pub const MAX_WHOLE: u64 = u64::MAX;

    /// 拆分金额
    ///
    /// # 返回
    /// - `Err(NegativeAmount)`: 金额小于零
    /// - `Err(OutOfRange)`: 整数部分超出 u64
    pub fn split(amount: Decimal) -> AmountWordsResult<Self> {
        if amount < Decimal::ZERO {
            return Err(AmountWordsError::NegativeAmount(amount.to_string()));
        }

        let out_of_range = || AmountWordsError::OutOfRange {
            amount: amount.to_string(),
            max: Self::MAX_WHOLE,
        };

        let mut whole = amount.trunc().to_u64().ok_or_else(out_of_range)?;

        let mut cents = (amount.fract() * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            .to_u32()
            .unwrap_or(0);

        // 0.995 之类的金额舍入后进位到整数部分
        if cents >= 100 {
            whole = whole.checked_add(1).ok_or_else(out_of_range)?;
            cents -= 100;
        }

        Ok(Self { whole, cents })
    }

    pub fn is_zero(&self) -> bool {
        self.whole == 0 && self.cents == 0
    }
}

/// 解析金额文本（去除首尾空白和千位分隔符 `,`）
pub fn parse_amount(text: &str) -> AmountWordsResult<Decimal> {
    let trimmed = text.trim();
    let digits: String = trimmed.chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&digits).map_err(|e| {
        tracing::debug!("Invalid number format: {:?} ({})", text, e);
        AmountWordsError::InvalidAmount(trimmed.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_split_whole_and_cents() {
        let amount = AmountToConvert::split(dec!(101.50)).unwrap();
        assert_eq!(amount, AmountToConvert { whole: 101, cents: 50 });

        let amount = AmountToConvert::split(dec!(330015551000.02)).unwrap();
        assert_eq!(amount.whole, 330_015_551_000);
        assert_eq!(amount.cents, 2);
    }

    #[test]
    fn test_split_rounds_cents_half_to_even() {
        assert_eq!(AmountToConvert::split(dec!(1.125)).unwrap().cents, 12);
        assert_eq!(AmountToConvert::split(dec!(1.135)).unwrap().cents, 14);
        assert_eq!(AmountToConvert::split(dec!(1.006)).unwrap().cents, 1);
    }

    #[test]
    fn test_split_carries_full_cent_rounding() {
        let amount = AmountToConvert::split(dec!(0.999)).unwrap();
        assert_eq!(amount, AmountToConvert { whole: 1, cents: 0 });
    }

    #[test]
    fn test_zero() {
        assert!(AmountToConvert::split(Decimal::ZERO).unwrap().is_zero());
        assert!(AmountToConvert::split(dec!(0.004)).unwrap().is_zero());
        assert!(!AmountToConvert::split(dec!(0.01)).unwrap().is_zero());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 101.50 ").unwrap(), dec!(101.50));
        assert!(matches!(parse_amount(""), Err(AmountWordsError::InvalidAmount(_))));
        assert!(matches!(parse_amount("12abc"), Err(AmountWordsError::InvalidAmount(_))));
    }

    #[test]
    fn test_parse_amount_with_group_separators() {
        assert_eq!(parse_amount("1,000.50").unwrap(), dec!(1000.50));
        assert_eq!(parse_amount(" 1,234,567.89 ").unwrap(), dec!(1234567.89));
        assert!(matches!(parse_amount(","), Err(AmountWordsError::InvalidAmount(_))));
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(
            AmountToConvert::split(dec!(-1.00)),
            Err(AmountWordsError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_out_of_range() {
        let too_big = Decimal::from(u64::MAX) + Decimal::ONE;
        assert!(matches!(
            AmountToConvert::split(too_big),
            Err(AmountWordsError::OutOfRange { .. })
        ));

        let max = AmountToConvert::split(Decimal::from(u64::MAX)).unwrap();
        assert_eq!(max.whole, u64::MAX);
    }
}
