//! 课程价格
//!
//! 以整数分存储，两位小数，最多 10 位有效数字（≤ 99,999,999.99）。
//! 序列化为 `"150.00"` 形式的字符串，反序列化接受字符串或数字。

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

pub const MAX_PRICE_CENTS: i64 = 9_999_999_999;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    /// 价格合法：非负且不超过 10 位数字
    pub fn is_valid(&self) -> bool {
        (0..=MAX_PRICE_CENTS).contains(&self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl FromStr for Price {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("invalid price: '{s}'"));
        }
        if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("price must have at most 2 decimal places: '{s}'"));
        }
        if whole.len() > 8 {
            return Err(format!("price must have at most 10 digits: '{s}'"));
        }

        let whole: i64 = whole.parse().map_err(|_| format!("invalid price: '{s}'"))?;
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| format!("invalid price: '{s}'"))? * 10,
            _ => frac.parse().map_err(|_| format!("invalid price: '{s}'"))?,
        };

        let cents = whole * 100 + frac;
        Ok(Price(if negative { -cents } else { cents }))
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::{Error, Visitor};

        struct PriceVisitor;

        impl<'de> Visitor<'de> for PriceVisitor {
            type Value = Price;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal price such as \"150.00\" or 150")
            }

            fn visit_str<E: Error>(self, value: &str) -> Result<Price, E> {
                value.parse().map_err(E::custom)
            }

            fn visit_i64<E: Error>(self, value: i64) -> Result<Price, E> {
                value
                    .checked_mul(100)
                    .map(Price)
                    .ok_or_else(|| E::custom("price out of range"))
            }

            fn visit_u64<E: Error>(self, value: u64) -> Result<Price, E> {
                i64::try_from(value)
                    .ok()
                    .and_then(|v| v.checked_mul(100))
                    .map(Price)
                    .ok_or_else(|| E::custom("price out of range"))
            }

            fn visit_f64<E: Error>(self, value: f64) -> Result<Price, E> {
                // 先格式化为两位小数再解析，避免浮点截断
                format!("{value:.2}").parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("150".parse::<Price>().unwrap().cents(), 15000);
        assert_eq!("150.5".parse::<Price>().unwrap().cents(), 15050);
        assert_eq!("0.07".parse::<Price>().unwrap().to_string(), "0.07");
        assert_eq!(Price::from_cents(13000).to_string(), "130.00");
        assert!("1.234".parse::<Price>().is_err());
        assert!("123456789.00".parse::<Price>().is_err());
        assert!("abc".parse::<Price>().is_err());
    }

    #[test]
    fn test_validity_bounds() {
        assert!(Price::from_cents(0).is_valid());
        assert!(Price::from_cents(MAX_PRICE_CENTS).is_valid());
        assert!(!"-1.00".parse::<Price>().unwrap().is_valid());
    }

    #[test]
    fn test_json_accepts_string_and_number() {
        let p: Price = serde_json::from_str("\"99.90\"").unwrap();
        assert_eq!(p.cents(), 9990);
        let p: Price = serde_json::from_str("12").unwrap();
        assert_eq!(p.cents(), 1200);
        let p: Price = serde_json::from_str("19.99").unwrap();
        assert_eq!(p.cents(), 1999);
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"19.99\"");
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::from_cents(10000), Price::from_cents(5000)]
            .into_iter()
            .sum();
        assert_eq!(total.to_string(), "150.00");
    }
}
