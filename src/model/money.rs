// src/model/money.rs
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A KRW amount. The API sends integers for most prices but decimals for a
/// few aggregates (averages, converted prices); both round to whole won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Krw(pub i64);

impl Krw {
    pub fn won(self) -> i64 {
        self.0
    }
}

impl From<i64> for Krw {
    fn from(v: i64) -> Self {
        Krw(v)
    }
}

impl fmt::Display for Krw {
    /// `₩1,234,000` (negative: `-₩1,234`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}₩{}", crate::format::thousands(self.0.unsigned_abs()))
    }
}

impl Serialize for Krw {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

struct KrwVisitor;

impl<'de> de::Visitor<'de> for KrwVisitor {
    type Value = Krw;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a KRW amount as integer, float or numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Krw, E> { Ok(Krw(v)) }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Krw, E> {
        i64::try_from(v).map(Krw).map_err(|_| E::custom("KRW amount out of range"))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Krw, E> {
        if v.is_finite() { Ok(Krw(v.round() as i64)) } else { Err(E::custom("non-finite KRW amount")) }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Krw, E> {
        let cleaned: String = v.chars().filter(|c| *c != ',').collect();
        cleaned
            .trim()
            .parse::<f64>()
            .map_err(|_| E::custom(format!("invalid KRW amount: {v}")))
            .and_then(|f| self.visit_f64(f))
    }
}

impl<'de> Deserialize<'de> for Krw {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(KrwVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_integer_float_and_string() {
        let v: Vec<Krw> = serde_json::from_str(r#"[150000, 149999.6, "1,200"]"#).unwrap();
        assert_eq!(v, vec![Krw(150000), Krw(150000), Krw(1200)]);
    }

    #[test]
    fn displays_with_won_sign_and_separators() {
        assert_eq!(Krw(1_234_000).to_string(), "₩1,234,000");
        assert_eq!(Krw(-5_000).to_string(), "-₩5,000");
        assert_eq!(Krw(0).to_string(), "₩0");
    }
}
