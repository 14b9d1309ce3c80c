use bigdecimal::BigDecimal;
use serde::{
    Deserialize, Deserializer,
    de::{self, Visitor},
};
use std::{borrow::Cow, fmt, str::FromStr};
use validator::ValidationError;

const MAX_DECIMAL_PLACES: i64 = 2;
const MAX_INTEGER_DIGITS: u32 = 8;

/// Checks that a value fits a `NUMERIC(10, 2)` column.
pub fn validate_money(value: &BigDecimal) -> Result<(), ValidationError> {
    let (_, scale) = value.normalized().as_bigint_and_exponent();
    if scale > MAX_DECIMAL_PLACES {
        return Err(ValidationError::new("decimal_places").with_message(Cow::from(
            "Ensure that there are no more than 2 decimal places.",
        )));
    }

    if value.abs() >= BigDecimal::from(10_i64.pow(MAX_INTEGER_DIGITS)) {
        return Err(ValidationError::new("max_digits").with_message(Cow::from(
            "Ensure that there are no more than 8 digits before the decimal point.",
        )));
    }

    Ok(())
}

pub fn validate_price(value: &BigDecimal) -> Result<(), ValidationError> {
    if *value < BigDecimal::from(0) {
        return Err(ValidationError::new("min_value")
            .with_message(Cow::from("Price cannot be negative.")));
    }

    validate_money(value)
}

/// Rescales a validated amount to the two fractional digits it is stored with.
pub fn to_money(value: &BigDecimal) -> BigDecimal {
    value.with_scale(MAX_DECIMAL_PLACES)
}

/// Amount sent either as a numeric string or as a JSON number.
///
/// Floats are read through their shortest round-trip text, so `19.99`
/// arrives as `19.99` and not as its binary expansion.
struct Money(BigDecimal);

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = BigDecimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(BigDecimal::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(BigDecimal::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        if !value.is_finite() {
            return Err(E::custom("A valid number is required."));
        }
        BigDecimal::from_str(&value.to_string())
            .map_err(|_| E::custom("A valid number is required."))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        BigDecimal::from_str(value.trim()).map_err(|_| E::custom("A valid number is required."))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor).map(Money)
    }
}

pub fn deserialize_money<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BigDecimal, D::Error> {
    Money::deserialize(deserializer).map(|money| money.0)
}

pub fn deserialize_optional_money<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<BigDecimal>, D::Error> {
    Ok(Option::<Money>::deserialize(deserializer)?.map(|money| money.0))
}
