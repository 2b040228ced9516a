//! Serde helpers for the `BigInt` scalars returned by the indexer and the
//! order book.
//!
//! Values may arrive as decimal strings, `0x` hex strings or plain JSON
//! numbers, for any integer target. JSON numbers are only exact up to
//! `u64::MAX`; larger ones are rejected and have to be sent as strings. Values
//! are always written back as decimal strings.

use std::{fmt, marker::PhantomData, str::FromStr};

use alloy_primitives::U256;
use serde::{
    de::{self, Visitor},
    Deserializer, Serializer,
};

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr,
    T::Err: fmt::Display,
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IntegerVisitor(PhantomData))
}

struct IntegerVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for IntegerVisitor<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an unsigned integer or an integer string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        parse_integer(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        parse_integer(&v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        parse_integer(&v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<T, E> {
        Err(E::custom(format!(
            "number {v} is not an exact 64-bit integer, send it as a string"
        )))
    }
}

fn parse_integer<T, E>(text: &str) -> Result<T, E>
where
    T: FromStr,
    T::Err: fmt::Display,
    E: de::Error,
{
    let text = text.trim();
    let invalid = |err: &dyn fmt::Display| E::custom(format!("invalid integer '{text}': {err}"));

    let decimal;
    let digits = if text.starts_with("0x") {
        decimal = U256::from_str(text).map_err(|err| invalid(&err))?.to_string();
        decimal.as_str()
    } else {
        text
    };

    digits.parse().map_err(|err| invalid(&err))
}
