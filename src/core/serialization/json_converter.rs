// src/core/serialization/json_converter.rs

use num::BigUint;
use serde::ser::{SerializeSeq, SerializeTuple, Serializer};

/// Big integers are written as decimal strings so JSON readers never round them.
pub mod json_converters {
    use super::*;

    pub fn serialize_biguint<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn serialize_option_biguint<S>(value: &Option<BigUint>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_some(&v.to_str_radix(10)),
            None => serializer.serialize_none(),
        }
    }

    pub fn serialize_biguint_vec<S>(values: &[BigUint], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&value.to_str_radix(10))?;
        }
        seq.end()
    }

    pub fn serialize_biguint_pair<S>(pair: &(BigUint, BigUint), serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&pair.0.to_str_radix(10))?;
        tuple.serialize_element(&pair.1.to_str_radix(10))?;
        tuple.end()
    }
}

#[cfg(test)]
mod tests {
    use super::json_converters;
    use num::BigUint;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Record {
        #[serde(serialize_with = "json_converters::serialize_biguint")]
        value: BigUint,
        #[serde(serialize_with = "json_converters::serialize_option_biguint")]
        missing: Option<BigUint>,
        #[serde(serialize_with = "json_converters::serialize_biguint_vec")]
        list: Vec<BigUint>,
        #[serde(serialize_with = "json_converters::serialize_biguint_pair")]
        pair: (BigUint, BigUint),
    }

    #[test]
    fn test_big_values_written_as_strings() {
        let record = Record {
            value: BigUint::from(2u32).pow(100),
            missing: None,
            list: vec![BigUint::from(3u32), BigUint::from(5u32)],
            pair: (BigUint::from(100u32), BigUint::from(144u32)),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"value":"1267650600228229401496703205376","missing":null,"list":["3","5"],"pair":["100","144"]}"#
        );
    }
}
