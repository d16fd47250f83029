// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Scalar encoding
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! JSON encoding of `f64` that keeps non-finite values.
//!
//! `serde_json` writes `NaN` and `±inf` as `null` and then refuses to read
//! them back. Multiplication overflow is allowed to produce such values, so
//! persisted results encode them as `"NaN"`, `"Infinity"`, `"-Infinity"`.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A single `f64` with non-finite-safe serde.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar(pub f64);

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.is_finite() {
            serializer.serialize_f64(v)
        } else if v.is_nan() {
            serializer.serialize_str("NaN")
        } else if v > 0.0 {
            serializer.serialize_str("Infinity")
        } else {
            serializer.serialize_str("-Infinity")
        }
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or one of \"NaN\", \"Infinity\", \"-Infinity\"")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Scalar, E> {
        Ok(Scalar(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
        Ok(Scalar(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
        Ok(Scalar(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Scalar, E> {
        match v {
            "NaN" => Ok(Scalar(f64::NAN)),
            "Infinity" => Ok(Scalar(f64::INFINITY)),
            "-Infinity" => Ok(Scalar(f64::NEG_INFINITY)),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// `#[serde(with = "scalar::vec")]` for `Vec<f64>`.
pub mod vec {
    use super::Scalar;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        let wrapped: Vec<Scalar> = values.iter().copied().map(Scalar).collect();
        wrapped.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let wrapped = Vec::<Scalar>::deserialize(deserializer)?;
        Ok(wrapped.into_iter().map(|s| s.0).collect())
    }
}

/// `#[serde(with = "scalar::nested")]` for `Vec<Vec<f64>>`.
pub mod nested {
    use super::Scalar;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(rows: &[Vec<f64>], serializer: S) -> Result<S::Ok, S::Error> {
        let wrapped: Vec<Vec<Scalar>> = rows
            .iter()
            .map(|row| row.iter().copied().map(Scalar).collect())
            .collect();
        wrapped.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<f64>>, D::Error> {
        let wrapped = Vec::<Vec<Scalar>>::deserialize(deserializer)?;
        Ok(wrapped
            .into_iter()
            .map(|row| row.into_iter().map(|s| s.0).collect())
            .collect())
    }
}
