//! Floating point members.
//!
//! Shapes derive `Eq` and `Hash`, which `f64` does not implement. [`Double`]
//! wraps the value and compares the bit patterns instead, so `NaN` equals
//! itself and `0.0` differs from `-0.0`.
//!
//! JSON has no literal for non-finite numbers; they travel as the strings
//! `"NaN"`, `"Infinity"` and `"-Infinity"`.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const NAN: &str = "NaN";
const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";

/// An `f64` with bitwise equality and hashing.
///
/// ## Examples
///
/// ```
/// use connect_define::Double;
///
/// let score = Double::from(4.5);
/// assert_eq!(score, Double(4.5));
/// assert_eq!(f64::from(score), 4.5);
/// assert_ne!(Double(0.0), Double(-0.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Double(pub f64);

impl Double {
    /// Returns the wrapped value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Double {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Double {}

impl Hash for Double {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for Double {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<f32> for Double {
    fn from(value: f32) -> Self {
        Self(f64::from(value))
    }
}

impl From<i32> for Double {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<Double> for f64 {
    fn from(value: Double) -> Self {
        value.0
    }
}

impl Serialize for Double {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = self.0;
        if value.is_nan() {
            serializer.serialize_str(NAN)
        } else if value == f64::INFINITY {
            serializer.serialize_str(INFINITY)
        } else if value == f64::NEG_INFINITY {
            serializer.serialize_str(NEG_INFINITY)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

struct DoubleVisitor;

impl Visitor<'_> for DoubleVisitor {
    type Value = Double;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or one of \"NaN\", \"Infinity\", \"-Infinity\"")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Double, E> {
        Ok(Double(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Double, E> {
        Ok(Double(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Double, E> {
        Ok(Double(value as f64))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Double, E> {
        match value {
            NAN => Ok(Double(f64::NAN)),
            INFINITY => Ok(Double(f64::INFINITY)),
            NEG_INFINITY => Ok(Double(f64::NEG_INFINITY)),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Double {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DoubleVisitor)
    }
}

impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
