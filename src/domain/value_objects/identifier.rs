//! Identifier value object - caller-supplied item ids
//!
//! Callers may hand us ids as strings or integers (JSON, TOML or Rust
//! literals). Both are normalized to their textual form so that `1` and
//! `"1"` address the same item.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A normalized item identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Create an identifier from any textual form (surrounding whitespace is trimmed)
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// The normalized text of this identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the integer value when the identifier is a canonical decimal integer
    pub fn as_integer(&self) -> Option<i64> {
        let value: i64 = self.0.parse().ok()?;
        // "01" or "+1" stay textual so that they survive a round trip unchanged
        (value.to_string() == self.0).then_some(value)
    }

    /// Returns true if the normalized identifier is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&String> for Identifier {
    fn from(value: &String) -> Self {
        Self::new(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Identifier {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64, usize);

/// Wire shape accepted for identifiers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIdentifier {
    Signed(i64),
    Unsigned(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawIdentifier::deserialize(deserializer)? {
            RawIdentifier::Signed(n) => Identifier::from(n),
            RawIdentifier::Unsigned(n) => Identifier::from(n),
            RawIdentifier::Text(s) => Identifier::new(s),
        })
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_integer() {
            Some(n) => serializer.serialize_i64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}
