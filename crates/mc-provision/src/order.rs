//! WooCommerce order payload, deserialized leniently.
//!
//! Stores send metadata values as strings or numbers interchangeably, and
//! optional sections are sometimes `null` rather than absent. Nothing in here
//! rejects a payload that the extractor could still make sense of.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderEvent {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub billing: Billing,
    #[serde(default, deserialize_with = "null_as_default")]
    pub line_items: Vec<LineItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta_data: Vec<MetaEntry>,
}

impl OrderEvent {
    /// Parse a raw webhook body.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Only the first line item carries server options.
    pub fn first_line_item(&self) -> Option<&LineItem> {
        self.line_items.first()
    }

    pub fn meta(&self, key: &str) -> Option<&MetaValue> {
        find_meta(&self.meta_data, key)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Billing {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta_data: Vec<MetaEntry>,
}

impl LineItem {
    pub fn meta(&self, key: &str) -> Option<&MetaValue> {
        find_meta(&self.meta_data, key)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetaEntry {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: MetaValue,
}

/// A metadata value as the store sent it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    Other(Value),
}

impl Default for MetaValue {
    fn default() -> Self {
        Self::Other(Value::Null)
    }
}

impl MetaValue {
    /// Trimmed text, or a number rendered in decimal. Empty text is absent.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Text(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_string())
            }
            Self::Number(n) => Some(n.to_string()),
            Self::Bool(_) | Self::Other(_) => None,
        }
    }

    /// A strictly positive integer. Fractions are truncated.
    pub fn as_positive_int(&self) -> Option<u64> {
        let n = match self {
            Self::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(truncate)),
            Self::Text(s) => {
                let s = s.trim();
                s.parse::<u64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(truncate))
            }
            Self::Bool(_) | Self::Other(_) => None,
        }?;
        (n > 0).then_some(n)
    }

    pub fn as_positive_u32(&self) -> Option<u32> {
        self.as_positive_int().and_then(|n| u32::try_from(n).ok())
    }
}

fn truncate(f: f64) -> Option<u64> {
    (f.is_finite() && f >= 1.0 && f < u64::MAX as f64).then(|| f.trunc() as u64)
}

/// First entry whose key matches case-insensitively.
pub fn find_meta<'a>(entries: &'a [MetaEntry], key: &str) -> Option<&'a MetaValue> {
    entries
        .iter()
        .find(|m| m.key.eq_ignore_ascii_case(key))
        .map(|m| &m.value)
}

fn lenient_id<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    let value = Option::<MetaValue>::deserialize(d)?;
    Ok(value.and_then(|v| v.as_positive_int()).unwrap_or(0))
}

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}
