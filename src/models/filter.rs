//! Price-range filter for the cross-catalog model listing

use serde::{Deserialize, Serialize};

/// Raw filter values as entered in the form.
///
/// The values are not interpreted here; their meaning as price bounds is
/// defined by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ModelFilter {
    #[serde(default)]
    pub greater: Option<String>,
    #[serde(default)]
    pub lower: Option<String>,
}

impl ModelFilter {
    #[cfg(test)]
    pub fn new(greater: impl Into<String>, lower: impl Into<String>) -> Self {
        Self {
            greater: Some(greater.into()),
            lower: Some(lower.into()),
        }
    }

    /// Resource path for `GET /models`.
    ///
    /// `greater=<v>&` is appended when `greater` is non-empty and `lower=<v>`
    /// when `lower` is non-empty, so an empty filter yields `/models?`.
    pub fn to_path(&self) -> String {
        let mut path = String::from("/models?");
        if let Some(greater) = non_empty(&self.greater) {
            path.push_str(&format!("greater={}&", urlencoding::encode(greater)));
        }
        if let Some(lower) = non_empty(&self.lower) {
            path.push_str(&format!("lower={}", urlencoding::encode(lower)));
        }
        path
    }

    pub fn greater_value(&self) -> &str {
        self.greater.as_deref().unwrap_or_default()
    }

    pub fn lower_value(&self) -> &str {
        self.lower.as_deref().unwrap_or_default()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
