//! Brand model

use serde::{Deserialize, Serialize};

/// A top-level catalog entity.
///
/// `average_price` is an aggregate computed by the backend over the brand's
/// models; the console only displays it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub average_price: Option<f64>,
}

impl Brand {
    /// Find the brand a route parameter refers to.
    ///
    /// The id is the leading integer of the parameter, so `5abc` and `5.0`
    /// both refer to brand 5. A parameter without leading digits matches
    /// nothing.
    pub fn find_by_param<'a>(brands: &'a [Brand], brand_id: &str) -> Option<&'a Brand> {
        let id = leading_integer(brand_id)?;
        brands.iter().find(|brand| brand.id == id)
    }
}

/// Optional sign plus leading ASCII digits, after leading whitespace
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse().ok()
}

/// Payload for `POST /brands`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateBrandInput {
    pub name: String,
}
