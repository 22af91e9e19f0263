//! Model entity (a product line that belongs to one brand)

use serde::{Deserialize, Serialize};

/// A catalog entry belonging to exactly one brand.
///
/// The owning brand is implied by the path the model was fetched from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Model {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub average_price: Option<f64>,
}

/// Payload for `POST /brands/{brand_id}/models`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateModelInput {
    pub name: String,
    /// Serialized as `null` when the entered text is not a finite number;
    /// the backend decides whether that is acceptable.
    pub average_price: Option<f64>,
}

impl CreateModelInput {
    pub fn from_form(name: String, average_price: &str) -> Self {
        Self {
            name,
            average_price: parse_price(average_price),
        }
    }
}

/// Parse user-entered price text.
///
/// Reads the longest leading decimal number (optional sign, digits, fraction
/// and exponent) after leading whitespace and ignores the rest, so `12abc`
/// is 12. Returns `None` when there is no leading number or the value is not
/// finite.
pub fn parse_price(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
