use serde::{Deserialize, Serialize};

/// Dashboard ticker entry. Every numeric field is `None` when the quote for
/// that symbol could not be fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexQuote {
    pub name: String,
    pub symbol: String,
    pub price: Option<f64>,
    pub change: Option<f64>,
    pub percent_change: Option<f64>,
}

impl IndexQuote {
    pub fn unavailable(symbol: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            price: None,
            change: None,
            percent_change: None,
        }
    }
}
