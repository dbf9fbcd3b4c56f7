use serde::{Deserialize, Deserializer};
use serde_json::Value;

// listing
//  ├── url
//  ├── text
//  ├── soldOn              "2023-03-15T00:00:00Z"
//  ├── lastSoldPrice
//  ├── listPrice
//  ├── baths / beds / sqft / year_built
//  └── history[]
//       └── listing
//            └── list_date  "2023-03-01T00:00:00Z"
//
// Everything is optional here; `ListingRecord::from_raw` decides what is required.
// Numeric fields are informational, so a value of the wrong shape reads as absent.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    pub url: Option<String>,
    pub text: Option<String>,
    pub sold_on: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub last_sold_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub list_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub baths: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub beds: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub sqft: Option<f64>,
    #[serde(rename = "year_built", default, deserialize_with = "lenient_number")]
    pub year_built: Option<f64>,

    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryEntry {
    pub listing: Option<HistoryListing>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryListing {
    pub list_date: Option<String>,
}

/// Accepts numbers and numeric strings ("1,850" included); anything else is `None`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    })
}
