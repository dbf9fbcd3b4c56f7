// src/domain/listing.rs

use crate::comps::models::RawListing;
use crate::comps::CompsError;
use chrono::NaiveDate;

/// A historical sale, flattened from the raw dataset shape and carrying the
/// derived time on market.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRecord {
    pub url: Option<String>,
    /// Records without an ad body still rank, but are never used as templates.
    pub text: Option<String>,

    pub sold_on: NaiveDate,
    pub listed_on: NaiveDate,
    /// `sold_on - listed_on` in whole days. Can be zero or negative on bad data.
    pub days_to_sell: i64,

    pub last_sold_price: Option<f64>,
    pub list_price: Option<f64>,
    pub baths: Option<f64>,
    pub beds: Option<f64>,
    pub sqft: Option<f64>,
    pub year_built: Option<i32>,
}

impl ListingRecord {
    /// Validates the dates needed to rank a sale and derives `days_to_sell`.
    /// The listing date comes from the first history entry.
    pub fn from_raw(raw: &RawListing) -> Result<Self, CompsError> {
        let sold_raw = raw
            .sold_on
            .as_deref()
            .ok_or(CompsError::MissingField("soldOn"))?;

        let listed_raw = raw
            .history
            .first()
            .and_then(|h| h.listing.as_ref())
            .and_then(|l| l.list_date.as_deref())
            .ok_or(CompsError::MissingField("history[0].listing.list_date"))?;

        let sold_on = parse_day(sold_raw)?;
        let listed_on = parse_day(listed_raw)?;

        Ok(ListingRecord {
            url: raw.url.clone(),
            text: raw.text.clone(),
            sold_on,
            listed_on,
            days_to_sell: (sold_on - listed_on).num_days(),
            last_sold_price: raw.last_sold_price,
            list_price: raw.list_price,
            baths: raw.baths,
            beds: raw.beds,
            sqft: raw.sqft,
            year_built: raw
                .year_built
                .filter(|y| y.is_finite() && y.fract() == 0.0)
                .map(|y| y as i32),
        })
    }
}

/// Dates in the dataset are ISO timestamps; only the `YYYY-MM-DD` prefix counts.
fn parse_day(raw: &str) -> Result<NaiveDate, CompsError> {
    let prefix = raw
        .get(..10)
        .ok_or_else(|| CompsError::BadDate(raw.to_string()))?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").map_err(|_| CompsError::BadDate(raw.to_string()))
}
