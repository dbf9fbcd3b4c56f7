// src/domain/submission.rs

use thiserror::Error;

pub const MIN_AD_TEXT_CHARS: usize = 100;
pub const ZIP_CHARS: usize = 5;
pub const ROOMS_MIN: u8 = 1;
pub const ROOMS_MAX: u8 = 9;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Your property ad needs at least 100 characters (got {0})")]
    AdTextTooShort(usize),

    #[error("Please enter a valid zip")]
    InvalidZip,

    #[error("{field} must be a whole number between 1 and 9")]
    RoomsOutOfRange { field: &'static str },
}

/// Form fields exactly as posted, before any checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSubmission {
    pub ad_text: String,
    pub zip: String,
    pub beds: String,
    pub baths: String,
    pub pool: bool,
}

impl RawSubmission {
    /// Build from decoded `application/x-www-form-urlencoded` pairs.
    /// A checkbox only appears in the body when ticked.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut raw = RawSubmission::default();
        for (key, value) in pairs {
            match key.as_str() {
                "ad_text" => raw.ad_text = value,
                "zip" => raw.zip = value,
                "beds" => raw.beds = value,
                "baths" => raw.baths = value,
                "pool" => raw.pool = true,
                _ => {}
            }
        }
        raw
    }
}

/// A submission that passed validation. Beds, baths and pool are carried
/// along but nothing downstream reads them yet.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    pub ad_text: String,
    pub zip: String,
    pub beds: u8,
    pub baths: u8,
    pub pool: bool,
}

impl TryFrom<RawSubmission> for SubmissionRequest {
    type Error = ValidationError;

    /// Checks run in form order; the first failure wins.
    fn try_from(raw: RawSubmission) -> Result<Self, Self::Error> {
        let ad_len = raw.ad_text.chars().count();
        if ad_len < MIN_AD_TEXT_CHARS {
            return Err(ValidationError::AdTextTooShort(ad_len));
        }

        if raw.zip.chars().count() != ZIP_CHARS {
            return Err(ValidationError::InvalidZip);
        }

        let beds = parse_rooms(&raw.beds, "Beds")?;
        let baths = parse_rooms(&raw.baths, "Baths")?;

        Ok(SubmissionRequest {
            ad_text: raw.ad_text,
            zip: raw.zip,
            beds,
            baths,
            pool: raw.pool,
        })
    }
}

fn parse_rooms(raw: &str, field: &'static str) -> Result<u8, ValidationError> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|n| (ROOMS_MIN..=ROOMS_MAX).contains(n))
        .ok_or(ValidationError::RoomsOutOfRange { field })
}
