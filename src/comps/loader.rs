// loader.rs
use crate::comps::models::RawListing;
use crate::comps::CompsError;
use crate::config::CompsConfig;
use crate::domain::ListingRecord;
use std::fs;
use std::path::PathBuf;

/// How many fast sales are used as style templates.
pub const MAX_COMPARABLES: usize = 5;

/// Anything that can hand back comparable ad texts, fastest sale first.
pub trait ComparableSource: Send + Sync {
    fn comparables(&self) -> Result<Vec<String>, CompsError>;
}

/// Reads the JSON dataset from disk on every call. No caching.
#[derive(Debug, Clone)]
pub struct JsonDatasetSource {
    path: PathBuf,
}

impl JsonDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(cfg: &CompsConfig) -> Self {
        Self::new(cfg.dataset_path.clone())
    }
}

impl ComparableSource for JsonDatasetSource {
    fn comparables(&self) -> Result<Vec<String>, CompsError> {
        let raw = load_dataset(&self.path)?;
        let texts = fastest_selling_texts(&raw)?;
        tracing::debug!(
            path = %self.path.display(),
            records = raw.len(),
            selected = texts.len(),
            "loaded comparables"
        );
        Ok(texts)
    }
}

pub fn load_dataset(path: impl AsRef<std::path::Path>) -> Result<Vec<RawListing>, CompsError> {
    let path = path.as_ref();
    let body = fs::read_to_string(path).map_err(|source| CompsError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&body)?)
}

/// Flatten every record, then pick the fastest sales. A record with unusable
/// dates fails the whole batch.
pub fn fastest_selling_texts(raw: &[RawListing]) -> Result<Vec<String>, CompsError> {
    let records = raw
        .iter()
        .map(ListingRecord::from_raw)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(select_fastest(&records, MAX_COMPARABLES))
}

/// Sales with an ad body that took more than a day, ordered by days on
/// market (stable, so ties keep dataset order), truncated to `limit`.
pub fn select_fastest(records: &[ListingRecord], limit: usize) -> Vec<String> {
    let mut eligible: Vec<(i64, &str)> = records
        .iter()
        .filter(|r| r.days_to_sell > 1)
        .filter_map(|r| r.text.as_deref().map(|text| (r.days_to_sell, text)))
        .collect();
    eligible.sort_by_key(|(days, _)| *days);

    eligible
        .into_iter()
        .take(limit)
        .map(|(_, text)| text.to_string())
        .collect()
}
