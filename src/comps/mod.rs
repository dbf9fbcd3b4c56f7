mod comps_error;
mod loader;
pub mod models;

pub use comps_error::CompsError;
pub use loader::{ComparableSource, JsonDatasetSource};
