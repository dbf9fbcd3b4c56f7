pub mod listing;
pub mod submission;

pub use listing::ListingRecord;
pub use submission::{RawSubmission, SubmissionRequest, ValidationError};
