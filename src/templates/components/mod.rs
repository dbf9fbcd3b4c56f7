pub mod ad_form;
pub mod alerts;
pub mod error;

pub use ad_form::{ad_form, FormVm};
pub use alerts::{error_alert, notice_alert, success_alert};
pub use error::html_error_response;
