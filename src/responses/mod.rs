pub mod html;

pub use html::{html_response, html_response_with_status, text_response};
