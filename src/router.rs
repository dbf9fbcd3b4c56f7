use crate::domain::RawSubmission;
use crate::errors::{ResultResp, ServerError};
use crate::optimizer::{Outcome, Pipeline};
use crate::responses::{html_response, html_response_with_status, text_response};
use crate::templates::components::FormVm;
use crate::templates::pages;
use astra::Request;
use std::io::Read;

/// Form bodies larger than this are refused.
const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(req: Request, pipeline: &Pipeline) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page(&FormVm::default(), None)),
        ("GET", "/health") => text_response("ok"),
        ("POST", "/optimize") => optimize(req, pipeline),
        _ => Err(ServerError::NotFound),
    }
}

/// Runs one submission. htmx requests get just the result fragment; plain
/// form posts get the whole page back with the form refilled.
fn optimize(req: Request, pipeline: &Pipeline) -> ResultResp {
    let partial = req.headers().contains_key("hx-request");
    let raw = RawSubmission::from_pairs(read_form(req)?);
    let form = FormVm::from(&raw);

    let outcome = pipeline.session().submit(raw);
    let panel = pages::result_panel(&outcome);

    // htmx leaves the target untouched on 4xx/5xx, so fragments always
    // carry 200 and the error lives in the markup.
    if partial {
        html_response_with_status(200, panel)
    } else {
        html_response_with_status(
            page_status(&outcome),
            pages::home_page(&form, Some(panel)),
        )
    }
}

fn page_status(outcome: &Outcome) -> u16 {
    match outcome {
        Outcome::Optimized(_) => 200,
        Outcome::Rejected(_) => 422,
        Outcome::Failed(_) => 502,
    }
}

fn read_form(req: Request) -> Result<Vec<(String, String)>, ServerError> {
    let mut body = req.into_body();
    let mut buf = Vec::new();
    body.reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("could not read form body: {e}")))?;

    if buf.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form body too large".into()));
    }

    Ok(url::form_urlencoded::parse(&buf).into_owned().collect())
}
