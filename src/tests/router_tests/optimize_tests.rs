use crate::errors::ServerError;
use crate::llm::GenerationError;
use crate::router::handle;
use crate::templates::pages::DEGRADED_NOTICE;
use crate::tests::utils::{stubbed_pipeline, valid_submission, StubGenerator, StubSource};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

fn form_body(ad_text: &str, zip: &str, beds: &str, baths: &str, pool: bool) -> Vec<u8> {
    let mut ser = url::form_urlencoded::Serializer::new(String::new());
    ser.append_pair("ad_text", ad_text)
        .append_pair("zip", zip)
        .append_pair("beds", beds)
        .append_pair("baths", baths);
    if pool {
        ser.append_pair("pool", "on");
    }
    ser.finish().into_bytes()
}

fn valid_body() -> Vec<u8> {
    let s = valid_submission();
    form_body(&s.ad_text, &s.zip, &s.beds, &s.baths, s.pool)
}

fn post(body: Vec<u8>, htmx: bool) -> http::Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/optimize")
        .header("Content-Type", "application/x-www-form-urlencoded");
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder.body(Body::from(body)).unwrap()
}

fn body_of(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

#[test]
fn htmx_submit_returns_result_fragment() {
    let stubs = stubbed_pipeline(
        StubSource::ok(vec!["Fast seller one", "Fast seller two"]),
        StubGenerator::ok("A gleaming rewrite of your ad."),
    );

    let resp = handle(post(valid_body(), true), &stubs.pipeline).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_of(resp);
    assert!(body.contains("A gleaming rewrite of your ad."));
    assert!(body.contains("Done!"));
    assert!(body.contains("2 fast-selling comparable listings"));

    // Partial for swapping into #result
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));

    assert_eq!(stubs.source_calls.get(), 1);
    assert_eq!(stubs.composer_calls.get(), 1);
    assert_eq!(stubs.generator_calls.get(), 1);
}

#[test]
fn plain_submit_returns_full_page_with_form_refilled() {
    let stubs = stubbed_pipeline(StubSource::ok(vec!["comp"]), StubGenerator::ok("Rewritten."));

    let resp = handle(post(valid_body(), false), &stubs.pipeline).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_of(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Rewritten."));
    assert!(body.contains(r#"value="78704""#));
    assert!(body.contains("Spacious three bedroom ranch"));
}

#[test]
fn short_ad_and_bad_zip_are_rejected_without_calling_the_pipeline() {
    let stubs = stubbed_pipeline(StubSource::ok(vec!["comp"]), StubGenerator::ok("never"));

    let body = form_body(&"a".repeat(80), "1234", "2", "1", false);
    let resp = handle(post(body, true), &stubs.pipeline).unwrap();

    // Swappable status so the error lands in #result
    assert_eq!(resp.status(), 200);
    let body = body_of(resp);
    assert!(body.contains("Your property ad needs at least 100 characters"));
    assert!(body.contains("alert-error"));

    assert_eq!(stubs.source_calls.get(), 0);
    assert_eq!(stubs.composer_calls.get(), 0);
    assert_eq!(stubs.generator_calls.get(), 0);
}

#[test]
fn bad_zip_alone_is_reported() {
    let stubs = stubbed_pipeline(StubSource::ok(vec![]), StubGenerator::ok("never"));
    let s = valid_submission();

    let body = form_body(&s.ad_text, "123456", "3", "2", false);
    let resp = handle(post(body, true), &stubs.pipeline).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_of(resp).contains("Please enter a valid zip"));
    assert_eq!(stubs.generator_calls.get(), 0);
}

#[test]
fn generation_failure_is_an_inline_error() {
    let stubs = stubbed_pipeline(
        StubSource::ok(vec!["comp"]),
        StubGenerator::failing(GenerationError::Timeout),
    );

    let resp = handle(post(valid_body(), true), &stubs.pipeline).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_of(resp);
    assert!(body.contains("Generation failed, please try again."));
    assert!(body.contains("alert-error"));
    assert!(!body.contains("<html"));
    assert!(!body.contains("Done!"));
    assert_eq!(stubs.generator_calls.get(), 1);
}

#[test]
fn quota_failure_gets_its_own_message() {
    let stubs = stubbed_pipeline(
        StubSource::ok(vec![]),
        StubGenerator::failing(GenerationError::Quota("insufficient_quota".into())),
    );

    let resp = handle(post(valid_body(), true), &stubs.pipeline).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_of(resp).contains("quota is exhausted"));
}

#[test]
fn htmx_fragments_are_always_swappable() {
    let cases = [
        (
            form_body("too short", "78704", "3", "2", false),
            StubGenerator::ok("never"),
        ),
        (
            valid_body(),
            StubGenerator::failing(GenerationError::Authentication("bad key".into())),
        ),
        (valid_body(), StubGenerator::ok("Fine.")),
    ];

    for (body, generator) in cases {
        let stubs = stubbed_pipeline(StubSource::ok(vec!["comp"]), generator);
        let resp = handle(post(body, true), &stubs.pipeline).unwrap();
        assert!(
            (200..300).contains(&resp.status().as_u16()),
            "htmx skips the swap for status {}",
            resp.status()
        );
    }
}

#[test]
fn plain_posts_keep_error_statuses() {
    let stubs = stubbed_pipeline(StubSource::ok(vec!["comp"]), StubGenerator::ok("never"));
    let rejected = handle(post(form_body("short", "1234", "2", "1", false), false), &stubs.pipeline)
        .unwrap();
    assert_eq!(rejected.status(), 422);
    let body = body_of(rejected);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Your property ad needs at least 100 characters"));

    let stubs = stubbed_pipeline(
        StubSource::ok(vec!["comp"]),
        StubGenerator::failing(GenerationError::Timeout),
    );
    let failed = handle(post(valid_body(), false), &stubs.pipeline).unwrap();
    assert_eq!(failed.status(), 502);
    assert!(body_of(failed).contains("Generation failed, please try again."));
}

#[test]
fn dataset_failure_still_generates_with_notice() {
    let stubs = stubbed_pipeline(StubSource::failing(), StubGenerator::ok("Made do."));

    let resp = handle(post(valid_body(), true), &stubs.pipeline).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_of(resp);
    assert!(body.contains("Made do."));
    assert!(body.contains(DEGRADED_NOTICE));
    assert_eq!(stubs.generator_calls.get(), 1);
}

#[test]
fn oversized_bodies_are_bad_requests() {
    let stubs = stubbed_pipeline(StubSource::ok(vec![]), StubGenerator::ok("never"));

    let huge = form_body(&"x".repeat(70 * 1024), "12345", "1", "1", false);
    let result = handle(post(huge, true), &stubs.pipeline);

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
    assert_eq!(stubs.generator_calls.get(), 0);
}
