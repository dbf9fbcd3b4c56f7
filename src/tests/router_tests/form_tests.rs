use crate::router::handle;
use crate::tests::utils::{stubbed_pipeline, StubGenerator, StubSource};
use astra::Body;
use http::{Method, Request};
use std::io::Read;

#[test]
fn home_page_renders_the_form() {
    let stubs = stubbed_pipeline(StubSource::ok(vec![]), StubGenerator::ok("unused"));

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &stubs.pipeline).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();

    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains(r#"name="ad_text""#));
    assert!(body.contains(r#"name="zip""#));
    assert!(body.contains(r#"name="beds""#));
    assert!(body.contains(r#"name="baths""#));
    assert!(body.contains(r#"name="pool""#));
    assert!(body.contains("Generate"));

    // Rendering the form never touches the pipeline.
    assert_eq!(stubs.source_calls.get(), 0);
    assert_eq!(stubs.generator_calls.get(), 0);
}

#[test]
fn health_check_is_plain_text() {
    let stubs = stubbed_pipeline(StubSource::ok(vec![]), StubGenerator::ok("unused"));

    let req = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &stubs.pipeline).unwrap();
    assert_eq!(resp.status(), 200);

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    assert_eq!(body, "ok");
}

#[test]
fn unknown_routes_are_not_found() {
    let stubs = stubbed_pipeline(StubSource::ok(vec![]), StubGenerator::ok("unused"));

    for (method, uri) in [
        (Method::GET, "/admin"),
        (Method::GET, "/optimize"),
        (Method::DELETE, "/"),
    ] {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        assert!(matches!(
            handle(req, &stubs.pipeline),
            Err(crate::errors::ServerError::NotFound)
        ));
    }
}
