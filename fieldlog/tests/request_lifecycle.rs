use std::time::Duration;

use fieldlog::{Environment, FieldBuilder, LogBuffer, Logger, RequestContext, logger_config};

fn production_logger(buffer: &LogBuffer) -> Logger {
    logger_config()
        .with_environment(Environment::Production)
        .with_level("debug")
        .with_writer(buffer.clone())
        .build()
        .unwrap()
}

fn body(line: &str) -> &str {
    // time, level, then the message and its fields
    line.splitn(3, '\t').nth(2).unwrap()
}

#[test]
fn test_request_then_response_fields() {
    let buffer = LogBuffer::new();
    let logger = production_logger(&buffer);

    let request = FieldBuilder::new()
        .issuer("ysyesilyurt")
        .account_id(123)
        .url("https://example.com/posts/123/comments/456")
        .method("POST")
        .timestamp("start");
    logger.debug("Sending request", request.build());

    let response = request
        .status(404)
        .duration(Duration::from_millis(15))
        .timestamp("end");
    logger.info("Request failed", response.build());

    let lines = buffer.lines();
    assert_eq!(
        body(&lines[0]),
        "Sending request\tissuer=\"ysyesilyurt\" account-id=123 url=\"https://example.com/posts/123/comments/456\" method=\"POST\" timestamp=\"start\""
    );
    assert_eq!(
        body(&lines[1]),
        "Request failed\tissuer=\"ysyesilyurt\" account-id=123 url=\"https://example.com/posts/123/comments/456\" method=\"POST\" timestamp=\"end\" status=404 duration=15ms"
    );
}

#[test]
fn test_contexts_are_independent_per_request() {
    let buffer = LogBuffer::new();
    let root = production_logger(&buffer);

    let first = RequestContext::new().with_fields(&root, FieldBuilder::new().request_id("a").build());
    let second = RequestContext::new().with_fields(&root, FieldBuilder::new().request_id("b").build());
    first.logger(&root).info("one", FieldBuilder::new().status(200).build());
    second.logger(&root).info("two", FieldBuilder::new().build());
    root.info("three", FieldBuilder::new().build());

    let lines = buffer.lines();
    assert_eq!(body(&lines[0]), "one\trequest-id=\"a\" status=200");
    assert_eq!(body(&lines[1]), "two\trequest-id=\"b\"");
    assert_eq!(body(&lines[2]), "three");
}
