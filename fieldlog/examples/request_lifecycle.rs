use std::time::{Duration, Instant};

use chrono::Utc;
use fieldlog::{FieldBuilder, RequestContext, logger_config};
use uuid::Uuid;

/// Stands in for the outgoing call; `--fail` makes it refuse the connection.
fn send(fail: bool) -> Result<u16, std::io::Error> {
    std::thread::sleep(Duration::from_millis(25));
    if fail {
        Err(std::io::Error::other("connection refused"))
    } else {
        Ok(201)
    }
}

fn main() -> fieldlog::Result<()> {
    // FIELDLOG_ENV picks the preset, FIELDLOG_LEVEL the level (debug by default)
    let root = logger_config().with_name("request_lifecycle").init_global()?;

    let ctx = RequestContext::new().with_fields(
        &root,
        FieldBuilder::new().request_id(&Uuid::new_v4().to_string()).build(),
    );
    let logger = ctx.logger(&root);

    let url = format!(
        "https://example.com/posts/{}/comments/{}?from={}",
        123, 456, "johndoe"
    );
    let start = Instant::now();
    let request = FieldBuilder::new()
        .issuer("johndoe")
        .account_id(123)
        .url(&url)
        .method("POST")
        .headers(vec!["Content-Type: application/json".into()])
        .timestamp(&Utc::now().to_rfc3339());
    logger.debug("Sending request...", request.build());

    let outcome = send(std::env::args().any(|arg| arg == "--fail"));

    let response = request
        .duration_ms(i64::try_from(start.elapsed().as_millis()).unwrap_or(i64::MAX))
        .timestamp(&Utc::now().to_rfc3339());
    match outcome {
        Ok(status) => logger.info("Request completed.", response.status(status).build()),
        Err(err) => logger.info("Request failed.", response.status(503).error(&err).build()),
    }

    log::info!("done");
    root.flush();
    Ok(())
}
