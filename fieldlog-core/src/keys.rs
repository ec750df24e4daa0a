//! Key constants used by the typed setters on [`FieldBuilder`](crate::FieldBuilder).

pub const ERROR: &str = "error";
pub const ACCOUNT_ID: &str = "account-id";
pub const ISSUER: &str = "issuer";
pub const REQUEST_ID: &str = "request-id";
pub const METHOD: &str = "method";
pub const PATH: &str = "path";
pub const IP: &str = "ip";
pub const URL: &str = "url";
pub const TIMESTAMP: &str = "timestamp";
pub const STATUS: &str = "status";
pub const DURATION: &str = "duration";
pub const DURATION_MS: &str = "duration-ms";
pub const IS_PANIC: &str = "is-panic";
pub const REQUEST_DUMP: &str = "request-dump";
pub const HEADERS: &str = "headers";
pub const STACKTRACE: &str = "stack";
pub const KIND: &str = "type";
pub const MESSAGE_TYPE: &str = "message-type";
pub const EVENT_ID: &str = "event-id";
pub const EVENT_TYPE: &str = "event-type";
pub const EVENT_TOPIC: &str = "event-topic";
