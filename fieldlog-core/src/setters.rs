use std::time::Duration;

use crate::{builder::FieldBuilder, field::Field, keys};

/// Expands a table of `name(type) => KEY;` rows into chained setters on
/// [`FieldBuilder`], each one pinning a key constant to an argument type.
macro_rules! typed_setters {
    ($($(#[$meta:meta])* $name:ident($ty:ty) => $key:ident;)*) => {
        impl FieldBuilder {
            $(
                $(#[$meta])*
                pub fn $name(self, value: $ty) -> Self {
                    self.set(keys::$key, value)
                }
            )*
        }
    };
}

typed_setters! {
    account_id(i64) => ACCOUNT_ID;
    /// Issuer of the credentials behind the request.
    issuer(&str) => ISSUER;
    request_id(&str) => REQUEST_ID;
    /// HTTP method, e.g. `POST`.
    method(&str) => METHOD;
    path(&str) => PATH;
    /// Client address.
    ip(&str) => IP;
    url(&str) => URL;
    /// Pre-formatted timestamp of the event.
    timestamp(&str) => TIMESTAMP;
    /// HTTP status code.
    status(u16) => STATUS;
    duration(Duration) => DURATION;
    duration_ms(i64) => DURATION_MS;
    is_panic(bool) => IS_PANIC;
    request_dump(&str) => REQUEST_DUMP;
    headers(Vec<String>) => HEADERS;
    /// Stack frames, outermost first.
    stacktrace(Vec<String>) => STACKTRACE;
    /// Free-form record type, stored under the `type` key.
    kind(&str) => KIND;
    message_type(&str) => MESSAGE_TYPE;
    event_id(i64) => EVENT_ID;
    event_type(&str) => EVENT_TYPE;
    event_topic(&str) => EVENT_TOPIC;
}

impl FieldBuilder {
    /// Records the message of `err` under the `error` key.
    pub fn error(mut self, err: &dyn std::error::Error) -> Self {
        self.insert(Field::error(keys::ERROR, err));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_setters_use_their_keys() {
        let fields = FieldBuilder::new()
            .issuer("ysyesilyurt")
            .account_id(123)
            .url("https://example.com/posts/123")
            .method("POST")
            .timestamp("2021-06-01T10:00:00Z")
            .build();
        assert_eq!(
            fields.keys().collect::<Vec<_>>(),
            vec!["issuer", "account-id", "url", "method", "timestamp"]
        );
        assert_eq!(fields.value("account-id"), Some(&Value::I64(123)));
    }

    #[test]
    fn test_response_fields_extend_request_fields() {
        let request = FieldBuilder::new()
            .method("GET")
            .timestamp("start");
        let response = request
            .clone()
            .status(404)
            .duration_ms(15)
            .timestamp("end")
            .build();
        assert_eq!(
            response.keys().collect::<Vec<_>>(),
            vec!["method", "timestamp", "status", "duration-ms"]
        );
        assert_eq!(response.value("timestamp"), Some(&Value::Str("end".into())));
        assert_eq!(request.get("timestamp"), Some(&Value::Str("start".into())));
    }

    #[test]
    fn test_error_and_sequences() {
        let err = std::io::Error::other("timed out");
        let fields = FieldBuilder::new()
            .headers(vec!["Content-Type".into()])
            .error(&err)
            .stacktrace(vec!["main".into(), "handler".into()])
            .is_panic(true)
            .kind("http")
            .build();
        assert_eq!(fields.value("error"), Some(&Value::Error("timed out".into())));
        assert_eq!(
            fields.value("stack"),
            Some(&Value::Strings(vec!["main".into(), "handler".into()]))
        );
        assert_eq!(fields.value("type"), Some(&Value::Str("http".into())));
        assert_eq!(fields.value("is-panic"), Some(&Value::Bool(true)));
    }
}
