use crate::transport::BoxError;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("No HTTP transport provided")]
    MissingTransport,

    #[error("Cannot parse URL {input:?}: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported body type: {}", body_kind(.value))]
    UnsupportedBody { value: serde_json::Value },

    #[error(transparent)]
    Transport(#[from] BoxError),
}

// Script-level kind of the rejected value, for the error message.
fn body_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
