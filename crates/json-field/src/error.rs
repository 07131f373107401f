use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    /// The raw JSON could not be converted into the field's payload type.
    #[error("json value does not match field type: {0}")]
    DecodeTypeMismatch(#[source] serde_json::Error),
    /// The payload's own `Serialize` impl failed.
    #[error("failed to encode field value: {0}")]
    Encode(#[source] serde_json::Error),
}
