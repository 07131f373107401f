//! Standalone encode/decode of a single field value.
//!
//! Inside a record, serde drives [`OptionalField`] through its `Deserialize`
//! and `Serialize` impls. These helpers cover the case where the caller holds
//! the raw bytes of one member, e.g. after splitting an object by hand.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::FieldError;
use crate::field::OptionalField;

/// Decodes one JSON value into a defined field.
///
/// Only call this for a key that is present; an absent key is represented by
/// [`OptionalField::undefined`] and never reaches the decoder.
pub fn decode<T>(raw: &[u8]) -> Result<OptionalField<T>, FieldError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(raw).map_err(FieldError::DecodeTypeMismatch)
}

pub fn decode_str<T>(raw: &str) -> Result<OptionalField<T>, FieldError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(raw).map_err(FieldError::DecodeTypeMismatch)
}

pub fn from_json_value<T>(value: Value) -> Result<OptionalField<T>, FieldError>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value).map_err(FieldError::DecodeTypeMismatch)
}

/// Encodes the field as one JSON value. Undefined fields become `null`.
pub fn encode<T>(field: &OptionalField<T>) -> Result<Vec<u8>, FieldError>
where
    T: Serialize,
{
    serde_json::to_vec(field).map_err(FieldError::Encode)
}

pub fn encode_to_string<T>(field: &OptionalField<T>) -> Result<String, FieldError>
where
    T: Serialize,
{
    serde_json::to_string(field).map_err(FieldError::Encode)
}

pub fn to_json_value<T>(field: &OptionalField<T>) -> Result<Value, FieldError>
where
    T: Serialize,
{
    serde_json::to_value(field).map_err(FieldError::Encode)
}

/// Like [`encode`], but returns `None` for an undefined field so the caller
/// can leave the key out of the enclosing object.
pub fn encode_or_omit<T>(field: &OptionalField<T>) -> Result<Option<Vec<u8>>, FieldError>
where
    T: Serialize,
{
    if field.is_undefined() {
        return Ok(None);
    }
    encode(field).map(Some)
}
