//! json-field - tri-state JSON object fields.
//!
//! Plain serde decoding folds a missing key and an explicit `null` into the
//! same value. [`OptionalField`] keeps them apart so partial-update payloads
//! can tell "leave unchanged" from "clear":
//!
//! | input            | `defined` | `value` (`T = Option<U>`) |
//! |------------------|-----------|---------------------------|
//! | key missing      | `false`   | `None` (inert default)    |
//! | `"k": null`      | `true`    | `None`                    |
//! | `"k": v`         | `true`    | `Some(v)`                 |
//!
//! Members must be marked `#[serde(default)]` in the enclosing record.
//! Encoding writes `null` for an undefined field; use
//! `#[serde(skip_serializing_if = "OptionalField::is_undefined")]` or
//! [`encode_or_omit`] to drop the key instead.

mod codec;
mod error;
mod field;

pub use codec::{
    decode, decode_str, encode, encode_or_omit, encode_to_string, from_json_value, to_json_value,
};
pub use error::FieldError;
pub use field::OptionalField;

/// Builds an [`OptionalField`] from zero or one value.
///
/// ```
/// use json_field::{optional_field, OptionalField};
///
/// let undefined: OptionalField<i64> = optional_field!();
/// assert!(!undefined.defined);
///
/// let defined = optional_field!(42);
/// assert_eq!(defined.value, 42);
/// ```
#[macro_export]
macro_rules! optional_field {
    () => {
        $crate::OptionalField::undefined()
    };
    ($value:expr $(,)?) => {
        $crate::OptionalField::new($value)
    };
}
