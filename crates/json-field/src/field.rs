//! The [`OptionalField`] container and its serde hooks.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A JSON object member that remembers whether its key was present.
///
/// Three states are representable:
/// - absent: `defined == false`, `value` is `T::default()` and carries nothing
///   from the input,
/// - explicit null: `defined == true` with a null `value` (use `Option<U>` as `T`),
/// - value: `defined == true` with the decoded `value`.
///
/// Embed it in a record with `#[serde(default)]` so that a missing key leaves
/// the member undefined:
///
/// ```
/// use json_field::OptionalField;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct User {
///     id: i64,
///     #[serde(default)]
///     username: OptionalField<Option<String>>,
/// }
///
/// let absent: User = serde_json::from_str(r#"{"id":1}"#).unwrap();
/// assert!(!absent.username.defined);
///
/// let null: User = serde_json::from_str(r#"{"id":1,"username":null}"#).unwrap();
/// assert!(null.username.defined);
/// assert_eq!(null.username.value, None);
/// # let _ = (absent.id, null.id);
/// ```
///
/// Encoding is lossy: an undefined field and a defined null both emit `null`.
/// Records that need to drop undefined keys should add
/// `#[serde(skip_serializing_if = "OptionalField::is_undefined")]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OptionalField<T> {
    /// Whether the key was present in the input, or the field was built with a value.
    pub defined: bool,
    /// Only meaningful when `defined` is true.
    pub value: T,
}

impl<T> OptionalField<T> {
    /// Defined field holding `value`, even when `value` is itself a null such as `None`.
    pub fn new(value: T) -> Self {
        Self {
            defined: true,
            value,
        }
    }

    /// Undefined field with the default payload.
    pub fn undefined() -> Self
    where
        T: Default,
    {
        Self {
            defined: false,
            value: T::default(),
        }
    }

    pub fn is_defined(&self) -> bool {
        self.defined
    }

    pub fn is_undefined(&self) -> bool {
        !self.defined
    }

    /// The value, if the field is defined.
    pub fn get(&self) -> Option<&T> {
        if self.defined {
            Some(&self.value)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.defined {
            Some(&mut self.value)
        } else {
            None
        }
    }

    pub fn into_option(self) -> Option<T> {
        if self.defined {
            Some(self.value)
        } else {
            None
        }
    }

    pub fn as_ref(&self) -> OptionalField<&T> {
        OptionalField {
            defined: self.defined,
            value: &self.value,
        }
    }

    /// Applies `f` to the payload, keeping the defined flag.
    ///
    /// `f` also runs on the inert default of an undefined field, so it should
    /// not have side effects that depend on the input.
    pub fn map<U, F>(self, f: F) -> OptionalField<U>
    where
        F: FnOnce(T) -> U,
    {
        OptionalField {
            defined: self.defined,
            value: f(self.value),
        }
    }
}

impl<U> OptionalField<Option<U>> {
    /// `None` when undefined, `Some(None)` for an explicit null.
    pub fn into_double_option(self) -> Option<Option<U>> {
        self.into_option()
    }

    pub fn from_double_option(value: Option<Option<U>>) -> Self {
        match value {
            Some(inner) => Self::new(inner),
            None => Self::undefined(),
        }
    }
}

impl<T> From<T> for OptionalField<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<OptionalField<T>> for Option<T> {
    fn from(field: OptionalField<T>) -> Self {
        field.into_option()
    }
}

// Only reached when the key is present; absence is handled by `#[serde(default)]`
// on the enclosing record. Errors from `T` are returned untouched.
impl<'de, T> Deserialize<'de> for OptionalField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

impl<T> Serialize for OptionalField<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.defined {
            self.value.serialize(serializer)
        } else {
            serializer.serialize_none()
        }
    }
}
