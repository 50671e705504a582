//! Generic validated field.
//!
//! A [`ValidatedField`] holds one value that always satisfies the rule of its
//! [`FieldKind`]. Writes validate first and only then replace the stored
//! value, so a failed write leaves the field exactly as it was.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A kind of field, supplying the value type and its validation rule.
///
/// Kinds are uninhabited marker types; they exist only at the type level.
pub trait FieldKind {
    /// The type of the stored value.
    type Value: Clone + PartialEq + fmt::Debug + fmt::Display;

    /// Data derived from the value during validation and kept alongside it.
    type Parsed: Clone + fmt::Debug;

    /// Check `value` against this kind's rule.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing why the value was rejected.
    fn validate(value: &Self::Value) -> Result<Self::Parsed, ValidationError>;
}

/// A single value guarded by the rule of field kind `K`.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let mut phone = PhoneNumber::new("1234567890").unwrap();
/// assert!(phone.set_value("12-34").is_err());
/// assert_eq!(phone.value(), "1234567890");
/// ```
pub struct ValidatedField<K: FieldKind> {
    value: K::Value,
    parsed: K::Parsed,
}

impl<K: FieldKind> ValidatedField<K> {
    /// Create a new field, validating `value`.
    ///
    /// # Errors
    ///
    /// Returns the kind's [`ValidationError`] if the value is rejected.
    pub fn new(value: impl Into<K::Value>) -> Result<Self, ValidationError> {
        let value = value.into();
        let parsed = K::validate(&value)?;
        Ok(Self { value, parsed })
    }

    /// Get the current value.
    pub fn value(&self) -> &K::Value {
        &self.value
    }

    /// Replace the value after validating it.
    ///
    /// # Errors
    ///
    /// Returns the kind's [`ValidationError`] if `value` is rejected. The
    /// previous value is kept in that case.
    pub fn set_value(&mut self, value: impl Into<K::Value>) -> Result<(), ValidationError> {
        let value = value.into();
        let parsed = K::validate(&value)?;
        self.value = value;
        self.parsed = parsed;
        Ok(())
    }

    /// Convert into the underlying value.
    pub fn into_inner(self) -> K::Value {
        self.value
    }

    pub(crate) fn parsed(&self) -> &K::Parsed {
        &self.parsed
    }
}

impl<K: FieldKind<Value = String>> ValidatedField<K> {
    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<K: FieldKind> Clone for ValidatedField<K> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            parsed: self.parsed.clone(),
        }
    }
}

impl<K: FieldKind> fmt::Debug for ValidatedField<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValidatedField").field(&self.value).finish()
    }
}

// Parsed data is derived from the value, so equality only looks at the value.
impl<K: FieldKind> PartialEq for ValidatedField<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: FieldKind> Eq for ValidatedField<K> where K::Value: Eq {}

impl<K: FieldKind> fmt::Display for ValidatedField<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// Serde support - serialize as the bare value
impl<K> Serialize for ValidatedField<K>
where
    K: FieldKind,
    K::Value: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize from the bare value with validation
impl<'de, K> Deserialize<'de> for ValidatedField<K>
where
    K: FieldKind,
    K::Value: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = <K::Value as Deserialize<'de>>::deserialize(deserializer)?;
        ValidatedField::new(value).map_err(serde::de::Error::custom)
    }
}
