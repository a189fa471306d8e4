//! Tri-state field for partial updates

use serde::{Deserialize, Deserializer};

use crate::domain::user::UserValidationError;

/// A request field that may be missing, explicitly `null`, or set
///
/// Use together with `#[serde(default)]` so a missing key becomes `Absent`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PatchField<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> PatchField<T> {
    /// Collapse into an `Option` for a field that cannot be cleared
    pub fn into_required(self, field: &'static str) -> Result<Option<T>, UserValidationError> {
        match self {
            Self::Absent => Ok(None),
            Self::Null => Err(UserValidationError::NullField(field)),
            Self::Value(value) => Ok(Some(value)),
        }
    }
}

impl<'de, T> Deserialize<'de> for PatchField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Self::Value(value),
            None => Self::Null,
        })
    }
}
