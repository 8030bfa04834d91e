//! Type-safe identifier wrappers.
//!
//! Newtypes keep remote element handles and request correlation ids from
//! being mixed up with arbitrary strings.
//!
//! | Type | Backing | Source |
//! |------|---------|--------|
//! | [`ElementId`] | `String` | Remote end (opaque element reference) |
//! | [`RequestId`] | `Uuid` | Local end (request/response correlation) |

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

// ============================================================================
// Constants
// ============================================================================

/// W3C WebDriver key used when marshaling an element reference.
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Legacy JSON wire protocol key, accepted on input only.
const LEGACY_ELEMENT_KEY: &str = "ELEMENT";

// ============================================================================
// ElementId
// ============================================================================

/// Opaque reference to an element living in the remote document.
///
/// The id is only meaningful to the session that produced it and becomes
/// stale once the document it points into is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Creates an element id from its remote representation.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Marshals the id as a script argument (`{"element-6066-…": id}`).
    #[must_use]
    pub fn to_reference(&self) -> Value {
        let mut map = Map::with_capacity(1);
        map.insert(ELEMENT_KEY.to_string(), Value::String(self.0.clone()));
        Value::Object(map)
    }

    /// Parses a marshaled element reference.
    ///
    /// Returns `None` if `value` is not an element reference.
    #[must_use]
    pub fn from_reference(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        object
            .get(ELEMENT_KEY)
            .or_else(|| object.get(LEGACY_ELEMENT_KEY))
            .and_then(Value::as_str)
            .map(Self::new)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ============================================================================
// RequestId
// ============================================================================

/// Correlation id for a protocol request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Generates a fresh random request id.
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[inline]
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ============================================================================
// Tests
// ============================================================================
