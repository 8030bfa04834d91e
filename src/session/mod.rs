//! Session primitives consumed by the finder engine.
//!
//! A [`Session`] is the single-owner channel to one remote document. The
//! engine issues its three primitives strictly in the order the caller's
//! terminal actions require, one at a time, and never speculatively.
//!
//! | Primitive | Purpose |
//! |-----------|---------|
//! | [`Session::find_many`] | Native lookup (css, xpath, ...) |
//! | [`Session::run_script`] | Introspection scripts, scope evaluation |
//! | [`Session::perform`] | Element reads and interactions |
//!
//! [`RemoteSession`] implements the trait over the crate's WebSocket
//! transport; tests and embedders can supply their own implementation.

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::identifiers::ElementId;

pub use crate::protocol::Action;

// ============================================================================
// Submodules
// ============================================================================

mod remote;

pub use remote::RemoteSession;

// ============================================================================
// Session
// ============================================================================

/// Low-level access to a remote document.
///
/// Implementations must return matches in document order and must surface
/// stale handles as [`Error::StaleElement`](crate::Error::StaleElement)
/// without reinterpreting them.
#[async_trait]
pub trait Session: Send + Sync {
    /// Finds all elements matching a native strategy.
    ///
    /// # Arguments
    ///
    /// * `using` - WebDriver strategy name (`css selector`, `xpath`,
    ///   `tag name`, `link text`, `partial link text`)
    /// * `value` - Strategy value
    /// * `context` - Element to search under, document when `None`
    async fn find_many(
        &self,
        using: &str,
        value: &str,
        context: Option<&ElementId>,
    ) -> Result<Vec<ElementId>>;

    /// Runs a synchronous script body; `arguments[i]` receives `args[i]`.
    ///
    /// Element handles travel as [`ElementId::to_reference`] values in both
    /// directions.
    async fn run_script(&self, source: &str, args: Vec<Value>) -> Result<Value>;

    /// Performs an action on an element and returns its marshaled result.
    async fn perform(&self, action: Action, element: &ElementId, args: Vec<Value>)
    -> Result<Value>;
}
