//! Lazy element finders.
//!
//! Finders record *what* to look for and *where*; nothing is sent until a
//! terminal action is forced. Each forcing resolves the whole chain again,
//! outermost scope first.
//!
//! # Types
//!
//! | Type | Resolves to |
//! |------|-------------|
//! | [`ElementFinder`] | One [`Element`](crate::Element), the first match |
//! | [`ElementArrayFinder`] | Every match, in document order |
//! | [`Deferred`] | Any pending value |
//!
//! # Example
//!
//! ```ignore
//! let rows = browser.all(By::repeater("day in days"));
//! let names = rows
//!     .filter(|row, _| async move { row.get_text().await.map(|t| t.starts_with('T')) })
//!     .map(|row, _| async move { row.element(By::binding("day.name")).get_text() })
//!     .await?;
//! ```

// ============================================================================
// Submodules
// ============================================================================

mod array;
mod deferred;
mod element;

// ============================================================================
// Re-exports
// ============================================================================

pub use array::ElementArrayFinder;
pub use deferred::{Deferred, Materialize};
pub use element::ElementFinder;

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use crate::browser::Element;
use crate::error::Result;
use crate::identifiers::ElementId;

// ============================================================================
// Parent
// ============================================================================

/// Scope a finder searches under.
#[derive(Clone, Debug)]
pub(crate) enum Parent {
    /// Whole document.
    Document,
    /// First match of another finder.
    Finder(Arc<ElementFinder>),
    /// Already resolved element.
    Element(Element),
    /// Every match of an array finder.
    Array(Arc<ElementArrayFinder>),
}

impl Parent {
    /// Resolves the contexts to search under, in order.
    ///
    /// `None` stands for the document.
    async fn contexts(&self) -> Result<Vec<Option<ElementId>>> {
        match self {
            Self::Document => Ok(vec![None]),
            Self::Finder(finder) => Ok(vec![Some(finder.resolve().await?)]),
            Self::Element(element) => Ok(vec![Some(element.id().clone())]),
            Self::Array(array) => Ok(array.resolve().await?.into_iter().map(Some).collect()),
        }
    }

    /// Human-readable chain prefix for error messages.
    fn describe(&self) -> String {
        match self {
            Self::Document => String::new(),
            Self::Finder(finder) => format!("{} > ", finder.describe()),
            Self::Element(element) => format!("element({}) > ", element.id()),
            Self::Array(array) => format!("{} > ", array.describe()),
        }
    }
}
