//! Core Browser struct and accessors.

use std::fmt;
use std::sync::Arc;

use crate::identifiers::ElementId;
use crate::locator::{LocatorRegistry, Strategy};
use crate::session::Session;

use super::Element;

// ============================================================================
// Types
// ============================================================================

/// Internal shared state for a browser.
pub(crate) struct BrowserInner {
    /// Remote document access.
    pub session: Arc<dyn Session>,
    /// Locator strategies.
    pub registry: Arc<LocatorRegistry>,
}

// ============================================================================
// Browser
// ============================================================================

/// Entry point for building finders against one remote document.
///
/// Cloning is cheap and shares the session and the strategy registry.
///
/// # Example
///
/// ```ignore
/// use ng_finder::{Browser, By};
///
/// let browser = Browser::new(session);
///
/// let greeting = browser.element(By::binding("greet"));
/// let items = browser.css_all(".menu li");
///
/// assert_eq!(greeting.get_text().await?, "Hiya");
/// assert_eq!(items.count().await?, 4);
/// ```
#[derive(Clone)]
pub struct Browser {
    pub(crate) inner: Arc<BrowserInner>,
}

impl fmt::Debug for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Browser")
            .field("registry", &self.inner.registry)
            .finish_non_exhaustive()
    }
}

impl Browser {
    /// Creates a browser over `session` with the built-in strategies.
    pub fn new(session: impl Session + 'static) -> Self {
        Self::with_registry(Arc::new(session), Arc::new(LocatorRegistry::new()))
    }

    /// Creates a browser sharing an existing session and registry.
    #[must_use]
    pub fn with_registry(session: Arc<dyn Session>, registry: Arc<LocatorRegistry>) -> Self {
        Self {
            inner: Arc::new(BrowserInner { session, registry }),
        }
    }
}

// ============================================================================
// Browser - Accessors
// ============================================================================

impl Browser {
    /// Returns the session.
    #[inline]
    #[must_use]
    pub fn session(&self) -> &dyn Session {
        self.inner.session.as_ref()
    }

    /// Returns the strategy registry.
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &LocatorRegistry {
        &self.inner.registry
    }

    /// Registers a custom locator strategy, replacing any previous one
    /// with the same name.
    ///
    /// Use it with [`By::custom`](crate::By::custom).
    pub fn register_strategy(&self, name: impl Into<String>, strategy: impl Strategy + 'static) {
        self.inner.registry.register(name, strategy);
    }
}

// ============================================================================
// Browser - Internal
// ============================================================================

impl Browser {
    /// Wraps a resolved handle.
    pub(crate) fn wrap(&self, id: ElementId) -> Element {
        Element::new(id, self.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================
