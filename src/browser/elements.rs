//! Finder construction and immediate element search.

use tracing::debug;

use crate::error::{Error, Result};
use crate::finder::{ElementArrayFinder, ElementFinder, Parent};
use crate::locator::{By, Scope};

use super::{Browser, Element};

// ============================================================================
// Browser - Finders
// ============================================================================

impl Browser {
    /// Lazily finds the first match of `by` in the document.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use ng_finder::By;
    ///
    /// let username = browser.element(By::model("username"));
    /// username.clear().await?;
    /// username.send_keys("Jane Doe").await?;
    /// ```
    #[must_use]
    pub fn element(&self, by: impl Into<By>) -> ElementFinder {
        ElementFinder::new(self.clone(), Parent::Document, by.into())
    }

    /// Lazily finds every match of `by` in the document.
    #[must_use]
    pub fn all(&self, by: impl Into<By>) -> ElementArrayFinder {
        ElementArrayFinder::new(self.clone(), Parent::Document, by.into())
    }

    /// Shortcut for `element(By::css(selector))`.
    #[must_use]
    pub fn css(&self, selector: impl Into<String>) -> ElementFinder {
        self.element(By::css(selector))
    }

    /// Shortcut for `all(By::css(selector))`.
    #[must_use]
    pub fn css_all(&self, selector: impl Into<String>) -> ElementArrayFinder {
        self.all(By::css(selector))
    }
}

// ============================================================================
// Browser - Immediate Search
// ============================================================================

impl Browser {
    /// Finds the first match of `by` now.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementNotFound`] if nothing matches.
    pub async fn find_element(&self, by: impl Into<By>) -> Result<Element> {
        let by = by.into();
        let id = self
            .registry()
            .find_one(self.session(), &by, Scope::document())
            .await?
            .ok_or_else(|| Error::element_not_found(by.to_string()))?;

        debug!(element_id = %id, locator = %by, "Found element");
        Ok(self.wrap(id))
    }

    /// Finds every match of `by` now.
    pub async fn find_elements(&self, by: impl Into<By>) -> Result<Vec<Element>> {
        let by = by.into();
        let ids = self
            .registry()
            .find_many(self.session(), &by, Scope::document())
            .await?;

        debug!(locator = %by, count = ids.len(), "Found elements");
        Ok(ids.into_iter().map(|id| self.wrap(id)).collect())
    }

    /// Returns `true` if `by` matches anything now.
    pub async fn is_element_present(&self, by: impl Into<By>) -> Result<bool> {
        let by = by.into();
        let first = self
            .registry()
            .find_one(self.session(), &by, Scope::document())
            .await?;
        Ok(first.is_some())
    }
}
