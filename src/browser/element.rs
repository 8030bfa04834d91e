//! Resolved element handles.
//!
//! Every handle produced by the crate, whether from
//! [`Browser::find_element`], a forced finder or an array materialization,
//! is an [`Element`]. It can originate new finders exactly like the
//! browser, scoped under itself.
//!
//! # Example
//!
//! ```ignore
//! use ng_finder::By;
//!
//! let form = browser.find_element(By::id("login")).await?;
//!
//! // Reads and actions return deferred values
//! let tag = form.get_tag_name().await?;
//! form.element(By::model("username")).send_keys("Jane").await?;
//!
//! // Scope evaluation
//! let user = form.evaluate("username").await?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use serde_json::{Value, json};
use tracing::debug;

use crate::error::{Error, Result};
use crate::finder::{Deferred, ElementArrayFinder, ElementFinder, Parent};
use crate::identifiers::ElementId;
use crate::locator::{By, Scope, scripts};
use crate::session::Action;

use super::Browser;

// ============================================================================
// Types
// ============================================================================

/// Internal shared state for an element.
pub(crate) struct ElementInner {
    /// Handle in the remote document.
    pub id: ElementId,

    /// Browser the handle belongs to.
    pub browser: Browser,
}

// ============================================================================
// Element
// ============================================================================

/// A handle to an element in the remote document.
///
/// Bound to one handle for its whole lifetime; the handle goes stale when
/// the document it came from is discarded.
#[derive(Clone)]
pub struct Element {
    /// Shared inner state.
    pub(crate) inner: Arc<ElementInner>,
}

// ============================================================================
// Element - Display
// ============================================================================

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.inner.id)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Element {}

// ============================================================================
// Element - Constructor
// ============================================================================

impl Element {
    /// Creates a new element handle.
    pub(crate) fn new(id: ElementId, browser: Browser) -> Self {
        Self {
            inner: Arc::new(ElementInner { id, browser }),
        }
    }
}

// ============================================================================
// Element - Accessors
// ============================================================================

impl Element {
    /// Returns this element's ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ElementId {
        &self.inner.id
    }

    /// Returns the browser this element belongs to.
    #[inline]
    #[must_use]
    pub fn browser(&self) -> &Browser {
        &self.inner.browser
    }

    /// Returns the script argument referring to this element.
    #[inline]
    #[must_use]
    pub fn to_argument(&self) -> Value {
        self.inner.id.to_reference()
    }
}

// ============================================================================
// Element - Actions
// ============================================================================

impl Element {
    /// Clicks the element.
    pub fn click(&self) -> Deferred<()> {
        self.perform(Action::Click, vec![]).map(|_| ())
    }

    /// Clears the element's value.
    pub fn clear(&self) -> Deferred<()> {
        self.perform(Action::Clear, vec![]).map(|_| ())
    }

    /// Types `text` into the element.
    pub fn send_keys(&self, text: impl Into<String>) -> Deferred<()> {
        let text = text.into();
        self.perform(Action::SendKeys, vec![Value::String(text)])
            .map(|_| ())
    }

    /// Submits the form containing the element.
    pub fn submit(&self) -> Deferred<()> {
        self.perform(Action::Submit, vec![]).map(|_| ())
    }

    /// Performs a raw action and returns its marshaled result.
    ///
    /// Nothing is sent until the returned value is forced.
    pub fn perform(&self, action: Action, args: Vec<Value>) -> Deferred<Value> {
        let element = self.clone();
        Deferred::new(move || async move {
            debug!(element_id = %element.inner.id, action = action.as_str(), "Performing action");
            element
                .inner
                .browser
                .session()
                .perform(action, &element.inner.id, args)
                .await
        })
    }
}

// ============================================================================
// Element - Properties
// ============================================================================

impl Element {
    /// Gets the element's visible text.
    pub fn get_text(&self) -> Deferred<String> {
        self.perform(Action::GetText, vec![])
            .map(|value| value.as_str().unwrap_or("").to_string())
    }

    /// Gets an attribute value.
    ///
    /// Resolves to `None` if the attribute doesn't exist.
    pub fn get_attribute(&self, name: impl Into<String>) -> Deferred<Option<String>> {
        self.perform(Action::GetAttribute, vec![Value::String(name.into())])
            .map(|value| value.as_str().map(str::to_string))
    }

    /// Gets the lower-case tag name.
    pub fn get_tag_name(&self) -> Deferred<String> {
        self.perform(Action::GetTagName, vec![])
            .map(|value| value.as_str().unwrap_or("").to_lowercase())
    }

    /// Checks if the element is displayed.
    pub fn is_displayed(&self) -> Deferred<bool> {
        self.perform(Action::IsDisplayed, vec![])
            .map(|value| value.as_bool().unwrap_or(false))
    }

    /// Checks if the element is enabled.
    pub fn is_enabled(&self) -> Deferred<bool> {
        self.perform(Action::IsEnabled, vec![])
            .map(|value| value.as_bool().unwrap_or(false))
    }

    /// Checks if the element is selected or checked.
    pub fn is_selected(&self) -> Deferred<bool> {
        self.perform(Action::IsSelected, vec![])
            .map(|value| value.as_bool().unwrap_or(false))
    }
}

// ============================================================================
// Element - Scope Evaluation
// ============================================================================

impl Element {
    /// Evaluates `expression` against the nearest framework scope of this
    /// element.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let row = browser.find_element(By::repeater("day in days").row(2)).await?;
    /// let day = row.evaluate("day").await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`Error::ScriptError`] if the framework is missing from the
    /// page or the expression throws.
    pub fn evaluate(&self, expression: impl Into<String>) -> Deferred<Value> {
        let element = self.clone();
        let expression = expression.into();
        Deferred::new(move || async move {
            debug!(element_id = %element.inner.id, expression = %expression, "Evaluating expression");
            element
                .inner
                .browser
                .session()
                .run_script(
                    scripts::EVALUATE,
                    vec![element.to_argument(), json!(expression)],
                )
                .await
        })
    }
}

// ============================================================================
// Element - Nested Search
// ============================================================================

impl Element {
    /// Lazily finds the first match of `by` under this element.
    #[must_use]
    pub fn element(&self, by: impl Into<By>) -> ElementFinder {
        ElementFinder::new(
            self.inner.browser.clone(),
            Parent::Element(self.clone()),
            by.into(),
        )
    }

    /// Lazily finds every match of `by` under this element.
    #[must_use]
    pub fn all(&self, by: impl Into<By>) -> ElementArrayFinder {
        ElementArrayFinder::new(
            self.inner.browser.clone(),
            Parent::Element(self.clone()),
            by.into(),
        )
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

    /// Finds the first match of `by` under this element now.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let form = browser.find_element(By::id("login-form")).await?;
    /// let btn = form.find_element(By::css("button[type='submit']")).await?;
    /// ```
    pub async fn find_element(&self, by: impl Into<By>) -> Result<Element> {
        let by = by.into();
        let browser = &self.inner.browser;
        let id = browser
            .registry()
            .find_one(browser.session(), &by, Scope::under(&self.inner.id))
            .await?
            .ok_or_else(|| {
                Error::element_not_found(format!("element({}) > {by}", self.inner.id))
            })?;

        debug!(parent_id = %self.inner.id, element_id = %id, "Found child element");
        Ok(browser.wrap(id))
    }

    /// Finds every match of `by` under this element now.
    pub async fn find_elements(&self, by: impl Into<By>) -> Result<Vec<Element>> {
        let by = by.into();
        let browser = &self.inner.browser;
        let ids = browser
            .registry()
            .find_many(browser.session(), &by, Scope::under(&self.inner.id))
            .await?;

        debug!(parent_id = %self.inner.id, count = ids.len(), "Found child elements");
        Ok(ids.into_iter().map(|id| browser.wrap(id)).collect())
    }

    /// Returns `true` if `by` matches under this element now.
    pub async fn is_element_present(&self, by: impl Into<By>) -> Result<bool> {
        let by = by.into();
        let browser = &self.inner.browser;
        let first = browser
            .registry()
            .find_one(browser.session(), &by, Scope::under(&self.inner.id))
            .await?;
        Ok(first.is_some())
    }
}

// ============================================================================
// Tests
// ============================================================================
