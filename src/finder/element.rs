//! Single-element finder.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use serde_json::Value;
use tracing::debug;

use crate::browser::{Browser, Element};
use crate::error::{Error, Result};
use crate::identifiers::ElementId;
use crate::locator::{By, Scope};
use crate::session::Action;

use super::array::normalize_index;
use super::{Deferred, ElementArrayFinder, Parent};

// ============================================================================
// Types
// ============================================================================

/// What an [`ElementFinder`] selects.
#[derive(Clone, Debug)]
enum Source {
    /// First match of a locator under a parent.
    Locate { parent: Parent, by: By },
    /// One position of an array finder.
    Pick {
        array: Arc<ElementArrayFinder>,
        index: isize,
    },
}

// ============================================================================
// ElementFinder
// ============================================================================

/// Lazy description of one element.
///
/// Building a finder never contacts the session. Every terminal action
/// returns a [`Deferred`] that, when forced, resolves the parent chain
/// from the outermost scope inwards, binds to the first match in document
/// order and then performs the action.
///
/// # Example
///
/// ```ignore
/// let name = browser
///     .element(By::id("planets"))
///     .element(By::model("planet"))
///     .get_attribute("value")
///     .await?;
/// ```
#[derive(Clone)]
pub struct ElementFinder {
    browser: Browser,
    source: Source,
}

// ============================================================================
// ElementFinder - Display
// ============================================================================

impl fmt::Debug for ElementFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementFinder")
            .field("locator", &self.describe())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ElementFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// ============================================================================
// ElementFinder - Constructors
// ============================================================================

impl ElementFinder {
    /// Creates a finder for the first match of `by` under `parent`.
    pub(crate) fn new(browser: Browser, parent: Parent, by: By) -> Self {
        Self {
            browser,
            source: Source::Locate { parent, by },
        }
    }

    /// Creates a finder for position `index` of `array`.
    pub(crate) fn pick(browser: Browser, array: Arc<ElementArrayFinder>, index: isize) -> Self {
        Self {
            browser,
            source: Source::Pick { array, index },
        }
    }
}

// ============================================================================
// ElementFinder - Accessors
// ============================================================================

impl ElementFinder {
    /// Returns the locator, or `None` for finders picked by index.
    #[inline]
    #[must_use]
    pub fn locator(&self) -> Option<&By> {
        match &self.source {
            Source::Locate { by, .. } => Some(by),
            Source::Pick { .. } => None,
        }
    }

    /// Returns the browser this finder belongs to.
    #[inline]
    #[must_use]
    pub fn browser(&self) -> &Browser {
        &self.browser
    }
}

// ============================================================================
// ElementFinder - Chaining
// ============================================================================

impl ElementFinder {
    /// Finds the first match of `by` under this element.
    #[must_use]
    pub fn element(&self, by: impl Into<By>) -> ElementFinder {
        ElementFinder::new(
            self.browser.clone(),
            Parent::Finder(Arc::new(self.clone())),
            by.into(),
        )
    }

    /// Finds every match of `by` under this element.
    #[must_use]
    pub fn all(&self, by: impl Into<By>) -> ElementArrayFinder {
        ElementArrayFinder::new(
            self.browser.clone(),
            Parent::Finder(Arc::new(self.clone())),
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
}

// ============================================================================
// ElementFinder - Resolution
// ============================================================================

impl ElementFinder {
    /// Resolves to a wrapped element.
    ///
    /// The element stays bound to the handle found now; keep it to avoid
    /// resolving again.
    pub fn find(&self) -> Deferred<Element> {
        self.act(|element| async move { Ok(element) })
    }

    /// Resolves to `true` if the element exists.
    ///
    /// A missing element or missing ancestor maps to `false`; every other
    /// failure is returned as is.
    pub fn is_present(&self) -> Deferred<bool> {
        let finder = self.clone();
        Deferred::new(move || async move {
            match finder.resolve().await {
                Ok(_) => Ok(true),
                Err(e) if e.is_not_found() => Ok(false),
                Err(e) => Err(e),
            }
        })
    }

    /// Resolves to `true` if `by` matches under this element.
    pub fn is_element_present(&self, by: impl Into<By>) -> Deferred<bool> {
        self.element(by).is_present()
    }

    /// Resolves the chain and returns the bound handle.
    pub(crate) fn resolve(&self) -> BoxFuture<'_, Result<ElementId>> {
        Box::pin(async move {
            match &self.source {
                Source::Locate { parent, by } => {
                    let registry = self.browser.registry();
                    let session = self.browser.session();

                    for context in parent.contexts().await? {
                        let scope = Scope {
                            context: context.as_ref(),
                            exclusions: &[],
                        };
                        if let Some(id) = registry.find_one(session, by, scope).await? {
                            debug!(element_id = %id, locator = %by, "Resolved element");
                            return Ok(id);
                        }
                    }

                    Err(Error::element_not_found(self.describe()))
                }

                Source::Pick { array, index } => {
                    let ids = array.resolve().await?;
                    let len = ids.len();
                    let position = normalize_index(*index, len)
                        .ok_or_else(|| Error::index_out_of_range(*index, len, array.describe()))?;
                    Ok(ids[position].clone())
                }
            }
        })
    }

    /// Describes the chain, outermost scope first.
    pub(crate) fn describe(&self) -> String {
        match &self.source {
            Source::Locate { parent, by } => format!("{}{by}", parent.describe()),
            Source::Pick { array, index } => format!("{}.get({index})", array.describe()),
        }
    }

    /// Resolves, wraps and hands the element to `f`.
    fn act<T, F, Fut>(&self, f: F) -> Deferred<T>
    where
        T: Send + 'static,
        F: FnOnce(Element) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let finder = self.clone();
        Deferred::new(move || async move {
            let id = finder.resolve().await?;
            f(finder.browser.wrap(id)).await
        })
    }
}

// ============================================================================
// ElementFinder - Actions
// ============================================================================

impl ElementFinder {
    /// Gets the visible text.
    pub fn get_text(&self) -> Deferred<String> {
        self.act(|element| async move { element.get_text().await })
    }

    /// Gets an attribute value, `None` if absent.
    pub fn get_attribute(&self, name: impl Into<String>) -> Deferred<Option<String>> {
        let name = name.into();
        self.act(move |element| async move { element.get_attribute(name).await })
    }

    /// Gets the tag name.
    pub fn get_tag_name(&self) -> Deferred<String> {
        self.act(|element| async move { element.get_tag_name().await })
    }

    /// Checks if the element is displayed.
    pub fn is_displayed(&self) -> Deferred<bool> {
        self.act(|element| async move { element.is_displayed().await })
    }

    /// Checks if the element is enabled.
    pub fn is_enabled(&self) -> Deferred<bool> {
        self.act(|element| async move { element.is_enabled().await })
    }

    /// Checks if the element is selected or checked.
    pub fn is_selected(&self) -> Deferred<bool> {
        self.act(|element| async move { element.is_selected().await })
    }

    /// Clicks the element.
    pub fn click(&self) -> Deferred<()> {
        self.act(|element| async move { element.click().await })
    }

    /// Clears the element's value.
    pub fn clear(&self) -> Deferred<()> {
        self.act(|element| async move { element.clear().await })
    }

    /// Types `text` into the element.
    pub fn send_keys(&self, text: impl Into<String>) -> Deferred<()> {
        let text = text.into();
        self.act(move |element| async move { element.send_keys(text).await })
    }

    /// Submits the form containing the element.
    pub fn submit(&self) -> Deferred<()> {
        self.act(|element| async move { element.submit().await })
    }

    /// Performs a raw action and returns its marshaled result.
    pub fn perform(&self, action: Action, args: Vec<Value>) -> Deferred<Value> {
        self.act(move |element| async move { element.perform(action, args).await })
    }

    /// Evaluates `expression` against the element's scope.
    pub fn evaluate(&self, expression: impl Into<String>) -> Deferred<Value> {
        let expression = expression.into();
        self.act(move |element| async move { element.evaluate(expression).await })
    }
}
