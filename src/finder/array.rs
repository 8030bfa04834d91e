//! Multi-element finder.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use tracing::debug;

use crate::browser::{Browser, Element};
use crate::error::Result;
use crate::identifiers::ElementId;
use crate::locator::{By, Scope};

use super::{Deferred, ElementFinder, Materialize, Parent};

// ============================================================================
// Types
// ============================================================================

/// Pending filter stage.
type Predicate = Arc<dyn Fn(Element, usize) -> BoxFuture<'static, Result<bool>> + Send + Sync>;

// ============================================================================
// ElementArrayFinder
// ============================================================================

/// Lazy description of every element matching a locator.
///
/// Filter stages are recorded in order and applied at resolution time,
/// each one seeing the output of the previous stage.
///
/// # Example
///
/// ```ignore
/// let days = browser.all(By::repeater("day in days"));
///
/// assert_eq!(days.count().await?, 5);
/// assert_eq!(days.first().get_text().await?, "M");
/// assert_eq!(days.last().get_text().await?, "F");
/// ```
#[derive(Clone)]
pub struct ElementArrayFinder {
    browser: Browser,
    parent: Parent,
    by: By,
    stages: Vec<Predicate>,
}

// ============================================================================
// ElementArrayFinder - Display
// ============================================================================

impl fmt::Debug for ElementArrayFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementArrayFinder")
            .field("locator", &self.describe())
            .field("filters", &self.stages.len())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ElementArrayFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// ============================================================================
// ElementArrayFinder - Constructors
// ============================================================================

impl ElementArrayFinder {
    /// Creates a finder for every match of `by` under `parent`.
    pub(crate) fn new(browser: Browser, parent: Parent, by: By) -> Self {
        Self {
            browser,
            parent,
            by,
            stages: Vec::new(),
        }
    }

    /// Returns the locator.
    #[inline]
    #[must_use]
    pub fn locator(&self) -> &By {
        &self.by
    }
}

// ============================================================================
// ElementArrayFinder - Chaining
// ============================================================================

impl ElementArrayFinder {
    /// Finder for the element at `index`.
    ///
    /// Negative indices count from the end. The range is checked when the
    /// returned finder is forced.
    #[must_use]
    pub fn get(&self, index: isize) -> ElementFinder {
        ElementFinder::pick(self.browser.clone(), Arc::new(self.clone()), index)
    }

    /// Finder for the first element.
    #[must_use]
    pub fn first(&self) -> ElementFinder {
        self.get(0)
    }

    /// Finder for the last element.
    #[must_use]
    pub fn last(&self) -> ElementFinder {
        self.get(-1)
    }

    /// Finds the first match of `by` under any element of this array.
    #[must_use]
    pub fn element(&self, by: impl Into<By>) -> ElementFinder {
        ElementFinder::new(
            self.browser.clone(),
            Parent::Array(Arc::new(self.clone())),
            by.into(),
        )
    }

    /// Finds every match of `by` under the elements of this array.
    ///
    /// Matches are concatenated per element, without duplicates.
    #[must_use]
    pub fn all(&self, by: impl Into<By>) -> ElementArrayFinder {
        ElementArrayFinder::new(
            self.browser.clone(),
            Parent::Array(Arc::new(self.clone())),
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

    /// Keeps the elements for which `predicate` resolves to `true`.
    ///
    /// The predicate receives each element and its index within the
    /// stage's input. Its result may be any [`Materialize`] value producing
    /// a `bool`, such as a `Deferred<bool>` or a `Result<bool>`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let t_days = browser
    ///     .all(By::repeater("day in days"))
    ///     .filter(|day, _| async move { day.get_text().await.map(|t| t.starts_with('T')) });
    /// ```
    #[must_use]
    pub fn filter<F, Fut>(&self, predicate: F) -> ElementArrayFinder
    where
        F: Fn(Element, usize) -> Fut + Send + Sync + 'static,
        Fut: Future + Send + 'static,
        Fut::Output: Materialize<Output = bool>,
    {
        let stage: Predicate = Arc::new(
            move |element: Element, index: usize| -> BoxFuture<'static, Result<bool>> {
                let pending = predicate(element, index);
                Box::pin(async move { pending.await.materialize().await })
            },
        );

        let mut filtered = self.clone();
        filtered.stages.push(stage);
        filtered
    }
}

// ============================================================================
// ElementArrayFinder - Terminal Actions
// ============================================================================

impl ElementArrayFinder {
    /// Resolves to the wrapped matches, in document order.
    pub fn elements(&self) -> Deferred<Vec<Element>> {
        let finder = self.clone();
        Deferred::new(move || async move {
            let ids = finder.resolve().await?;
            Ok(ids.into_iter().map(|id| finder.browser.wrap(id)).collect())
        })
    }

    /// Resolves to the number of matches.
    ///
    /// Zero matches is `0`, not an error. A missing enclosing element also
    /// counts as `0`; every other failure is returned as is.
    pub fn count(&self) -> Deferred<usize> {
        let finder = self.clone();
        Deferred::new(move || async move {
            match finder.resolve().await {
                Ok(ids) => Ok(ids.len()),
                Err(e) if e.is_not_found() => {
                    debug!(locator = %finder.by, error = %e, "Enclosing element missing");
                    Ok(0)
                }
                Err(e) => Err(e),
            }
        })
    }

    /// Resolves to `true` if anything matches.
    pub fn is_present(&self) -> Deferred<bool> {
        self.count().map(|count| count > 0)
    }

    /// Calls `f` on every element in order.
    ///
    /// Results of `f` are materialized and discarded; the first failure
    /// stops the iteration.
    pub fn each<F, Fut>(&self, mut f: F) -> Deferred<()>
    where
        F: FnMut(Element, usize) -> Fut + Send + 'static,
        Fut: Future + Send + 'static,
        Fut::Output: Materialize,
    {
        let finder = self.clone();
        Deferred::new(move || async move {
            let ids = finder.resolve().await?;
            for (index, id) in ids.into_iter().enumerate() {
                f(finder.browser.wrap(id), index).await.materialize().await?;
            }
            Ok(())
        })
    }

    /// Maps every element through `f`, fully materializing each result.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let rows: Vec<(usize, String)> = browser
    ///     .all(By::repeater("day in days"))
    ///     .map(|day, index| async move { (index, day.get_text()) })
    ///     .await?;
    /// ```
    pub fn map<F, Fut>(&self, mut f: F) -> Deferred<Vec<<Fut::Output as Materialize>::Output>>
    where
        F: FnMut(Element, usize) -> Fut + Send + 'static,
        Fut: Future + Send + 'static,
        Fut::Output: Materialize,
    {
        let finder = self.clone();
        Deferred::new(move || async move {
            let ids = finder.resolve().await?;
            let mut out = Vec::with_capacity(ids.len());
            for (index, id) in ids.into_iter().enumerate() {
                out.push(f(finder.browser.wrap(id), index).await.materialize().await?);
            }
            Ok(out)
        })
    }
}

// ============================================================================
// ElementArrayFinder - Resolution
// ============================================================================

impl ElementArrayFinder {
    /// Resolves the chain, then applies the filter stages in order.
    pub(crate) fn resolve(&self) -> BoxFuture<'_, Result<Vec<ElementId>>> {
        Box::pin(async move {
            let mut ids = self.locate().await?;

            for stage in &self.stages {
                let mut kept = Vec::with_capacity(ids.len());
                for (index, id) in ids.into_iter().enumerate() {
                    if stage(self.browser.wrap(id.clone()), index).await? {
                        kept.push(id);
                    }
                }
                ids = kept;
            }

            debug!(locator = %self.by, count = ids.len(), "Resolved elements");
            Ok(ids)
        })
    }

    /// Finds the matches under every parent context, skipping handles
    /// already found under an earlier one.
    async fn locate(&self) -> Result<Vec<ElementId>> {
        let registry = self.browser.registry();
        let session = self.browser.session();

        let mut found: Vec<ElementId> = Vec::new();
        for context in self.parent.contexts().await? {
            let scope = Scope {
                context: context.as_ref(),
                exclusions: &found,
            };
            let matches = registry.find_many(session, &self.by, scope).await?;
            found.extend(matches);
        }
        Ok(found)
    }

    /// Describes the chain, outermost scope first.
    pub(crate) fn describe(&self) -> String {
        let mut description = format!("{}all({})", self.parent.describe(), self.by);
        for _ in &self.stages {
            description.push_str(".filter(..)");
        }
        description
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Maps a possibly negative index onto `0..len`.
pub(crate) fn normalize_index(index: isize, len: usize) -> Option<usize> {
    let position = if index < 0 {
        len.checked_sub(index.unsigned_abs())?
    } else {
        index.unsigned_abs()
    };
    (position < len).then_some(position)
}

// ============================================================================
// Tests
// ============================================================================
