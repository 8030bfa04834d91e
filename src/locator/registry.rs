//! Locator strategy registry.
//!
//! Built-in strategies are matched on the [`By`] variant. Native ones go
//! straight to [`Session::find_many`]; framework-aware ones run one of the
//! [`scripts`](super::scripts) through [`Session::run_script`].
//! [`By::Custom`] locators are dispatched to strategies registered at
//! runtime.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::identifiers::ElementId;
use crate::session::Session;

use super::scripts;
use super::selector::{By, Repeater, is_bracketed};

// ============================================================================
// Scope
// ============================================================================

/// Where a strategy searches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scope<'a> {
    /// Element to search under, document when `None`.
    pub context: Option<&'a ElementId>,
    /// Elements to leave out of the result.
    pub exclusions: &'a [ElementId],
}

impl<'a> Scope<'a> {
    /// Document-wide scope with nothing excluded.
    #[inline]
    #[must_use]
    pub fn document() -> Self {
        Self::default()
    }

    /// Scope under `context` with nothing excluded.
    #[inline]
    #[must_use]
    pub fn under(context: &'a ElementId) -> Self {
        Self {
            context: Some(context),
            exclusions: &[],
        }
    }

    /// Arguments appended to every locator script: root, then exclusions.
    fn script_args(&self) -> [Value; 2] {
        [
            self.context.map_or(Value::Null, ElementId::to_reference),
            Value::Array(self.exclusions.iter().map(ElementId::to_reference).collect()),
        ]
    }
}

// ============================================================================
// Strategy
// ============================================================================

/// Locator strategy registered under a name.
///
/// # Example
///
/// ```ignore
/// use ng_finder::{By, ScriptStrategy};
///
/// browser.register_strategy(
///     "buttonText",
///     ScriptStrategy::new(r#"
///         var text = arguments[0];
///         var using = arguments[1] || document;
///         var exclude = arguments[2] || [];
///         return [].filter.call(using.querySelectorAll('button'), function(b) {
///             return b.textContent === text && exclude.indexOf(b) === -1;
///         });
///     "#),
/// );
///
/// browser.element(By::custom("buttonText", ["Save"])).click().await?;
/// ```
#[async_trait]
pub trait Strategy: Send + Sync {
    /// Returns every match in document order.
    async fn find_many(
        &self,
        session: &dyn Session,
        args: &[String],
        scope: Scope<'_>,
    ) -> Result<Vec<ElementId>>;

    /// Returns the first match.
    async fn find_one(
        &self,
        session: &dyn Session,
        args: &[String],
        scope: Scope<'_>,
    ) -> Result<Option<ElementId>> {
        Ok(self.find_many(session, args, scope).await?.into_iter().next())
    }
}

// ============================================================================
// ScriptStrategy
// ============================================================================

/// Strategy backed by a script body.
///
/// The script receives the locator arguments, then the search root
/// (`null` for the document), then an array of excluded elements, and
/// returns an array of elements.
#[derive(Debug, Clone)]
pub struct ScriptStrategy {
    source: String,
}

impl ScriptStrategy {
    /// Creates a strategy from a script body.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Returns the script body.
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

#[async_trait]
impl Strategy for ScriptStrategy {
    async fn find_many(
        &self,
        session: &dyn Session,
        args: &[String],
        scope: Scope<'_>,
    ) -> Result<Vec<ElementId>> {
        let mut script_args: Vec<Value> = args.iter().cloned().map(Value::String).collect();
        script_args.extend(scope.script_args());
        let value = session.run_script(&self.source, script_args).await?;
        element_ids(&value)
    }
}

// ============================================================================
// LocatorRegistry
// ============================================================================

/// Resolves locators to element handles.
///
/// Shared by every finder created from the same
/// [`Browser`](crate::Browser). Registration takes effect for finders
/// forced afterwards.
#[derive(Default)]
pub struct LocatorRegistry {
    custom: RwLock<FxHashMap<String, Arc<dyn Strategy>>>,
}

impl fmt::Debug for LocatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let custom = self.custom.read();
        let mut names: Vec<&str> = custom.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("LocatorRegistry")
            .field("custom", &names)
            .finish()
    }
}

impl LocatorRegistry {
    /// Creates a registry with only the built-in strategies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `strategy` under `name`, returning the one it replaces.
    pub fn register(
        &self,
        name: impl Into<String>,
        strategy: impl Strategy + 'static,
    ) -> Option<Arc<dyn Strategy>> {
        let name = name.into();
        debug!(name = %name, "Registering locator strategy");
        self.custom.write().insert(name, Arc::new(strategy))
    }

    /// Removes the strategy registered under `name`.
    pub fn unregister(&self, name: &str) -> Option<Arc<dyn Strategy>> {
        self.custom.write().remove(name)
    }

    /// Returns `true` if a strategy is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.custom.read().contains_key(name)
    }

    /// Returns the strategy registered under `name`.
    fn lookup(&self, name: &str) -> Result<Arc<dyn Strategy>> {
        self.custom
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::unknown_strategy(name))
    }

    /// Returns every match for `by` in document order.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for an empty binding, model or repeater
    /// - [`Error::UnknownStrategy`] for an unregistered custom locator
    /// - [`Error::ScriptError`] if an introspection script throws
    pub async fn find_many(
        &self,
        session: &dyn Session,
        by: &By,
        scope: Scope<'_>,
    ) -> Result<Vec<ElementId>> {
        debug!(locator = %by, parent = ?scope.context, excluded = scope.exclusions.len(), "Resolving locator");

        if let Some((using, value)) = by.native_query() {
            let mut ids = session.find_many(using, &value, scope.context).await?;
            if !scope.exclusions.is_empty() {
                ids.retain(|id| !scope.exclusions.contains(id));
            }
            return Ok(ids);
        }

        match by {
            By::Binding(binding) => {
                let binding = require("binding", binding)?;
                let exact = is_bracketed(binding);
                let binding = if exact { binding.trim() } else { binding };
                let [root, exclude] = scope.script_args();
                let args = vec![json!(binding), json!(exact), root, exclude];
                element_ids(&session.run_script(scripts::FIND_BINDINGS, args).await?)
            }
            By::Model(model) => find_by_model(session, model, "", "", scope).await,
            By::Input(model) => find_by_model(session, model, "input", "", scope).await,
            By::Textarea(model) => find_by_model(session, model, "textarea", "", scope).await,
            By::Select(model) => find_by_model(session, model, "select", "", scope).await,
            By::SelectedOption(model) => {
                find_by_model(session, model, "select", " option:checked", scope).await
            }
            By::Repeater(repeater) => find_repeater(session, repeater, scope).await,
            By::Custom(custom) => {
                let strategy = self.lookup(&custom.name)?;
                strategy.find_many(session, &custom.args, scope).await
            }
            _ => Err(Error::protocol(format!("Unroutable locator: {by}"))),
        }
    }

    /// Returns the first match for `by`.
    ///
    /// Custom strategies may answer this without computing every match.
    pub async fn find_one(
        &self,
        session: &dyn Session,
        by: &By,
        scope: Scope<'_>,
    ) -> Result<Option<ElementId>> {
        if let By::Custom(custom) = by {
            debug!(locator = %by, parent = ?scope.context, "Resolving locator");
            let strategy = self.lookup(&custom.name)?;
            return strategy.find_one(session, &custom.args, scope).await;
        }
        Ok(self.find_many(session, by, scope).await?.into_iter().next())
    }
}

// ============================================================================
// Built-in strategies
// ============================================================================

async fn find_by_model(
    session: &dyn Session,
    model: &str,
    tag: &str,
    suffix: &str,
    scope: Scope<'_>,
) -> Result<Vec<ElementId>> {
    let model = require("model", model)?;
    let [root, exclude] = scope.script_args();
    let args = vec![json!(model), json!(tag), json!(suffix), root, exclude];
    element_ids(&session.run_script(scripts::FIND_BY_MODEL, args).await?)
}

async fn find_repeater(
    session: &dyn Session,
    repeater: &Repeater,
    scope: Scope<'_>,
) -> Result<Vec<ElementId>> {
    let expr = require("repeater", repeater.expr())?;
    let [root, exclude] = scope.script_args();
    let args = vec![
        json!(expr),
        json!(repeater.row_index()),
        json!(repeater.column_binding()),
        root,
        exclude,
    ];
    let value = session.run_script(scripts::FIND_REPEATER, args).await?;

    let skipped = value.get("skipped").and_then(Value::as_u64).unwrap_or(0);
    if skipped > 0 {
        warn!(
            repeater = %repeater,
            skipped,
            "Repeater matched rows in more than one container; using the first"
        );
    }

    element_ids(value.get("elements").unwrap_or(&Value::Null))
}

// ============================================================================
// Helpers
// ============================================================================

/// Rejects values that are empty after trimming.
fn require<'a>(strategy: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::invalid_argument(format!(
            "{strategy} locator requires a non-empty value"
        )));
    }
    Ok(value)
}

/// Reads an array of element references returned by a script.
fn element_ids(value: &Value) -> Result<Vec<ElementId>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                ElementId::from_reference(item).ok_or_else(|| {
                    Error::protocol(format!("Expected element reference, got {item}"))
                })
            })
            .collect(),
        other => Err(Error::protocol(format!(
            "Expected element array, got {other}"
        ))),
    }
}

// ============================================================================
// Tests
// ============================================================================
