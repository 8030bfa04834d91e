//! Element locator strategies.
//!
//! Provides Selenium-like `By` selectors, extended with framework-aware
//! strategies that resolve through introspection scripts.
//!
//! # Example
//!
//! ```ignore
//! use ng_finder::By;
//!
//! // CSS selector (default for string conversions)
//! let menu = browser.all(By::css(".menu li a"));
//!
//! // Text bound with `{{greeting}}`, partial or exact
//! let greeting = browser.element(By::binding("greet"));
//! let exact = browser.element(By::binding("{{greeting}}"));
//!
//! // Form control bound to a model path
//! let username = browser.element(By::model("username"));
//!
//! // One cell of a repeated block
//! let cell = browser.element(By::repeater("day in days").row(1).column("name"));
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// ============================================================================
// By Enum
// ============================================================================

/// Element locator strategy.
///
/// Values are immutable once built; refinements such as
/// [`Repeater::row`] consume the locator and return a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "strategy", content = "value")]
pub enum By {
    /// CSS selector.
    #[serde(rename = "css")]
    Css(String),

    /// XPath expression.
    #[serde(rename = "xpath")]
    XPath(String),

    /// Element ID (shorthand for `#id` CSS selector).
    #[serde(rename = "id")]
    Id(String),

    /// Tag name.
    #[serde(rename = "tag")]
    Tag(String),

    /// Name attribute.
    #[serde(rename = "name")]
    Name(String),

    /// Class name (single class).
    #[serde(rename = "class")]
    Class(String),

    /// Link text (for `<a>` elements).
    #[serde(rename = "linkText")]
    LinkText(String),

    /// Partial link text (for `<a>` elements).
    #[serde(rename = "partialLinkText")]
    PartialLinkText(String),

    /// Bound text expression.
    ///
    /// Substring match on the binding expression; a `{{…}}` value must
    /// equal the whole expression.
    #[serde(rename = "binding")]
    Binding(String),

    /// Form control bound to a model path (exact match).
    #[serde(rename = "model")]
    Model(String),

    /// `<input>` bound to a model path. Prefer [`By::Model`].
    #[serde(rename = "input")]
    Input(String),

    /// `<textarea>` bound to a model path. Prefer [`By::Model`].
    #[serde(rename = "textarea")]
    Textarea(String),

    /// `<select>` bound to a model path. Prefer [`By::Model`].
    #[serde(rename = "select")]
    Select(String),

    /// Currently selected `<option>`s of a `<select>` bound to a model path.
    #[serde(rename = "selectedOption")]
    SelectedOption(String),

    /// Rows, columns or cells of a repeated block.
    #[serde(rename = "repeater")]
    Repeater(Repeater),

    /// Strategy registered at runtime in the
    /// [`LocatorRegistry`](super::LocatorRegistry).
    #[serde(rename = "custom")]
    Custom(CustomLocator),
}

impl By {
    /// Creates a CSS selector.
    #[inline]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Creates an XPath selector.
    #[inline]
    pub fn xpath(expr: impl Into<String>) -> Self {
        Self::XPath(expr.into())
    }

    /// Creates an ID selector.
    #[inline]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Creates a tag name selector.
    #[inline]
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    /// Creates a name attribute selector.
    #[inline]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Creates a class name selector.
    #[inline]
    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    /// Creates a link text selector.
    #[inline]
    pub fn link_text(text: impl Into<String>) -> Self {
        Self::LinkText(text.into())
    }

    /// Creates a partial link text selector.
    #[inline]
    pub fn partial_link_text(text: impl Into<String>) -> Self {
        Self::PartialLinkText(text.into())
    }

    /// Creates a binding selector.
    #[inline]
    pub fn binding(expr: impl Into<String>) -> Self {
        Self::Binding(expr.into())
    }

    /// Creates a model selector.
    #[inline]
    pub fn model(path: impl Into<String>) -> Self {
        Self::Model(path.into())
    }

    /// Creates an `<input>` model selector.
    #[inline]
    pub fn input(path: impl Into<String>) -> Self {
        Self::Input(path.into())
    }

    /// Creates a `<textarea>` model selector.
    #[inline]
    pub fn textarea(path: impl Into<String>) -> Self {
        Self::Textarea(path.into())
    }

    /// Creates a `<select>` model selector.
    #[inline]
    pub fn select(path: impl Into<String>) -> Self {
        Self::Select(path.into())
    }

    /// Creates a selected option selector.
    #[inline]
    pub fn selected_option(path: impl Into<String>) -> Self {
        Self::SelectedOption(path.into())
    }

    /// Starts a repeater locator; refine with [`Repeater::row`] and
    /// [`Repeater::column`].
    #[inline]
    pub fn repeater(expr: impl Into<String>) -> Repeater {
        Repeater::new(expr)
    }

    /// Creates a locator for a strategy registered at runtime.
    pub fn custom<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Custom(CustomLocator {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        })
    }

    /// Returns the strategy name.
    #[must_use]
    pub fn strategy(&self) -> &str {
        match self {
            Self::Css(_) => "css",
            Self::XPath(_) => "xpath",
            Self::Id(_) => "id",
            Self::Tag(_) => "tag",
            Self::Name(_) => "name",
            Self::Class(_) => "class",
            Self::LinkText(_) => "linkText",
            Self::PartialLinkText(_) => "partialLinkText",
            Self::Binding(_) => "binding",
            Self::Model(_) => "model",
            Self::Input(_) => "input",
            Self::Textarea(_) => "textarea",
            Self::Select(_) => "select",
            Self::SelectedOption(_) => "selectedOption",
            Self::Repeater(_) => "repeater",
            Self::Custom(custom) => &custom.name,
        }
    }

    /// Returns `true` if the locator resolves without script evaluation.
    #[must_use]
    pub fn is_native(&self) -> bool {
        self.native_query().is_some()
    }

    /// Translates native strategies into a WebDriver `(using, value)` pair.
    pub(crate) fn native_query(&self) -> Option<(&'static str, String)> {
        match self {
            Self::Css(v) => Some(("css selector", v.clone())),
            Self::XPath(v) => Some(("xpath", v.clone())),
            Self::Id(v) => Some(("css selector", format!("#{}", css_escape(v)))),
            Self::Tag(v) => Some(("tag name", v.clone())),
            Self::Name(v) => Some(("css selector", format!("[name=\"{}\"]", attr_escape(v)))),
            Self::Class(v) => Some(("css selector", format!(".{}", css_escape(v)))),
            Self::LinkText(v) => Some(("link text", v.clone())),
            Self::PartialLinkText(v) => Some(("partial link text", v.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for By {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(v)
            | Self::XPath(v)
            | Self::Id(v)
            | Self::Tag(v)
            | Self::Name(v)
            | Self::Class(v)
            | Self::LinkText(v)
            | Self::PartialLinkText(v)
            | Self::Binding(v)
            | Self::Model(v)
            | Self::Input(v)
            | Self::Textarea(v)
            | Self::Select(v)
            | Self::SelectedOption(v) => write!(f, "by.{}({v:?})", self.strategy()),
            Self::Repeater(repeater) => repeater.fmt(f),
            Self::Custom(custom) => write!(f, "by.{}({:?})", custom.name, custom.args),
        }
    }
}

// ============================================================================
// Repeater
// ============================================================================

/// Repeated-block locator with optional row and column refinements.
///
/// `row` and `column` commute: `row(1).column("name")` and
/// `column("name").row(1)` describe the same element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Repeater {
    expr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    row: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    column: Option<String>,
}

impl Repeater {
    /// Creates an unrefined repeater locator.
    #[must_use]
    pub fn new(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            row: None,
            column: None,
        }
    }

    /// Restricts to the zero-based `index`-th block in document order.
    #[must_use]
    pub fn row(self, index: usize) -> Self {
        Self {
            row: Some(index),
            ..self
        }
    }

    /// Restricts to elements whose binding contains `binding`.
    ///
    /// Bracketed (`{{a.b}}`) and bare (`a.b`) forms are equivalent.
    #[must_use]
    pub fn column(self, binding: impl Into<String>) -> Self {
        Self {
            column: Some(binding.into()),
            ..self
        }
    }

    /// Returns the repeat expression (or fragment) being matched.
    #[inline]
    #[must_use]
    pub fn expr(&self) -> &str {
        &self.expr
    }

    /// Returns the row refinement.
    #[inline]
    #[must_use]
    pub fn row_index(&self) -> Option<usize> {
        self.row
    }

    /// Returns the column refinement.
    #[inline]
    #[must_use]
    pub fn column_binding(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Parses the expression as `item in collection [| filters]`.
    ///
    /// Returns `None` for fragments such as `"days"`, which still match
    /// any repeat expression containing them.
    #[must_use]
    pub fn expression(&self) -> Option<RepeatExpression> {
        RepeatExpression::parse(&self.expr)
    }
}

impl From<Repeater> for By {
    fn from(repeater: Repeater) -> Self {
        Self::Repeater(repeater)
    }
}

impl fmt::Display for Repeater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "by.repeater({:?})", self.expr)?;
        if let Some(row) = self.row {
            write!(f, ".row({row})")?;
        }
        if let Some(column) = &self.column {
            write!(f, ".column({column:?})")?;
        }
        Ok(())
    }
}

// ============================================================================
// RepeatExpression
// ============================================================================

/// Parsed `item in collection | filters` repeat expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatExpression {
    /// Loop variable (`item`, or `(key, value)`).
    pub item: String,
    /// Source collection expression.
    pub collection: String,
    /// Filter chain after the first `|`, if any.
    pub filters: Option<String>,
}

static REPEAT_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\([^)]*\)|[\w$]+)\s+in\s+([^|]+?)\s*(?:\|\s*(.+?))?\s*$")
        .expect("repeat expression pattern is valid")
});

impl RepeatExpression {
    /// Parses `expr`, returning `None` when it is not a full expression.
    #[must_use]
    pub fn parse(expr: &str) -> Option<Self> {
        let captures = REPEAT_EXPRESSION.captures(expr)?;
        Some(Self {
            item: captures[1].to_string(),
            collection: captures[2].to_string(),
            filters: captures.get(3).map(|m| m.as_str().to_string()),
        })
    }
}

// ============================================================================
// CustomLocator
// ============================================================================

/// Locator dispatched to a strategy registered by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomLocator {
    /// Registered strategy id.
    pub name: String,
    /// Arguments handed to the strategy.
    pub args: Vec<String>,
}

// ============================================================================
// From implementations for ergonomics
// ============================================================================

impl From<&str> for By {
    /// Converts a string to CSS selector (default).
    fn from(s: &str) -> Self {
        Self::Css(s.to_string())
    }
}

impl From<String> for By {
    /// Converts a string to CSS selector (default).
    fn from(s: String) -> Self {
        Self::Css(s)
    }
}

// ============================================================================
// Helpers
// ============================================================================

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\s*\{\{.*\}\}\s*$").expect("bracket pattern is valid"));

/// Returns `true` for `{{…}}` values, which require an exact binding match.
pub(crate) fn is_bracketed(value: &str) -> bool {
    BRACKETED.is_match(value)
}

/// Escapes an identifier for use after `#` or `.` in a CSS selector.
fn css_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        let leading_digit = i == 0 && c.is_ascii_digit();
        if leading_digit {
            escaped.push_str(&format!("\\{:x} ", c as u32));
        } else if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            escaped.push(c);
        } else {
            escaped.push('\\');
            escaped.push(c);
        }
    }
    escaped
}

/// Escapes a value for a double-quoted CSS attribute selector.
fn attr_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

// ============================================================================
// Tests
// ============================================================================
