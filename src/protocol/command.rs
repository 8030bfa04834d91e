//! Command definitions organized by module.
//!
//! Commands follow `module.methodName` format.
//!
//! # Command Modules
//!
//! | Module | Commands |
//! |--------|----------|
//! | `element` | Native lookup, element actions |
//! | `script` | Script execution with marshaled arguments |

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::identifiers::ElementId;

// ============================================================================
// Command Wrapper
// ============================================================================

/// All protocol commands organized by module.
///
/// This enum wraps module-specific command enums for unified serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Command {
    /// Element module commands.
    Element(ElementCommand),
    /// Script module commands.
    Script(ScriptCommand),
}

// ============================================================================
// Element Commands
// ============================================================================

/// Element module commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum ElementCommand {
    /// Find all elements with a native strategy, in document order.
    #[serde(rename = "element.findAll")]
    FindAll {
        /// Native strategy name (`css selector`, `xpath`, ...).
        using: String,
        /// Strategy value.
        value: String,
        /// Element to search under (document if absent).
        #[serde(rename = "parentId", skip_serializing_if = "Option::is_none")]
        parent_id: Option<ElementId>,
    },

    /// Perform an action on, or read from, an element.
    #[serde(rename = "element.perform")]
    Perform {
        /// Target element.
        #[serde(rename = "elementId")]
        element_id: ElementId,
        /// Action to perform.
        action: Action,
        /// Action arguments.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<Value>,
    },
}

// ============================================================================
// Script Commands
// ============================================================================

/// Script module commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum ScriptCommand {
    /// Execute a synchronous script body; `arguments[i]` holds `args[i]`.
    #[serde(rename = "script.execute")]
    Execute {
        /// Script function body.
        script: String,
        /// Marshaled arguments (element references included).
        args: Vec<Value>,
    },
}

// ============================================================================
// Action
// ============================================================================

/// Element actions delegated to the remote end.
///
/// Reads return a value, interactions return `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Click the element.
    Click,
    /// Clear an editable element.
    Clear,
    /// Type text (`args[0]`) into the element.
    SendKeys,
    /// Submit the element's form.
    Submit,
    /// Read the rendered text.
    GetText,
    /// Read an attribute (`args[0]`), `null` when absent.
    GetAttribute,
    /// Read the tag name.
    GetTagName,
    /// Whether the element is displayed.
    IsDisplayed,
    /// Whether the element is enabled.
    IsEnabled,
    /// Whether an option/checkbox/radio is selected.
    IsSelected,
}

impl Action {
    /// Returns the protocol name of the action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Clear => "clear",
            Self::SendKeys => "sendKeys",
            Self::Submit => "submit",
            Self::GetText => "getText",
            Self::GetAttribute => "getAttribute",
            Self::GetTagName => "getTagName",
            Self::IsDisplayed => "isDisplayed",
            Self::IsEnabled => "isEnabled",
            Self::IsSelected => "isSelected",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
