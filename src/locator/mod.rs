//! Locators and their resolution.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `selector` | [`By`] locator values and repeater refinements |
//! | `registry` | [`LocatorRegistry`] and the [`Strategy`] extension trait |
//! | `scripts` | Introspection script bodies |
//!
//! # Strategies
//!
//! | Strategy | Resolution |
//! |----------|------------|
//! | `css`, `xpath`, `id`, `tag`, `name`, `class`, `linkText`, `partialLinkText` | Native find |
//! | `binding` | [`scripts::FIND_BINDINGS`] |
//! | `model`, `input`, `textarea`, `select`, `selectedOption` | [`scripts::FIND_BY_MODEL`] |
//! | `repeater` | [`scripts::FIND_REPEATER`] |
//! | custom | Registered [`Strategy`] |

// ============================================================================
// Submodules
// ============================================================================

/// Locator values.
pub mod selector;

/// Strategy registry.
pub mod registry;

/// Introspection scripts.
pub mod scripts;

// ============================================================================
// Re-exports
// ============================================================================

pub use registry::{LocatorRegistry, Scope, ScriptStrategy, Strategy};
pub use selector::{By, CustomLocator, RepeatExpression, Repeater};
