//! ng-finder - Lazy, chainable element finders for remote browser automation.
//!
//! This library lets callers describe "the element(s) matching a locator,
//! possibly under another element" without contacting the browser, and
//! resolves those descriptions only when a terminal action is requested.
//! Besides the native WebDriver strategies it understands AngularJS
//! bindings, models and repeaters through introspection scripts.
//!
//! # Architecture
//!
//! - **Finders**: [`ElementFinder`] / [`ElementArrayFinder`] record scope
//!   and locator; terminal actions return a [`Deferred`] value
//! - **Locators**: [`By`] values resolved by the [`LocatorRegistry`],
//!   extensible through the [`Strategy`] trait
//! - **Session**: the [`Session`] trait is the only path to the document;
//!   [`RemoteSession`] implements it over a WebSocket connection
//!
//! Key design principles:
//!
//! - Building a chain sends nothing; every forcing resolves it again
//! - Parents resolve before children, one remote call at a time
//! - An ancestor's failure reaches the caller unchanged
//! - Every resolved handle is an [`Element`] with the same query surface
//!
//! # Quick Start
//!
//! ```no_run
//! use ng_finder::{Browser, By, RemoteSession, Result};
//! use ng_finder::transport::ConnectionOptions;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let options = ConnectionOptions::builder()
//!         .url("ws://127.0.0.1:4444/session")
//!         .build()?;
//!     let browser = Browser::new(RemoteSession::connect(&options).await?);
//!
//!     // Describe, then act
//!     let username = browser.element(By::model("username"));
//!     username.clear().await?;
//!     username.send_keys("Jane Doe").await?;
//!
//!     let greeting = browser.element(By::binding("username")).get_text().await?;
//!     println!("Greeting: {}", greeting);
//!
//!     // Work with repeated blocks
//!     let days = browser.all(By::repeater("day in days"));
//!     let names = days
//!         .map(|day, _| async move { day.element(By::binding("day.name")).get_text() })
//!         .await?;
//!     println!("{} days: {:?}", days.count().await?, names);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`browser`] | [`Browser`] entry point and [`Element`] handles |
//! | [`finder`] | Lazy finders and [`Deferred`] values |
//! | [`locator`] | [`By`] locators and the strategy registry |
//! | [`session`] | [`Session`] trait and [`RemoteSession`] |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |
//! | [`protocol`] | WebSocket message types (internal) |
//! | [`transport`] | WebSocket transport layer (internal) |

// ============================================================================
// Modules
// ============================================================================

/// Browser entry point and element handles.
pub mod browser;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Lazy element finders and deferred values.
pub mod finder;

/// Type-safe identifiers for remote entities.
pub mod identifiers;

/// Locator values, strategies and introspection scripts.
pub mod locator;

/// WebSocket protocol message types.
///
/// Internal module defining command/response structures.
pub mod protocol;

/// Session trait and its WebSocket implementation.
pub mod session;

/// WebSocket transport layer.
///
/// Internal module handling the client connection and its options.
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

// Browser types
pub use browser::{Browser, Element};

// Finder types
pub use finder::{Deferred, ElementArrayFinder, ElementFinder, Materialize};

// Locator types
pub use locator::{By, LocatorRegistry, Repeater, ScriptStrategy, Strategy};

// Session types
pub use session::{Action, RemoteSession, Session};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::{ElementId, RequestId};
