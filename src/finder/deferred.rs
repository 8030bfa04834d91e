//! Deferred values.
//!
//! A [`Deferred`] is a pending computation that does nothing until it is
//! forced with [`Deferred::force`] or `.await`. Every terminal action on a
//! finder returns one, so actions compose before anything is sent.
//!
//! [`Materialize`] flattens values that may themselves contain deferred
//! results, which lets [`ElementArrayFinder::map`](super::ElementArrayFinder::map)
//! callbacks return `Deferred`s, `Result`s, finders or plain values alike.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::future::{Future, IntoFuture};

use futures_util::future::BoxFuture;
use serde_json::Value;

use crate::browser::Element;
use crate::error::{Error, Result};

use super::ElementFinder;

// ============================================================================
// Types
// ============================================================================

type Thunk<T> = Box<dyn FnOnce() -> BoxFuture<'static, Result<T>> + Send>;

// ============================================================================
// Deferred
// ============================================================================

/// Lazily computed value.
///
/// # Example
///
/// ```ignore
/// let text = browser.element(By::binding("greet")).get_text();
/// // Nothing has been sent yet.
/// let upper = text.map(|t| t.to_uppercase());
/// assert_eq!(upper.await?, "HIYA");
/// ```
#[must_use = "deferred values do nothing until forced"]
pub struct Deferred<T> {
    thunk: Thunk<T>,
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Deferred<T> {
    /// Creates a deferred value from a future factory.
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        Self {
            thunk: Box::new(move || -> BoxFuture<'static, Result<T>> { Box::pin(f()) }),
        }
    }

    /// Creates an already available value.
    pub fn ready(value: T) -> Self {
        Self::new(move || async move { Ok(value) })
    }

    /// Creates a value that fails with `error` when forced.
    pub fn failed(error: Error) -> Self {
        Self::new(move || async move { Err(error) })
    }

    /// Chains an asynchronous step after this value.
    pub fn then<U, F, Fut>(self, f: F) -> Deferred<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Result<U>> + Send + 'static,
    {
        Deferred::new(move || async move {
            let value = self.force().await?;
            f(value).await
        })
    }

    /// Transforms the value once available.
    pub fn map<U, F>(self, f: F) -> Deferred<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        Deferred::new(move || async move { self.force().await.map(f) })
    }

    /// Runs the computation.
    pub fn force(self) -> BoxFuture<'static, Result<T>> {
        (self.thunk)()
    }
}

impl<T: Send + 'static> IntoFuture for Deferred<T> {
    type Output = Result<T>;
    type IntoFuture = BoxFuture<'static, Result<T>>;

    fn into_future(self) -> Self::IntoFuture {
        self.force()
    }
}

// ============================================================================
// Materialize
// ============================================================================

/// Values that can be fully resolved into a plain output.
pub trait Materialize: Send + 'static {
    /// Fully resolved form.
    type Output: Send + 'static;

    /// Resolves every pending part of `self`.
    fn materialize(self) -> BoxFuture<'static, Result<Self::Output>>;
}

macro_rules! impl_materialize_plain {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Materialize for $ty {
                type Output = $ty;

                fn materialize(self) -> BoxFuture<'static, Result<Self::Output>> {
                    Box::pin(async move { Ok(self) })
                }
            }
        )*
    };
}

impl_materialize_plain!(
    (),
    bool,
    i32,
    i64,
    u32,
    u64,
    usize,
    isize,
    f64,
    String,
    &'static str,
    Value,
    Element,
);

impl<T: Materialize> Materialize for Deferred<T> {
    type Output = T::Output;

    fn materialize(self) -> BoxFuture<'static, Result<Self::Output>> {
        Box::pin(async move { self.force().await?.materialize().await })
    }
}

impl<T: Materialize> Materialize for Result<T> {
    type Output = T::Output;

    fn materialize(self) -> BoxFuture<'static, Result<Self::Output>> {
        Box::pin(async move { self?.materialize().await })
    }
}

impl<T: Materialize> Materialize for Option<T> {
    type Output = Option<T::Output>;

    fn materialize(self) -> BoxFuture<'static, Result<Self::Output>> {
        Box::pin(async move {
            match self {
                Some(value) => Ok(Some(value.materialize().await?)),
                None => Ok(None),
            }
        })
    }
}

impl<T: Materialize> Materialize for Vec<T> {
    type Output = Vec<T::Output>;

    fn materialize(self) -> BoxFuture<'static, Result<Self::Output>> {
        Box::pin(async move {
            let mut out = Vec::with_capacity(self.len());
            for value in self {
                out.push(value.materialize().await?);
            }
            Ok(out)
        })
    }
}

impl<A: Materialize, B: Materialize> Materialize for (A, B) {
    type Output = (A::Output, B::Output);

    fn materialize(self) -> BoxFuture<'static, Result<Self::Output>> {
        Box::pin(async move {
            let (a, b) = self;
            Ok((a.materialize().await?, b.materialize().await?))
        })
    }
}

impl<A: Materialize, B: Materialize, C: Materialize> Materialize for (A, B, C) {
    type Output = (A::Output, B::Output, C::Output);

    fn materialize(self) -> BoxFuture<'static, Result<Self::Output>> {
        Box::pin(async move {
            let (a, b, c) = self;
            Ok((
                a.materialize().await?,
                b.materialize().await?,
                c.materialize().await?,
            ))
        })
    }
}

impl Materialize for ElementFinder {
    type Output = Element;

    fn materialize(self) -> BoxFuture<'static, Result<Self::Output>> {
        self.find().force()
    }
}

// ============================================================================
// Tests
// ============================================================================
