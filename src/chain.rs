//! The [`Chain`] carrier and its combinators.
//!
//! A chain threads one value type through a linear sequence of fallible
//! steps. The first step to report an error puts the chain into its failed
//! state; every later [`then`](Chain::then) is skipped until the terminal
//! [`catch`](Chain::catch) resolves the error into a fallback value.
//!
//! # Examples
//!
//! ```
//! use try_chain::Chain;
//!
//! let total = Chain::start(|| Ok::<i32, &str>(10))
//!     .then(|v| Ok(v * 2))
//!     .then(|v| Ok(v + 5))
//!     .catch(|_| -1);
//!
//! assert_eq!(total, 25);
//! ```

use core::fmt::Display;

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(feature = "std")]
use std::string::{String, ToString};

/// A linear chain of fallible steps over a single value type.
///
/// `Chain<T, E>` carries either the last successfully produced `T` or the
/// first error an `E`-reporting step recorded. Once an error is recorded the
/// chain stays failed: no later step runs, and no operation clears the error
/// short of the terminal [`catch`](Chain::catch).
///
/// Every operation runs its closure to completion on the caller's thread
/// before returning; nothing is deferred. Panics inside a supplied closure
/// are not intercepted and propagate to the caller unchanged.
///
/// # Type Parameters
///
/// * `T` - The value type threaded through every step
/// * `E` - The error type carried from the failing step to `catch`
///
/// # Examples
///
/// ```
/// use try_chain::Chain;
///
/// let result = Chain::start(|| "5".parse::<i32>())
///     .then(|n| Ok(n * 10))
///     .catch(|_| 0);
///
/// assert_eq!(result, 50);
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<T, E> {
    state: Result<T, E>,
}

impl<T, E> Chain<T, E> {
    /// Runs the initial computation and captures its outcome as the chain state.
    ///
    /// The closure is invoked exactly once, immediately. `start` itself never
    /// fails; it only records whatever the computation reports.
    ///
    /// # Arguments
    ///
    /// * `f` - The initial fallible computation
    ///
    /// # Examples
    ///
    /// ```
    /// use try_chain::Chain;
    ///
    /// let chain = Chain::start(|| Ok::<_, &str>(42));
    /// assert!(chain.is_ok());
    ///
    /// let chain = Chain::start(|| Err::<i32, _>("boom"));
    /// assert!(chain.is_failed());
    /// ```
    #[inline]
    pub fn start<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        let state = f();

        #[cfg(feature = "tracing")]
        if state.is_err() {
            tracing::trace!("initial computation reported an error");
        }

        Self { state }
    }

    /// Wraps an already-computed result as a chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_chain::Chain;
    ///
    /// let parsed: Result<i32, _> = "17".parse();
    /// let chain = Chain::from_result(parsed);
    /// assert_eq!(chain.catch(|_| 0), 17);
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        Self { state: result }
    }

    /// Runs the next step if the chain has not failed.
    ///
    /// On a failed chain the closure is not invoked and the state passes
    /// through unchanged. On an ok chain the closure receives the current
    /// value and its result becomes the new state, including a newly
    /// reported error.
    ///
    /// # Arguments
    ///
    /// * `step` - Fallible step from the current value to the next
    ///
    /// # Examples
    ///
    /// ```
    /// use try_chain::Chain;
    ///
    /// let chain = Chain::start(|| Ok::<_, &str>(10)).then(|v| Ok(v * 2));
    /// assert_eq!(chain.catch(|_| 0), 20);
    /// ```
    #[inline]
    pub fn then<F>(self, step: F) -> Self
    where
        F: FnOnce(T) -> Result<T, E>,
    {
        match self.state {
            Ok(value) => {
                let state = step(value);

                #[cfg(feature = "tracing")]
                if state.is_err() {
                    tracing::trace!("step reported an error, chain is short-circuiting");
                }

                Self { state }
            },
            Err(e) => Self { state: Err(e) },
        }
    }

    /// Runs a side-effect hook unconditionally, then returns the chain unchanged.
    ///
    /// The hook is invoked exactly once whether the chain is ok or failed.
    /// It never alters the chain state; it is a guaranteed-call point for
    /// cleanup or logging, with no resource-acquisition semantics.
    ///
    /// # Arguments
    ///
    /// * `hook` - Side-effecting procedure; its return value is ignored
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::Cell;
    /// use try_chain::Chain;
    ///
    /// let ran = Cell::new(false);
    /// let value = Chain::start(|| Err::<i32, _>("boom"))
    ///     .finally(|| ran.set(true))
    ///     .catch(|_| -1);
    ///
    /// assert!(ran.get());
    /// assert_eq!(value, -1);
    /// ```
    #[inline]
    pub fn finally<F>(self, hook: F) -> Self
    where
        F: FnOnce(),
    {
        hook();
        self
    }

    /// Resolves the chain into a plain value, ending its lifecycle.
    ///
    /// If the chain failed, the recovery closure receives the recorded error
    /// and its return value is the result. If the chain is ok, the closure is
    /// not invoked and the current value is returned directly. Exactly one of
    /// the two happens.
    ///
    /// # Arguments
    ///
    /// * `recovery` - Maps the recorded error to a fallback value
    ///
    /// # Examples
    ///
    /// ```
    /// use try_chain::Chain;
    ///
    /// let ok = Chain::start(|| Ok::<_, &str>(42)).catch(|_| -1);
    /// assert_eq!(ok, 42);
    ///
    /// let failed = Chain::start(|| Err::<i32, _>("boom")).catch(|_| -1);
    /// assert_eq!(failed, -1);
    /// ```
    #[inline]
    pub fn catch<F>(self, recovery: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self.state {
            Ok(value) => value,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("recovering captured error at chain end");

                recovery(e)
            },
        }
    }

    /// Returns `true` while every step so far has succeeded.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.state.is_ok()
    }

    /// Returns `true` once a step has reported an error.
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.state.is_err()
    }

    /// Borrows the recorded error, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_chain::Chain;
    ///
    /// let chain = Chain::start(|| Err::<i32, _>("boom"));
    /// assert_eq!(chain.error(), Some(&"boom"));
    /// ```
    #[inline]
    pub fn error(&self) -> Option<&E> {
        self.state.as_ref().err()
    }

    /// Borrows the chain state as a `Result`.
    #[inline]
    pub fn as_result(&self) -> Result<&T, &E> {
        self.state.as_ref()
    }

    /// Unwraps the chain back into a `Result`, for use with the `?` operator.
    ///
    /// Unlike [`catch`](Chain::catch) this does not resolve the error; it
    /// hands both states back to the caller unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_chain::Chain;
    ///
    /// fn doubled(n: i32) -> Result<i32, &'static str> {
    ///     let chain = Chain::start(|| Ok(n)).then(|v| Ok(v * 2));
    ///     chain.into_result()
    /// }
    ///
    /// assert_eq!(doubled(4), Ok(8));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.state
    }

    /// Renders the recorded error as a diagnostic string, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use try_chain::Chain;
    ///
    /// let chain = Chain::start(|| Err::<i32, _>("connection refused"));
    /// assert_eq!(chain.error_description().as_deref(), Some("connection refused"));
    /// ```
    #[inline]
    pub fn error_description(&self) -> Option<String>
    where
        E: Display,
    {
        self.state.as_ref().err().map(ToString::to_string)
    }
}

impl<T, E> From<Result<T, E>> for Chain<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}
