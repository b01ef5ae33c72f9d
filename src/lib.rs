//! Linear chains of fallible steps with short-circuit-on-error semantics.
//!
//! A [`Chain`] threads a single value type through a sequence of fallible
//! computations. The first step to report an error freezes the chain: every
//! later [`then`](Chain::then) is skipped, any [`finally`](Chain::finally)
//! hooks still run, and the terminal [`catch`](Chain::catch) resolves the
//! error into a fallback value. Callers always end up with a plain value,
//! never a raw error.
//!
//! # Examples
//!
//! ## Success path
//!
//! ```
//! use try_chain::Chain;
//!
//! let value = Chain::start(|| Ok::<i32, &str>(10))
//!     .then(|v| Ok(v * 2))
//!     .then(|v| Ok(v + 5))
//!     .catch(|_| -1);
//!
//! assert_eq!(value, 25);
//! ```
//!
//! ## Short-circuit and recovery
//!
//! ```
//! use try_chain::Chain;
//!
//! let value = Chain::start(|| Ok::<i32, &str>(10))
//!     .then(|_| Err("boom"))
//!     .then(|v| Ok(v + 1)) // skipped
//!     .catch(|_| -999);
//!
//! assert_eq!(value, -999);
//! ```
//!
//! ## Guaranteed side-effect hooks
//!
//! ```
//! use std::cell::Cell;
//! use try_chain::Chain;
//!
//! let cleanups = Cell::new(0);
//! let value = Chain::start(|| Err::<i32, _>("boom"))
//!     .finally(|| cleanups.set(cleanups.get() + 1))
//!     .finally(|| cleanups.set(cleanups.get() + 1))
//!     .catch(|_| 0);
//!
//! assert_eq!(cleanups.get(), 2);
//! assert_eq!(value, 0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// The chain carrier and its combinators
pub mod chain;
/// The `chain!` entry-point macro
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits bridging standard types into the chain
pub mod traits;

pub use chain::Chain;
pub use traits::ResultChainExt;
