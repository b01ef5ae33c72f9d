//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use try_chain::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`chain!`]
//! - **Types**: [`Chain`]
//! - **Traits**: [`ResultChainExt`]
//!
//! # Examples
//!
//! ```
//! use try_chain::prelude::*;
//!
//! let value = chain!("12".parse::<i32>())
//!     .then(|n| Ok(n + 30))
//!     .finally(|| ())
//!     .catch(|_| -1);
//!
//! assert_eq!(value, 42);
//! ```

// Macros
pub use crate::chain;

// Core type
pub use crate::chain::Chain;

// Traits
pub use crate::traits::ResultChainExt;
