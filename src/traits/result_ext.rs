//! Extension trait for moving an existing `Result` into the chain world.
//!
//! Most chains begin with [`Chain::start`], but code that already holds a
//! `Result` can enter the combinator directly without an extra closure.
//!
//! # Examples
//!
//! ```
//! use try_chain::ResultChainExt;
//!
//! let value = "17".parse::<i32>()
//!     .into_chain()
//!     .then(|n| Ok(n + 1))
//!     .catch(|_| 0);
//!
//! assert_eq!(value, 18);
//! ```

use crate::chain::Chain;

/// Adds [`into_chain`](ResultChainExt::into_chain) to `Result` types.
///
/// This is the bridge for code that computed its first result outside the
/// chain, for example through the `?` operator or a library call that
/// already returns `Result`.
///
/// # Examples
///
/// ```
/// use try_chain::ResultChainExt;
///
/// fn read_port(raw: &str) -> u16 {
///     raw.parse::<u16>()
///         .into_chain()
///         .then(|p| Ok(p.max(1024)))
///         .catch(|_| 8080)
/// }
///
/// assert_eq!(read_port("9000"), 9000);
/// assert_eq!(read_port("not a port"), 8080);
/// ```
pub trait ResultChainExt<T, E> {
    /// Wraps this result as the initial state of a [`Chain`].
    fn into_chain(self) -> Chain<T, E>;
}

impl<T, E> ResultChainExt<T, E> for Result<T, E> {
    #[inline]
    fn into_chain(self) -> Chain<T, E> {
        Chain::from_result(self)
    }
}
