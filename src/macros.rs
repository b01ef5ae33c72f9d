//! Ergonomic shorthand for starting a [`Chain`](crate::Chain).
//!
//! # Examples
//!
//! ```
//! use try_chain::chain;
//!
//! let value = chain!("21".parse::<i32>())
//!     .then(|n| Ok(n * 2))
//!     .catch(|_| 0);
//!
//! assert_eq!(value, 42);
//! ```

/// Wraps a `Result`-producing expression or block as a started chain.
///
/// Equivalent to `Chain::start(move || expr)`: the expression is evaluated
/// immediately and its outcome becomes the initial chain state.
///
/// # Syntax
///
/// - `chain!(expr)` - wraps a single `Result`-producing expression
/// - `chain!({ ... })` - wraps a block that produces a `Result`
///
/// # Examples
///
/// ```
/// use try_chain::chain;
///
/// // Simple expression
/// let n = chain!("7".parse::<u32>()).catch(|_| 0);
/// assert_eq!(n, 7);
///
/// // Block syntax with multiple statements
/// let n = chain!({
///     let raw = "not a number";
///     raw.parse::<u32>()
/// })
/// .catch(|_| 0);
/// assert_eq!(n, 0);
/// ```
#[macro_export]
macro_rules! chain {
    ($expr:expr $(,)?) => {
        $crate::Chain::start(move || $expr)
    };
}
