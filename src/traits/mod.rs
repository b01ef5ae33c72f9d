//! Traits bridging standard types into the chain combinator.
//!
//! - [`ResultChainExt`]: start a chain from an existing `Result`

pub mod result_ext;

pub use result_ext::*;
