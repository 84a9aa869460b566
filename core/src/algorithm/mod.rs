//! FLUXION algorithm layer
//!
//! Trait abstractions over residual networks and the augmenting-path
//! maximum-flow engine built on top of them.

pub mod max_flow;
pub mod traits;

pub use self::max_flow::*;
pub use self::traits::*;
