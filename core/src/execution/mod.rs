//! Execution-history consumption layer.

pub mod session;

pub use self::session::ReplaySession;
