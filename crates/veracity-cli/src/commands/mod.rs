//! Command implementations.

pub mod check;
pub mod config;
pub mod evidence;
pub mod topics;

pub use self::check::{execute_check, resolve_claim};
pub use self::config::execute_config;
pub use self::evidence::execute_evidence;
pub use self::topics::execute_topics;
