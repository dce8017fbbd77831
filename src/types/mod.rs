//! Core type definitions using newtype patterns for type safety.
//!
//! These types make invalid ports and inverted ranges unrepresentable, so
//! everything past argument validation can rely on them.

mod port;
mod target;

pub use port::{Port, PortError, PortRange};
pub use target::{resolve_host, ResolutionError, Target};
