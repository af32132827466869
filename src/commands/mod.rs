//! Built-in command units.
//!
//! These are the generic modules every deployment gets: block inspection
//! under `basic.*`, failure/skip simulation under `debug.*`, and the
//! `custom.*` key processors. Host-specific units are registered by the
//! embedding application on top of these.

pub mod basic;
pub mod custom;
pub mod debug;

use crate::registry::CommandRegistry;

/// Registers every built-in unit into `registry`.
pub fn register_defaults(registry: &mut CommandRegistry) {
    basic::register(registry);
    custom::register(registry);
    debug::register(registry);
}
