//! CLI command implementations

pub mod create;
pub mod down;
pub mod status;
pub mod up;
