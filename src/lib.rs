//! xindicator — Modular input device manager for X11.
//!
//! Provides a unified interface for listing `xinput` devices as a tree of
//! master, slave and floating entries, tracking their enabled state, and
//! toggling them on or off.

pub mod backends;
pub mod device;
pub mod manager;
pub mod parser;

pub use backends::*;
pub use device::*;
pub use manager::*;
pub use parser::*;
