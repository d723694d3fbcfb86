//! Device backends for `xindicator`.
//!
//! Implementations of [`Backend`] for concrete device sources.
//!
//! # Feature flags
//! - **`xinput`** — enables the backend that shells out to the `xinput`
//!   command line tool (default in this build).
//! - **`virtual`** — enables the virtual-backend demo. The in-memory backend
//!   itself is always compiled so tests and embedding applications can use it.
//!
//! xindicator reads and toggles existing devices; it does not create virtual
//! input devices (uinput/XTEST injection).

use thiserror::Error;

use crate::device::Device;
use crate::parser::ParseError;

pub mod virtual_input;
#[cfg(feature = "xinput")]
#[cfg_attr(docsrs, doc(cfg(feature = "xinput")))]
pub mod xinput;

/// Errors reported by a backend while listing or toggling devices.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The external command could not be started at all.
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The external command ran but reported failure.
    #[error("{command} exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// The listing output was not valid UTF-8.
    #[error("listing output was not valid UTF-8")]
    InvalidOutput(#[from] std::string::FromUtf8Error),

    /// The listing output did not parse as a device tree.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A toggle was requested for an id the backend does not know.
    #[error("no device with id {id}")]
    UnknownDevice { id: u32 },
}

/// A source of input devices that can be listed and toggled.
///
/// `list` returns a fresh, independent forest on every call; callers own the
/// result outright and may mutate it freely.
pub trait Backend {
    fn list(&mut self) -> Result<Vec<Device>, BackendError>;
    fn set_enabled(&mut self, id: u32, enabled: bool) -> Result<(), BackendError>;
}
