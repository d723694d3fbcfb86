//! In-memory backend for demos and tests.

use crate::backends::{Backend, BackendError};
use crate::device::{find_device_mut, Device};

/// Backend serving a seeded, in-memory device forest.
///
/// Close enough to the real thing for UI code and tests: `list` hands out an
/// independent copy of the forest, `set_enabled` updates the stored one.
#[derive(Default)]
pub struct VirtualBackend {
    devices: Vec<Device>,
}

impl VirtualBackend {
    pub fn new(devices: Vec<Device>) -> Self {
        Self { devices }
    }

    /// Replaces the stored forest.
    pub fn feed(&mut self, devices: Vec<Device>) {
        self.devices = devices;
    }
}

impl Backend for VirtualBackend {
    fn list(&mut self) -> Result<Vec<Device>, BackendError> {
        Ok(self.devices.clone())
    }

    fn set_enabled(&mut self, id: u32, enabled: bool) -> Result<(), BackendError> {
        match find_device_mut(&mut self.devices, id) {
            Some(device) => {
                device.enabled = enabled;
                Ok(())
            }
            None => Err(BackendError::UnknownDevice { id }),
        }
    }
}
