//! Cached view of the device tree plus toggle forwarding.

use crate::backends::{Backend, BackendError};
#[cfg(feature = "xinput")]
use crate::backends::xinput::XInputBackend;
use crate::device::{find_device, find_device_mut, Device};

/// Owns a [`Backend`] and the most recently listed device forest.
///
/// UI layers build their widgets from [`devices`](DeviceManager::devices) and
/// route toggle actions through [`set_enabled`](DeviceManager::set_enabled);
/// the cached copy is kept in sync so a re-list is only needed when the
/// device set itself may have changed.
pub struct DeviceManager {
    backend: Box<dyn Backend>,
    devices: Vec<Device>,
}

impl DeviceManager {
    /// Manager over the default `xinput` command backend.
    ///
    /// The device list starts empty; call [`refresh`](DeviceManager::refresh)
    /// to populate it.
    #[cfg(feature = "xinput")]
    pub fn new() -> Self {
        Self::with_backend(Box::new(XInputBackend::new()))
    }

    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        Self {
            backend,
            devices: Vec::new(),
        }
    }

    /// Re-lists the devices, replacing the cached forest wholesale.
    pub fn refresh(&mut self) -> Result<&[Device], BackendError> {
        self.devices = self.backend.list()?;
        Ok(&self.devices)
    }

    /// The forest from the last successful [`refresh`](DeviceManager::refresh).
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Looks up a cached device by id, at any depth.
    pub fn device(&self, id: u32) -> Option<&Device> {
        find_device(&self.devices, id)
    }

    /// Enables or disables a device, then updates the cached record.
    pub fn set_enabled(&mut self, id: u32, enabled: bool) -> Result<(), BackendError> {
        self.backend.set_enabled(id, enabled)?;
        if let Some(device) = find_device_mut(&mut self.devices, id) {
            device.enabled = enabled;
        }
        Ok(())
    }
}
