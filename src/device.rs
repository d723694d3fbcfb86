//! Device records parsed from the X server's input device tree.
//!
//! [`Device`] is a lightweight, cloneable description of one `xinput` entry,
//! suitable for UI display, logging, and persistence. Each parse produces a
//! fresh forest of these records; roots are master or floating devices, and
//! every other device hangs off its parent's `children` list in order of
//! appearance.
//!
//! # Conventions
//! - `name` is the user-facing label reported by the X server, trimmed of
//!   surrounding whitespace (internal whitespace is preserved).
//! - `kind` is the free-text device class token (`"pointer"`, `"keyboard"`,
//!   or the literal `"floating"` for unattached devices).
//! - `parent_id` is present only for non-floating slave devices.
//! - `id` is assigned by the X server, not by this crate; it is stable for
//!   the lifetime of the device but may be reused after removal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a device in the master/slave pairing hierarchy.
///
/// Floating devices report the level the server printed for them (usually
/// `Slave`) but never have a parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceLevel {
    Master,
    Slave,
}

impl fmt::Display for DeviceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceLevel::Master => write!(f, "master"),
            DeviceLevel::Slave => write!(f, "slave"),
        }
    }
}

/// One entry of the input device tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Server-assigned device id.
    pub id: u32,
    /// Human-readable device name.
    pub name: String,
    /// Id of the paired or owning device, if any.
    pub parent_id: Option<u32>,
    /// Master/slave classification.
    pub level: DeviceLevel,
    /// Device class token (e.g. `"pointer"`, `"keyboard"`, `"floating"`).
    pub kind: String,
    /// Whether the device is currently enabled. Defaults to `true`.
    pub enabled: bool,
    /// Subordinate devices, in order of appearance.
    pub children: Vec<Device>,
}

impl Device {
    /// Creates an enabled device with no children.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        parent_id: Option<u32>,
        level: DeviceLevel,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id,
            level,
            kind: kind.into(),
            enabled: true,
            children: Vec::new(),
        }
    }

    /// Appends `device` as the last child of `self`.
    pub fn add_child(&mut self, device: Device) {
        self.children.push(device);
    }

    /// True for devices detached from the master/slave hierarchy.
    pub fn is_floating(&self) -> bool {
        self.kind == "floating"
    }

    /// Visits this device and all of its descendants, depth first.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &Device> + '_> {
        Box::new(std::iter::once(self).chain(self.children.iter().flat_map(|c| c.iter())))
    }

    /// Number of devices in this subtree, including `self`.
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

/// Finds a device by id anywhere in the forest.
pub fn find_device(devices: &[Device], id: u32) -> Option<&Device> {
    for device in devices {
        if device.id == id {
            return Some(device);
        }
        if let Some(found) = find_device(&device.children, id) {
            return Some(found);
        }
    }
    None
}

/// Mutable variant of [`find_device`].
pub fn find_device_mut(devices: &mut [Device], id: u32) -> Option<&mut Device> {
    for device in devices {
        if device.id == id {
            return Some(device);
        }
        if let Some(found) = find_device_mut(&mut device.children, id) {
            return Some(found);
        }
    }
    None
}
