//! Parser for the tree-formatted output of `xinput list --long`.
//!
//! The listing interleaves three kinds of lines:
//!
//! ```text
//! ⎡ Virtual core pointer                  id=2  [master pointer  (3)]
//! ⎜   ↳ Virtual core XTEST pointer       id=4  [slave  pointer  (2)]
//!         Reporting 1 classes:
//!             Class originated from: 4. Type: XIButtonClass
//! ~ TPPS/2 IBM TrackPoint                id=12 [floating slave]
//!         This device is disabled
//! ```
//!
//! Device lines carry the name, id and bracketed descriptor; indented
//! class-detail lines are informational and skipped, except for the literal
//! disabled marker, which flags the most recently parsed device. The
//! box-drawing glyphs (`⎡ ⎜ ⎣ ~` and the `↳` connector) are decoration and
//! never part of the captured name.
//!
//! [`parse`] is a pure function: one listing in, one owned device forest out,
//! or a [`ParseError`] describing the first offending line. No partial forest
//! is ever returned.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::device::{Device, DeviceLevel};

/// Literal line (once trimmed) that marks the preceding device as disabled.
pub const DISABLED_MARKER: &str = "This device is disabled";

// Two bracket arms: `[master pointer (3)]` for paired devices and
// `[floating slave]` for detached ones. The name capture is greedy, so it
// soaks up everything before the final run of whitespace ahead of `id=`.
static DEVICE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[~⎡⎜⎣]?(?:\s+↳)?\s+(?P<name>.*)\s+id=(?P<id>\d+)\s+",
        r"\[(?:(?P<level>master|slave)\s+(?P<kind>\w+)\s+\((?P<parent>\d+)\)",
        r"|floating\s+(?P<flevel>master|slave))\]",
    ))
    .expect("device line pattern is valid")
});

/// Failure to understand one line of the listing.
///
/// Any of these aborts the whole parse; the caller decides whether to re-run
/// the listing command or surface the message.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A non-blank, non-indented line did not match the device-line grammar.
    #[error("could not parse device line {line:?}")]
    BadDeviceLine { line: String },

    /// A slave device referred to a parent that has not been listed yet.
    #[error("device {id} refers to parent {parent_id}, which has not been listed")]
    UnknownParent { id: u32, parent_id: u32 },

    /// The same device id appeared on two device lines.
    #[error("device id {id} listed more than once")]
    DuplicateId { id: u32 },

    /// A disabled marker appeared before any device line.
    #[error("disabled marker found before any device line")]
    MarkerWithoutDevice,
}

/// Parses a full `xinput list --long` capture into a device forest.
///
/// Roots are masters and floating devices in order of appearance; every
/// non-floating slave is attached to its parent's `children` list, also in
/// order of appearance. Slaves must appear after their parent.
///
/// ```
/// use xindicator::parser::parse;
///
/// let devices = parse(
///     "
/// ⎡ Virtual core pointer              \tid=2\t[master pointer  (3)]
/// ⎜   ↳ Virtual core XTEST pointer   \tid=4\t[slave  pointer  (2)]
/// ⎣ Virtual core keyboard            \tid=3\t[master keyboard (2)]
///     ↳ Virtual core XTEST keyboard  \tid=5\t[slave  keyboard (3)]
///         This device is disabled
/// ",
/// )
/// .unwrap();
///
/// assert_eq!(devices.len(), 2);
/// assert_eq!(devices[0].children[0].id, 4);
/// assert!(!devices[1].children[0].enabled);
/// ```
pub fn parse(text: &str) -> Result<Vec<Device>, ParseError> {
    let mut roots: Vec<Device> = Vec::new();
    // Each listed device is addressed by its path of child indices from the
    // root list. Devices are only ever appended, so recorded paths stay valid
    // for the rest of the parse.
    let mut paths: HashMap<u32, Vec<usize>> = HashMap::new();
    let mut last: Option<Vec<usize>> = None;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if is_subordinate(line) {
            if line.trim() == DISABLED_MARKER {
                let path = last.as_ref().ok_or(ParseError::MarkerWithoutDevice)?;
                device_at_mut(&mut roots, path).enabled = false;
            }
            continue;
        }

        let device = parse_line(line)?;
        let id = device.id;
        if paths.contains_key(&id) {
            return Err(ParseError::DuplicateId { id });
        }

        let path = match device.parent_id {
            Some(parent_id) if device.level == DeviceLevel::Slave => {
                let parent_path = paths
                    .get(&parent_id)
                    .ok_or(ParseError::UnknownParent { id, parent_id })?;
                let mut path = parent_path.clone();
                let parent = device_at_mut(&mut roots, parent_path);
                path.push(parent.children.len());
                parent.add_child(device);
                path
            }
            // Masters keep their paired-device id in `parent_id` but still
            // sit at the root, as do floating devices.
            _ => {
                roots.push(device);
                vec![roots.len() - 1]
            }
        };

        paths.insert(id, path.clone());
        last = Some(path);
    }

    Ok(roots)
}

/// Parses a single device line.
fn parse_line(line: &str) -> Result<Device, ParseError> {
    let caps = DEVICE_LINE
        .captures(line)
        .ok_or_else(|| ParseError::BadDeviceLine {
            line: line.to_string(),
        })?;

    let id = parse_id(&caps["id"], line)?;
    let name = caps["name"].trim().to_string();

    if let Some(level) = caps.name("level") {
        let parent_id = parse_id(&caps["parent"], line)?;
        Ok(Device::new(
            id,
            name,
            Some(parent_id),
            keyword_level(level.as_str()),
            &caps["kind"],
        ))
    } else {
        Ok(Device::new(
            id,
            name,
            None,
            keyword_level(&caps["flevel"]),
            "floating",
        ))
    }
}

fn parse_id(digits: &str, line: &str) -> Result<u32, ParseError> {
    digits.parse().map_err(|_| ParseError::BadDeviceLine {
        line: line.to_string(),
    })
}

// The grammar only admits these two keywords.
fn keyword_level(keyword: &str) -> DeviceLevel {
    if keyword == "master" {
        DeviceLevel::Master
    } else {
        DeviceLevel::Slave
    }
}

/// Indented continuation line that is not itself a device line. A leading
/// `↳` marks an indented *device* line, which must match the grammar.
fn is_subordinate(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.len() < line.len() && !trimmed.is_empty() && !trimmed.starts_with('↳')
}

fn device_at_mut<'a>(roots: &'a mut [Device], path: &[usize]) -> &'a mut Device {
    let mut device = &mut roots[path[0]];
    for &idx in &path[1..] {
        device = &mut device.children[idx];
    }
    device
}
