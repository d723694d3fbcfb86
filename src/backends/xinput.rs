//! Backend driving the X11 `xinput` command line tool.

use std::process::{Command, Output};

use crate::backends::{Backend, BackendError};
use crate::device::Device;
use crate::parser;

/// Lists devices with `xinput list --long` and toggles them with
/// `xinput --enable <id>` / `xinput --disable <id>`.
///
/// All invocations are blocking and capture the child's output; nothing is
/// inherited from or written to the parent's stdio.
pub struct XInputBackend {
    program: String,
}

impl XInputBackend {
    pub fn new() -> Self {
        Self::with_program("xinput")
    }

    /// Uses `program` in place of `xinput`. Intended for tests and for
    /// wrappers that live outside `PATH`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<Output, BackendError> {
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| BackendError::Spawn {
                command: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(BackendError::CommandFailed {
                command: format!("{} {}", self.program, args.join(" ")),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }
}

impl Default for XInputBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for XInputBackend {
    fn list(&mut self) -> Result<Vec<Device>, BackendError> {
        let output = self.run(&["list", "--long"])?;
        let text = String::from_utf8(output.stdout)?;
        Ok(parser::parse(&text)?)
    }

    fn set_enabled(&mut self, id: u32, enabled: bool) -> Result<(), BackendError> {
        let flag = if enabled { "--enable" } else { "--disable" };
        self.run(&[flag, &id.to_string()])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    // A stand-in for the real xinput binary; echoes a canned listing for
    // `list --long` and records toggle invocations to a log file.
    fn write_fake_xinput(dir: &Path) -> String {
        let listing = "\
⎡ Virtual core pointer              \tid=2\t[master pointer  (3)]
⎜   ↳ Virtual core XTEST pointer   \tid=4\t[slave  pointer  (2)]
⎣ Virtual core keyboard            \tid=3\t[master keyboard (2)]
    ↳ Virtual core XTEST keyboard  \tid=5\t[slave  keyboard (3)]
        This device is disabled
";
        let script = dir.join("fake-xinput");
        let log = dir.join("calls.log");
        fs::write(
            &script,
            format!(
                "#!/bin/sh\necho \"$@\" >> {log}\nif [ \"$1\" = list ]; then cat <<'EOF'\n{listing}EOF\nfi\n",
                log = log.display(),
            ),
        )
        .expect("write fake xinput");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .expect("mark fake xinput executable");
        script.display().to_string()
    }

    #[test]
    fn test_list_parses_command_output() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut backend = XInputBackend::with_program(write_fake_xinput(dir.path()));

        let devices = backend.list().expect("fake listing parses");
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].name, "Virtual core pointer");
        assert!(!devices[1].children[0].enabled);
    }

    #[test]
    fn test_set_enabled_invokes_the_right_flag() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut backend = XInputBackend::with_program(write_fake_xinput(dir.path()));

        backend.set_enabled(5, false).expect("disable runs");
        backend.set_enabled(5, true).expect("enable runs");

        let calls = fs::read_to_string(dir.path().join("calls.log")).expect("log written");
        assert_eq!(calls, "--disable 5\n--enable 5\n");
    }

    #[test]
    fn test_missing_program_reports_spawn_error() {
        let mut backend = XInputBackend::with_program("/nonexistent/xinput");
        assert!(matches!(
            backend.list(),
            Err(BackendError::Spawn { .. })
        ));
    }

    #[test]
    fn test_nonzero_exit_reports_command_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let script = dir.path().join("failing-xinput");
        fs::write(&script, "#!/bin/sh\necho \"no such device\" >&2\nexit 3\n")
            .expect("write failing xinput");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .expect("mark failing xinput executable");

        let mut backend = XInputBackend::with_program(script.display().to_string());
        match backend.set_enabled(99, true) {
            Err(BackendError::CommandFailed { stderr, .. }) => {
                assert_eq!(stderr, "no such device");
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }
}
