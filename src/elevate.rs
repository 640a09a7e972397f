//! Privilege escalation for restores and cleanup
//!
//! Restores first try a plain copy. Only when that fails with a permission
//! error is the copy repeated through an elevation wrapper (`sudo` by
//! default). Success is judged by the helper's exit status alone.

use std::io;
use std::path::Path;
use std::process::{Command, Output};

use tracing::debug;

/// Capability to copy a file with elevated privileges
pub trait PrivilegedCopy {
    /// Copy `src` to `dst` preserving metadata. Returns whether the helper
    /// exited successfully; `Err` means it could not be started at all.
    fn copy_elevated(&self, src: &Path, dst: &Path) -> io::Result<bool>;
}

/// Runs commands under an elevation wrapper such as `sudo` or `doas`
#[derive(Debug, Clone)]
pub struct Elevator {
    program: String,
}

impl Elevator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run `args` under the wrapper, capturing its output
    pub fn run<S: AsRef<std::ffi::OsStr>>(&self, args: &[S]) -> io::Result<Output> {
        debug!(program = %self.program, "running elevated command");
        Command::new(&self.program).args(args).output()
    }
}

impl Default for Elevator {
    fn default() -> Self {
        Self::new("sudo")
    }
}

impl PrivilegedCopy for Elevator {
    fn copy_elevated(&self, src: &Path, dst: &Path) -> io::Result<bool> {
        if let Some(parent) = dst.parent() {
            if !parent.exists() {
                let mkdir = Command::new(&self.program)
                    .arg("mkdir")
                    .arg("-p")
                    .arg(parent)
                    .status()?;
                if !mkdir.success() {
                    return Ok(false);
                }
            }
        }

        let status = Command::new(&self.program)
            .arg("cp")
            .arg("-p")
            .arg(src)
            .arg(dst)
            .status()?;
        Ok(status.success())
    }
}
