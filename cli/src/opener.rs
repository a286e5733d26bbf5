//! Handing URIs and files to the desktop's default application.

use std::io;
use std::process::Command;

/// Something that can open a URI or file path externally.
pub trait Opener {
    fn open(&self, target: &str) -> io::Result<()>;
}

/// Opens targets with the platform launcher (`xdg-open`, `open` or `start`).
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&self, target: &str) -> io::Result<()> {
        let status = launcher(target).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!("launcher exited with {}", status)))
        }
    }
}

#[cfg(target_os = "macos")]
fn launcher(target: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(target);
    cmd
}

#[cfg(target_os = "windows")]
fn launcher(target: &str) -> Command {
    let mut cmd = Command::new("cmd");
    // Empty title argument so `start` doesn't treat a quoted target as the window title
    cmd.args(["/C", "start", "", target]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn launcher(target: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(target);
    cmd
}

/// Open `target`, logging failure as a warning instead of propagating it.
///
/// Returns the failure reason so the caller can show it to the user.
pub fn open_best_effort(opener: &dyn Opener, target: &str) -> Result<(), String> {
    match opener.open(target) {
        Ok(()) => {
            tracing::debug!("opened {}", target);
            Ok(())
        }
        Err(e) => {
            tracing::warn!("could not open {}: {}", target, e);
            Err(e.to_string())
        }
    }
}
