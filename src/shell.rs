//! 系统外壳操作：外部打开与删除
//!
//! Both calls are relays for the view layer; a failure is logged and
//! reported back, never allowed to take the host down.

use std::path::Path;
use tracing::{error, info};

/// Open a file with the platform's default viewer.
pub fn open_external(path: &Path) -> anyhow::Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = std::process::Command::new("open");
        c.arg(path);
        c
    };
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = std::process::Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = {
        let mut c = std::process::Command::new("xdg-open");
        c.arg(path);
        c
    };

    command.spawn()?;
    info!("[shell] opened externally: {:?}", path);
    Ok(())
}

/// Delete a file. Failure is logged and swallowed; the caller only learns
/// whether the file is gone.
pub fn delete_file(path: &Path) -> bool {
    match std::fs::remove_file(path) {
        Ok(()) => {
            info!("[shell] deleted: {:?}", path);
            true
        }
        Err(e) => {
            error!("[shell] delete failed for {:?}: {}", path, e);
            false
        }
    }
}
