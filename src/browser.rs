//! Opening GitHub pages in a web browser

use crate::error::GishError;
use std::process::Command;
use tracing::debug;

/// Program and leading arguments used to open a URL on this platform.
///
/// `configured` (from `shell.browser`) wins; it may carry its own arguments,
/// split on whitespace.
pub fn opener_command(configured: Option<&str>) -> (String, Vec<String>) {
    if let Some(cmd) = configured.map(str::trim).filter(|c| !c.is_empty()) {
        let mut parts = cmd.split_whitespace().map(str::to_string);
        if let Some(program) = parts.next() {
            return (program, parts.collect());
        }
    }
    platform_opener()
}

#[cfg(target_os = "macos")]
fn platform_opener() -> (String, Vec<String>) {
    ("open".to_string(), Vec::new())
}

#[cfg(target_os = "windows")]
fn platform_opener() -> (String, Vec<String>) {
    // The empty string is the window title `start` expects before the target.
    (
        "cmd".to_string(),
        vec!["/C".to_string(), "start".to_string(), String::new()],
    )
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_opener() -> (String, Vec<String>) {
    ("xdg-open".to_string(), Vec::new())
}

/// Launch the opener for `url` and wait for it to exit.
pub fn open_url(url: &str, configured: Option<&str>) -> Result<(), GishError> {
    let (program, args) = opener_command(configured);
    debug!(program = %program, url, "Opening browser");

    let status = Command::new(&program)
        .args(&args)
        .arg(url)
        .status()
        .map_err(|e| GishError::Browser(format!("failed to run '{}': {}", program, e)))?;

    if !status.success() {
        return Err(GishError::Browser(format!(
            "'{}' exited with {}",
            program, status
        )));
    }
    Ok(())
}
