use anyhow::Result;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct StatusResult {
    pub success: bool,
    pub exit_code: Option<i32>,
}

impl StatusResult {
    /// Exit code the tool should propagate, or None if git succeeded.
    /// A child killed by a signal has no code and maps to 1.
    pub fn failure_exit_code(&self) -> Option<i32> {
        if self.success {
            None
        } else {
            Some(self.exit_code.unwrap_or(1))
        }
    }
}

pub fn cmd_status(root: &Path) -> Result<StatusResult> {
    let status = crate::git::git_stream(root, &["status", "-sb"])?;
    Ok(StatusResult {
        success: status.success(),
        exit_code: status.code(),
    })
}

pub fn format_status_human(_result: &StatusResult) -> String {
    // git's output has already streamed through; nothing to add.
    String::new()
}
