use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Run git with the given working directory, letting its output stream
/// straight through to the caller's stdout/stderr. A launch failure (git
/// missing from PATH, unusable working directory) is an error; a child
/// that runs but exits non-zero is reported through the returned status.
pub fn git_stream(dir: &Path, args: &[&str]) -> Result<ExitStatus> {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("failed to run git {:?} in {}", args, dir.display()))?;

    Ok(status)
}
