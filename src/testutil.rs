#![cfg(test)]

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_packages(&self, names: &[&str]) -> PathBuf {
        let pkgs_dir = self.dir.path().join("packages");
        std::fs::create_dir_all(&pkgs_dir).unwrap();
        for name in names {
            std::fs::create_dir_all(pkgs_dir.join(name)).unwrap();
        }
        pkgs_dir
    }

    pub fn write_stray_file(&self, name: &str) {
        let pkgs_dir = self.dir.path().join("packages");
        std::fs::create_dir_all(&pkgs_dir).unwrap();
        std::fs::write(pkgs_dir.join(name), "not a package").unwrap();
    }

    pub fn init_repo(&self) {
        let run = |args: &[&str]| {
            let output = Command::new("git")
                .args(args)
                .current_dir(self.dir.path())
                .env("GIT_AUTHOR_NAME", "Test")
                .env("GIT_AUTHOR_EMAIL", "test@test.com")
                .env("GIT_COMMITTER_NAME", "Test")
                .env("GIT_COMMITTER_EMAIL", "test@test.com")
                .output()
                .expect("failed to run git");
            assert!(
                output.status.success(),
                "git {:?} failed: {}",
                args,
                String::from_utf8_lossy(&output.stderr)
            );
        };

        run(&["init"]);
        run(&["commit", "--allow-empty", "-m", "initial"]);
    }
}
