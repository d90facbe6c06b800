//! Scratch workspace for running the converter and the binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;
use texconv::{Config, ConvertError};

/// A temporary directory holding a palette file and input images.
pub struct TestWorkspace {
    dir: TempDir,
}

/// Captured result of running the `texconv` binary.
pub struct RunOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the palette file inside the workspace.
    pub fn palette_path(&self) -> PathBuf {
        self.dir.path().join("palette")
    }

    /// Write raw palette bytes (any length).
    pub fn write_palette(&self, bytes: &[u8]) -> PathBuf {
        let path = self.palette_path();
        std::fs::write(&path, bytes).expect("Failed to write palette");
        path
    }

    /// Write an encoded image file.
    pub fn write_image(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, bytes).expect("Failed to write image");
        path
    }

    /// Config pointing at this workspace's palette.
    pub fn config(&self, parallel: bool) -> Config {
        Config {
            palette_path: self.palette_path(),
            parallel,
        }
    }

    /// Run the library pipeline.
    pub fn convert(&self, image: &Path) -> Result<String, ConvertError> {
        texconv::convert(&self.config(true), image)
    }

    /// Run the compiled binary with the workspace as current directory.
    pub fn run_cli(&self, args: &[&str], envs: &[(&str, &str)]) -> RunOutput {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_texconv"));
        cmd.current_dir(self.dir.path())
            .args(args)
            .env_remove("PALETTE_FILE")
            .env_remove("TEXCONV_PARALLEL")
            .env_remove("RUST_LOG");
        for (key, value) in envs {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to run texconv");
        RunOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
