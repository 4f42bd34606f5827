use drills::input::ScriptedSource;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Scripted console: feeds fixed answers and captures everything written.
pub struct ScriptedConsole {
    pub source: ScriptedSource,
    pub out: Vec<u8>,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        colored::control::set_override(false);
        Self {
            source: ScriptedSource::new(lines.iter().copied()),
            out: Vec::new(),
        }
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

/// Temporary directory plus a handle on the compiled `drills` binary.
pub struct BinaryHarness {
    pub dir: TempDir,
    pub drills_binary: PathBuf,
}

impl BinaryHarness {
    pub fn new() -> Self {
        BinaryHarness {
            dir: TempDir::new().expect("Failed to create temp dir"),
            drills_binary: PathBuf::from(env!("CARGO_BIN_EXE_drills")),
        }
    }

    /// Write a file into the temp directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Run the binary with `stdin` piped in and colour disabled.
    pub fn run(&self, args: &[&str], stdin: &str) -> Output {
        let mut child = Command::new(&self.drills_binary)
            .args(args)
            .env("NO_COLOR", "1")
            .env("HOME", self.dir.path())
            .env_remove("DRILLS_CONFIG")
            .env_remove("DRILLS_LOG")
            .current_dir(self.dir.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn drills");

        // The binary may exit before reading everything (e.g. on a config error).
        if let Some(mut pipe) = child.stdin.take() {
            let _ = pipe.write_all(stdin.as_bytes());
        }

        child.wait_with_output().expect("Failed to wait for drills")
    }
}
