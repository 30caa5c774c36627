//! Shared integration-test harness for running the `mpi-glossary` binary.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Output;

/// Helpers for spawning the CLI under test.
pub struct GlossaryCmd;

impl GlossaryCmd {
    /// Run the binary with the given arguments and wait for it to exit.
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn run(args: &[&str]) -> Output {
        std::process::Command::new(env!("CARGO_BIN_EXE_mpi-glossary"))
            .args(args)
            .output()
            .expect("failed to spawn mpi-glossary")
    }

    /// Returns the path to a test fixture.
    #[must_use]
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }
}
