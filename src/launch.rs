//! Writing the generated config and starting Terminator.
//!
//! The config is written to a file that outlives termgrid (Terminator reads
//! it after we are gone), then Terminator is started with
//! `-g <config> -l <layout>`. By default the emulator is detached into its
//! own process group with null stdio; in foreground mode termgrid replaces
//! itself with the emulator.

use crate::error::{Result, TermgridError};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// How the emulator process is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchMode {
    /// Spawn in a new process group and return immediately.
    #[default]
    Detached,
    /// Replace the current process with the emulator.
    Foreground,
}

/// Write `document` to `output`, or to a persistent temp file.
///
/// Returns the path that was written.
pub fn write_config(document: &str, output: Option<&Path>) -> Result<PathBuf> {
    let path = match output {
        Some(path) => {
            std::fs::write(path, document)?;
            path.to_path_buf()
        }
        None => {
            let mut file = tempfile::Builder::new()
                .prefix("termgrid-")
                .suffix(".conf")
                .tempfile()?;
            file.write_all(document.as_bytes())?;
            let (_, path) = file.keep().map_err(|e| e.error)?;
            path
        }
    };
    tracing::info!(path = %path.display(), "wrote terminator config");
    Ok(path)
}

/// Build the emulator command line.
pub fn command(program: &str, config_path: &Path, layout_name: &str) -> Command {
    let mut cmd = Command::new(program);
    cmd.arg("-g").arg(config_path).arg("-l").arg(layout_name);
    cmd
}

/// Start the emulator.
///
/// # Errors
///
/// Returns [`TermgridError::Launch`] if the process cannot be started.
pub fn launch(program: &str, config_path: &Path, layout_name: &str, mode: LaunchMode) -> Result<()> {
    let mut cmd = command(program, config_path, layout_name);
    let launch_error = |e: std::io::Error| TermgridError::Launch {
        program: program.to_string(),
        reason: e.to_string(),
    };

    tracing::info!(program, layout = layout_name, ?mode, "launching");

    match mode {
        LaunchMode::Detached => {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
            #[cfg(unix)]
            {
                use std::os::unix::process::CommandExt;
                cmd.process_group(0);
            }
            let child = cmd.spawn().map_err(launch_error)?;
            tracing::debug!(pid = child.id(), "detached");
            Ok(())
        }
        LaunchMode::Foreground => foreground(cmd).map_err(launch_error),
    }
}

#[cfg(unix)]
fn foreground(mut cmd: Command) -> std::io::Result<()> {
    use std::os::unix::process::CommandExt;
    // exec only returns on failure.
    Err(cmd.exec())
}

#[cfg(not(unix))]
fn foreground(mut cmd: Command) -> std::io::Result<()> {
    let status = cmd.status()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("exited with {}", status)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_args() {
        let cmd = command("terminator", Path::new("/tmp/x.conf"), "cluster");
        assert_eq!(cmd.get_program(), "terminator");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, ["-g", "/tmp/x.conf", "-l", "cluster"]);
    }

    #[test]
    fn test_write_config_to_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("terminator.conf");
        let path = write_config("[layouts]\n", Some(&out)).unwrap();
        assert_eq!(path, out);
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "[layouts]\n");
    }

    #[test]
    fn test_write_config_to_temp_file_persists() {
        let path = write_config("[plugins]\n", None).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("termgrid-") && name.ends_with(".conf"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[plugins]\n");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_launch_missing_binary() {
        let result = launch(
            "termgrid-test-no-such-binary",
            Path::new("/tmp/x.conf"),
            "l",
            LaunchMode::Detached,
        );
        assert!(matches!(
            result,
            Err(TermgridError::Launch { program, .. }) if program == "termgrid-test-no-such-binary"
        ));
    }
}
