// PDK Manager - platform/process.rs
//
// External command helpers: building the `make`-in-a-terminal and
// `source .env` command lines, launching detached processes, and running a
// command to completion with captured output.

use crate::util::constants;
use crate::util::error::ProcessError;
use std::path::Path;
use std::process::{Command, Stdio};

/// stdout/stderr of a command that exited successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Argument vector that opens `terminal`, runs `make` in it, then leaves an
/// interactive shell open so the build output stays visible.
///
/// With the defaults this is
/// `gnome-terminal -- bash -c "make; exec bash"`.
pub fn make_in_terminal_argv(terminal: &[String], shell: &str, make: &str) -> Vec<String> {
    let mut argv: Vec<String> = terminal.to_vec();
    argv.push(shell.to_owned());
    argv.push("-c".to_owned());
    argv.push(format!("{make}; exec {shell}"));
    argv
}

/// Argument vector that sources `env_file` in an interactive shell and echoes
/// a marker on success.
///
/// With the defaults this is
/// `bash -i -c "source '.env' && echo 'Env sourced'"`.
pub fn source_env_argv(shell: &str, env_file: &str) -> Vec<String> {
    vec![
        shell.to_owned(),
        "-i".to_owned(),
        "-c".to_owned(),
        format!(
            "source {} && echo {}",
            shell_quote(env_file),
            shell_quote(constants::ENV_SOURCED_MARKER)
        ),
    ]
}

/// Launch `argv` in `cwd` without waiting for it.
///
/// Standard streams are detached from ours. A background thread waits on
/// the child so it is reaped when it exits. Returns the child's PID.
pub fn spawn_detached(argv: &[String], cwd: &Path, purpose: &'static str) -> Result<u32, ProcessError> {
    let (program, args) = argv
        .split_first()
        .ok_or(ProcessError::EmptyCommand { purpose })?;

    let mut child = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ProcessError::Spawn {
            program: program.clone(),
            source,
        })?;

    let pid = child.id();
    tracing::info!(program = %program, pid, cwd = %cwd.display(), "Spawned detached process");

    let name = program.clone();
    std::thread::spawn(move || match child.wait() {
        Ok(status) => tracing::debug!(program = %name, pid, status = ?status.code(), "Detached process exited"),
        Err(e) => tracing::warn!(program = %name, pid, error = %e, "Failed to wait on detached process"),
    });

    Ok(pid)
}

/// Run `argv` in `cwd` to completion, capturing stdout and stderr.
///
/// A non-zero exit is reported as `ProcessError::Failed` carrying stderr.
pub fn run_captured(argv: &[String], cwd: &Path, purpose: &'static str) -> Result<CapturedOutput, ProcessError> {
    let (program, args) = argv
        .split_first()
        .ok_or(ProcessError::EmptyCommand { purpose })?;

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| ProcessError::Spawn {
            program: program.clone(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if output.status.success() {
        tracing::debug!(program = %program, "Command completed");
        Ok(CapturedOutput { stdout, stderr })
    } else {
        tracing::debug!(program = %program, status = ?output.status.code(), "Command failed");
        Err(ProcessError::Failed {
            program: program.clone(),
            code: output.status.code(),
            stderr,
        })
    }
}

/// Quote `s` for POSIX shells using single quotes.
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_make_in_terminal_default_argv() {
        let argv = make_in_terminal_argv(&strings(&["gnome-terminal", "--"]), "bash", "make");
        assert_eq!(
            argv,
            strings(&["gnome-terminal", "--", "bash", "-c", "make; exec bash"])
        );
    }

    #[test]
    fn test_make_in_terminal_custom_make() {
        let argv = make_in_terminal_argv(&strings(&["xterm", "-e"]), "zsh", "make -j8");
        assert_eq!(argv.last().map(String::as_str), Some("make -j8; exec zsh"));
        assert_eq!(argv[0], "xterm");
    }

    #[test]
    fn test_source_env_argv_quotes_file() {
        let argv = source_env_argv("bash", "my env's.sh");
        assert_eq!(argv[..3], strings(&["bash", "-i", "-c"])[..]);
        assert_eq!(
            argv[3],
            r"source 'my env'\''s.sh' && echo 'Env sourced'"
        );
    }

    #[test]
    fn test_empty_command_is_rejected() {
        let cwd = std::env::temp_dir();
        assert!(matches!(
            spawn_detached(&[], &cwd, "make"),
            Err(ProcessError::EmptyCommand { purpose: "make" })
        ));
        assert!(matches!(
            run_captured(&[], &cwd, "environment"),
            Err(ProcessError::EmptyCommand { .. })
        ));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let cwd = std::env::temp_dir();
        let argv = strings(&["pdk-manager-no-such-program-xyz"]);
        assert!(matches!(
            spawn_detached(&argv, &cwd, "make"),
            Err(ProcessError::Spawn { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_spawn_detached_runs_in_cwd() {
        let dir = tempfile::TempDir::new().unwrap();
        let marker = dir.path().join("spawned");
        spawn_detached(&strings(&["sh", "-c", "pwd -P > spawned"]), dir.path(), "test").unwrap();

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        let mut written = String::new();
        while written.trim().is_empty() && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(20));
            written = std::fs::read_to_string(&marker).unwrap_or_default();
        }
        assert_eq!(
            std::path::Path::new(written.trim()),
            dir.path().canonicalize().unwrap()
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_run_captured_success_and_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        let ok = run_captured(&strings(&["sh", "-c", "pwd; echo err >&2"]), dir.path(), "test")
            .unwrap();
        assert!(!ok.stdout.trim().is_empty());
        assert_eq!(ok.stderr.trim(), "err");

        let err = run_captured(&strings(&["sh", "-c", "echo nope >&2; exit 3"]), dir.path(), "test")
            .unwrap_err();
        match err {
            ProcessError::Failed { code, stderr, .. } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr.trim(), "nope");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
