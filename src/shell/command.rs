//! Child process execution.
//!
//! Programs are spawned directly, never through a shell, so arguments reach
//! the child exactly as given. The environment is always inherited as-is.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::error::{EXIT_NOT_EXECUTABLE, EXIT_NOT_FOUND};

/// Result of running a child process to completion.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code, with signal deaths mapped to `128 + signal`.
    pub exit_code: i32,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the child exited with status 0.
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory (inherits the caller's when unset).
    pub cwd: Option<PathBuf>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

impl CommandOptions {
    /// Options that hand all three standard streams to the child.
    pub fn inherited(cwd: &Path) -> Self {
        Self {
            cwd: Some(cwd.to_path_buf()),
            ..Default::default()
        }
    }

    /// Options that capture both output streams.
    pub fn captured() -> Self {
        Self {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        }
    }
}

/// Build a [`Command`] for `program` with `args` and the given options.
pub fn build_command<S: AsRef<OsStr>>(
    program: &Path,
    args: &[S],
    options: &CommandOptions,
) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    if options.capture_stdout {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
    }

    if options.capture_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    cmd.stdin(Stdio::inherit());
    cmd
}

/// Run `program` to completion.
///
/// Only a failure to spawn is an `Err`; a child that runs and exits
/// non-zero is reported through [`CommandResult::success`].
pub fn execute<S: AsRef<OsStr>>(
    program: &Path,
    args: &[S],
    options: &CommandOptions,
) -> io::Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = build_command(program, args, options);
    tracing::debug!(command = %display_command(program, args), "spawning");

    let output = cmd.output()?;
    let duration = start.elapsed();

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    Ok(CommandResult {
        exit_code: exit_code(output.status),
        stdout,
        stderr,
        duration,
        success: output.status.success(),
    })
}

/// Run `program` with captured output and no working directory change.
pub fn execute_quiet<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> io::Result<CommandResult> {
    execute(program, args, &CommandOptions::captured())
}

/// Convert an exit status to the code a POSIX shell would report.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Exit code a shell would report when spawning fails with `err`.
pub fn spawn_exit_code(err: &io::Error) -> i32 {
    match err.kind() {
        io::ErrorKind::NotFound => EXIT_NOT_FOUND,
        _ => EXIT_NOT_EXECUTABLE,
    }
}

/// Render a command line for logs and dry runs.
pub fn display_command<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> String {
    let mut parts: Vec<OsString> = vec![program.as_os_str().to_os_string()];
    parts.extend(args.iter().map(|a| a.as_ref().to_os_string()));
    parts
        .iter()
        .map(|p| {
            let s = p.to_string_lossy();
            if s.is_empty() || s.contains(char::is_whitespace) {
                format!("'{}'", s)
            } else {
                s.into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
