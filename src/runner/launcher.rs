//! Application launch and exit status forwarding.
//!
//! The application runs under the verified interpreter with the caller's
//! environment, working directory and standard streams untouched. Its exit
//! status becomes appboot's, either by waiting on the child or by replacing
//! the appboot process image outright.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};

use crate::config::LaunchMode;
use crate::environment::Interpreter;
use crate::error::{AppbootError, Result};
use crate::shell::{build_command, display_command, exit_code, spawn_exit_code, CommandOptions};

/// A fully resolved application launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Program to run (the verified interpreter).
    pub program: PathBuf,
    /// Entry point as configured, passed as the first argument.
    pub entry_point: PathBuf,
    /// Arguments forwarded from the caller, after the entry point.
    pub app_args: Vec<OsString>,
    /// Working directory for the application.
    pub cwd: PathBuf,
    /// How control is handed over.
    pub mode: LaunchMode,
}

impl LaunchPlan {
    /// Build the launch of `entry_point` under `interpreter`.
    pub fn new(
        interpreter: &Interpreter,
        entry_point: &Path,
        project_root: &Path,
        app_args: &[OsString],
        mode: LaunchMode,
    ) -> Self {
        Self {
            program: interpreter.path.clone(),
            entry_point: entry_point.to_path_buf(),
            app_args: app_args.to_vec(),
            cwd: project_root.to_path_buf(),
            mode,
        }
    }

    /// Arguments given to the interpreter: entry point, then caller args.
    pub fn args(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(self.app_args.len() + 1);
        args.push(self.entry_point.clone().into_os_string());
        args.extend(self.app_args.iter().cloned());
        args
    }

    /// Whether the entry point file exists before launch.
    pub fn entry_point_exists(&self) -> bool {
        self.cwd.join(&self.entry_point).is_file()
    }

    /// Command line as it would be typed.
    pub fn display(&self) -> String {
        display_command(&self.program, &self.args())
    }

    fn command(&self) -> Command {
        build_command(&self.program, &self.args(), &CommandOptions::inherited(&self.cwd))
    }

    fn spawn_failure(&self, err: &std::io::Error) -> AppbootError {
        AppbootError::LaunchFailure {
            path: self.program.clone(),
            message: err.to_string(),
            code: spawn_exit_code(err),
            spawned: false,
        }
    }
}

/// Start the application as a child process.
pub fn spawn(plan: &LaunchPlan) -> Result<Child> {
    tracing::debug!(command = %plan.display(), "launching application");
    plan.command().spawn().map_err(|e| plan.spawn_failure(&e))
}

/// Wait for the application and return its exit code.
///
/// A non-zero exit when the entry point was missing at launch is a
/// [`AppbootError::LaunchFailure`]: the interpreter refused to start it
/// and has already said why. Any other exit code is the application's own
/// and is returned as-is.
pub fn wait(plan: &LaunchPlan, mut child: Child, entry_point_existed: bool) -> Result<i32> {
    let status = child.wait()?;
    let code = exit_code(status);
    tracing::debug!(code, pid = child.id(), "application exited");

    if code != 0 && !entry_point_existed {
        return Err(AppbootError::LaunchFailure {
            path: plan.entry_point.clone(),
            message: "entry point not found".to_string(),
            code,
            spawned: true,
        });
    }

    Ok(code)
}

/// Replace the current process with the application.
///
/// Only returns if the replacement failed.
#[cfg(unix)]
pub fn exec(plan: &LaunchPlan) -> AppbootError {
    use std::io::Write;
    use std::os::unix::process::CommandExt;

    tracing::debug!(command = %plan.display(), "replacing process image");
    std::io::stdout().flush().ok();
    std::io::stderr().flush().ok();

    let err = plan.command().exec();
    plan.spawn_failure(&err)
}

/// Run the plan to completion using its launch mode.
pub fn launch(plan: &LaunchPlan) -> Result<i32> {
    let existed = plan.entry_point_exists();

    match plan.mode {
        #[cfg(unix)]
        LaunchMode::Exec => Err(exec(plan)),
        #[cfg(not(unix))]
        LaunchMode::Exec => {
            tracing::warn!("exec launch is only supported on Unix, waiting on the child instead");
            wait(plan, spawn(plan)?, existed)
        }
        LaunchMode::Wait => wait(plan, spawn(plan)?, existed),
    }
}
