//! Dependency installation.
//!
//! Runs the package manager through the verified interpreter with the
//! manifest path substituted into the configured arguments. Package
//! manager output goes straight to the caller's terminal. Convergence on
//! re-runs is the package manager's job; the installer keeps no state.

use std::path::{Path, PathBuf};

use super::manifest::Manifest;
use crate::config::MANIFEST_PLACEHOLDER;
use crate::environment::Interpreter;
use crate::error::{AppbootError, Result};
use crate::shell::{display_command, execute, spawn_exit_code, CommandOptions};

/// A fully resolved package manager invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    /// Program to run (the verified interpreter).
    pub program: PathBuf,
    /// Arguments with the manifest placeholder substituted.
    pub args: Vec<String>,
    /// Manifest being installed.
    pub manifest: Manifest,
}

impl InstallPlan {
    /// Build the invocation for `interpreter` installing `manifest`.
    pub fn new(interpreter: &Interpreter, install_args: &[String], manifest: Manifest) -> Self {
        let manifest_arg = manifest.path().to_string_lossy();
        let args = install_args
            .iter()
            .map(|arg| arg.replace(MANIFEST_PLACEHOLDER, &manifest_arg))
            .collect();

        Self {
            program: interpreter.path.clone(),
            args,
            manifest,
        }
    }

    /// Command line as it would be typed.
    pub fn display(&self) -> String {
        display_command(&self.program, &self.args)
    }
}

/// Run the install plan with inherited streams from `project_root`.
///
/// Any non-zero status aborts: [`AppbootError::ManifestUnavailable`] when
/// the manifest cannot be read, [`AppbootError::InstallFailed`] otherwise.
/// The package manager's own exit code is carried in either case.
pub fn install(plan: &InstallPlan, project_root: &Path) -> Result<()> {
    tracing::debug!(command = %plan.display(), "installing dependencies");

    let result = execute(
        &plan.program,
        &plan.args,
        &CommandOptions::inherited(project_root),
    )
    .map_err(|e| {
        tracing::debug!(error = %e, "package manager could not be spawned");
        AppbootError::InstallFailed {
            code: spawn_exit_code(&e),
            spawned: false,
        }
    })?;

    if result.success {
        tracing::debug!(duration_ms = result.duration.as_millis() as u64, "dependencies installed");
        return Ok(());
    }

    if !plan.manifest.is_readable() {
        return Err(AppbootError::ManifestUnavailable {
            path: plan.manifest.path().to_path_buf(),
            code: result.exit_code,
        });
    }

    Err(AppbootError::InstallFailed {
        code: result.exit_code,
        spawned: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppbootConfig;

    fn interpreter(path: &str) -> Interpreter {
        Interpreter {
            path: PathBuf::from(path),
            version: "Python 3.12.1".into(),
        }
    }

    #[test]
    fn plan_substitutes_manifest_path() {
        let config = AppbootConfig::default();
        let manifest = Manifest::new(Path::new("/srv/app"), &config.manifest);

        let plan = InstallPlan::new(&interpreter("/usr/bin/python3"), &config.install_args, manifest);

        assert_eq!(plan.program, PathBuf::from("/usr/bin/python3"));
        assert_eq!(
            plan.args,
            ["-m", "pip", "install", "-r", "/srv/app/requirements.txt"]
        );
        assert_eq!(
            plan.display(),
            "/usr/bin/python3 -m pip install -r /srv/app/requirements.txt"
        );
    }

    #[test]
    fn placeholder_inside_argument_is_replaced() {
        let manifest = Manifest::new(Path::new("/srv/app"), Path::new("deps.txt"));
        let args = vec!["--requirement={manifest}".to_string()];

        let plan = InstallPlan::new(&interpreter("/usr/bin/python3"), &args, manifest);

        assert_eq!(plan.args, ["--requirement=/srv/app/deps.txt"]);
    }

    #[test]
    fn unspawnable_package_manager_is_install_failure() {
        let temp = tempfile::TempDir::new().unwrap();
        let manifest = Manifest::new(temp.path(), Path::new("requirements.txt"));
        let plan = InstallPlan::new(
            &interpreter("/definitely/not/a/python"),
            &AppbootConfig::default().install_args,
            manifest,
        );

        let err = install(&plan, temp.path()).unwrap_err();

        assert!(matches!(
            err,
            AppbootError::InstallFailed {
                code: 127,
                spawned: false
            }
        ));
        assert!(!err.reported_by_tool());
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::fs;
        use tempfile::TempDir;

        fn sh_plan(root: &Path, script: &str) -> InstallPlan {
            let manifest = Manifest::new(root, Path::new("requirements.txt"));
            InstallPlan::new(
                &interpreter("/bin/sh"),
                &["-c".to_string(), script.to_string()],
                manifest,
            )
        }

        #[test]
        fn successful_install_is_ok() {
            let temp = TempDir::new().unwrap();
            fs::write(temp.path().join("requirements.txt"), "flask\n").unwrap();

            assert!(install(&sh_plan(temp.path(), "exit 0"), temp.path()).is_ok());
        }

        #[test]
        fn missing_manifest_is_manifest_unavailable() {
            let temp = TempDir::new().unwrap();

            let err = install(&sh_plan(temp.path(), "exit 1"), temp.path()).unwrap_err();

            match err {
                AppbootError::ManifestUnavailable { path, code } => {
                    assert_eq!(path, temp.path().join("requirements.txt"));
                    assert_eq!(code, 1);
                }
                other => panic!("expected ManifestUnavailable, got {other:?}"),
            }
        }

        #[test]
        fn unreadable_manifest_is_manifest_unavailable() {
            use std::os::unix::fs::PermissionsExt;

            let temp = TempDir::new().unwrap();
            let path = temp.path().join("requirements.txt");
            fs::write(&path, "flask\n").unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();
            if fs::File::open(&path).is_ok() {
                // Running as root: permission bits do not block reads.
                return;
            }

            let err = install(&sh_plan(temp.path(), "exit 1"), temp.path()).unwrap_err();

            assert!(matches!(
                err,
                AppbootError::ManifestUnavailable { code: 1, .. }
            ));
        }

        #[test]
        fn readable_manifest_failure_is_install_failed() {
            let temp = TempDir::new().unwrap();
            fs::write(temp.path().join("requirements.txt"), "flask==999\n").unwrap();

            let err = install(&sh_plan(temp.path(), "exit 4"), temp.path()).unwrap_err();

            assert!(matches!(
                err,
                AppbootError::InstallFailed {
                    code: 4,
                    spawned: true
                }
            ));
            assert_eq!(err.exit_code(), 4);
        }

        #[test]
        fn runs_in_project_root() {
            let temp = TempDir::new().unwrap();
            fs::write(temp.path().join("requirements.txt"), "").unwrap();

            // Succeeds only when the relative path resolves from the project root.
            let plan = sh_plan(temp.path(), "test -f requirements.txt");

            assert!(install(&plan, temp.path()).is_ok());
        }

        #[test]
        fn repeated_install_converges() {
            let temp = TempDir::new().unwrap();
            fs::write(temp.path().join("requirements.txt"), "flask\n").unwrap();
            // Marks the package installed on first run, no-op afterwards.
            let plan = sh_plan(
                temp.path(),
                "if [ -f installed ]; then exit 0; fi; echo flask > installed",
            );

            install(&plan, temp.path()).unwrap();
            let first = fs::read_to_string(temp.path().join("installed")).unwrap();
            install(&plan, temp.path()).unwrap();
            let second = fs::read_to_string(temp.path().join("installed")).unwrap();

            assert_eq!(first, second);
        }
    }
}
