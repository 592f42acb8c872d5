//! The verify → install → launch sequence.

use std::ffi::OsString;
use std::path::PathBuf;

use super::launcher::{self, LaunchPlan};
use super::{Outcome, Stage};
use crate::config::{AppbootConfig, LaunchMode};
use crate::environment::{verify_interpreter, Interpreter, SearchPath};
use crate::error::{AppbootError, Result};
use crate::requirements::{install, InstallPlan, Manifest};
use crate::ui::UserInterface;

/// One bootstrap run.
///
/// Each gate must succeed before the next starts; the first failure ends
/// the run with [`Outcome::Failed`] naming the stage it happened in.
#[derive(Debug)]
pub struct Bootstrap {
    config: AppbootConfig,
    project_root: PathBuf,
    search_path: SearchPath,
    app_args: Vec<OsString>,
    dry_run: bool,
    stages: Vec<Stage>,
}

impl Bootstrap {
    /// Create a run for `project_root` using the inherited search path.
    pub fn new(config: AppbootConfig, project_root: PathBuf) -> Self {
        Self {
            config,
            project_root,
            search_path: SearchPath::from_env(),
            app_args: Vec::new(),
            dry_run: false,
            stages: vec![Stage::Start],
        }
    }

    /// Resolve the interpreter against `search_path` instead of `PATH`.
    pub fn with_search_path(mut self, search_path: SearchPath) -> Self {
        self.search_path = search_path;
        self
    }

    /// Arguments forwarded to the application.
    pub fn with_app_args(mut self, app_args: Vec<OsString>) -> Self {
        self.app_args = app_args;
        self
    }

    /// Verify only, and print what would be installed and launched.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Current stage.
    pub fn stage(&self) -> Stage {
        self.stages.last().copied().unwrap_or(Stage::Start)
    }

    /// Every stage entered so far, in order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Run the sequence.
    ///
    /// In [`LaunchMode::Exec`] a successful launch never returns.
    pub fn run(&mut self, ui: &mut dyn UserInterface) -> Outcome {
        match self.run_gates(ui) {
            Ok(outcome) => outcome,
            Err(error) => {
                // A child that could not start its entry point failed the launch gate.
                let stage = match (&error, self.stage()) {
                    (AppbootError::LaunchFailure { .. }, Stage::Running) => Stage::Launching,
                    (_, stage) => stage,
                };
                tracing::debug!(stage = %stage, error = %error, "bootstrap failed");
                self.enter(Stage::Failed);
                Outcome::Failed { stage, error }
            }
        }
    }

    fn run_gates(&mut self, ui: &mut dyn UserInterface) -> Result<Outcome> {
        self.enter(Stage::Verifying);
        let interpreter = verify_interpreter(
            &self.config.interpreter,
            &self.config.version_args,
            &self.search_path,
            &self.project_root,
        )?;
        interpreter.report(ui);

        let install_plan = self.install_plan(&interpreter);
        let launch_plan = self.launch_plan(&interpreter);

        if self.dry_run {
            match &install_plan {
                Some(plan) => ui.hint(&format!("Would install: {}", plan.display())),
                None => ui.hint("Would skip dependency installation"),
            }
            ui.hint(&format!("Would launch: {}", launch_plan.display()));
            return Ok(Outcome::DryRun);
        }

        match install_plan {
            Some(plan) => {
                self.enter(Stage::Installing);
                install(&plan, &self.project_root)?;
            }
            None => tracing::info!("skipping dependency installation"),
        }

        self.enter(Stage::Launching);
        let existed = launch_plan.entry_point_exists();

        if launch_plan.mode == LaunchMode::Exec && cfg!(unix) {
            return launcher::launch(&launch_plan).map(|code| Outcome::Exited { code });
        }

        let child = launcher::spawn(&launch_plan)?;
        self.enter(Stage::Running);
        let code = launcher::wait(&launch_plan, child, existed)?;
        Ok(Outcome::Exited { code })
    }

    fn install_plan(&self, interpreter: &Interpreter) -> Option<InstallPlan> {
        if self.config.skip_install {
            return None;
        }
        let manifest = Manifest::new(&self.project_root, &self.config.manifest);
        Some(InstallPlan::new(
            interpreter,
            &self.config.install_args,
            manifest,
        ))
    }

    fn launch_plan(&self, interpreter: &Interpreter) -> LaunchPlan {
        LaunchPlan::new(
            interpreter,
            &self.config.entry_point,
            &self.project_root,
            &self.app_args,
            self.config.launch_mode,
        )
    }

    fn enter(&mut self, stage: Stage) {
        tracing::debug!(from = %self.stage(), to = %stage, "stage transition");
        self.stages.push(stage);
    }
}
