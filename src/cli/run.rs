//! The bootstrap command.

use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::config::load_config;
use crate::error::Result;
use crate::runner::{Bootstrap, Outcome};
use crate::ui::UserInterface;

/// Load config for the invocation and run the bootstrap.
///
/// Returns the exit status the process should end with.
pub fn run(cli: &Cli, project_root: PathBuf, ui: &mut dyn UserInterface) -> i32 {
    let bootstrap = match prepare(cli, project_root) {
        Ok(bootstrap) => bootstrap,
        Err(e) => {
            ui.error(&format!("appboot: {}", e));
            return e.exit_code();
        }
    };

    finish(bootstrap, ui)
}

fn prepare(cli: &Cli, project_root: PathBuf) -> Result<Bootstrap> {
    let mut config = load_config(&project_root, cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    tracing::debug!(?config, project = %project_root.display(), "resolved config");

    Ok(Bootstrap::new(config, project_root)
        .with_app_args(cli.app_args.clone())
        .with_dry_run(cli.dry_run))
}

fn finish(mut bootstrap: Bootstrap, ui: &mut dyn UserInterface) -> i32 {
    let outcome = bootstrap.run(ui);

    if let Outcome::Failed { stage, error } = &outcome {
        if error.reported_by_tool() {
            tracing::debug!(%stage, %error, "failing with tool status");
        } else {
            ui.error(&format!("appboot: {}", error));
        }
    }

    outcome.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn bad_config_is_reported_with_usage_code() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("appboot.yml"), "interpreter: [1, 2\n").unwrap();
        let cli = Cli::parse_from(["appboot"]);
        let mut ui = MockUI::new();

        let code = run(&cli, temp.path().to_path_buf(), &mut ui);

        assert_eq!(code, 2);
        assert_eq!(ui.errors().len(), 1);
        assert!(ui.errors()[0].contains("appboot.yml"));
    }

    #[test]
    fn missing_interpreter_is_reported_like_a_shell() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("appboot.yml"),
            "interpreter: appboot-test-no-such-interpreter\n",
        )
        .unwrap();
        let cli = Cli::parse_from(["appboot"]);
        let mut ui = MockUI::new();

        let code = run(&cli, temp.path().to_path_buf(), &mut ui);

        assert_eq!(code, 127);
        assert_eq!(
            ui.errors(),
            ["appboot: appboot-test-no-such-interpreter: command not found"]
        );
        assert!(ui.messages().is_empty());
    }
}
