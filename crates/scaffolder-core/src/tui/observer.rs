//! Spinner-based progress reporting for the materializer

use crate::materializer::{ProjectContext, Step, StepObserver, StepOutcome};
use cliclack::ProgressBar;

/// Reports each step with a cliclack spinner
///
/// The generator shares the terminal with us (it may ask its own questions),
/// so that step gets a plain log line instead of a spinner.
#[derive(Default)]
pub struct CliclackObserver {
    spinner: Option<ProgressBar>,
}

impl CliclackObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn progress_text(step: Step, ctx: &ProjectContext) -> String {
        let framework = ctx.choices.framework;
        match step {
            Step::Scaffold => format!("Creating {} project with latest Vite...", framework),
            Step::Install => "Installing dependencies...".to_string(),
            Step::Styling => "Setting up Tailwind CSS...".to_string(),
            Step::Routing => format!("Setting up {} router...", framework),
            Step::FolderStructure => "Creating folder structure...".to_string(),
            Step::Linting => "Setting up Prettier...".to_string(),
            Step::EnvFiles => "Creating environment files...".to_string(),
            Step::Readme => "Writing README...".to_string(),
            Step::Showcase => "Writing showcase content...".to_string(),
        }
    }
}

impl StepObserver for CliclackObserver {
    fn step_started(&mut self, step: Step, ctx: &ProjectContext) {
        let text = Self::progress_text(step, ctx);

        if step == Step::Scaffold {
            let command = ctx.package_manager.create_vite(
                &ctx.parent_dir,
                ctx.choices.project_name.as_str(),
                ctx.binding.generator_template_id,
            );
            let _ = cliclack::log::step(format!("{}\nRunning: {}", text, command));
            return;
        }

        let spinner = cliclack::spinner();
        spinner.start(text);
        self.spinner = Some(spinner);
    }

    fn step_finished(&mut self, _step: Step, outcome: &StepOutcome) {
        let spinner = self.spinner.take();
        match outcome {
            StepOutcome::Success(message) => match spinner {
                Some(spinner) => spinner.stop(message),
                None => {
                    let _ = cliclack::log::success(message);
                }
            },
            StepOutcome::Warning { message, hint } => {
                match spinner {
                    Some(spinner) => spinner.error(message),
                    None => {
                        let _ = cliclack::log::warning(message);
                    }
                }
                if let Some(hint) = hint {
                    let _ = cliclack::log::warning(hint);
                }
            }
        }
    }

    fn step_failed(&mut self, step: Step, error: &anyhow::Error) {
        let message = format!("{} failed: {:#}", step, error);
        match self.spinner.take() {
            Some(spinner) => spinner.error(message),
            None => {
                let _ = cliclack::log::error(message);
            }
        }
    }
}
