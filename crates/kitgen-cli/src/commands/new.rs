//! Implementation of the `kitgen new` command (also the default command).
//!
//! Responsibility: wire the adapters together, ask the questions, run the
//! scaffold service and display the report. No business logic lives here.

use std::sync::{Arc, Mutex};

use indicatif::ProgressBar;
use tracing::{debug, info, instrument};

use kitgen_adapters::{LocalFilesystem, SystemCommandRunner};
use kitgen_core::{
    application::{
        AnswerCollector, ScaffoldService,
        ports::{ScaffoldObserver, ScaffoldStep},
    },
    domain::{ScaffoldReport, ScaffoldWarning},
};

use crate::{
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::{OutputManager, Style},
    prompt,
};

/// Execute the `kitgen new` command.
///
/// 1. Collect the five answers
/// 2. Resolve scaffold options from config
/// 3. Scaffold into the current directory
/// 4. Print the summary and next steps
#[instrument(skip_all)]
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let base_dir = std::env::current_dir()
        .with_cli_context(|| "Could not determine the current directory")?;

    output.header("Create a new project")?;
    let request = AnswerCollector::new(prompt::build(!output.supports_color())).collect()?;

    let options = config.scaffold_options();
    debug!(
        templates_root = %options.templates_root.display(),
        install = options.install.is_some(),
        git = options.commit_message.is_some(),
        "Scaffold options resolved"
    );

    let output = Arc::new(output);
    let runner = SystemCommandRunner::new().silent(output.is_quiet());
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), Box::new(runner), options)
        .with_observer(Box::new(ProgressObserver::new(Arc::clone(&output))));

    output.print("")?;
    info!(%request, path = %base_dir.display(), "Scaffold started");
    let report = service.scaffold(request, &base_dir)?;

    print_report(&output, &report)?;
    Ok(())
}

// ── Progress ──────────────────────────────────────────────────────────────────

/// Spinner while files are copied and rewritten; a plain line before the
/// steps that stream subprocess output.
struct ProgressObserver {
    output: Arc<OutputManager>,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressObserver {
    fn new(output: Arc<OutputManager>) -> Self {
        Self {
            output,
            spinner: Mutex::new(None),
        }
    }

    fn spinner(&self) -> std::sync::MutexGuard<'_, Option<ProgressBar>> {
        self.spinner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ScaffoldObserver for ProgressObserver {
    fn step_started(&self, step: ScaffoldStep) {
        match step {
            ScaffoldStep::CopyTemplate | ScaffoldStep::Substitute => {
                *self.spinner() = Some(self.output.spinner(step.label()));
            }
            ScaffoldStep::Install | ScaffoldStep::InitRepository => {
                let _ = self.output.info(&format!("{step}..."));
            }
        }
    }

    fn step_finished(&self, step: ScaffoldStep) {
        if let Some(bar) = self.spinner().take() {
            bar.finish_and_clear();
            let _ = self.output.success(step.label());
        }
    }

    fn warned(&self, warning: &ScaffoldWarning) {
        let spinner = self.spinner();
        let show = || {
            let _ = self.output.warning(&warning.to_string());
        };
        match spinner.as_ref() {
            Some(bar) => bar.suspend(show),
            None => show(),
        }
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

fn print_report(output: &OutputManager, report: &ScaffoldReport) -> CliResult<()> {
    let name = report.request.project_name();

    output.print("")?;
    output.success(&format!(
        "Project '{name}' created at {}",
        report.project_path.display()
    ))?;
    output.print(&format!(
        "  {}",
        output.paint(&summary_line(report), Style::Dim)
    ))?;

    if report.has_warnings() {
        output.print("")?;
        output.header("Finished with warnings:")?;
        for warning in &report.warnings {
            output.warning(&warning.to_string())?;
            output.print(&format!("    {}", warning.remedy()))?;
        }
    }

    output.print("")?;
    output.header("Next steps:")?;
    for step in report.next_steps() {
        output.print(&format!("  {step}"))?;
    }

    info!(
        project = %name,
        warnings = report.warnings.len(),
        "Scaffold reported"
    );
    Ok(())
}

fn summary_line(report: &ScaffoldReport) -> String {
    let request = &report.request;
    let installed = match &report.installed_with {
        Some(manager) => format!("installed with {manager}"),
        None => "dependencies not installed".into(),
    };
    let git = if report.committed {
        "git initialised"
    } else {
        "no git commit"
    };
    format!(
        "{} template, database: {}, auth: {}, {} files, {installed}, {git}",
        request.template_kind(),
        request.database(),
        if request.auth_enabled() { "on" } else { "off" },
        report.files_copied,
    )
}

// ── tests ─────────────────────────────────────────────────────────────────────
