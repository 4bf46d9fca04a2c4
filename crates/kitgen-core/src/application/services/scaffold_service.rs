//! Scaffold Service - main application orchestrator.
//!
//! This service runs the whole workflow for one [`ScaffoldRequest`]:
//! 1. Refuse an existing destination (hard failure, nothing written)
//! 2. Materialise the template tree
//! 3. Rewrite `package.json` and `README.md`
//! 4. Install dependencies (primary, then one fallback)
//! 5. Initialise git with a single commit
//!
//! Steps 2-5 report soft failures as [`ScaffoldWarning`]s on the returned
//! [`ScaffoldReport`]; the run always carries on to the next step.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem, NoopObserver, ScaffoldObserver, ScaffoldStep},
        services::{
            dependency_installer::{DependencyInstaller, PackageManagers},
            repository_initializer::RepositoryInitializer,
        },
    },
    domain::{
        ScaffoldReport, ScaffoldRequest, ScaffoldWarning,
        substitution::{MANIFEST_FILE, README_FILE, render_readme, rewrite_manifest},
    },
    error::KitResult,
};

/// Knobs the caller resolves from its own configuration.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Directory holding one sub-directory per template kind.
    pub templates_root: PathBuf,
    /// `None` skips dependency installation.
    pub install: Option<PackageManagers>,
    /// `None` skips git initialisation; otherwise the commit message.
    pub commit_message: Option<String>,
}

impl ScaffoldOptions {
    pub fn new(templates_root: impl Into<PathBuf>) -> Self {
        Self {
            templates_root: templates_root.into(),
            install: Some(PackageManagers::default()),
            commit_message: Some(
                crate::application::services::repository_initializer::DEFAULT_COMMIT_MESSAGE
                    .into(),
            ),
        }
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    observer: Box<dyn ScaffoldObserver>,
    templates_root: PathBuf,
    installer: Option<DependencyInstaller>,
    repository: Option<RepositoryInitializer>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        options: ScaffoldOptions,
    ) -> Self {
        Self {
            filesystem,
            runner,
            observer: Box::new(NoopObserver),
            templates_root: options.templates_root,
            installer: options.install.map(DependencyInstaller::new),
            repository: options.commit_message.map(RepositoryInitializer::new),
        }
    }

    /// Attach a progress observer.
    pub fn with_observer(mut self, observer: Box<dyn ScaffoldObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Generate the project for `request` under `base_dir`.
    ///
    /// Returns `Err` only for hard failures: the destination already exists,
    /// or a filesystem operation failed outright.
    #[instrument(
        skip_all,
        fields(
            project = %request.project_name(),
            kind = %request.template_kind(),
            base_dir = %base_dir.display()
        )
    )]
    pub fn scaffold(&self, request: ScaffoldRequest, base_dir: &Path) -> KitResult<ScaffoldReport> {
        let project_path = request.project_path(base_dir);

        // 1. Precondition
        if self.filesystem.exists(&project_path) {
            return Err(ApplicationError::DestinationExists { path: project_path }.into());
        }

        let preferred = self
            .installer
            .as_ref()
            .map(|i| i.primary().to_string())
            .unwrap_or_else(|| PackageManagers::default().primary);
        let mut report = ScaffoldReport::new(request, project_path.clone(), preferred);

        // 2. Template tree
        self.observer.step_started(ScaffoldStep::CopyTemplate);
        self.materialize(&mut report)?;
        self.observer.step_finished(ScaffoldStep::CopyTemplate);

        // 3. Tokens
        self.observer.step_started(ScaffoldStep::Substitute);
        self.substitute(&mut report)?;
        self.observer.step_finished(ScaffoldStep::Substitute);

        // 4. Dependencies
        if let Some(installer) = &self.installer {
            self.observer.step_started(ScaffoldStep::Install);
            match installer.install(self.runner.as_ref(), &project_path) {
                Ok(manager) => report.installed_with = Some(manager),
                Err(warning) => self.soft_fail(&mut report, warning),
            }
            self.observer.step_finished(ScaffoldStep::Install);
        } else {
            debug!("Dependency installation disabled");
        }

        // 5. Version control
        if let Some(repository) = &self.repository {
            self.observer.step_started(ScaffoldStep::InitRepository);
            match repository.initialize(self.runner.as_ref(), &project_path) {
                Ok(()) => report.committed = true,
                Err(warning) => self.soft_fail(&mut report, warning),
            }
            self.observer.step_finished(ScaffoldStep::InitRepository);
        } else {
            debug!("Git initialisation disabled");
        }

        info!(
            files = report.files_copied,
            warnings = report.warnings.len(),
            "Scaffold completed"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Create the project directory and copy the template into it.
    fn materialize(&self, report: &mut ScaffoldReport) -> KitResult<()> {
        let template_path = report.request.template_path(&self.templates_root);

        self.filesystem.create_dir(&report.project_path)?;

        if !self.filesystem.is_dir(&template_path) {
            let warning = ScaffoldWarning::TemplateMissing {
                kind: report.request.template_kind(),
                path: template_path,
            };
            self.soft_fail(report, warning);
            return Ok(());
        }

        report.files_copied = self
            .filesystem
            .copy_tree(&template_path, &report.project_path)?;
        info!(
            files = report.files_copied,
            template = %template_path.display(),
            "Template copied"
        );
        Ok(())
    }

    /// Rewrite the manifest and README at the project root, if present.
    ///
    /// A file that cannot be read or parsed is left exactly as copied.
    fn substitute(&self, report: &mut ScaffoldReport) -> KitResult<()> {
        let manifest_path = report.project_path.join(MANIFEST_FILE);
        let manifest = match self.filesystem.read_to_string(&manifest_path) {
            Ok(content) => content
                .map(|c| rewrite_manifest(&c, &report.request).map_err(|e| e.to_string())),
            Err(e) => Some(Err(e.to_string())),
        };
        match manifest {
            Some(Ok(rewritten)) => {
                self.filesystem.write_file(&manifest_path, &rewritten)?;
                debug!(path = %manifest_path.display(), "Manifest updated");
            }
            Some(Err(reason)) => {
                let warning = ScaffoldWarning::ManifestNotRewritten {
                    path: manifest_path,
                    reason,
                };
                self.soft_fail(report, warning);
            }
            None => {}
        }

        let readme_path = report.project_path.join(README_FILE);
        match self.filesystem.read_to_string(&readme_path) {
            Ok(Some(content)) => {
                let rendered = render_readme(&content, &report.request);
                if rendered != content {
                    self.filesystem.write_file(&readme_path, &rendered)?;
                    debug!(path = %readme_path.display(), "README updated");
                }
            }
            Ok(None) => {}
            Err(e) => {
                let warning = ScaffoldWarning::ReadmeNotRendered {
                    path: readme_path,
                    reason: e.to_string(),
                };
                self.soft_fail(report, warning);
            }
        }

        Ok(())
    }

    fn soft_fail(&self, report: &mut ScaffoldReport, warning: ScaffoldWarning) {
        warn!(%warning, remedy = %warning.remedy(), "Continuing after soft failure");
        self.observer.warned(&warning);
        report.warn(warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{MockCommandRunner, MockFilesystem};
    use crate::domain::{DatabaseChoice, ProjectName, TemplateKind};
    use crate::error::KitError;
    use mockall::predicate::*;
    use std::sync::{Arc, Mutex};

    fn request(kind: TemplateKind) -> ScaffoldRequest {
        ScaffoldRequest::new(
            ProjectName::parse("helper-app").unwrap(),
            "Test",
            kind,
            DatabaseChoice::Supabase,
            true,
        )
    }

    fn offline() -> ScaffoldOptions {
        ScaffoldOptions {
            templates_root: PathBuf::from("/templates"),
            install: None,
            commit_message: None,
        }
    }

    fn quiet_runner() -> MockCommandRunner {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(|_, _| Ok(()));
        runner
    }

    #[test]
    fn existing_destination_fails_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(PathBuf::from("/work/helper-app")))
            .return_const(true);
        fs.expect_create_dir().never();
        fs.expect_copy_tree().never();
        fs.expect_write_file().never();

        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let service = ScaffoldService::new(
            Box::new(fs),
            Box::new(runner),
            ScaffoldOptions::new("/templates"),
        );
        let err = service
            .scaffold(request(TemplateKind::BasicCrud), Path::new("/work"))
            .unwrap_err();

        assert!(matches!(
            err,
            KitError::Application(ApplicationError::DestinationExists { .. })
        ));
    }

    #[test]
    fn missing_template_is_a_soft_failure() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir()
            .with(eq(PathBuf::from("/work/helper-app")))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_is_dir()
            .with(eq(PathBuf::from("/templates/custom")))
            .return_const(false);
        fs.expect_copy_tree().never();
        fs.expect_read_to_string().returning(|_| Ok(None));

        let service = ScaffoldService::new(Box::new(fs), Box::new(quiet_runner()), offline());
        let report = service
            .scaffold(request(TemplateKind::Custom), Path::new("/work"))
            .unwrap();

        assert_eq!(report.files_copied, 0);
        assert!(matches!(
            report.warnings.as_slice(),
            [ScaffoldWarning::TemplateMissing {
                kind: TemplateKind::Custom,
                ..
            }]
        ));
    }

    #[test]
    fn manifest_and_readme_are_rewritten() {
        let written: Arc<Mutex<Vec<(PathBuf, String)>>> = Arc::default();
        let sink = Arc::clone(&written);

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_is_dir().return_const(true);
        fs.expect_copy_tree().times(1).returning(|_, _| Ok(3));
        fs.expect_read_to_string().returning(|path| {
            Ok(match path.file_name().and_then(|n| n.to_str()) {
                Some("package.json") => Some(r#"{"name":"template","description":""}"#.into()),
                Some("README.md") => Some("# {{PROJECT_NAME}}\n{{PROJECT_NAME}}\n".into()),
                _ => None,
            })
        });
        fs.expect_write_file().returning(move |path, content| {
            sink.lock()
                .unwrap()
                .push((path.to_path_buf(), content.to_string()));
            Ok(())
        });

        let service = ScaffoldService::new(Box::new(fs), Box::new(quiet_runner()), offline());
        let report = service
            .scaffold(request(TemplateKind::BasicCrud), Path::new("/work"))
            .unwrap();

        assert_eq!(report.files_copied, 3);
        assert!(report.warnings.is_empty());

        let written = written.lock().unwrap();
        let manifest = &written
            .iter()
            .find(|(p, _)| p.ends_with("package.json"))
            .unwrap()
            .1;
        let value: serde_json::Value = serde_json::from_str(manifest).unwrap();
        assert_eq!(value["name"], "helper-app");
        assert_eq!(value["description"], "Test");

        let readme = &written
            .iter()
            .find(|(p, _)| p.ends_with("README.md"))
            .unwrap()
            .1;
        assert_eq!(readme, "# helper-app\nhelper-app\n");
    }

    #[test]
    fn malformed_manifest_is_reported_not_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_is_dir().return_const(true);
        fs.expect_copy_tree().returning(|_, _| Ok(1));
        fs.expect_read_to_string().returning(|path| {
            Ok(path
                .ends_with("package.json")
                .then(|| "not json".to_string()))
        });
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(fs), Box::new(quiet_runner()), offline());
        let report = service
            .scaffold(request(TemplateKind::BasicCrud), Path::new("/work"))
            .unwrap();

        assert!(matches!(
            report.warnings.as_slice(),
            [ScaffoldWarning::ManifestNotRewritten { .. }]
        ));
    }

    #[test]
    fn unreadable_readme_is_reported_not_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_is_dir().return_const(true);
        fs.expect_copy_tree().returning(|_, _| Ok(2));
        fs.expect_read_to_string().returning(|path| {
            if path.ends_with("README.md") {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "stream did not contain valid UTF-8".into(),
                }
                .into())
            } else {
                Ok(Some(r#"{"name":"template"}"#.into()))
            }
        });
        fs.expect_write_file()
            .with(eq(PathBuf::from("/work/helper-app/package.json")), always())
            .times(1)
            .returning(|_, _| Ok(()));

        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(4).returning(|_, _| Ok(()));

        let service = ScaffoldService::new(
            Box::new(fs),
            Box::new(runner),
            ScaffoldOptions::new("/templates"),
        );
        let report = service
            .scaffold(request(TemplateKind::BasicCrud), Path::new("/work"))
            .unwrap();

        assert!(report.committed);
        assert!(matches!(
            report.warnings.as_slice(),
            [ScaffoldWarning::ReadmeNotRendered { .. }]
        ));
    }

    #[test]
    fn unreadable_manifest_is_left_alone() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_is_dir().return_const(true);
        fs.expect_copy_tree().returning(|_, _| Ok(1));
        fs.expect_read_to_string().returning(|path| {
            if path.ends_with("package.json") {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "permission denied".into(),
                }
                .into())
            } else {
                Ok(None)
            }
        });
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(fs), Box::new(quiet_runner()), offline());
        let report = service
            .scaffold(request(TemplateKind::BasicCrud), Path::new("/work"))
            .unwrap();

        assert!(matches!(
            report.warnings.as_slice(),
            [ScaffoldWarning::ManifestNotRewritten { .. }]
        ));
    }

    #[test]
    fn destination_created_concurrently_is_still_refused() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir().times(1).returning(|path| {
            Err(ApplicationError::DestinationExists {
                path: path.to_path_buf(),
            }
            .into())
        });
        fs.expect_copy_tree().never();
        fs.expect_write_file().never();

        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let service = ScaffoldService::new(
            Box::new(fs),
            Box::new(runner),
            ScaffoldOptions::new("/templates"),
        );
        let err = service
            .scaffold(request(TemplateKind::BasicCrud), Path::new("/work"))
            .unwrap_err();

        assert!(matches!(
            err,
            KitError::Application(ApplicationError::DestinationExists { .. })
        ));
    }

    #[test]
    fn failing_install_and_git_still_succeed() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_is_dir().return_const(true);
        fs.expect_copy_tree().returning(|_, _| Ok(2));
        fs.expect_read_to_string().returning(|_| Ok(None));

        let mut runner = MockCommandRunner::new();
        // npm, yarn, then git init
        runner.expect_run().times(3).returning(|cmd, _| {
            Err(ApplicationError::CommandSpawn {
                command: cmd.to_string(),
                reason: "not installed".into(),
            }
            .into())
        });

        let service = ScaffoldService::new(
            Box::new(fs),
            Box::new(runner),
            ScaffoldOptions::new("/templates"),
        );
        let report = service
            .scaffold(request(TemplateKind::Dashboard), Path::new("/work"))
            .unwrap();

        assert_eq!(report.installed_with, None);
        assert!(!report.committed);
        assert_eq!(report.warnings.len(), 2);
        assert!(matches!(report.warnings[0], ScaffoldWarning::InstallFailed { .. }));
        assert!(matches!(report.warnings[1], ScaffoldWarning::GitFailed { .. }));
    }

    #[test]
    fn successful_run_records_manager_and_commit() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_is_dir().return_const(true);
        fs.expect_copy_tree().returning(|_, _| Ok(5));
        fs.expect_read_to_string().returning(|_| Ok(None));

        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(4).returning(|_, _| Ok(()));

        let service = ScaffoldService::new(
            Box::new(fs),
            Box::new(runner),
            ScaffoldOptions::new("/templates"),
        );
        let report = service
            .scaffold(request(TemplateKind::Plugin), Path::new("/work"))
            .unwrap();

        assert_eq!(report.installed_with.as_deref(), Some("npm"));
        assert!(report.committed);
        assert!(!report.has_warnings());
        assert_eq!(report.project_path, PathBuf::from("/work/helper-app"));
    }

    #[test]
    fn observer_sees_every_step_and_warning() {
        #[derive(Default)]
        struct Recorder(Mutex<Vec<String>>);

        impl ScaffoldObserver for Arc<Recorder> {
            fn step_started(&self, step: ScaffoldStep) {
                self.0.lock().unwrap().push(format!("start {step:?}"));
            }
            fn warned(&self, _warning: &ScaffoldWarning) {
                self.0.lock().unwrap().push("warn".into());
            }
        }

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_is_dir().return_const(false);
        fs.expect_read_to_string().returning(|_| Ok(None));

        let recorder = Arc::new(Recorder::default());
        let service = ScaffoldService::new(Box::new(fs), Box::new(quiet_runner()), offline())
            .with_observer(Box::new(Arc::clone(&recorder)));
        service
            .scaffold(request(TemplateKind::Custom), Path::new("/work"))
            .unwrap();

        assert_eq!(
            *recorder.0.lock().unwrap(),
            vec!["start CopyTemplate", "warn", "start Substitute"]
        );
    }
}
