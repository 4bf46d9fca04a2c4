//! Answer Collector - gathers the five answers that make up a
//! [`ScaffoldRequest`].
//!
//! Questions are asked strictly one at a time in a fixed order:
//! name → description → type → database → auth. Choice answers that cannot be
//! used select the documented default; there is no retry loop.

use tracing::{debug, instrument};

use crate::{
    application::ports::Prompter,
    domain::{
        DatabaseChoice, ProjectName, ScaffoldRequest, TemplateKind,
        choice::{self, menu},
    },
    error::KitResult,
};

/// Authentication is on unless the user says otherwise.
pub const AUTH_DEFAULT: bool = true;

/// Collects a [`ScaffoldRequest`] through a [`Prompter`].
pub struct AnswerCollector {
    prompter: Box<dyn Prompter>,
}

impl AnswerCollector {
    pub fn new(prompter: Box<dyn Prompter>) -> Self {
        Self { prompter }
    }

    /// Ask every question and build the request.
    ///
    /// Fails only if the prompter itself fails or the project name would
    /// escape the working directory.
    #[instrument(skip_all)]
    pub fn collect(&self) -> KitResult<ScaffoldRequest> {
        let raw_name = self
            .prompter
            .ask(&format!("Project name [{}]", ProjectName::DEFAULT))?;
        let project_name = ProjectName::parse_or_default(&raw_name)?;

        let description = self.prompter.ask("Description (optional)")?;

        let template_kind = self.ask_choice(
            "Project type",
            &TemplateKind::ALL,
            TemplateKind::DEFAULT,
            |k| k.description().to_string(),
        )?;

        let database = self.ask_choice(
            "Database",
            &DatabaseChoice::ALL,
            DatabaseChoice::DEFAULT,
            |d| d.description().to_string(),
        )?;

        let auth_answer = self.prompter.ask("Enable authentication? [Y/n]")?;
        let auth_enabled = choice::yes_no(&auth_answer, AUTH_DEFAULT);

        let request = ScaffoldRequest::new(
            project_name,
            description,
            template_kind,
            database,
            auth_enabled,
        );
        debug!(%request, "Answers collected");
        Ok(request)
    }

    fn ask_choice<T: Copy + PartialEq>(
        &self,
        title: &str,
        options: &[T],
        default: T,
        label: impl Fn(&T) -> String,
    ) -> KitResult<T> {
        let mut lines = vec![format!("{title}:")];
        lines.extend(menu(options, default, label));
        self.prompter.note(&lines)?;

        let answer = self
            .prompter
            .ask(&format!("Choose 1-{} [1]", options.len()))?;
        Ok(choice::pick(&answer, options, default))
    }
}
