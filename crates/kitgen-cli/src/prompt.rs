//! Choosing how questions reach the user.
//!
//! A terminal gets `dialoguer` inputs (when built with the `interactive`
//! feature). Anything else, such as piped answers, gets one plain line per
//! question from [`LinePrompter`].

use std::io::IsTerminal as _;

use kitgen_adapters::LinePrompter;
use kitgen_core::application::ports::Prompter;
use tracing::debug;

/// Pick a prompter for the current stdin.
pub fn build(no_color: bool) -> Box<dyn Prompter> {
    if std::io::stdin().is_terminal() {
        if let Some(prompter) = terminal(no_color) {
            debug!("Prompting with terminal inputs");
            return prompter;
        }
    }
    debug!("Prompting line by line");
    Box::new(LinePrompter::stdio())
}

#[cfg(feature = "interactive")]
fn terminal(no_color: bool) -> Option<Box<dyn Prompter>> {
    Some(Box::new(interactive::TerminalPrompter::new(no_color)))
}

#[cfg(not(feature = "interactive"))]
fn terminal(_no_color: bool) -> Option<Box<dyn Prompter>> {
    None
}

#[cfg(feature = "interactive")]
mod interactive {
    use console::Term;
    use dialoguer::{
        Input,
        theme::{ColorfulTheme, SimpleTheme, Theme},
    };
    use kitgen_core::{
        application::{ApplicationError, ports::Prompter},
        error::KitResult,
    };

    /// `dialoguer` text inputs on stderr.
    pub struct TerminalPrompter {
        no_color: bool,
    }

    impl TerminalPrompter {
        pub fn new(no_color: bool) -> Self {
            Self { no_color }
        }

        fn theme(&self) -> Box<dyn Theme> {
            if self.no_color {
                Box::new(SimpleTheme)
            } else {
                Box::new(ColorfulTheme::default())
            }
        }
    }

    pub(super) fn prompt_failed(question: &str, reason: impl ToString) -> ApplicationError {
        ApplicationError::PromptFailed {
            question: question.to_string(),
            reason: reason.to_string(),
        }
    }

    impl Prompter for TerminalPrompter {
        fn note(&self, lines: &[String]) -> KitResult<()> {
            let term = Term::stderr();
            for line in lines {
                term.write_line(line)
                    .map_err(|e| prompt_failed(line, e))?;
            }
            Ok(())
        }

        fn ask(&self, question: &str) -> KitResult<String> {
            let theme = self.theme();
            Input::<String>::with_theme(theme.as_ref())
                .with_prompt(question)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| prompt_failed(question, e).into())
        }
    }
}
