//! Terminal name prompt.
//!
//! With the `interactive` feature and a terminal on stdin the question is
//! asked through `dialoguer`, which validates as the user types.  Anything
//! else (piped input, CI, builds without the feature) falls back to the
//! line prompt from `kochanowski-adapters`.

use kochanowski_adapters::LinePrompt;
use kochanowski_core::prelude::{ProjectName, ScaffoldResult, ScaffoldService};

/// Ask for a project name with whichever prompt suits stdin.
#[cfg(feature = "interactive")]
pub fn ask_project_name(service: &ScaffoldService) -> ScaffoldResult<ProjectName> {
    use std::io::IsTerminal;

    if std::io::stdin().is_terminal() {
        service.ask_name(&DialoguerPrompt::default())
    } else {
        service.ask_name(&LinePrompt::stdio())
    }
}

/// Ask for a project name on stdin.
#[cfg(not(feature = "interactive"))]
pub fn ask_project_name(service: &ScaffoldService) -> ScaffoldResult<ProjectName> {
    service.ask_name(&LinePrompt::stdio())
}

#[cfg(feature = "interactive")]
pub use interactive::DialoguerPrompt;

#[cfg(feature = "interactive")]
mod interactive {
    use dialoguer::{Input, theme::ColorfulTheme};
    use kochanowski_core::prelude::{
        ApplicationError, NamePolicy, NamePrompt, ProjectName, ScaffoldResult,
    };

    /// Validating prompt drawn on the terminal.
    #[derive(Default)]
    pub struct DialoguerPrompt {
        theme: ColorfulTheme,
    }

    impl NamePrompt for DialoguerPrompt {
        fn ask(&self, question: &str, policy: NamePolicy) -> ScaffoldResult<ProjectName> {
            let answer: String = Input::with_theme(&self.theme)
                .with_prompt(question)
                .allow_empty(true)
                .validate_with(|input: &String| -> Result<(), String> {
                    ProjectName::parse_with(input, policy)
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(|e| ApplicationError::PromptFailed {
                    reason: e.to_string(),
                })?;

            Ok(ProjectName::parse_with(&answer, policy)?)
        }
    }
}
