//! Kochanowski Core - scaffolding domain and orchestration.
//!
//! This crate holds everything `create-kochanowski` knows about a new
//! project, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        kochanowski-cli (CLI)            │
//! │   (prompt, config, output, exit codes)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, ManifestEditor,      │
//! │   TemplateWriter)                       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, CommandRunner, Prompt)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   kochanowski-adapters (Infrastructure) │
//! │  (LocalFilesystem, ProcessRunner, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ProjectName, Manifest, ScaffoldPlan)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kochanowski_core::prelude::*;
//! # fn adapters() -> (Box<dyn Filesystem>, Box<dyn CommandRunner>) { unimplemented!() }
//!
//! let (filesystem, runner) = adapters();
//! let service = ScaffoldService::new(filesystem, runner, ScaffoldSettings::default());
//!
//! let name = ProjectName::parse("demo").unwrap();
//! service.scaffold(&name, std::path::Path::new(".")).unwrap();
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, CommandFailure, ManifestEditor, NoProgress, PROJECT_NAME_QUESTION,
        ScaffoldEvent, ScaffoldReport, ScaffoldService, ScaffoldSettings, TemplateWriter,
        ports::{CommandRunner, Filesystem, NamePrompt, Progress},
    };
    pub use crate::domain::{
        CommandInvocation, CommandStep, Manifest, NamePolicy, ProjectName, SAMPLE_FILE_NAME,
        SAMPLE_SOURCE, ScaffoldPlan,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
