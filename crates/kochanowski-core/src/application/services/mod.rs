//! Application services - orchestrate use cases.
//!
//! `ScaffoldService` runs the whole workflow; `ManifestEditor` and
//! `TemplateWriter` are its two file-producing steps, usable on their own.

pub mod manifest_editor;
pub mod scaffold_service;
pub mod template_writer;

pub use manifest_editor::ManifestEditor;
pub use scaffold_service::{
    PROJECT_NAME_QUESTION, ScaffoldEvent, ScaffoldReport, ScaffoldService, ScaffoldSettings,
};
pub use template_writer::TemplateWriter;
