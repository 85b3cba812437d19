//! Rendered report documents and their local archive.

pub mod archive;
pub mod renderer;

pub use archive::ReportArchive;
pub use renderer::{report_title, HtmlDigestRenderer, ReportRenderer};

/// A rendered report, ready to be archived or published.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub html: String,
}
