mod markdown;
mod text;
pub mod views;

pub use markdown::{
    default_export_filename, default_export_path, export_markdown, render_markdown, ExportError,
};
pub use text::render_text;
pub use views::{PackingDocument, TripInfoView, GENERATED_AT_FORMAT};
