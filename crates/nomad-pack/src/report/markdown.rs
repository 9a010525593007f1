use super::views::PackingDocument;
use crate::packing::catalog::SHOP_URL;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write packing list to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("export directory {} does not exist", .path.display())]
    DirectoryMissing { path: PathBuf },
}

impl ExportError {
    pub fn path(&self) -> &Path {
        match self {
            ExportError::Write { path, .. } | ExportError::DirectoryMissing { path } => path,
        }
    }
}

pub fn default_export_filename(date: NaiveDate) -> String {
    format!("packing-list-{}.md", date.format("%Y%m%d"))
}

/// Dated export path inside `directory`, which must already exist.
pub fn default_export_path(directory: &Path, date: NaiveDate) -> Result<PathBuf, ExportError> {
    if !directory.is_dir() {
        return Err(ExportError::DirectoryMissing {
            path: directory.to_path_buf(),
        });
    }
    Ok(directory.join(default_export_filename(date)))
}

/// Markdown checklist where every item renders as a task-list checkbox.
pub fn render_markdown(document: &PackingDocument) -> String {
    let info = &document.trip_info;
    let pack = &document.recommended_pack;
    let mut out = String::from("# Digital Nomad Packing List\n\n");

    out.push_str("## Trip Details\n\n");
    out.push_str(&format!(
        "- **Type:** {}\n",
        info.trip_type.as_str().to_uppercase()
    ));
    out.push_str(&format!("- **Duration:** {}\n", info.duration));
    out.push_str(&format!(
        "- **Work Intensity:** {}\n",
        info.work_intensity.as_str().to_uppercase()
    ));
    out.push_str(&format!("- **Generated:** {}\n\n", info.generated_at));

    out.push_str("## Recommended Base Pack\n\n");
    out.push_str(&format!(
        "**[{}]({})** ({})\n\n",
        pack.pack, pack.url, pack.capacity
    ));

    out.push_str("## Required Modules\n\n");
    for module in &document.modules {
        out.push_str(&format!("- ✓ {module}\n"));
    }
    out.push('\n');

    out.push_str(&format!(
        "## Packing Checklist ({} items)\n\n",
        document.total_items
    ));
    for category in &document.items {
        out.push_str(&format!("### {}\n\n", category.name));
        for item in &category.items {
            out.push_str(&format!("- [ ] {item}\n"));
        }
        out.push('\n');
    }

    out.push_str("---\n\n");
    out.push_str("**Tip:** Check off items as you pack them!\n\n");
    out.push_str(&format!("**Shop FIKA CARRY:** {SHOP_URL}\n"));
    out
}

/// Writes the Markdown checklist to `path`, overwriting any existing file.
pub fn export_markdown(
    document: &PackingDocument,
    path: impl AsRef<Path>,
) -> Result<PathBuf, ExportError> {
    let path = path.as_ref().to_path_buf();
    fs::write(&path, render_markdown(document)).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
