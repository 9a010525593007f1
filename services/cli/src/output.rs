use chrono::NaiveDate;
use nomad_pack::config::ExportConfig;
use nomad_pack::error::AppError;
use nomad_pack::report::{default_export_path, export_markdown, render_text, PackingDocument};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OutputMode {
    Text,
    Json,
    /// Explicit filenames are used as given; otherwise a dated name in the export directory.
    Markdown(Option<PathBuf>),
}

#[derive(Debug)]
pub(crate) enum Rendered {
    Console(String),
    Exported(PathBuf),
}

pub(crate) fn deliver(
    document: &PackingDocument,
    mode: &OutputMode,
    export: &ExportConfig,
    today: NaiveDate,
) -> Result<Rendered, AppError> {
    match mode {
        OutputMode::Text => Ok(Rendered::Console(render_text(document))),
        OutputMode::Json => Ok(Rendered::Console(document.to_json()?)),
        OutputMode::Markdown(filename) => {
            let path = match filename {
                Some(filename) => filename.clone(),
                None => default_export_path(&export.directory, today)?,
            };
            let written = export_markdown(document, path)?;
            Ok(Rendered::Exported(written))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nomad_pack::packing::{generate, TripType, WorkIntensity};
    use nomad_pack::report::ExportError;
    use std::fs;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
    }

    fn document() -> PackingDocument {
        let list = generate(TripType::Nomad, 7, WorkIntensity::Medium, false);
        let generated_at = today().and_hms_opt(7, 0, 0).expect("valid time");
        PackingDocument::new(&list, generated_at)
    }

    fn export_config(directory: PathBuf) -> ExportConfig {
        ExportConfig { directory }
    }

    #[test]
    fn text_mode_prints_report() {
        let rendered = deliver(
            &document(),
            &OutputMode::Text,
            &export_config(PathBuf::from(".")),
            today(),
        )
        .expect("renders");
        match rendered {
            Rendered::Console(body) => {
                assert!(body.contains("DIGITAL NOMAD PACKING LIST"));
                assert!(body.contains("Type: NOMAD"));
            }
            other => panic!("expected console output, got {other:?}"),
        }
    }

    #[test]
    fn json_mode_parses_back() {
        let document = document();
        let rendered = deliver(
            &document,
            &OutputMode::Json,
            &export_config(PathBuf::from(".")),
            today(),
        )
        .expect("renders");
        let Rendered::Console(body) = rendered else {
            panic!("expected console output");
        };
        let parsed = PackingDocument::from_json(&body).expect("valid json");
        assert_eq!(parsed, document);
    }

    #[test]
    fn export_without_filename_uses_dated_name_in_export_dir() {
        let dir = tempfile::tempdir().expect("temp dir");
        let rendered = deliver(
            &document(),
            &OutputMode::Markdown(None),
            &export_config(dir.path().to_path_buf()),
            today(),
        )
        .expect("exports");

        let expected = dir.path().join("packing-list-20261019.md");
        match rendered {
            Rendered::Exported(path) => assert_eq!(path, expected),
            other => panic!("expected export, got {other:?}"),
        }
        let contents = fs::read_to_string(&expected).expect("export readable");
        assert!(contents.contains("### Travel Essentials"));
    }

    #[test]
    fn console_modes_ignore_missing_export_dir() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = export_config(dir.path().join("stale"));

        for mode in [OutputMode::Text, OutputMode::Json] {
            let rendered = deliver(&document(), &mode, &config, today()).expect("renders");
            assert!(matches!(rendered, Rendered::Console(_)), "{mode:?}");
        }
    }

    #[test]
    fn named_export_ignores_missing_export_dir() {
        let dir = tempfile::tempdir().expect("temp dir");
        let target = dir.path().join("trip.md");
        let rendered = deliver(
            &document(),
            &OutputMode::Markdown(Some(target.clone())),
            &export_config(dir.path().join("stale")),
            today(),
        )
        .expect("exports");

        assert!(matches!(rendered, Rendered::Exported(ref path) if *path == target));
        assert!(target.is_file());
    }

    #[test]
    fn dated_export_reports_missing_export_dir() {
        let dir = tempfile::tempdir().expect("temp dir");
        let stale = dir.path().join("stale");
        let err = deliver(
            &document(),
            &OutputMode::Markdown(None),
            &export_config(stale.clone()),
            today(),
        )
        .expect_err("export dir missing");

        match err {
            AppError::Export(ExportError::DirectoryMissing { path }) => assert_eq!(path, stale),
            other => panic!("expected missing directory, got {other:?}"),
        }
    }

    #[test]
    fn export_failure_surfaces_as_export_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let target = dir.path().join("nested").join("trip.md");
        let err = deliver(
            &document(),
            &OutputMode::Markdown(Some(target)),
            &export_config(dir.path().to_path_buf()),
            today(),
        )
        .expect_err("missing parent directory");

        assert!(matches!(err, AppError::Export(_)));
        assert!(err.to_string().contains("trip.md"));
    }
}
