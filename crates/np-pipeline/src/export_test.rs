use super::*;
use crate::reporter::SilentReporter;
use std::cell::RefCell;
use std::fs;
use tempfile::tempdir;

/// Records every conversion and copies input to output
#[derive(Default)]
struct CopyConverter {
    calls: RefCell<Vec<String>>,
    fail_on: Option<&'static str>,
}

impl PdfConverter for CopyConverter {
    fn convert(&self, input: &Path, output: &Path) -> PipelineResult<()> {
        let name = input.file_name().unwrap().to_string_lossy().to_string();
        self.calls.borrow_mut().push(name.clone());
        if self.fail_on == Some(name.as_str()) {
            return Err(PipelineError::Conversion {
                path: input.display().to_string(),
                message: "broken".to_string(),
            });
        }
        fs::copy(input, output).unwrap();
        Ok(())
    }
}

#[test]
fn test_export_all_converts_snapshot_in_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Rattlesnake.html"), "r").unwrap();
    fs::write(dir.path().join("Lower_Hellgate.html"), "l").unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();

    let converter = CopyConverter::default();
    let written = export_all(dir.path(), &converter, &SilentReporter).unwrap();

    assert_eq!(
        *converter.calls.borrow(),
        vec!["Lower_Hellgate.html", "Rattlesnake.html"]
    );
    assert_eq!(
        written,
        vec![
            dir.path().join("Lower_Hellgate.pdf"),
            dir.path().join("Rattlesnake.pdf")
        ]
    );
    assert_eq!(fs::read_to_string(dir.path().join("Rattlesnake.pdf")).unwrap(), "r");
}

#[test]
fn test_export_all_does_not_filter_extensions() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "n").unwrap();

    let converter = CopyConverter::default();
    export_all(dir.path(), &converter, &SilentReporter).unwrap();
    assert_eq!(*converter.calls.borrow(), vec!["notes.txt"]);
    assert!(dir.path().join("notes.pdf").exists());
}

#[test]
fn test_export_all_stops_at_first_failure() {
    let dir = tempdir().unwrap();
    for name in ["a.html", "b.html", "c.html"] {
        fs::write(dir.path().join(name), name).unwrap();
    }

    let converter = CopyConverter {
        fail_on: Some("b.html"),
        ..Default::default()
    };
    let err = export_all(dir.path(), &converter, &SilentReporter).unwrap_err();

    assert!(err.to_string().contains("[P001]"));
    assert_eq!(*converter.calls.borrow(), vec!["a.html", "b.html"]);
    assert!(dir.path().join("a.pdf").exists());
    assert!(!dir.path().join("c.pdf").exists());
}

#[test]
fn test_export_all_missing_dir() {
    let dir = tempdir().unwrap();
    let converter = CopyConverter::default();
    let err = export_all(&dir.path().join("profiles"), &converter, &SilentReporter).unwrap_err();
    assert!(matches!(err, PipelineError::Io { .. }));
}

#[test]
fn test_command_args_substitution() {
    let converter = CommandConverter::from_config(&PdfConfig::default());
    let args = converter.command_args(Path::new("/p/Rattlesnake.html"), Path::new("/p/Rattlesnake.pdf"));
    assert_eq!(args, vec!["--quiet", "/p/Rattlesnake.html", "/p/Rattlesnake.pdf"]);
}

#[test]
fn test_pdf_path() {
    assert_eq!(pdf_path(Path::new("p/Two_Rivers.html")), PathBuf::from("p/Two_Rivers.pdf"));
    assert_eq!(pdf_path(Path::new("p/README")), PathBuf::from("p/README.pdf"));
}

#[cfg(unix)]
#[test]
fn test_command_converter_runs_program() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("Rattlesnake.html");
    fs::write(&input, "<html></html>").unwrap();

    let converter = CommandConverter::new("cp", vec!["{input}".into(), "{output}".into()]);
    converter.convert(&input, &pdf_path(&input)).unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("Rattlesnake.pdf")).unwrap(),
        "<html></html>"
    );
}

#[cfg(unix)]
#[test]
fn test_command_converter_reports_stderr() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.html");

    let converter = CommandConverter::new("cp", vec!["{input}".into(), "{output}".into()]);
    let err = converter.convert(&input, &pdf_path(&input)).unwrap_err();
    match err {
        PipelineError::Conversion { path, message } => {
            assert!(path.ends_with("missing.html"));
            assert!(message.starts_with("cp exited with"));
            assert!(message.contains("missing.html"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_command_converter_missing_program() {
    let converter = CommandConverter::new("np-no-such-converter", vec!["{input}".into()]);
    let err = converter
        .convert(Path::new("a.html"), Path::new("a.pdf"))
        .unwrap_err();
    assert!(matches!(err, PipelineError::ConverterSpawn { .. }));
    assert!(err.to_string().contains("[P002]"));
}
