//! HTML to PDF export

use crate::error::{PipelineError, PipelineResult};
use crate::reporter::{run_step, Reporter};
use np_core::PdfConfig;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Converts one HTML file to PDF
pub trait PdfConverter {
    fn convert(&self, input: &Path, output: &Path) -> PipelineResult<()>;
}

/// Runs an external converter program once per file
#[derive(Debug, Clone)]
pub struct CommandConverter {
    program: String,
    args: Vec<String>,
}

impl CommandConverter {
    /// `args` may contain `{input}` and `{output}` placeholders
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &PdfConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }

    fn command_args(&self, input: &Path, output: &Path) -> Vec<String> {
        let (input, output) = (input.display().to_string(), output.display().to_string());
        self.args
            .iter()
            .map(|arg| arg.replace("{input}", &input).replace("{output}", &output))
            .collect()
    }
}

impl PdfConverter for CommandConverter {
    fn convert(&self, input: &Path, output: &Path) -> PipelineResult<()> {
        let args = self.command_args(input, output);
        log::debug!("Running {} {}", self.program, args.join(" "));

        let result = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| PipelineError::ConverterSpawn {
                program: self.program.clone(),
                source,
            })?;

        if result.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&result.stderr);
        Err(PipelineError::Conversion {
            path: input.display().to_string(),
            message: match result.status.code() {
                Some(code) => format!("{} exited with {}: {}", self.program, code, stderr.trim()),
                None => format!("{} was terminated: {}", self.program, stderr.trim()),
            },
        })
    }
}

/// Sibling `.pdf` path of an exported file
pub fn pdf_path(input: &Path) -> PathBuf {
    input.with_extension("pdf")
}

/// Convert every file in `dir` to a sibling PDF.
///
/// The listing is taken once, before the first conversion, so PDFs written
/// along the way are not converted again. No extension filtering: anything
/// else left in the directory is handed to the converter too. Stops at the
/// first failure.
pub fn export_all(
    dir: &Path,
    converter: &dyn PdfConverter,
    reporter: &dyn Reporter,
) -> PipelineResult<Vec<PathBuf>> {
    run_step(reporter, "Exporting to pdf...", || {
        let files = list_files(dir)?;
        let mut written = Vec::with_capacity(files.len());
        for input in files {
            if let Some(name) = input.file_name() {
                reporter.item(&name.to_string_lossy());
            }
            let output = pdf_path(&input);
            converter.convert(&input, &output)?;
            written.push(output);
        }
        Ok(written)
    })
}

/// Regular files directly inside `dir`, sorted by path
pub(crate) fn list_files(dir: &Path) -> PipelineResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| PipelineError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PipelineError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
