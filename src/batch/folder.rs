use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::config::FrameStyle;
use crate::foundation::error::{ShotframeError, ShotframeResult};
use crate::render::pipeline::process_file;

/// Extensions picked up from the input folder, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff"];

/// Suffix appended to the input folder name for the default output folder.
pub const OUTPUT_DIR_SUFFIX: &str = "-processed";

/// An input that could not be framed.
#[derive(Debug)]
pub struct FileFailure {
    pub input: PathBuf,
    pub error: ShotframeError,
}

impl FileFailure {
    /// File name of the failed input, for user-facing messages.
    pub fn name(&self) -> String {
        display_name(&self.input)
    }
}

/// Outcome of a whole folder run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub output_dir: PathBuf,
    /// Written PNGs, in input order.
    pub processed: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

/// Progress notification emitted once per matching input file.
#[derive(Debug)]
pub enum FileEvent<'a> {
    Processed { input: &'a Path, output: &'a Path },
    Failed(&'a FileFailure),
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
}

/// Sibling folder `<name>-processed` next to `input_dir`.
pub fn default_output_dir(input_dir: &Path) -> ShotframeResult<PathBuf> {
    let resolved;
    let dir = if input_dir.file_name().is_some() {
        input_dir
    } else {
        resolved = std::fs::canonicalize(input_dir)
            .with_context(|| format!("resolve input dir '{}'", input_dir.display()))?;
        resolved.as_path()
    };
    let name = dir.file_name().ok_or_else(|| {
        ShotframeError::validation(format!(
            "cannot derive an output folder name from '{}'",
            input_dir.display()
        ))
    })?;
    let mut out_name = name.to_os_string();
    out_name.push(OUTPUT_DIR_SUFFIX);
    Ok(dir.with_file_name(out_name))
}

/// Frame every supported image in `input_dir` with the default style.
///
/// See [`process_folder_with`]; the output folder is wiped first.
pub fn process_folder(
    input_dir: &Path,
    output_dir: Option<&Path>,
) -> ShotframeResult<BatchReport> {
    process_folder_with(input_dir, output_dir, &FrameStyle::default(), |_| {})
}

/// Frame every supported image directly inside `input_dir` into `output_dir`
/// (default: [`default_output_dir`]).
///
/// Destructive: `output_dir` is deleted recursively and recreated before any
/// file is written, so nothing previously stored there survives.
///
/// Inputs are visited in file-name order. A file that fails to load, frame or
/// save is recorded in [`BatchReport::failures`] and the run moves on.
#[tracing::instrument(skip_all, fields(input_dir = %input_dir.display()))]
pub fn process_folder_with(
    input_dir: &Path,
    output_dir: Option<&Path>,
    style: &FrameStyle,
    mut on_event: impl FnMut(FileEvent<'_>),
) -> ShotframeResult<BatchReport> {
    if !input_dir.is_dir() {
        return Err(ShotframeError::not_a_directory(input_dir));
    }

    let output_dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_output_dir(input_dir)?,
    };
    ensure_output_is_disjoint(input_dir, &output_dir)?;

    let inputs = collect_inputs(input_dir)?;
    recreate_dir(&output_dir)?;
    tracing::info!(
        count = inputs.len(),
        output_dir = %output_dir.display(),
        "processing images"
    );

    let mut report = BatchReport {
        output_dir: output_dir.clone(),
        ..BatchReport::default()
    };

    for input in inputs {
        match process_file(&input, &output_dir, style) {
            Ok(output) => {
                tracing::info!(
                    input = %input.display(),
                    output = %output.display(),
                    "processed"
                );
                on_event(FileEvent::Processed {
                    input: &input,
                    output: &output,
                });
                report.processed.push(output);
            }
            Err(error) => {
                let failure = FileFailure { input, error };
                tracing::warn!(
                    input = %failure.input.display(),
                    error = %failure.error.display_chain(),
                    "failed to process image"
                );
                on_event(FileEvent::Failed(&failure));
                report.failures.push(failure);
            }
        }
    }

    Ok(report)
}

fn collect_inputs(input_dir: &Path) -> ShotframeResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(input_dir)
        .with_context(|| format!("read dir '{}'", input_dir.display()))?;

    let mut inputs = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("read dir entry in '{}'", input_dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if is_supported_image(&path) {
            inputs.push(path);
        } else {
            tracing::debug!(path = %path.display(), "skipping unsupported file");
        }
    }
    inputs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(inputs)
}

/// Refuse output folders that would take the inputs down with them when wiped.
fn ensure_output_is_disjoint(input_dir: &Path, output_dir: &Path) -> ShotframeResult<()> {
    if !output_dir.exists() {
        return Ok(());
    }
    let input = std::fs::canonicalize(input_dir)
        .with_context(|| format!("resolve input dir '{}'", input_dir.display()))?;
    let output = std::fs::canonicalize(output_dir)
        .with_context(|| format!("resolve output dir '{}'", output_dir.display()))?;
    if input.starts_with(&output) {
        return Err(ShotframeError::validation(format!(
            "output dir '{}' contains the input dir '{}' and would be wiped",
            output_dir.display(),
            input_dir.display()
        )));
    }
    Ok(())
}

fn recreate_dir(dir: &Path) -> ShotframeResult<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir)
            .with_context(|| format!("clear output dir '{}'", dir.display()))?;
    }
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    Ok(())
}

/// File name of `path` for user-facing messages, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/batch/folder.rs"]
mod tests;
