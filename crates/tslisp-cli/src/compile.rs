//! `tslisp compile`: batch compile files to JavaScript.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::OutputConfig;
use crate::error::CliError;

/// `<dir>/<stem>.<extension>`, or relative to the working directory without `dir`.
pub fn output_path(source: &Path, dir: Option<&Path>, extension: &str) -> PathBuf {
    let stem = source.file_stem().unwrap_or(source.as_os_str());
    let mut file = stem.to_os_string();
    file.push(".");
    file.push(extension);
    let file = PathBuf::from(file);
    match dir {
        Some(dir) => dir.join(file),
        None => file,
    }
}

/// Compile one file and return the generated code.
pub fn compile_file(path: &Path) -> Result<String, CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(tslisp_core::compile(&source)?)
}

/// Compile every file, stopping at the first failure.
pub fn compile_files(
    files: &[PathBuf],
    output: &OutputConfig,
    stdout: bool,
) -> Result<Vec<PathBuf>, CliError> {
    let mut written = Vec::new();

    for file in files {
        let code = compile_file(file)?;

        if stdout {
            println!("{}", code);
            continue;
        }

        let out_path = output_path(file, output.dir.as_deref(), &output.extension);
        if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| CliError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&out_path, &code).map_err(|source| CliError::Write {
            path: out_path.clone(),
            source,
        })?;

        info!("{} -> {}", file.display(), out_path.display());
        written.push(out_path);
    }

    Ok(written)
}
