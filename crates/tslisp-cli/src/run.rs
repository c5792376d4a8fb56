//! `tslisp run`: dump tokens/AST or execute generated code.

use std::io::Write;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::debug;

use crate::config::RuntimeConfig;
use crate::error::CliError;

/// What to do with a piece of source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Execute,
    Tokenize,
    Parse,
}

impl Mode {
    pub fn from_flags(tokenize: bool, parse: bool) -> Self {
        if tokenize {
            Mode::Tokenize
        } else if parse {
            Mode::Parse
        } else {
            Mode::Execute
        }
    }
}

/// Pretty JSON of the tokens or the program.
pub fn dump(source: &str, mode: Mode) -> Result<String, CliError> {
    let json = match mode {
        Mode::Tokenize => serde_json::to_string_pretty(&tslisp_core::tokenize(source)?)?,
        Mode::Parse | Mode::Execute => serde_json::to_string_pretty(&tslisp_core::parse(source)?)?,
    };
    Ok(json)
}

/// Handle one unit of source. Dumps go to `out`; executed code writes to the
/// inherited stdout. Returns the exit code to report.
pub async fn run_source<W: Write>(
    source: &str,
    mode: Mode,
    runtime: &RuntimeConfig,
    out: &mut W,
) -> Result<i32, CliError> {
    if mode != Mode::Execute {
        writeln!(out, "{}", dump(source, mode)?)?;
        return Ok(0);
    }

    let code = tslisp_core::compile(source)?;
    let status = execute(&code, runtime).await?;
    Ok(status.code().unwrap_or(1))
}

/// Read a source file and handle it like [`run_source`].
pub async fn run_file<W: Write>(
    path: &Path,
    mode: Mode,
    runtime: &RuntimeConfig,
    out: &mut W,
) -> Result<i32, CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    run_source(&source, mode, runtime, out).await
}

/// Run generated code in the external runtime, inheriting stdout and stderr.
pub async fn execute(code: &str, runtime: &RuntimeConfig) -> Result<ExitStatus, CliError> {
    debug!(program = %runtime.program, bytes = code.len(), "spawning runtime");

    Command::new(&runtime.program)
        .args(&runtime.args)
        .arg(code)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|source| CliError::Spawn {
            program: runtime.program.clone(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn missing_runtime() -> RuntimeConfig {
        RuntimeConfig {
            program: "tslisp-no-such-runtime".to_string(),
            args: vec![],
        }
    }

    #[test]
    fn test_mode_from_flags() {
        assert_eq!(Mode::from_flags(false, false), Mode::Execute);
        assert_eq!(Mode::from_flags(true, false), Mode::Tokenize);
        assert_eq!(Mode::from_flags(false, true), Mode::Parse);
    }

    #[test]
    fn test_dump_tokens() {
        let json: serde_json::Value =
            serde_json::from_str(&dump("(a)", Mode::Tokenize).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "kind": "LEFT_PAREN", "text": "(" },
                { "kind": "TEXT", "text": "a" },
                { "kind": "RIGHT_PAREN", "text": ")" },
            ])
        );
    }

    #[test]
    fn test_dump_program() {
        let json: serde_json::Value =
            serde_json::from_str(&dump("(print 1)", Mode::Parse).unwrap()).unwrap();
        let call = &json["body"][0];
        assert_eq!(call["type"], "CallExpression");
        assert_eq!(call["callee"]["segments"], serde_json::json!(["print"]));
        assert_eq!(call["arguments"][0]["raw"], "1");
    }

    #[test]
    fn test_dump_reports_compile_errors() {
        let err = dump("(print \"hi)", Mode::Tokenize).unwrap_err();
        assert_eq!(err.to_string(), "lex error: unterminated string literal");
    }

    #[tokio::test]
    async fn test_run_source_writes_dump() {
        let mut out = Vec::new();
        let code = run_source("(a)", Mode::Parse, &missing_runtime(), &mut out)
            .await
            .unwrap();
        assert_eq!(code, 0);

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["body"][0]["callee"]["segments"], serde_json::json!(["a"]));
    }

    #[tokio::test]
    async fn test_run_source_compile_error_skips_runtime() {
        let mut out = Vec::new();
        let err = run_source("(not)", Mode::Execute, &missing_runtime(), &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Compile(_)));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_run_file_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.lisp");

        let mut out = Vec::new();
        let err = run_file(&path, Mode::Tokenize, &missing_runtime(), &mut out)
            .await
            .unwrap_err();
        match err {
            CliError::Read { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected read error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_file_tokenize() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("main.lisp");
        std::fs::write(&path, "(add 1 2)").unwrap();

        let mut out = Vec::new();
        let code = run_file(&path, Mode::Tokenize, &missing_runtime(), &mut out)
            .await
            .unwrap();
        assert_eq!(code, 0);

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(5));
        assert_eq!(json[1]["text"], "add");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_file_passes_exit_code_through() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("main.lisp");
        std::fs::write(&path, "(print 1)").unwrap();

        // The generated code lands in `$0` and is ignored by the script.
        let runtime = RuntimeConfig {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), "exit 4".to_string()],
        };
        let mut out = Vec::new();
        let code = run_file(&path, Mode::Execute, &runtime, &mut out)
            .await
            .unwrap();
        assert_eq!(code, 4);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_execute_reports_exit_code() {
        let runtime = RuntimeConfig {
            program: "sh".to_string(),
            args: vec!["-c".to_string()],
        };
        let status = execute("exit 3", &runtime).await.unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[tokio::test]
    async fn test_execute_missing_runtime() {
        let err = execute("1", &missing_runtime()).await.unwrap_err();
        assert!(matches!(err, CliError::Spawn { .. }));
    }
}
