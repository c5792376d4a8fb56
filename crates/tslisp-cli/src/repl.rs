//! Interactive prompt for `tslisp run` without a file.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::config::RuntimeConfig;
use crate::error::CliError;
use crate::run::{Mode, run_source};

const BANNER: &str = "Welcome to tslisp";
const PROMPT: &str = "tslisp > ";
const EXIT: &str = ".exit";

/// Read lines until EOF or `.exit`, handling each like a source file.
///
/// Results go to `out`; a failing line is reported on `err` and the loop
/// carries on with the next one.
pub async fn repl<R, W, E>(
    input: R,
    out: &mut W,
    err: &mut E,
    mode: Mode,
    runtime: &RuntimeConfig,
) -> Result<(), CliError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    E: Write,
{
    writeln!(out, "{}", BANNER)?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        let line = line.trim();
        if line == EXIT {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match run_source(line, mode, runtime, out).await {
            Ok(code) => debug!(code, "evaluated"),
            Err(e) => writeln!(err, "{}", e)?,
        }
    }

    Ok(())
}
