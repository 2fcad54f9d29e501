//! CLI entry point: loads a Brewin program from disk, runs it against
//! real stdin/stdout, and maps a terminal failure to a non-zero exit
//! (spec §6), mirroring the teacher's own CLI driver.

mod host;

use std::env;
use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use brewin_core::ErrorSink;

use crate::host::StdIo;

fn main() -> ExitCode {
    env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| "program.brewin".to_string());
    let source = match read_program(&path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    let mut io = StdIo::new();
    log::info!("running '{path}'");
    match brewin_interp::run_source(&source, &mut io) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::warn!("{path}: terminated with {}", err.kind);
            io.fail(err.kind, &err.message, err.line);
            ExitCode::FAILURE
        }
    }
}

fn read_program(path: &str) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read '{path}'"))
}
