//! loxc-drv - the command-line driver (spec §6 "External interfaces",
//! driver side).
//!
//! Wires the four pipeline phases together: lex, parse, resolve,
//! interpret. Diagnostics from every phase funnel through one
//! [`loxc_util::Handler`]; the driver prints them to stderr and maps the
//! outcome to a process exit code (spec §7 propagation policy).

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;

use loxc_lex::Lexer;
use loxc_par::Parser;
use loxc_rt::Interpreter;
use loxc_sem::resolve;
use loxc_util::Handler;

/// Run a Lox source file.
#[derive(ClapParser, Debug)]
#[command(name = "loxc")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tree-walking interpreter for the Lox language", long_about = None)]
pub struct Cli {
    /// Path to the `.lox` source file to run
    pub source: PathBuf,

    /// Enable resolver/interpreter trace logging (also controllable via
    /// `RUST_LOG=loxc=trace`)
    #[arg(long)]
    pub trace: bool,
}

/// Exit codes (spec §6, mirroring the teacher's `faxc` driver).
#[repr(u8)]
pub enum ExitCodeKind {
    Success = 0,
    CompilationError = 1,
    CommandLineError = 3,
}

/// Reads and runs `cli.source`, reporting diagnostics to stderr.
///
/// Returns the process exit code directly rather than wrapping failures
/// in a boxed error type: every failure mode here already has
/// diagnostics printed by the time this returns, so there is nothing
/// left for a caller to format.
pub fn run(cli: Cli) -> ExitCode {
    if cli.trace {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("loxc=trace"))
            .init();
    } else {
        env_logger::init();
    }

    let source = match fs::read_to_string(&cli.source) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: couldn't read {}: {}", cli.source.display(), err);
            return ExitCode::from(ExitCodeKind::CommandLineError as u8);
        }
    };

    match interpret(&source) {
        Ok(()) => ExitCode::from(ExitCodeKind::Success as u8),
        Err(diagnostics) => {
            for diagnostic in diagnostics {
                eprintln!("{diagnostic}");
            }
            ExitCode::from(ExitCodeKind::CompilationError as u8)
        }
    }
}

/// Runs the lex -> parse -> resolve -> interpret pipeline over `source`,
/// writing `print` output to stdout.
///
/// Returns every diagnostic raised, in phase order, if any phase
/// reports an error; stops before entering a later phase once an
/// earlier one has (spec §7: lex/parse accumulate, resolve/interpret
/// halt on first).
pub fn interpret(source: &str) -> Result<(), Vec<loxc_util::Diagnostic>> {
    let handler = Handler::new();

    let tokens = Lexer::new(source, &handler).scan_tokens();
    if handler.has_errors() {
        return Err(handler.diagnostics());
    }

    let stmts = Parser::new(tokens, &handler).parse();
    if handler.has_errors() {
        return Err(handler.diagnostics());
    }

    let locals = resolve(&stmts, &handler);
    if handler.has_errors() {
        return Err(handler.diagnostics());
    }

    let mut interpreter = Interpreter::new(locals);
    if interpreter.interpret(&stmts, &handler).is_err() {
        return Err(handler.diagnostics());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interprets_valid_source() {
        assert!(interpret("print 1 + 1;").is_ok());
    }

    #[test]
    fn reports_lex_errors() {
        let result = interpret("\"unterminated");
        assert!(result.is_err());
    }

    #[test]
    fn reports_parse_errors() {
        let result = interpret("var;");
        assert!(result.is_err());
    }

    #[test]
    fn reports_resolve_errors() {
        let result = interpret("{ var a = a; }");
        assert!(result.is_err());
    }

    #[test]
    fn reports_runtime_errors() {
        let result = interpret("print 1 + true;");
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_source_path_and_trace_flag() {
        let cli = Cli::parse_from(["loxc", "script.lox", "--trace"]);
        assert_eq!(cli.source, PathBuf::from("script.lox"));
        assert!(cli.trace);
    }

    #[test]
    fn cli_trace_defaults_to_false() {
        let cli = Cli::parse_from(["loxc", "script.lox"]);
        assert!(!cli.trace);
    }
}
