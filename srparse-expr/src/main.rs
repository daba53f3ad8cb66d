//! Command-line interface (CLI) for srparse-expr
//!
//! Reads one expression (from `--expr` or a line of standard input), runs
//! the tokenizer and the shift-reduce engine over it, and prints the lexer
//! echo, the parsing steps and the stack history. Exits with status 1 when
//! the expression is rejected.

use anyhow::Context;
use clap::Parser as ClapParser;
use srparse::ParserConfig;
use srparse_expr::ExprParser;
use srparse_expr::report::Report;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to recognize; read from stdin when omitted
    #[arg(short, long)]
    expr: Option<String>,

    /// Wait for a line on stdin before exiting
    #[arg(short, long)]
    pause: bool,

    /// Do not record or print the stack history
    #[arg(long)]
    no_history: bool,
}

fn read_line(stdin: &mut impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    stdin.read_line(&mut line).context("can't read stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    let input = match args.expr {
        Some(expr) => expr,
        None => {
            writeln!(stdout, "Enter your expression:")?;
            stdout.flush()?;
            read_line(&mut stdin)?
        }
    };

    let parser = ExprParser::with_config(ParserConfig {
        record_history: !args.no_history,
        ..ParserConfig::default()
    });
    let report = Report::run(&parser, &input);
    write!(stdout, "{report}")?;

    if let Some(derivation) = report.derivation() {
        log::info!(
            "{} tokens, {} shifts, {} reductions",
            derivation.stats.tokens,
            derivation.stats.shifts,
            derivation.stats.reductions
        );
    }

    if args.pause {
        writeln!(stdout)?;
        write!(stdout, "Press any key to exit...")?;
        stdout.flush()?;
        read_line(&mut stdin)?;
    }

    Ok(if report.is_accepted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
