use std::{
    fs,
    io::{self, BufRead, IsTerminal, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use spacecalc::{
    display::{Style, render_report},
    get_result,
    interpreter::{evaluator::core::Environment, statement::StatementReport},
};

/// spacecalc is a calculator in which spaces group: `1+1 *2` is `(1+1)*2`.
///
/// Without arguments it reads piped input, or starts an interactive session
/// when stdin is a terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Statements to evaluate, separated by `;`.
    expression: Option<String>,

    /// Evaluates the statements of a file instead.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Disables colored output.
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let color = !args.no_color;
    let mut env = Environment::with_constants();

    let input = if let Some(expression) = args.expression {
        expression
    } else if let Some(path) = &args.file {
        match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        }
    } else if io::stdin().is_terminal() {
        return run_session(&mut env, color);
    } else {
        let mut piped = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut piped) {
            eprintln!("Failed to read stdin: {e}");
            return ExitCode::FAILURE;
        }
        piped
    };

    let reports = get_result(&input, &mut env);
    let failed = print_reports(&reports, color, false);
    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Reads lines until end of input and evaluates each one as it comes.
fn run_session(env: &mut Environment, color: bool) -> ExitCode {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", Style::Prompt.paint("> ", color));
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let Some(Ok(line)) = lines.next() else {
            println!();
            return ExitCode::SUCCESS;
        };

        let reports = get_result(&line, env);
        print_reports(&reports, color, true);
        println!();
    }
}

/// Prints every report and returns whether any statement failed.
///
/// Outside a session errors go to stderr.
fn print_reports(reports: &[StatementReport], color: bool, session: bool) -> bool {
    let mut failed = false;
    for report in reports {
        let rendered = render_report(report, color);
        if report.outcome.is_err() {
            failed = true;
            if session {
                println!("\n{rendered}\n");
            } else {
                eprintln!("\n{rendered}\n");
            }
        } else {
            println!("{rendered}");
        }
    }
    failed
}
