use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use log::{debug, error};
use typecheck::{
    errors::errors::{Error, ErrorTip},
    get_line,
    parser::parser::read_script,
    type_checker::analyzer::SemanticAnalyzer,
};

/// Static semantic analysis for typed assignment and print statements.
#[derive(Parser, Debug)]
#[command(name = "typecheck")]
#[command(version)]
struct Args {
    /// Statement script to analyse, reads stdin when omitted
    input: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Do not print the symbol table
    #[arg(long)]
    no_table: bool,

    /// Do not print the typed AST
    #[arg(long)]
    no_ast: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let (source, file_name) = match read_source(args.input.as_ref()) {
        Ok(source) => source,
        Err(e) => {
            error!("failed to read input: {}", e);
            return ExitCode::from(2);
        }
    };

    let start = Instant::now();
    let script = match read_script(&source) {
        Ok(script) => script,
        Err(error) => {
            display_error(&error, &source, &file_name, Some(error.get_line()));
            return ExitCode::from(2);
        }
    };
    debug!("Read {} statements in {:?}", script.statements.len(), start.elapsed());

    println!("Welcome to the semantic analyzer.");

    let analysis_start = Instant::now();
    let mut analyzer = SemanticAnalyzer::new();
    analyzer.analyze(&script.statements, |diagnostic| {
        let source_line = script.source_line(diagnostic.get_line());
        display_error(diagnostic, &source, &file_name, source_line);
    });
    let analysis = analyzer.finish();
    debug!("Analysed in {:?}", analysis_start.elapsed());

    if !args.no_table {
        println!("\nSymbol Table:");
        println!("{}", analysis.symbol_table);
    }

    if !args.no_ast {
        println!("\nAST:");
        for node in analysis.typed_ast.iter() {
            println!("{}", node);
        }
    }

    if analysis.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn read_source(input: Option<&PathBuf>) -> io::Result<(String, String)> {
    match input {
        Some(path) => Ok((
            fs::read_to_string(path)?,
            path.as_os_str().to_string_lossy().into_owned(),
        )),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok((source, String::from("<stdin>")))
        }
    }
}

fn display_error(error: &Error, source: &str, file_name: &str, source_line: Option<u32>) {
    /*
        Error on line 1: unrecognised token: "@"
        -> final.lang:1
           |
         1 | let x: int = @;
           | -------------^
    */

    if let ErrorTip::None = error.get_tip() {
        println!("\n{}", error);
    } else {
        println!("\n{} ({})", error, error.get_tip());
    }

    let Some(line) = source_line else {
        return;
    };
    let Some(line_text) = get_line(source, line) else {
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    println!("-> {}:{}", file_name, line);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    if let Some(column) = error.get_position().column {
        let arrows = (column as usize).saturating_sub(removed_whitespace).max(1);
        println!("{:>padding$} {:->arrows$}", "|", "^");
    }
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches(' ');
    (trimmed, string.len() - trimmed.len())
}
