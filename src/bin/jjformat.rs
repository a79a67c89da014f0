//! Command-line interface for jjformat
//! Formats JavaCC, JJTree and JTB grammar files.
//!
//! Usage:
//!   jjformat `[<path>]`                          - Print the formatted file (stdin without a path)
//!   jjformat `<path>` --in-place                 - Rewrite the file when it changes
//!   jjformat `<path>` --check                    - Exit with status 1 when the file is not formatted
//!   jjformat `<path>` --lines `<first>:<last>`   - Print the replacement text for a line range
//!   jjformat `<path>` --tokens                   - Dump the token stream as JSON
//!
//! Exit status: 0 on success, 1 when `--check` finds an unformatted file, 2 on errors
//! (unreadable input, untokenizable input, nothing to format, bad configuration).

use clap::{Arg, ArgAction, ArgMatches, Command};
use jj_config::{JjConfig, Loader, PROJECT_FILE};
use jjformat::{format_source, tokenize, FormatError, FormatOptions, LineRange};
use std::fs;
use std::io::{self, Read};
use std::process;

fn main() {
    let matches = Command::new("jjformat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A formatter for JavaCC, JJTree and JTB grammar files")
        .arg(
            Arg::new("path")
                .help("Grammar file to format (reads stdin when absent)")
                .index(1),
        )
        .arg(
            Arg::new("lines")
                .long("lines")
                .value_name("FIRST:LAST")
                .help("Only format this inclusive, 1-based line range")
                .value_parser(parse_lines)
                .conflicts_with_all(["in-place", "check"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Configuration file layered over the defaults and ./jjformat.toml"),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .value_name("STR")
                .help("Indent unit, overriding the configuration"),
        )
        .arg(
            Arg::new("line-ending")
                .long("line-ending")
                .help("Line terminator, overriding the configuration")
                .value_parser(["auto", "lf", "crlf", "cr"]),
        )
        .arg(
            Arg::new("in-place")
                .long("in-place")
                .short('i')
                .help("Rewrite the file instead of printing it")
                .requires("path")
                .conflicts_with("check")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Exit with status 1 when the input is not formatted")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Print the token stream as JSON instead of formatting")
                .conflicts_with_all(["lines", "in-place", "check"])
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug information to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let path = matches.get_one::<String>("path");
    let source = read_source(path.map(String::as_str));

    if matches.get_flag("tokens") {
        handle_tokens_command(&source);
        return;
    }

    let config = load_config(&matches);
    handle_format_command(&matches, path.map(String::as_str), &source, &config);
}

fn init_logging(verbose: bool) {
    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();
}

/// Parse `FIRST:LAST` into a line range
fn parse_lines(value: &str) -> Result<LineRange, String> {
    let (first, last) = value
        .split_once(':')
        .ok_or_else(|| format!("expected FIRST:LAST, got '{value}'"))?;
    let first: usize = first
        .trim()
        .parse()
        .map_err(|_| format!("invalid first line '{first}'"))?;
    let last: usize = last
        .trim()
        .parse()
        .map_err(|_| format!("invalid last line '{last}'"))?;
    if first == 0 || last < first {
        return Err(format!("invalid line range {first}:{last}"));
    }
    Ok(LineRange::new(first, last))
}

fn read_source(path: Option<&str>) -> String {
    let result = match path {
        Some(path) => fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}")),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map(|_| source)
                .map_err(|e| format!("cannot read stdin: {e}"))
        }
    };
    result.unwrap_or_else(|message| fail(&message))
}

fn load_config(matches: &ArgMatches) -> JjConfig {
    let mut loader = Loader::new().with_optional_file(PROJECT_FILE);
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    if let Some(indent) = matches.get_one::<String>("indent") {
        loader = loader
            .set_override("formatting.indent_unit", indent.as_str())
            .unwrap_or_else(|e| fail(&format!("invalid --indent: {e}")));
    }
    if let Some(line_ending) = matches.get_one::<String>("line-ending") {
        loader = loader
            .set_override("formatting.line_ending", line_ending.as_str())
            .unwrap_or_else(|e| fail(&format!("invalid --line-ending: {e}")));
    }
    let config = loader
        .build()
        .unwrap_or_else(|e| fail(&format!("configuration error: {e}")));
    log::debug!(
        "indent unit {:?}, line ending {}",
        config.formatting.indent_unit,
        config.formatting.line_ending.as_str()
    );
    config
}

/// Handle the tokens command
fn handle_tokens_command(source: &str) {
    let stream = tokenize(source).unwrap_or_else(|e| fail(&e.to_string()));
    let json = serde_json::to_string_pretty(&stream).unwrap_or_else(|e| fail(&format!("cannot serialize tokens: {e}")));
    println!("{json}");
}

/// Handle formatting, in all its output modes
fn handle_format_command(matches: &ArgMatches, path: Option<&str>, source: &str, config: &JjConfig) {
    let delimiter = config.formatting.line_ending.resolve(source);
    let options = FormatOptions::new(delimiter, config.formatting.indent_unit.as_str());
    let range = matches
        .get_one::<LineRange>("lines")
        .copied()
        .unwrap_or_else(LineRange::all);

    let formatted = match format_source(source, &options, range) {
        Ok(text) => text,
        Err(FormatError::NoFirstToken) => fail("nothing to format"),
        Err(e) => fail(&e.to_string()),
    };

    if matches.contains_id("lines") {
        println!("{formatted}");
        return;
    }

    // whole files end with a line break
    let formatted = format!("{formatted}{delimiter}");
    let display = path.unwrap_or("<stdin>");

    if matches.get_flag("check") {
        if formatted != source {
            eprintln!("{display}: not formatted");
            process::exit(1);
        }
        return;
    }

    if matches.get_flag("in-place") {
        if let Some(path) = path {
            if formatted != source {
                fs::write(path, &formatted).unwrap_or_else(|e| fail(&format!("cannot write {path}: {e}")));
                log::info!("reformatted {path}");
            }
        }
        return;
    }

    print!("{formatted}");
}

fn fail(message: &str) -> ! {
    eprintln!("jjformat: {message}");
    process::exit(2);
}
