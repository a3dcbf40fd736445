//! Command-line interface for mathsplit
//! Splits text into plain-text and math segments and prints them, or renders the math.
//!
//! Usage:
//!   mathsplit [`<path>`] [--config `<file>`] [--format `<format>`]  - Print the segments
//!   mathsplit [`<path>`] --render                                - Render math to MathML
//!   mathsplit --list-delimiters                                  - Show the effective delimiters
//!
//! Input is read from stdin when no path is given. Set `RUST_LOG=debug` to see scanner logs.

use clap::{Arg, ArgAction, ArgMatches, Command};
use config::ConfigError;
use mathsplit::math::config::{Loader, MathsplitConfig, OutputFormat};
use mathsplit::math::{split_at_delimiters, DelimiterError, DelimiterSet, SplitResult};
use std::fmt;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Io(String, std::io::Error),
    Config(ConfigError),
    Delimiters(DelimiterError),
    Format(String),
    Serialize(String),
    Render(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(source, e) => write!(f, "Error reading {}: {}", source, e),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Delimiters(e) => write!(f, "Invalid delimiters: {}", e),
            CliError::Format(msg) => write!(f, "{}", msg),
            CliError::Serialize(msg) => write!(f, "Error formatting output: {}", msg),
            CliError::Render(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

fn main() {
    env_logger::init();

    let matches = Command::new("mathsplit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Split text into plain-text and delimited math segments")
        .arg(
            Arg::new("path")
                .help("Path to the input file (reads stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: json, yaml or simple (default from config)"),
        )
        .arg(
            Arg::new("render")
                .long("render")
                .help("Render math segments to MathML instead of printing segments")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-delimiters")
                .long("list-delimiters")
                .help("Print the effective delimiter list and exit")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    let delimiters = config.delimiter_set().map_err(CliError::Delimiters)?;

    if matches.get_flag("list-delimiters") {
        handle_list_delimiters_command(&delimiters);
        return Ok(());
    }

    let source = read_source(matches.get_one::<String>("path"))?;

    if matches.get_flag("render") {
        let output = handle_render_command(&source, &delimiters)?;
        print!("{}", output);
        return Ok(());
    }

    let result = split_at_delimiters(&source, &delimiters);
    let output = format_result(&result, config.output.format, config.output.pretty)?;
    print!("{}", output);
    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<MathsplitConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        let format: OutputFormat = format.parse().map_err(CliError::Format)?;
        loader = loader
            .set_override("output.format", format.as_str())
            .map_err(CliError::Config)?;
    }
    loader.build().map_err(CliError::Config)
}

fn read_source(path: Option<&String>) -> Result<String, CliError> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).map_err(|e| CliError::Io(path.to_string(), e))
        }
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| CliError::Io("stdin".to_string(), e))?;
            Ok(source)
        }
    }
}

fn format_result(
    result: &SplitResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(result)
            } else {
                serde_json::to_string(result)
            };
            json.map(|s| s + "\n")
                .map_err(|e| CliError::Serialize(e.to_string()))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(result).map_err(|e| CliError::Serialize(e.to_string()))
        }
        OutputFormat::Simple => Ok(result.to_string()),
    }
}

#[cfg(feature = "mathml")]
fn handle_render_command(source: &str, delimiters: &DelimiterSet) -> Result<String, CliError> {
    use mathsplit::math::render::mathml::MathmlRenderer;
    use mathsplit::math::render::{render_math_in_text, RenderOptions};

    let rendered = render_math_in_text(
        source,
        delimiters,
        &MathmlRenderer,
        &RenderOptions::default(),
    )
    .map_err(|e| CliError::Render(e.to_string()))?;

    Ok(match rendered {
        Some(rendered) => rendered.to_markup(),
        None => source.to_string(),
    })
}

#[cfg(not(feature = "mathml"))]
fn handle_render_command(_source: &str, _delimiters: &DelimiterSet) -> Result<String, CliError> {
    Err(CliError::Render(
        "built without the `mathml` feature".to_string(),
    ))
}

fn handle_list_delimiters_command(delimiters: &DelimiterSet) {
    println!("Delimiters, in priority order:\n");
    for (index, spec) in delimiters.iter().enumerate() {
        println!("  {}. {}", index + 1, spec);
    }
}
