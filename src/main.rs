use clap::{Arg, ArgAction, Command};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use brandcheck::checking::{Checker, DEFAULT_SENSITIVITY};
use brandcheck::output;
use brandcheck::problem::{concise_issue, concise_loading_error, full_issue};
use brandcheck::scanning;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("brandcheck")
        .version(VERSION)
        .propagate_version(true)
        .about("Integrity checks for branding tokens in localized strings.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("check")
                .about("Check that branding tokens survived translation intact")
                .arg(
                    Arg::new("sensitivity")
                        .long("sensitivity")
                        .value_parser(clap::value_parser!(f64))
                        .default_value("0.2")
                        .help("Fraction of a token name's length tolerated as edit distance when hunting for misspellings."),
                )
                .arg(
                    Arg::new("concise")
                        .long("concise")
                        .action(ArgAction::SetTrue)
                        .help("Report each issue as a single line instead of with full details."),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit the issues as a JSON array instead of diagnostics."),
                )
                .arg(
                    Arg::new("source")
                        .required(true)
                        .help("The file containing the original, untranslated string."),
                )
                .arg(
                    Arg::new("target")
                        .required(true)
                        .help("The file containing the translated string to check."),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("List the branding tokens present in a file")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file to scan for (!Name) tokens."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let sensitivity = *submatches
                .get_one::<f64>("sensitivity")
                .unwrap_or(&DEFAULT_SENSITIVITY);
            let concise = submatches.get_flag("concise");
            let json = submatches.get_flag("json");

            let source = submatches
                .get_one::<String>("source")
                .unwrap();
            let target = submatches
                .get_one::<String>("target")
                .unwrap();

            run_check(
                Path::new(source),
                Path::new(target),
                sensitivity,
                concise,
                json,
            );
        }
        Some(("tokens", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .unwrap();

            run_tokens(Path::new(filename));
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: brandcheck [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn run_check(source: &Path, target: &Path, sensitivity: f64, concise: bool, json: bool) {
    debug!("loading source {}", source.display());
    let source_text = match scanning::load(source) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    debug!("loading target {}", target.display());
    let target_text = match scanning::load(target) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    let checker = Checker::new(sensitivity);
    let report = checker.check(&source_text, &target_text);

    debug!(
        "checked {} source tokens against {} target tokens",
        report
            .source_tokens
            .len(),
        report
            .target_tokens
            .len()
    );

    if json {
        let mut stdout = std::io::stdout();
        if let Err(error) = output::write_report(&report.issues, &mut stdout) {
            eprintln!("error: Failed writing report: {}", error);
            std::process::exit(1);
        }
    } else {
        for issue in &report.issues {
            if concise {
                println!("{}", concise_issue(issue, target, &target_text));
            } else {
                println!("{}\n", full_issue(issue, target, &target_text));
            }
        }
    }

    if !report
        .issues
        .is_empty()
    {
        std::process::exit(1);
    }
}

fn run_tokens(filename: &Path) {
    let content = match scanning::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    for name in scanning::extract_token_names(&content) {
        println!("{}", name);
    }
}
