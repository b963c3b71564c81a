use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use bridge_cli::{run, Options};
use bridge_core::{init_tracing, init_tracing_with, Severity};
use clap::{value_parser, Arg, ArgAction, Command};

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let matches = Command::new("franca-to-ifex")
        .version(bridge_core::VERSION)
        .about("Translate a JSON-encoded Franca IDL package into IFEX YAML")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("Franca package as JSON")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .help("Write the YAML to a file instead of stdout")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("allow-unsupported")
                .long("allow-unsupported")
                .help("Report unsupported Franca features and drop them instead of failing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail on merge conflicts and any other error diagnostic")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .value_name("N")
                .help("Maximum node nesting depth")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    // Initialize logging
    if matches.get_flag("debug") {
        init_tracing_with("bridge_core=debug,bridge_franca=debug,bridge_cli=debug");
    } else {
        init_tracing();
    }

    let Some(input) = matches.get_one::<PathBuf>("input") else {
        anyhow::bail!("missing INPUT");
    };
    let mut options = Options::new(input.clone());
    options.output = matches.get_one::<PathBuf>("output").cloned();
    options.allow_unsupported = matches.get_flag("allow-unsupported");
    options.strict = matches.get_flag("strict");
    if let Some(depth) = matches.get_one::<usize>("max-depth") {
        options.max_depth = *depth;
    }

    let report = run(&options)?;

    // Each diagnostic was already logged when it was reported
    if !report.diagnostics.is_empty() {
        let errors = report
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        eprintln!(
            "{} warning(s), {} error(s)",
            report.diagnostics.len() - errors,
            errors
        );
    }
    if report.written_to.is_none() {
        print!("{}", report.yaml);
    }
    Ok(())
}
