//! Disk Scheduling Simulator - Main Entry Point
//!
//! Usage: disksim [OPTIONS] <input_file> <output_file> <policy> [limit]
//!
//! Arguments:
//!   input_file  - Trace of `arrival_time lbn request_size` lines
//!   output_file - File to write one result line per serviced request
//!   policy      - FCFS, SSTF, SCAN or CLOOK (case-insensitive)
//!   limit       - Optional maximum number of requests to read
//!
//! Options:
//!   -v, --verbose  Log run progress and a summary to stderr
//!   -h, --help     Print help information

use std::env;
use std::process;

use anyhow::{bail, Context, Result};
use log::{info, LevelFilter};

use disksim::io::{ResultWriter, Trace};
use disksim::Policy;

/// Command-line configuration
#[derive(Debug)]
struct Config {
    input_file: String,
    output_file: String,
    policy: Policy,
    limit: Option<usize>,
    verbose: bool,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    init_logging(config.verbose);

    if let Err(e) = run(&config) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Info } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn print_help(program: &str) {
    eprintln!("Disk Scheduling Simulator - Times a request trace under a scheduling policy");
    eprintln!();
    eprintln!("Usage: {} [OPTIONS] <input_file> <output_file> <policy> [limit]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  input_file  - Trace file, one `arrival_time lbn request_size` per line");
    eprintln!("  output_file - Output file for per-request results");
    eprintln!("  policy      - FCFS, SSTF, SCAN or CLOOK (case-insensitive)");
    eprintln!("  limit       - Read at most this many requests");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -v, --verbose  Log progress and a run summary (RUST_LOG overrides)");
    eprintln!("  -h, --help     Print this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} trace.txt out.txt SSTF", program);
    eprintln!("  {} -v trace.txt out.txt scan 1000", program);
}

fn parse_args(args: &[String]) -> Result<Config> {
    let program = args.first().map(String::as_str).unwrap_or("disksim");

    let mut verbose = false;
    let mut positional: Vec<&String> = Vec::new();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help(program);
                process::exit(0);
            }
            "-v" | "--verbose" => {
                verbose = true;
            }
            // a negative number is a limit, not an option
            _ if arg.starts_with('-') && arg.parse::<i64>().is_err() => {
                bail!("Unknown option: {}\nUse --help for usage information.", arg);
            }
            _ => {
                positional.push(arg);
            }
        }
    }

    if positional.len() != 3 && positional.len() != 4 {
        print_help(program);
        bail!("Expected 3 or 4 arguments, got {}", positional.len());
    }

    let policy: Policy = positional[2].parse()?;
    let limit = match positional.get(3) {
        Some(raw) => parse_limit(raw)?,
        None => None,
    };

    Ok(Config {
        input_file: positional[0].clone(),
        output_file: positional[1].clone(),
        policy,
        limit,
        verbose,
    })
}

/// A negative limit means "no limit"
fn parse_limit(raw: &str) -> Result<Option<usize>> {
    let limit: i64 = raw
        .parse()
        .with_context(|| format!("Invalid request limit: {}", raw))?;
    Ok(usize::try_from(limit).ok())
}

fn run(config: &Config) -> Result<()> {
    info!("Input file:  {}", config.input_file);
    info!("Output file: {}", config.output_file);
    info!("Policy:      {}", config.policy);
    if let Some(limit) = config.limit {
        info!("Limit:       {} requests", limit);
    }

    let mut trace = Trace::from_file(&config.input_file, config.limit)?;

    let mut writer = ResultWriter::create(&config.output_file)?;
    config
        .policy
        .run(&mut trace.requests, &mut writer)
        .with_context(|| format!("{} run aborted", config.policy))?;
    let summary = writer.finish()?;

    info!("Summary: {}", summary);
    info!("Results written to: {}", config.output_file);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("disksim").chain(list.iter().copied()).map(String::from).collect()
    }

    #[test]
    fn test_parse_args_without_limit() {
        let config = parse_args(&args(&["in.txt", "out.txt", "sstf"])).unwrap();
        assert_eq!(config.input_file, "in.txt");
        assert_eq!(config.output_file, "out.txt");
        assert_eq!(config.policy, Policy::Sstf);
        assert_eq!(config.limit, None);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_args_with_limit_and_verbose() {
        let config = parse_args(&args(&["-v", "in.txt", "out.txt", "CLOOK", "25"])).unwrap();
        assert_eq!(config.policy, Policy::CLook);
        assert_eq!(config.limit, Some(25));
        assert!(config.verbose);

        let config = parse_args(&args(&["in.txt", "out.txt", "scan", "0"])).unwrap();
        assert_eq!(config.limit, Some(0));
    }

    #[test]
    fn test_parse_args_negative_limit_means_unlimited() {
        let config = parse_args(&args(&["in.txt", "out.txt", "fcfs", "-1"])).unwrap();
        assert_eq!(config.policy, Policy::Fcfs);
        assert_eq!(config.limit, None);
    }

    #[test]
    fn test_parse_args_rejects_bad_limit() {
        let err = parse_args(&args(&["in.txt", "out.txt", "fcfs", "ten"])).unwrap_err();
        assert!(err.to_string().contains("Invalid request limit"));
    }

    #[test]
    fn test_parse_args_rejects_unknown_option() {
        let err = parse_args(&args(&["--fast", "in.txt", "out.txt", "fcfs"])).unwrap_err();
        assert!(err.to_string().contains("Unknown option: --fast"));
    }

    #[test]
    fn test_parse_args_rejects_unknown_policy() {
        let err = parse_args(&args(&["in.txt", "out.txt", "look"])).unwrap_err();
        assert!(err.to_string().contains("look"));
    }

    #[test]
    fn test_parse_args_wrong_count() {
        assert!(parse_args(&args(&["in.txt", "out.txt"])).is_err());
        assert!(parse_args(&args(&["a", "b", "fcfs", "1", "extra"])).is_err());
    }
}
