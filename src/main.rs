//! DQM layouts - CLI entry point
//!
//! Builds the built-in layout registry and prints it, standing in for the
//! dashboard host when inspecting or exporting the layout configuration.

use clap::{Parser, Subcommand};
use dqm_layouts::{layouts, logging, LayoutRegistry};
use std::process::ExitCode;

/// Layout registry dump tool for the detector-monitoring dashboard
#[derive(Parser)]
#[command(name = "dqm-layouts")]
#[command(version, about = "Layout registry dump tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the dqm-layouts CLI
#[derive(Subcommand)]
enum Commands {
    /// Print all layout keys, one per line
    List,

    /// Print the registry (or one layout) as pretty JSON
    Dump {
        /// Restrict output to a single layout key
        #[arg(long)]
        layout: Option<String>,
    },

    /// Build in strict mode, failing on duplicate or empty labels
    Check,
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            let mut registry = LayoutRegistry::new();
            if let Err(err) = layouts::register_all(&mut registry) {
                eprintln!("Error: {}", err);
                return ExitCode::FAILURE;
            }
            for key in registry.keys() {
                println!("{}", key);
            }
            ExitCode::SUCCESS
        }

        Commands::Dump { layout } => {
            let mut registry = LayoutRegistry::new();
            if let Err(err) = layouts::register_all(&mut registry) {
                eprintln!("Error: {}", err);
                return ExitCode::FAILURE;
            }

            let json = match layout {
                Some(key) => match registry.get(&key) {
                    Some(descriptor) => serde_json::to_string_pretty(descriptor),
                    None => {
                        eprintln!("Error: no layout registered under key: {}", key);
                        return ExitCode::FAILURE;
                    }
                },
                None => serde_json::to_string_pretty(&registry),
            };

            match json {
                Ok(text) => {
                    println!("{}", text);
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("Error: failed to serialize registry: {}", err);
                    ExitCode::FAILURE
                }
            }
        }

        Commands::Check => {
            let mut registry = LayoutRegistry::strict();
            match layouts::register_all(&mut registry) {
                Ok(()) => {
                    println!("ok: {} layouts, no duplicates", registry.len());
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("Error: {}", err);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verify the CLI configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_dump_layout_flag() {
        let cli = Cli::try_parse_from([
            "dqm-layouts",
            "dump",
            "--layout",
            "CTPPS/TrackingStrip/Layouts/active planes",
        ])
        .unwrap();
        match cli.command {
            Commands::Dump { layout } => {
                assert_eq!(
                    layout.as_deref(),
                    Some("CTPPS/TrackingStrip/Layouts/active planes")
                );
            }
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_dump_layout_flag_defaults_to_none() {
        let cli = Cli::try_parse_from(["dqm-layouts", "dump"]).unwrap();
        match cli.command {
            Commands::Dump { layout } => assert!(layout.is_none()),
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_missing_subcommand_fails() {
        let result = Cli::try_parse_from(["dqm-layouts"]);
        assert!(result.is_err());
    }
}
