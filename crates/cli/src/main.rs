mod config;
mod stats;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tokenc_codegen::{generate, write_artifacts};
use tokenc_core::compile::{compile, CompileOptions, Compilation};
use tokenc_core::loader::{DirectorySource, TokenSource};
use tokenc_core::token::TokenRecord;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Design token compiler.
#[derive(Parser)]
#[command(name = "tokenc", version, about = "Design token compiler")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile token documents and write the CSS surfaces
    Build {
        /// Tokens directory (overrides the configured one)
        tokens: Option<PathBuf>,
        /// Output directory for generated stylesheets
        #[arg(long)]
        out: Option<PathBuf>,
        /// Path to a tokenc.toml configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Compile token documents and report problems without writing
    Check {
        /// Tokens directory (overrides the configured one)
        tokens: Option<PathBuf>,
        /// Path to a tokenc.toml configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show token statistics and a color palette preview
    Stats {
        /// Tokens directory (overrides the configured one)
        tokens: Option<PathBuf>,
        /// Path to a tokenc.toml configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            tokens,
            out,
            config,
        } => {
            cmd_build(
                tokens.as_deref(),
                out.as_deref(),
                config.as_deref(),
                cli.output,
                cli.quiet,
            );
        }
        Commands::Check { tokens, config } => {
            cmd_check(tokens.as_deref(), config.as_deref(), cli.output, cli.quiet);
        }
        Commands::Stats { tokens, config } => {
            stats::cmd_stats(tokens.as_deref(), config.as_deref(), cli.quiet);
        }
    }
}

fn cmd_build(
    tokens: Option<&Path>,
    out: Option<&Path>,
    config_path: Option<&Path>,
    output: OutputFormat,
    quiet: bool,
) {
    let settings = load_settings_or_exit(tokens, out, config_path, output, quiet);
    let (_, compilation) = load_and_compile(&settings, output, quiet);
    report_warnings(&compilation, output, quiet);

    let artifacts = generate(&compilation, &settings.surface);
    if let Err(e) = write_artifacts(&artifacts, &settings.out_dir) {
        report_error(&e.to_string(), output, quiet);
        process::exit(1);
    }

    if quiet {
        return;
    }
    match output {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "out": settings.out_dir.display().to_string(),
                "artifacts": artifacts.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
                "bindings": binding_count(&compilation),
                "warnings": warning_messages(&compilation),
            });
            println!("{}", pretty(&summary));
        }
        OutputFormat::Text => {
            for artifact in &artifacts {
                println!("wrote {}", settings.out_dir.join(&artifact.name).display());
            }
            println!(
                "{} bindings, {} warnings",
                binding_count(&compilation),
                compilation.warnings.len()
            );
        }
    }
}

fn cmd_check(
    tokens: Option<&Path>,
    config_path: Option<&Path>,
    output: OutputFormat,
    quiet: bool,
) {
    let settings = load_settings_or_exit(tokens, None, config_path, output, quiet);
    let (records, compilation) = load_and_compile(&settings, output, quiet);
    report_warnings(&compilation, output, quiet);

    if quiet {
        return;
    }
    let documents: HashSet<&str> = records.iter().map(|r| r.file.as_str()).collect();
    match output {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "documents": documents.len(),
                "tokens": records.len(),
                "bindings": binding_count(&compilation),
                "warnings": warning_messages(&compilation),
            });
            println!("{}", pretty(&summary));
        }
        OutputFormat::Text => {
            println!("Token Check");
            println!("===========");
            println!();
            println!("  Documents: {}", documents.len());
            println!("  Tokens: {}", records.len());
            println!("  Root bindings: {}", compilation.root.bindings.len());
            for block in &compilation.modes {
                println!(
                    "  {} bindings: {}",
                    block.mode.as_deref().unwrap_or("default"),
                    block.bindings.len()
                );
            }
            println!("  Warnings: {}", compilation.warnings.len());
        }
    }
}

fn load_settings_or_exit(
    tokens: Option<&Path>,
    out: Option<&Path>,
    config_path: Option<&Path>,
    output: OutputFormat,
    quiet: bool,
) -> config::BuildSettings {
    match config::load_settings(tokens, out, config_path) {
        Ok(settings) => settings,
        Err(msg) => {
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}

fn load_and_compile(
    settings: &config::BuildSettings,
    output: OutputFormat,
    quiet: bool,
) -> (Vec<TokenRecord>, Compilation) {
    let records = match DirectorySource::new(&settings.tokens_dir).load() {
        Ok(records) => records,
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            process::exit(1);
        }
    };
    let options = CompileOptions {
        modes: settings.modes.clone(),
    };
    match compile(&records, &options) {
        Ok(compilation) => (records, compilation),
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            process::exit(1);
        }
    }
}

fn report_warnings(compilation: &Compilation, output: OutputFormat, quiet: bool) {
    // JSON mode carries warnings inside the summary object instead.
    if quiet || output != OutputFormat::Text {
        return;
    }
    for warning in &compilation.warnings {
        eprintln!("warning: {}", warning);
    }
}

fn binding_count(compilation: &Compilation) -> usize {
    compilation.root.bindings.len()
        + compilation
            .modes
            .iter()
            .map(|block| block.bindings.len())
            .sum::<usize>()
}

fn warning_messages(compilation: &Compilation) -> Vec<String> {
    compilation
        .warnings
        .iter()
        .map(|w| w.to_string())
        .collect()
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e))
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{{\"error\": \"{}\"}}", msg.replace('"', "\\\""));
        }
    }
}
