// SPDX-License-Identifier: MIT

//! lingo: translation dictionary tooling
//!
//! Resolves dotted translation keys against a JSON dictionary, audits key
//! coverage per language, and generates enum source files of flattened
//! key names for compile-time-safe lookups.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use lingo::dictionary::Dictionary;
use lingo::enumgen;
use lingo::flatten::KeyFormat;
use lingo::resolver::{ResolveOptions, TextCase};
use lingo::session::{Session, SessionOptions};
use lingo::store::MemoryStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lingo")]
#[command(version)]
#[command(about = "Translation dictionary tooling: key resolution, coverage, and enum generation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an enum source file of flattened translation key names
    GenerateEnum {
        /// Path to the translations JSON file
        #[arg(value_name = "TRANSLATIONS")]
        translations: PathBuf,

        /// Name of the generated enum
        #[arg(short, long, default_value = enumgen::DEFAULT_ENUM_NAME)]
        name: String,

        /// Casing strategy for the flattened key names
        #[arg(short, long, value_enum, default_value = "snake")]
        format: KeyFormatArg,

        /// Directory the generated file is written to
        #[arg(short, long, default_value = enumgen::DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },

    /// Resolve a dotted key against one language of a dictionary
    Resolve {
        /// Path to the translations JSON file
        #[arg(value_name = "TRANSLATIONS")]
        translations: PathBuf,

        /// Dotted key to resolve (e.g. "navbar.home")
        #[arg(value_name = "KEY")]
        key: String,

        /// Language to resolve against (default: first in the file)
        #[arg(short, long)]
        language: Option<String>,

        /// Case transform applied to the resolved value
        #[arg(short, long, value_enum)]
        text_case: Option<TextCaseArg>,

        /// Return the raw key instead of the _key_ sentinel on a miss
        #[arg(long)]
        no_fallback_marker: bool,
    },

    /// List the language codes available in a dictionary
    Languages {
        /// Path to the translations JSON file
        #[arg(value_name = "TRANSLATIONS")]
        translations: PathBuf,
    },

    /// Report translation key coverage per language
    Coverage {
        /// Path to the translations JSON file
        #[arg(value_name = "TRANSLATIONS")]
        translations: PathBuf,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum KeyFormatArg {
    Snake,
    Camel,
    Pascal,
    Upper,
}

impl From<KeyFormatArg> for KeyFormat {
    fn from(arg: KeyFormatArg) -> Self {
        match arg {
            KeyFormatArg::Snake => KeyFormat::Snake,
            KeyFormatArg::Camel => KeyFormat::Camel,
            KeyFormatArg::Pascal => KeyFormat::Pascal,
            KeyFormatArg::Upper => KeyFormat::Upper,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum TextCaseArg {
    Capitalize,
    Uppercase,
    Lowercase,
}

impl From<TextCaseArg> for TextCase {
    fn from(arg: TextCaseArg) -> Self {
        match arg {
            TextCaseArg::Capitalize => TextCase::Capitalize,
            TextCaseArg::Uppercase => TextCase::Uppercase,
            TextCaseArg::Lowercase => TextCase::Lowercase,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::GenerateEnum {
            translations,
            name,
            format,
            output_dir,
        } => {
            let path = enumgen::write_enum(&translations, &name, format.into(), &output_dir)?;
            println!("{} {}", "Generated".green().bold(), path.display());
        }

        Commands::Resolve {
            translations,
            key,
            language,
            text_case,
            no_fallback_marker,
        } => {
            let dictionary = Dictionary::from_path(&translations)?;
            let fallback = language
                .or_else(|| dictionary.languages().first().cloned())
                .ok_or_else(|| anyhow!("no languages in {}", translations.display()))?;
            let session = Session::initialize(
                &fallback,
                dictionary,
                SessionOptions::default(),
                Box::new(MemoryStore::new()),
            )?;
            let options = ResolveOptions {
                text_case: text_case.map(Into::into),
                reject_default_fallback: no_fallback_marker,
                ..Default::default()
            };
            println!("{}", session.resolve_with(&key, &options)?);
        }

        Commands::Languages { translations } => {
            let dictionary = Dictionary::from_path(&translations)?;
            for language in dictionary.languages() {
                println!("{language}");
            }
        }

        Commands::Coverage { translations, json } => {
            let dictionary = Dictionary::from_path(&translations)?;
            let report = dictionary.coverage_report();

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", "Translation Coverage".bold());
                println!("  Total keys: {}", report.total_keys);
                for language in &report.languages {
                    let status = if language.missing.is_empty() {
                        "complete".green()
                    } else {
                        "missing keys".yellow()
                    };
                    println!(
                        "  {:<10} {:>5.1}% ({}/{}) {}",
                        language.language,
                        language.percent,
                        language.present,
                        report.total_keys,
                        status
                    );
                    for key in &language.missing {
                        println!("    - {key}");
                    }
                }
            }
        }
    }

    Ok(())
}
