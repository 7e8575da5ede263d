use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "tfplugin-gen")]
#[command(author, version, about = "Terraform provider spec to Plugin Framework Go code generator")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Generate Go schema and model code from a provider specification
  Generate(GenerateCommand),
  /// Parse a provider specification and summarize its schemas
  Validate {
    /// Path to the provider specification JSON file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path to the provider specification JSON file
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory the generated Go packages are written under
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// Go package name for every generated file (default: one package per
  /// schema directory)
  #[arg(long, value_name = "NAME")]
  pub package: Option<String>,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}
