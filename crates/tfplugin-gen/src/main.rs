#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
use clap::Parser;

use crate::ui::{Cli, Colors, Commands, colors};

mod generator;
mod naming;
mod spec;
mod ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  match cli.command {
    Commands::Generate(command) => {
      let config = ui::commands::GenerateConfig::from_command(command);
      ui::commands::generate_code(config, &colors).await?;
    }
    Commands::Validate { input } => ui::commands::validate_spec(&input, &colors).await?,
  }

  Ok(())
}
