use std::path::PathBuf;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{SchemaTarget, converter, render_schema_file, schema::GeneratorSchema},
  naming::FrameworkIdentifier,
  spec,
  ui::{Colors, GenerateCommand},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub package: Option<String>,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> Self {
    let GenerateCommand {
      input,
      output,
      package,
      quiet,
    } = command;

    Self {
      input,
      output,
      package,
      quiet,
    }
  }
}

/// One rendered Go file, addressed relative to the output directory.
#[derive(Debug)]
pub struct GeneratedFile {
  pub path: PathBuf,
  pub contents: String,
}

/// Renders every schema the specification declares. Any conversion error
/// aborts the whole run; no file is written for a partially converted spec.
pub fn render_specification(
  specification: &spec::Specification,
  package: Option<&str>,
) -> anyhow::Result<Vec<GeneratedFile>> {
  let mut files = Vec::new();

  if let Some(provider) = &specification.provider {
    let schema = converter::provider_schema(provider)?;
    files.push(render_one(SchemaTarget::Provider, &provider.name, &schema, package));
  }
  for resource in &specification.resources {
    let schema = converter::resource_schema(resource)?;
    files.push(render_one(SchemaTarget::Resource, &resource.name, &schema, package));
  }
  for datasource in &specification.datasources {
    let schema = converter::datasource_schema(datasource)?;
    files.push(render_one(SchemaTarget::DataSource, &datasource.name, &schema, package));
  }

  Ok(files)
}

fn render_one(
  target: SchemaTarget,
  name: &FrameworkIdentifier,
  schema: &GeneratorSchema,
  package: Option<&str>,
) -> GeneratedFile {
  let directory = match target {
    SchemaTarget::Provider => target.package_prefix().to_string(),
    SchemaTarget::Resource | SchemaTarget::DataSource => format!("{}_{name}", target.package_prefix()),
  };
  let package = package.map_or_else(|| directory.clone(), str::to_string);

  GeneratedFile {
    path: PathBuf::from(directory).join(format!("{name}_gen.go")),
    contents: render_schema_file(&package, name, schema),
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading provider spec from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(&"Generating Go schema code...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, specification: &spec::Specification) {
    if self.config.quiet {
      return;
    }

    if specification.provider.is_some() {
      self.stat("Provider schemas:", "1".to_string());
    }
    if !specification.resources.is_empty() {
      self.stat("Resource schemas:", specification.resources.len().to_string());
    }
    if !specification.datasources.is_empty() {
      self.stat("Data source schemas:", specification.datasources.len().to_string());
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self, file_count: usize) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        format!("Successfully generated {file_count} Go source files").with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let data = tokio::fs::read(&config.input).await?;
  let specification = spec::parse(&data)?;

  logger.log_generating();
  let files = render_specification(&specification, config.package.as_deref())?;
  logger.print_statistics(&specification);

  logger.log_writing();
  for file in &files {
    let path = config.output.join(&file.path);
    if let Some(parent) = path.parent() {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, &file.contents).await?;
  }

  logger.log_success(files.len());
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_specification() -> spec::Specification {
    spec::parse(
      br#"{
        "provider": { "name": "example" },
        "resources": [
          {
            "name": "thing",
            "schema": {
              "attributes": [
                { "name": "enabled", "bool": { "computed_optional_required": "optional" } }
              ]
            }
          }
        ],
        "datasources": [
          {
            "name": "thing",
            "schema": {
              "attributes": [
                { "name": "id", "string": { "computed_optional_required": "computed" } }
              ]
            }
          }
        ]
      }"#,
    )
    .expect("spec should parse")
  }

  #[test]
  fn files_land_in_per_kind_directories() {
    let files = render_specification(&sample_specification(), None).unwrap();

    let paths: Vec<_> = files.iter().map(|f| f.path.to_str().unwrap()).collect();
    assert_eq!(
      paths,
      vec![
        "provider/example_gen.go",
        "resource_thing/thing_gen.go",
        "datasource_thing/thing_gen.go"
      ]
    );
  }

  #[test]
  fn package_defaults_to_the_directory_name() {
    let files = render_specification(&sample_specification(), None).unwrap();

    assert!(files[0].contents.contains("\npackage provider\n"));
    assert!(files[1].contents.contains("\npackage resource_thing\n"));
    assert!(files[2].contents.contains("\npackage datasource_thing\n"));
  }

  #[test]
  fn package_flag_overrides_every_file() {
    let files = render_specification(&sample_specification(), Some("generated")).unwrap();

    for file in &files {
      assert!(file.contents.contains("\npackage generated\n"), "{:?}", file.path);
    }
  }

  #[test]
  fn conversion_errors_abort_before_any_file_is_produced() {
    let specification = spec::parse(
      br#"{
        "resources": [
          {
            "name": "thing",
            "schema": {
              "attributes": [
                { "name": "Enabled", "bool": { "computed_optional_required": "optional" } }
              ]
            }
          }
        ]
      }"#,
    )
    .unwrap();

    let err = render_specification(&specification, None).unwrap_err();
    assert!(err.to_string().contains("Enabled"));
  }

  #[tokio::test]
  async fn generated_files_are_written_under_the_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("spec.json");
    tokio::fs::write(
      &input,
      r#"{ "provider": { "name": "example" } }"#,
    )
    .await
    .unwrap();

    let config = GenerateConfig {
      input,
      output: dir.path().join("out"),
      package: None,
      quiet: true,
    };
    let colors = Colors::new(false, crate::ui::colors::Theme::Dark);
    generate_code(config, &colors).await.unwrap();

    let written = tokio::fs::read_to_string(dir.path().join("out/provider/example_gen.go"))
      .await
      .unwrap();
    assert!(written.starts_with("// Code generated by tfplugin-gen. DO NOT EDIT."));
    assert!(written.contains("func ExampleProviderSchema(ctx context.Context) schema.Schema {"));
  }
}
