use std::path::PathBuf;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::{converter, schema::GeneratorSchema},
  spec,
  ui::{Colors, colors::IntoComfyColor, term_width},
};

#[derive(Debug)]
struct SchemaSummary {
  kind: &'static str,
  name: String,
  attributes: usize,
  blocks: usize,
}

impl SchemaSummary {
  fn new(kind: &'static str, name: String, schema: &GeneratorSchema) -> Self {
    Self {
      kind,
      name,
      attributes: schema.attributes.len(),
      blocks: schema.blocks.len(),
    }
  }
}

fn summarize(specification: &spec::Specification) -> anyhow::Result<Vec<SchemaSummary>> {
  let mut summaries = Vec::new();

  if let Some(provider) = &specification.provider {
    let schema = converter::provider_schema(provider)?;
    summaries.push(SchemaSummary::new("provider", provider.name.to_string(), &schema));
  }
  for resource in &specification.resources {
    let schema = converter::resource_schema(resource)?;
    summaries.push(SchemaSummary::new("resource", resource.name.to_string(), &schema));
  }
  for datasource in &specification.datasources {
    let schema = converter::datasource_schema(datasource)?;
    summaries.push(SchemaSummary::new("data source", datasource.name.to_string(), &schema));
  }

  Ok(summaries)
}

pub async fn validate_spec(input: &PathBuf, colors: &Colors) -> anyhow::Result<()> {
  let data = tokio::fs::read(input).await?;
  let specification = spec::parse(&data)?;
  let summaries = summarize(&specification)?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  header.add_cell(Cell::new("KIND").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("NAME").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("ATTRIBUTES").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("BLOCKS").fg(IntoComfyColor::into(colors.label())));
  table.set_header(header);

  for summary in summaries {
    let mut row = Row::new();
    row.add_cell(Cell::new(summary.kind).fg(IntoComfyColor::into(colors.accent())));
    row.add_cell(
      Cell::new(summary.name)
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(summary.attributes)
        .fg(IntoComfyColor::into(colors.primary()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(
      Cell::new(summary.blocks)
        .fg(IntoComfyColor::into(colors.primary()))
        .set_alignment(CellAlignment::Right),
    );
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn summaries_count_top_level_attributes_and_blocks() {
    let specification = spec::parse(
      br#"{
        "provider": { "name": "example" },
        "resources": [
          {
            "name": "thing",
            "schema": {
              "attributes": [
                { "name": "a", "bool": { "computed_optional_required": "optional" } },
                { "name": "b", "string": { "computed_optional_required": "required" } }
              ],
              "blocks": [
                { "name": "settings", "single_nested": {} }
              ]
            }
          }
        ]
      }"#,
    )
    .unwrap();

    let summaries = summarize(&specification).unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].kind, "provider");
    assert_eq!(summaries[0].attributes, 0);
    assert_eq!(summaries[1].name, "thing");
    assert_eq!(summaries[1].attributes, 2);
    assert_eq!(summaries[1].blocks, 1);
  }

  #[test]
  fn invalid_schemas_fail_validation() {
    let specification = spec::parse(
      br#"{
        "resources": [
          {
            "name": "thing",
            "schema": {
              "attributes": [
                { "name": "dup", "bool": { "computed_optional_required": "optional" } },
                { "name": "dup", "string": { "computed_optional_required": "required" } }
              ]
            }
          }
        ]
      }"#,
    )
    .unwrap();

    let err = summarize(&specification).unwrap_err();
    assert!(err.to_string().contains("dup"));
  }
}
