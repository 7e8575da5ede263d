pub mod converter;
pub mod model;
pub mod schema;

use thiserror::Error;

use crate::naming::FrameworkIdentifier;
use schema::GeneratorSchema;

/// Conversion failures. The first error aborts the whole schema run; there is
/// no partial output mode because a partially generated schema does not
/// compile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
  #[error("\"{name}\" is not a valid attribute/block name")]
  InvalidIdentifier { name: String },
  #[error("duplicate attribute/block name: \"{name}\"")]
  DuplicateName { name: String },
}

/// Which framework surface a schema is generated for. Controls the schema
/// package import and whether `Default`/`PlanModifiers` apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum SchemaTarget {
  Provider,
  Resource,
  DataSource,
}

impl SchemaTarget {
  #[must_use]
  pub fn schema_import(self) -> &'static str {
    match self {
      Self::Provider => "github.com/hashicorp/terraform-plugin-framework/provider/schema",
      Self::Resource => "github.com/hashicorp/terraform-plugin-framework/resource/schema",
      Self::DataSource => "github.com/hashicorp/terraform-plugin-framework/datasource/schema",
    }
  }

  /// Plan modifiers exist on resource schemas only.
  #[must_use]
  pub fn supports_plan_modifiers(self) -> bool {
    matches!(self, Self::Resource)
  }

  /// Defaults exist on resource schemas only.
  #[must_use]
  pub fn supports_defaults(self) -> bool {
    matches!(self, Self::Resource)
  }

  /// Suffix of the generated schema function name, e.g.
  /// `ExampleResourceSchema`.
  #[must_use]
  pub fn function_suffix(self) -> &'static str {
    match self {
      Self::Provider => "Provider",
      Self::Resource => "Resource",
      Self::DataSource => "DataSource",
    }
  }

  /// Directory prefix for generated files, mirroring the conventional
  /// per-schema Go package layout.
  #[must_use]
  pub fn package_prefix(self) -> &'static str {
    match self {
      Self::Provider => "provider",
      Self::Resource => "resource",
      Self::DataSource => "datasource",
    }
  }
}

/// One complete generated Go source file: header, package clause, merged
/// import block, schema function, then the model source. The output is not
/// gofmt-formatted; indentation and import grouping are the formatter's job.
#[must_use]
pub fn render_schema_file(package: &str, name: &FrameworkIdentifier, schema: &GeneratorSchema) -> String {
  let mut imports = schema.imports();
  imports.extend(model::imports(name, schema));

  format!(
    "// Code generated by tfplugin-gen. DO NOT EDIT.\n\npackage {package}\n\n{}\n{}\n{}",
    imports.render(),
    schema.schema_function(name),
    model::render(name, schema),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{generator::converter::SchemaConverter, spec};

  #[test]
  fn rendered_file_carries_header_package_imports_and_bodies() {
    let parsed: spec::Schema = serde_json::from_str(
      r#"{ "attributes": [ { "name": "enabled", "bool": { "computed_optional_required": "optional" } } ] }"#,
    )
    .unwrap();
    let schema = SchemaConverter::new(SchemaTarget::Resource).convert(&parsed).unwrap();

    let out = render_schema_file("resource_example", &FrameworkIdentifier::new("example"), &schema);
    assert!(out.starts_with("// Code generated by tfplugin-gen. DO NOT EDIT.\n\npackage resource_example\n\n"));
    assert!(out.contains("import (\n\"context\"\n\"github.com/hashicorp/terraform-plugin-framework/resource/schema\"\n\"github.com/hashicorp/terraform-plugin-framework/types\"\n)\n"));
    assert!(out.contains("func ExampleResourceSchema(ctx context.Context) schema.Schema {"));
    assert!(out.contains("type ExampleModel struct {\nEnabled types.Bool `tfsdk:\"enabled\"`\n}\n"));
  }
}
