//! Rendering of the model side of a generated schema file: the `tfsdk`-tagged
//! model struct, the generated type/value pairs, and their conversion
//! helpers.

mod templates;
mod to_from;
mod value_types;

use itertools::Itertools;

use super::schema::{
  GeneratorSchema, Imports,
  imports::{ATTR_IMPORT, BASETYPES_IMPORT, BIG_IMPORT, DIAG_IMPORT, FMT_IMPORT, TFTYPES_IMPORT, TYPES_IMPORT},
};
use crate::naming::FrameworkIdentifier;

/// The full model source for one schema: model struct first, then every
/// type/value pair in deterministic walk order.
#[must_use]
pub fn render(name: &FrameworkIdentifier, schema: &GeneratorSchema) -> String {
  let mut out = model_struct(name, schema);
  let pairs = value_types::render_all(name, schema);
  if !pairs.is_empty() {
    out.push('\n');
    out.push_str(&pairs);
  }
  out
}

/// `type <Pascal>Model struct { ... }` with one field per top-level attribute
/// and block.
#[must_use]
pub fn model_struct(name: &FrameworkIdentifier, schema: &GeneratorSchema) -> String {
  let fields = [
    schema.attributes.model_fields(name),
    schema.blocks.model_fields(name),
  ]
  .into_iter()
  .filter(|fields| !fields.is_empty())
  .join("\n");

  if fields.is_empty() {
    format!("type {}Model struct {{\n}}\n", name.to_pascal_case())
  } else {
    format!("type {}Model struct {{\n{fields}\n}}\n", name.to_pascal_case())
  }
}

/// Imports the model source adds on top of the schema function's own. Only
/// packages the emitted text actually references are included; an unused Go
/// import would fail the consumer's build.
#[must_use]
pub fn imports(name: &FrameworkIdentifier, schema: &GeneratorSchema) -> Imports {
  let mut imports = Imports::new();

  let model_uses_types = schema
    .attributes
    .iter()
    .any(|(attr_name, attribute)| attribute.model_type(attr_name, name).starts_with("types."))
    || schema
      .blocks
      .iter()
      .any(|(block_name, block)| block.model_type(block_name, name).starts_with("types."));
  if model_uses_types {
    imports.add_path(TYPES_IMPORT);
  }

  let pairs = value_types::collect_pairs(name, schema);
  if !pairs.is_empty() {
    imports.add_path(FMT_IMPORT);
    imports.add_path(ATTR_IMPORT);
    imports.add_path(DIAG_IMPORT);
    imports.add_path(BASETYPES_IMPORT);
    imports.add_path(TFTYPES_IMPORT);
  }
  // Object pairs and wrapper From helpers both construct `types.` values.
  if pairs.iter().any(|pair| {
    matches!(
      pair,
      value_types::Pair::Object(_) | value_types::Pair::Wrapper { converts: Some(_), .. }
    )
  }) {
    imports.add_path(TYPES_IMPORT);
  }
  if pairs.iter().any(|pair| {
    matches!(
      pair,
      value_types::Pair::Wrapper {
        converts: Some(value_types::Primitive::Number),
        ..
      }
    )
  }) {
    imports.add_path(BIG_IMPORT);
  }
  imports
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    generator::{SchemaTarget, converter::SchemaConverter},
    spec,
  };

  fn convert(json: &str) -> GeneratorSchema {
    let schema: spec::Schema = serde_json::from_str(json).expect("schema json should parse");
    SchemaConverter::new(SchemaTarget::Resource)
      .convert(&schema)
      .expect("conversion should succeed")
  }

  #[test]
  fn model_struct_lists_attributes_then_blocks() {
    let schema = convert(
      r#"{
        "attributes": [
          { "name": "name", "string": { "computed_optional_required": "required" } },
          { "name": "count", "int64": { "computed_optional_required": "optional" } }
        ],
        "blocks": [
          { "name": "timeouts", "single_nested": {} }
        ]
      }"#,
    );

    let out = model_struct(&FrameworkIdentifier::new("example"), &schema);
    assert_eq!(
      out,
      "type ExampleModel struct {\n\
       Count types.Int64 `tfsdk:\"count\"`\n\
       Name types.String `tfsdk:\"name\"`\n\
       Timeouts TimeoutsValue `tfsdk:\"timeouts\"`\n\
       }\n"
    );
  }

  #[test]
  fn nested_attribute_generates_object_pair() {
    let schema = convert(
      r#"{
        "attributes": [
          {
            "name": "settings",
            "single_nested": {
              "computed_optional_required": "optional",
              "attributes": [
                { "name": "enabled", "bool": { "computed_optional_required": "optional" } }
              ]
            }
          }
        ]
      }"#,
    );

    let out = render(&FrameworkIdentifier::new("example"), &schema);
    assert!(out.contains("type SettingsType struct {\nbasetypes.ObjectType\n}"));
    assert!(out.contains("type SettingsValue struct {\nEnabled basetypes.BoolValue `tfsdk:\"enabled\"`\nstate attr.ValueState\n}"));
    assert!(out.contains("func NewSettingsValueNull() SettingsValue {"));
    assert!(out.contains("func NewSettingsValueUnknown() SettingsValue {"));
    assert!(out.contains("\"Missing SettingsValue Attribute Value\""));
    assert!(out.contains("\"Invalid SettingsValue Attribute Type\""));
    assert!(out.contains("\"Extra SettingsValue Attribute Value\""));
    assert!(out.contains("enabledVal, ok := enabledAttribute.(basetypes.BoolValue)"));
  }

  #[test]
  fn primitive_with_external_type_generates_wrapper_pair() {
    let schema = convert(
      r#"{
        "attributes": [
          {
            "name": "region",
            "string": {
              "computed_optional_required": "required",
              "associated_external_type": { "type": "*string" }
            }
          }
        ]
      }"#,
    );

    let out = render(&FrameworkIdentifier::new("example"), &schema);
    assert!(out.contains("type RegionType struct {\nbasetypes.StringType\n}"));
    assert!(out.contains("func (t RegionType) ValueFromString(ctx context.Context, in basetypes.StringValue) (basetypes.StringValuable, diag.Diagnostics) {"));
    assert!(out.contains("type RegionValue struct {\nbasetypes.StringValue\n}"));
    assert!(out.contains("func (v RegionValue) Type(ctx context.Context) attr.Type {\nreturn RegionType{}\n}"));
  }

  #[test]
  fn wrapper_pair_converts_to_and_from_the_external_type() {
    let schema = convert(
      r#"{
        "attributes": [
          {
            "name": "region",
            "string": {
              "computed_optional_required": "required",
              "associated_external_type": { "import": { "path": "example.com/apisdk" }, "type": "*apisdk.Region" }
            }
          }
        ]
      }"#,
    );

    let out = render(&FrameworkIdentifier::new("example"), &schema);
    assert!(out.contains("func (v RegionValue) ToApisdkRegion(ctx context.Context) (*apisdk.Region, diag.Diagnostics) {"));
    assert!(out.contains("return (*apisdk.Region)(v.ValueStringPointer()), diags"));
    assert!(
      out.contains("func (v RegionValue) FromApisdkRegion(ctx context.Context, apiObject *apisdk.Region) (RegionValue, diag.Diagnostics) {")
    );
    assert!(out.contains("StringValue: types.StringPointerValue((*string)(apiObject)),"));
  }

  #[test]
  fn explicit_custom_type_suppresses_generation() {
    let schema = convert(
      r#"{
        "attributes": [
          {
            "name": "settings",
            "single_nested": {
              "computed_optional_required": "optional",
              "custom_type": { "type": "sdk.SettingsType{}", "value_type": "sdk.SettingsValue" }
            }
          }
        ]
      }"#,
    );

    let out = render(&FrameworkIdentifier::new("example"), &schema);
    assert!(!out.contains("type SettingsType struct"));
    assert!(!out.contains("type SettingsValue struct"));
  }

  #[test]
  fn to_from_helpers_map_primitive_children_only() {
    let schema = convert(
      r#"{
        "attributes": [
          {
            "name": "rule",
            "single_nested": {
              "computed_optional_required": "optional",
              "associated_external_type": { "import": { "path": "example.com/apisdk" }, "type": "*apisdk.Rule" },
              "attributes": [
                { "name": "action", "string": { "computed_optional_required": "required" } },
                { "name": "priority", "int64": { "computed_optional_required": "optional" } },
                { "name": "tags", "list": { "computed_optional_required": "optional", "element_type": { "string": {} } } }
              ]
            }
          }
        ]
      }"#,
    );

    let out = render(&FrameworkIdentifier::new("example"), &schema);
    assert!(out.contains("func (v RuleValue) ToApisdkRule(ctx context.Context) (*apisdk.Rule, diag.Diagnostics) {"));
    assert!(out.contains("return &apisdk.Rule{\nAction: v.Action.ValueStringPointer(),\nPriority: v.Priority.ValueInt64Pointer(),\n}, diags"));
    assert!(out.contains("func (v RuleValue) FromApisdkRule(ctx context.Context, apiObject *apisdk.Rule) (RuleValue, diag.Diagnostics) {"));
    assert!(out.contains("Action: types.StringPointerValue(apiObject.Action),"));
    assert!(!out.contains("Tags: v.Tags"));
  }

  #[test]
  fn imports_match_emitted_content() {
    let empty = convert(r#"{}"#);
    assert!(imports(&FrameworkIdentifier::new("example"), &empty).is_empty());

    let plain = convert(
      r#"{ "attributes": [ { "name": "name", "string": { "computed_optional_required": "required" } } ] }"#,
    );
    let plain_imports = imports(&FrameworkIdentifier::new("example"), &plain);
    assert!(plain_imports.contains(TYPES_IMPORT));
    assert!(!plain_imports.contains(BASETYPES_IMPORT));

    let nested = convert(
      r#"{ "attributes": [ { "name": "settings", "single_nested": { "computed_optional_required": "optional" } } ] }"#,
    );
    let nested_imports = imports(&FrameworkIdentifier::new("example"), &nested);
    for path in [TYPES_IMPORT, BASETYPES_IMPORT, ATTR_IMPORT, DIAG_IMPORT, FMT_IMPORT, TFTYPES_IMPORT] {
      assert!(nested_imports.contains(path), "missing {path}");
    }

    let wrapped = convert(
      r#"{ "attributes": [ { "name": "score", "number": { "computed_optional_required": "optional", "associated_external_type": { "type": "*apisdk.Score" } } } ] }"#,
    );
    let wrapped_imports = imports(&FrameworkIdentifier::new("example"), &wrapped);
    assert!(wrapped_imports.contains(TYPES_IMPORT));
    assert!(wrapped_imports.contains(BIG_IMPORT));
  }
}
