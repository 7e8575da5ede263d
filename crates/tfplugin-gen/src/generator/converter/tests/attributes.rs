use super::support::{convert, convert_err};
use crate::{
  generator::{SchemaError, SchemaTarget, schema::GeneratorSchemaType},
  naming::FrameworkIdentifier,
};

#[test]
fn every_kind_converts_to_its_own_node() {
  let schema = convert(
    SchemaTarget::Resource,
    r#"{
      "attributes": [
        { "name": "a_bool", "bool": { "computed_optional_required": "required" } },
        { "name": "a_float", "float64": { "computed_optional_required": "required" } },
        { "name": "a_int", "int64": { "computed_optional_required": "required" } },
        { "name": "a_number", "number": { "computed_optional_required": "required" } },
        { "name": "a_string", "string": { "computed_optional_required": "required" } },
        { "name": "a_list", "list": { "computed_optional_required": "required", "element_type": { "string": {} } } },
        { "name": "a_map", "map": { "computed_optional_required": "required", "element_type": { "bool": {} } } },
        { "name": "a_set", "set": { "computed_optional_required": "required", "element_type": { "int64": {} } } },
        { "name": "a_object", "object": {
          "computed_optional_required": "required",
          "attribute_types": [ { "name": "inner", "string": {} } ]
        } },
        { "name": "a_list_nested", "list_nested": { "computed_optional_required": "required", "nested_object": {} } },
        { "name": "a_map_nested", "map_nested": { "computed_optional_required": "required", "nested_object": {} } },
        { "name": "a_set_nested", "set_nested": { "computed_optional_required": "required", "nested_object": {} } },
        { "name": "a_single_nested", "single_nested": { "computed_optional_required": "required" } }
      ]
    }"#,
  );

  let expect = [
    ("a_bool", GeneratorSchemaType::BoolAttribute),
    ("a_float", GeneratorSchemaType::Float64Attribute),
    ("a_int", GeneratorSchemaType::Int64Attribute),
    ("a_number", GeneratorSchemaType::NumberAttribute),
    ("a_string", GeneratorSchemaType::StringAttribute),
    ("a_list", GeneratorSchemaType::ListAttribute),
    ("a_map", GeneratorSchemaType::MapAttribute),
    ("a_set", GeneratorSchemaType::SetAttribute),
    ("a_object", GeneratorSchemaType::ObjectAttribute),
    ("a_list_nested", GeneratorSchemaType::ListNestedAttribute),
    ("a_map_nested", GeneratorSchemaType::MapNestedAttribute),
    ("a_set_nested", GeneratorSchemaType::SetNestedAttribute),
    ("a_single_nested", GeneratorSchemaType::SingleNestedAttribute),
  ];
  assert_eq!(schema.attributes.len(), expect.len());
  for (name, kind) in expect {
    let attribute = schema
      .attributes
      .get(&FrameworkIdentifier::new(name))
      .unwrap_or_else(|| panic!("{name} should convert"));
    assert_eq!(attribute.kind(), kind, "{name}");
  }
}

#[test]
fn duplicate_names_abort_conversion() {
  let err = convert_err(
    SchemaTarget::Resource,
    r#"{
      "attributes": [
        { "name": "twice", "bool": {} },
        { "name": "twice", "string": {} }
      ]
    }"#,
  );
  assert_eq!(
    err,
    SchemaError::DuplicateName {
      name: "twice".to_string()
    }
  );
}

#[test]
fn duplicate_names_are_caught_in_nested_objects() {
  let err = convert_err(
    SchemaTarget::Resource,
    r#"{
      "attributes": [
        {
          "name": "outer",
          "list_nested": {
            "nested_object": {
              "attributes": [
                { "name": "inner", "bool": {} },
                { "name": "inner", "int64": {} }
              ]
            }
          }
        }
      ]
    }"#,
  );
  assert_eq!(
    err,
    SchemaError::DuplicateName {
      name: "inner".to_string()
    }
  );
}

#[test]
fn invalid_identifiers_are_rejected() {
  for bad in ["Upper", "has-dash", "2fast", ""] {
    let err = convert_err(
      SchemaTarget::Resource,
      &format!(r#"{{ "attributes": [ {{ "name": "{bad}", "bool": {{}} }} ] }}"#),
    );
    assert_eq!(
      err,
      SchemaError::InvalidIdentifier {
        name: bad.to_string()
      },
      "{bad:?} should be rejected"
    );
  }
}

#[test]
fn defaults_and_plan_modifiers_survive_on_resources() {
  let schema = convert(
    SchemaTarget::Resource,
    r#"{
      "attributes": [
        {
          "name": "enabled",
          "bool": {
            "computed_optional_required": "computed_optional",
            "default": { "static": true },
            "plan_modifiers": [ { "custom": { "schema_definition": "boolplanmodifier.RequiresReplace()" } } ]
          }
        }
      ]
    }"#,
  );

  let out = schema.schema_function(&FrameworkIdentifier::new("example"));
  assert!(out.contains("Default: booldefault.StaticBool(true),\n"));
  assert!(out.contains("PlanModifiers: []planmodifier.Bool{\nboolplanmodifier.RequiresReplace(),\n},\n"));
  assert!(schema.imports().contains("github.com/hashicorp/terraform-plugin-framework/resource/schema/booldefault"));
}

#[test]
fn defaults_and_plan_modifiers_are_dropped_off_resources() {
  let json = r#"{
    "attributes": [
      {
        "name": "enabled",
        "bool": {
          "computed_optional_required": "computed_optional",
          "default": { "static": true },
          "plan_modifiers": [ { "custom": { "schema_definition": "boolplanmodifier.RequiresReplace()" } } ]
        }
      }
    ]
  }"#;

  for target in [SchemaTarget::Provider, SchemaTarget::DataSource] {
    let schema = convert(target, json);
    let out = schema.schema_function(&FrameworkIdentifier::new("example"));
    assert!(!out.contains("Default:"), "{target} should not emit defaults");
    assert!(!out.contains("PlanModifiers:"), "{target} should not emit plan modifiers");
    assert!(!schema.imports().contains("github.com/hashicorp/terraform-plugin-framework/resource/schema/booldefault"));
  }
}

#[test]
fn validators_without_custom_entries_are_dropped() {
  let schema = convert(
    SchemaTarget::Resource,
    r#"{
      "attributes": [
        {
          "name": "zone",
          "string": {
            "computed_optional_required": "required",
            "validators": [ {}, { "custom": { "schema_definition": "" } } ]
          }
        }
      ]
    }"#,
  );

  let out = schema.schema_function(&FrameworkIdentifier::new("example"));
  assert!(!out.contains("Validators:"));
}

#[test]
fn static_default_wins_over_custom() {
  let schema = convert(
    SchemaTarget::Resource,
    r#"{
      "attributes": [
        {
          "name": "retries",
          "int64": {
            "computed_optional_required": "computed_optional",
            "default": {
              "static": 3,
              "custom": { "schema_definition": "int64default.Fancy()" }
            }
          }
        }
      ]
    }"#,
  );

  let out = schema.schema_function(&FrameworkIdentifier::new("example"));
  assert!(out.contains("Default: int64default.StaticInt64(3),\n"));
  assert!(!out.contains("int64default.Fancy()"));
}
