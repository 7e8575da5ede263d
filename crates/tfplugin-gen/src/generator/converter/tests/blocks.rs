use super::support::{convert, convert_err};
use crate::{
  generator::{SchemaError, SchemaTarget, schema::GeneratorBlock},
  naming::FrameworkIdentifier,
};

#[test]
fn nested_blocks_convert_recursively() {
  let schema = convert(
    SchemaTarget::Resource,
    r#"{
      "blocks": [
        {
          "name": "timeouts",
          "single_nested": {
            "attributes": [ { "name": "create", "string": { "computed_optional_required": "optional" } } ],
            "blocks": [
              {
                "name": "rules",
                "list_nested": {
                  "nested_object": {
                    "attributes": [ { "name": "action", "string": { "computed_optional_required": "required" } } ]
                  }
                }
              }
            ]
          }
        }
      ]
    }"#,
  );

  let timeouts = schema
    .blocks
    .get(&FrameworkIdentifier::new("timeouts"))
    .expect("timeouts should convert");
  let GeneratorBlock::SingleNested(single) = timeouts else {
    panic!("expected single nested block");
  };
  assert_eq!(single.attributes.len(), 1);
  assert_eq!(single.blocks.len(), 1);
  assert!(matches!(
    single.blocks.get(&FrameworkIdentifier::new("rules")),
    Some(GeneratorBlock::ListNested(_))
  ));
}

#[test]
fn duplicate_block_names_abort_conversion() {
  let err = convert_err(
    SchemaTarget::Resource,
    r#"{
      "blocks": [
        { "name": "twice", "single_nested": {} },
        { "name": "twice", "set_nested": { "nested_object": {} } }
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
fn blocks_render_inside_blocks_map() {
  let schema = convert(
    SchemaTarget::Resource,
    r#"{
      "blocks": [
        {
          "name": "rule",
          "list_nested": {
            "nested_object": {
              "attributes": [ { "name": "action", "string": { "computed_optional_required": "required" } } ]
            },
            "description": "One firewall rule."
          }
        }
      ]
    }"#,
  );

  let out = schema.schema_function(&FrameworkIdentifier::new("firewall"));
  assert!(out.contains("Blocks: map[string]schema.Block{\n"));
  assert!(out.contains("\"rule\": schema.ListNestedBlock{\n"));
  assert!(out.contains("NestedObject: schema.NestedBlockObject{\n"));
  assert!(out.contains("CustomType: RuleType{\n"));
  assert!(out.contains("Description: \"One firewall rule.\",\n"));
}

#[test]
fn block_derivations_follow_the_kind() {
  let schema = convert(
    SchemaTarget::Resource,
    r#"{
      "blocks": [
        { "name": "rule", "list_nested": { "nested_object": {} } },
        { "name": "tag", "set_nested": { "nested_object": {} } },
        { "name": "timeouts", "single_nested": {} }
      ]
    }"#,
  );
  let schema_name = FrameworkIdentifier::new("firewall");

  let block_types = schema.blocks.block_types();
  assert_eq!(block_types[&FrameworkIdentifier::new("rule")], "ListType");
  assert_eq!(block_types[&FrameworkIdentifier::new("tag")], "SetType");
  assert_eq!(block_types[&FrameworkIdentifier::new("timeouts")], "ObjectType");

  let attr_values = schema.blocks.attr_values(&schema_name);
  assert_eq!(attr_values[&FrameworkIdentifier::new("rule")], "basetypes.ListValue");
  assert_eq!(attr_values[&FrameworkIdentifier::new("tag")], "basetypes.SetValue");
  assert_eq!(attr_values[&FrameworkIdentifier::new("timeouts")], "TimeoutsValue");

  let attr_types = schema.blocks.attr_types(&schema_name);
  assert_eq!(
    attr_types[&FrameworkIdentifier::new("rule")],
    "basetypes.ListType{\nElemType: RuleValue{}.Type(ctx),\n}"
  );
  assert_eq!(
    attr_types[&FrameworkIdentifier::new("timeouts")],
    "basetypes.ObjectType{\nAttrTypes: TimeoutsValue{}.AttributeTypes(ctx),\n}"
  );
}

#[test]
fn to_from_helpers_exist_only_with_external_types() {
  let schema = convert(
    SchemaTarget::Resource,
    r#"{
      "blocks": [
        {
          "name": "rule",
          "list_nested": {
            "nested_object": {
              "associated_external_type": { "type": "*apisdk.Rule" }
            }
          }
        },
        { "name": "timeouts", "single_nested": {} }
      ]
    }"#,
  );

  let to_funcs = schema.blocks.to_funcs();
  let from_funcs = schema.blocks.from_funcs();
  assert_eq!(to_funcs[&FrameworkIdentifier::new("rule")], "ToApisdkRule");
  assert_eq!(from_funcs[&FrameworkIdentifier::new("rule")], "FromApisdkRule");
  assert!(!to_funcs.contains_key(&FrameworkIdentifier::new("timeouts")));
}
