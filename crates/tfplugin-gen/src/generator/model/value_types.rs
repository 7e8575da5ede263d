//! Walks a generator schema and renders every `<Pascal>Type`/`<Pascal>Value`
//! pair it implies: one object pair per nested-object node (unless an
//! explicit custom type replaces generation) and one wrapper pair per
//! primitive/collection/object attribute with an associated external type.

use itertools::Itertools;

use super::{templates, to_from};
use crate::{
  generator::schema::{
    GeneratorAttribute, GeneratorAttributes, GeneratorBlock, GeneratorBlocks, GeneratorSchema, element_type,
  },
  naming::FrameworkIdentifier,
  spec::AssociatedExternalType,
};

/// One rendered pair, tagged by family so import aggregation can tell object
/// pairs (which additionally use the `types` package) from wrapper pairs.
pub(super) enum Pair {
  Object(String),
  Wrapper {
    source: String,
    converts: Option<Primitive>,
  },
}

impl Pair {
  pub(super) fn into_source(self) -> String {
    match self {
      Self::Object(source) | Self::Wrapper { source, .. } => source,
    }
  }
}

/// A child entry of a generated object: attribute or block.
pub(super) struct ObjectChild {
  pub name: FrameworkIdentifier,
  pub field: String,
  pub camel: String,
  pub attr_type: String,
  pub value_type: String,
  pub primitive: Option<Primitive>,
}

#[derive(Clone, Copy, PartialEq)]
pub(super) enum Primitive {
  Bool,
  Float64,
  Int64,
  Number,
  String,
}

impl Primitive {
  fn kind(self) -> &'static str {
    match self {
      Self::Bool => "Bool",
      Self::Float64 => "Float64",
      Self::Int64 => "Int64",
      Self::Number => "Number",
      Self::String => "String",
    }
  }

  /// Pointer accessor on a wrapper value, where the framework value is the
  /// embedded field rather than a struct member.
  pub(super) fn wrapper_accessor(self) -> &'static str {
    match self {
      Self::Bool => "v.ValueBoolPointer()",
      Self::Float64 => "v.ValueFloat64Pointer()",
      Self::Int64 => "v.ValueInt64Pointer()",
      Self::Number => "v.ValueBigFloat()",
      Self::String => "v.ValueStringPointer()",
    }
  }

  /// Embedded-field initializer converting the external pointer back to the
  /// framework base pointer type.
  pub(super) fn wrapper_constructor(self, source: &str) -> String {
    match self {
      Self::Bool => format!("types.BoolPointerValue((*bool)({source}))"),
      Self::Float64 => format!("types.Float64PointerValue((*float64)({source}))"),
      Self::Int64 => format!("types.Int64PointerValue((*int64)({source}))"),
      Self::Number => format!("types.NumberValue((*big.Float)({source}))"),
      Self::String => format!("types.StringPointerValue((*string)({source}))"),
    }
  }
  /// Accessor expression handing the framework value to the external type.
  pub(super) fn to_expr(self, field: &str) -> String {
    match self {
      Self::Bool => format!("v.{field}.ValueBoolPointer()"),
      Self::Float64 => format!("v.{field}.ValueFloat64Pointer()"),
      Self::Int64 => format!("v.{field}.ValueInt64Pointer()"),
      Self::Number => format!("v.{field}.ValueBigFloat()"),
      Self::String => format!("v.{field}.ValueStringPointer()"),
    }
  }

  /// Constructor expression wrapping the external field back into a
  /// framework value.
  pub(super) fn from_expr(self, source: &str) -> String {
    match self {
      Self::Bool => format!("types.BoolPointerValue({source})"),
      Self::Float64 => format!("types.Float64PointerValue({source})"),
      Self::Int64 => format!("types.Int64PointerValue({source})"),
      Self::Number => format!("types.NumberValue({source})"),
      Self::String => format!("types.StringPointerValue({source})"),
    }
  }
}

pub(super) fn render_all(schema_name: &FrameworkIdentifier, schema: &GeneratorSchema) -> String {
  collect_pairs(schema_name, schema)
    .into_iter()
    .map(Pair::into_source)
    .join("\n")
}

pub(super) fn collect_pairs(schema_name: &FrameworkIdentifier, schema: &GeneratorSchema) -> Vec<Pair> {
  let mut pairs = Vec::new();
  attribute_pairs(schema_name, &schema.attributes, &mut pairs);
  block_pairs(schema_name, &schema.blocks, &mut pairs);
  pairs
}

fn attribute_pairs(schema_name: &FrameworkIdentifier, attributes: &GeneratorAttributes, pairs: &mut Vec<Pair>) {
  for (name, attribute) in attributes.iter() {
    let pascal = name.to_prefix_pascal_case(schema_name.as_str());
    match attribute {
      GeneratorAttribute::Bool(a) => {
        if a.custom_type.is_none()
          && let Some(associated) = &a.associated_external_type
        {
          pairs.push(primitive_wrapper_pair(&pascal, Primitive::Bool, associated));
        }
      }
      GeneratorAttribute::Float64(a) => {
        if a.custom_type.is_none()
          && let Some(associated) = &a.associated_external_type
        {
          pairs.push(primitive_wrapper_pair(&pascal, Primitive::Float64, associated));
        }
      }
      GeneratorAttribute::Int64(a) => {
        if a.custom_type.is_none()
          && let Some(associated) = &a.associated_external_type
        {
          pairs.push(primitive_wrapper_pair(&pascal, Primitive::Int64, associated));
        }
      }
      GeneratorAttribute::Number(a) => {
        if a.custom_type.is_none()
          && let Some(associated) = &a.associated_external_type
        {
          pairs.push(primitive_wrapper_pair(&pascal, Primitive::Number, associated));
        }
      }
      GeneratorAttribute::String(a) => {
        if a.custom_type.is_none()
          && let Some(associated) = &a.associated_external_type
        {
          pairs.push(primitive_wrapper_pair(&pascal, Primitive::String, associated));
        }
      }
      GeneratorAttribute::List(a) => {
        if a.custom_type.is_none() && a.associated_external_type.is_some() {
          let literal = collection_type_literal(&pascal, "List", &element_type::type_literal(&a.element_type));
          pairs.push(wrapper_pair(&pascal, "List", &literal));
        }
      }
      GeneratorAttribute::Map(a) => {
        if a.custom_type.is_none() && a.associated_external_type.is_some() {
          let literal = collection_type_literal(&pascal, "Map", &element_type::type_literal(&a.element_type));
          pairs.push(wrapper_pair(&pascal, "Map", &literal));
        }
      }
      GeneratorAttribute::Set(a) => {
        if a.custom_type.is_none() && a.associated_external_type.is_some() {
          let literal = collection_type_literal(&pascal, "Set", &element_type::type_literal(&a.element_type));
          pairs.push(wrapper_pair(&pascal, "Set", &literal));
        }
      }
      GeneratorAttribute::Object(a) => {
        if a.custom_type.is_none() && a.associated_external_type.is_some() {
          let literal = format!(
            "{pascal}Type{{\nbasetypes.ObjectType{{\nAttrTypes: {},\n}},\n}}",
            element_type::attr_types_literal(&a.attribute_types)
          );
          pairs.push(wrapper_pair(&pascal, "Object", &literal));
        }
      }
      GeneratorAttribute::ListNested(a) => {
        let object = &a.nested_object;
        if object.custom_type.is_none() {
          pairs.push(object_pair(
            name,
            schema_name,
            &object.attributes,
            None,
            object.associated_external_type.as_ref(),
          ));
        }
        attribute_pairs(schema_name, &object.attributes, pairs);
      }
      GeneratorAttribute::MapNested(a) => {
        let object = &a.nested_object;
        if object.custom_type.is_none() {
          pairs.push(object_pair(
            name,
            schema_name,
            &object.attributes,
            None,
            object.associated_external_type.as_ref(),
          ));
        }
        attribute_pairs(schema_name, &object.attributes, pairs);
      }
      GeneratorAttribute::SetNested(a) => {
        let object = &a.nested_object;
        if object.custom_type.is_none() {
          pairs.push(object_pair(
            name,
            schema_name,
            &object.attributes,
            None,
            object.associated_external_type.as_ref(),
          ));
        }
        attribute_pairs(schema_name, &object.attributes, pairs);
      }
      GeneratorAttribute::SingleNested(a) => {
        if a.custom_type.is_none() {
          pairs.push(object_pair(
            name,
            schema_name,
            &a.attributes,
            None,
            a.associated_external_type.as_ref(),
          ));
        }
        attribute_pairs(schema_name, &a.attributes, pairs);
      }
    }
  }
}

fn block_pairs(schema_name: &FrameworkIdentifier, blocks: &GeneratorBlocks, pairs: &mut Vec<Pair>) {
  for (name, block) in blocks.iter() {
    match block {
      GeneratorBlock::ListNested(b) => {
        let object = &b.nested_object;
        if object.custom_type.is_none() {
          pairs.push(object_pair(
            name,
            schema_name,
            &object.attributes,
            Some(&object.blocks),
            object.associated_external_type.as_ref(),
          ));
        }
        attribute_pairs(schema_name, &object.attributes, pairs);
        block_pairs(schema_name, &object.blocks, pairs);
      }
      GeneratorBlock::SetNested(b) => {
        let object = &b.nested_object;
        if object.custom_type.is_none() {
          pairs.push(object_pair(
            name,
            schema_name,
            &object.attributes,
            Some(&object.blocks),
            object.associated_external_type.as_ref(),
          ));
        }
        attribute_pairs(schema_name, &object.attributes, pairs);
        block_pairs(schema_name, &object.blocks, pairs);
      }
      GeneratorBlock::SingleNested(b) => {
        if b.custom_type.is_none() {
          pairs.push(object_pair(
            name,
            schema_name,
            &b.attributes,
            Some(&b.blocks),
            b.associated_external_type.as_ref(),
          ));
        }
        attribute_pairs(schema_name, &b.attributes, pairs);
        block_pairs(schema_name, &b.blocks, pairs);
      }
    }
  }
}

fn collection_type_literal(pascal: &str, kind: &str, element: &str) -> String {
  format!("{pascal}Type{{\nbasetypes.{kind}Type{{\nElemType: {element},\n}},\n}}")
}

fn wrapper_pair(pascal: &str, kind: &str, type_literal: &str) -> Pair {
  Pair::Wrapper {
    source: templates::substitute(
      templates::WRAPPER_PAIR,
      &[("pascal", pascal), ("kind", kind), ("type_literal", type_literal)],
    ),
    converts: None,
  }
}

/// Primitive wrapper pairs additionally carry `To<External>`/`From<External>`
/// helpers, since the base pointer accessors give a canonical mapping.
fn primitive_wrapper_pair(pascal: &str, primitive: Primitive, associated: &AssociatedExternalType) -> Pair {
  let kind = primitive.kind();
  let mut source = templates::substitute(
    templates::WRAPPER_PAIR,
    &[
      ("pascal", pascal),
      ("kind", kind),
      ("type_literal", &format!("{pascal}Type{{}}")),
    ],
  );
  source.push('\n');
  source.push_str(&to_from::render_wrapper(pascal, kind, primitive, associated));
  Pair::Wrapper {
    source,
    converts: Some(primitive),
  }
}

fn object_pair(
  parent: &FrameworkIdentifier,
  schema_name: &FrameworkIdentifier,
  attributes: &GeneratorAttributes,
  blocks: Option<&GeneratorBlocks>,
  associated: Option<&AssociatedExternalType>,
) -> Pair {
  let pascal = parent.to_prefix_pascal_case(schema_name.as_str());
  let children = object_children(parent, schema_name, attributes, blocks);

  let value_from_object_checks: String = children.iter().map(|child| attribute_check(child, "nil")).collect();
  let constructor_bail = format!("New{pascal}ValueUnknown()");
  let constructor_checks: String = children
    .iter()
    .map(|child| attribute_check(child, &constructor_bail))
    .collect();
  let value_assignments: String = children
    .iter()
    .map(|child| format!("{}: {}Val,\n", child.field, child.camel))
    .collect();
  let fields: String = children
    .iter()
    .map(|child| format!("{} {} `tfsdk:\"{}\"`\n", child.field, child.value_type, child.name))
    .collect();
  let terraform_declarations = if children.is_empty() {
    String::new()
  } else {
    "var val tftypes.Value\nvar err error\n\n".to_string()
  };
  let terraform_attr_types: String = children
    .iter()
    .map(|child| format!("attrTypes[\"{}\"] = {}.TerraformType(ctx)\n", child.name, child.attr_type))
    .collect();
  let terraform_values: String = children
    .iter()
    .map(|child| {
      format!(
        "val, err = v.{}.ToTerraformValue(ctx)\n\nif err != nil {{\nreturn tftypes.NewValue(objectType, tftypes.UnknownValue), err\n}}\n\nvals[\"{}\"] = val\n\n",
        child.field, child.name
      )
    })
    .collect();
  let object_value_entries: String = children
    .iter()
    .map(|child| format!("\"{}\": v.{},\n", child.name, child.field))
    .collect();
  let equality_checks: String = children
    .iter()
    .map(|child| format!("if !v.{0}.Equal(other.{0}) {{\nreturn false\n}}\n\n", child.field))
    .collect();
  let attribute_type_entries: String = children
    .iter()
    .map(|child| format!("\"{}\": {},\n", child.name, child.attr_type))
    .collect();
  let attribute_count = children.len().to_string();

  let mut source = templates::substitute(
    templates::OBJECT_TYPE,
    &[
      ("pascal", pascal.as_str()),
      ("value_from_object_checks", &value_from_object_checks),
      ("constructor_checks", &constructor_checks),
      ("value_assignments", &value_assignments),
    ],
  );
  source.push('\n');
  source.push_str(&templates::substitute(
    templates::OBJECT_VALUE,
    &[
      ("pascal", pascal.as_str()),
      ("fields", &fields),
      ("attribute_count", &attribute_count),
      ("terraform_declarations", &terraform_declarations),
      ("terraform_attr_types", &terraform_attr_types),
      ("terraform_values", &terraform_values),
      ("object_value_entries", &object_value_entries),
      ("equality_checks", &equality_checks),
      ("attribute_type_entries", &attribute_type_entries),
    ],
  ));
  if let Some(associated) = associated {
    source.push('\n');
    source.push_str(&to_from::render(&pascal, associated, &children));
  }
  Pair::Object(source)
}

fn attribute_check(child: &ObjectChild, bail: &str) -> String {
  templates::substitute(
    templates::OBJECT_ATTRIBUTE_CHECK,
    &[
      ("camel", &child.camel),
      ("name", child.name.as_str()),
      ("value_type", &child.value_type),
      ("bail", bail),
    ],
  )
}

fn object_children(
  parent: &FrameworkIdentifier,
  schema_name: &FrameworkIdentifier,
  attributes: &GeneratorAttributes,
  blocks: Option<&GeneratorBlocks>,
) -> Vec<ObjectChild> {
  let mut children: Vec<ObjectChild> = attributes
    .iter()
    .map(|(name, attribute)| ObjectChild {
      name: name.clone(),
      field: name.to_prefix_pascal_case(parent.as_str()),
      camel: name.to_prefix_camel_case(parent.as_str()),
      attr_type: attribute.attr_type(name, schema_name),
      value_type: attribute.attr_value_type(name, schema_name),
      primitive: match attribute {
        GeneratorAttribute::Bool(_) => Some(Primitive::Bool),
        GeneratorAttribute::Float64(_) => Some(Primitive::Float64),
        GeneratorAttribute::Int64(_) => Some(Primitive::Int64),
        GeneratorAttribute::Number(_) => Some(Primitive::Number),
        GeneratorAttribute::String(_) => Some(Primitive::String),
        _ => None,
      },
    })
    .collect();

  if let Some(blocks) = blocks {
    children.extend(blocks.iter().map(|(name, block)| ObjectChild {
      name: name.clone(),
      field: name.to_prefix_pascal_case(parent.as_str()),
      camel: name.to_prefix_camel_case(parent.as_str()),
      attr_type: block.attr_type(name, schema_name),
      value_type: block.attr_value_type(name, schema_name),
      primitive: None,
    }));
  }
  children
}
