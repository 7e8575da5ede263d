//! The name-keyed attribute mapping and its polymorphic node type.

use std::collections::BTreeMap;

use itertools::Itertools;

use super::{
  GeneratorSchemaType,
  collections::{ListAttribute, MapAttribute, SetAttribute},
  element_type,
  imports::Imports,
  nested::{ListNestedAttribute, MapNestedAttribute, ObjectAttribute, SetNestedAttribute, SingleNestedAttribute},
  primitives::{BoolAttribute, Float64Attribute, Int64Attribute, NumberAttribute, StringAttribute},
};
use crate::{generator::SchemaError, naming::FrameworkIdentifier};

/// One generator-model node. The variant is the kind tag the spec tree
/// implied; exhaustive matches everywhere make an unhandled kind a compile
/// error rather than a runtime one.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorAttribute {
  Bool(BoolAttribute),
  Float64(Float64Attribute),
  Int64(Int64Attribute),
  List(ListAttribute),
  ListNested(ListNestedAttribute),
  Map(MapAttribute),
  MapNested(MapNestedAttribute),
  Number(NumberAttribute),
  Object(ObjectAttribute),
  Set(SetAttribute),
  SetNested(SetNestedAttribute),
  SingleNested(SingleNestedAttribute),
  String(StringAttribute),
}

impl GeneratorAttribute {
  #[must_use]
  pub fn kind(&self) -> GeneratorSchemaType {
    match self {
      Self::Bool(_) => GeneratorSchemaType::BoolAttribute,
      Self::Float64(_) => GeneratorSchemaType::Float64Attribute,
      Self::Int64(_) => GeneratorSchemaType::Int64Attribute,
      Self::List(_) => GeneratorSchemaType::ListAttribute,
      Self::ListNested(_) => GeneratorSchemaType::ListNestedAttribute,
      Self::Map(_) => GeneratorSchemaType::MapAttribute,
      Self::MapNested(_) => GeneratorSchemaType::MapNestedAttribute,
      Self::Number(_) => GeneratorSchemaType::NumberAttribute,
      Self::Object(_) => GeneratorSchemaType::ObjectAttribute,
      Self::Set(_) => GeneratorSchemaType::SetAttribute,
      Self::SetNested(_) => GeneratorSchemaType::SetNestedAttribute,
      Self::SingleNested(_) => GeneratorSchemaType::SingleNestedAttribute,
      Self::String(_) => GeneratorSchemaType::StringAttribute,
    }
  }

  #[must_use]
  pub fn schema(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    match self {
      Self::Bool(a) => a.schema(name, schema_name),
      Self::Float64(a) => a.schema(name, schema_name),
      Self::Int64(a) => a.schema(name, schema_name),
      Self::List(a) => a.schema(name, schema_name),
      Self::ListNested(a) => a.schema(name, schema_name),
      Self::Map(a) => a.schema(name, schema_name),
      Self::MapNested(a) => a.schema(name, schema_name),
      Self::Number(a) => a.schema(name, schema_name),
      Self::Object(a) => a.schema(name, schema_name),
      Self::Set(a) => a.schema(name, schema_name),
      Self::SetNested(a) => a.schema(name, schema_name),
      Self::SingleNested(a) => a.schema(name, schema_name),
      Self::String(a) => a.schema(name, schema_name),
    }
  }

  #[must_use]
  pub fn imports(&self) -> Imports {
    match self {
      Self::Bool(a) => a.imports(),
      Self::Float64(a) => a.imports(),
      Self::Int64(a) => a.imports(),
      Self::List(a) => a.imports(),
      Self::ListNested(a) => a.imports(),
      Self::Map(a) => a.imports(),
      Self::MapNested(a) => a.imports(),
      Self::Number(a) => a.imports(),
      Self::Object(a) => a.imports(),
      Self::Set(a) => a.imports(),
      Self::SetNested(a) => a.imports(),
      Self::SingleNested(a) => a.imports(),
      Self::String(a) => a.imports(),
    }
  }

  /// The Go type of this attribute's model field.
  #[must_use]
  pub fn model_type(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    match self {
      Self::Bool(a) => a.model_type(name, schema_name),
      Self::Float64(a) => a.model_type(name, schema_name),
      Self::Int64(a) => a.model_type(name, schema_name),
      Self::List(a) => a.model_type(name, schema_name),
      Self::ListNested(a) => a.model_type(name, schema_name),
      Self::Map(a) => a.model_type(name, schema_name),
      Self::MapNested(a) => a.model_type(name, schema_name),
      Self::Number(a) => a.model_type(name, schema_name),
      Self::Object(a) => a.model_type(name, schema_name),
      Self::Set(a) => a.model_type(name, schema_name),
      Self::SetNested(a) => a.model_type(name, schema_name),
      Self::SingleNested(a) => a.model_type(name, schema_name),
      Self::String(a) => a.model_type(name, schema_name),
    }
  }

  /// `<PascalField> <GoType> \`tfsdk:"<name>"\``
  #[must_use]
  pub fn model_field(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    format!(
      "{} {} `tfsdk:\"{name}\"`",
      name.to_prefix_pascal_case(schema_name.as_str()),
      self.model_type(name, schema_name),
    )
  }

  /// The `attr.Type` literal used where this attribute appears as a child of
  /// a generated object type.
  #[must_use]
  pub fn attr_type(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    let pascal = || name.to_prefix_pascal_case(schema_name.as_str());
    match self {
      Self::Bool(_) => "basetypes.BoolType{}".to_string(),
      Self::Float64(_) => "basetypes.Float64Type{}".to_string(),
      Self::Int64(_) => "basetypes.Int64Type{}".to_string(),
      Self::Number(_) => "basetypes.NumberType{}".to_string(),
      Self::String(_) => "basetypes.StringType{}".to_string(),
      Self::List(a) => format!(
        "basetypes.ListType{{\nElemType: {},\n}}",
        element_type::type_literal(&a.element_type)
      ),
      Self::Map(a) => format!(
        "basetypes.MapType{{\nElemType: {},\n}}",
        element_type::type_literal(&a.element_type)
      ),
      Self::Set(a) => format!(
        "basetypes.SetType{{\nElemType: {},\n}}",
        element_type::type_literal(&a.element_type)
      ),
      Self::Object(a) => format!(
        "basetypes.ObjectType{{\nAttrTypes: {},\n}}",
        element_type::attr_types_literal(&a.attribute_types)
      ),
      Self::ListNested(_) => format!("basetypes.ListType{{\nElemType: {}Value{{}}.Type(ctx),\n}}", pascal()),
      Self::MapNested(_) => format!("basetypes.MapType{{\nElemType: {}Value{{}}.Type(ctx),\n}}", pascal()),
      Self::SetNested(_) => format!("basetypes.SetType{{\nElemType: {}Value{{}}.Type(ctx),\n}}", pascal()),
      Self::SingleNested(_) => {
        format!("basetypes.ObjectType{{\nAttrTypes: {}Value{{}}.AttributeTypes(ctx),\n}}", pascal())
      }
    }
  }

  /// The `attr.Value` Go type this attribute occupies inside a generated
  /// object value struct.
  #[must_use]
  pub fn attr_value_type(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    match self {
      Self::Bool(_) => "basetypes.BoolValue".to_string(),
      Self::Float64(_) => "basetypes.Float64Value".to_string(),
      Self::Int64(_) => "basetypes.Int64Value".to_string(),
      Self::Number(_) => "basetypes.NumberValue".to_string(),
      Self::String(_) => "basetypes.StringValue".to_string(),
      Self::List(_) | Self::ListNested(_) => "basetypes.ListValue".to_string(),
      Self::Map(_) | Self::MapNested(_) => "basetypes.MapValue".to_string(),
      Self::Set(_) | Self::SetNested(_) => "basetypes.SetValue".to_string(),
      Self::Object(_) => "basetypes.ObjectValue".to_string(),
      Self::SingleNested(_) => format!("{}Value", name.to_prefix_pascal_case(schema_name.as_str())),
    }
  }
}

/// Name-keyed attribute mapping. `BTreeMap` keys iterate in lexicographic
/// byte order, which is the ordering contract for every emission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorAttributes {
  entries: BTreeMap<FrameworkIdentifier, GeneratorAttribute>,
}

impl GeneratorAttributes {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts a converted node, rejecting duplicate names within this nesting
  /// level.
  pub fn insert(&mut self, name: FrameworkIdentifier, attribute: GeneratorAttribute) -> Result<(), SchemaError> {
    if self.entries.contains_key(&name) {
      return Err(SchemaError::DuplicateName {
        name: name.as_str().to_string(),
      });
    }
    self.entries.insert(name, attribute);
    Ok(())
  }

  #[must_use]
  pub fn get(&self, name: &FrameworkIdentifier) -> Option<&GeneratorAttribute> {
    self.entries.get(name)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&FrameworkIdentifier, &GeneratorAttribute)> {
    self.entries.iter()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Concatenated attribute fragments in sorted name order.
  #[must_use]
  pub fn schema(&self, schema_name: &FrameworkIdentifier) -> String {
    self
      .entries
      .iter()
      .map(|(name, attribute)| attribute.schema(name, schema_name))
      .collect()
  }

  /// `Attributes: map[string]schema.Attribute{ ... },`
  #[must_use]
  pub fn attributes_map_fragment(&self, schema_name: &FrameworkIdentifier) -> String {
    format!(
      "Attributes: map[string]schema.Attribute{{\n{}}},\n",
      self.schema(schema_name)
    )
  }

  #[must_use]
  pub fn imports(&self) -> Imports {
    let mut imports = Imports::new();
    for attribute in self.entries.values() {
      imports.extend(attribute.imports());
    }
    imports
  }

  /// Model struct fields in sorted name order, one per line.
  #[must_use]
  pub fn model_fields(&self, schema_name: &FrameworkIdentifier) -> String {
    self
      .entries
      .iter()
      .map(|(name, attribute)| attribute.model_field(name, schema_name))
      .join("\n")
  }
}
