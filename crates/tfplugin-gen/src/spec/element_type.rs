use serde::Deserialize;

use super::types::CustomType;
use crate::naming::FrameworkIdentifier;

/// Element type of a list/map/set attribute, or the type of one object
/// attribute. Recursion through collection and object variants is unbounded
/// but finite (user-authored, acyclic).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
  Bool(PrimitiveElement),
  Float64(PrimitiveElement),
  Int64(PrimitiveElement),
  Number(PrimitiveElement),
  String(PrimitiveElement),
  List(Box<CollectionElement>),
  Map(Box<CollectionElement>),
  Set(Box<CollectionElement>),
  Object(ObjectElement),
}

impl ElementType {
  /// A custom type at any recursion level replaces the built-in literal.
  #[must_use]
  pub fn custom_type(&self) -> Option<&CustomType> {
    match self {
      Self::Bool(e) | Self::Float64(e) | Self::Int64(e) | Self::Number(e) | Self::String(e) => e.custom_type.as_ref(),
      Self::List(e) | Self::Map(e) | Self::Set(e) => e.custom_type.as_ref(),
      Self::Object(e) => e.custom_type.as_ref(),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PrimitiveElement {
  #[serde(default)]
  pub custom_type: Option<CustomType>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollectionElement {
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  pub element_type: ElementType,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectElement {
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  pub attribute_types: Vec<ObjectAttributeType>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectAttributeType {
  pub name: FrameworkIdentifier,
  #[serde(flatten)]
  pub element: ElementType,
}
