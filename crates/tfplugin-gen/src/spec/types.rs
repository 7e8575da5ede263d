use serde::Deserialize;

/// Presence mode for an attribute. `ComputedOptional` emits both `Computed`
/// and `Optional` in the rendered schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputedOptionalRequired {
  Computed,
  ComputedOptional,
  Optional,
  #[default]
  Required,
}

/// A Go import declaration carried by custom types, validators, plan
/// modifiers and defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Import {
  pub path: String,
  #[serde(default)]
  pub alias: Option<String>,
}

impl Import {
  pub fn new(path: impl Into<String>) -> Self {
    Self {
      path: path.into(),
      alias: None,
    }
  }
}

/// A user-supplied replacement for the framework's built-in attribute type.
/// `type` is spliced into the schema verbatim; `value_type` replaces the
/// model field type when present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomType {
  #[serde(default)]
  pub import: Option<Import>,
  #[serde(rename = "type")]
  pub type_name: String,
  #[serde(default)]
  pub value_type: Option<String>,
}

/// An external Go type the generated value type should convert to and from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssociatedExternalType {
  #[serde(default)]
  pub import: Option<Import>,
  #[serde(rename = "type")]
  pub type_name: String,
}

impl AssociatedExternalType {
  /// Pascal form of the external type, used in `To*`/`From*` helper names.
  /// `*apisdk.Thing` becomes `ApisdkThing`.
  #[must_use]
  pub fn pascal_name(&self) -> String {
    self
      .type_name
      .trim_start_matches(['*', '[', ']'])
      .split('.')
      .map(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
          None => String::new(),
          Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        }
      })
      .collect()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomValidator {
  #[serde(default)]
  pub imports: Vec<Import>,
  pub schema_definition: String,
}

/// One entry of a `validators` list. Only custom validators exist in the
/// format today, but the JSON still nests them under a `custom` key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Validator {
  #[serde(default)]
  pub custom: Option<CustomValidator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlanModifier {
  #[serde(default)]
  pub custom: Option<CustomValidator>,
}

/// A schema-definition default usable by every attribute kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomDefault {
  #[serde(default)]
  pub imports: Vec<Import>,
  pub schema_definition: String,
}

/// Collection, object and number attributes only support custom defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CollectionDefault {
  #[serde(default)]
  pub custom: Option<CustomDefault>,
}

/// Static and custom defaults are modeled as independent optional fields.
/// When both are populated the static form wins at render time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct BoolDefault {
  #[serde(rename = "static", default)]
  pub static_value: Option<bool>,
  #[serde(default)]
  pub custom: Option<CustomDefault>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Float64Default {
  #[serde(rename = "static", default)]
  pub static_value: Option<f64>,
  #[serde(default)]
  pub custom: Option<CustomDefault>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Int64Default {
  #[serde(rename = "static", default)]
  pub static_value: Option<i64>,
  #[serde(default)]
  pub custom: Option<CustomDefault>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct StringDefault {
  #[serde(rename = "static", default)]
  pub static_value: Option<String>,
  #[serde(default)]
  pub custom: Option<CustomDefault>,
}
