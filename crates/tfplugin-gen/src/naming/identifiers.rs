use std::{collections::HashSet, fmt, sync::LazyLock};

use regex::Regex;
use serde::Deserialize;

/// Method names synthesized on every generated value type. A per-attribute
/// helper whose cased name matches one of these would shadow the interface
/// method on the generated Go struct.
static RESERVED_METHOD_NAMES: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "AttributeTypes",
    "Equal",
    "IsNull",
    "IsUnknown",
    "String",
    "ToObjectValue",
    "ToTerraformValue",
    "Type",
  ]
  .into_iter()
  .collect()
});

static VALID_IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z_][a-z0-9_]*$").unwrap());

/// A snake_case attribute/block name taken verbatim from the input spec.
///
/// Casing is deterministic: the name is split on `_` and the first letter of
/// each segment is upper/lowercased. No transliteration, no locale handling.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct FrameworkIdentifier(String);

impl FrameworkIdentifier {
  pub fn new(name: impl Into<String>) -> Self {
    Self(name.into())
  }

  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Whether the raw name is usable as a framework identifier. Invalid names
  /// are a hard error for the caller, never silently corrected.
  #[must_use]
  pub fn valid(&self) -> bool {
    VALID_IDENTIFIER_RE.is_match(&self.0)
  }

  #[must_use]
  pub fn to_pascal_case(&self) -> String {
    self
      .0
      .split('_')
      .map(upper_first)
      .collect()
  }

  #[must_use]
  pub fn to_camel_case(&self) -> String {
    let mut segments = self.0.split('_').filter(|s| !s.is_empty());
    let Some(first) = segments.next() else {
      return String::new();
    };
    let mut out = lower_first(first);
    out.extend(segments.map(upper_first));
    out
  }

  /// Pascal-cases the name, prefixing it with the Pascal form of `prefix`
  /// when the plain form would collide with a reserved method name.
  #[must_use]
  pub fn to_prefix_pascal_case(&self, prefix: &str) -> String {
    let pascal = self.to_pascal_case();
    if RESERVED_METHOD_NAMES.contains(pascal.as_str()) {
      return format!("{}{pascal}", FrameworkIdentifier::new(prefix).to_pascal_case());
    }
    pascal
  }

  /// Camel-case counterpart of [`Self::to_prefix_pascal_case`]. The collision
  /// check runs against the Pascal form, since that is what surfaces as a Go
  /// method name.
  #[must_use]
  pub fn to_prefix_camel_case(&self, prefix: &str) -> String {
    let pascal = self.to_pascal_case();
    if RESERVED_METHOD_NAMES.contains(pascal.as_str()) {
      return format!(
        "{}{pascal}",
        FrameworkIdentifier::new(prefix).to_camel_case()
      );
    }
    self.to_camel_case()
  }
}

impl fmt::Display for FrameworkIdentifier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for FrameworkIdentifier {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

fn upper_first(segment: &str) -> String {
  let mut chars = segment.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
  }
}

fn lower_first(segment: &str) -> String {
  let mut chars = segment.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn valid_accepts_snake_case() {
    assert!(FrameworkIdentifier::new("bool_attribute").valid());
    assert!(FrameworkIdentifier::new("_private").valid());
    assert!(FrameworkIdentifier::new("attr2").valid());
  }

  #[test]
  fn valid_rejects_bad_names() {
    assert!(!FrameworkIdentifier::new("").valid());
    assert!(!FrameworkIdentifier::new("2fast").valid());
    assert!(!FrameworkIdentifier::new("Upper").valid());
    assert!(!FrameworkIdentifier::new("has-dash").valid());
    assert!(!FrameworkIdentifier::new("has space").valid());
  }

  #[test]
  fn pascal_case_splits_on_underscore() {
    assert_eq!(FrameworkIdentifier::new("bool_attribute").to_pascal_case(), "BoolAttribute");
    assert_eq!(FrameworkIdentifier::new("a_b_c").to_pascal_case(), "ABC");
    assert_eq!(FrameworkIdentifier::new("single").to_pascal_case(), "Single");
  }

  #[test]
  fn camel_case_lowers_first_segment() {
    assert_eq!(FrameworkIdentifier::new("bool_attribute").to_camel_case(), "boolAttribute");
    assert_eq!(FrameworkIdentifier::new("single").to_camel_case(), "single");
  }

  #[test]
  fn consecutive_underscores_collapse_in_casing() {
    assert_eq!(FrameworkIdentifier::new("a__b").to_pascal_case(), "AB");
    assert_eq!(FrameworkIdentifier::new("a__b").to_camel_case(), "aB");
  }

  #[test]
  fn reserved_names_get_prefixed() {
    let name = FrameworkIdentifier::new("type");
    assert_eq!(name.to_prefix_pascal_case("example_resource"), "ExampleResourceType");
    assert_eq!(name.to_prefix_camel_case("example_resource"), "exampleResourceType");
  }

  #[test]
  fn unreserved_names_pass_through_unprefixed() {
    let name = FrameworkIdentifier::new("type_of_thing");
    assert_eq!(name.to_prefix_pascal_case("example"), "TypeOfThing");
    assert_eq!(name.to_prefix_camel_case("example"), "typeOfThing");
  }

  #[test]
  fn every_reserved_method_name_collides() {
    for raw in [
      "attribute_types",
      "equal",
      "is_null",
      "is_unknown",
      "string",
      "to_object_value",
      "to_terraform_value",
      "type",
    ] {
      let name = FrameworkIdentifier::new(raw);
      assert!(
        name.to_prefix_pascal_case("thing").starts_with("Thing"),
        "{raw} should be prefixed"
      );
    }
  }
}
