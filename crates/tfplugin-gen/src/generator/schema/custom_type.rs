//! Rendering for the `CustomType:` field. An explicit spec-supplied custom
//! type is used verbatim; otherwise an associated external type synthesizes a
//! reference to the would-be generated value type; otherwise nothing is
//! emitted and the attribute falls back to the framework's built-in type.

use super::{
  element_type,
  imports::{Imports, TYPES_IMPORT},
};
use crate::{
  naming::FrameworkIdentifier,
  spec::{AssociatedExternalType, CustomType, ObjectAttributeType},
};

#[must_use]
pub(crate) fn primitive_fragment(
  custom: Option<&CustomType>,
  associated: Option<&AssociatedExternalType>,
  name: &FrameworkIdentifier,
  schema_name: &FrameworkIdentifier,
) -> Option<String> {
  if let Some(custom) = custom {
    return Some(explicit_fragment(custom));
  }
  associated.map(|_| format!("CustomType: {}Type{{}},\n", name.to_prefix_pascal_case(schema_name.as_str())))
}

#[must_use]
pub(crate) fn collection_fragment(
  custom: Option<&CustomType>,
  associated: Option<&AssociatedExternalType>,
  name: &FrameworkIdentifier,
  schema_name: &FrameworkIdentifier,
  collection_kind: &str,
  element_literal: &str,
) -> Option<String> {
  if let Some(custom) = custom {
    return Some(explicit_fragment(custom));
  }
  associated.map(|_| {
    format!(
      "CustomType: {pascal}Type{{\ntypes.{collection_kind}Type{{\nElemType: {element_literal},\n}},\n}},\n",
      pascal = name.to_prefix_pascal_case(schema_name.as_str()),
    )
  })
}

/// Nested-object kinds always carry a custom type pointing at the generated
/// value type, unless the spec replaces it outright.
#[must_use]
pub(crate) fn nested_object_fragment(
  custom: Option<&CustomType>,
  name: &FrameworkIdentifier,
  schema_name: &FrameworkIdentifier,
) -> String {
  if let Some(custom) = custom {
    return explicit_fragment(custom);
  }

  let pascal = name.to_prefix_pascal_case(schema_name.as_str());
  format!(
    "CustomType: {pascal}Type{{\nObjectType: types.ObjectType{{\nAttrTypes: {pascal}Value{{}}.AttributeTypes(ctx),\n}},\n}},\n"
  )
}

/// Object attributes synthesize a wrapper type, not a generated object value,
/// so the attr types map is inlined: the zero wrapper value has no attribute
/// types to report.
#[must_use]
pub(crate) fn object_fragment(
  custom: Option<&CustomType>,
  associated: Option<&AssociatedExternalType>,
  attribute_types: &[ObjectAttributeType],
  name: &FrameworkIdentifier,
  schema_name: &FrameworkIdentifier,
) -> Option<String> {
  if let Some(custom) = custom {
    return Some(explicit_fragment(custom));
  }
  associated.map(|_| {
    format!(
      "CustomType: {pascal}Type{{\nObjectType: types.ObjectType{{\nAttrTypes: {literal},\n}},\n}},\n",
      pascal = name.to_prefix_pascal_case(schema_name.as_str()),
      literal = element_type::attr_types_literal(attribute_types),
    )
  })
}

fn explicit_fragment(custom: &CustomType) -> String {
  format!("CustomType: {},\n", custom.type_name)
}

/// Imports implied by the rendered `CustomType:` fragment: the explicit
/// type's import when present, otherwise the framework types package for the
/// synthesized literal.
#[must_use]
pub(crate) fn imports(
  custom: Option<&CustomType>,
  associated: Option<&AssociatedExternalType>,
) -> Imports {
  let mut imports = Imports::new();
  if let Some(custom) = custom {
    if let Some(import) = &custom.import {
      imports.add(import.clone());
    }
    return imports;
  }

  if let Some(associated) = associated {
    imports.add_path(TYPES_IMPORT);
    if let Some(import) = &associated.import {
      imports.add(import.clone());
    }
  }
  imports
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::spec::{ElementType, Import, PrimitiveElement};

  fn explicit() -> CustomType {
    CustomType {
      import: Some(Import::new("example.com/sdk")),
      type_name: "sdk.ThingType{}".to_string(),
      value_type: Some("sdk.ThingValue".to_string()),
    }
  }

  fn associated() -> AssociatedExternalType {
    AssociatedExternalType {
      import: Some(Import::new("example.com/apisdk")),
      type_name: "*apisdk.Thing".to_string(),
    }
  }

  #[test]
  fn explicit_custom_type_wins_over_associated() {
    let fragment = primitive_fragment(
      Some(&explicit()),
      Some(&associated()),
      &FrameworkIdentifier::new("flag"),
      &FrameworkIdentifier::new("thing"),
    )
    .unwrap();

    assert_eq!(fragment, "CustomType: sdk.ThingType{},\n");
    assert!(!fragment.contains("FlagType"));
  }

  #[test]
  fn associated_type_synthesizes_generated_name() {
    let fragment = primitive_fragment(
      None,
      Some(&associated()),
      &FrameworkIdentifier::new("flag"),
      &FrameworkIdentifier::new("thing"),
    )
    .unwrap();

    assert_eq!(fragment, "CustomType: FlagType{},\n");
  }

  #[test]
  fn neither_present_emits_nothing() {
    assert_eq!(
      primitive_fragment(None, None, &FrameworkIdentifier::new("flag"), &FrameworkIdentifier::new("thing")),
      None
    );
  }

  #[test]
  fn object_attribute_fragment_inlines_its_attr_types() {
    let attribute_types = vec![ObjectAttributeType {
      name: FrameworkIdentifier::new("env"),
      element: ElementType::String(PrimitiveElement::default()),
    }];

    let fragment = object_fragment(
      None,
      Some(&associated()),
      &attribute_types,
      &FrameworkIdentifier::new("metadata"),
      &FrameworkIdentifier::new("thing"),
    )
    .unwrap();

    assert_eq!(
      fragment,
      "CustomType: MetadataType{\nObjectType: types.ObjectType{\nAttrTypes: map[string]attr.Type{\n\"env\": types.StringType,\n},\n},\n},\n"
    );
    assert!(!fragment.contains("AttributeTypes(ctx)"));
  }

  #[test]
  fn nested_object_always_synthesizes() {
    let fragment = nested_object_fragment(None, &FrameworkIdentifier::new("settings"), &FrameworkIdentifier::new("thing"));
    assert!(fragment.starts_with("CustomType: SettingsType{\n"));
    assert!(fragment.contains("SettingsValue{}.AttributeTypes(ctx)"));
  }

  #[test]
  fn reserved_attribute_name_is_prefixed_in_synthesized_type() {
    let fragment = nested_object_fragment(None, &FrameworkIdentifier::new("type"), &FrameworkIdentifier::new("thing"));
    assert!(fragment.contains("ThingTypeType{"));
    assert!(fragment.contains("ThingTypeValue{}"));
  }

  #[test]
  fn imports_follow_the_emitted_branch() {
    let explicit_imports = imports(Some(&explicit()), Some(&associated()));
    assert!(explicit_imports.contains("example.com/sdk"));
    assert!(!explicit_imports.contains("example.com/apisdk"));

    let synthesized = imports(None, Some(&associated()));
    assert!(synthesized.contains(TYPES_IMPORT));
    assert!(synthesized.contains("example.com/apisdk"));

    assert!(imports(None, None).is_empty());
  }
}
