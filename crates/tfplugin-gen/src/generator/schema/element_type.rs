//! Recursive rendering of collection element types and object attribute type
//! maps. A custom type at any recursion level takes precedence over the
//! built-in literal.

use itertools::Itertools;

use super::imports::{ATTR_IMPORT, Imports, TYPES_IMPORT};
use crate::spec::{ElementType, ObjectAttributeType};

/// The `attr.Type` literal for one element type.
#[must_use]
pub(crate) fn type_literal(element: &ElementType) -> String {
  if let Some(custom) = element.custom_type() {
    return custom.type_name.clone();
  }

  match element {
    ElementType::Bool(_) => "types.BoolType".to_string(),
    ElementType::Float64(_) => "types.Float64Type".to_string(),
    ElementType::Int64(_) => "types.Int64Type".to_string(),
    ElementType::Number(_) => "types.NumberType".to_string(),
    ElementType::String(_) => "types.StringType".to_string(),
    ElementType::List(collection) => format!(
      "types.ListType{{\nElemType: {},\n}}",
      type_literal(&collection.element_type)
    ),
    ElementType::Map(collection) => format!(
      "types.MapType{{\nElemType: {},\n}}",
      type_literal(&collection.element_type)
    ),
    ElementType::Set(collection) => format!(
      "types.SetType{{\nElemType: {},\n}}",
      type_literal(&collection.element_type)
    ),
    ElementType::Object(object) => format!(
      "types.ObjectType{{\nAttrTypes: {},\n}}",
      attr_types_literal(&object.attribute_types)
    ),
  }
}

/// `map[string]attr.Type{ ... }` in the attribute types' authored order.
#[must_use]
pub(crate) fn attr_types_literal(attribute_types: &[ObjectAttributeType]) -> String {
  let body = attribute_types
    .iter()
    .map(|attribute_type| format!("\"{}\": {},", attribute_type.name, type_literal(&attribute_type.element)))
    .join("\n");

  if body.is_empty() {
    "map[string]attr.Type{}".to_string()
  } else {
    format!("map[string]attr.Type{{\n{body}\n}}")
  }
}

/// `ElementType: <literal>,`
#[must_use]
pub(crate) fn element_type_fragment(element: &ElementType) -> String {
  format!("ElementType: {},\n", type_literal(element))
}

/// `AttributeTypes: <map literal>,`
#[must_use]
pub(crate) fn attribute_types_fragment(attribute_types: &[ObjectAttributeType]) -> String {
  format!("AttributeTypes: {},\n", attr_types_literal(attribute_types))
}

#[must_use]
pub(crate) fn element_imports(element: &ElementType) -> Imports {
  let mut imports = Imports::new();
  collect_imports(element, &mut imports);
  imports
}

#[must_use]
pub(crate) fn attr_types_imports(attribute_types: &[ObjectAttributeType]) -> Imports {
  let mut imports = Imports::new();
  imports.add_path(ATTR_IMPORT);
  imports.add_path(TYPES_IMPORT);
  for attribute_type in attribute_types {
    collect_imports(&attribute_type.element, &mut imports);
  }
  imports
}

fn collect_imports(element: &ElementType, imports: &mut Imports) {
  if let Some(custom) = element.custom_type() {
    if let Some(import) = &custom.import {
      imports.add(import.clone());
    }
    return;
  }

  imports.add_path(TYPES_IMPORT);
  match element {
    ElementType::List(collection) | ElementType::Map(collection) | ElementType::Set(collection) => {
      collect_imports(&collection.element_type, imports);
    }
    ElementType::Object(object) => {
      imports.add_path(ATTR_IMPORT);
      for attribute_type in &object.attribute_types {
        collect_imports(&attribute_type.element, imports);
      }
    }
    _ => {}
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    naming::FrameworkIdentifier,
    spec::{CollectionElement, CustomType, ObjectElement, PrimitiveElement},
  };

  fn string_element() -> ElementType {
    ElementType::String(PrimitiveElement::default())
  }

  #[test]
  fn primitive_literals() {
    assert_eq!(type_literal(&string_element()), "types.StringType");
    assert_eq!(type_literal(&ElementType::Number(PrimitiveElement::default())), "types.NumberType");
  }

  #[test]
  fn nested_collection_recurses() {
    let element = ElementType::List(Box::new(CollectionElement {
      custom_type: None,
      element_type: ElementType::Map(Box::new(CollectionElement {
        custom_type: None,
        element_type: string_element(),
      })),
    }));

    assert_eq!(
      type_literal(&element),
      "types.ListType{\nElemType: types.MapType{\nElemType: types.StringType,\n},\n}"
    );
  }

  #[test]
  fn object_renders_attr_types_map() {
    let element = ElementType::Object(ObjectElement {
      custom_type: None,
      attribute_types: vec![ObjectAttributeType {
        name: FrameworkIdentifier::new("flag"),
        element: ElementType::Bool(PrimitiveElement::default()),
      }],
    });

    assert_eq!(
      type_literal(&element),
      "types.ObjectType{\nAttrTypes: map[string]attr.Type{\n\"flag\": types.BoolType,\n},\n}"
    );
  }

  #[test]
  fn custom_type_wins_at_any_level() {
    let element = ElementType::List(Box::new(CollectionElement {
      custom_type: None,
      element_type: ElementType::String(PrimitiveElement {
        custom_type: Some(CustomType {
          import: Some(crate::spec::Import::new("example.com/sdk")),
          type_name: "sdk.StringishType{}".to_string(),
          value_type: None,
        }),
      }),
    }));

    assert_eq!(type_literal(&element), "types.ListType{\nElemType: sdk.StringishType{},\n}");

    let imports = element_imports(&element);
    assert!(imports.contains("example.com/sdk"));
    assert!(imports.contains(TYPES_IMPORT));
  }

  #[test]
  fn object_imports_include_attr_package() {
    let element = ElementType::Object(ObjectElement {
      custom_type: None,
      attribute_types: vec![],
    });
    assert!(element_imports(&element).contains(ATTR_IMPORT));
  }
}
