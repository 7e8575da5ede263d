//! `To<External>`/`From<External>` helpers on generated values.
//!
//! Object values map primitive children onto the external struct; collection
//! and nested children have no canonical external representation, so they are
//! left for the provider author to bridge. Primitive wrapper values convert
//! through their base pointer type in both directions.

use super::{
  templates,
  value_types::{ObjectChild, Primitive},
};
use crate::spec::AssociatedExternalType;

pub(super) fn render(pascal: &str, associated: &AssociatedExternalType, children: &[ObjectChild]) -> String {
  let external_pascal = associated.pascal_name();
  let external_type = associated.type_name.as_str();
  let external_literal = external_type.trim_start_matches('*');

  let to_assignments: String = children
    .iter()
    .filter_map(|child| {
      child
        .primitive
        .map(|primitive| format!("{}: {},\n", child.name.to_pascal_case(), primitive.to_expr(&child.field)))
    })
    .collect();
  let from_assignments: String = children
    .iter()
    .filter_map(|child| {
      child.primitive.map(|primitive| {
        format!(
          "{}: {},\n",
          child.field,
          primitive.from_expr(&format!("apiObject.{}", child.name.to_pascal_case()))
        )
      })
    })
    .collect();

  let mut out = templates::substitute(
    templates::OBJECT_TO_EXTERNAL,
    &[
      ("pascal", pascal),
      ("external_pascal", &external_pascal),
      ("external_type", external_type),
      ("external_literal", external_literal),
      ("to_assignments", &to_assignments),
    ],
  );
  out.push('\n');
  out.push_str(&templates::substitute(
    templates::OBJECT_FROM_EXTERNAL,
    &[
      ("pascal", pascal),
      ("external_pascal", &external_pascal),
      ("external_type", external_type),
      ("from_assignments", &from_assignments),
    ],
  ));
  out
}

/// Helpers on a primitive wrapper value. The external type is a pointer over
/// the kind's base Go type, so both directions reduce to pointer conversions.
pub(super) fn render_wrapper(
  pascal: &str,
  kind: &str,
  primitive: Primitive,
  associated: &AssociatedExternalType,
) -> String {
  let external_pascal = associated.pascal_name();
  let external_type = associated.type_name.as_str();

  let mut out = templates::substitute(
    templates::WRAPPER_TO_EXTERNAL,
    &[
      ("pascal", pascal),
      ("external_pascal", &external_pascal),
      ("external_type", external_type),
      ("accessor", primitive.wrapper_accessor()),
    ],
  );
  out.push('\n');
  out.push_str(&templates::substitute(
    templates::WRAPPER_FROM_EXTERNAL,
    &[
      ("pascal", pascal),
      ("external_pascal", &external_pascal),
      ("external_type", external_type),
      ("kind", kind),
      ("constructor", &primitive.wrapper_constructor("apiObject")),
    ],
  ));
  out
}
