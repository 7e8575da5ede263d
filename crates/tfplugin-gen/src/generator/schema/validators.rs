//! Rendering for `Validators:` and `PlanModifiers:` slice literals. Entries
//! with an empty schema definition are skipped; when none survive, no field
//! is emitted at all.

use itertools::Itertools;

use super::imports::{Imports, PLAN_MODIFIER_IMPORT, VALIDATOR_IMPORT};
use crate::spec::CustomValidator;

fn entries(customs: &[CustomValidator]) -> Vec<&CustomValidator> {
  customs.iter().filter(|c| !c.schema_definition.is_empty()).collect()
}

fn slice_literal(field: &str, package: &str, kind: &str, customs: &[CustomValidator]) -> Option<String> {
  let surviving = entries(customs);
  if surviving.is_empty() {
    return None;
  }

  let body = surviving.iter().map(|c| format!("{},", c.schema_definition)).join("\n");
  Some(format!("{field}: []{package}.{kind}{{\n{body}\n}},\n"))
}

/// `Validators: []validator.<Kind>{ ... },`
#[must_use]
pub(crate) fn validators_fragment(kind: &str, customs: &[CustomValidator]) -> Option<String> {
  slice_literal("Validators", "validator", kind, customs)
}

/// `PlanModifiers: []planmodifier.<Kind>{ ... },`
#[must_use]
pub(crate) fn plan_modifiers_fragment(kind: &str, customs: &[CustomValidator]) -> Option<String> {
  slice_literal("PlanModifiers", "planmodifier", kind, customs)
}

/// Imports implied by a validator list: the framework validator package when
/// anything is emitted, plus every entry's own imports.
#[must_use]
pub(crate) fn validators_imports(customs: &[CustomValidator]) -> Imports {
  slice_imports(VALIDATOR_IMPORT, customs)
}

#[must_use]
pub(crate) fn plan_modifiers_imports(customs: &[CustomValidator]) -> Imports {
  slice_imports(PLAN_MODIFIER_IMPORT, customs)
}

fn slice_imports(framework_path: &str, customs: &[CustomValidator]) -> Imports {
  let surviving = entries(customs);
  let mut imports = Imports::new();
  if surviving.is_empty() {
    return imports;
  }

  imports.add_path(framework_path);
  for custom in surviving {
    for import in &custom.imports {
      imports.add(import.clone());
    }
  }
  imports
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::spec::Import;

  fn custom(definition: &str) -> CustomValidator {
    CustomValidator {
      imports: vec![],
      schema_definition: definition.to_string(),
    }
  }

  #[test]
  fn empty_definitions_are_skipped() {
    let fragment = validators_fragment("String", &[custom(""), custom("stringvalidator.LengthAtLeast(1)")]);
    assert_eq!(
      fragment.unwrap(),
      "Validators: []validator.String{\nstringvalidator.LengthAtLeast(1),\n},\n"
    );
  }

  #[test]
  fn all_empty_emits_no_field() {
    assert_eq!(validators_fragment("Bool", &[custom(""), custom("")]), None);
    assert_eq!(validators_fragment("Bool", &[]), None);
  }

  #[test]
  fn plan_modifiers_use_planmodifier_package() {
    let fragment = plan_modifiers_fragment("Bool", &[custom("boolplanmodifier.RequiresReplace()")]);
    assert_eq!(
      fragment.unwrap(),
      "PlanModifiers: []planmodifier.Bool{\nboolplanmodifier.RequiresReplace(),\n},\n"
    );
  }

  #[test]
  fn imports_include_framework_package_and_entry_imports() {
    let validators = [CustomValidator {
      imports: vec![Import::new("example.com/validators")],
      schema_definition: "myvalidator.Check()".to_string(),
    }];

    let imports = validators_imports(&validators);
    assert!(imports.contains(VALIDATOR_IMPORT));
    assert!(imports.contains("example.com/validators"));
  }

  #[test]
  fn skipped_entries_contribute_no_imports() {
    let validators = [CustomValidator {
      imports: vec![Import::new("example.com/unused")],
      schema_definition: String::new(),
    }];

    assert!(validators_imports(&validators).is_empty());
  }
}
