//! Rendering for `Default:` fragments. A static literal default is checked
//! before a custom schema-definition default, so only one form is ever
//! emitted even when both fields are populated.

use super::{
  go_string,
  imports::{DEFAULT_BOOL_IMPORT, DEFAULT_FLOAT64_IMPORT, DEFAULT_INT64_IMPORT, DEFAULT_STRING_IMPORT, Imports},
};
use crate::spec::{BoolDefault, CollectionDefault, CustomDefault, Float64Default, Int64Default, StringDefault};

#[must_use]
pub(crate) fn bool_fragment(default: &BoolDefault) -> Option<String> {
  if let Some(static_value) = default.static_value {
    return Some(format!("Default: booldefault.StaticBool({static_value}),\n"));
  }
  default.custom.as_ref().and_then(custom_fragment)
}

#[must_use]
pub(crate) fn float64_fragment(default: &Float64Default) -> Option<String> {
  if let Some(static_value) = default.static_value {
    return Some(format!("Default: float64default.StaticFloat64({static_value}),\n"));
  }
  default.custom.as_ref().and_then(custom_fragment)
}

#[must_use]
pub(crate) fn int64_fragment(default: &Int64Default) -> Option<String> {
  if let Some(static_value) = default.static_value {
    return Some(format!("Default: int64default.StaticInt64({static_value}),\n"));
  }
  default.custom.as_ref().and_then(custom_fragment)
}

#[must_use]
pub(crate) fn string_fragment(default: &StringDefault) -> Option<String> {
  if let Some(static_value) = &default.static_value {
    return Some(format!("Default: stringdefault.StaticString({}),\n", go_string(static_value)));
  }
  default.custom.as_ref().and_then(custom_fragment)
}

#[must_use]
pub(crate) fn collection_fragment(default: &CollectionDefault) -> Option<String> {
  default.custom.as_ref().and_then(custom_fragment)
}

fn custom_fragment(custom: &CustomDefault) -> Option<String> {
  if custom.schema_definition.is_empty() {
    return None;
  }
  Some(format!("Default: {},\n", custom.schema_definition))
}

#[must_use]
pub(crate) fn bool_imports(default: &BoolDefault) -> Imports {
  static_or_custom_imports(default.static_value.is_some(), DEFAULT_BOOL_IMPORT, default.custom.as_ref())
}

#[must_use]
pub(crate) fn float64_imports(default: &Float64Default) -> Imports {
  static_or_custom_imports(default.static_value.is_some(), DEFAULT_FLOAT64_IMPORT, default.custom.as_ref())
}

#[must_use]
pub(crate) fn int64_imports(default: &Int64Default) -> Imports {
  static_or_custom_imports(default.static_value.is_some(), DEFAULT_INT64_IMPORT, default.custom.as_ref())
}

#[must_use]
pub(crate) fn string_imports(default: &StringDefault) -> Imports {
  static_or_custom_imports(default.static_value.is_some(), DEFAULT_STRING_IMPORT, default.custom.as_ref())
}

#[must_use]
pub(crate) fn collection_imports(default: &CollectionDefault) -> Imports {
  static_or_custom_imports(false, "", default.custom.as_ref())
}

fn static_or_custom_imports(has_static: bool, static_path: &str, custom: Option<&CustomDefault>) -> Imports {
  let mut imports = Imports::new();
  if has_static {
    imports.add_path(static_path);
    return imports;
  }

  if let Some(custom) = custom
    && !custom.schema_definition.is_empty()
  {
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

  fn custom_default() -> CustomDefault {
    CustomDefault {
      imports: vec![Import::new("example.com/defaults")],
      schema_definition: "mydefault.Value()".to_string(),
    }
  }

  #[test]
  fn static_bool_wins_over_custom() {
    let default = BoolDefault {
      static_value: Some(true),
      custom: Some(custom_default()),
    };

    let fragment = bool_fragment(&default).unwrap();
    assert_eq!(fragment, "Default: booldefault.StaticBool(true),\n");
    assert!(!fragment.contains("mydefault.Value()"));

    let imports = bool_imports(&default);
    assert!(imports.contains(DEFAULT_BOOL_IMPORT));
    assert!(!imports.contains("example.com/defaults"));
  }

  #[test]
  fn custom_used_when_no_static() {
    let default = Int64Default {
      static_value: None,
      custom: Some(custom_default()),
    };

    assert_eq!(int64_fragment(&default).unwrap(), "Default: mydefault.Value(),\n");
    assert!(int64_imports(&default).contains("example.com/defaults"));
  }

  #[test]
  fn string_static_is_quoted() {
    let default = StringDefault {
      static_value: Some("a \"b\"".to_string()),
      custom: None,
    };

    assert_eq!(
      string_fragment(&default).unwrap(),
      "Default: stringdefault.StaticString(\"a \\\"b\\\"\"),\n"
    );
  }

  #[test]
  fn empty_custom_definition_emits_nothing() {
    let default = CollectionDefault {
      custom: Some(CustomDefault {
        imports: vec![Import::new("example.com/defaults")],
        schema_definition: String::new(),
      }),
    };

    assert_eq!(collection_fragment(&default), None);
    assert!(collection_imports(&default).is_empty());
  }

  #[test]
  fn float64_static_renders_value() {
    let default = Float64Default {
      static_value: Some(1.25),
      custom: None,
    };
    assert_eq!(float64_fragment(&default).unwrap(), "Default: float64default.StaticFloat64(1.25),\n");
  }
}
