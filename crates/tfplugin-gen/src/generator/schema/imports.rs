use indexmap::IndexMap;
use itertools::Itertools;

use crate::spec::Import;

pub(crate) const CONTEXT_IMPORT: &str = "context";
pub(crate) const FMT_IMPORT: &str = "fmt";
pub(crate) const BIG_IMPORT: &str = "math/big";

pub(crate) const ATTR_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/attr";
pub(crate) const DIAG_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/diag";
pub(crate) const TYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/types";
pub(crate) const BASETYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/types/basetypes";
pub(crate) const VALIDATOR_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/schema/validator";
pub(crate) const PLAN_MODIFIER_IMPORT: &str =
  "github.com/hashicorp/terraform-plugin-framework/resource/schema/planmodifier";
pub(crate) const DEFAULT_BOOL_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/resource/schema/booldefault";
pub(crate) const DEFAULT_FLOAT64_IMPORT: &str =
  "github.com/hashicorp/terraform-plugin-framework/resource/schema/float64default";
pub(crate) const DEFAULT_INT64_IMPORT: &str =
  "github.com/hashicorp/terraform-plugin-framework/resource/schema/int64default";
pub(crate) const DEFAULT_STRING_IMPORT: &str =
  "github.com/hashicorp/terraform-plugin-framework/resource/schema/stringdefault";
pub(crate) const TFTYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-go/tftypes";

/// Order-preserving, path-deduplicated set of Go import declarations.
/// Appending an already-present path is a no-op; the first alias wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Imports {
  entries: IndexMap<String, Import>,
}

impl Imports {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add(&mut self, import: Import) {
    self.entries.entry(import.path.clone()).or_insert(import);
  }

  pub fn add_path(&mut self, path: impl Into<String>) {
    self.add(Import::new(path.into()));
  }

  pub fn extend(&mut self, other: Imports) {
    for (_, import) in other.entries {
      self.add(import);
    }
  }

  pub fn iter(&self) -> impl Iterator<Item = &Import> {
    self.entries.values()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  #[must_use]
  pub fn contains(&self, path: &str) -> bool {
    self.entries.contains_key(path)
  }

  /// Renders the `import ( ... )` block in insertion order. Grouping and
  /// sorting are left to the consumer's formatter.
  #[must_use]
  pub fn render(&self) -> String {
    if self.entries.is_empty() {
      return String::new();
    }

    let body = self
      .entries
      .values()
      .map(|import| match &import.alias {
        Some(alias) => format!("{alias} \"{}\"", import.path),
        None => format!("\"{}\"", import.path),
      })
      .join("\n");

    format!("import (\n{body}\n)\n")
  }
}

impl FromIterator<Import> for Imports {
  fn from_iter<T: IntoIterator<Item = Import>>(iter: T) -> Self {
    let mut imports = Imports::new();
    for import in iter {
      imports.add(import);
    }
    imports
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn appending_duplicate_path_is_idempotent() {
    let mut imports = Imports::new();
    imports.add_path(TYPES_IMPORT);
    imports.add_path(TYPES_IMPORT);
    imports.add_path(ATTR_IMPORT);
    imports.add_path(TYPES_IMPORT);

    assert_eq!(imports.len(), 2);
    let paths: Vec<_> = imports.iter().map(|i| i.path.as_str()).collect();
    assert_eq!(paths, vec![TYPES_IMPORT, ATTR_IMPORT]);
  }

  #[test]
  fn first_alias_wins() {
    let mut imports = Imports::new();
    imports.add(Import {
      path: "example.com/sdk".to_string(),
      alias: Some("sdk1".to_string()),
    });
    imports.add(Import {
      path: "example.com/sdk".to_string(),
      alias: Some("sdk2".to_string()),
    });

    assert_eq!(imports.len(), 1);
    assert_eq!(imports.iter().next().unwrap().alias.as_deref(), Some("sdk1"));
  }

  #[test]
  fn render_preserves_insertion_order() {
    let mut imports = Imports::new();
    imports.add_path(CONTEXT_IMPORT);
    imports.add(Import {
      path: "example.com/sdk".to_string(),
      alias: Some("sdk".to_string()),
    });

    assert_eq!(imports.render(), "import (\n\"context\"\nsdk \"example.com/sdk\"\n)\n");
  }

  #[test]
  fn empty_set_renders_nothing() {
    assert_eq!(Imports::new().render(), "");
  }
}
