//! Variable and reference resolution
//!
//! `@name` refers to a variable definition (`@name = value`), `@@name` is a
//! reference one level removed. Both forms look up the bare name first as a
//! variable definition (`@name`), then as an ordinary property (`name`), so
//! `@@Button.background` can point at a regular key.

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::properties::{PropertyTable, REFERENCE_PREFIX, VARIABLE_PREFIX};

/// Resolve `token` against `table`.
///
/// Tokens without the `@` sigil are returned unchanged. An unresolved name
/// records an [`DiagnosticKind::UnresolvedVariable`] and yields `None`;
/// callers skip the entry.
pub fn resolve<'a>(
    table: &'a PropertyTable,
    token: &'a str,
    diagnostics: &mut Diagnostics,
) -> Option<&'a str> {
    let trimmed = token.trim();
    let Some(name) = variable_name(trimmed) else {
        return Some(token);
    };

    let variable_key = format!("{VARIABLE_PREFIX}{name}");
    if let Some(value) = table.get(&variable_key).or_else(|| table.get(name)) {
        return Some(value);
    }

    diagnostics.push(
        DiagnosticKind::UnresolvedVariable,
        format!("variable or reference '{trimmed}' not found"),
    );
    None
}

/// Bare name of a `@name` / `@@name` token, `None` for plain values
fn variable_name(token: &str) -> Option<&str> {
    if let Some(name) = token.strip_prefix(REFERENCE_PREFIX) {
        return Some(name);
    }
    token.strip_prefix(VARIABLE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PropertyTable {
        [
            ("@primary", "336699"),
            ("Button.background", "FFFFFF"),
            ("Button.foreground", "@primary"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn plain_values_pass_through() {
        let mut diags = Diagnostics::new();
        assert_eq!(resolve(&table(), "112233", &mut diags), Some("112233"));
        assert!(diags.is_empty());
    }

    #[test]
    fn variable_and_reference_resolve_identically() {
        let table = table();
        let mut diags = Diagnostics::new();
        assert_eq!(resolve(&table, "@primary", &mut diags), Some("336699"));
        assert_eq!(resolve(&table, "@@primary", &mut diags), Some("336699"));
        assert!(diags.is_empty());
    }

    #[test]
    fn reference_to_ordinary_property() {
        let mut diags = Diagnostics::new();
        assert_eq!(
            resolve(&table(), "@@Button.background", &mut diags),
            Some("FFFFFF")
        );
    }

    #[test]
    fn resolution_is_single_level() {
        // Button.foreground holds `@primary`; a reference to it yields the
        // raw token, not the color.
        let mut diags = Diagnostics::new();
        assert_eq!(
            resolve(&table(), "@@Button.foreground", &mut diags),
            Some("@primary")
        );
    }

    #[test]
    fn missing_names_are_reported() {
        let mut diags = Diagnostics::new();
        assert_eq!(resolve(&table(), "@nope", &mut diags), None);
        assert_eq!(resolve(&table(), "@@nope", &mut diags), None);
        assert_eq!(diags.count(DiagnosticKind::UnresolvedVariable), 2);
    }
}
