//! Term block: substitution aliases and quick-reference cross-links.
//!
//! For every function `F` the site gets two substitutions: `|F|`, which
//! renders the name in monospace, and `|term-F|`, a raw-HTML anchor into
//! the quick-reference glossary. The raw-HTML route is the only way to get
//! consistent monospace formatting inside a Sphinx `:term:`-style link.

use crate::registry::{FunctionRecord, Registry};

/// Render the term fragment for a single record.
///
/// The standard-node id plays no role here; the term block is identical
/// for records with and without a known node.
#[must_use]
pub fn term_fragment(record: &FunctionRecord) -> String {
    let name = &record.name;
    let mut lines = Vec::new();

    lines.push(format!(".. |{name}| replace:: ``{name}``"));
    lines.push(format!(".. |term-{name}| raw:: html"));
    lines.push(String::new());
    lines.push(format!(
        "   <a class=\"reference internal\" href=\"../quick-reference/#term-{name}\">\
         <span class=\"xref std std-term\">\
         <code class=\"docutils literal notranslate\">{name}</code></span></a>"
    ));

    lines.join("\n")
}

/// Render the term block for a whole registry: one fragment per record in
/// registry order, separated by blank lines.
#[must_use]
pub fn term_block(registry: &Registry) -> String {
    registry
        .records()
        .map(term_fragment)
        .collect::<Vec<_>>()
        .join("\n\n")
}
