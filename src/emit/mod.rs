//! The glossary emitter: registry in, reStructuredText epilog out.
//!
//! Two blocks are produced, in registry order:
//! - the term block ([`term::term_block`]): substitution aliases and
//!   quick-reference cross-links for every function name,
//! - the implementor docs block ([`implementors::implementors_block`]):
//!   per-function link lists to implementor man pages and, where the node
//!   id is known, the MPI 3.1 standard document.
//!
//! Emission is a pure function of the registry. Nothing is cached; the
//! whole epilog is recomputed on each call, which is linear in the number
//! of records.

pub mod implementors;
pub mod term;

use crate::registry::Registry;

/// MPICH man page URL for a function.
#[must_use]
pub fn mpich_url(name: &str) -> String {
    format!("https://www.mpich.org/static/docs/latest/www3/{name}.html")
}

/// OpenMPI man page URL for a function.
#[must_use]
pub fn open_mpi_url(name: &str) -> String {
    format!("https://www.open-mpi.org/doc/current/man3/{name}.3.php")
}

/// URL of a node in the MPI 3.1 standard document.
///
/// The node id appears twice: once in the page name and once in the
/// anchor fragment.
#[must_use]
pub fn standard_url(node: u32) -> String {
    format!("https://www.mpi-forum.org/docs/mpi-3.1/mpi31-report/node{node}.htm#Node{node}.html")
}

/// Build the complete epilog: the term block followed by the implementor
/// docs block, ready to be handed to Sphinx as `rst_epilog`.
///
/// An empty registry yields an empty string.
#[must_use]
pub fn epilog(registry: &Registry) -> String {
    if registry.is_empty() {
        return String::new();
    }

    format!(
        "{}\n\n{}\n",
        term::term_block(registry),
        implementors::implementors_block(registry)
    )
}
