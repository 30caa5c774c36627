//! Implementor docs block: per-function link lists.
//!
//! Every function gets a `|F-implementors_docs|` substitution expanding to
//! a bullet list with the MPICH and OpenMPI man pages. Functions with a
//! known node in the MPI 3.1 standard get a second bullet list linking the
//! standard document; the fragment shape is chosen by whether the record
//! carries a node id.

use crate::emit::{mpich_url, open_mpi_url, standard_url};
use crate::registry::{FunctionRecord, Registry};

/// Render the implementor docs fragment for a single record.
///
/// The substitution header and its body are adjacent lines of one
/// fragment; no separator is required between them.
#[must_use]
pub fn implementors_fragment(record: &FunctionRecord) -> String {
    let name = &record.name;
    let mut lines = Vec::new();

    lines.push(format!(".. |{name}-implementors_docs| raw:: html"));
    lines.push(String::new());
    push_link_list(
        &mut lines,
        "Documentation from implementors:",
        &[
            (mpich_url(name), "MPICH"),
            (open_mpi_url(name), "OpenMPI"),
        ],
    );

    if let Some(node) = record.standard_node {
        push_link_list(
            &mut lines,
            "Documentation in the standard:",
            &[(standard_url(node), "MPI standard 3.1")],
        );
    }

    lines.join("\n")
}

/// Render the implementor docs block for a whole registry, one fragment
/// per record in registry order.
#[must_use]
pub fn implementors_block(registry: &Registry) -> String {
    registry
        .records()
        .map(implementors_fragment)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Append a captioned bullet list of external links. Every line is
/// indented three spaces to sit inside the `raw:: html` directive body.
fn push_link_list(lines: &mut Vec<String>, caption: &str, links: &[(String, &str)]) {
    lines.push(format!("   <p>{caption}</p>"));
    lines.push("   <div>".to_string());
    lines.push("   <ul class=\"simple\">".to_string());
    for (url, text) in links {
        lines.push(format!(
            "   <li><p><a class=\"reference external\" href=\"{url}\">{text}</a></p></li>"
        ));
    }
    lines.push("   </ul>".to_string());
    lines.push("   </div>".to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Lesson;

    #[test]
    fn test_fragment_header() {
        let frag = implementors_fragment(&FunctionRecord::new("MPI_Get"));
        assert!(frag.starts_with(".. |MPI_Get-implementors_docs| raw:: html"));
    }

    #[test]
    fn test_fragment_without_node_has_one_link_list() {
        let frag = implementors_fragment(&FunctionRecord::new("MPI_Win_fence"));
        assert_eq!(frag.matches("<ul class=\"simple\">").count(), 1);
        assert_eq!(frag.matches("reference external").count(), 2);
        assert!(frag.contains("MPICH"));
        assert!(frag.contains("OpenMPI"));
        assert!(!frag.contains("MPI standard 3.1"));
    }

    #[test]
    fn test_fragment_with_node_has_two_link_lists() {
        let frag = implementors_fragment(&FunctionRecord::with_node("MPI_Wait", 64));
        assert_eq!(frag.matches("<ul class=\"simple\">").count(), 2);
        assert_eq!(frag.matches("reference external").count(), 3);
        assert!(frag.contains("MPI standard 3.1"));
        // second block's single URL carries the id twice
        let standard = frag.split("Documentation in the standard:").nth(1).unwrap();
        assert_eq!(standard.matches("64").count(), 2);
    }

    #[test]
    fn test_fragment_node_zero_is_known() {
        // 0 is a valid node id, not an "unknown" sentinel
        let frag = implementors_fragment(&FunctionRecord::with_node("MPI_Init", 0));
        assert!(frag.contains("node0.htm#Node0.html"));
    }

    #[test]
    fn test_mpi_get_270_standard_anchor() {
        let frag = implementors_fragment(&FunctionRecord::with_node("MPI_Get", 270));
        assert_eq!(frag.matches("node270.htm#Node270").count(), 1);
    }

    #[test]
    fn test_fragment_implementor_urls_interpolate_name() {
        let frag = implementors_fragment(&FunctionRecord::new("MPI_Allgatherv"));
        assert!(
            frag.contains("https://www.mpich.org/static/docs/latest/www3/MPI_Allgatherv.html")
        );
        assert!(frag.contains("https://www.open-mpi.org/doc/current/man3/MPI_Allgatherv.3.php"));
    }

    #[test]
    fn test_block_joins_fragments_in_order() {
        let reg = Registry {
            lessons: vec![Lesson {
                id: "x".to_string(),
                title: String::new(),
                functions: vec![
                    FunctionRecord::new("MPI_Get"),
                    FunctionRecord::with_node("MPI_Wait", 64),
                ],
            }],
        };
        let block = implementors_block(&reg);
        let expected = format!(
            "{}\n\n{}",
            implementors_fragment(&FunctionRecord::new("MPI_Get")),
            implementors_fragment(&FunctionRecord::with_node("MPI_Wait", 64))
        );
        assert_eq!(block, expected);
    }

    #[test]
    fn test_block_empty_registry() {
        assert_eq!(implementors_block(&Registry::default()), "");
    }
}
