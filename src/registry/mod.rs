//! The function registry: MPI function names grouped by topical lesson.
//!
//! The registry controls emission order. Lessons appear in the order they
//! are defined and functions in the order they are listed; the emitter
//! never reorders or deduplicates. Duplicate names across lessons are
//! tolerated (Sphinx applies last-wins substitution binding) and surfaced
//! by [`validation::validate`].

pub mod loader;
pub mod validation;

use serde::{Deserialize, Serialize};

/// A single glossary entry: an MPI function name, optionally paired with
/// the node identifier of its page in the MPI 3.1 standard document.
///
/// `standard_node` is `Some` for functions with a known position in the
/// standard. Node 0 is a valid identifier; "unknown" is only ever `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    /// Function name, e.g. `MPI_Isend`.
    pub name: String,

    /// Node id in the MPI 3.1 standard document, if known.
    #[serde(default)]
    pub standard_node: Option<u32>,
}

impl FunctionRecord {
    /// A record with no known position in the standard document.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            standard_node: None,
        }
    }

    /// A record with a known standard-document node.
    #[must_use]
    pub fn with_node(name: impl Into<String>, node: u32) -> Self {
        Self {
            name: name.into(),
            standard_node: Some(node),
        }
    }

    /// Build a record from the external signed-integer contract.
    ///
    /// Negative values mean "no known reference"; zero and above are valid
    /// node ids.
    #[must_use]
    pub fn from_signed(name: impl Into<String>, node: i64) -> Self {
        Self {
            name: name.into(),
            standard_node: u32::try_from(node).ok(),
        }
    }
}

/// An ordered group of functions covered by one lesson episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Lesson identifier (used in CLI filters), e.g. `non-blocking`.
    pub id: String,

    /// Human-readable lesson title.
    #[serde(default)]
    pub title: String,

    /// Ordered list of functions the lesson references.
    #[serde(default)]
    pub functions: Vec<FunctionRecord>,
}

/// The full registry: an ordered sequence of lessons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    /// Ordered list of lessons.
    pub lessons: Vec<Lesson>,
}

impl Registry {
    /// Iterate over all records in registry order (lessons in definition
    /// order, functions in listing order).
    pub fn records(&self) -> impl Iterator<Item = &FunctionRecord> {
        self.lessons.iter().flat_map(|l| l.functions.iter())
    }

    /// Total number of records across all lessons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.iter().map(|l| l.functions.len()).sum()
    }

    /// Returns `true` if no lesson defines any function.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.iter().all(|l| l.functions.is_empty())
    }

    /// The production registry used by the lesson site.
    ///
    /// Lesson order is fixed; it determines the order of the emitted
    /// markup fragments.
    #[must_use]
    pub fn builtin() -> Self {
        let plain = |names: &[&str]| -> Vec<FunctionRecord> {
            names.iter().copied().map(FunctionRecord::new).collect()
        };

        Self {
            lessons: vec![
                Lesson {
                    id: "communicators".to_string(),
                    title: "Communicators and groups".to_string(),
                    functions: plain(&[
                        "MPI_Comm_split",
                        "MPI_Comm_create",
                        "MPI_Comm_free",
                        "MPI_Comm_rank",
                        "MPI_Comm_size",
                        "MPI_Comm_group",
                        "MPI_Group_free",
                        "MPI_Cart_create",
                    ]),
                },
                Lesson {
                    id: "derived-datatypes".to_string(),
                    title: "Derived datatypes".to_string(),
                    functions: plain(&[
                        "MPI_Type_get_extent",
                        "MPI_Type_size",
                        "MPI_Pack",
                        "MPI_Unpack",
                        "MPI_Type_contiguous",
                        "MPI_Type_vector",
                        "MPI_Type_indexed",
                        "MPI_Type_create_hvector",
                        "MPI_Type_create_hindexed",
                        "MPI_Type_create_struct",
                        "MPI_Type_commit",
                        "MPI_Type_free",
                        "MPI_Op_create",
                        "MPI_Op_free",
                    ]),
                },
                Lesson {
                    id: "remote-memory-access".to_string(),
                    title: "Remote memory access".to_string(),
                    functions: plain(&[
                        "MPI_Get",
                        "MPI_Put",
                        "MPI_Accumulate",
                        "MPI_Win_create",
                        "MPI_Win_allocate",
                        "MPI_Win_allocate_shared",
                        "MPI_Win_create_dynamic",
                        "MPI_Win_fence",
                        "MPI_Win_post",
                        "MPI_Win_start",
                        "MPI_Win_complete",
                        "MPI_Win_wait",
                        "MPI_Win_lock",
                        "MPI_Win_unlock",
                    ]),
                },
                Lesson {
                    id: "collectives".to_string(),
                    title: "Collective communication".to_string(),
                    functions: plain(&["MPI_Allgatherv"]),
                },
                Lesson {
                    id: "non-blocking".to_string(),
                    title: "Non-blocking point-to-point".to_string(),
                    functions: vec![
                        FunctionRecord::with_node("MPI_Isend", 63),
                        FunctionRecord::with_node("MPI_Irecv", 63),
                        FunctionRecord::with_node("MPI_Wait", 64),
                        FunctionRecord::with_node("MPI_Waitany", 66),
                        FunctionRecord::with_node("MPI_Waitsome", 66),
                        FunctionRecord::with_node("MPI_Waitall", 66),
                        FunctionRecord::with_node("MPI_Test", 64),
                        FunctionRecord::with_node("MPI_Testany", 66),
                        FunctionRecord::with_node("MPI_Testsome", 66),
                        FunctionRecord::with_node("MPI_Testall", 66),
                    ],
                },
                Lesson {
                    id: "threads".to_string(),
                    title: "MPI and threads".to_string(),
                    functions: vec![],
                },
                Lesson {
                    id: "other".to_string(),
                    title: "Other".to_string(),
                    functions: vec![],
                },
            ],
        }
    }
}
