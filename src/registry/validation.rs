//! Advisory validation for registries.
//!
//! None of the findings here stop emission: duplicate substitution names are
//! rebound last-wins by Sphinx, empty lessons simply contribute nothing, and
//! an unusual name still produces well-formed markup. The CLI reports them
//! as warnings and promotes them to errors only in strict mode.

use std::collections::HashMap;

use crate::registry::Registry;

/// A duplicate function name spanning two lessons (or two positions in the
/// same lesson).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateName {
    /// The duplicated name.
    pub name: String,
    /// Lesson where the name first appeared.
    pub first: String,
    /// Lesson holding the later definition.
    pub second: String,
}

/// Result of registry validation.
#[derive(Debug, Default)]
pub struct RegistryValidation {
    /// Function names defined more than once.
    pub duplicate_names: Vec<DuplicateName>,

    /// Lessons with no functions.
    pub empty_lessons: Vec<String>,

    /// Names missing the `MPI_` prefix, as `(lesson, name)` pairs.
    pub non_mpi_names: Vec<(String, String)>,
}

impl RegistryValidation {
    /// Returns `true` if there are no findings.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicate_names.is_empty()
            && self.empty_lessons.is_empty()
            && self.non_mpi_names.is_empty()
    }

    /// Total number of findings.
    #[must_use]
    pub fn count(&self) -> usize {
        self.duplicate_names.len() + self.empty_lessons.len() + self.non_mpi_names.len()
    }
}

/// Validate a registry.
///
/// Walks lessons in order, recording duplicate names (first definition
/// wins the "first" slot), empty lessons, and names without the `MPI_`
/// prefix.
#[must_use]
pub fn validate(registry: &Registry) -> RegistryValidation {
    let mut validation = RegistryValidation::default();
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for lesson in &registry.lessons {
        if lesson.functions.is_empty() {
            validation.empty_lessons.push(lesson.id.clone());
        }

        for record in &lesson.functions {
            if let Some(first) = seen.get(record.name.as_str()) {
                validation.duplicate_names.push(DuplicateName {
                    name: record.name.clone(),
                    first: (*first).to_string(),
                    second: lesson.id.clone(),
                });
            } else {
                seen.insert(&record.name, &lesson.id);
            }

            if !record.name.starts_with("MPI_") {
                validation
                    .non_mpi_names
                    .push((lesson.id.clone(), record.name.clone()));
            }
        }
    }

    validation
}
