//! Registry loading from YAML files.
//!
//! The on-disk format mirrors the external contract: each function entry is
//! either a bare name or a mapping with `name` and a signed `node`. A
//! negative node means "no known reference in the standard"; zero and above
//! are valid node ids.
//!
//! ```yaml
//! lessons:
//!   - id: non-blocking
//!     title: Non-blocking point-to-point
//!     functions:
//!       - name: MPI_Isend
//!         node: 63
//!       - MPI_Win_fence
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{GlossaryError, RegistryError};
use crate::registry::{FunctionRecord, Lesson, Registry};

/// On-disk registry document.
#[derive(Debug, Deserialize)]
struct RegistryDoc {
    lessons: Vec<LessonDoc>,
}

/// On-disk lesson entry.
#[derive(Debug, Deserialize)]
struct LessonDoc {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    functions: Vec<RecordDoc>,
}

/// On-disk function entry: a bare name or a `{name, node}` mapping.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordDoc {
    Name(String),
    Detailed {
        name: String,
        #[serde(default = "unknown_node")]
        node: i64,
    },
}

const fn unknown_node() -> i64 {
    -1
}

impl From<RecordDoc> for FunctionRecord {
    fn from(doc: RecordDoc) -> Self {
        match doc {
            RecordDoc::Name(name) => Self::new(name),
            RecordDoc::Detailed { name, node } => Self::from_signed(name, node),
        }
    }
}

/// Parse a registry from YAML text.
///
/// # Errors
///
/// Returns `RegistryError::Parse` if the text is not a valid registry
/// document. `path` is only used for error context.
pub fn parse_registry(content: &str, path: &Path) -> Result<Registry, GlossaryError> {
    let doc: RegistryDoc = serde_yaml::from_str(content).map_err(|e| RegistryError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(Registry {
        lessons: doc
            .lessons
            .into_iter()
            .map(|l| Lesson {
                id: l.id,
                title: l.title,
                functions: l.functions.into_iter().map(Into::into).collect(),
            })
            .collect(),
    })
}

/// Read and parse a registry YAML file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a parse error if
/// its content is not a valid registry document.
pub fn load_registry_file(path: &Path) -> Result<Registry, GlossaryError> {
    let content = fs::read_to_string(path).map_err(|e| {
        GlossaryError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to read registry {}: {e}", path.display()),
        ))
    })?;
    parse_registry(&content, path)
}
