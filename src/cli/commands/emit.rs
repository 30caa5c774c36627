//! The `emit` command: render the glossary epilog markup.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::cli::args::EmitArgs;
use crate::emit;
use crate::error::{GlossaryError, RegistryError};
use crate::registry::validation::{self, RegistryValidation};
use crate::registry::{Registry, loader};

/// Load a registry file, or fall back to the built-in production list.
pub(crate) fn load_or_builtin(path: Option<&Path>) -> Result<Registry, GlossaryError> {
    path.map_or_else(|| Ok(Registry::builtin()), loader::load_registry_file)
}

/// Convert the first validation finding into a strict-mode error.
pub(crate) fn strict_error(validation: &RegistryValidation) -> Option<RegistryError> {
    if let Some(dup) = validation.duplicate_names.first() {
        return Some(RegistryError::DuplicateName {
            name: dup.name.clone(),
            first: dup.first.clone(),
            second: dup.second.clone(),
        });
    }
    if let Some(lesson) = validation.empty_lessons.first() {
        return Some(RegistryError::EmptyLesson {
            lesson: lesson.clone(),
        });
    }
    if let Some((lesson, name)) = validation.non_mpi_names.first() {
        return Some(RegistryError::NotMpiName {
            name: name.clone(),
            lesson: lesson.clone(),
        });
    }
    None
}

/// Log validation findings as warnings.
pub(crate) fn warn_findings(validation: &RegistryValidation) {
    for dup in &validation.duplicate_names {
        warn!(
            name = %dup.name,
            first = %dup.first,
            second = %dup.second,
            "duplicate function name; later substitution binding wins"
        );
    }
    for lesson in &validation.empty_lessons {
        warn!(%lesson, "lesson defines no functions");
    }
    for (lesson, name) in &validation.non_mpi_names {
        warn!(%lesson, %name, "function name is not an MPI_ identifier");
    }
}

/// Execute `emit`.
///
/// # Errors
///
/// Returns an error if the registry cannot be loaded, if strict validation
/// fails, or if the output file cannot be written.
pub fn run(args: &EmitArgs) -> Result<(), GlossaryError> {
    let registry = load_or_builtin(args.registry.as_deref())?;

    let validation = validation::validate(&registry);
    warn_findings(&validation);
    if args.strict
        && let Some(err) = strict_error(&validation)
    {
        return Err(err.into());
    }

    let markup = emit::epilog(&registry);

    match &args.output {
        Some(path) => {
            fs::write(path, &markup).map_err(|e| {
                GlossaryError::Io(std::io::Error::new(
                    e.kind(),
                    format!("failed to write {}: {e}", path.display()),
                ))
            })?;
            info!(
                records = registry.len(),
                output = %path.display(),
                "wrote glossary markup"
            );
        }
        None => {
            print!("{markup}");
            info!(records = registry.len(), "emitted glossary markup");
        }
    }

    Ok(())
}
