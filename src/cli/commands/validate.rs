//! The `validate` command: check registry files without emitting.

use serde_json::json;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::error::GlossaryError;
use crate::registry::validation::{self, RegistryValidation};
use crate::registry::loader;

use super::emit::strict_error;

/// Execute `validate`.
///
/// Findings are reported on stderr (human) or stdout (json). Without
/// `--strict` only unreadable or unparseable files fail the command.
///
/// # Errors
///
/// Returns an error if a file cannot be read or parsed, or if strict mode
/// is enabled and any finding was reported.
pub fn run(args: &ValidateArgs) -> Result<(), GlossaryError> {
    let mut reports = Vec::new();
    let mut total_findings = 0;
    let mut first_error = None;

    for path in &args.files {
        let registry = loader::load_registry_file(path)?;
        let validation = validation::validate(&registry);
        total_findings += validation.count();

        if first_error.is_none() {
            first_error = strict_error(&validation);
        }

        if args.format == OutputFormat::Human {
            report_human(&path.display().to_string(), &validation);
        }
        reports.push((path.display().to_string(), validation));
    }

    match args.format {
        OutputFormat::Human => {
            if total_findings == 0 {
                eprintln!("Validation passed");
            } else {
                eprintln!("{total_findings} finding(s)");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json_report(&reports))?);
        }
    }

    if args.strict
        && let Some(err) = first_error
    {
        return Err(err.into());
    }

    Ok(())
}

/// Print findings for one file in human format.
fn report_human(path: &str, validation: &RegistryValidation) {
    for dup in &validation.duplicate_names {
        eprintln!(
            "WARNING: {path}: duplicate function '{}' in lessons '{}' and '{}'",
            dup.name, dup.first, dup.second
        );
    }
    for lesson in &validation.empty_lessons {
        eprintln!("WARNING: {path}: lesson '{lesson}' defines no functions");
    }
    for (lesson, name) in &validation.non_mpi_names {
        eprintln!("WARNING: {path}: '{name}' in lesson '{lesson}' is not an MPI_ identifier");
    }
}

/// Build the JSON report structure.
fn json_report(reports: &[(String, RegistryValidation)]) -> serde_json::Value {
    let files: Vec<_> = reports
        .iter()
        .map(|(path, v)| {
            json!({
                "path": path,
                "findings": {
                    "duplicate_names": v
                        .duplicate_names
                        .iter()
                        .map(|d| json!({
                            "name": d.name,
                            "first": d.first,
                            "second": d.second,
                        }))
                        .collect::<Vec<_>>(),
                    "empty_lessons": v.empty_lessons,
                    "non_mpi_names": v
                        .non_mpi_names
                        .iter()
                        .map(|(lesson, name)| json!({"lesson": lesson, "name": name}))
                        .collect::<Vec<_>>(),
                },
            })
        })
        .collect();

    let total: usize = reports.iter().map(|(_, v)| v.count()).sum();

    json!({
        "files": files,
        "summary": {
            "files": reports.len(),
            "findings": total,
        },
    })
}
