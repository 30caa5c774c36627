//! The `list` command: show the functions a registry defines.

use serde_json::json;
use tracing::warn;

use crate::cli::args::{ListArgs, OutputFormat};
use crate::error::GlossaryError;

use super::emit::load_or_builtin;

/// Execute `list`.
///
/// # Errors
///
/// Returns an error if the registry cannot be loaded.
pub fn run(args: &ListArgs) -> Result<(), GlossaryError> {
    let registry = load_or_builtin(args.registry.as_deref())?;

    if let Some(lesson) = &args.lesson
        && !registry.lessons.iter().any(|l| &l.id == lesson)
    {
        warn!(%lesson, "no such lesson in registry");
    }

    let entries: Vec<_> = registry
        .lessons
        .iter()
        .filter(|l| args.lesson.as_ref().is_none_or(|id| &l.id == id))
        .flat_map(|l| l.functions.iter().map(move |f| (l, f)))
        .collect();

    match args.format {
        OutputFormat::Human => {
            if entries.is_empty() {
                println!("No functions registered");
                return Ok(());
            }
            for (lesson, record) in entries {
                match record.standard_node {
                    Some(node) => println!("{}  {} (node {node})", lesson.id, record.name),
                    None => println!("{}  {}", lesson.id, record.name),
                }
            }
        }
        OutputFormat::Json => {
            let items: Vec<_> = entries
                .iter()
                .map(|(lesson, record)| {
                    json!({
                        "lesson": lesson.id,
                        "name": record.name,
                        "node": record.standard_node,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
    }

    Ok(())
}
