//! List command implementation.

use oxiform_pipeline::{Method, MethodKind};
use serde::Serialize;

/// JSON serializable method description.
#[derive(Debug, Serialize)]
struct MethodJson {
    name: Method,
    kind: MethodKind,
    description: &'static str,
}

fn method_entries() -> Vec<MethodJson> {
    Method::ALL
        .iter()
        .map(|&m| MethodJson {
            name: m,
            kind: m.kind(),
            description: m.description(),
        })
        .collect()
}

pub fn cmd_list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&method_entries())?);
        return Ok(());
    }

    println!("{:<12} {:<11} Description", "Method", "Kind");
    println!("{}", "-".repeat(70));
    for entry in method_entries() {
        let kind = match entry.kind {
            MethodKind::Transform => "transform",
            MethodKind::Dictionary => "dictionary",
            MethodKind::Backend => "backend",
        };
        println!("{:<12} {:<11} {}", entry.name.to_string(), kind, entry.description);
    }
    Ok(())
}
