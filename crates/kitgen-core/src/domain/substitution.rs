//! Token substitution for the two files a template is allowed to carry
//! run-specific values in.
//!
//! Both functions are pure and idempotent: running them again with the same
//! request on their own output changes nothing.

use serde_json::Value;

use crate::domain::{entities::ScaffoldRequest, error::DomainError};

/// Package manifest rewritten at the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// README rewritten at the project root.
pub const README_FILE: &str = "README.md";

pub const PROJECT_NAME_TOKEN: &str = "{{PROJECT_NAME}}";
pub const PROJECT_DESCRIPTION_TOKEN: &str = "{{PROJECT_DESCRIPTION}}";

/// Replace every README placeholder with the request's values.
///
/// Tokens are matched in a single left-to-right pass, so inserted text is
/// never scanned again. Placeholders typed into the description are resolved
/// against the project name first, which keeps the output free of tokens.
pub fn render_readme(content: &str, request: &ScaffoldRequest) -> String {
    let name = request.project_name().as_str();
    let description = resolve_description(request.description(), name);
    expand(content, name, &description)
}

/// Expand the description's own placeholders until none are left.
/// A self-reference expands to nothing.
fn resolve_description(raw: &str, name: &str) -> String {
    // Terminates: project names contain no braces, so every changing pass
    // removes at least four of them.
    let mut current = raw.to_string();
    loop {
        let next = expand(&current, name, "");
        if next == current {
            return current;
        }
        current = next;
    }
}

fn expand(content: &str, name: &str, description: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        if let Some(after) = tail.strip_prefix(PROJECT_NAME_TOKEN) {
            out.push_str(name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(PROJECT_DESCRIPTION_TOKEN) {
            out.push_str(description);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

/// Overwrite `name` and `description` in a JSON manifest.
///
/// Key order is preserved; the output is pretty-printed with a trailing
/// newline, the layout npm itself writes.
pub fn rewrite_manifest(content: &str, request: &ScaffoldRequest) -> Result<String, DomainError> {
    let mut manifest: Value =
        serde_json::from_str(content).map_err(|e| DomainError::MalformedManifest {
            reason: e.to_string(),
        })?;

    let fields = manifest
        .as_object_mut()
        .ok_or_else(|| DomainError::MalformedManifest {
            reason: "top-level value is not an object".into(),
        })?;

    fields.insert(
        "name".into(),
        Value::String(request.project_name().as_str().to_string()),
    );
    fields.insert(
        "description".into(),
        Value::String(request.description().to_string()),
    );

    let mut out =
        serde_json::to_string_pretty(&manifest).map_err(|e| DomainError::MalformedManifest {
            reason: e.to_string(),
        })?;
    out.push('\n');
    Ok(out)
}
