//! Category Inference
//!
//! Classifies a diagram node into one architectural role by matching an
//! ordered rule table against its label, technology, and description.
//! The table is a manual priority chain: rules are evaluated in order
//! and the first match wins, so a node mentioning both "API" and
//! "cache" resolves to `backend`. The order (frontend, backend,
//! database, cache, queue, external) must not be rearranged; output
//! stability depends on it.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{DiagramNode, ExplorerCategory};

/// Ordered (pattern, category) rules. Word-boundary, case-insensitive.
static RULES: LazyLock<Vec<(Regex, ExplorerCategory)>> = LazyLock::new(|| {
    [
        (
            r"(?i)\b(frontend|front[- ]end|ui|ux|react|vue|angular|svelte|next\.?js|browser|client|page|css|html|spa)\b",
            ExplorerCategory::Frontend,
        ),
        (
            r"(?i)\b(backend|back[- ]end|api|server|service|endpoint|controller|handler|router|fastapi|express|django|flask|middleware|auth)\b",
            ExplorerCategory::Backend,
        ),
        (
            r"(?i)\b(database|db|postgres|postgresql|mysql|sqlite|mongo|mongodb|supabase|sql|storage|persistence)\b",
            ExplorerCategory::Database,
        ),
        (
            r"(?i)\b(cache|caching|cached|redis|memcached)\b",
            ExplorerCategory::Cache,
        ),
        (
            r"(?i)\b(queue|kafka|rabbitmq|sqs|pubsub|pub[- ]sub|broker|celery|worker|job)\b",
            ExplorerCategory::Queue,
        ),
        (
            r"(?i)\b(external|third[- ]party|stripe|github|gitlab|oauth|webhook|s3|cdn|openai|gemini|anthropic)\b",
            ExplorerCategory::External,
        ),
    ]
    .into_iter()
    .map(|(pattern, category)| {
        let re = Regex::new(pattern).expect("category rule patterns are static and valid");
        (re, category)
    })
    .collect()
});

/// Infers the architectural category of a node.
///
/// Total and deterministic: always returns a value, `General` when no
/// rule matches. Missing `technology`/`description` are treated as
/// empty strings.
pub fn infer_category(node: &DiagramNode) -> ExplorerCategory {
    let blob = format!(
        "{} {} {}",
        node.label,
        node.technology.as_deref().unwrap_or(""),
        node.description.as_deref().unwrap_or(""),
    );

    for (pattern, category) in RULES.iter() {
        if pattern.is_match(&blob) {
            return *category;
        }
    }

    ExplorerCategory::General
}
