//! Diagram Simplification
//!
//! Derives a compact single-view summary of a diagram for contexts
//! where full interactivity is unnecessary. Structured node/edge data
//! is preferred (filtered to low-depth nodes); when it is missing or
//! too flat to reduce, the raw source is rewritten with per-type
//! line-scanning heuristics.
//!
//! Every function here is total. Heuristic parsing that yields nothing
//! usable falls back to returning the original source unchanged:
//! simplification must never emit broken diagram syntax or propagate a
//! failure.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::constants::simplify::{
    MAX_EDGE_LABEL_CHARS, MAX_NODE_LABEL_CHARS, MAX_SEQUENCE_MESSAGES, MAX_SIMPLE_NODES,
    SIMPLE_VIEW_MAX_DEPTH,
};
use crate::types::{DiagramData, DiagramEdge, DiagramNode};

use super::{DiagramKind, escape_label, sanitize_id, truncate_label};

/// Flowchart arrow tokens, longest first so `find_first_arrow` prefers
/// the most specific match at a position.
const FLOW_ARROWS: [&str; 7] = ["-.->", "==>", "-->", "---", "-.-", "->", "--"];

/// Sequence-diagram message arrows, longest first.
const SEQ_ARROWS: [&str; 8] = ["-->>", "->>", "--)", "-)", "--x", "-x", "-->", "->"];

/// Class-diagram relationship tokens (inheritance, realization,
/// composition, aggregation, association).
const CLASS_RELATIONS: [&str; 12] = [
    "<|--", "--|>", "..|>", "<|..", "*--", "--*", "o--", "--o", "<--", "-->", "..>", "<..",
];

/// Produces the simple-view source for a fragment.
///
/// Priority order: a backend-pregenerated simple source wins; then a
/// structured rebuild from nodes with `depth <= 1` when the data has
/// depth; then a first-8 cap rebuild for oversized flat graphs; and
/// finally text-level heuristics over the raw source.
pub fn simplify(data: &DiagramData) -> String {
    if let Some(pre) = data.simplified_mermaid_source.as_deref()
        && !pre.trim().is_empty()
    {
        return pre.to_string();
    }

    if !data.nodes.is_empty() {
        if data.nodes.iter().any(|n| n.depth > 0) {
            if let Some(source) =
                rebuild_overview(&data.nodes, &data.edges, Some(SIMPLE_VIEW_MAX_DEPTH))
            {
                return source;
            }
        } else if data.nodes.len() > MAX_SIMPLE_NODES {
            if let Some(source) =
                rebuild_overview(&data.nodes[..MAX_SIMPLE_NODES], &data.edges, None)
            {
                return source;
            }
        }
    }

    simplify_source(&data.mermaid_source)
}

/// Heuristic text-level simplification of raw diagram source,
/// dispatched by detected kind. ER, state, gantt, pie, and git graphs
/// are already compact and pass through unchanged.
pub fn simplify_source(source: &str) -> String {
    match DiagramKind::detect(source) {
        DiagramKind::Flowchart => simplify_flowchart(source),
        DiagramKind::Sequence => simplify_sequence(source),
        DiagramKind::Class => simplify_class(source),
        DiagramKind::Er
        | DiagramKind::State
        | DiagramKind::Gantt
        | DiagramKind::Pie
        | DiagramKind::GitGraph => source.to_string(),
    }
}

// =============================================================================
// Structured Rebuild
// =============================================================================

/// Rebuilds a minimal flowchart from structured nodes and the edges
/// between them. `None` when no node survives the depth cut.
fn rebuild_overview(
    nodes: &[DiagramNode],
    edges: &[DiagramEdge],
    max_depth: Option<u32>,
) -> Option<String> {
    let kept: Vec<&DiagramNode> = match max_depth {
        Some(limit) => nodes.iter().filter(|n| n.depth <= limit).collect(),
        None => nodes.iter().collect(),
    };
    if kept.is_empty() {
        return None;
    }

    let ids: HashSet<&str> = kept.iter().map(|n| n.id.as_str()).collect();
    let mut lines = vec!["flowchart TD".to_string()];

    for node in &kept {
        let label = if node.label.trim().is_empty() {
            node.id.as_str()
        } else {
            node.label.as_str()
        };
        lines.push(format!(
            "    {}[\"{}\"]",
            sanitize_id(&node.id),
            escape_label(&truncate_label(label, MAX_NODE_LABEL_CHARS)),
        ));
    }

    for edge in edges {
        if !ids.contains(edge.source.as_str()) || !ids.contains(edge.target.as_str()) {
            continue;
        }
        let source = sanitize_id(&edge.source);
        let target = sanitize_id(&edge.target);
        match edge.label.as_deref() {
            Some(label) if !label.trim().is_empty() => lines.push(format!(
                "    {} -->|{}| {}",
                source,
                escape_label(&truncate_label(label, MAX_EDGE_LABEL_CHARS)),
                target,
            )),
            _ => lines.push(format!("    {} --> {}", source, target)),
        }
    }

    debug!(nodes = kept.len(), "rebuilt simple view from structured data");
    Some(lines.join("\n"))
}

// =============================================================================
// Flowchart Text Fallback
// =============================================================================

/// Strips subgraph interiors, caps distinct nodes, and keeps only edges
/// whose source survives the cap. Returns the source unchanged when
/// nothing parseable is found.
fn simplify_flowchart(source: &str) -> String {
    let mut header: Option<String> = None;
    let mut order: Vec<String> = Vec::new();
    let mut definitions: HashMap<String, String> = HashMap::new();
    let mut edge_lines: Vec<(String, String)> = Vec::new();
    let mut subgraph_depth = 0usize;

    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("%%") {
            continue;
        }

        let lower = trimmed.to_lowercase();
        if header.is_none() && (lower.starts_with("graph") || lower.starts_with("flowchart")) {
            header = Some(trimmed.to_string());
            continue;
        }

        // Track subgraph nesting; only top-level lines are considered.
        if lower.starts_with("subgraph") {
            subgraph_depth += 1;
            continue;
        }
        if trimmed == "end" {
            subgraph_depth = subgraph_depth.saturating_sub(1);
            continue;
        }
        if subgraph_depth > 0 {
            continue;
        }

        if lower.starts_with("style")
            || lower.starts_with("classdef")
            || lower.starts_with("linkstyle")
            || lower.starts_with("click")
            || lower.starts_with("direction")
        {
            continue;
        }

        if let Some((idx, pattern)) = find_first_arrow(trimmed, &FLOW_ARROWS) {
            let source_part = trimmed[..idx].trim();
            let mut rest = trimmed[idx + pattern.len()..].trim();

            // Labeled arrows: A -->|label| B
            if let Some(stripped) = rest.strip_prefix('|') {
                rest = match stripped.find('|') {
                    Some(close) => stripped[close + 1..].trim(),
                    None => stripped.trim(),
                };
            }

            // Chained edges: target ends where the next arrow begins.
            let target_part = match find_first_arrow(rest, &FLOW_ARROWS) {
                Some((next_idx, _)) => rest[..next_idx].trim(),
                None => rest,
            };

            register_flow_part(source_part, &mut order, &mut definitions);
            register_flow_part(target_part, &mut order, &mut definitions);

            if let Some(source_id) = flow_part_id(source_part) {
                edge_lines.push((source_id, trimmed.to_string()));
            }
            continue;
        }

        // Standalone node definition: A[Label]
        if trimmed.contains(['[', '(', '{']) {
            register_flow_part(trimmed, &mut order, &mut definitions);
        }
    }

    if order.is_empty() {
        return source.to_string();
    }

    let kept: Vec<&String> = order.iter().take(MAX_SIMPLE_NODES).collect();
    let kept_set: HashSet<&str> = kept.iter().map(|id| id.as_str()).collect();

    let mut lines = vec![header.unwrap_or_else(|| "flowchart TD".to_string())];
    for id in &kept {
        if let Some(definition) = definitions.get(id.as_str()) {
            lines.push(format!("    {}", definition));
        }
    }
    for (source_id, line) in &edge_lines {
        if kept_set.contains(source_id.as_str()) {
            lines.push(format!("    {}", line));
        }
    }

    debug!(
        total = order.len(),
        kept = kept.len(),
        "simplified flowchart source"
    );
    lines.join("\n")
}

/// Registers the node id found in one side of an edge (or a standalone
/// definition line): appearance order, plus the first definition text
/// seen for it.
fn register_flow_part(
    part: &str,
    order: &mut Vec<String>,
    definitions: &mut HashMap<String, String>,
) {
    let Some(id) = flow_part_id(part) else {
        return;
    };
    if !order.contains(&id) {
        order.push(id.clone());
    }
    if part.contains(['[', '(', '{']) && !definitions.contains_key(&id) {
        definitions.insert(id, part.to_string());
    }
}

/// Extracts the bare node id from an edge endpoint or definition
/// fragment such as `A`, `A[Label]`, or `auth(Service)`.
fn flow_part_id(part: &str) -> Option<String> {
    let prefix = part.split(['[', '(', '{', '>']).next().unwrap_or("");
    let token = prefix.split_whitespace().next_back()?;
    let id: &str =
        token.trim_matches(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'));
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

/// Finds the earliest arrow occurrence; on position ties, the earlier
/// (longer) pattern in the list wins.
fn find_first_arrow<'a>(line: &str, patterns: &[&'a str]) -> Option<(usize, &'a str)> {
    let mut best: Option<(usize, &'a str)> = None;
    for pattern in patterns {
        if let Some(idx) = line.find(pattern) {
            if best.is_none_or(|(prev, _)| idx < prev) {
                best = Some((idx, pattern));
            }
        }
    }
    best
}

// =============================================================================
// Sequence Diagram Text Fallback
// =============================================================================

/// Keeps actor/participant declarations, caps message lines, truncates
/// long message text, and drops loops/notes/blocks. A note marks the
/// cut when messages overflow the cap.
fn simplify_sequence(source: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut header_seen = false;
    let mut participants: Vec<String> = Vec::new();
    let mut first_actor: Option<String> = None;
    let mut messages = 0usize;
    let mut overflowed = false;

    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("%%") {
            continue;
        }

        let lower = trimmed.to_lowercase();
        if !header_seen && lower.starts_with("sequencediagram") {
            out.push("sequenceDiagram".to_string());
            header_seen = true;
            continue;
        }

        // Declarations always survive.
        if lower.starts_with("participant ") || lower.starts_with("actor ") {
            if let Some(name) = trimmed.split_whitespace().nth(1) {
                participants.push(name.to_string());
            }
            out.push(format!("    {}", trimmed));
            continue;
        }

        if let Some((idx, _)) = find_first_arrow(trimmed, &SEQ_ARROWS) {
            if first_actor.is_none() {
                let left = trimmed[..idx].trim();
                if !left.is_empty() {
                    first_actor = Some(left.to_string());
                }
            }
            if messages >= MAX_SEQUENCE_MESSAGES {
                overflowed = true;
                continue;
            }
            messages += 1;
            let message = match trimmed.split_once(':') {
                Some((head, text)) => format!(
                    "{}: {}",
                    head.trim_end(),
                    truncate_label(text.trim(), MAX_NODE_LABEL_CHARS),
                ),
                None => trimmed.to_string(),
            };
            out.push(format!("    {}", message));
        }
        // loop/alt/opt/end/note/activate lines are dropped
    }

    if !header_seen {
        out.insert(0, "sequenceDiagram".to_string());
    }
    if out.len() <= 1 {
        return source.to_string();
    }

    if overflowed {
        let anchor = participants.first().or(first_actor.as_ref());
        match anchor {
            Some(actor) => out.push(format!("    Note over {}: ...and more interactions", actor)),
            None => out.push("    %% ...and more interactions".to_string()),
        }
    }

    out.join("\n")
}

// =============================================================================
// Class Diagram Text Fallback
// =============================================================================

/// Keeps class name declarations (stripping member bodies) and
/// relationship lines, unfiltered.
fn simplify_class(source: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut header_seen = false;
    let mut in_body = false;

    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("%%") {
            continue;
        }

        let lower = trimmed.to_lowercase();
        if !header_seen && lower.starts_with("classdiagram") {
            out.push("classDiagram".to_string());
            header_seen = true;
            continue;
        }

        if in_body {
            if trimmed == "}" {
                in_body = false;
            }
            continue;
        }

        if lower.starts_with("class ") {
            if trimmed.ends_with('{') {
                in_body = true;
                let name = trimmed.trim_end_matches('{').trim();
                out.push(format!("    {}", name));
            } else {
                out.push(format!("    {}", trimmed));
            }
            continue;
        }

        if CLASS_RELATIONS.iter().any(|p| trimmed.contains(p)) || trimmed.contains(" -- ") {
            out.push(format!("    {}", trimmed));
        }
        // member notation (Class : +field) and annotations are dropped
    }

    if !header_seen {
        out.insert(0, "classDiagram".to_string());
    }
    if out.len() <= 1 {
        return source.to_string();
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EdgeType;

    fn node(id: &str, label: &str, depth: u32) -> DiagramNode {
        DiagramNode::new(id, label).with_depth(depth)
    }

    // -------------------------------------------------------------------------
    // Structured rebuild
    // -------------------------------------------------------------------------

    #[test]
    fn test_structured_rebuild_keeps_low_depth_nodes() {
        let data = DiagramData::from_parts(
            vec![
                node("app", "Application", 0),
                node("svc", "Service", 1),
                node("deep", "Internal Detail", 2),
            ],
            vec![
                DiagramEdge::new("app", "svc", EdgeType::Dependency),
                DiagramEdge::new("svc", "deep", EdgeType::Dependency),
            ],
        );

        let source = simplify(&data);
        assert!(source.starts_with("flowchart TD"));
        assert!(source.contains("app[\"Application\"]"));
        assert!(source.contains("svc[\"Service\"]"));
        assert!(!source.contains("Internal Detail"));
        // The edge into the dropped node goes with it.
        assert!(!source.contains("deep"));
    }

    #[test]
    fn test_structured_rebuild_truncates_labels() {
        let long = "An extremely verbose component label that never stops going";
        let data = DiagramData::from_parts(
            vec![node("a", long, 0), node("b", "B", 1)],
            vec![DiagramEdge::new("a", "b", EdgeType::DataFlow)
                .with_label("carries a very long description of the payload")],
        );

        let source = simplify(&data);
        assert!(!source.contains(long));
        assert!(source.contains("..."));
    }

    #[test]
    fn test_structured_rebuild_sanitizes_ids() {
        let data = DiagramData::from_parts(
            vec![node("auth service", "Auth", 0), node("db/main", "DB", 1)],
            vec![DiagramEdge::new("auth service", "db/main", EdgeType::DataFlow)],
        );

        let source = simplify(&data);
        assert!(source.contains("auth_service"));
        assert!(source.contains("db_main"));
        assert!(!source.contains("auth service -->"));
    }

    #[test]
    fn test_flat_graph_over_cap_truncates_to_first_eight() {
        let nodes: Vec<DiagramNode> = (0..12)
            .map(|i| node(&format!("n{}", i), &format!("Node {}", i), 0))
            .collect();
        let data = DiagramData::from_parts(nodes, vec![]);

        let source = simplify(&data);
        assert!(source.contains("n0"));
        assert!(source.contains("n7"));
        assert!(!source.contains("n8"));
        assert!(!source.contains("n11"));
    }

    #[test]
    fn test_small_flat_graph_falls_back_to_source() {
        let mut data = DiagramData::from_parts(
            vec![node("a", "A", 0), node("b", "B", 0)],
            vec![DiagramEdge::new("a", "b", EdgeType::Dependency)],
        );
        data.mermaid_source = "graph TD\n    a --> b".to_string();

        // Two flat nodes need no reduction; the raw source path runs.
        let source = simplify(&data);
        assert!(source.contains("a --> b"));
    }

    #[test]
    fn test_pregenerated_simple_source_wins() {
        let mut data = DiagramData::from_parts(vec![node("a", "A", 0), node("b", "B", 2)], vec![]);
        data.simplified_mermaid_source = Some("flowchart TD\n    pre[Built]".to_string());

        assert_eq!(simplify(&data), "flowchart TD\n    pre[Built]");
    }

    // -------------------------------------------------------------------------
    // Flowchart text fallback
    // -------------------------------------------------------------------------

    #[test]
    fn test_flowchart_strips_subgraph_interiors() {
        let source = "graph TD\n\
                      \x20   A[Entry] --> B[Router]\n\
                      \x20   subgraph Internals\n\
                      \x20       C1 --> C2\n\
                      \x20       C2 --> C3\n\
                      \x20       C3 --> C4\n\
                      \x20       C4 --> C5\n\
                      \x20   end\n\
                      \x20   B --> Z[Exit]\n";
        let data = DiagramData {
            mermaid_source: source.to_string(),
            ..DiagramData::default()
        };

        let simplified = simplify(&data);
        assert!(simplified.contains("A[Entry]"));
        assert!(simplified.contains("B --> Z[Exit]"));
        for internal in ["C1", "C2", "C3", "C4", "C5"] {
            assert!(!simplified.contains(internal), "{} leaked", internal);
        }
    }

    #[test]
    fn test_flowchart_nested_subgraphs_tracked() {
        let source = "flowchart LR\n\
                      \x20   subgraph Outer\n\
                      \x20       subgraph Inner\n\
                      \x20           X --> Y\n\
                      \x20       end\n\
                      \x20       M --> N\n\
                      \x20   end\n\
                      \x20   A --> B\n";
        let simplified = simplify_source(source);
        assert!(simplified.contains("A --> B"));
        assert!(!simplified.contains("X --> Y"));
        assert!(!simplified.contains("M --> N"));
    }

    #[test]
    fn test_flowchart_caps_nodes_at_eight() {
        let mut source = String::from("graph TD\n");
        for i in 0..12 {
            source.push_str(&format!("    n{} --> n{}\n", i, i + 100));
        }
        let simplified = simplify_source(&source);
        // 8 distinct ids survive: n0,n100,n1,n101,n2,n102,n3,n103.
        assert!(simplified.contains("n3 --> n103"));
        assert!(!simplified.contains("n4 --> n104"));
    }

    #[test]
    fn test_flowchart_keeps_original_header() {
        let simplified = simplify_source("graph LR\n    A --> B\n");
        assert!(simplified.starts_with("graph LR"));
    }

    #[test]
    fn test_flowchart_with_nothing_parseable_returns_original() {
        let source = "graph TD\n    %% only comments here\n";
        assert_eq!(simplify_source(source), source);
    }

    #[test]
    fn test_garbage_input_passes_through_unbroken() {
        let source = "not a diagram at all ][ %% ***";
        let simplified = simplify_source(source);
        assert!(!simplified.is_empty());
    }

    // -------------------------------------------------------------------------
    // Sequence text fallback
    // -------------------------------------------------------------------------

    #[test]
    fn test_sequence_keeps_participants_and_caps_messages() {
        let mut source = String::from("sequenceDiagram\n    participant A\n    participant B\n");
        for i in 0..12 {
            source.push_str(&format!("    A->>B: message number {}\n", i));
        }

        let simplified = simplify_source(&source);
        assert!(simplified.contains("participant A"));
        assert!(simplified.contains("participant B"));
        assert!(simplified.contains("message number 7"));
        assert!(!simplified.contains("message number 8"));
        assert!(simplified.contains("...and more interactions"));
        assert!(simplified.contains("Note over A"));
    }

    #[test]
    fn test_sequence_under_cap_has_no_note() {
        let source = "sequenceDiagram\n    A->>B: hello\n    B-->>A: hi\n";
        let simplified = simplify_source(source);
        assert!(!simplified.contains("more interactions"));
    }

    #[test]
    fn test_sequence_drops_loops_and_notes() {
        let source = "sequenceDiagram\n\
                      \x20   A->>B: start\n\
                      \x20   loop Every minute\n\
                      \x20   B->>A: tick\n\
                      \x20   end\n\
                      \x20   Note right of B: internal detail\n";
        let simplified = simplify_source(source);
        assert!(simplified.contains("A->>B: start"));
        assert!(simplified.contains("B->>A: tick"));
        assert!(!simplified.contains("loop"));
        assert!(!simplified.contains("internal detail"));
    }

    #[test]
    fn test_sequence_truncates_long_message_text() {
        let long = "a".repeat(120);
        let source = format!("sequenceDiagram\n    A->>B: {}\n", long);
        let simplified = simplify_source(&source);
        assert!(!simplified.contains(&long));
        assert!(simplified.contains("..."));
    }

    // -------------------------------------------------------------------------
    // Class text fallback
    // -------------------------------------------------------------------------

    #[test]
    fn test_class_strips_member_bodies_keeps_relations() {
        let source = "classDiagram\n\
                      \x20   class Animal {\n\
                      \x20       +String name\n\
                      \x20       +eat()\n\
                      \x20   }\n\
                      \x20   class Dog\n\
                      \x20   Animal <|-- Dog\n";
        let simplified = simplify_source(source);
        assert!(simplified.contains("class Animal"));
        assert!(simplified.contains("class Dog"));
        assert!(simplified.contains("Animal <|-- Dog"));
        assert!(!simplified.contains("+String name"));
        assert!(!simplified.contains("+eat()"));
    }

    // -------------------------------------------------------------------------
    // Pass-through kinds
    // -------------------------------------------------------------------------

    #[test]
    fn test_er_state_gantt_pie_pass_through() {
        for source in [
            "erDiagram\n    USER ||--o{ ORDER : places",
            "stateDiagram-v2\n    [*] --> Active",
            "gantt\n    title Plan",
            "pie\n    \"A\" : 50",
            "gitGraph\n    commit",
        ] {
            assert_eq!(simplify_source(source), source);
        }
    }

    #[test]
    fn test_simplify_never_returns_empty_for_nonempty_input() {
        for source in ["graph TD", "sequenceDiagram", "classDiagram", "???", "A --> B"] {
            let data = DiagramData {
                mermaid_source: source.to_string(),
                ..DiagramData::default()
            };
            assert!(!simplify(&data).is_empty(), "empty output for {:?}", source);
        }
    }
}
