//! Layered Graph Layout
//!
//! Deterministic top-to-bottom hierarchical layout. Every node occupies
//! the same fixed-size bounding box; ranks are assigned by longest path
//! from the sources, nodes within a rank are ordered by repeated
//! barycenter sweeps to reduce crossings, and each rank row is centered
//! horizontally.
//!
//! Determinism is a hard requirement: re-running layout on an unchanged
//! graph must produce identical coordinates so the explorer can
//! re-render without jitter. All ordering below derives from input
//! order, never from hash-map iteration.
//!
//! Coordinates are top-left anchors. The engine positions node centers;
//! with a constant box size the conversion is a fixed offset, so the
//! anchors are computed directly.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::constants::layout::{
    NODE_HEIGHT, NODE_SPACING, NODE_WIDTH, ORDERING_SWEEPS, RANK_SPACING,
};
use crate::types::DiagramData;

/// Top-left coordinates of a laid-out node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Assigns coordinates to every node in the graph.
///
/// Edges whose endpoints are missing from the node set are ignored.
/// An empty graph yields an empty map; cycles and disconnected
/// subgraphs lay out without error.
pub fn assign_coordinates(data: &DiagramData) -> HashMap<String, Point> {
    if data.nodes.is_empty() {
        return HashMap::new();
    }

    let ids: Vec<&str> = data.nodes.iter().map(|n| n.id.as_str()).collect();
    let id_set: HashSet<&str> = ids.iter().copied().collect();

    // Adjacency over resolvable edges only.
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    for edge in &data.edges {
        let (source, target) = (edge.source.as_str(), edge.target.as_str());
        if id_set.contains(source) && id_set.contains(target) {
            adjacency.entry(source).or_default().push(target);
            pairs.push((source, target));
        }
    }

    let order = topological_order(&ids, &adjacency, &pairs);
    let ranks = compute_ranks(&order, &adjacency);

    let mut buckets = rank_buckets(&ids, &ranks);
    order_ranks(&mut buckets, &pairs);

    position_buckets(&buckets)
}

/// Kahn's algorithm seeded and drained in input order. Nodes caught in
/// cycles are appended afterwards, again in input order, so the layout
/// always terminates.
fn topological_order<'a>(
    ids: &[&'a str],
    adjacency: &HashMap<&'a str, Vec<&'a str>>,
    pairs: &[(&'a str, &'a str)],
) -> Vec<&'a str> {
    let mut indegree: HashMap<&str, usize> = ids.iter().map(|id| (*id, 0)).collect();
    for &(_, target) in pairs {
        if let Some(degree) = indegree.get_mut(target) {
            *degree += 1;
        }
    }

    let mut queue: VecDeque<&str> = ids
        .iter()
        .copied()
        .filter(|id| indegree.get(id) == Some(&0))
        .collect();

    let mut order: Vec<&str> = Vec::with_capacity(ids.len());
    while let Some(node) = queue.pop_front() {
        order.push(node);
        if let Some(nexts) = adjacency.get(node) {
            for &next in nexts {
                if let Some(degree) = indegree.get_mut(next) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(next);
                    }
                }
            }
        }
    }

    if order.len() < ids.len() {
        let seen: HashSet<&str> = order.iter().copied().collect();
        for &id in ids {
            if !seen.contains(id) {
                order.push(id);
            }
        }
    }

    order
}

/// Longest path from the sources: a node's rank is one below its
/// deepest predecessor.
fn compute_ranks<'a>(
    order: &[&'a str],
    adjacency: &HashMap<&'a str, Vec<&'a str>>,
) -> HashMap<&'a str, usize> {
    let mut ranks: HashMap<&str, usize> = HashMap::new();
    for &node in order {
        let rank = *ranks.entry(node).or_insert(0);
        if let Some(nexts) = adjacency.get(node) {
            for &next in nexts {
                if next == node {
                    continue;
                }
                let entry = ranks.entry(next).or_insert(0);
                *entry = (*entry).max(rank + 1);
            }
        }
    }
    ranks
}

/// Buckets nodes per rank, preserving input order inside each rank as
/// the initial ordering.
fn rank_buckets<'a>(ids: &[&'a str], ranks: &HashMap<&'a str, usize>) -> Vec<Vec<&'a str>> {
    let max_rank = ids
        .iter()
        .map(|id| ranks.get(id).copied().unwrap_or(0))
        .max()
        .unwrap_or(0);

    let mut buckets: Vec<Vec<&str>> = vec![Vec::new(); max_rank + 1];
    for &id in ids {
        let rank = ranks.get(id).copied().unwrap_or(0);
        buckets[rank].push(id);
    }
    buckets
}

/// Barycenter ordering: alternating down (by incoming neighbors) and up
/// (by outgoing neighbors) sweeps. Not optimal crossing minimization,
/// just the standard Sugiyama heuristic; ties keep their current order.
fn order_ranks(buckets: &mut [Vec<&str>], pairs: &[(&str, &str)]) {
    if buckets.len() <= 1 {
        return;
    }

    let mut incoming: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut outgoing: HashMap<&str, Vec<&str>> = HashMap::new();
    for &(source, target) in pairs {
        outgoing.entry(source).or_default().push(target);
        incoming.entry(target).or_default().push(source);
    }

    let mut positions: HashMap<String, usize> = HashMap::new();
    refresh_positions(buckets, &mut positions);

    for _ in 0..ORDERING_SWEEPS {
        for rank in 1..buckets.len() {
            sort_bucket(&mut buckets[rank], &incoming, &positions);
            refresh_positions(buckets, &mut positions);
        }
        for rank in (0..buckets.len().saturating_sub(1)).rev() {
            sort_bucket(&mut buckets[rank], &outgoing, &positions);
            refresh_positions(buckets, &mut positions);
        }
    }
}

fn refresh_positions(buckets: &[Vec<&str>], positions: &mut HashMap<String, usize>) {
    positions.clear();
    for bucket in buckets {
        for (index, id) in bucket.iter().enumerate() {
            positions.insert((*id).to_string(), index);
        }
    }
}

fn sort_bucket(
    bucket: &mut [&str],
    neighbors: &HashMap<&str, Vec<&str>>,
    positions: &HashMap<String, usize>,
) {
    if bucket.len() <= 1 {
        return;
    }

    let current: HashMap<&str, usize> = bucket
        .iter()
        .enumerate()
        .map(|(index, id)| (*id, index))
        .collect();

    bucket.sort_by(|a, b| {
        let score_a = barycenter(a, neighbors, positions).unwrap_or(current[a] as f32);
        let score_b = barycenter(b, neighbors, positions).unwrap_or(current[b] as f32);
        score_a
            .partial_cmp(&score_b)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| current[a].cmp(&current[b]))
    });
}

/// Mean position of a node's neighbors in the previous sweep, `None`
/// when it has none to average over.
fn barycenter(
    id: &str,
    neighbors: &HashMap<&str, Vec<&str>>,
    positions: &HashMap<String, usize>,
) -> Option<f32> {
    let linked = neighbors.get(id)?;
    let known: Vec<usize> = linked
        .iter()
        .filter_map(|n| positions.get(*n).copied())
        .collect();
    if known.is_empty() {
        return None;
    }
    Some(known.iter().sum::<usize>() as f32 / known.len() as f32)
}

/// Fixed-box coordinate assignment: ranks stack vertically, rows center
/// horizontally against the widest rank.
fn position_buckets(buckets: &[Vec<&str>]) -> HashMap<String, Point> {
    let row_width = |count: usize| -> f32 {
        if count == 0 {
            0.0
        } else {
            count as f32 * NODE_WIDTH + (count - 1) as f32 * NODE_SPACING
        }
    };

    let total_width = buckets
        .iter()
        .map(|bucket| row_width(bucket.len()))
        .fold(0.0f32, f32::max);

    let mut points = HashMap::new();
    for (rank, bucket) in buckets.iter().enumerate() {
        let offset = (total_width - row_width(bucket.len())) / 2.0;
        let y = rank as f32 * (NODE_HEIGHT + RANK_SPACING);
        for (index, id) in bucket.iter().enumerate() {
            let x = offset + index as f32 * (NODE_WIDTH + NODE_SPACING);
            points.insert((*id).to_string(), Point { x, y });
        }
    }
    points
}
