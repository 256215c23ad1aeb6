use serde::{Deserialize, Serialize};
use crate::core::{Direction, Vec2};
use crate::state_graph::StateGraph;

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonData {
    pub nodes: Vec<JsonNode>,
    pub links: Vec<JsonEdge>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonNode {
    pub id: usize,
    pub won: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonEdge {
    pub source: usize,
    pub target: usize,
    pub action: Option<Direction>,
}

/// Won nodes are flagged but not reset, so their out-edges are kept.
pub fn get_json_data(graph: &StateGraph, win_cell: Option<Vec2>) -> Result<String, serde_json::Error> {
    let mut nodes: Vec<JsonNode> = graph
        .nodes
        .iter()
        .map(|(state, &id)| JsonNode {
            id,
            won: state.is_won(win_cell),
        })
        .collect();
    nodes.sort_by_key(|node| node.id);

    let mut links: Vec<JsonEdge> = graph
        .edges
        .iter()
        .map(|edge| JsonEdge {
            source: edge.from,
            target: edge.to,
            action: edge.action,
        })
        .collect();
    links.sort_by_key(|link| (link.source, link.target));

    serde_json::to_string_pretty(&JsonData { nodes, links })
}
