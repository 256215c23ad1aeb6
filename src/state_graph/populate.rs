use log::debug;
use crate::core::{step, Direction, GameUpdate};
use crate::state_graph::models::{Edge, ExploreResult, PopulateResult, StateGraph};

/// Every input the explorer tries from a state: the four moves and an idle tick.
pub fn all_actions() -> [Option<Direction>; 5] {
    [
        None,
        Some(Direction::Up),
        Some(Direction::Down),
        Some(Direction::Left),
        Some(Direction::Right),
    ]
}

pub fn populate_node(graph: &mut StateGraph, from_id: usize) {
    let Some(from_state) = graph.get_state(from_id) else {
        return;
    };
    let from_state = from_state.clone();

    for action in all_actions() {
        if let GameUpdate::NextState(new_state, change_type) = step(&from_state, action) {
            let to_id = graph.upsert_state(new_state);
            graph.add_edge(Edge {
                from: from_id,
                to: to_id,
                action,
                game_change_type: change_type,
            });
        }
    }

    graph.mark_visited(from_id);
}

pub fn populate_step(graph: &mut StateGraph) -> PopulateResult {
    let Some(node_id) = graph.get_unvisited_node() else {
        return PopulateResult::AllVisited;
    };
    populate_node(graph, node_id);
    PopulateResult::Populated
}

/// Expands nodes until the graph is complete or holds `max_nodes` states.
pub fn explore(graph: &mut StateGraph, max_nodes: usize) -> ExploreResult {
    loop {
        if graph.nodes.len() >= max_nodes && !graph.is_fully_visited() {
            debug!("exploration stopped at {} nodes", graph.nodes.len());
            return ExploreResult::LimitReached;
        }
        if let PopulateResult::AllVisited = populate_step(graph) {
            return ExploreResult::Complete;
        }
    }
}
