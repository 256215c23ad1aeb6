use std::collections::HashMap;
use petgraph::algo::astar;
use petgraph::graph::NodeIndex;
use petgraph::{Directed, Graph};
use crate::core::{Direction, Vec2};
use crate::state_graph::StateGraph;

/// Node weights are state ids, edge weights the input taken on that tick.
pub fn convert_to_petgraph(graph: &StateGraph) -> (Graph<usize, Option<Direction>, Directed>, HashMap<usize, NodeIndex>) {
    let mut petgraph = Graph::new();

    let node_map: HashMap<usize, NodeIndex> = graph
        .nodes
        .iter()
        .map(|(_, &id)| (id, petgraph.add_node(id)))
        .collect();

    for edge in &graph.edges {
        if let (Some(&from_index), Some(&to_index)) = (node_map.get(&edge.from), node_map.get(&edge.to)) {
            petgraph.add_edge(from_index, to_index, edge.action);
        }
    }

    (petgraph, node_map)
}

/// Shortest sequence of per-tick inputs from `start` to any state with a box on `win_cell`.
pub fn find_solution(graph: &StateGraph, start: usize, win_cell: Vec2) -> Option<Vec<Option<Direction>>> {
    let (petgraph, node_map) = convert_to_petgraph(graph);
    let &start_index = node_map.get(&start)?;

    let is_goal = |node: NodeIndex| {
        graph
            .get_state(petgraph[node])
            .is_some_and(|state| state.is_won(Some(win_cell)))
    };
    let (_, path) = astar(&petgraph, start_index, is_goal, |_| 1usize, |_| 0usize)?;

    path.windows(2)
        .map(|pair| {
            let edge = petgraph.find_edge(pair[0], pair[1])?;
            Some(petgraph[edge])
        })
        .collect()
}
