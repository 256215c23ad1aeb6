use crate::core::GameState;
use crate::state_graph::models::{Edge, StateGraph};
use std::collections::{BTreeSet, HashSet};

impl StateGraph {
    pub fn new() -> Self {
        StateGraph {
            nodes: bimap::BiMap::new(),
            edges: HashSet::new(),
            unvisited: BTreeSet::new(),
            next_id: 0,
        }
    }

    pub fn upsert_state(&mut self, state: GameState) -> usize {
        if let Some(&id) = self.nodes.get_by_left(&state) {
            id
        } else {
            let id = self.next_id;
            self.next_id += 1;

            self.nodes.insert(state, id);
            self.unvisited.insert(id);
            id
        }
    }

    pub fn get_state(&self, id: usize) -> Option<&GameState> {
        self.nodes.get_by_right(&id)
    }

    pub fn get_id(&self, state: &GameState) -> Option<usize> {
        self.nodes.get_by_left(state).copied()
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.insert(edge);
    }

    pub fn mark_visited(&mut self, node_id: usize) {
        self.unvisited.remove(&node_id);
    }

    /// Lowest pending id first, so exploration proceeds breadth-first.
    pub fn get_unvisited_node(&self) -> Option<usize> {
        self.unvisited.first().copied()
    }

    pub fn is_fully_visited(&self) -> bool {
        self.unvisited.is_empty()
    }
}

impl Default for StateGraph {
    fn default() -> Self {
        Self::new()
    }
}
