use std::collections::{BTreeSet, HashSet};
use crate::core::{Direction, GameChangeType, GameState};

#[derive(Clone)]
pub struct StateGraph {
    // map from game state to node id
    pub nodes: bimap::BiMap<GameState, usize>,
    pub edges: HashSet<Edge>,
    pub unvisited: BTreeSet<usize>,
    pub next_id: usize,
}

/// One tick of the simulation. `action` is `None` for a tick with no input.
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub action: Option<Direction>,
    pub game_change_type: GameChangeType,
}

pub enum PopulateResult {
    AllVisited,
    Populated,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ExploreResult {
    Complete,
    LimitReached,
}
