mod console_interface;
mod graph;
mod json_export;
mod models;
mod populate;
mod solve;

pub use console_interface::{get_graph_info, render_graph, GraphRenderState};
pub use json_export::{get_json_data, JsonData};
pub use models::{Edge, ExploreResult, PopulateResult, StateGraph};
pub use populate::{all_actions, explore, populate_node, populate_step};
pub use solve::{convert_to_petgraph, find_solution};
