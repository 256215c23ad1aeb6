use std::io;
use std::time::Instant;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Style};
use ratatui::Terminal;
use ratatui::widgets::*;
use crate::state_graph::StateGraph;

pub struct GraphRenderState<'a> {
    pub graph: &'a StateGraph,
    pub start_time: Instant,
    pub current_time: Instant,
}

pub fn render_graph(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: GraphRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let size = f.area();

        let elapsed = state.current_time.duration_since(state.start_time);
        let description = format!("{}\nElapsed: {:.1}s", get_graph_info(state.graph), elapsed.as_secs_f64());

        let paragraph = Paragraph::new(description)
            .block(Block::default().borders(Borders::ALL).title("State Graph Info"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);

        f.render_widget(paragraph, size);
    })?;
    Ok(())
}

pub fn get_graph_info(graph: &StateGraph) -> String {
    let nodes = graph.nodes.len();
    let edges = graph.edges.len();
    let unvisited = graph.unvisited.len();
    format!(
        "Graph has {} nodes, {} edges, {} unvisited nodes.",
        nodes, edges, unvisited
    )
}
