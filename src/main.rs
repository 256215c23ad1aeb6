// Tilefall: push boxes, collect keys, watch things fall.
// Controls: W/A/S/D or arrow keys, R to reset, Q to quit.
// Modes: `interactive` (default), `solve`, `export`. An optional second argument names a level json file.

use std::fs::OpenOptions;
use std::io::Write;
use std::time::Instant;

use log::{info, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tilefall::config::GameConfig;
use tilefall::console_interface::ConsoleInput::*;
use tilefall::console_interface::{cleanup_terminal, handle_input, render_game, setup_terminal};
use tilefall::core::{GameSession, LevelDescriptor, MoveOutcome};
use tilefall::models::GameRenderState;
use tilefall::scheduler::TickClock;
use tilefall::state_graph::{
    explore, find_solution, get_graph_info, get_json_data, populate_step, render_graph,
    ExploreResult, GraphRenderState, PopulateResult, StateGraph,
};

type Tui = Terminal<CrosstermBackend<std::io::Stdout>>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let switch = std::env::args().nth(1).unwrap_or("interactive".to_string());
    let level = match std::env::args().nth(2) {
        Some(path) => LevelDescriptor::from_file(path)?,
        None => LevelDescriptor::sample(),
    };
    let config = GameConfig::from_env()?;

    match switch.as_str() {
        "solve" => run_solve(&level, &config),
        "export" => run_export(&level, &config),
        "interactive" => run_interactive_with_terminal(level, &config),
        _ => {
            println!(
                "Unknown mode: {}. Use 'interactive', 'solve' or 'export'. defaulting to interactive",
                switch
            );
            run_interactive_with_terminal(level, &config)
        }
    }
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("logs")?;
    let log_out = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open("logs/tilefall.log")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_out)))
        .init();
    Ok(())
}

fn run_interactive_with_terminal(level: LevelDescriptor, config: &GameConfig) -> Result<(), Box<dyn std::error::Error>> {
    let session = GameSession::load_level(level)?.with_input_order(config.input_order);
    let mut terminal = setup_terminal()?;
    let result = run_interactive(session, config, &mut terminal);
    cleanup_terminal()?;
    result
}

fn run_interactive(
    mut session: GameSession,
    config: &GameConfig,
    terminal: &mut Tui,
) -> Result<(), Box<dyn std::error::Error>> {
    let clock = TickClock::new(config.ticks_per_second);
    let mut last_outcome: Option<MoveOutcome> = None;

    loop {
        let before = Instant::now();

        let outcomes = session.update();
        if let Some(&outcome) = outcomes.last() {
            last_outcome = Some(outcome);
        }
        session.check_win_condition();

        render_game(terminal, &GameRenderState {
            game: session.state(),
            tile_width: config.tile_width,
            wins: session.wins(),
            last_outcome,
        })?;

        // Inputs arriving before the next tick are only queued; the tick consumes them.
        let frame_time = before.elapsed();
        if clock.sleep_budget(frame_time).is_none() {
            warn!("tick overran its budget ({:?})", frame_time);
        }
        let deadline = clock.next_deadline(before);
        loop {
            let now = Instant::now();
            let remaining = deadline.saturating_duration_since(now);
            match handle_input(remaining)? {
                Quit => return Ok(()),
                UserAction(action) => session.queue_input(action),
                Timeout => break,
                Unknown => {}
            }
            if Instant::now() >= deadline {
                break;
            }
        }
    }
}

fn run_solve(level: &LevelDescriptor, config: &GameConfig) -> Result<(), Box<dyn std::error::Error>> {
    let Some(win_cell) = level.win_cell else {
        println!("Level has no win cell; nothing to solve.");
        return Ok(());
    };

    let mut state_graph = StateGraph::new();
    let start_id = state_graph.upsert_state(level.build()?);

    let mut terminal = setup_terminal()?;
    let explored = explore_with_progress(&mut state_graph, config.max_explored_nodes, &mut terminal);
    cleanup_terminal()?;
    let explored = explored?;

    println!("{}", get_graph_info(&state_graph));
    if explored == ExploreResult::LimitReached {
        println!("Stopped after {} states; the solution may be incomplete.", config.max_explored_nodes);
    }

    match find_solution(&state_graph, start_id, win_cell) {
        Some(actions) => {
            info!("solution found in {} ticks", actions.len());
            println!("Solved in {} ticks:", actions.len());
            let steps: Vec<String> = actions
                .iter()
                .map(|action| match action {
                    Some(dir) => format!("{:?}", dir),
                    None => "Wait".to_string(),
                })
                .collect();
            println!("{}", steps.join(" "));
        }
        None => println!("No winning state is reachable."),
    }
    Ok(())
}

fn explore_with_progress(
    state_graph: &mut StateGraph,
    max_nodes: usize,
    terminal: &mut Tui,
) -> Result<ExploreResult, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    loop {
        let stop_time = Instant::now() + std::time::Duration::from_millis(250);
        while Instant::now() < stop_time {
            if state_graph.nodes.len() >= max_nodes && !state_graph.is_fully_visited() {
                return Ok(ExploreResult::LimitReached);
            }
            let PopulateResult::Populated = populate_step(state_graph) else {
                return Ok(ExploreResult::Complete);
            };
        }

        render_graph(terminal, GraphRenderState {
            graph: state_graph,
            start_time,
            current_time: Instant::now(),
        })?;
    }
}

fn run_export(level: &LevelDescriptor, config: &GameConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut state_graph = StateGraph::new();
    state_graph.upsert_state(level.build()?);
    explore(&mut state_graph, config.max_explored_nodes);
    println!("{}", get_graph_info(&state_graph));

    let json_data = get_json_data(&state_graph, level.win_cell)?;
    std::fs::create_dir_all("exports")?;
    let mut f = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open("exports/state_graph.json")?;
    f.write_all(json_data.as_bytes())?;
    println!("State graph exported to exports/state_graph.json");
    Ok(())
}
