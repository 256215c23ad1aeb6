use std::collections::VecDeque;
use log::info;
use serde::{Deserialize, Serialize};
use crate::core::{GameState, LevelDescriptor, LevelError, MoveOutcome, UserAction};

/// Order in which queued inputs are applied at the start of a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputOrder {
    /// Arrival order.
    #[default]
    Fifo,
    /// Most recent first, as the legacy stack-drained queue behaved.
    Lifo,
}

/// One loaded level being played: the live state plus the queued inputs.
pub struct GameSession {
    level: LevelDescriptor,
    initial: GameState,
    state: GameState,
    inputs: VecDeque<UserAction>,
    input_order: InputOrder,
    wins: usize,
}

impl GameSession {
    pub fn load_level(level: LevelDescriptor) -> Result<Self, LevelError> {
        let initial = level.build()?;
        info!(
            "loaded level {} ({}x{}), player at {:?}",
            level.name.as_deref().unwrap_or("<unnamed>"),
            initial.grid.width(),
            initial.grid.height(),
            initial.player
        );
        Ok(GameSession {
            level,
            state: initial.clone(),
            initial,
            inputs: VecDeque::new(),
            input_order: InputOrder::default(),
            wins: 0,
        })
    }

    pub fn with_input_order(mut self, input_order: InputOrder) -> Self {
        self.input_order = input_order;
        self
    }

    pub fn level(&self) -> &LevelDescriptor {
        &self.level
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn wins(&self) -> usize {
        self.wins
    }

    pub fn pending_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn queue_input(&mut self, action: UserAction) {
        self.inputs.push_back(action);
    }

    /// Drains the whole input queue. Returns the outcome of every move applied.
    pub fn process_inputs(&mut self) -> Vec<MoveOutcome> {
        let mut outcomes = Vec::with_capacity(self.inputs.len());
        loop {
            let next = match self.input_order {
                InputOrder::Fifo => self.inputs.pop_front(),
                InputOrder::Lifo => self.inputs.pop_back(),
            };
            let Some(action) = next else {
                break;
            };

            match action {
                UserAction::Move(dir) => outcomes.push(self.state.attempt_move(dir)),
                UserAction::Reset => self.reset(),
            }
        }
        outcomes
    }

    /// One gravity pass over the live grid.
    pub fn tick(&mut self) -> usize {
        self.state.grid.tick()
    }

    /// Inputs first, then gravity.
    pub fn update(&mut self) -> Vec<MoveOutcome> {
        let outcomes = self.process_inputs();
        self.tick();
        outcomes
    }

    /// Resets the level when the win cell holds a box. Returns whether it did.
    pub fn check_win_condition(&mut self) -> bool {
        if !self.state.is_won(self.level.win_cell) {
            return false;
        }
        self.wins += 1;
        info!("level won ({} so far), resetting", self.wins);
        self.reset();
        true
    }

    pub fn reset(&mut self) {
        info!("resetting level");
        self.state = self.initial.clone();
    }
}

