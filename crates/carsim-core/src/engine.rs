//! Turn engine - main entry point for playing a session

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use carsim_logic::actions::{Action, ActionOutcome};
use carsim_logic::config::SimulationConfig;
use carsim_logic::direction::StrategyContext;
use carsim_logic::simulation::SimulationLogicService;
use carsim_logic::status::Status;

use crate::strategies::resolve_strategy;

/// Whether the session is still accepting actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Running,
    /// Hunger reached the configured maximum.
    Starved,
    /// The player chose Exit.
    Quit,
}

impl GameState {
    /// True once the session stops accepting actions
    pub fn is_over(self) -> bool {
        self != GameState::Running
    }
}

/// Result of one `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub action: Action,
    pub outcome: ActionOutcome,
    /// Turns spent so far, including this one.
    pub turn: u32,
    pub status: Status,
    pub state: GameState,
}

/// Main simulation engine
pub struct SimulationEngine {
    /// Current vehicle status
    pub status: Status,
    service: SimulationLogicService<StrategyContext>,
    rng: StdRng,
    turn: u32,
    state: GameState,
}

impl SimulationEngine {
    /// Create a session with the default config and an entropy-seeded generator
    pub fn new() -> Self {
        Self::from_parts(SimulationConfig::default(), StdRng::from_entropy())
    }

    /// Create a reproducible session
    pub fn with_seed(seed: u64) -> Self {
        Self::from_parts(SimulationConfig::default(), StdRng::seed_from_u64(seed))
    }

    /// Create a reproducible session with a custom config
    pub fn with_config(config: SimulationConfig, seed: u64) -> Self {
        Self::from_parts(config, StdRng::seed_from_u64(seed))
    }

    fn from_parts(config: SimulationConfig, rng: StdRng) -> Self {
        let service =
            SimulationLogicService::with_config(StrategyContext::new(), resolve_strategy, config);
        let status = service.config().full_status();
        Self {
            status,
            service,
            rng,
            turn: 0,
            state: GameState::Running,
        }
    }

    /// Play one action: dispatch it, then charge the turn if it used one.
    pub fn step(&mut self, action: Action) -> TurnReport {
        if self.state.is_over() {
            log::debug!("ignoring {:?}, session is {:?}", action, self.state);
            return self.report(action, ActionOutcome::Ignored);
        }

        let outcome = self.service.perform_action(action, &mut self.status);

        if outcome.consumes_turn() {
            self.service
                .decrease_status_values_with(action, &mut self.status, &mut self.rng);
            self.turn += 1;
        }

        if outcome == ActionOutcome::Exit {
            self.state = GameState::Quit;
        } else if self.status.hunger >= self.service.config().max_hunger {
            self.state = GameState::Starved;
            log::info!("starved after {} turns", self.turn);
        }

        self.report(action, outcome)
    }

    /// Play actions in order until the script ends or the session is over.
    pub fn run(&mut self, actions: impl IntoIterator<Item = Action>) -> Vec<TurnReport> {
        let mut reports = Vec::new();
        for action in actions {
            if self.state.is_over() {
                break;
            }
            reports.push(self.step(action));
        }
        reports
    }

    fn report(&self, action: Action, outcome: ActionOutcome) -> TurnReport {
        TurnReport {
            action,
            outcome,
            turn: self.turn,
            status: self.status,
            state: self.state,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        self.service.config()
    }

    /// Turns spent so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Current session state
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}
