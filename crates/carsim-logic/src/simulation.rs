//! Action dispatch and status evolution.
//!
//! `perform_action` applies the immediate effect of a player action:
//! movement goes through the direction context (unless the tank is empty),
//! Rest/Refuel/Eat restore one resource, Exit and unknown actions do nothing.
//!
//! `decrease_status_values` charges the cost of a turn: random energy and gas
//! loss, a fixed hunger increase, and one-sided clamping. The two operations
//! are independent; the caller decides when to apply each.

use rand::Rng;

use crate::actions::{Action, ActionOutcome, MovementAction};
use crate::config::SimulationConfig;
use crate::direction::{DirectionContext, StrategyContext, StrategyHandle, StrategyTable};
use crate::status::Status;

/// Dispatches actions against a caller-owned `Status`.
#[derive(Debug)]
pub struct SimulationLogicService<C: DirectionContext = StrategyContext> {
    context: C,
    strategies: StrategyTable,
    config: SimulationConfig,
}

impl<C: DirectionContext> SimulationLogicService<C> {
    /// Build a service with the default config. `resolver` is called once
    /// per movement kind, here and never again.
    pub fn new<F>(context: C, resolver: F) -> Self
    where
        F: FnMut(MovementAction) -> StrategyHandle,
    {
        Self::with_config(context, resolver, SimulationConfig::default())
    }

    /// Build a service with `config`. An invalid config is replaced by the
    /// default one.
    pub fn with_config<F>(context: C, resolver: F, config: SimulationConfig) -> Self
    where
        F: FnMut(MovementAction) -> StrategyHandle,
    {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("{}; falling back to default config", e);
                SimulationConfig::default()
            }
        };
        Self {
            context,
            strategies: StrategyTable::resolve(resolver),
            config,
        }
    }

    /// Config in effect after validation.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The direction context the service dispatches into.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// The strategy bound to `movement` at construction.
    pub fn strategy(&self, movement: MovementAction) -> &StrategyHandle {
        self.strategies.get(movement)
    }

    /// Apply the immediate effect of `action` to `status`.
    pub fn perform_action(&mut self, action: Action, status: &mut Status) -> ActionOutcome {
        if let Some(movement) = action.movement() {
            // No movement of any kind on an empty tank
            if status.gas == 0 {
                log::info!("{} refused: out of gas", action.label());
                return ActionOutcome::OutOfGas;
            }

            let strategy = self.strategies.get(movement);
            log::debug!("{} -> {}", action.label(), strategy.name());
            self.context.set_strategy(strategy.clone());
            self.context.execute_strategy(status);
            return ActionOutcome::Moved(movement);
        }

        let outcome = match action {
            Action::Rest => {
                status.energy = self.config.max_energy;
                ActionOutcome::Rested
            }
            Action::Refuel => {
                status.gas = self.config.max_gas;
                ActionOutcome::Refueled
            }
            Action::Eat => {
                status.hunger = 0;
                ActionOutcome::Ate
            }
            Action::Exit => ActionOutcome::Exit,
            _ => ActionOutcome::Ignored,
        };

        log::debug!("{} -> {:?}", action.label(), outcome);
        outcome
    }

    /// Charge the cost of a turn using the thread-local generator.
    pub fn decrease_status_values(&self, action: Action, status: &mut Status) {
        self.decrease_status_values_with(action, status, &mut rand::thread_rng());
    }

    /// Charge the cost of a turn, drawing from `rng`.
    ///
    /// - energy drops by a random amount in the depletion range
    /// - gas drops by an independent draw, unless resting
    /// - hunger rises by `hunger_per_turn`, unless eating
    ///
    /// Energy and gas are floored at 0 and hunger is capped at `max_hunger`.
    /// Nothing else is clamped here; the restorative actions own the other
    /// bounds.
    pub fn decrease_status_values_with(
        &self,
        action: Action,
        status: &mut Status,
        rng: &mut impl Rng,
    ) {
        let range = self.config.min_depletion..=self.config.max_depletion;

        // Saturating: callers may hand in any i32
        status.energy = status.energy.saturating_sub(rng.gen_range(range.clone()));

        if action != Action::Rest {
            status.gas = status.gas.saturating_sub(rng.gen_range(range));
        }

        if action != Action::Eat {
            status.hunger = status.hunger.saturating_add(self.config.hunger_per_turn);
        }

        status.energy = status.energy.max(0);
        status.gas = status.gas.max(0);
        status.hunger = status.hunger.min(self.config.max_hunger);
    }
}
