//! Direction handling - the strategy capability and the context that holds
//! the currently selected strategy.
//!
//! The dispatcher never looks inside a strategy. It installs one with
//! `set_strategy` and immediately runs it with `execute_strategy`.

use std::fmt;
use std::rc::Rc;

use crate::actions::MovementAction;
use crate::status::Status;

/// How one movement action transforms the vehicle status.
pub trait DirectionStrategy {
    fn execute(&self, status: &mut Status);

    /// Short name used in log output.
    fn name(&self) -> &'static str {
        "strategy"
    }
}

/// Shared handle to a resolved strategy.
pub type StrategyHandle = Rc<dyn DirectionStrategy>;

/// Holds the current strategy and runs it on demand.
pub trait DirectionContext {
    fn set_strategy(&mut self, strategy: StrategyHandle);

    /// Run the most recently set strategy on `status`.
    fn execute_strategy(&mut self, status: &mut Status);
}

/// Default context: one slot, empty until the first `set_strategy`.
#[derive(Default)]
pub struct StrategyContext {
    current: Option<StrategyHandle>,
}

impl StrategyContext {
    /// Empty context with no strategy installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// The strategy `execute_strategy` would run next, if any.
    pub fn current(&self) -> Option<&StrategyHandle> {
        self.current.as_ref()
    }
}

impl fmt::Debug for StrategyContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyContext")
            .field("current", &self.current.as_ref().map(|s| s.name()))
            .finish()
    }
}

impl DirectionContext for StrategyContext {
    fn set_strategy(&mut self, strategy: StrategyHandle) {
        self.current = Some(strategy);
    }

    fn execute_strategy(&mut self, status: &mut Status) {
        match &self.current {
            Some(strategy) => strategy.execute(status),
            None => log::warn!("execute_strategy called with no strategy installed"),
        }
    }
}

/// The four strategies, resolved once and indexed by movement kind.
#[derive(Clone)]
pub struct StrategyTable {
    slots: [StrategyHandle; 4],
}

impl StrategyTable {
    /// Call `resolver` exactly once per movement kind, in `MovementAction::ALL` order.
    pub fn resolve<F>(resolver: F) -> Self
    where
        F: FnMut(MovementAction) -> StrategyHandle,
    {
        Self {
            slots: MovementAction::ALL.map(resolver),
        }
    }

    /// Strategy resolved for `movement`.
    pub fn get(&self, movement: MovementAction) -> &StrategyHandle {
        &self.slots[movement.index()]
    }
}

impl fmt::Debug for StrategyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.slots.iter().map(|s| s.name()))
            .finish()
    }
}
