//! Integration tests for dispatch followed by turn cost.
//!
//! Exercises: Action code → perform_action → decrease_status_values
//! through the public API only, with the default `StrategyContext`.

use std::cell::RefCell;
use std::rc::Rc;

use carsim_logic::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Helpers ────────────────────────────────────────────────────────────

/// Appends its movement kind to a shared log when run.
struct LoggingStrategy {
    movement: MovementAction,
    log: Rc<RefCell<Vec<MovementAction>>>,
}

impl DirectionStrategy for LoggingStrategy {
    fn execute(&self, _status: &mut Status) {
        self.log.borrow_mut().push(self.movement);
    }

    fn name(&self) -> &'static str {
        "logging"
    }
}

fn logging_service(
    log: &Rc<RefCell<Vec<MovementAction>>>,
) -> SimulationLogicService<StrategyContext> {
    SimulationLogicService::new(StrategyContext::new(), |movement| {
        Rc::new(LoggingStrategy {
            movement,
            log: log.clone(),
        }) as StrategyHandle
    })
}

// ── Dispatch ───────────────────────────────────────────────────────────

#[test]
fn each_movement_code_runs_its_own_strategy() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut svc = logging_service(&log);
    let mut status = Status::new(20, 20, 0);

    for code in [3, 1, 4, 2, 3] {
        svc.perform_action(Action::from_code(code), &mut status);
    }

    assert_eq!(
        *log.borrow(),
        vec![
            MovementAction::Forward,
            MovementAction::Left,
            MovementAction::Backward,
            MovementAction::Right,
            MovementAction::Forward,
        ]
    );
}

#[test]
fn empty_tank_never_reaches_strategy() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut svc = logging_service(&log);
    let mut status = Status::new(10, 0, 0);

    for code in 1..=4 {
        let outcome = svc.perform_action(Action::from_code(code), &mut status);
        assert_eq!(outcome, ActionOutcome::OutOfGas);
    }

    assert!(log.borrow().is_empty());
    assert!(svc.context().current().is_none());
    assert_eq!(status, Status::new(10, 0, 0));
}

#[test]
fn refuel_unblocks_movement() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut svc = logging_service(&log);
    let mut status = Status::new(10, 0, 0);

    assert_eq!(
        svc.perform_action(Action::DriveForward, &mut status),
        ActionOutcome::OutOfGas
    );
    svc.perform_action(Action::Refuel, &mut status);
    assert_eq!(
        svc.perform_action(Action::DriveForward, &mut status),
        ActionOutcome::Moved(MovementAction::Forward)
    );
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn unmapped_codes_leave_status_untouched() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut svc = logging_service(&log);

    for code in [-5, 0, 9, 42, 99] {
        let mut status = Status::new(10, 5, 3);
        let outcome = svc.perform_action(Action::from_code(code), &mut status);
        assert_eq!(outcome, ActionOutcome::Ignored);
        assert_eq!(status, Status::new(10, 5, 3));
    }
    assert!(log.borrow().is_empty());
}

// ── Turn cost ──────────────────────────────────────────────────────────

#[test]
fn drive_forward_scenario_from_full() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut svc = logging_service(&log);
    let mut rng = StdRng::seed_from_u64(2024);
    let mut status = Status::new(20, 20, 0);

    svc.perform_action(Action::DriveForward, &mut status);
    assert_eq!((status.energy, status.gas, status.hunger), (20, 20, 0));

    svc.decrease_status_values_with(Action::DriveForward, &mut status, &mut rng);
    assert!((15..=19).contains(&status.energy));
    assert!((15..=19).contains(&status.gas));
    assert_eq!(status.hunger, 2);
}

#[test]
fn turn_cost_bounds_hold_for_many_statuses() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let svc = logging_service(&log);
    let mut rng = StdRng::seed_from_u64(99);

    for action in [
        Action::TurnLeft,
        Action::TurnRight,
        Action::DriveForward,
        Action::Reverse,
        Action::Refuel,
        Action::Eat,
    ] {
        for energy in 0..=20 {
            for gas in [0, 1, 3, 10, 20] {
                for hunger in [0, 7, 14, 15, 16] {
                    let before = Status::new(energy, gas, hunger);
                    let mut s = before;
                    svc.decrease_status_values_with(action, &mut s, &mut rng);

                    assert!(s.energy >= 0 && s.energy <= before.energy);
                    assert!(before.energy - s.energy <= 5);
                    if before.energy >= 5 {
                        assert!(before.energy - s.energy >= 1);
                    }
                    assert!(s.gas >= 0 && s.gas <= before.gas);
                    assert!(before.gas - s.gas <= 5);
                    if before.gas >= 5 {
                        assert!(before.gas - s.gas >= 1);
                    }

                    if action == Action::Eat {
                        assert_eq!(s.hunger, hunger);
                    } else {
                        assert_eq!(s.hunger, (hunger + 2).min(16));
                    }
                }
            }
        }
    }
}

#[test]
fn rest_turn_never_burns_gas() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let svc = logging_service(&log);
    let mut rng = StdRng::seed_from_u64(5);

    for gas in 0..=20 {
        let mut s = Status::new(12, gas, 4);
        svc.decrease_status_values_with(Action::Rest, &mut s, &mut rng);
        assert_eq!(s.gas, gas);
    }
}

#[test]
fn same_seed_gives_same_turn_cost() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let svc = logging_service(&log);

    let mut a = Status::new(20, 20, 0);
    let mut b = Status::new(20, 20, 0);
    let mut rng_a = StdRng::seed_from_u64(11);
    let mut rng_b = StdRng::seed_from_u64(11);
    for _ in 0..3 {
        svc.decrease_status_values_with(Action::DriveForward, &mut a, &mut rng_a);
        svc.decrease_status_values_with(Action::DriveForward, &mut b, &mut rng_b);
    }
    assert_eq!(a, b);
}

#[test]
fn thread_rng_variant_stays_in_bounds() {
    let _ = env_logger::builder().is_test(true).try_init();
    let log = Rc::new(RefCell::new(Vec::new()));
    let svc = logging_service(&log);

    for _ in 0..100 {
        let mut s = Status::new(10, 1, 15);
        svc.decrease_status_values(Action::DriveForward, &mut s);
        assert_eq!(s.gas, 0);
        assert!((5..=9).contains(&s.energy));
        assert_eq!(s.hunger, 16);
    }
}
