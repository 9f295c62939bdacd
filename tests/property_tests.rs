//! Property-based tests for the execution engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated trigger sequences and guard settings.

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use switchyard::builder::{ConfigurationBuilder, TransitionBuilder};
use switchyard::core::{
    Configuration, HookError, ParameterizedTrigger, TransitionContext, TransitionOption,
};
use switchyard::engine::{MachineError, StateMachine};
use switchyard::{state_enum, trigger_enum};

state_enum! {
    enum Light {
        Off,
        Dim,
        Bright,
    }
}

trigger_enum! {
    enum Switch {
        Toggle,
        Raise,
        Lower,
        Reset,
        Level,
        Flip,
    }
}

const ALL_TRIGGERS: [Switch; 6] = [
    Switch::Toggle,
    Switch::Raise,
    Switch::Lower,
    Switch::Reset,
    Switch::Level,
    Switch::Flip,
];

const GATES: usize = 5;

fn level() -> ParameterizedTrigger<Switch, u8> {
    ParameterizedTrigger::new(Switch::Level)
}

/// Same identity as [`level`], declared with an argument type no state accepts.
fn wide_level() -> ParameterizedTrigger<Switch, i32> {
    ParameterizedTrigger::new(Switch::Level)
}

type Log = Arc<Mutex<Vec<String>>>;

fn record(
    log: &Log,
    entry: String,
) -> impl Fn(&TransitionContext<'_, Light, Switch>) -> Result<(), HookError> + Send + Sync + 'static
{
    let log = Arc::clone(log);
    move |_| {
        log.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

/// Dimmer with guards driven by `gates`, one flag per guarded transition.
///
/// `Level(u8)` picks `Dim` or `Bright` from its argument; `Flip` picks the
/// destination from the source state.
fn dimmer(log: &Log, gates: &[Arc<AtomicBool>; GATES]) -> Configuration<Light, Switch> {
    let gate = |i: usize| {
        let flag = Arc::clone(&gates[i]);
        move |_: &Light| flag.load(Ordering::SeqCst)
    };
    let level = level();

    ConfigurationBuilder::new()
        .state(Light::Off, |s| {
            s.permit(Switch::Toggle, Light::Dim)
                .permit_if(Switch::Raise, Light::Bright, gate(0))
                .on_entry(record(log, "entry Off".into()))
                .on_exit(record(log, "exit Off".into()))
        })
        .state(Light::Dim, |s| {
            s.permit(Switch::Toggle, Light::Off)
                .permit_if(Switch::Raise, Light::Bright, gate(1))
                .permit_reentry(Switch::Reset)
                .transition(
                    TransitionBuilder::parameterized(&level)
                        .to_dynamic_with(|_, value: &u8| {
                            if *value > 127 {
                                Light::Bright
                            } else {
                                Light::Dim
                            }
                        })
                        .when(gate(3)),
                )
                .on_entry(record(log, "entry Dim".into()))
                .on_exit(record(log, "exit Dim".into()))
        })
        .state(Light::Bright, |s| {
            s.permit(Switch::Toggle, Light::Off)
                .permit_if(Switch::Lower, Light::Dim, gate(2))
                .permit_with(&level, Light::Bright)
                .transition(
                    TransitionBuilder::new(Switch::Flip)
                        .to_dynamic(|current: &Light| {
                            if *current == Light::Bright {
                                Light::Off
                            } else {
                                Light::Bright
                            }
                        })
                        .when(gate(4)),
                )
                .on_entry(record(log, "entry Bright".into()))
                .on_exit(record(log, "exit Bright".into()))
        })
        .build()
        .unwrap()
}

fn gates(open: [bool; GATES]) -> [Arc<AtomicBool>; GATES] {
    open.map(|o| Arc::new(AtomicBool::new(o)))
}

fn machine(log: &Log, gates: &[Arc<AtomicBool>; GATES]) -> StateMachine<Light, Switch> {
    StateMachine::new(Light::Off, Arc::new(dimmer(log, gates))).unwrap()
}

/// How a generated step fires its trigger.
#[derive(Clone, Copy, Debug)]
enum Step {
    Plain(Switch),
    Level(u8),
    WideLevel(i32),
}

fn apply(
    machine: &mut StateMachine<Light, Switch>,
    step: Step,
) -> Result<(), MachineError<Light, Switch>> {
    match step {
        Step::Plain(trigger) => machine.fire(trigger),
        Step::Level(value) => machine.fire_with(&level(), value),
        Step::WideLevel(value) => machine.fire_with(&wide_level(), value),
    }
}

prop_compose! {
    fn arbitrary_trigger()(variant in 0..ALL_TRIGGERS.len()) -> Switch {
        ALL_TRIGGERS[variant]
    }
}

fn arbitrary_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => arbitrary_trigger().prop_map(Step::Plain),
        1 => any::<u8>().prop_map(Step::Level),
        1 => any::<i32>().prop_map(Step::WideLevel),
    ]
}

/// Run `steps` from `Off`, returning the final state and hook log.
fn run(open: [bool; GATES], steps: &[Step]) -> (Light, Vec<String>) {
    let log = Log::default();
    let gates = gates(open);
    let mut machine = machine(&log, &gates);
    for step in steps {
        let _ = apply(&mut machine, *step);
    }
    let entries = log.lock().unwrap().clone();
    (*machine.current_state(), entries)
}

proptest! {
    #[test]
    fn execution_is_deterministic(
        open in any::<[bool; GATES]>(),
        steps in prop::collection::vec(arbitrary_step(), 0..20)
    ) {
        prop_assert_eq!(run(open, &steps), run(open, &steps));
    }

    #[test]
    fn can_handle_matches_fire_outcome(
        open in any::<[bool; GATES]>(),
        prefix in prop::collection::vec(arbitrary_step(), 0..10),
        candidate in arbitrary_step()
    ) {
        let log = Log::default();
        let gates = gates(open);
        let mut machine = machine(&log, &gates);
        for step in &prefix {
            let _ = apply(&mut machine, *step);
        }

        let diagnostics = machine.diagnostics();
        let predicted = match candidate {
            Step::Plain(trigger) => diagnostics.can_handle_trigger(&trigger, true),
            Step::Level(_) => diagnostics.can_handle_trigger_for::<u8>(&Switch::Level),
            Step::WideLevel(_) => diagnostics.can_handle_trigger_for::<i32>(&Switch::Level),
        };
        let result = apply(&mut machine, candidate);

        prop_assert_eq!(
            predicted,
            !matches!(result, Err(MachineError::InvalidTrigger { .. }))
        );
    }

    #[test]
    fn permitted_triggers_are_exhaustive_and_unique(
        open in any::<[bool; GATES]>(),
        prefix in prop::collection::vec(arbitrary_step(), 0..10)
    ) {
        let log = Log::default();
        let gates = gates(open);
        let mut machine = machine(&log, &gates);
        for step in &prefix {
            let _ = apply(&mut machine, *step);
        }

        let diagnostics = machine.diagnostics();
        let permitted: Vec<Switch> = diagnostics.current_permitted_triggers().copied().collect();
        let expected: HashSet<Switch> = ALL_TRIGGERS
            .iter()
            .copied()
            .filter(|t| diagnostics.can_handle_trigger(t, false))
            .collect();

        let unique: HashSet<Switch> = permitted.iter().copied().collect();
        prop_assert_eq!(unique.len(), permitted.len());
        prop_assert_eq!(unique, expected);
    }

    #[test]
    fn rejected_triggers_change_nothing(
        open in any::<[bool; GATES]>(),
        steps in prop::collection::vec(arbitrary_step(), 1..20)
    ) {
        let log = Log::default();
        let gates = gates(open);
        let mut machine = machine(&log, &gates);

        for step in steps {
            let before = *machine.current_state();
            let hooks_before = log.lock().unwrap().len();
            if apply(&mut machine, step).is_err() {
                prop_assert_eq!(*machine.current_state(), before);
                prop_assert_eq!(log.lock().unwrap().len(), hooks_before);
            }
        }
    }

    #[test]
    fn stopped_machine_never_moves(
        steps in prop::collection::vec(arbitrary_step(), 0..20)
    ) {
        let log = Log::default();
        let gates = gates([true; GATES]);
        let mut machine = machine(&log, &gates);
        machine.stop();

        for step in steps {
            prop_assert!(apply(&mut machine, step).is_ok());
            prop_assert!(machine.move_to_state(Light::Bright, TransitionOption::Default).is_ok());
        }
        prop_assert_eq!(*machine.current_state(), Light::Off);
        prop_assert!(log.lock().unwrap().is_empty());
    }
}
