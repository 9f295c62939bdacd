//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - A guarded transition (pedestrian button)
//! - Entry hooks and transition listeners
//! - Diagnostics on the current state
//!
//! Run with: cargo run --example traffic_light

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use switchyard::builder::ConfigurationBuilder;
use switchyard::core::{HookError, TransitionContext};
use switchyard::engine::StateMachine;
use switchyard::{state_enum, trigger_enum};

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

trigger_enum! {
    enum Signal {
        Timer,
        Crossing,
    }
}

fn announce(ctx: &TransitionContext<'_, TrafficLight, Signal>) -> Result<(), HookError> {
    println!("  lamp now {:?}", ctx.destination);
    Ok(())
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let button_pressed = Arc::new(AtomicBool::new(false));
    let pressed = Arc::clone(&button_pressed);

    let config = ConfigurationBuilder::new()
        .state(TrafficLight::Red, |s| {
            s.permit(Signal::Timer, TrafficLight::Green).on_entry(announce)
        })
        .state(TrafficLight::Green, |s| {
            s.permit(Signal::Timer, TrafficLight::Yellow)
                .permit_if(Signal::Crossing, TrafficLight::Yellow, move |_| {
                    pressed.load(Ordering::SeqCst)
                })
                .on_entry(announce)
        })
        .state(TrafficLight::Yellow, |s| {
            s.permit(Signal::Timer, TrafficLight::Red).on_entry(announce)
        })
        .build()
        .unwrap();

    let mut light = StateMachine::new(TrafficLight::Red, Arc::new(config)).unwrap();
    light.on_transition(|transition| {
        println!("  {:?} -> {:?}", transition.from, transition.to);
    });

    println!("Machine {} starts at {:?}\n", light.id(), light.current_state());

    println!("One full cycle:");
    for _ in 0..3 {
        light.fire(Signal::Timer).unwrap();
    }

    println!("\nAt green again:");
    light.fire(Signal::Timer).unwrap();

    let diagnostics = light.diagnostics();
    println!(
        "  crossing permitted without button: {}",
        diagnostics.can_handle_trigger(&Signal::Crossing, true)
    );

    match light.fire(Signal::Crossing) {
        Ok(()) => println!("  crossing accepted"),
        Err(error) => println!("  crossing rejected: {error}"),
    }

    button_pressed.store(true, Ordering::SeqCst);
    println!("\nButton pressed:");
    light.fire(Signal::Crossing).unwrap();

    println!("\nReport: {}", light.diagnostics().report().to_json().unwrap());

    println!("\n=== Example Complete ===");
}
