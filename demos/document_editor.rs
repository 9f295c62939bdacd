//! Document Editor State Machine
//!
//! This example demonstrates parameterized triggers and dynamic
//! destinations.
//!
//! Key concepts:
//! - A trigger that carries an argument (the new document text)
//! - Entry hooks reading the firing argument
//! - A destination chosen at fire time
//! - Forcing a state with `move_to_state`
//! - Stopping a machine
//!
//! Run with: cargo run --example document_editor

use std::sync::{Arc, Mutex};
use switchyard::builder::ConfigurationBuilder;
use switchyard::core::{ParameterizedTrigger, TransitionContext, TransitionOption};
use switchyard::engine::StateMachine;
use switchyard::{state_enum, trigger_enum};

state_enum! {
    enum Mode {
        Viewing,
        Editing,
        Saved,
        Empty,
    }
}

trigger_enum! {
    enum Action {
        Edit,
        SetText,
        Save,
        Close,
    }
}

fn main() {
    println!("=== Document Editor State Machine ===\n");

    let set_text = ParameterizedTrigger::<Action, String>::new(Action::SetText);
    let buffer = Arc::new(Mutex::new(String::new()));
    let writer = Arc::clone(&buffer);
    let reader = Arc::clone(&buffer);

    let config = ConfigurationBuilder::new()
        .state(Mode::Viewing, |s| s.permit(Action::Edit, Mode::Editing))
        .state(Mode::Editing, |s| {
            s.permit_with(&set_text, Mode::Editing)
                .permit_dynamic(Action::Save, move |_| {
                    if reader.lock().unwrap().is_empty() {
                        Mode::Empty
                    } else {
                        Mode::Saved
                    }
                })
                .on_entry(move |ctx: &TransitionContext<'_, Mode, Action>| {
                    if let Some(text) = ctx.argument::<String>() {
                        *writer.lock().unwrap() = text.clone();
                        println!("  buffer updated: {text:?}");
                    }
                    Ok(())
                })
        })
        .state(Mode::Saved, |s| {
            s.permit(Action::Edit, Mode::Editing)
                .permit(Action::Close, Mode::Viewing)
        })
        .state(Mode::Empty, |s| s.permit(Action::Edit, Mode::Editing))
        .build()
        .unwrap();

    let mut editor = StateMachine::new(Mode::Viewing, Arc::new(config)).unwrap();

    println!("Setting text while viewing:");
    match editor.fire_with(&set_text, "draft".to_string()) {
        Ok(()) => println!("  accepted"),
        Err(error) => println!("  rejected: {error}"),
    }

    println!("\nEditing:");
    editor.fire(Action::Edit).unwrap();
    editor.fire_with(&set_text, "hello, world".to_string()).unwrap();

    let diagnostics = editor.diagnostics();
    println!(
        "  SetText(String) permitted: {}",
        diagnostics.can_handle_trigger_for::<String>(&Action::SetText)
    );
    println!(
        "  SetText(i32) permitted: {}",
        diagnostics.can_handle_trigger_for::<i32>(&Action::SetText)
    );
    let permitted: Vec<_> = diagnostics.current_permitted_triggers().collect();
    println!("  permitted now: {permitted:?}");

    editor.fire(Action::Save).unwrap();
    println!(
        "\nSaved {:?}, state {:?}",
        buffer.lock().unwrap(),
        editor.current_state()
    );

    println!("\nForcing Empty without hooks:");
    editor
        .move_to_state(Mode::Empty, TransitionOption::SkipHooks)
        .unwrap();
    println!("  state {:?}", editor.current_state());

    editor.stop();
    println!("\nStopped; Edit is now ignored:");
    editor.fire(Action::Edit).unwrap();
    println!(
        "  state {:?}, lifecycle {:?}",
        editor.current_state(),
        editor.lifecycle()
    );

    println!("\n=== Example Complete ===");
}
