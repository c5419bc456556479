// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial focus navigation basics.
//!
//! Drive a focus session over a 3×3 button grid with one hidden cell, printing
//! focus notifications and the debug overlay's edges.
//!
//! Run:
//! - `cargo run -p understory_demos --example spatial_nav_basics`

use tracing_subscriber::filter::LevelFilter;
use understory_focus_session::{
    Activation, Direction, FocusChange, FocusHost, FocusItem, FocusSession, GraphOverlay,
    NavGraph, NavInput,
};

/// Prints every notification.
struct PrintHost;

impl FocusHost<&'static str> for PrintHost {
    fn focus_changed(&mut self, change: FocusChange<&'static str>) {
        match change.previous {
            Some(previous) => println!("  focus: {previous} -> {}", change.current),
            None => println!("  focus: {}", change.current),
        }
    }

    fn focus_lost(&mut self, id: &'static str) {
        println!("  focus lost: {id}");
    }

    fn activation(&mut self, id: &'static str, activation: Activation) {
        println!("  {id}: {activation:?}");
    }
}

/// Prints the graph as a list of arrows.
struct PrintOverlay;

impl GraphOverlay<&'static str> for PrintOverlay {
    fn clear(&mut self) {
        println!("  [overlay cleared]");
    }

    fn draw(&mut self, graph: &NavGraph<&'static str>) {
        for (from, direction, to) in graph.edges() {
            println!("  [overlay] {from} --{direction:?}--> {to}");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_target(false)
        .init();

    // ┌────┬────┬────┐
    // │ a1 │ a2 │ a3 │
    // ├────┼────┼────┤
    // │ b1 │(b2)│ b3 │   b2 is hidden
    // ├────┼────┼────┤
    // │ c1 │ c2 │ c3 │
    // └────┴────┴────┘
    let names = [["a1", "a2", "a3"], ["b1", "b2", "b3"], ["c1", "c2", "c3"]];
    let mut session = FocusSession::new(PrintHost, PrintOverlay);
    for (row, line) in names.iter().enumerate() {
        for (col, &name) in line.iter().enumerate() {
            let mut item = FocusItem::from_origin_size(
                name,
                col as f64 * 100.0,
                row as f64 * 60.0,
                90.0,
                50.0,
            );
            item.visible = name != "b2";
            session.register(item);
        }
    }

    println!("Start focus at a1");
    session.set_focus("a1");

    for input in [
        NavInput::Move(Direction::Right), // a1 -> a2
        NavInput::Move(Direction::Down),  // b2 is hidden; the nearest open cell below wins
        NavInput::Move(Direction::Left),
        NavInput::Move(Direction::Up),
        NavInput::Activate(Activation::Pressed),
        NavInput::Activate(Activation::Released),
    ] {
        println!("{input:?}");
        if !session.handle(input) {
            println!("  (nothing happened)");
        }
    }

    println!("Debug overlay on");
    session.set_debug(true);
    println!("Move right with overlay on");
    session.move_focus(Direction::Right);
    println!("Debug overlay off");
    session.set_debug(false);

    session.blur();
    println!("Final focus: {:?}", session.focused());
}
