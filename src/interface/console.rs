//! Terminal implementations of the display and input seams.
//!
//! This is the host-program surface: a line-oriented prompt loop over
//! stdin/stdout. All parsing errors are returned to the engine, which
//! re-prompts; nothing here loops or exits.

use std::io::{self, BufRead, Write};

use super::{parse_action, BattleView, DisplaySink, InputSource, PlayerAction, TurnPrompt};
use crate::core::BattleError;

const SEPARATOR: &str = "------------------------------";

/// Display sink that prints battle state to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleDisplay;

impl DisplaySink for ConsoleDisplay {
    fn render(&mut self, view: &BattleView) {
        println!("\n{SEPARATOR}");
        println!("Round {}", view.round);
        for actor in &view.players {
            println!(
                "{}  HP {}/{}  DEF {}",
                actor.name, actor.health, actor.max_health, actor.defense
            );
        }
        for actor in &view.enemies {
            let intent = actor.intent.as_deref().unwrap_or("unknown");
            println!(
                "{}  HP {}/{}  DEF {}  intent: {}",
                actor.name, actor.health, actor.max_health, actor.defense, intent
            );
        }
    }

    fn note(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Input source that prompts on stdout and reads lines from stdin.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleInput;

impl InputSource for ConsoleInput {
    fn decide(&mut self, prompt: &TurnPrompt) -> Result<PlayerAction, BattleError> {
        print_prompt(prompt);

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            // EOF or a broken pipe ends the turn; the battle still runs to
            // a terminal state.
            Ok(0) | Err(_) => Ok(PlayerAction::EndTurn),
            Ok(_) => parse_action(&line),
        }
    }
}

fn print_prompt(prompt: &TurnPrompt) {
    println!("\n{}'s hand:", prompt.actor);
    for (i, card) in prompt.hand.iter().enumerate() {
        println!("{}. {} (AP: {}) - {}", i + 1, card.name, card.cost, card.info);
    }
    if prompt.enemies.len() > 1 {
        let targets: Vec<String> = prompt
            .enemies
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{}. {}", i + 1, name))
            .collect();
        println!("Targets: {}", targets.join("  "));
    }
    println!("Action points: {}", prompt.action_points);
    print!("Play a card by number ('<card> <target>' to pick a target) or 'end' to end your turn: ");
    let _ = io::stdout().flush();
}
