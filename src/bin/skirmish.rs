//! Demo host: a fixed one-on-one roster on the console.
//!
//! Run with `RUST_LOG=deck_battle=debug` to watch the engine's tracing
//! output alongside the battle display.

use deck_battle::cards::catalog::standard;
use deck_battle::{
    Actor, ActorProfile, Battle, BattleError, BattleRng, ConsoleDisplay, ConsoleInput, Relic,
    SpecialMove,
};

fn main() -> Result<(), BattleError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut hero = Actor::new(
        "Player",
        ActorProfile::player(30),
        vec![
            standard::strike(),
            standard::heavy_strike(),
            standard::guard(),
            standard::iron_guard(),
            standard::foresight(),
        ],
    );
    hero.attach_relic(Relic::warriors_pendant());

    let gremlin = Actor::new(
        "Diamond Gremlin",
        ActorProfile::enemy(20).with_special(SpecialMove::Distract),
        vec![
            standard::claw(),
            standard::claw(),
            standard::claw(),
            standard::hunker(),
        ],
    );

    let mut battle = Battle::new(vec![hero], vec![gremlin], BattleRng::from_entropy())?;
    battle.run(&mut ConsoleInput, &mut ConsoleDisplay);

    Ok(())
}
