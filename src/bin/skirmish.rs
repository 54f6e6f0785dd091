//! Run the skirmish scenario and print the surviving player.
//!
//! Log output is controlled with `RUST_LOG` (default `info`).

use rust_spellcast::bestiary::skirmish;
use rust_spellcast::Dispatcher;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut dispatcher: Dispatcher = Dispatcher::default();
    let roster = skirmish(&mut dispatcher);

    if let Some(player) = roster.player() {
        println!("{player}");
    }
}
