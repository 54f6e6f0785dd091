//! A small cast of targets and the skirmish that exercises them.
//!
//! - `Player`: a receiver with private health; only reacts to `"Health"`
//! - `Zombie`, `Orc`, `Daemon`: records with a public `"Health"` field
//! - `Wall`: a record with `"Durability"` and no health at all
//!
//! `skirmish` broadcasts a fire effect and then a heal effect to the full
//! roster, which touches every dispatch path except the fatal one.

mod creatures;
mod skirmish;

pub use creatures::{Creature, Daemon, Orc, Player, Wall, Zombie, HEALTH};
pub use skirmish::{fire, heal, skirmish, Roster};
