//! The skirmish scenario.

use crate::dispatch::{Dispatcher, OutcomeSink, Outcomes};
use crate::effects::Effect;
use crate::targets::Target;

use super::{Creature, Daemon, Orc, Player, Wall, Zombie, HEALTH};

/// Fire: 50 damage to health.
pub fn fire() -> Effect {
    Effect::damage("fire", HEALTH, 50)
}

/// Heal: 190 health, with no upper bound.
pub fn heal() -> Effect {
    Effect::heal("heal", HEALTH, 190)
}

/// An ordered group of creatures that outlives any single effect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    creatures: Vec<Creature>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard skirmish lineup: two zombies, three orcs, two daemons
    /// and a wall, followed by the player.
    pub fn skirmish() -> Self {
        let mut roster = Self::new();
        for _ in 0..2 {
            roster.push(Creature::Zombie(Zombie { health: 1000 }));
        }
        for _ in 0..3 {
            roster.push(Creature::Orc(Orc { health: 500 }));
        }
        for _ in 0..2 {
            roster.push(Creature::Daemon(Daemon { health: 1000 }));
        }
        roster.push(Creature::Wall(Wall { durability: 100 }));
        roster.push(Creature::Player(Player::new("Player_1", 100)));
        roster
    }

    /// Add a creature at the end.
    pub fn push(&mut self, creature: Creature) {
        self.creatures.push(creature);
    }

    /// Creatures in order.
    #[must_use]
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// The first player in the roster.
    #[must_use]
    pub fn player(&self) -> Option<&Player> {
        self.creatures.iter().find_map(|c| match c {
            Creature::Player(p) => Some(p),
            _ => None,
        })
    }

    /// Borrow every creature as a target, in roster order.
    pub fn targets(&mut self) -> Vec<Target<'_>> {
        self.creatures.iter_mut().map(Creature::as_target).collect()
    }

    /// Broadcast one effect to the whole roster.
    pub fn cast<S: OutcomeSink>(&mut self, dispatcher: &mut Dispatcher<S>, effect: &Effect) -> Outcomes {
        let mut targets = self.targets();
        dispatcher.apply_all(effect, &mut targets)
    }

    /// Number of creatures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Check if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

/// Run the skirmish: fire, then heal, across the standard lineup.
pub fn skirmish<S: OutcomeSink>(dispatcher: &mut Dispatcher<S>) -> Roster {
    let mut roster = Roster::skirmish();
    for effect in [fire(), heal()] {
        roster.cast(dispatcher, &effect);
    }
    roster
}
