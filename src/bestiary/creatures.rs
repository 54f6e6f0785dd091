//! Creature types.

use std::fmt;

use crate::effects::Effect;
use crate::targets::{Field, FieldKind, Receiver, Record, Target};

/// Attribute name the player reacts to.
pub const HEALTH: &str = "Health";

/// The player character.
///
/// Health is private: effects reach it only through `Receiver`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    health: i64,
}

impl Player {
    pub fn new(name: impl Into<String>, health: i64) -> Self {
        Self {
            name: name.into(),
            health,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn health(&self) -> i64 {
        self.health
    }
}

impl Receiver for Player {
    fn receive(&mut self, effect: &Effect) {
        if effect.targets(HEALTH) {
            self.health = self.health.wrapping_add(effect.magnitude());
        }
    }

    fn receiver_name(&self) -> &str {
        &self.name
    }
}

// Viewed as a plain record, every player field is internal.
impl Record for Player {
    fn record_name(&self) -> &str {
        &self.name
    }

    fn field_mut(&mut self, name: &str) -> Option<Field<'_>> {
        match name {
            "name" => Some(Field::private(FieldKind::Text)),
            "health" => Some(Field::private(&mut self.health)),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (health {})", self.name, self.health)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zombie {
    pub health: i32,
}

impl Record for Zombie {
    fn record_name(&self) -> &str {
        "Zombie"
    }

    fn field_mut(&mut self, name: &str) -> Option<Field<'_>> {
        match name {
            HEALTH => Some(Field::public(&mut self.health)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Orc {
    pub health: i16,
}

impl Record for Orc {
    fn record_name(&self) -> &str {
        "Orc"
    }

    fn field_mut(&mut self, name: &str) -> Option<Field<'_>> {
        match name {
            HEALTH => Some(Field::public(&mut self.health)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Daemon {
    pub health: i64,
}

impl Record for Daemon {
    fn record_name(&self) -> &str {
        "Daemon"
    }

    fn field_mut(&mut self, name: &str) -> Option<Field<'_>> {
        match name {
            HEALTH => Some(Field::public(&mut self.health)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wall {
    pub durability: i32,
}

impl Record for Wall {
    fn record_name(&self) -> &str {
        "Wall"
    }

    fn field_mut(&mut self, name: &str) -> Option<Field<'_>> {
        match name {
            "Durability" => Some(Field::public(&mut self.durability)),
            _ => None,
        }
    }
}

/// Any member of a roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Creature {
    Player(Player),
    Zombie(Zombie),
    Orc(Orc),
    Daemon(Daemon),
    Wall(Wall),
}

impl Creature {
    /// Borrow this creature as a dispatch target.
    ///
    /// Players are offered as receivers; everything else as a record.
    pub fn as_target(&mut self) -> Target<'_> {
        match self {
            Creature::Player(p) => Target::receiver(p),
            Creature::Zombie(z) => Target::record(z),
            Creature::Orc(o) => Target::record(o),
            Creature::Daemon(d) => Target::record(d),
            Creature::Wall(w) => Target::record(w),
        }
    }

    /// Health, for creatures that have one.
    #[must_use]
    pub fn health(&self) -> Option<i64> {
        match self {
            Creature::Player(p) => Some(p.health()),
            Creature::Zombie(z) => Some(z.health.into()),
            Creature::Orc(o) => Some(o.health.into()),
            Creature::Daemon(d) => Some(d.health),
            Creature::Wall(_) => None,
        }
    }
}
