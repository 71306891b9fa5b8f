//! Players and the units they own.

use std::fmt;

use crate::UnitId;

/// 1-based player number, in script order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u32);

impl PlayerId {
    /// # Panics
    /// Panics if `id` is 0.
    pub const fn new(id: u32) -> Self {
        assert!(id > 0, "player ids start at 1");
        PlayerId(id)
    }

    /// Id of the player whose script is at `index`, if it fits.
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok()?.checked_add(1).map(PlayerId)
    }

    /// Position of this player's script.
    #[inline]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    /// Live units, in spawn order.
    units: Vec<UnitId>,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Player {
            id,
            units: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn units(&self) -> &[UnitId] {
        &self.units
    }

    #[inline]
    pub fn num_units(&self) -> usize {
        self.units.len()
    }

    pub(crate) fn add_unit(&mut self, unit: UnitId) {
        self.units.push(unit);
    }

    pub(crate) fn remove_unit(&mut self, unit: UnitId) -> bool {
        match self.units.iter().position(|&owned| owned == unit) {
            Some(pos) => {
                self.units.remove(pos);
                true
            }
            None => false,
        }
    }
}
