//! Round-robin turn queue.
//!
//! The queue holds every live unit exactly once; the front is the unit
//! whose turn it is. New units join at the back, so they act after every
//! existing unit and before their spawner acts again.

use std::collections::VecDeque;

use tracing::trace;

use crate::UnitId;

#[derive(Clone, Debug, Default)]
pub struct TurnScheduler {
    queue: VecDeque<UnitId>,
    turn_number: u64,
    /// The unit that started the turn in progress.
    acting: Option<UnitId>,
}

impl TurnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns started so far, across all units.
    #[inline]
    pub fn turn_number(&self) -> u64 {
        self.turn_number
    }

    /// The unit at the front of the queue.
    #[inline]
    pub fn current(&self) -> Option<UnitId> {
        self.queue.front().copied()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn contains(&self, unit: UnitId) -> bool {
        self.queue.contains(&unit)
    }

    /// Queue order, current unit first.
    pub fn iter(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.queue.iter().copied()
    }

    /// Begin the next turn and return the acting unit.
    pub fn start_turn(&mut self) -> Option<UnitId> {
        let unit = self.current()?;
        self.turn_number += 1;
        self.acting = Some(unit);
        trace!(turn = self.turn_number, "turn started");
        Some(unit)
    }

    /// Send the acting unit to the back of the queue.
    ///
    /// If the acting unit left the queue during its turn, the queue is
    /// left as is: the next unit is already at the front.
    pub fn end_turn(&mut self) {
        if let Some(acting) = self.acting.take() {
            if self.current() == Some(acting) {
                self.queue.rotate_left(1);
            }
        }
    }

    /// Add a new unit at the back. Units already queued are ignored.
    pub fn enqueue(&mut self, unit: UnitId) {
        if !self.contains(unit) {
            self.queue.push_back(unit);
        }
    }

    /// Remove a unit, keeping everyone else's order.
    pub fn dequeue(&mut self, unit: UnitId) -> bool {
        match self.queue.iter().position(|&queued| queued == unit) {
            Some(pos) => {
                self.queue.remove(pos);
                true
            }
            None => false,
        }
    }
}
