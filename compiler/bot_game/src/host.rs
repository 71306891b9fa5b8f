//! Script commands bound to the acting unit.

use bot_eval::errors::{invalid_argument, type_mismatch};
use bot_eval::{CommandHost, EvalResult};
use bot_ir::{Command, Value};
use tracing::trace;

use crate::{Board, Feedback, Side, Unit, UnitId, SPAWN_DELAY};

/// The game side of a running script: every critical action and query
/// applies to `unit`.
pub struct UnitHost<'a> {
    board: &'a mut Board,
    unit: UnitId,
    feedback: &'a Feedback,
}

impl<'a> UnitHost<'a> {
    pub fn new(board: &'a mut Board, unit: UnitId, feedback: &'a Feedback) -> Self {
        UnitHost {
            board,
            unit,
            feedback,
        }
    }

    /// Run a critical action if the unit may still act this turn.
    ///
    /// A refused action returns `false`. So does an action that found
    /// nothing to do, but that one still uses up the turn's action.
    fn critical(&mut self, command: Command, args: &[Value]) -> EvalResult {
        let charge_turns = match (command, args) {
            (Command::ChargeAttack, [turns]) => charge_turns(*turns)?,
            _ => 0,
        };

        let Some(unit) = self.board.unit_mut(self.unit) else {
            return Ok(Value::Bool(false));
        };
        if !unit.try_act() {
            trace!(unit = unit.serial(), %command, "critical action refused");
            return Ok(Value::Bool(false));
        }
        let (serial, player) = (unit.serial(), unit.player());

        let took_effect = match command {
            Command::Attack => self.board.attack_adjacent_enemy(self.unit, 1).is_some(),
            Command::ChargeAttack if charge_turns == 0 => {
                self.board.attack_adjacent_enemy(self.unit, 1).is_some()
            }
            Command::ChargeAttack => self.update_unit(|u| u.begin_charge(charge_turns)),
            Command::Move => match self.board.move_unit(self.unit) {
                Some((from, to)) => {
                    self.feedback
                        .message(format_args!("Unit {serial} moved from {from} to {to}"));
                    true
                }
                None => false,
            },
            Command::Spawn => {
                self.update_unit(|u| u.set_spawn(SPAWN_DELAY));
                self.feedback.message(format_args!(
                    "Setting spawn for unit {serial} belonging to player {player} in {SPAWN_DELAY} turns"
                ));
                true
            }
            Command::Wait => {
                self.feedback
                    .message(format_args!("Unit {serial} has forfeited its turn"));
                true
            }
            Command::Defend => {
                self.feedback
                    .message(format_args!("Unit {serial} is defending"));
                self.update_unit(Unit::defend)
            }
            Command::Fortify => self.update_unit(Unit::fortify),
            _ => return Err(invalid_argument(command, "not a game action")),
        };
        Ok(Value::Bool(took_effect))
    }

    fn update_unit(&mut self, f: impl FnOnce(&mut Unit)) -> bool {
        match self.board.unit_mut(self.unit) {
            Some(unit) => {
                f(unit);
                true
            }
            None => false,
        }
    }

    fn query(&self, command: Command) -> EvalResult {
        let board = &*self.board;
        let Some(unit) = board.unit(self.unit) else {
            return Err(invalid_argument(command, "the acting unit is gone"));
        };
        let answer = match command {
            Command::GetUnitId => int(unit.serial()),
            Command::GetTurnNumber => int(unit.turn()),
            Command::NumAdjacentAllies => int(board.count_adjacent(self.unit, Side::Ally)),
            Command::NumAdjacentEnemies => int(board.count_adjacent(self.unit, Side::Enemy)),
            Command::NumTotalAllies => int(board.count_total(self.unit, Side::Ally)),
            Command::NumTotalEnemies => int(board.count_total(self.unit, Side::Enemy)),
            Command::DistanceFromClosestAlly => {
                int(board.distance_to_closest(self.unit, Side::Ally))
            }
            Command::DistanceFromClosestEnemy => {
                int(board.distance_to_closest(self.unit, Side::Enemy))
            }
            Command::GetUnitLimit => int(board.unit_limit()),
            _ => return Err(invalid_argument(command, "not a game query")),
        };
        Ok(answer)
    }
}

impl CommandHost for UnitHost<'_> {
    fn execute(&mut self, command: Command, args: &[Value]) -> EvalResult {
        if command.is_critical() {
            self.critical(command, args)
        } else {
            self.query(command)
        }
    }
}

/// Turns to charge for: a non-negative integer.
fn charge_turns(value: Value) -> Result<u32, bot_eval::EvalError> {
    let Value::Int(turns) = value else {
        return Err(type_mismatch(
            Command::ChargeAttack,
            "a non-negative integer",
            &value,
        ));
    };
    u32::try_from(turns).map_err(|_| {
        invalid_argument(
            Command::ChargeAttack,
            format!("cannot charge for {turns} turns"),
        )
    })
}

fn int<N: TryInto<i64>>(n: N) -> Value {
    Value::Int(n.try_into().unwrap_or(i64::MAX))
}
