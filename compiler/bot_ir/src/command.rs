//! The closed set of script commands.
//!
//! Each command has a fixed script name and arity. The evaluator verifies
//! calls against this table at compile time, so an unknown name or a wrong
//! argument count never reaches a running game.

use std::fmt;

/// How a command's arguments are evaluated and what it may touch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Evaluator special forms: control which arguments run and how.
    Special,
    /// Arithmetic, comparison and output over resolved values.
    Pure,
    /// Game action limited to once per unit per turn.
    Critical,
    /// Read-only question about the board or the acting unit.
    Query,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    // Special forms
    Define,
    IfElse,
    And,
    Or,

    // Arithmetic and general
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Gt,
    Gqt,
    Lt,
    Lqt,
    Neg,
    Print,

    // Critical actions
    Attack,
    ChargeAttack,
    Move,
    Spawn,
    Wait,
    Defend,
    Fortify,

    // Queries
    GetUnitId,
    GetTurnNumber,
    NumAdjacentAllies,
    NumAdjacentEnemies,
    NumTotalAllies,
    NumTotalEnemies,
    DistanceFromClosestAlly,
    DistanceFromClosestEnemy,
    GetUnitLimit,
}

impl Command {
    /// Every command, in registry order.
    pub const ALL: [Command; 31] = [
        Command::Define,
        Command::IfElse,
        Command::And,
        Command::Or,
        Command::Add,
        Command::Sub,
        Command::Mul,
        Command::Div,
        Command::Eq,
        Command::Gt,
        Command::Gqt,
        Command::Lt,
        Command::Lqt,
        Command::Neg,
        Command::Print,
        Command::Attack,
        Command::ChargeAttack,
        Command::Move,
        Command::Spawn,
        Command::Wait,
        Command::Defend,
        Command::Fortify,
        Command::GetUnitId,
        Command::GetTurnNumber,
        Command::NumAdjacentAllies,
        Command::NumAdjacentEnemies,
        Command::NumTotalAllies,
        Command::NumTotalEnemies,
        Command::DistanceFromClosestAlly,
        Command::DistanceFromClosestEnemy,
        Command::GetUnitLimit,
    ];

    /// The name scripts use to call this command.
    pub const fn name(self) -> &'static str {
        match self {
            Command::Define => "define",
            Command::IfElse => "if_else",
            Command::And => "and",
            Command::Or => "or",
            Command::Add => "add",
            Command::Sub => "sub",
            Command::Mul => "mul",
            Command::Div => "div",
            Command::Eq => "eq",
            Command::Gt => "gt",
            Command::Gqt => "gqt",
            Command::Lt => "lt",
            Command::Lqt => "lqt",
            Command::Neg => "neg",
            Command::Print => "prnt",
            Command::Attack => "attack",
            Command::ChargeAttack => "charge_attack",
            Command::Move => "move",
            Command::Spawn => "spawn",
            Command::Wait => "wait",
            Command::Defend => "defend",
            Command::Fortify => "fortify",
            Command::GetUnitId => "get_unit_id",
            Command::GetTurnNumber => "get_turn_number",
            Command::NumAdjacentAllies => "num_adjacent_allies",
            Command::NumAdjacentEnemies => "num_adjacent_enemies",
            Command::NumTotalAllies => "num_total_allies",
            Command::NumTotalEnemies => "num_total_enemies",
            Command::DistanceFromClosestAlly => "distance_from_closest_ally",
            Command::DistanceFromClosestEnemy => "distance_from_closest_enemy",
            Command::GetUnitLimit => "get_unit_limit",
        }
    }

    /// Number of arguments a call must supply.
    pub const fn arity(self) -> usize {
        match self {
            Command::IfElse => 3,
            Command::Define
            | Command::And
            | Command::Or
            | Command::Add
            | Command::Sub
            | Command::Mul
            | Command::Div
            | Command::Eq
            | Command::Gt
            | Command::Gqt
            | Command::Lt
            | Command::Lqt => 2,
            Command::Neg | Command::Print | Command::ChargeAttack => 1,
            Command::Attack
            | Command::Move
            | Command::Spawn
            | Command::Wait
            | Command::Defend
            | Command::Fortify
            | Command::GetUnitId
            | Command::GetTurnNumber
            | Command::NumAdjacentAllies
            | Command::NumAdjacentEnemies
            | Command::NumTotalAllies
            | Command::NumTotalEnemies
            | Command::DistanceFromClosestAlly
            | Command::DistanceFromClosestEnemy
            | Command::GetUnitLimit => 0,
        }
    }

    pub const fn kind(self) -> CommandKind {
        match self {
            Command::Define | Command::IfElse | Command::And | Command::Or => CommandKind::Special,
            Command::Add
            | Command::Sub
            | Command::Mul
            | Command::Div
            | Command::Eq
            | Command::Gt
            | Command::Gqt
            | Command::Lt
            | Command::Lqt
            | Command::Neg
            | Command::Print => CommandKind::Pure,
            Command::Attack
            | Command::ChargeAttack
            | Command::Move
            | Command::Spawn
            | Command::Wait
            | Command::Defend
            | Command::Fortify => CommandKind::Critical,
            Command::GetUnitId
            | Command::GetTurnNumber
            | Command::NumAdjacentAllies
            | Command::NumAdjacentEnemies
            | Command::NumTotalAllies
            | Command::NumTotalEnemies
            | Command::DistanceFromClosestAlly
            | Command::DistanceFromClosestEnemy
            | Command::GetUnitLimit => CommandKind::Query,
        }
    }

    #[inline]
    pub const fn is_critical(self) -> bool {
        matches!(self.kind(), CommandKind::Critical)
    }

    /// Whether the game (rather than the evaluator) implements this command.
    #[inline]
    pub const fn is_game_command(self) -> bool {
        matches!(self.kind(), CommandKind::Critical | CommandKind::Query)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
