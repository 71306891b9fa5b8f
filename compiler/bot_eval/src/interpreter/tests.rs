use super::*;
use crate::print_handler::buffer_handler;
use pretty_assertions::assert_eq;

/// Stand-in for the game: counts spawns and answers queries with fixed values.
#[derive(Default)]
struct FakeGame {
    spawns: usize,
    commands: Vec<Command>,
}

impl CommandHost for FakeGame {
    fn execute(&mut self, command: Command, _args: &[Value]) -> EvalResult {
        self.commands.push(command);
        match command {
            Command::Spawn => {
                self.spawns += 1;
                Ok(Value::Bool(true))
            }
            Command::GetTurnNumber => Ok(Value::Int(4)),
            Command::NumAdjacentEnemies => Ok(Value::Int(2)),
            _ => Ok(Value::Bool(true)),
        }
    }
}

struct Harness {
    interp: Interpreter,
    env: Environment,
    game: FakeGame,
}

impl Harness {
    fn new() -> Self {
        Harness {
            interp: Interpreter::new(SharedInterner::new()).with_print_handler(buffer_handler()),
            env: Environment::new(),
            game: FakeGame::default(),
        }
    }

    fn eval(&mut self, text: &str) -> Result<Option<Value>, EvalError> {
        let exe = self.interp.analyze(text).unwrap();
        self.interp.run(&exe, &mut self.env, &mut self.game)
    }

    fn value(&mut self, text: &str) -> Value {
        self.eval(text).unwrap().unwrap()
    }

    fn symbol(&self, name: &str) -> Value {
        Value::Symbol(self.interp.interner().intern(name))
    }

    fn variable(&self, name: &str) -> Option<Value> {
        self.env.lookup(self.interp.interner().intern(name))
    }
}

#[test]
fn primitives() {
    let mut h = Harness::new();
    assert_eq!(h.value("-3"), Value::Int(-3));
    assert_eq!(h.value("2.5"), Value::Float(2.5));
    // Bare symbols stay unresolved at top level.
    let test = h.symbol("test");
    assert_eq!(h.value("test"), test);
}

#[test]
fn empty_script_yields_nothing() {
    let mut h = Harness::new();
    assert_eq!(h.eval("  \n ").unwrap(), None);
}

#[test]
fn simple_command() {
    let mut h = Harness::new();
    assert_eq!(h.value("add(3, 2)"), Value::Int(5));
}

#[test]
fn statements_run_in_order_and_yield_the_last() {
    let mut h = Harness::new();
    assert_eq!(h.value("define(x, 2) add(x, 6)"), Value::Int(8));
}

#[test]
fn definitions_persist_between_runs() {
    let mut h = Harness::new();
    h.eval("define(y, -3) \n   define(z, -2)").unwrap();
    assert_eq!(h.value("mul(y, z)"), Value::Int(6));
}

#[test]
fn nested_calls_resolve_symbols() {
    let mut h = Harness::new();
    h.eval("define(x, 8)").unwrap();
    assert_eq!(h.value("add(x, -7)"), Value::Int(1));
    assert_eq!(h.value("mul(x, div(x, 2))"), Value::Int(32));
}

#[test]
fn define_resolves_its_value() {
    let mut h = Harness::new();
    h.eval("define(y, add(2, 5.5))").unwrap();
    assert_eq!(h.variable("y"), Some(Value::Float(7.5)));

    h.eval("define(w, y)").unwrap();
    assert_eq!(h.variable("w"), Some(Value::Float(7.5)));
}

#[test]
fn define_returns_true() {
    let mut h = Harness::new();
    assert_eq!(h.value("define(x, 1)"), Value::Bool(true));
}

#[test]
fn define_requires_a_symbol_name() {
    let mut h = Harness::new();
    assert_eq!(
        h.eval("define(5, 1)"),
        Err(EvalError::TypeMismatch {
            command: "define",
            expected: "a symbol name",
            got: "int",
        })
    );
}

#[test]
fn if_without_else_yields_zero() {
    let mut h = Harness::new();
    assert_eq!(h.value("if(gt(1, 3), add(1, 1))"), Value::Int(0));
    assert_eq!(h.value("if(gt(3, 1), add(1, 1))"), Value::Int(2));
}

#[test]
fn if_else_evaluates_one_branch() {
    let mut h = Harness::new();
    assert_eq!(h.value("if_else(1, 5, 7)"), Value::Int(5));
    assert_eq!(h.value("if_else(0, 5, gt(8, -2))"), Value::Bool(true));
    // The division never runs.
    assert_eq!(h.value("if_else(1, 5, div(1, 0))"), Value::Int(5));
    assert_eq!(h.value("if(0, spawn())"), Value::Int(0));
    assert_eq!(h.game.spawns, 0);
}

#[test]
fn if_branch_result_is_not_resolved() {
    let mut h = Harness::new();
    let x = h.symbol("x");
    assert_eq!(h.value("define(x, 4) if(1, x)"), x);
}

#[test]
fn and_or_short_circuit() {
    let mut h = Harness::new();
    assert_eq!(h.value("and(0, spawn())"), Value::Bool(false));
    assert_eq!(h.value("or(1, spawn())"), Value::Bool(true));
    assert_eq!(h.game.spawns, 0);

    assert_eq!(h.value("and(1, spawn())"), Value::Bool(true));
    assert_eq!(h.value("or(0, spawn())"), Value::Bool(true));
    assert_eq!(h.game.spawns, 2);
}

#[test]
fn and_or_return_bools() {
    let mut h = Harness::new();
    assert_eq!(h.value("and(3, 2.5)"), Value::Bool(true));
    assert_eq!(h.value("or(0, 0.0)"), Value::Bool(false));
}

#[test]
fn game_commands_reach_the_host() {
    let mut h = Harness::new();
    assert_eq!(h.value("add(get_turn_number(), num_adjacent_enemies())"), Value::Int(6));
    assert_eq!(
        h.game.commands,
        [Command::GetTurnNumber, Command::NumAdjacentEnemies]
    );
}

#[test]
fn undefined_symbol_is_a_runtime_error() {
    let mut h = Harness::new();
    assert_eq!(
        h.eval("add(q, 1)"),
        Err(EvalError::UndefinedSymbol {
            name: "q".to_owned()
        })
    );
}

#[test]
fn bindings_before_an_error_are_kept() {
    let mut h = Harness::new();
    assert_eq!(h.eval("define(a, 1) div(1, 0) define(b, 2)"), Err(EvalError::DivisionByZero));
    assert_eq!(h.variable("a"), Some(Value::Int(1)));
    assert_eq!(h.variable("b"), None);
}

#[test]
fn argument_with_several_statements_yields_the_last() {
    let mut h = Harness::new();
    assert_eq!(h.value("add(define(t, 3) t, 1)"), Value::Int(4));
}

#[test]
fn prnt_writes_to_the_print_handler() {
    let mut h = Harness::new();
    h.eval("define(x, 4) prnt(x) prnt(div(1, 4)) prnt(gt(1, 0))").unwrap();
    assert_eq!(h.interp.print_handler().get_output(), "4\n0.25\ntrue\n");
}

#[test]
fn executables_are_reusable() {
    let mut h = Harness::new();
    let exe = h
        .interp
        .analyze("define(n, add(n, 1)) n")
        .unwrap();
    h.eval("define(n, 0)").unwrap();
    for expected in 1..=3 {
        let result = h.interp.run(&exe, &mut h.env, &mut h.game).unwrap();
        assert_eq!(result, Some(h.symbol("n")));
        assert_eq!(h.variable("n"), Some(Value::Int(expected)));
    }
}

#[test]
fn syntax_errors() {
    let interp = Interpreter::new(SharedInterner::new());
    // Space between command and arguments.
    assert_eq!(interp.analyze("mul (2, 8)").unwrap_err().code, ErrorCode::E1001);
    // Missing parenthesis.
    assert_eq!(interp.analyze("mul(2, 8").unwrap_err().code, ErrorCode::E1001);
    assert_eq!(interp.analyze("add(1, mul(2, 8)").unwrap_err().code, ErrorCode::E1002);
    assert_eq!(interp.analyze("add(1)(2)").unwrap_err().code, ErrorCode::E1003);
    assert_eq!(interp.analyze("add(1, )").unwrap_err().code, ErrorCode::E1004);
    assert_eq!(interp.analyze("prnt(inf)").unwrap_err().code, ErrorCode::E1005);
    assert_eq!(interp.analyze("my_var").unwrap_err().code, ErrorCode::E1001);
}

#[test]
fn command_errors() {
    let interp = Interpreter::new(SharedInterner::new());

    let diag = interp.analyze("wait() atack()").unwrap_err();
    assert_eq!(diag.code, ErrorCode::E2001);
    assert_eq!(diag.suggestions, ["did you mean `attack`?"]);

    let diag = interp.analyze("if(1, 2, 3)").unwrap_err();
    assert_eq!(diag.code, ErrorCode::E2002);
    assert_eq!(diag.notes, ["in `if(1, 2, 3)`"]);

    // Nested calls are verified too.
    let diag = interp.analyze("prnt(add(1))").unwrap_err();
    assert_eq!(diag.code, ErrorCode::E2002);
}

#[test]
fn deeply_nested_scripts() {
    let depth = 2_000;
    let text = format!("{}0{}", "neg(".repeat(depth), ")".repeat(depth));
    let mut h = Harness::new();
    assert_eq!(h.value(&text), Value::Bool(false));
}

#[test]
fn empty_script_warning_is_a_warning() {
    let diag = empty_script_warning();
    assert_eq!(diag.code, ErrorCode::W1001);
    assert!(!diag.is_error());
}
