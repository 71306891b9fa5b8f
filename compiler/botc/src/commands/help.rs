//! Usage text.

use bot_eval::registry::IF;
use bot_ir::Command;

/// Call signature of every script command, `if` included.
pub fn script_commands() -> Vec<String> {
    const PARAMS: [&str; 3] = ["a", "b", "c"];

    let signature = |name: &str, arity: usize| format!("{name}({})", PARAMS[..arity].join(", "));
    Command::ALL
        .iter()
        .map(|command| signature(command.name(), command.arity()))
        .chain(std::iter::once(signature(IF, Command::IfElse.arity() - 1)))
        .collect()
}

pub fn print_usage() {
    println!("Bot Battle - scripted units fighting on a wrapping grid");
    println!();
    println!("Usage: botbattle <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <script>...      Play a game, one script per player");
    println!("  check <script>...    Compile scripts and report problems");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --seed=<n>           Seed for every random choice");
    println!("  --board=<w>x<h>      Board size (default: 20x20, minimum 3x3)");
    println!("  --turn-limit=<n>     Turns before the game is called (default: 10000)");
    println!("  --unit-limit=<pct>   Units per player as a share of the board (default: 0.05)");
    println!("  --no-board           Do not print the board after each turn");
    println!("  --quiet, -q          Print only the final result");
    println!("  --strict             Stop the game on the first script runtime error");
    println!();
    println!("Script commands:");
    for signature in script_commands() {
        println!("  {signature}");
    }
    println!();
    println!("Logging:");
    println!("  Set BOT_LOG (or RUST_LOG) to a filter such as 'debug' or 'bot_game=trace'.");
    println!();
    println!("Examples:");
    println!("  botbattle run rusher.bot turtle.bot --seed=42");
    println!("  botbattle run a.bot b.bot c.bot --board=10x10 --quiet");
    println!("  botbattle check rusher.bot");
}
