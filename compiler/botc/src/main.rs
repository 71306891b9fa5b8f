//! `botbattle` - play scripted bot battles from the command line.

use std::process::ExitCode;

use botc::commands::{check_scripts, parse_run_options, print_usage, run_scripts};

fn main() -> ExitCode {
    botc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    match command.as_str() {
        "run" => {
            let options = match parse_run_options(&args[2..]) {
                Ok(options) => options,
                Err(err) => {
                    eprintln!("error: {err}");
                    eprintln!("Run `botbattle help` for the list of options.");
                    return ExitCode::FAILURE;
                }
            };
            if options.scripts.len() < 2 {
                eprintln!("Usage: botbattle run <script> <script>... [options]");
                eprintln!();
                eprintln!("A game needs at least two scripts, one per player.");
                return ExitCode::FAILURE;
            }
            run_scripts(&options)
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: botbattle check <script>...");
                return ExitCode::FAILURE;
            }
            check_scripts(&args[2..])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("botbattle {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}
