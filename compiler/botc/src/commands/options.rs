//! `botbattle run` option parsing.

use bot_game::{ErrorPolicy, GameConfig};

#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Script paths, one per player, in player order.
    pub scripts: Vec<String>,
    pub config: GameConfig,
}

/// Parse the arguments following `run`.
///
/// Options take the `--name=value` form and may appear anywhere; every
/// other argument is a script path.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, String> {
    let mut options = RunOptions::default();

    for arg in args {
        if let Some(seed) = arg.strip_prefix("--seed=") {
            options.config.seed = Some(parse_number(seed, "seed")?);
        } else if let Some(size) = arg.strip_prefix("--board=") {
            let (width, height) = parse_board(size)?;
            options.config.width = width;
            options.config.height = height;
        } else if let Some(limit) = arg.strip_prefix("--turn-limit=") {
            options.config.turn_limit = parse_number(limit, "turn limit")?;
        } else if let Some(pct) = arg.strip_prefix("--unit-limit=") {
            options.config.unit_limit_pct = parse_fraction(pct)?;
        } else if arg == "--quiet" || arg == "-q" {
            options.config.display_messages = false;
            options.config.display_board = false;
        } else if arg == "--no-board" {
            options.config.display_board = false;
        } else if arg == "--strict" {
            options.config.error_policy = ErrorPolicy::Abort;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else {
            options.scripts.push(arg.clone());
        }
    }

    Ok(options)
}

fn parse_number<T: std::str::FromStr>(text: &str, what: &str) -> Result<T, String> {
    text.parse()
        .map_err(|_| format!("invalid {what} '{text}', expected a non-negative integer"))
}

/// `WxH`, e.g. `20x20`.
fn parse_board(text: &str) -> Result<(usize, usize), String> {
    let invalid = || format!("invalid board size '{text}', expected WIDTHxHEIGHT");
    let (width, height) = text.split_once(['x', 'X']).ok_or_else(invalid)?;
    Ok((
        width.parse().map_err(|_| invalid())?,
        height.parse().map_err(|_| invalid())?,
    ))
}

/// A fraction (`0.05`) or a percentage (`5%`).
fn parse_fraction(text: &str) -> Result<f64, String> {
    let invalid = || format!("invalid unit limit '{text}', expected a fraction like 0.05 or 5%");
    match text.strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().map(|p| p / 100.0).map_err(|_| invalid()),
        None => text.parse().map_err(|_| invalid()),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn defaults() {
        let options = parse_run_options(&args(&["a.bot", "b.bot"])).unwrap();
        assert_eq!(options.scripts, ["a.bot", "b.bot"]);
        assert_eq!(options.config.width, 20);
        assert_eq!(options.config.turn_limit, 10_000);
        assert!(options.config.display_messages);
        assert_eq!(options.config.seed, None);
        assert_eq!(options.config.error_policy, ErrorPolicy::Continue);
    }

    #[test]
    fn every_option() {
        let options = parse_run_options(&args(&[
            "--seed=7",
            "a.bot",
            "--board=12x8",
            "--turn-limit=500",
            "--unit-limit=10%",
            "--no-board",
            "--strict",
            "b.bot",
        ]))
        .unwrap();
        assert_eq!(options.scripts, ["a.bot", "b.bot"]);
        assert_eq!(options.config.seed, Some(7));
        assert_eq!((options.config.width, options.config.height), (12, 8));
        assert_eq!(options.config.turn_limit, 500);
        assert!((options.config.unit_limit_pct - 0.1).abs() < 1e-12);
        assert!(options.config.display_messages);
        assert!(!options.config.display_board);
        assert_eq!(options.config.error_policy, ErrorPolicy::Abort);
    }

    #[test]
    fn quiet_hides_messages_and_board() {
        let options = parse_run_options(&args(&["--quiet", "--unit-limit=0.25"])).unwrap();
        assert!(!options.config.display_messages);
        assert!(!options.config.display_board);
        assert!((options.config.unit_limit_pct - 0.25).abs() < 1e-12);
    }

    #[test]
    fn bad_values() {
        for bad in [
            "--seed=-1",
            "--board=20",
            "--board=axb",
            "--turn-limit=lots",
            "--unit-limit=half",
            "--verbose",
        ] {
            assert!(parse_run_options(&args(&[bad])).is_err(), "accepted {bad}");
        }
    }
}
