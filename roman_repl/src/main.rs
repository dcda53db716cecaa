use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use rustyline::Editor;

use repl::{evaluate, print_result, read};

mod display;
mod repl;

const HISTORY_PATH: &str = ".roman_calc_history";

#[derive(Parser, Debug)]
#[clap(
    name = "roman_calc",
    version,
    about = "Calculates `a op b` for arabic (0..10) or roman (I..XXX) operands"
)]
struct Cli {
    #[clap(help = "Expressions to calculate instead of starting the interactive prompt")]
    expressions: Vec<String>,

    #[clap(long, default_value = HISTORY_PATH, help = "Line editor history file")]
    history: PathBuf,

    #[clap(long, help = "Do not load or save the history file")]
    no_history: bool,

    #[clap(long, help = "Exit with status 1 on the first line that cannot be calculated")]
    halt_on_error: bool,

    #[clap(long, help = "Disable colored output")]
    no_color: bool,

    #[clap(long, short, default_value = "warn")]
    log_level: String,
}

fn run_expressions(cli: &Cli) -> i32 {
    let mut status = 0;

    for input in &cli.expressions {
        match evaluate(input) {
            Ok(result) => print_result(&result),
            Err(err) => {
                println!("{}", err);
                status = 1;
                if cli.halt_on_error {
                    break;
                }
            }
        }
    }

    status
}

fn run_repl(cli: &Cli) -> i32 {
    let config = rustyline::Config::builder()
        .auto_add_history(true)
        .color_mode(if cli.no_color {
            rustyline::ColorMode::Disabled
        } else {
            rustyline::ColorMode::Enabled
        })
        .build();

    let mut rl = match Editor::<()>::with_config(config) {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("Could not initialize the line editor: {err}");
            return 1;
        }
    };

    if !cli.no_history {
        if let Err(err) = rl.load_history(&cli.history) {
            log::debug!("history not loaded from {}: {err}", cli.history.display());
        }
    }

    let mut status = 0;

    loop {
        let input = match read(&mut rl) {
            Ok(input) => input,
            Err(err) => {
                println!("{}", err);
                break;
            }
        };

        if input.trim().is_empty() {
            continue;
        }

        match evaluate(&input) {
            Ok(result) => print_result(&result),
            Err(err) => {
                println!("{}", err);
                if cli.halt_on_error {
                    status = 1;
                    break;
                }
            }
        }
    }

    if !cli.no_history {
        if let Err(err) = rl.save_history(&cli.history) {
            log::warn!("history not saved to {}: {err}", cli.history.display());
        }
    }

    status
}

fn main() {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let status = if cli.expressions.is_empty() {
        run_repl(&cli)
    } else {
        run_expressions(&cli)
    };

    std::process::exit(status);
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{run_expressions, Cli, HISTORY_PATH};

    #[test]
    fn test_default_options() {
        let cli = Cli::parse_from(["roman_calc"]);
        assert!(cli.expressions.is_empty());
        assert_eq!(cli.history.to_str(), Some(HISTORY_PATH));
        assert!(!cli.halt_on_error);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_expression_arguments() {
        let cli = Cli::parse_from(["roman_calc", "--no-color", "X + V", "2 * 3"]);
        assert_eq!(cli.expressions, vec!["X + V", "2 * 3"]);
        assert_eq!(run_expressions(&cli), 0);

        let cli = Cli::parse_from(["roman_calc", "--halt-on-error", "1 / 0", "2 * 3"]);
        assert_eq!(run_expressions(&cli), 1);
    }
}
