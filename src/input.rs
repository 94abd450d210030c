//! Line-oriented command parser for the terminal front end.
//!
//! Parsing never fails: anything unrecognised becomes [`Command::Unknown`] and
//! is reported back to the learner as a notice.

use crate::game::{Action, Guess, NumberInput};

pub const HELP: &str = "\
commands:
  dividend <n|+|->      set the number of apples (1-99)
  divisor <n|+|->       set the number of baskets (1-9)
  distribute, d, <enter> give every basket one apple
  check <q> <r>         guess the quotient and remainder
  restart, r            put every apple back in the pile
  help, ?               show this text
  quit, q               leave";

/// One parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Action),
    Help,
    Quit,
    Unknown(String),
}

fn number_input(arg: Option<&str>) -> NumberInput {
    match arg {
        Some("+") => NumberInput::Increment,
        Some("-") => NumberInput::Decrement,
        Some(text) => NumberInput::Text(text.to_string()),
        None => NumberInput::Text(String::new()),
    }
}

/// Parse a single line.
///
/// ```rust
/// use divvy::game::{Action, Guess};
/// use divvy::input::{parse_command, Command};
///
/// assert_eq!(parse_command("d"), Command::Play(Action::Distribute));
/// assert_eq!(
///     parse_command("check 4 2"),
///     Command::Play(Action::CheckAnswer(Guess::new(4, 2)))
/// );
/// ```
pub fn parse_command(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Command::Play(Action::Distribute);
    };

    match head.to_ascii_lowercase().as_str() {
        "dividend" | "apples" => Command::Play(Action::SetDividend(number_input(words.next()))),
        "divisor" | "baskets" => Command::Play(Action::SetDivisor(number_input(words.next()))),
        "distribute" | "d" => Command::Play(Action::Distribute),
        "check" | "guess" | "c" => {
            let quotient = words.next().unwrap_or_default();
            let remainder = words.next().unwrap_or_default();
            Command::Play(Action::CheckAnswer(Guess::parse(quotient, remainder)))
        }
        "restart" | "reset" | "r" => Command::Play(Action::Reset),
        "help" | "?" | "h" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(line.trim().to_string()),
    }
}
