//! Interactive explorer
//!
//! A line-oriented shell over a single [`PuzzleState`]. Each command is
//! parsed into an [`ExploreCommand`] and applied to the current snapshot,
//! producing either a replacement snapshot or a request the loop answers
//! (cheat pairs, share token, help, quit).

use crate::core::{LetterStatus, ParseSortOrderError, ParseStatusError, SortOrder, WordStore};
use crate::output::display::{
    print_cheat_pairs, print_explore_help, print_explore_state, print_share_token,
};
use crate::solver::Solver;
use crate::state::{
    self, PuzzleState, calculate_groups, canonical_groups, group_of, join_groups, move_letter,
};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// One parsed explorer command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreCommand {
    /// Advance each letter one step through the status cycle
    Cycle(String),
    Set(char, LetterStatus),
    /// Move a letter to a 0-based group index, or to a new group
    Move { letter: char, to: Option<usize> },
    Regroup,
    Groups(String),
    Sort(SortOrder),
    Cheat,
    Share,
    Load(String),
    Reset,
    Help,
    Quit,
}

/// Error parsing an explorer input line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("empty input")]
    Empty,

    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a letter")]
    NotALetter(String),

    #[error("invalid group '{0}' (expected a number from 1, or 'new')")]
    GroupNumber(String),

    #[error(transparent)]
    Status(#[from] ParseStatusError),

    #[error(transparent)]
    Sort(#[from] ParseSortOrderError),
}

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the current snapshot
    Update(PuzzleState),
    Cheat,
    Share,
    Help,
    Quit,
}

fn single_letter(arg: &str) -> Result<char, ParseCommandError> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => Ok(letter.to_ascii_lowercase()),
        _ => Err(ParseCommandError::NotALetter(arg.to_string())),
    }
}

fn letters(arg: &str) -> Result<String, ParseCommandError> {
    if arg.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(arg.to_ascii_lowercase())
    } else {
        Err(ParseCommandError::NotALetter(arg.to_string()))
    }
}

/// Parse one input line
///
/// A bare run of letters is shorthand for `cycle`. Group numbers are 1-based
/// on input and 0-based in the returned command.
///
/// # Errors
///
/// Returns a [`ParseCommandError`] describing the first problem found.
///
/// # Examples
/// ```
/// use letter_boxed::commands::explore::{ExploreCommand, parse_command};
///
/// assert_eq!(parse_command("abc"), Ok(ExploreCommand::Cycle("abc".into())));
/// assert_eq!(
///     parse_command("move a 2"),
///     Ok(ExploreCommand::Move { letter: 'a', to: Some(1) })
/// );
/// ```
pub fn parse_command(line: &str) -> Result<ExploreCommand, ParseCommandError> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err(ParseCommandError::Empty);
    };
    let args: Vec<&str> = parts.collect();

    let command = match (head.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("quit" | "exit", []) => ExploreCommand::Quit,
        ("help" | "?", []) => ExploreCommand::Help,
        ("reset", []) => ExploreCommand::Reset,
        ("regroup", []) => ExploreCommand::Regroup,
        ("cheat", []) => ExploreCommand::Cheat,
        ("share", []) => ExploreCommand::Share,
        ("groups", []) => ExploreCommand::Groups(String::new()),
        ("groups", [groups]) => {
            if let Some(bad) = groups.chars().find(|&c| c != ',' && !c.is_ascii_alphabetic()) {
                return Err(ParseCommandError::NotALetter(bad.to_string()));
            }
            ExploreCommand::Groups(groups.to_ascii_lowercase())
        }
        ("groups", _) => return Err(ParseCommandError::Usage("groups [abc,def,...]")),
        ("sort", [order]) => ExploreCommand::Sort(order.parse()?),
        ("sort", _) => return Err(ParseCommandError::Usage("sort <order>")),
        ("load", [token]) => ExploreCommand::Load((*token).to_string()),
        ("load", _) => return Err(ParseCommandError::Usage("load <token>")),
        ("cycle", [arg]) => ExploreCommand::Cycle(letters(arg)?),
        ("cycle", _) => return Err(ParseCommandError::Usage("cycle <letters>")),
        ("set", [letter, status]) => ExploreCommand::Set(single_letter(letter)?, status.parse()?),
        ("set", _) => return Err(ParseCommandError::Usage("set <letter> <status>")),
        ("move", [letter, target]) => {
            let letter = single_letter(letter)?;
            let to = if target.eq_ignore_ascii_case("new") {
                None
            } else {
                match target.parse::<usize>() {
                    Ok(n) if n >= 1 => Some(n - 1),
                    _ => return Err(ParseCommandError::GroupNumber((*target).to_string())),
                }
            };
            ExploreCommand::Move { letter, to }
        }
        ("move", _) => return Err(ParseCommandError::Usage("move <letter> <group#|new>")),
        (word, []) if word.chars().all(|c| c.is_ascii_alphabetic()) => {
            ExploreCommand::Cycle(word.to_string())
        }
        _ => return Err(ParseCommandError::Unknown(head.to_string())),
    };

    Ok(command)
}

/// Apply `command` to `current`
///
/// State-changing commands yield [`Action::Update`] with the replacement
/// snapshot; `current` itself is never modified.
#[must_use]
pub fn apply(current: &PuzzleState, command: &ExploreCommand) -> Action {
    match command {
        ExploreCommand::Cycle(letters) => {
            let statuses = letters
                .chars()
                .fold(current.statuses, |statuses, letter| statuses.cycle(letter));
            Action::Update(current.with_statuses(statuses))
        }
        ExploreCommand::Set(letter, status) => {
            Action::Update(current.with_statuses(current.statuses.with_status(*letter, *status)))
        }
        ExploreCommand::Move { letter, to } => {
            let groups = current.group_list();
            // An ungrouped letter is reported as out of range by move_letter
            let from = group_of(&groups, *letter).unwrap_or(groups.len());
            let moved = move_letter(&groups, *letter, from, *to);
            Action::Update(current.with_groups(join_groups(&moved)))
        }
        ExploreCommand::Regroup => Action::Update(
            current.with_groups(calculate_groups(&current.statuses, &current.groups)),
        ),
        ExploreCommand::Groups(groups) => {
            Action::Update(current.with_groups(canonical_groups(groups)))
        }
        ExploreCommand::Sort(order) => Action::Update(current.with_sort_order(*order)),
        ExploreCommand::Load(token) => Action::Update(state::decode(token)),
        ExploreCommand::Reset => Action::Update(PuzzleState::default()),
        ExploreCommand::Cheat => Action::Cheat,
        ExploreCommand::Share => Action::Share,
        ExploreCommand::Help => Action::Help,
        ExploreCommand::Quit => Action::Quit,
    }
}

/// Run the explorer on stdin
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
pub fn run_explore(store: &WordStore, initial: PuzzleState) -> Result<PuzzleState> {
    let stdin = io::stdin();
    run_session(store, initial, stdin.lock())
}

/// Run the explorer over any line source, returning the final snapshot
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
pub fn run_session<R: BufRead>(
    store: &WordStore,
    initial: PuzzleState,
    input: R,
) -> Result<PuzzleState> {
    let solver = Solver::new(store);
    let mut current = initial;

    print_explore_help();
    print_explore_state(&solver, &current);

    let mut lines = input.lines();
    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush prompt")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read command")?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(ParseCommandError::Empty) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        log::debug!("explore command: {command:?}");

        match apply(&current, &command) {
            Action::Update(next) => {
                current = next;
                print_explore_state(&solver, &current);
            }
            Action::Cheat => print_cheat_pairs(&solver.cheat_pairs(&current)),
            Action::Share => print_share_token(&state::to_fragment(&current)),
            Action::Help => print_explore_help(),
            Action::Quit => break,
        }
    }

    Ok(current)
}
