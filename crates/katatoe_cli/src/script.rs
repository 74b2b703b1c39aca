//! Parsing action scripts from command-line tokens.

use katatoe::{Action, Position};
use tracing::instrument;

/// A token that names no action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ScriptError {
    /// Token is neither a number, a cell label, nor `new`.
    #[display("Unrecognized action {:?} at position {} (expected 0-8, a cell label, or `new`)", token, index)]
    UnknownToken {
        /// Offending token.
        token: String,
        /// Zero-based position in the script.
        index: usize,
    },
}

impl std::error::Error for ScriptError {}

/// Parses one token.
///
/// Numbers are passed through unchecked so the reducer decides whether
/// they name a cell.
#[instrument]
pub fn parse_action(token: &str) -> Option<Action> {
    let token = token.trim();
    if token.eq_ignore_ascii_case("new") || token.eq_ignore_ascii_case("n") {
        return Some(Action::NewGame);
    }
    if let Ok(index) = token.parse::<usize>() {
        return Some(Action::PlayerTapped(index));
    }
    Position::from_label(token).map(Action::tap)
}

/// Parses a whole script, failing on the first unknown token.
#[instrument(skip(tokens), fields(count = tokens.len()))]
pub fn parse_script<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Action>, ScriptError> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            parse_action(token.as_ref()).ok_or_else(|| ScriptError::UnknownToken {
                token: token.as_ref().to_string(),
                index,
            })
        })
        .collect()
}
