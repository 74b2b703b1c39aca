//! First-class transition invariants.
//!
//! Each invariant relates the state before a tap to the state after it.
//! They are checked after every tap in debug builds and can be tested
//! independently.

/// A logical property relating a state to its successor.
pub trait Invariant<S> {
    /// Checks if the invariant holds across the transition.
    fn holds(before: &S, after: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for triples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(before, after), I1::description()),
            (I2::holds(before, after), I2::description()),
            (I3::holds(before, after), I3::description()),
        ])
    }
}

pub mod score_award;
pub mod single_mark;
pub mod turn_progression;

pub use score_award::ScoreAwardInvariant;
pub use single_mark::SingleMarkInvariant;
pub use turn_progression::TurnProgressionInvariant;

/// All tap invariants as a composable set.
pub type TapInvariants = (
    SingleMarkInvariant,
    ScoreAwardInvariant,
    TurnProgressionInvariant,
);
