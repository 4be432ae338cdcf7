//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every applied
//! move. They are asserted in debug builds and testable on their own.

mod mark_balance;
mod outcome_matches_board;
mod single_winner;
mod turn_matches_counts;

pub use mark_balance::MarkBalanceInvariant;
pub use outcome_matches_board::OutcomeMatchesBoardInvariant;
pub use single_winner::SingleWinnerInvariant;
pub use turn_matches_counts::TurnMatchesCountsInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
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
/// Implemented for tuples of two and of four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3, I4);

/// Every invariant a [`GameState`](crate::GameState) maintains.
pub type GameInvariants = (
    MarkBalanceInvariant,
    SingleWinnerInvariant,
    TurnMatchesCountsInvariant,
    OutcomeMatchesBoardInvariant,
);
