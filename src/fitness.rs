//! # Fitness
//!
//! The fitness of a genome is the total value of its selection, or
//! [`Fitness::Infeasible`] when the selection does not fit the knapsack.
//! Infeasibility is an ordinary outcome handled uniformly by every
//! comparison, not an error.

use std::fmt;

/// The fitness of a genome against a problem instance.
///
/// `Infeasible` compares strictly below every `Value`, so infeasible genomes
/// always lose selection comparisons; `Value`s order by their payload. The
/// variant order makes the derived `Ord` implement exactly that, keeping the
/// sentinel a first-class minimum rather than a magic numeric literal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Fitness {
    /// The selection's total weight exceeds the capacity.
    Infeasible,
    /// The selection fits; carries its total value.
    Value(u64),
}

impl Fitness {
    /// Whether this fitness belongs to a feasible selection.
    pub const fn is_feasible(self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// The total value of a feasible selection, if any.
    pub const fn value(self) -> Option<u64> {
        match self {
            Self::Infeasible => None,
            Self::Value(v) => Some(v),
        }
    }
}

impl fmt::Display for Fitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infeasible => write!(f, "infeasible"),
            Self::Value(v) => write!(f, "{}", v),
        }
    }
}
