use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// The contents of every bin at one point in the game
///
/// A `BoardState` is never modified once created: a move produces a new state.
/// Two states holding the same counts in the same order are interchangeable.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct BoardState {
    bins: Vec<u32>,
}

impl BoardState {
    /// Creates a board from signed bin counts, rejecting negative entries
    pub fn new(bins: &[i64]) -> Result<Self, EngineError> {
        let mut counts = Vec::with_capacity(bins.len());
        for (index, &value) in bins.iter().enumerate() {
            if value < 0 || value > u32::MAX as i64 {
                return Err(EngineError::InvalidState { index, value });
            }
            counts.push(value as u32);
        }
        Ok(Self { bins: counts })
    }

    /// Creates a board from counts that are already known to be valid
    pub fn from_counts(bins: &[u32]) -> Self {
        Self {
            bins: bins.to_vec(),
        }
    }

    pub fn bins(&self) -> &[u32] {
        &self.bins
    }

    pub fn num_bins(&self) -> usize {
        self.bins.len()
    }

    /// Whether every bin is empty, ending the game
    pub fn is_empty(&self) -> bool {
        self.bins.iter().all(|&count| count == 0)
    }

    /// Sum of all bins, wide enough that no valid board can overflow it
    pub fn total_tokens(&self) -> u64 {
        self.bins.iter().map(|&count| u64::from(count)).sum()
    }

    pub fn non_empty_count(&self) -> usize {
        self.bins.iter().filter(|&&count| count > 0).count()
    }

    /// Returns a copy of this board with one bin set to `remaining`
    fn with_bin(&self, bin: usize, remaining: u32) -> Self {
        let mut bins = self.bins.clone();
        bins[bin] = remaining;
        Self { bins }
    }

    /// Lists every board reachable with a single legal move
    ///
    /// Bins are visited in ascending order, and within a bin the remaining
    /// count goes from one less than the current count down to zero. An empty
    /// board has no successors.
    pub fn next_states(&self) -> Vec<BoardState> {
        let mut states = Vec::with_capacity(self.total_tokens() as usize);
        for (bin, &count) in self.bins.iter().enumerate() {
            for remaining in (0..count).rev() {
                states.push(self.with_bin(bin, remaining));
            }
        }
        states
    }
}

impl FromStr for BoardState {
    type Err = EngineError;

    /// Reads bin counts separated by whitespace or commas, e.g. `"3 4 5"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bins = Vec::new();
        for token in s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
        {
            match token.parse::<i64>() {
                Ok(value) => bins.push(value),
                Err(_) => {
                    return Err(EngineError::Parse {
                        token: token.to_string(),
                    })
                }
            }
        }
        Self::new(&bins)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, count) in self.bins.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", count)?;
        }
        write!(f, "]")
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::from_counts(&crate::DEFAULT_BINS)
    }
}
