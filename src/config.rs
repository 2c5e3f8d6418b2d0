use crate::{neighbors::Move, Cost, SearchError};

/// Options for a [`Pathfinder`](crate::Pathfinder).
///
/// The default costs are `10` for orthogonal and `14` for diagonal moves, an integer
/// approximation of `1 : √2`. The default [`Manhattan`](crate::Manhattan) Heuristic stays
/// admissible as long as `orthogonal_cost >= 1` and `diagonal_cost >= 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// The cost of moving to a horizontally or vertically adjacent cell.
    ///
    /// Default: `10`
    pub orthogonal_cost: Cost,
    /// The cost of moving to a diagonally adjacent cell.
    ///
    /// Default: `14`
    pub diagonal_cost: Cost,
    /// The maximum number of cells a single search may expand.
    /// `None` lets every search run to completion.
    ///
    /// Exceeding the budget fails the search with [`SearchError::BudgetExhausted`].
    /// Searches that finish within the budget are unaffected by it.
    ///
    /// Default: `None`
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// The default configuration: `10` / `14` move costs and no expansion budget.
    pub const DEFAULT: SearchConfig = SearchConfig {
        orthogonal_cost: 10,
        diagonal_cost: 14,
        max_expansions: None,
    };

    /// Replaces both move costs.
    pub const fn with_move_costs(mut self, orthogonal_cost: Cost, diagonal_cost: Cost) -> Self {
        self.orthogonal_cost = orthogonal_cost;
        self.diagonal_cost = diagonal_cost;
        self
    }

    /// Limits every search to `max_expansions` expanded cells.
    pub const fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// The cost of a single move of the given kind.
    pub fn move_cost(&self, step: Move) -> Cost {
        match step {
            Move::Orthogonal => self.orthogonal_cost,
            Move::Diagonal => self.diagonal_cost,
        }
    }

    /// Checks that the configuration can be searched with at all.
    ///
    /// Whether the costs suit a particular Heuristic is checked by
    /// [`Heuristic::check_costs`](crate::Heuristic::check_costs).
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.orthogonal_cost == 0 || self.diagonal_cost == 0 {
            return Err(SearchError::InvalidMoveCost {
                orthogonal: self.orthogonal_cost,
                diagonal: self.diagonal_cost,
            });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.move_cost(Move::Orthogonal), 10);
        assert_eq!(config.move_cost(Move::Diagonal), 14);
        assert_eq!(config.max_expansions, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_cost_is_rejected() {
        let config = SearchConfig::DEFAULT.with_move_costs(0, 14);
        assert_eq!(
            config.validate(),
            Err(SearchError::InvalidMoveCost {
                orthogonal: 0,
                diagonal: 14
            })
        );
    }
}
