pub mod bfs;
pub mod bidirectional;
pub mod common;
pub mod dfs;
pub mod dls;
pub mod iddfs;
pub mod ucs;

use std::fmt;
use std::str::FromStr;

use crate::engine::SearchOptions;
use crate::error::SearchError;

use self::bfs::BreadthFirst;
use self::bidirectional::Bidirectional;
use self::common::SearchStrategy;
use self::dfs::DepthFirst;
use self::dls::DepthLimited;
use self::iddfs::IterativeDeepening;
use self::ucs::UniformCost;

/// The selectable search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dls,
    Iddfs,
    Ucs,
    Bidirectional,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dls,
        Algorithm::Iddfs,
        Algorithm::Ucs,
        Algorithm::Bidirectional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dls => "dls",
            Algorithm::Iddfs => "iddfs",
            Algorithm::Ucs => "ucs",
            Algorithm::Bidirectional => "bidirectional",
        }
    }

    /// Builds the strategy, taking depth budgets from `options`.
    pub fn strategy(&self, options: &SearchOptions) -> Box<dyn SearchStrategy> {
        match self {
            Algorithm::Bfs => Box::new(BreadthFirst),
            Algorithm::Dfs => Box::new(DepthFirst),
            Algorithm::Dls => Box::new(DepthLimited::new(options.depth_limit)),
            Algorithm::Iddfs => Box::new(IterativeDeepening::new(options.max_depth)),
            Algorithm::Ucs => Box::new(UniformCost),
            Algorithm::Bidirectional => Box::new(Bidirectional),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth_first" => Ok(Algorithm::Bfs),
            "dfs" | "depth_first" => Ok(Algorithm::Dfs),
            "dls" | "depth_limited" => Ok(Algorithm::Dls),
            "iddfs" | "iterative_deepening" => Ok(Algorithm::Iddfs),
            "ucs" | "uniform_cost" => Ok(Algorithm::Ucs),
            "bidirectional" | "bidir" => Ok(Algorithm::Bidirectional),
            _ => Err(SearchError::UnknownAlgorithm(s.to_string())),
        }
    }
}
