mod astar;

use crate::board::Board;
use crate::stat::Stats;
use astar::{dual_a_star_search, SearchOutcome};

use anyhow::bail;
use std::time::Instant;

/// Solves one puzzle instance with the dual A* search. The search runs to
/// completion at construction; the accessors only read the recorded verdict.
pub struct Solver {
    solution: Option<Vec<Board>>,
    stats: Stats,
}

impl Solver {
    pub fn new(initial: &Board) -> Self {
        // Without a node limit the dual search always terminates with a
        // definite verdict, so Exhausted cannot occur here.
        let (outcome, stats) = Self::run(initial, None);
        let solution = match outcome {
            SearchOutcome::Solved(path) => Some(path),
            _ => None,
        };
        Solver { solution, stats }
    }

    /// Like `new`, but aborts once the primary search has expanded `limit`
    /// nodes without settling solvability.
    pub fn with_node_limit(initial: &Board, limit: usize) -> anyhow::Result<Self> {
        let (outcome, stats) = Self::run(initial, Some(limit));
        match outcome {
            SearchOutcome::Solved(path) => Ok(Solver {
                solution: Some(path),
                stats,
            }),
            SearchOutcome::Unsolvable => Ok(Solver {
                solution: None,
                stats,
            }),
            SearchOutcome::Exhausted => bail!(
                "search exhausted after expanding {} nodes without a verdict",
                limit
            ),
        }
    }

    fn run(initial: &Board, node_limit: Option<usize>) -> (SearchOutcome, Stats) {
        let total_solve_start_time = Instant::now();
        let mut stats = Stats::default();

        let outcome = dual_a_star_search(initial, node_limit, &mut stats);

        stats.time_us = total_solve_start_time.elapsed().as_micros() as usize;
        if let SearchOutcome::Solved(path) = &outcome {
            stats.costs = path.len() - 1;
        }
        stats.print();

        (outcome, stats)
    }

    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    /// Minimum number of moves, or -1 if the instance is unsolvable.
    pub fn moves(&self) -> i32 {
        match &self.solution {
            Some(path) => (path.len() - 1) as i32,
            None => -1,
        }
    }

    /// Root-first board sequence ending at the goal; `None` if unsolvable.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}
