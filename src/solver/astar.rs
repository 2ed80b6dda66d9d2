use crate::board::Board;
use crate::stat::Stats;

use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Node in the search-ancestry arena. Parent links are indices into the
/// arena and form a tree rooted at the initial board; `moves` is the depth
/// from that root.
#[derive(Debug, Clone)]
struct SearchNode {
    board: Board,
    parent: Option<usize>,
    moves: usize,
}

/// Frontier entry for one arena node, ordered by f = moves + manhattan.
#[derive(Debug, Clone, Eq, PartialEq)]
struct OpenEntry {
    f_cost: usize,
    h_cost: usize,
    node: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then_with(|| self.h_cost.cmp(&other.h_cost))
            // The arena index makes every entry distinct, so the set never
            // coalesces two nodes with equal costs, and ties break
            // deterministically by insertion order.
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug)]
pub(super) enum SearchOutcome {
    /// Root-first board sequence ending at the goal.
    Solved(Vec<Board>),
    Unsolvable,
    /// Node limit hit before either search reached its goal.
    Exhausted,
}

/// Runs two interleaved best-first searches, one rooted at `initial` and one
/// at `initial.twin()`. Swapping two tiles flips the permutation parity, so
/// exactly one of the two roots can reach the goal; whichever search gets
/// there first settles solvability and, for the primary search, yields a
/// minimum-move path (the Manhattan heuristic is admissible).
pub(super) fn dual_a_star_search(
    initial: &Board,
    node_limit: Option<usize>,
    stats: &mut Stats,
) -> SearchOutcome {
    let mut nodes: Vec<SearchNode> = Vec::new();
    let mut primary_open = BTreeSet::new();
    let mut twin_open = BTreeSet::new();

    push_root(initial.clone(), &mut nodes, &mut primary_open);
    push_root(initial.twin(), &mut nodes, &mut twin_open);

    loop {
        let Some(current) = primary_open.pop_first() else {
            // Cannot happen for a valid board given the parity argument, but
            // an exhausted frontier means unsolvable, never a crash.
            debug!("primary frontier exhausted");
            return SearchOutcome::Unsolvable;
        };
        trace!("expand primary node: {current:?}");
        stats.primary_expand_nodes += 1;

        if nodes[current.node].board.is_goal() {
            debug!(
                "primary search reached the goal after {} moves",
                nodes[current.node].moves
            );
            return SearchOutcome::Solved(construct_path(&nodes, current.node));
        }

        let twin_current = twin_open.pop_first();
        if let Some(ref twin_node) = twin_current {
            stats.twin_expand_nodes += 1;
            if nodes[twin_node.node].board.is_goal() {
                debug!("twin search reached its goal, instance is unsolvable");
                return SearchOutcome::Unsolvable;
            }
        }

        expand(current.node, &mut nodes, &mut primary_open);
        if let Some(twin_node) = twin_current {
            expand(twin_node.node, &mut nodes, &mut twin_open);
        }

        if node_limit.is_some_and(|limit| stats.primary_expand_nodes >= limit) {
            debug!("node limit {node_limit:?} hit without a verdict");
            return SearchOutcome::Exhausted;
        }
    }
}

fn push_root(board: Board, nodes: &mut Vec<SearchNode>, open: &mut BTreeSet<OpenEntry>) {
    let h_cost = board.manhattan();
    open.insert(OpenEntry {
        f_cost: h_cost,
        h_cost,
        node: nodes.len(),
    });
    nodes.push(SearchNode {
        board,
        parent: None,
        moves: 0,
    });
}

fn expand(index: usize, nodes: &mut Vec<SearchNode>, open: &mut BTreeSet<OpenEntry>) {
    let parent = nodes[index].parent;
    let moves = nodes[index].moves + 1;

    for neighbor in nodes[index].board.neighbors() {
        // Skip the board we just came from. Cheap cycle pruning, not full
        // duplicate detection.
        if parent.is_some_and(|p| nodes[p].board == neighbor) {
            continue;
        }
        let h_cost = neighbor.manhattan();
        open.insert(OpenEntry {
            f_cost: moves + h_cost,
            h_cost,
            node: nodes.len(),
        });
        nodes.push(SearchNode {
            board: neighbor,
            parent: Some(index),
            moves,
        });
    }
}

fn construct_path(nodes: &[SearchNode], goal: usize) -> Vec<Board> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(index) = current {
        path.push(nodes[index].board.clone());
        current = nodes[index].parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    // Helper function to setup tracing.
    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .try_init();
    }

    #[test]
    fn test_search_solves_four_move_instance() {
        init_tracing();
        let board = Board::new(vec![vec![0, 1, 3], vec![4, 2, 5], vec![7, 8, 6]]).unwrap();
        let stats = &mut Stats::default();
        match dual_a_star_search(&board, None, stats) {
            SearchOutcome::Solved(path) => {
                assert_eq!(path.len(), 5);
                assert_eq!(path[0], board);
                assert!(path.last().unwrap().is_goal());
                // Consecutive boards differ by one blank slide.
                for pair in path.windows(2) {
                    assert!(pair[0].neighbors().contains(&pair[1]));
                }
            }
            other => panic!("expected a solution, got {other:?}"),
        }
        assert!(stats.primary_expand_nodes >= 5);
    }

    #[test]
    fn test_search_detects_unsolvable_instance() {
        init_tracing();
        let board = Board::new(vec![vec![1, 2, 3], vec![4, 5, 6], vec![8, 7, 0]]).unwrap();
        let stats = &mut Stats::default();
        assert!(matches!(
            dual_a_star_search(&board, None, stats),
            SearchOutcome::Unsolvable
        ));
        // The twin search did the work of reaching its goal.
        assert!(stats.twin_expand_nodes > 0);
    }

    #[test]
    fn test_search_on_goal_board_expands_one_node() {
        init_tracing();
        let board = Board::goal(3).unwrap();
        let stats = &mut Stats::default();
        match dual_a_star_search(&board, None, stats) {
            SearchOutcome::Solved(path) => assert_eq!(path, vec![board]),
            other => panic!("expected a solution, got {other:?}"),
        }
        assert_eq!(stats.primary_expand_nodes, 1);
        assert_eq!(stats.twin_expand_nodes, 0);
    }

    #[test]
    fn test_search_respects_node_limit() {
        init_tracing();
        let board = Board::new(vec![vec![0, 1, 3], vec![4, 2, 5], vec![7, 8, 6]]).unwrap();
        let stats = &mut Stats::default();
        assert!(matches!(
            dual_a_star_search(&board, Some(1), stats),
            SearchOutcome::Exhausted
        ));
        assert_eq!(stats.primary_expand_nodes, 1);
    }
}
