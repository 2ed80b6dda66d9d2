use anyhow::{Context, Result};
use rand::prelude::*;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use tracing::info;

use crate::board::Board;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PuzzleYaml {
    pub name: String,
    pub tiles: Vec<Vec<u32>>,
}

/// A batch of named puzzle instances listed inline in a YAML file.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub puzzles: Vec<PuzzleYaml>,
}

impl Scenario {
    pub fn load_from_yaml(path: &str) -> Result<Scenario> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario file {path:?}"))?;
        let reader = BufReader::new(file);
        let scenario = serde_yaml::from_reader(reader)?;
        Ok(scenario)
    }

    pub fn from_yaml_str(content: &str) -> Result<Scenario> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Validates every listed grid and pairs it with its name.
    pub fn boards(&self) -> Result<Vec<(String, Board)>> {
        self.puzzles
            .iter()
            .map(|puzzle| {
                let board = Board::new(puzzle.tiles.clone())
                    .with_context(|| format!("invalid puzzle {:?}", puzzle.name))?;
                Ok((puzzle.name.clone(), board))
            })
            .collect()
    }
}

/// Scrambles the goal board with a random walk of `moves` blank slides that
/// never undoes the previous slide. Every board a walk can reach is solvable
/// by construction, so no parity check is needed here.
pub fn generate_scramble<R: Rng + ?Sized>(n: usize, moves: usize, rng: &mut R) -> Result<Board> {
    let mut current = Board::goal(n)?;
    let mut previous: Option<Board> = None;

    for _ in 0..moves {
        let candidates: Vec<Board> = current
            .neighbors()
            .into_iter()
            .filter(|neighbor| previous.as_ref() != Some(neighbor))
            .collect();
        match candidates.choose(rng) {
            Some(next) => previous = Some(std::mem::replace(&mut current, next.clone())),
            // A 1x1 board has no neighbors to walk to.
            None => break,
        }
    }

    info!("Generate scramble: dimension {n}, walk length {moves}");
    Ok(current)
}
