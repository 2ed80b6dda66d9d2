use std::fmt;
use std::fs;

use anyhow::{bail, Context};

/// One arrangement of tiles on an n-by-n grid, with `0` as the blank.
/// Immutable after construction; the heuristic distances and the blank
/// position are computed once up front, so every accessor is pure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    n: usize,
    tiles: Vec<u32>, // Row-major.
    blank: (usize, usize),
    hamming: usize,
    manhattan: usize,
}

impl Board {
    /// Builds a board from an n-by-n grid of rows. The grid must be square,
    /// non-empty and contain every value in `0..n*n` exactly once.
    pub fn new(rows: Vec<Vec<u32>>) -> anyhow::Result<Self> {
        let n = rows.len();
        if n == 0 {
            bail!("board dimension must be at least 1");
        }
        let mut tiles = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                bail!("row {} has {} tiles, expected {}", i, row.len(), n);
            }
            tiles.extend_from_slice(row);
        }

        let mut seen = vec![false; n * n];
        for &value in &tiles {
            if value as usize >= n * n {
                bail!("tile value {} out of range for a {}x{} board", value, n, n);
            }
            if seen[value as usize] {
                bail!("tile value {} appears more than once", value);
            }
            seen[value as usize] = true;
        }

        Ok(Self::from_tiles(n, tiles))
    }

    /// The goal configuration: `1..n*n` in row-major order, blank last.
    pub fn goal(n: usize) -> anyhow::Result<Self> {
        if n == 0 {
            bail!("board dimension must be at least 1");
        }
        let tiles = (0..n * n)
            .map(|i| if i == n * n - 1 { 0 } else { (i + 1) as u32 })
            .collect();
        Ok(Self::from_tiles(n, tiles))
    }

    /// Reads a board from a text file holding the dimension followed by the
    /// `n*n` tile values, whitespace separated.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read puzzle file {path:?}"))?;
        let mut tokens = content.split_whitespace();

        let n: usize = tokens
            .next()
            .context("puzzle file is empty")?
            .parse()
            .context("puzzle dimension is not an integer")?;
        if n == 0 {
            bail!("board dimension must be at least 1");
        }

        let values: Vec<u32> = tokens
            .map(|token| {
                token
                    .parse()
                    .with_context(|| format!("tile value {token:?} is not an integer"))
            })
            .collect::<anyhow::Result<_>>()?;
        if values.len() != n * n {
            bail!(
                "puzzle file holds {} tiles, expected {} for dimension {}",
                values.len(),
                n * n,
                n
            );
        }

        let rows = values.chunks(n).map(|chunk| chunk.to_vec()).collect();
        Self::new(rows)
    }

    // Callers guarantee `tiles` is a permutation of 0..n*n.
    fn from_tiles(n: usize, tiles: Vec<u32>) -> Self {
        let mut blank = (0, 0);
        let mut hamming = 0;
        let mut manhattan = 0;

        for i in 0..n {
            for j in 0..n {
                let value = tiles[i * n + j];
                if value == 0 {
                    blank = (i, j);
                    continue;
                }
                if value as usize != i * n + j + 1 {
                    hamming += 1;
                }
                let goal_row = (value as usize - 1) / n;
                let goal_col = (value as usize - 1) % n;
                manhattan += goal_row.abs_diff(i) + goal_col.abs_diff(j);
            }
        }

        Board {
            n,
            tiles,
            blank,
            hamming,
            manhattan,
        }
    }

    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Number of tiles out of place, blank excluded.
    pub fn hamming(&self) -> usize {
        self.hamming
    }

    /// Sum over non-blank tiles of the grid distance to their goal cell.
    pub fn manhattan(&self) -> usize {
        self.manhattan
    }

    pub fn is_goal(&self) -> bool {
        self.hamming == 0
    }

    /// A board obtained by swapping the first two non-blank tiles in
    /// row-major order. Flips the permutation parity, so exactly one of a
    /// board and its twin is solvable. A 1x1 board has no such pair and is
    /// already the goal; its twin is an identical copy.
    pub fn twin(&self) -> Board {
        let mut non_blank = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(index, _)| index);

        match (non_blank.next(), non_blank.next()) {
            (Some(first), Some(second)) => self.exchanged(first, second),
            _ => self.clone(),
        }
    }

    /// The 2-4 boards reachable by sliding a tile into the blank, i.e. by
    /// swapping the blank with one in-bounds orthogonal neighbor, enumerated
    /// up, right, down, left.
    pub fn neighbors(&self) -> Vec<Board> {
        let directions = [(-1, 0), (0, 1), (1, 0), (0, -1)]; // Up, right, down, left.
        let (row, col) = self.blank;
        let mut neighbors = Vec::with_capacity(4);

        for &(dr, dc) in &directions {
            let new_row = row as i32 + dr;
            let new_col = col as i32 + dc;
            if new_row >= 0 && new_col >= 0 && new_row < self.n as i32 && new_col < self.n as i32 {
                neighbors.push(self.exchanged(
                    row * self.n + col,
                    new_row as usize * self.n + new_col as usize,
                ));
            }
        }

        neighbors
    }

    fn exchanged(&self, a: usize, b: usize) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        Self::from_tiles(self.n, tiles)
    }
}

impl fmt::Display for Board {
    /// The dimension on the first line, then the rows with every tile
    /// right-aligned to the width of the largest tile value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.n * self.n - 1).max(1).to_string().len();
        write!(f, "{}", self.n)?;
        for i in 0..self.n {
            write!(f, "\n")?;
            for j in 0..self.n {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", self.tiles[i * self.n + j])?;
            }
        }
        Ok(())
    }
}
