use npuzzle_rust::board::Board;
use npuzzle_rust::config::{Cli, Config};
use npuzzle_rust::scenario::{generate_scramble, Scenario};
use npuzzle_rust::solver::Solver;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    let config = Config::new(&cli);
    config.validate()?;

    let boards: Vec<(String, Board)> = if let Some(path) = config.puzzle_path.as_ref() {
        let board = Board::from_file(path)
            .with_context(|| format!("error with puzzle file: {path}"))?;
        vec![(path.clone(), board)]
    } else if let Some(path) = config.scenario_path.as_ref() {
        let scenario = Scenario::load_from_yaml(path)
            .with_context(|| format!("error with scenario file: {path}"))?;
        scenario.boards()?
    } else {
        let n = config
            .random_dimension
            .context("no puzzle source configured")?;
        let mut rng = StdRng::seed_from_u64(config.seed as u64);
        let board = generate_scramble(n, config.scramble_moves, &mut rng)?;
        vec![(format!("random-{n}x{n}"), board)]
    };

    for (name, board) in boards {
        info!("solving {name}");
        let solver = match config.node_limit {
            Some(limit) => Solver::with_node_limit(&board, limit)?,
            None => Solver::new(&board),
        };

        if !solver.is_solvable() {
            println!("No solution possible");
        } else {
            println!("Minimum number of moves = {}", solver.moves());
            for step in solver.solution().unwrap_or_default() {
                println!("{step}");
            }
        }
    }

    Ok(())
}
