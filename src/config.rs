use anyhow::anyhow;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "Rust n-puzzle",
    about = "Sliding-tile puzzle solver (dual A*) implemented in Rust.",
    version = "1.0"
)]
pub struct Cli {
    #[arg(
        long,
        help = "Path to a puzzle file: the dimension followed by the tiles"
    )]
    pub puzzle_path: Option<String>,

    #[arg(long, help = "Path to a YAML scenario file listing named puzzles")]
    pub scenario_path: Option<String>,

    #[arg(long, help = "Generate a random scramble of this dimension")]
    pub random_dimension: Option<usize>,

    #[arg(
        long,
        help = "Length of the random scramble walk",
        default_value_t = 30
    )]
    pub scramble_moves: usize,

    #[arg(
        long,
        help = "Seed for the random number generator",
        default_value_t = 0
    )]
    pub seed: usize,

    #[arg(long, help = "Abort the search after expanding this many nodes")]
    pub node_limit: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub puzzle_path: Option<String>,
    pub scenario_path: Option<String>,
    pub random_dimension: Option<usize>,
    pub scramble_moves: usize,
    pub seed: usize,
    pub node_limit: Option<usize>,
}

impl Config {
    pub fn new(cli: &Cli) -> Self {
        Self {
            puzzle_path: cli.puzzle_path.clone(),
            scenario_path: cli.scenario_path.clone(),
            random_dimension: cli.random_dimension,
            scramble_moves: cli.scramble_moves,
            seed: cli.seed,
            node_limit: cli.node_limit,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let sources = [
            self.puzzle_path.is_some(),
            self.scenario_path.is_some(),
            self.random_dimension.is_some(),
        ]
        .iter()
        .filter(|&&given| given)
        .count();
        if sources != 1 {
            return Err(anyhow!(
                "Exactly one of --puzzle-path, --scenario-path and --random-dimension must be given, got {}",
                sources
            ));
        }

        if self.random_dimension == Some(0) {
            return Err(anyhow!("--random-dimension must be at least 1"));
        }

        if self.random_dimension.is_some() && self.scramble_moves == 0 {
            return Err(anyhow!(
                "--scramble-moves must be positive when generating a random scramble"
            ));
        }

        if self.node_limit == Some(0) {
            return Err(anyhow!("--node-limit must be positive"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            puzzle_path: Some("puzzle_file/puzzle04.txt".to_string()),
            scenario_path: None,
            random_dimension: None,
            scramble_moves: 30,
            seed: 0,
            node_limit: None,
        }
    }

    #[test]
    fn test_single_source_is_required() {
        assert!(base_config().validate().is_ok());

        let mut none = base_config();
        none.puzzle_path = None;
        assert!(none.validate().is_err());

        let mut both = base_config();
        both.random_dimension = Some(3);
        assert!(both.validate().is_err());
    }

    #[test]
    fn test_limits_must_be_positive() {
        let mut config = base_config();
        config.puzzle_path = None;
        config.random_dimension = Some(3);
        config.scramble_moves = 0;
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.node_limit = Some(0);
        assert!(config.validate().is_err());
    }
}
