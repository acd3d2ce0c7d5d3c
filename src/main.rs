//! go-tactics: run playouts or inspect the move policy from the command line.
//!
//! ## Usage
//!
//! - `go-tactics` - Show a demo
//! - `go-tactics playout --games 200` - Run playouts and report win rates
//! - `go-tactics genmove --moves D4,E5` - Show the policy's answer to a position
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` or `-v`.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use go_tactics::board::Board;
use go_tactics::constants::{DEFAULT_BOARD_SIZE, DEFAULT_GAMES, DEFAULT_KOMI, DEFAULT_MOVE_LIMIT};
use go_tactics::coord::{format_move, parse_move};
use go_tactics::patterns::PatternSet;
use go_tactics::playout::{PlayoutConfig, play_game, run_playouts};
use go_tactics::policy::{Policy, PolicyConfig};

/// go-tactics: tactical playout policy for Go
#[derive(Parser)]
#[command(name = "go-tactics")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run playouts from a position and report win rates
    Playout {
        #[command(flatten)]
        common: CommonArgs,
        /// Number of games to play
        #[arg(long, default_value_t = DEFAULT_GAMES)]
        games: usize,
        /// Komi for White
        #[arg(long, default_value_t = DEFAULT_KOMI)]
        komi: f32,
        /// Move limit per game
        #[arg(long, default_value_t = DEFAULT_MOVE_LIMIT)]
        limit: usize,
    },
    /// Show the policy's candidates and chosen move for a position
    Genmove {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Play one game and print the final board
    Demo {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Board size (1-25)
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
    /// Disable the 3x3 pattern tier
    #[arg(long)]
    no_pattern: bool,
    /// Do not filter self-atari moves
    #[arg(long)]
    no_selfatari: bool,
    /// Comma-separated moves played alternately from Black, e.g. "D4,E5,pass"
    #[arg(long, value_delimiter = ',')]
    moves: Vec<String>,
}

impl CommonArgs {
    fn policy_config(&self) -> PolicyConfig {
        PolicyConfig {
            use_pattern: !self.no_pattern,
            check_selfatari: !self.no_selfatari,
        }
    }

    fn policy(&self) -> Policy<'static> {
        let patterns = PatternSet::shared();
        match self.seed {
            Some(seed) => Policy::with_seed(patterns, self.policy_config(), seed),
            None => Policy::new(patterns, self.policy_config()),
        }
    }

    fn board(&self) -> Result<Board> {
        let mut board = Board::new(self.size).context("cannot create board")?;
        for mv in &self.moves {
            let pt = parse_move(mv, self.size).with_context(|| format!("bad move '{mv}'"))?;
            let color = board.current_player;
            board
                .play(pt, color)
                .with_context(|| format!("cannot play {mv} for {color}"))?;
        }
        Ok(board)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Playout {
            common,
            games,
            komi,
            limit,
        }) => run_playout_command(&common, games, PlayoutConfig { komi, limit }),
        Some(Commands::Genmove { common }) => run_genmove(&common),
        Some(Commands::Demo { common }) => run_demo(&common),
        None => run_demo(&CommonArgs {
            size: DEFAULT_BOARD_SIZE,
            seed: None,
            no_pattern: false,
            no_selfatari: false,
            moves: Vec::new(),
        }),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_playout_command(common: &CommonArgs, games: usize, config: PlayoutConfig) -> Result<()> {
    let board = common.board()?;
    let mut policy = common.policy();
    let stats = run_playouts(&board, games, &mut policy, &config).context("playout failed")?;
    println!(
        "games: {}  black wins: {}  white wins: {}  black winrate: {:.1}%",
        stats.games,
        stats.black_wins,
        stats.white_wins,
        stats.black_winrate() * 100.0
    );
    Ok(())
}

fn run_genmove(common: &CommonArgs) -> Result<()> {
    let board = common.board()?;
    let size = board.size();
    let mut policy = common.policy();
    let config = policy.config();
    println!("{board}");
    println!(
        "pattern tier: {}  self-atari check: {}",
        if config.use_pattern { "on" } else { "off" },
        if config.check_selfatari { "on" } else { "off" },
    );

    let (candidates, tier) = policy.generate_all_candidates(&board);
    let names = candidates
        .iter()
        .map(|&pt| format_move(Some(pt), size))
        .collect::<Result<Vec<_>, _>>()?;
    println!("{tier}: {}", names.join(" "));

    let chosen = policy.generate_move_with_tier(&board);
    let mv = chosen.map(|(pt, _)| pt);
    let label = chosen.map_or_else(|| "pass".to_string(), |(_, t)| t.to_string());
    println!(
        "{} plays {} ({label})",
        board.current_player,
        format_move(mv, size)?
    );
    Ok(())
}

fn run_demo(common: &CommonArgs) -> Result<()> {
    println!("go-tactics: playout policy demo\n");
    let mut board = common.board()?;
    let mut policy = common.policy();
    let config = PlayoutConfig::default();
    let color = board.current_player;
    let winner = play_game(&mut board, color, &mut policy, &config).context("playout failed")?;
    println!("{board}");
    println!(
        "Score (Black minus White): {:+.1}  Winner: {winner}",
        board.score(config.komi)
    );
    Ok(())
}
