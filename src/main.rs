use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::io::{stdin, stdout, Write};
use std::time::Duration;

use connect4_minimax::{
    rules::{outcome, Outcome},
    search::{LOSS_SCORE, WIN_SCORE},
    Board, Engine, Error, GameConfig, Player, CONNECT, DEFAULT_DEPTH, HEIGHT, WIDTH,
};

mod display;

/// Play or analyse Connect 4 against a minimax agent
#[derive(Parser)]
#[command(name = "connect4", version)]
struct Cli {
    #[command(flatten)]
    game: GameArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct GameArgs {
    /// Number of plies the agent searches ahead
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,

    #[arg(long, default_value_t = HEIGHT)]
    rows: usize,

    #[arg(long, default_value_t = WIDTH)]
    columns: usize,

    /// Number of aligned tiles needed to win
    #[arg(long, default_value_t = CONNECT)]
    connect: usize,

    /// Let the agent make the first move
    #[arg(long)]
    ai_first: bool,
}

impl GameArgs {
    fn config(&self) -> Result<GameConfig> {
        let first_player = if self.ai_first {
            Player::Ai
        } else {
            Player::Human
        };
        let config = GameConfig::default()
            .with_dimensions(self.rows, self.columns)
            .with_connect(self.connect)
            .with_depth(self.depth)
            .with_first_player(first_player);
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Play an interactive game against the agent (default)
    Play,
    /// Score every column of a position given as 1-indexed column digits
    Analyse { moves: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.game.config()?;

    match cli.command {
        Some(Command::Analyse { moves }) => analyse(config, &moves),
        Some(Command::Play) | None => play(config),
    }
}

fn play(config: GameConfig) -> Result<()> {
    let mut board = Board::with_config(&config);
    let mut engine = Engine::new(config);
    let mut player = config.first_player;

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        display::display(&board)?;

        // end states
        if let Some(result) = outcome(&board, &config) {
            match result {
                Outcome::Winner(Player::Ai) => println!("The AI wins!"),
                Outcome::Winner(Player::Human) => println!("You win!"),
                Outcome::Draw => println!("Draw!"),
            }
            break;
        }

        let column = match player {
            Player::Ai => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_message("AI is thinking...");
                spinner.enable_steady_tick(Duration::from_millis(100));

                let column = engine.best_move(&board)?;

                spinner.finish_and_clear();
                println!("AI plays column {}", column + 1);
                column
            }
            Player::Human => {
                print!("Move input > ");
                stdout().flush()?;
                let mut input_str = String::new();
                if stdin.read_line(&mut input_str)? == 0 {
                    // stdin closed
                    return Ok(());
                }

                match input_str
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|column| column.checked_sub(1))
                {
                    Some(column) => column,
                    None => {
                        println!("Invalid number: {}", input_str.trim());
                        continue;
                    }
                }
            }
        };

        match board.play_checked(column, config.cell_of(player)) {
            Ok(row) => info!(?player, column, row, "move played"),
            Err(Error::ColumnFull(_)) => {
                println!("Invalid move, column {} full", column + 1);
                continue;
            }
            Err(Error::ColumnOutOfRange { columns, .. }) => {
                println!(
                    "Invalid move, column {} out of range. Columns must be between 1 and {}",
                    column + 1,
                    columns
                );
                continue;
            }
            Err(err) => return Err(err.into()),
        }
        player = player.opponent();
    }
    Ok(())
}

fn analyse(config: GameConfig, moves: &str) -> Result<()> {
    let board = Board::from_moves(&config, moves)?;
    display::display(&board)?;

    let mut engine = Engine::new(config);

    let progress = ProgressBar::new(config.depth as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Searching depth {pos}/{len}: {bar:40.cyan/blue} {msg}")?
            .progress_chars("█▓▒░  "),
    );

    // deepen one ply at a time so progress is visible on slow searches
    let mut scores = Vec::new();
    for depth in 1..=config.depth {
        scores = engine.column_scores(&board, depth)?;
        progress.set_message(format!("({} positions)", engine.node_count));
        progress.inc(1);
    }
    progress.finish_and_clear();

    let mut best: Option<(usize, i32)> = None;
    for &(column, score) in scores.iter() {
        let verdict = if score >= WIN_SCORE {
            "AI can force a win".to_string()
        } else if score <= LOSS_SCORE {
            "human can force a win".to_string()
        } else {
            format!("heuristic score {}", score)
        };
        println!("Column {}: {}", column + 1, verdict);

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((column, score));
        }
    }

    if let Some((column, _)) = best {
        println!(
            "Best move: {} (searched {} positions)",
            column + 1,
            engine.node_count
        );
    }
    Ok(())
}
