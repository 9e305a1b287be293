mod config;

use std::io::{self, BufRead, Write};

use clap::Parser;
use tictactoe_core::{
    evaluate_with_line, log, logger, Difficulty, IllegalMove, Mark, Match, MatchPhase, Outcome,
    SessionRng,
};

use config::{get_config_path, load_config};

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Overrides the configured difficulty (easy or impossible)
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for the easy-mode move picker, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.unwrap_or_else(get_config_path);
    let mut config = load_config(&config_path)?;
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!("Difficulty: {}, seed: {}", config.difficulty, rng.seed());
    println!("You are X. Enter a cell number 0-8 (row-major), or q to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = Match::new();

    loop {
        match game.phase() {
            MatchPhase::AwaitingFirst => {
                print_board(&game);
                let Some(input) = prompt(&mut lines, "Your move: ")? else {
                    break;
                };
                let input = input.trim();
                if input.eq_ignore_ascii_case("q") {
                    break;
                }
                let cell: usize = match input.parse() {
                    Ok(cell) => cell,
                    Err(_) => {
                        println!("Enter a number between 0 and 8.");
                        continue;
                    }
                };
                if let Err(e) = game.apply_move(cell) {
                    match e {
                        IllegalMove::CellOccupied(_) | IllegalMove::OutOfBounds(_) => {
                            println!("{}. Try again.", e);
                        }
                        IllegalMove::MatchOver => unreachable!("phase gates terminal moves"),
                    }
                }
            }
            MatchPhase::AwaitingSecond => {
                let cell = game.engine_move(config.difficulty, &mut rng)?;
                game.apply_move(cell)?;
                log!("Engine plays cell {}", cell);
            }
            MatchPhase::Terminal => {
                print_board(&game);
                announce_result(&game, config.highlight_winning_line);

                let tally = game.tally();
                println!(
                    "Score: you {} / engine {} / draws {}",
                    tally.x_wins, tally.o_wins, tally.draws
                );

                let Some(answer) = prompt(&mut lines, "Rematch? [y/n] ")? else {
                    break;
                };
                if answer.trim().eq_ignore_ascii_case("y") {
                    game.reset();
                } else {
                    break;
                }
            }
        }
    }

    log!("Goodbye");
    Ok(())
}

fn prompt(
    lines: &mut io::Lines<io::StdinLock<'_>>,
    message: &str,
) -> Result<Option<String>, io::Error> {
    print!("{}", message);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn print_board(game: &Match) {
    let cells = game.board().cells();
    println!();
    for row in 0..3 {
        let rendered: Vec<String> = (0..3)
            .map(|col| {
                let cell = row * 3 + col;
                match cells[cell] {
                    Mark::Empty => cell.to_string(),
                    mark => mark.to_string(),
                }
            })
            .collect();
        println!(" {}", rendered.join(" | "));
        if row < 2 {
            println!("---+---+---");
        }
    }
    println!();
}

fn announce_result(game: &Match, highlight_winning_line: bool) {
    match game.outcome() {
        Outcome::Win(Mark::X) => println!("You win!"),
        Outcome::Win(_) => println!("The engine wins."),
        Outcome::Draw => println!("Draw."),
        Outcome::Ongoing => unreachable!("announced before the match ended"),
    }

    if highlight_winning_line
        && let (_, Some(line)) = evaluate_with_line(game.board())
    {
        println!(
            "Winning line: {} - {} - {}",
            line.cells[0], line.cells[1], line.cells[2]
        );
    }
}
