use anyhow::Result;
use clap::Parser;
use gridbot::{Engine, GameConfig, Grid, Move, MoveOutcome, Occupant};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play N-in-a-row against the minimax engine", long_about = None)]
struct Args {
    /// Board rows (3-10)
    #[arg(long, default_value_t = 3)]
    rows: usize,

    /// Board columns (3-10)
    #[arg(long, default_value_t = 3)]
    cols: usize,

    /// Consecutive marks needed to win (3-5)
    #[arg(long, default_value_t = 3)]
    win_length: usize,

    /// Search ply budget before the heuristic takes over (2-10)
    #[arg(long, default_value_t = 4)]
    depth: u32,

    /// Who moves first: 'h' for human, 'b' for bot
    #[arg(long, default_value = "h")]
    first: String,

    /// Resume from a board position, e.g. 'XX./OO./...'
    #[arg(long)]
    board: Option<String>,
}

fn parse_first(s: &str) -> Result<Occupant> {
    match s.to_lowercase().as_str() {
        "h" | "human" => Ok(Occupant::Human),
        "b" | "bot" => Ok(Occupant::Bot),
        _ => anyhow::bail!("Invalid first player: use 'h' or 'b'"),
    }
}

fn print_board(grid: &Grid) {
    print!("\n   ");
    for c in 0..grid.cols() {
        print!("{} ", c);
    }
    println!();
    for r in 0..grid.rows() {
        print!("{:>2} ", r);
        for c in 0..grid.cols() {
            print!("{} ", grid.get(r, c).to_char());
        }
        println!();
    }
    println!();
}

fn get_human_move(grid: &Grid) -> Result<Move> {
    loop {
        print!("Enter your move (row,col): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        let mv = match input.parse::<Move>() {
            Ok(mv) => mv,
            Err(_) => {
                println!("Invalid move format! Use format like '0,2'");
                continue;
            }
        };
        if !grid.in_bounds(mv.row, mv.col) {
            println!("Move is off the board!");
            continue;
        }
        if !grid.get(mv.row as usize, mv.col as usize).is_empty() {
            println!("That cell is already taken!");
            continue;
        }
        return Ok(mv);
    }
}

fn announce(outcome: MoveOutcome, mover: Occupant) -> bool {
    match outcome {
        MoveOutcome::Win => {
            match mover {
                Occupant::Human => println!("\nYou win!"),
                Occupant::Bot => println!("\nThe bot wins!"),
                Occupant::Empty => {}
            }
            true
        }
        MoveOutcome::Tie => {
            println!("\nIt's a tie!");
            true
        }
        MoveOutcome::Ongoing => false,
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let first = parse_first(&args.first)?;
    let cfg = GameConfig::new(args.rows, args.cols, args.win_length, args.depth);
    let engine = Engine::new(cfg)?;

    let mut grid = match &args.board {
        Some(text) => {
            let g: Grid = text.parse()?;
            if g.rows() != cfg.rows || g.cols() != cfg.cols {
                anyhow::bail!(
                    "Board is {}x{} but configuration says {}x{}",
                    g.rows(),
                    g.cols(),
                    cfg.rows,
                    cfg.cols
                );
            }
            g
        }
        None => Grid::new(cfg.rows, cfg.cols),
    };

    println!(
        "{}x{} board, {} in a row to win, search depth {}",
        cfg.rows, cfg.cols, cfg.win_length, cfg.search_depth
    );

    let mut turn = first;
    loop {
        let mv = if turn == Occupant::Human {
            print_board(&grid);
            get_human_move(&grid)?
        } else {
            let mv = engine.best_move(&grid);
            if !mv.is_valid() {
                println!("\nNo moves left - it's a tie!");
                break;
            }
            println!("Bot plays: {}", mv);
            mv
        };

        grid.set(mv.row as usize, mv.col as usize, turn);
        let outcome = engine.evaluate_move(&grid, turn, mv.row, mv.col);
        if announce(outcome, turn) {
            print_board(&grid);
            break;
        }

        turn = if turn == Occupant::Human { Occupant::Bot } else { Occupant::Human };
    }

    Ok(())
}
