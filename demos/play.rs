//! Play a game on the console.
//!
//! ```text
//! cargo run --example play -- --dictionary words.txt ann bob
//! ```
//! Set `RUST_LOG=debug` to see why a word is rejected.
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use wordgame_engine::{Board, Game, Lexicon, Orientation, BOARD_SIZE};

/// Word game for two or more players on one console.
#[derive(Debug, Parser)]
struct Opts {
    /// Dictionary file, one word per whitespace separated token
    #[arg(short, long, default_value = "italiano.txt")]
    dictionary: String,

    /// Seed for the tile draws
    #[arg(short, long)]
    seed: Option<u64>,

    /// Names of the players
    #[arg(required = true)]
    players: Vec<String>,
}

fn show(board: &Board) {
    print!("   ");
    for col in 0..BOARD_SIZE {
        print!("{:2} ", col);
    }
    println!();
    for (i, row) in board.rows().iter().enumerate() {
        print!("{:2} ", i);
        for cell in row.iter() {
            print!(" {} ", cell);
        }
        println!();
    }
}

/// Print `msg` and read one line, or None at end of input.
fn prompt<B: BufRead>(input: &mut B, msg: &str) -> Result<Option<String>> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn read_move<B: BufRead>(input: &mut B) -> Result<Option<(usize, usize, Orientation)>> {
    let coords = match prompt(input, "Enter starting coordinates (row and column): ")? {
        Some(line) => line,
        None => return Ok(None),
    };
    let mut it = coords.split_whitespace().map(str::parse::<usize>);
    let (row, col) = match (it.next(), it.next()) {
        (Some(Ok(row)), Some(Ok(col))) => (row, col),
        _ => anyhow::bail!("expected two numbers, got \"{}\"", coords),
    };
    let direction = match prompt(input, "Enter direction (H for horizontal, V for vertical): ")? {
        Some(line) => line,
        None => return Ok(None),
    };
    Ok(Some((row, col, direction.parse()?)))
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let opts = Opts::parse();

    let lexicon = Lexicon::from_file(&opts.dictionary)
        .with_context(|| format!("loading dictionary {}", opts.dictionary))?;
    println!("{}", lexicon);
    let mut game = Game::new(lexicon);
    if let Some(seed) = opts.seed {
        game = game.with_seed(seed);
    }
    let names: Vec<&str> = opts.players.iter().map(String::as_str).collect();
    let mut game = game.with_players(&names)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        println!();
        show(game.board());
        println!();
        let player = game.current_player().context("no players")?;
        println!("It's {}'s turn.", player.name());
        println!("Your letters: {}", player.rack());
        if let Some(s) = game.suggest() {
            println!("Suggested word: {} ({} points)", s.word, s.score);
        }

        let word = match prompt(&mut input, "Enter word (or 'PASS' to skip): ")? {
            Some(word) => word,
            None => return Ok(()),
        };
        if word.eq_ignore_ascii_case("PASS") {
            game.pass();
            continue;
        }
        let (row, col, orientation) = match read_move(&mut input) {
            Ok(Some(mv)) => mv,
            Ok(None) => return Ok(()),
            Err(err) => {
                println!("{}. Try again.", err);
                continue;
            }
        };
        let turn = game.turn();
        match game.play(&word, row, col, orientation) {
            Ok(score) => {
                let player = &game.players()[turn];
                println!(
                    "\n{} scores {}, total {}",
                    player.name(),
                    score,
                    player.score()
                );
            }
            Err(err) => println!("{}. Try again.", err),
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
