use anyhow::Result;

use std::io::{stdin, stdout, Stdin, Write};
use std::time::Duration;

use last_token_ai::*;

mod game;
use game::*;

mod tournament;

/// Pause before each computer move when no human is playing
const AI_THINK_DELAY: Duration = Duration::from_secs(1);

fn prompt(stdin: &Stdin, question: &str) -> Result<String> {
    print!("{}", question);
    stdout().flush().expect("failed to flush to stdout!");
    let mut buffer = String::new();
    stdin.read_line(&mut buffer)?;
    Ok(buffer)
}

fn ask_yes_no(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let answer = prompt(stdin, question)?;
        match answer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn ask_difficulty(stdin: &Stdin, player: PlayerName) -> Result<Difficulty> {
    loop {
        let question = format!(
            "Difficulty for player {}? (e)asy/(m)edium/(h)ard: ",
            player.number()
        );
        match prompt(stdin, &question)?.to_lowercase().chars().next() {
            Some(_letter @ 'e') => return Ok(Difficulty::Easy),
            Some(_letter @ 'm') => return Ok(Difficulty::Medium),
            Some(_letter @ 'h') => return Ok(Difficulty::Hard),
            _ => println!("Unknown answer given"),
        }
    }
}

fn run_tournament(stdin: &Stdin) -> Result<()> {
    let games_per_pairing = loop {
        let answer = prompt(
            stdin,
            &format!(
                "Games per pairing (default {}): ",
                tournament::DEFAULT_GAMES_PER_PAIRING
            ),
        )?;
        let answer = answer.trim();
        if answer.is_empty() {
            break tournament::DEFAULT_GAMES_PER_PAIRING;
        }
        match answer.parse::<usize>() {
            Ok(games) if games > 0 => break games,
            _ => println!("Invalid number: {}", answer),
        }
    };

    let statistics = tournament::run(&BoardState::default(), games_per_pairing)?;
    println!();
    statistics.display();
    Ok(())
}

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Don't Take The Last Token\n");

    if ask_yes_no(&stdin, "Run a computer tournament instead of a game? y/n: ")? {
        return run_tournament(&stdin);
    }

    let mut ai_players: (Option<Difficulty>, Option<Difficulty>) = (None, None);

    // choose AI control of player 1
    if ask_yes_no(&stdin, "Is player 1 AI controlled? y/n: ")? {
        ai_players.0 = Some(ask_difficulty(&stdin, PlayerName::PlayerOne)?);
    }

    // choose AI control of player 2
    if ask_yes_no(&stdin, "Is player 2 AI controlled? y/n: ")? {
        ai_players.1 = Some(ask_difficulty(&stdin, PlayerName::PlayerTwo)?);
    }

    let mut board = GameBoard::new(PlayerName::PlayerOne);

    // game loop
    loop {
        board.display().expect("Failed to draw board!");

        match board.state {
            GameState::Playing => {
                let player = board.to_move;
                let difficulty = match player {
                    PlayerName::PlayerOne => ai_players.0,
                    PlayerName::PlayerTwo => ai_players.1,
                };

                match difficulty {
                    // AI player
                    Some(difficulty) => {
                        println!("AI is thinking...");
                        stdout().flush().expect("Failed to flush to stdout!");

                        // slow down play if both players are AI
                        if ai_players.0.is_some() && ai_players.1.is_some() {
                            std::thread::sleep(AI_THINK_DELAY);
                        }

                        let mut solver =
                            Solver::new(board.board().clone(), difficulty.search_depth())?;
                        let next = solver.solve()?;

                        if let Some((bin, count)) = describe_move(board.board(), &next) {
                            println!(
                                "Player {} takes {} from bin {}",
                                player.number(),
                                count,
                                bin + 1
                            );
                        }
                        board.play_board(next)?;
                    }

                    // human player
                    None => {
                        let input_str = prompt(&stdin, "Move input (bin count) > ")?;
                        let mut parts = input_str.split_whitespace();
                        let parsed = match (parts.next(), parts.next(), parts.next()) {
                            (Some(bin), Some(count), None) => {
                                bin.parse::<usize>().ok().zip(count.parse::<u32>().ok())
                            }
                            _ => None,
                        };
                        let (bin, count) = match parsed {
                            Some(parsed) => parsed,
                            None => {
                                println!("Invalid move: {}", input_str.trim());
                                continue;
                            }
                        };

                        if let Err(err) = board.play_checked(bin, count) {
                            println!("{}", err);
                            // try the move again
                            continue;
                        }
                    }
                }
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 2 took the last token. Player 1 wins!");
                break;
            }
            GameState::PlayerTwoWin => {
                println!("Player 1 took the last token. Player 2 wins!");
                break;
            }
        }
    }
    Ok(())
}
