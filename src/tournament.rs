use anyhow::{anyhow, Result};
use indicatif::*;
use rayon::prelude::*;

use std::sync::mpsc::*;
use std::thread;
use std::time::*;

use last_token_ai::{solver::choose_move, BoardState, EngineError};

use crate::game::{Difficulty, PlayerName};

pub const DEFAULT_GAMES_PER_PAIRING: usize = 100;

pub const NUM_PAIRINGS: usize = 6;

/// Difficulties of player one and player two for each round of the tournament
pub const PAIRINGS: [(Difficulty, Difficulty); NUM_PAIRINGS] = [
    (Difficulty::Easy, Difficulty::Easy),
    (Difficulty::Medium, Difficulty::Medium),
    (Difficulty::Hard, Difficulty::Hard),
    (Difficulty::Easy, Difficulty::Medium),
    (Difficulty::Easy, Difficulty::Hard),
    (Difficulty::Medium, Difficulty::Hard),
];

/// Win counts per pairing and player
#[derive(Clone, Default, Debug)]
pub struct Statistics {
    wins: [[usize; 2]; NUM_PAIRINGS],
}

impl Statistics {
    pub fn record(&mut self, pairing: usize, winner: PlayerName) {
        self.wins[pairing][winner.number() - 1] += 1;
    }

    pub fn wins(&self, pairing: usize, player: PlayerName) -> usize {
        self.wins[pairing][player.number() - 1]
    }

    pub fn games(&self, pairing: usize) -> usize {
        self.wins[pairing].iter().sum()
    }

    pub fn display(&self) {
        println!(
            "{:<16} {:>8} {:>10} {:>10}",
            "Pairing", "Games", "Player 1", "Player 2"
        );
        for (pairing, (one, two)) in PAIRINGS.iter().enumerate() {
            println!(
                "{:<16} {:>8} {:>10} {:>10}",
                format!("{}/{}", one.name(), two.name()),
                self.games(pairing),
                self.wins(pairing, PlayerName::PlayerOne),
                self.wins(pairing, PlayerName::PlayerTwo)
            );
        }
    }
}

/// Plays a game between two computer players, returning the winner
pub fn play_game(
    start: &BoardState,
    first: PlayerName,
    depths: (i32, i32),
) -> Result<PlayerName, EngineError> {
    let mut board = start.clone();
    let mut player = first;
    loop {
        let depth = match player {
            PlayerName::PlayerOne => depths.0,
            PlayerName::PlayerTwo => depths.1,
        };
        board = choose_move(board, depth)?;
        // the player who took the last token loses
        if board.is_empty() {
            return Ok(player.other());
        }
        player = player.other();
    }
}

enum Message {
    Game((usize, Result<PlayerName, EngineError>)),
    Finish,
}

/// Plays every `(pairing, first player)` job in parallel, sending each result to `tx`
///
/// Stops handing out games as soon as the receiver hangs up.
fn play_games(
    jobs: &[(usize, PlayerName)],
    start: &BoardState,
    tx: Sender<Message>,
) -> Result<(), SendError<Message>> {
    jobs.par_iter()
        .try_for_each_with(tx.clone(), |tx, &(pairing, first)| {
            let (one, two) = PAIRINGS[pairing];
            let depths = (one.search_depth(), two.search_depth());
            tx.send(Message::Game((pairing, play_game(start, first, depths))))
        })?;
    tx.send(Message::Finish)
}

/// Plays `games_per_pairing` games for every pairing in parallel, alternating the first player
pub fn run(start: &BoardState, games_per_pairing: usize) -> Result<Statistics> {
    let (tx, rx) = channel();

    let mut jobs = Vec::with_capacity(NUM_PAIRINGS * games_per_pairing);
    for pairing in 0..NUM_PAIRINGS {
        for game in 0..games_per_pairing {
            let first = if game % 2 == 0 {
                PlayerName::PlayerOne
            } else {
                PlayerName::PlayerTwo
            };
            jobs.push((pairing, first));
        }
    }

    let progress = ProgressBar::new(jobs.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {msg} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let start = start.clone();
    // the receiver only hangs up after a failed game, which ends the workers too
    thread::spawn(move || play_games(&jobs, &start, tx));

    let started = Instant::now();
    let mut next_time = started;
    let mut statistics = Statistics::default();
    let mut delta = 0;
    loop {
        match rx.recv()? {
            Message::Finish => break,
            Message::Game((pairing, result)) => {
                let winner = result.map_err(|err| anyhow!("game failed: {}", err))?;
                statistics.record(pairing, winner);
                delta += 1;
            }
        }
        if Instant::now() > next_time {
            progress.inc(delta);
            delta = 0;
            progress.set_message(&format!(
                "({} / {})",
                progress.position(),
                progress.length()
            ));
            next_time += Duration::from_millis(100);
        }
    }

    progress.finish();
    println!(
        "Tournament completed in {}",
        HumanDuration(Instant::now() - started)
    );
    Ok(statistics)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_token_loses() -> Result<()> {
        let start = BoardState::from_counts(&[1]);
        let winner = play_game(&start, PlayerName::PlayerOne, (3, 3))?;
        assert_eq!(winner, PlayerName::PlayerTwo);
        Ok(())
    }

    #[test]
    fn perfect_players() -> Result<()> {
        // [1 2] is a first player win with enough depth
        let start = BoardState::from_counts(&[1, 2]);
        assert_eq!(
            play_game(&start, PlayerName::PlayerTwo, (3, 3))?,
            PlayerName::PlayerTwo
        );
        assert_eq!(
            play_game(&start, PlayerName::PlayerOne, (3, 3))?,
            PlayerName::PlayerOne
        );
        Ok(())
    }

    #[test]
    fn failed_games_end_the_tournament() -> Result<()> {
        // no legal move from an empty board
        let empty = BoardState::from_counts(&[0, 0]);
        assert!(play_game(&empty, PlayerName::PlayerOne, (2, 2)).is_err());
        assert!(run(&empty, 3).is_err());
        Ok(())
    }

    #[test]
    fn workers_stop_without_a_receiver() -> Result<()> {
        let jobs = vec![(0, PlayerName::PlayerOne); 64];
        let (tx, rx) = channel();
        drop(rx);
        assert!(play_games(&jobs, &BoardState::from_counts(&[1, 2]), tx).is_err());

        let (tx, rx) = channel();
        play_games(&jobs[..4], &BoardState::from_counts(&[1, 2]), tx)
            .map_err(|_| anyhow!("receiver hung up"))?;
        let messages: Vec<Message> = rx.iter().collect();
        assert_eq!(messages.len(), 5);
        assert!(matches!(messages.last(), Some(Message::Finish)));
        Ok(())
    }

    #[test]
    fn tournament_counts_every_game() -> Result<()> {
        let statistics = run(&BoardState::from_counts(&[1, 2, 2]), 4)?;
        for pairing in 0..NUM_PAIRINGS {
            assert_eq!(statistics.games(pairing), 4);
        }
        Ok(())
    }
}
