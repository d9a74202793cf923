use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use last_token_ai::{BoardState, EASY_DEPTH, HARD_DEPTH, MEDIUM_DEPTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PlayerName {
    PlayerOne,
    PlayerTwo,
}

impl PlayerName {
    pub fn other(self) -> Self {
        match self {
            PlayerName::PlayerOne => PlayerName::PlayerTwo,
            PlayerName::PlayerTwo => PlayerName::PlayerOne,
        }
    }

    pub fn number(self) -> usize {
        match self {
            PlayerName::PlayerOne => 1,
            PlayerName::PlayerTwo => 2,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn search_depth(self) -> i32 {
        match self {
            Difficulty::Easy => EASY_DEPTH,
            Difficulty::Medium => MEDIUM_DEPTH,
            Difficulty::Hard => HARD_DEPTH,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
}

/// Returns the bin and the number of tokens taken between two boards, if
/// `after` follows `before` by a single legal move
pub fn describe_move(before: &BoardState, after: &BoardState) -> Option<(usize, u32)> {
    if before.num_bins() != after.num_bins() {
        return None;
    }
    let mut taken = None;
    for (bin, (&old, &new)) in before.bins().iter().zip(after.bins()).enumerate() {
        if old == new {
            continue;
        }
        if new > old || taken.is_some() {
            return None;
        }
        taken = Some((bin, old - new));
    }
    taken
}

#[derive(Clone)]
pub struct GameBoard {
    board: BoardState,
    pub to_move: PlayerName,
    pub num_moves: usize,
    pub state: GameState,
}

impl GameBoard {
    pub fn new(first: PlayerName) -> Self {
        Self::with_board(BoardState::default(), first)
    }

    pub fn with_board(board: BoardState, first: PlayerName) -> Self {
        Self {
            board,
            to_move: first,
            num_moves: 0,
            state: GameState::Playing,
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Removes `count` tokens from a bin numbered from 1
    pub fn play_checked(&mut self, bin_one_indexed: usize, count: u32) -> Result<GameState> {
        if bin_one_indexed < 1 || bin_one_indexed > self.board.num_bins() {
            return Err(anyhow!(
                "Invalid move, bin {} out of range. Bins must be between 1 and {}",
                bin_one_indexed,
                self.board.num_bins()
            ));
        }
        let bin = bin_one_indexed - 1;
        let available = self.board.bins()[bin];
        if count == 0 {
            return Err(anyhow!("Invalid move, at least one token must be taken"));
        }
        if count > available {
            return Err(anyhow!(
                "Invalid move, bin {} only holds {} tokens",
                bin_one_indexed,
                available
            ));
        }

        let mut bins = self.board.bins().to_vec();
        bins[bin] -= count;
        Ok(self.play(BoardState::from_counts(&bins)))
    }

    /// Replaces the board with one chosen by a computer player
    pub fn play_board(&mut self, next: BoardState) -> Result<GameState> {
        if describe_move(&self.board, &next).is_none() {
            return Err(anyhow!(
                "Invalid move, {} can't be reached from {}",
                next,
                self.board
            ));
        }
        Ok(self.play(next))
    }

    fn play(&mut self, next: BoardState) -> GameState {
        // whoever takes the last token loses
        if next.is_empty() {
            self.state = match self.to_move {
                PlayerName::PlayerOne => GameState::PlayerTwoWin,
                PlayerName::PlayerTwo => GameState::PlayerOneWin,
            };
        }
        self.board = next;
        self.num_moves += 1;
        self.to_move = self.to_move.other();
        self.state
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        stdout.queue(PrintStyledContent(style("\n")))?;
        for (idx, &count) in self.board.bins().iter().enumerate() {
            stdout.queue(PrintStyledContent(
                style(format!("{:>2} ", idx + 1)).attribute(Attribute::Bold),
            ))?;
            stdout.queue(PrintStyledContent(
                style("O ".repeat(count as usize))
                    .attribute(Attribute::Bold)
                    .with(Color::Yellow),
            ))?;
            stdout.queue(PrintStyledContent(
                style(format!("({})\n", count)).with(Color::DarkGrey),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn moves_are_described() {
        let before = BoardState::from_counts(&[3, 4, 5]);
        assert_eq!(
            describe_move(&before, &BoardState::from_counts(&[3, 1, 5])),
            Some((1, 3))
        );
        assert_eq!(describe_move(&before, &before), None);
        assert_eq!(
            describe_move(&before, &BoardState::from_counts(&[2, 3, 5])),
            None
        );
        assert_eq!(
            describe_move(&before, &BoardState::from_counts(&[3, 4, 6])),
            None
        );
    }

    #[test]
    fn human_moves() -> Result<()> {
        let mut board = GameBoard::with_board(BoardState::from_counts(&[1, 2]), PlayerName::PlayerOne);
        assert!(board.play_checked(0, 1).is_err());
        assert!(board.play_checked(3, 1).is_err());
        assert!(board.play_checked(1, 0).is_err());
        assert!(board.play_checked(1, 2).is_err());

        assert_eq!(board.play_checked(2, 2)?, GameState::Playing);
        assert_eq!(board.to_move, PlayerName::PlayerTwo);
        assert!(board.play_board(BoardState::from_counts(&[1, 1])).is_err());

        // player two takes the last token
        assert_eq!(board.play_checked(1, 1)?, GameState::PlayerOneWin);
        assert_eq!(board.num_moves, 2);
        Ok(())
    }
}
