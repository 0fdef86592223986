//! Line-oriented session commands mapped onto the four hotel operations.
//!
//! ```text
//! book 3      reserve three rooms
//! random      randomize occupancy
//! reset       fresh hotel
//! show        floor map
//! status      occupancy counts
//! help | quit
//! ```

use hotelbook_logic::occupancy::{BookingReport, Hotel, OccupancySummary};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Book(i64),
    Random,
    Reset,
    Show,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingCount,
    BadCount(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::Unknown(word) => write!(f, "unknown command '{}' (try 'help')", word),
            CommandError::MissingCount => write!(f, "usage: book <count>"),
            CommandError::BadCount(raw) => write!(f, "'{}' is not a room count", raw),
        }
    }
}

impl std::error::Error for CommandError {}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(CommandError::Empty);
    };
    match head.to_ascii_lowercase().as_str() {
        "book" | "b" => {
            let raw = words.next().ok_or(CommandError::MissingCount)?;
            // Out-of-range counts parse fine; the hotel rejects them.
            raw.parse::<i64>()
                .map(Command::Book)
                .map_err(|_| CommandError::BadCount(raw.to_string()))
        }
        "random" | "randomize" => Ok(Command::Random),
        "reset" => Ok(Command::Reset),
        "show" | "map" => Ok(Command::Show),
        "status" => Ok(Command::Status),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// What a command produced, for the caller to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Booking(BookingReport),
    Summary(OccupancySummary),
    Map,
    Notice(&'static str),
    Quit,
}

pub fn apply<R: Rng + ?Sized>(hotel: &mut Hotel, command: Command, rng: &mut R) -> Outcome {
    match command {
        Command::Book(count) => Outcome::Booking(BookingReport::from(hotel.book(count))),
        Command::Random => {
            hotel.randomize_occupancy(rng);
            Outcome::Map
        }
        Command::Reset => {
            hotel.reset();
            Outcome::Notice("hotel reset, all rooms free")
        }
        Command::Show => Outcome::Map,
        Command::Status => Outcome::Summary(hotel.summary()),
        Command::Help => Outcome::Notice(
            "commands: book <1-5>, random, reset, show, status, help, quit",
        ),
        Command::Quit => Outcome::Quit,
    }
}
