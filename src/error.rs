// Copyright (C) 2020-2026 Andy Kurnia.

pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error + Send + Sync>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

// Rejections are expected misuse. They leave the game untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    OccupiedCell { x: i8, y: i8 },
    OutOfBounds { x: i8, y: i8 },
    NoSuchPendingTile { x: i8, y: i8 },
    IndexOutOfRange { index: usize, len: usize },
    NonCollinearPlacement,
    NoWordsFormed,
    InvalidWords(Vec<String>),
    TradeAfterPlacement,
    NothingToTrade,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::OccupiedCell { x, y } => write!(f, "cell ({}, {}) is occupied", x, y),
            Rejection::OutOfBounds { x, y } => write!(f, "cell ({}, {}) is off the board", x, y),
            Rejection::NoSuchPendingTile { x, y } => {
                write!(f, "no tile placed this turn at ({}, {})", x, y)
            }
            Rejection::IndexOutOfRange { index, len } => {
                write!(f, "tray index {} out of range (tray has {})", index, len)
            }
            Rejection::NonCollinearPlacement => {
                write!(f, "Invalid tile placement - must be in line")
            }
            Rejection::NoWordsFormed => write!(f, "No valid words formed"),
            Rejection::InvalidWords(words) => write!(f, "Invalid words: {}", words.join(", ")),
            Rejection::TradeAfterPlacement => write!(f, "Cannot trade tiles after placing tiles"),
            Rejection::NothingToTrade => write!(f, "No tiles selected for trade"),
        }
    }
}

impl std::error::Error for Rejection {}
