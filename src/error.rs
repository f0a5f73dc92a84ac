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

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

// Rejected move submissions. The board is untouched when one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    InvalidPlace(String),
    PatternMismatch {
        row: i8,
        col: i8,
        expected: char,
        found: char,
    },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::InvalidPlace(s) => write!(f, "invalid place: {}", s),
            MoveError::PatternMismatch {
                row,
                col,
                expected,
                found,
            } => write!(
                f,
                "pattern mismatch at ({}, {}): board has {:?}, word has {:?}",
                row, col, expected, found
            ),
        }
    }
}

impl std::error::Error for MoveError {}
