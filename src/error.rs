use std::io;

use thiserror::Error;

/// Failures of a single peg's stack operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PegError {
    #[error("peg {label} has no disks")]
    Empty { label: char },

    #[error("peg {label} holds {len} disks, no disk at position {index}")]
    OutOfRange { label: char, index: usize, len: usize },

    #[error("cannot place disk {disk} on top of disk {top} on peg {label}")]
    Oversized { label: char, disk: u32, top: u32 },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("illegal move: {0}")]
    Peg(#[from] PegError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("input stream closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, Error>;
