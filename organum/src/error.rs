// error.rs defines the single error type shared by every modelled device
use std::fmt;

use crate::core::Address;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorType {
    /// Generic emulator failure, usually a misconfiguration.
    Emulator,
    /// An access that no device on the bus decodes.
    Bus,
    /// A write to read-only memory; debuggers stop here.
    Breakpoint,
    /// The firmware itself gave up; execution must halt.
    Panic,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    pub err: ErrorType,
    pub native: u32,
    pub msg: String,
}

impl Error {
    pub fn new(msg: &str) -> Error {
        Error {
            err: ErrorType::Emulator,
            native: 0,
            msg: msg.to_string(),
        }
    }

    pub fn bus(addr: Address) -> Error {
        Error {
            err: ErrorType::Bus,
            native: addr,
            msg: format!("No device decodes address {:08x}", addr),
        }
    }

    pub fn breakpoint(msg: &str) -> Error {
        Error {
            err: ErrorType::Breakpoint,
            native: 0,
            msg: msg.to_string(),
        }
    }

    pub fn panic(msg: &str) -> Error {
        Error {
            err: ErrorType::Panic,
            native: 0,
            msg: msg.to_string(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.err == ErrorType::Panic
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.err {
            ErrorType::Panic => write!(f, "PANIC: {}", self.msg),
            _ => write!(f, "{}", self.msg),
        }
    }
}

impl std::error::Error for Error {}
