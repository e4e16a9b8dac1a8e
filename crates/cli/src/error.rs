//! CLI error type and exit codes.

use sova_home_checkout::{CartTooLarge, CompleteError, TransitionError};
use thiserror::Error;

use crate::files::FileError;

/// Errors that end a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Cart(#[from] CartTooLarge),

    /// The order form failed validation; messages were already printed.
    #[error("order form has {0} invalid field(s)")]
    InvalidOrder(usize),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("could not place order: {0}")]
    Complete(#[from] CompleteError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code: 2 for a rejected order form, 1 otherwise.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidOrder(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::InvalidOrder(3).exit_code(), 2);
        assert_eq!(CliError::Cart(CartTooLarge).exit_code(), 1);

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(CliError::Output(io).exit_code(), 1);
    }

    #[test]
    fn test_cart_too_large_message() {
        let err = CliError::from(CartTooLarge);
        assert!(err.to_string().starts_with("cart total exceeds NT$ 18,446,744,073,709,551,615"));
    }
}
