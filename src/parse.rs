use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseSequenceError {
    #[error("invalid integer `{0}` in sequence")]
    InvalidInteger(String),
}

/// Parses a comma- or whitespace-separated list of integers. An input with
/// no tokens parses to an empty sequence.
pub fn parse_sequence(input: &str) -> Result<Vec<i64>, ParseSequenceError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| ParseSequenceError::InvalidInteger(token.to_string()))
        })
        .collect()
}
