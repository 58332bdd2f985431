use crate::list::{ListModel, ModelError};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Node values must not be empty")]
    EmptyInput,

    #[error("Node value '{token}' is not a valid integer")]
    InvalidToken { token: String },

    #[error("Cycle entry '{text}' is not a valid integer or -1")]
    InvalidEntry { text: String },

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Parse a comma-separated list of integer node values, e.g. `"3, 2, 0, -4"`.
pub fn parse_values(text: &str) -> Result<Vec<i64>, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }
    text.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<i64>().map_err(|_| ParseError::InvalidToken {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parse the cycle-entry field. Empty text and `-1` both mean "no cycle".
pub fn parse_entry(text: &str) -> Result<Option<usize>, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    match text.parse::<i64>() {
        Ok(-1) => Ok(None),
        Ok(n) if n >= 0 => Ok(Some(n as usize)),
        _ => Err(ParseError::InvalidEntry {
            text: text.to_string(),
        }),
    }
}

/// Parse both free-text fields into a validated model.
pub fn parse_model(values_text: &str, entry_text: &str) -> Result<ListModel, ParseError> {
    let values = parse_values(values_text)?;
    let entry = parse_entry(entry_text)?;
    Ok(ListModel::new(values, entry)?)
}
