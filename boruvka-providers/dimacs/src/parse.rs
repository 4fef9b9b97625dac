//! Token helpers shared by the line-oriented readers.
use std::str::{FromStr, SplitWhitespace};

use crate::errors::GraphSourceError;

/// Whitespace-separated fields of one input line.
pub(crate) struct Fields<'a> {
    line: usize,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(line: usize, text: &'a str) -> Self {
        Self {
            line,
            tokens: text.split_whitespace(),
        }
    }

    pub(crate) const fn line(&self) -> usize {
        self.line
    }

    /// Returns the leading token, or `None` for a blank line.
    pub(crate) fn kind(&mut self) -> Option<&'a str> {
        self.tokens.next()
    }

    /// Parses the next token as `T`, naming the field in the error.
    pub(crate) fn next<T: FromStr>(&mut self, field: &str) -> Result<T, GraphSourceError> {
        let token = self
            .tokens
            .next()
            .ok_or_else(|| self.malformed(format!("missing {field}")))?;
        token
            .parse()
            .map_err(|_| self.malformed(format!("invalid {field} `{token}`")))
    }

    /// Parses the next token as a finite weight.
    pub(crate) fn weight(&mut self) -> Result<f64, GraphSourceError> {
        let weight: f64 = self.next("weight")?;
        if weight.is_finite() {
            Ok(weight)
        } else {
            Err(self.malformed(format!("weight `{weight}` is not finite")))
        }
    }

    /// Fails when tokens remain on the line.
    pub(crate) fn finish(mut self) -> Result<(), GraphSourceError> {
        match self.tokens.next() {
            Some(extra) => Err(self.malformed(format!("unexpected trailing field `{extra}`"))),
            None => Ok(()),
        }
    }

    pub(crate) fn malformed(&self, reason: String) -> GraphSourceError {
        GraphSourceError::Malformed {
            line: self.line,
            reason,
        }
    }
}
