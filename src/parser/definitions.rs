use std::io::{self, BufRead};

use tracing::debug;

use super::declaration::{parse_line, Declaration, ParseError};
use super::markers::Markers;

#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("failed to read definitions: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {source}: `{text}`")]
    Malformed {
        line : usize,
        text : String,
        #[source]
        source : ParseError,
    },
}

/// Walks a definitions file one declaration line at a time.
pub struct DefinitionsReader<R> {
    lines : io::Lines<R>,
    line_number : usize,
    markers : Markers,
}

impl<R : BufRead> DefinitionsReader<R> {
    pub fn new(reader : R, markers : Markers) -> Self {
        Self { lines : reader.lines(), line_number : 0, markers }
    }
}

impl<R : BufRead> Iterator for DefinitionsReader<R> {
    type Item = Result<Declaration, DefinitionError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_number += 1;

            if text.trim().is_empty() {
                debug!(line = self.line_number, "skipping blank line");
                continue;
            }

            let parsed = parse_line(&text, &self.markers)
                .map_err(|source| DefinitionError::Malformed {
                    line : self.line_number,
                    text : text.clone(),
                    source,
                });
            return Some(parsed);
        }
    }
}
