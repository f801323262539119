//! Lazy loading of `;`-delimited order files.
//!
//! Every line has the shape `<id>;<description>;<amount>`, for example
//! `1;Widget;19.99`. There is no header row and no escaping, so a description
//! that itself contains `;` splits into the wrong fields.
//!
//! The loaders are iterators of `Result<Order>`: a line is parsed only when the
//! consumer asks for it, errors surface at the offending line, and the
//! iterator is exhausted after the first error.

use crate::adapters::LocalStorage;
use crate::domain::model::Order;
use crate::domain::ports::Storage;
use crate::utils::error::{OrderError, Result};
use rust_decimal::Decimal;
use std::iter::FusedIterator;
use std::str::FromStr;

/// File read by [`load_orders`], relative to the working directory.
pub const DEFAULT_ORDERS_FILE: &str = "1_9.csv";

pub const FIELD_DELIMITER: char = ';';

/// Parse a single line. `line_number` is 1-based and only used in errors.
///
/// Fields past the third are ignored. Whitespace around the numeric fields is
/// tolerated; the description is kept verbatim.
pub fn parse_line(line_number: usize, line: &str) -> Result<Order> {
    let mut fields = line.split(FIELD_DELIMITER);
    let mut next_field = |field: &'static str| {
        fields.next().ok_or(OrderError::MissingField {
            line: line_number,
            field,
        })
    };

    let id_text = next_field("id")?;
    let customer_name = next_field("customer_name")?;
    let amount_text = next_field("amount")?;

    let id = id_text
        .trim()
        .parse::<i32>()
        .map_err(|source| OrderError::InvalidId {
            line: line_number,
            value: id_text.to_string(),
            source,
        })?;
    let amount =
        Decimal::from_str(amount_text.trim()).map_err(|source| OrderError::InvalidAmount {
            line: line_number,
            value: amount_text.to_string(),
            source,
        })?;

    Ok(Order::new(id, customer_name, amount))
}

/// Advance past the next non-blank line of `text` starting at `cursor`.
///
/// `line` counts physical lines consumed so far, blanks included, so after a
/// hit it holds the 1-based number of the returned line. A trailing `\r` is
/// stripped.
fn next_line<'a>(text: &'a str, cursor: &mut usize, line: &mut usize) -> Option<&'a str> {
    while *cursor < text.len() {
        let rest = &text[*cursor..];
        let (raw, consumed) = match rest.find('\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        *cursor += consumed;
        *line += 1;

        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if !raw.trim().is_empty() {
            return Some(raw);
        }
    }
    None
}

/// Lazily parse order lines out of text that is already in memory.
pub fn parse_orders(text: &str) -> ParsedOrders<'_> {
    ParsedOrders {
        text,
        cursor: 0,
        line: 0,
        finished: false,
    }
}

pub struct ParsedOrders<'a> {
    text: &'a str,
    cursor: usize,
    line: usize,
    finished: bool,
}

impl Iterator for ParsedOrders<'_> {
    type Item = Result<Order>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(raw) = next_line(self.text, &mut self.cursor, &mut self.line) else {
            self.finished = true;
            return None;
        };
        let result = parse_line(self.line, raw);
        self.finished = result.is_err();
        Some(result)
    }
}

impl FusedIterator for ParsedOrders<'_> {}

/// Load orders from [`DEFAULT_ORDERS_FILE`] in the working directory.
///
/// Nothing is read until the first call to `next`; a missing file shows up as
/// the first item, `Err(OrderError::FileNotFound)`.
pub fn load_orders() -> OrderLoader<LocalStorage> {
    load_orders_from(DEFAULT_ORDERS_FILE)
}

pub fn load_orders_from(path: impl Into<String>) -> OrderLoader<LocalStorage> {
    OrderLoader::new(LocalStorage::current_dir(), path)
}

enum LoaderState {
    Unread,
    Parsing {
        text: String,
        cursor: usize,
        line: usize,
    },
    Done,
}

/// Order file reader over any [`Storage`].
///
/// The whole file is read on the first `next`, then each call parses one more
/// line.
pub struct OrderLoader<S: Storage> {
    storage: S,
    path: String,
    state: LoaderState,
}

impl<S: Storage> OrderLoader<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
            state: LoaderState::Unread,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<S: Storage> Iterator for OrderLoader<S> {
    type Item = Result<Order>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, LoaderState::Unread) {
            match self.storage.read_to_string(&self.path) {
                Ok(text) => {
                    tracing::debug!("Loaded {} bytes from {}", text.len(), self.path);
                    self.state = LoaderState::Parsing {
                        text,
                        cursor: 0,
                        line: 0,
                    };
                }
                Err(e) => {
                    self.state = LoaderState::Done;
                    return Some(Err(e));
                }
            }
        }

        let LoaderState::Parsing { text, cursor, line } = &mut self.state else {
            return None;
        };

        let Some(raw) = next_line(text, cursor, line) else {
            self.state = LoaderState::Done;
            return None;
        };

        let result = parse_line(*line, raw);
        match &result {
            Ok(order) => tracing::trace!("Parsed order {}", order.id),
            Err(e) => {
                tracing::debug!("Stopping at {}: {}", self.path, e);
                self.state = LoaderState::Done;
            }
        }
        Some(result)
    }
}

impl<S: Storage> FusedIterator for OrderLoader<S> {}
