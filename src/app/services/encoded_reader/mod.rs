//! Encoding-detecting CSV reader
//!
//! Raw exports arrive with an unknown text encoding. This module tries a
//! configured priority list of encodings, decodes strictly (a single malformed
//! byte sequence rejects the candidate) and parses the first successful
//! decode into a fixed-width positional row set. Rows whose physical column
//! count deviates from the expected layout are dropped with a warning rather
//! than failing the file.

pub mod decoder;
pub mod reader;

#[cfg(test)]
pub mod tests;

pub use decoder::{decode_strict, resolve_encoding};
pub use reader::{EncodingDetectingReader, PositionalRow, PositionalRowSet};
