//! Decoders that turn an uploaded file into a [`Table`](crate::types::Table).

mod base;
mod table_decoder;
mod text_decoder;

pub use base::{decode_utf8, Decoder};
pub use table_decoder::TableDecoder;
pub use text_decoder::PlainTextDecoder;
