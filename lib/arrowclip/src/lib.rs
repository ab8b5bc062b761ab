//! Converts ArrowVortex tempo timelines and note selections to and from the
//! text that the editor places on the clipboard.
//!
//! Each payload is a magic prefix (`ArrowVortex:tempo:` or
//! `ArrowVortex:notes:`) followed by an ascii85 rendition of a small binary
//! layout:
//!
//! - tempo: blocks of `[count:u8][type:u8]` followed by `count` pairs of
//!   `[tick:u32][value:f64]`, ended by a zero count.
//! - notes: `[header:u8][count:varint]` followed by one short-form
//!   (`[column][tick]`) or long-form (`[column | 0x80][start][end][special]`)
//!   record per note.

pub mod config;
pub mod encoding;
pub mod note;
pub mod tempo;

pub use config::CodecConfig;
pub use encoding::{
    decode_clipboard, decode_notes, decode_tempo, encode_notes, encode_notes_with, encode_tempo,
    encode_tempo_with, ClipboardData, DecodeError, DecodeErrorKind, DecodeResult, PayloadKind,
};
pub use note::{Note, NoteKind};
pub use tempo::{StopPoint, TempoPoint};
