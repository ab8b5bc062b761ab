use log::{debug, warn};

use super::*;
use crate::{
    config::CodecConfig,
    note::{Note, NoteKind, Special},
};

/// Reserved for format flags; always written as 0 and ignored when read.
const NOTES_HEADER: u8 = 0;

const LONG_FORM_BIT: u8 = 0b1000_0000;
const COLUMN_MASK: u8 = 0b0111_1111;

fn write_long_form(writer: &mut ByteWriter, column: u8, start: u64, end: u64, special: u8) {
    writer.write_u8(column | LONG_FORM_BIT);
    writer.write_varint(start);
    writer.write_varint(end);
    writer.write_u8(special);
}

fn write_note(writer: &mut ByteWriter, note: &Note) {
    let column = note.column();
    match *note.kind() {
        NoteKind::Step { tick } => {
            writer.write_u8(column & COLUMN_MASK);
            writer.write_varint(tick);
        }
        NoteKind::Mine { tick } => {
            write_long_form(writer, column, tick, tick, Special::Mine as u8)
        }
        NoteKind::Lift { tick } => {
            write_long_form(writer, column, tick, tick, Special::Lift as u8)
        }
        NoteKind::Fake { tick } => {
            write_long_form(writer, column, tick, tick, Special::Fake as u8)
        }
        NoteKind::Hold { start, end } => {
            write_long_form(writer, column, start, end, Special::Hold as u8)
        }
        NoteKind::Roll { start, end } => {
            write_long_form(writer, column, start, end, Special::Roll as u8)
        }
        NoteKind::Unknown {
            start,
            end,
            special,
        } => write_long_form(writer, column, start, end, special),
    }
}

fn read_note(reader: &mut ByteReader<'_>) -> DecodeResult<Note> {
    let control = reader.read_u8()?;
    let column = control & COLUMN_MASK;

    if control & LONG_FORM_BIT == 0 {
        let tick = reader.read_varint()?;
        return Ok(Note::step(tick, column));
    }

    let start = reader.read_varint()?;
    let end = reader.read_varint()?;
    let special = reader.read_u8()?;
    Ok(Note::from_long_form(start, end, column, special))
}

pub fn encode_notes(notes: &[Note]) -> String {
    encode_notes_with(&CodecConfig::default(), notes)
}

/// Serializes notes, in the given order, into `ArrowVortex:notes:` text.
pub fn encode_notes_with(config: &CodecConfig, notes: &[Note]) -> String {
    // a step needs at least two bytes, anything else at least four
    let mut writer = ByteWriter::with_capacity(2 + notes.len() * 4);
    writer.write_u8(NOTES_HEADER);
    writer.write_varint(notes.len() as u64);
    for note in notes {
        write_note(&mut writer, note);
    }

    debug!("encoded {} note(s) into {} bytes", notes.len(), writer.len());
    PayloadKind::Notes.wrap_bytes(config, &writer.into_inner())
}

/// Parses `ArrowVortex:notes:` text back into notes, in payload order.
///
/// Long-form records with a special byte this crate does not know are kept
/// as [`NoteKind::Unknown`] rather than rejected.
pub fn decode_notes(text: &str) -> DecodeResult<Vec<Note>> {
    let bytes = PayloadKind::Notes.unwrap_text(text)?;
    let mut reader = ByteReader::new(&bytes);

    let _header = reader.read_u8()?;
    let count = reader.read_varint()?;

    // the count is untrusted, so never reserve more than the payload could hold
    let capacity = usize::try_from(count)
        .unwrap_or(usize::MAX)
        .min(reader.remaining() / 2);
    let mut notes = Vec::with_capacity(capacity);
    for _ in 0..count {
        notes.push(read_note(&mut reader)?);
    }

    let unknown = notes
        .iter()
        .filter(|note| matches!(note.kind(), NoteKind::Unknown { .. }))
        .count();
    if unknown > 0 {
        warn!("decoded {} note(s) of unknown kind", unknown);
    }
    debug!("decoded {} note(s)", notes.len());
    Ok(notes)
}
