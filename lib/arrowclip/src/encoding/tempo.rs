use int_enum::IntEnum;
use itertools::Itertools;
use log::{debug, trace};

use super::*;
use crate::{
    config::CodecConfig,
    tempo::{StopPoint, TempoPoint},
};

/// The largest number of entries in one block. A count byte of 0 ends the
/// payload, and 255 is never written.
pub const TEMPO_BLOCK_LEN: usize = 254;

// count + type
const BLOCK_HEADER_LEN: usize = 2;
// tick + value
const BLOCK_ENTRY_LEN: usize = 12;

#[derive(IntEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BlockType {
    Bpm = 0,
    Stop = 1,
}

fn write_blocks(writer: &mut ByteWriter, block_type: BlockType, entries: &[(u32, f64)]) {
    for block in entries.chunks(TEMPO_BLOCK_LEN) {
        trace!("writing {:?} block of {} entries", block_type, block.len());
        writer.write_u8(block.len() as u8);
        writer.write_u8(block_type as u8);
        for (tick, value) in block {
            writer.write_u32(*tick);
            writer.write_f64(*value);
        }
    }
}

fn encoded_len(entries: usize) -> usize {
    entries.div_ceil(TEMPO_BLOCK_LEN) * BLOCK_HEADER_LEN + entries * BLOCK_ENTRY_LEN
}

pub fn encode_tempo(bpms: &[TempoPoint], stops: &[StopPoint]) -> String {
    encode_tempo_with(&CodecConfig::default(), bpms, stops)
}

/// Serializes tempo changes and stops, each sorted by tick (stably, so that
/// entries sharing a tick keep their order), into `ArrowVortex:tempo:` text.
pub fn encode_tempo_with(
    config: &CodecConfig,
    bpms: &[TempoPoint],
    stops: &[StopPoint],
) -> String {
    let bpms = bpms
        .iter()
        .map(|point| (point.tick, point.bpm))
        .sorted_by_key(|(tick, _)| *tick)
        .collect::<Vec<_>>();
    let stops = stops
        .iter()
        .map(|point| (point.tick, point.seconds))
        .sorted_by_key(|(tick, _)| *tick)
        .collect::<Vec<_>>();

    let mut writer =
        ByteWriter::with_capacity(encoded_len(bpms.len()) + encoded_len(stops.len()) + 1);
    write_blocks(&mut writer, BlockType::Bpm, &bpms);
    write_blocks(&mut writer, BlockType::Stop, &stops);
    writer.write_u8(0);

    debug!(
        "encoded {} tempo change(s) and {} stop(s) into {} bytes",
        bpms.len(),
        stops.len(),
        writer.len()
    );
    PayloadKind::Tempo.wrap_bytes(config, &writer.into_inner())
}

/// Parses `ArrowVortex:tempo:` text back into tempo changes and stops, in the
/// order they appear in the payload.
pub fn decode_tempo(text: &str) -> DecodeResult<(Vec<TempoPoint>, Vec<StopPoint>)> {
    let bytes = PayloadKind::Tempo.unwrap_text(text)?;
    let mut reader = ByteReader::new(&bytes);

    let mut bpms = Vec::new();
    let mut stops = Vec::new();

    loop {
        let count = reader.read_u8()?;
        if count == 0 {
            break;
        }

        let type_offset = reader.offset();
        let block_type = BlockType::try_from(reader.read_u8()?).map_err(|block_type| {
            DecodeError::UnknownBlockType {
                block_type,
                offset: type_offset,
            }
        })?;
        trace!(
            "reading {:?} block of {} entries at offset {}",
            block_type,
            count,
            type_offset - 1
        );

        for _ in 0..count {
            let tick = reader.read_u32()?;
            let value = reader.read_f64()?;
            match block_type {
                BlockType::Bpm => bpms.push(TempoPoint::new(tick, value)),
                BlockType::Stop => stops.push(StopPoint::new(tick, value)),
            }
        }
    }

    if reader.remaining() > 0 {
        debug!(
            "ignoring {} byte(s) after the tempo terminator",
            reader.remaining()
        );
    }
    debug!(
        "decoded {} tempo change(s) and {} stop(s)",
        bpms.len(),
        stops.len()
    );
    Ok((bpms, stops))
}
