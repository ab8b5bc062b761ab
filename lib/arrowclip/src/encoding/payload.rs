use std::fmt::Display;

use log::debug;

use super::*;
use crate::{
    config::CodecConfig,
    note::Note,
    tempo::{StopPoint, TempoPoint},
};

pub const TEMPO_MAGIC: &str = "ArrowVortex:tempo:";
pub const NOTES_MAGIC: &str = "ArrowVortex:notes:";

const ANY_MAGIC: &str = "ArrowVortex:tempo: | ArrowVortex:notes:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Tempo,
    Notes,
}

impl Display for PayloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Tempo => "tempo",
            Self::Notes => "notes",
        })
    }
}

impl PayloadKind {
    pub fn magic(&self) -> &'static str {
        match self {
            Self::Tempo => TEMPO_MAGIC,
            Self::Notes => NOTES_MAGIC,
        }
    }

    /// Returns the kind whose magic prefix `text` starts with.
    pub fn detect(text: &str) -> Option<PayloadKind> {
        [PayloadKind::Tempo, PayloadKind::Notes]
            .into_iter()
            .find(|kind| text.starts_with(kind.magic()))
    }

    pub(crate) fn wrap_bytes(&self, config: &CodecConfig, bytes: &[u8]) -> String {
        let body = ascii85::encode(bytes, config.fold_zero_groups);
        debug!(
            "wrapped {} payload: {} bytes -> {} characters",
            self,
            bytes.len(),
            body.len()
        );

        let magic = self.magic();
        let mut text = String::with_capacity(magic.len() + body.len());
        text.push_str(magic);
        text.push_str(&body);
        text
    }

    pub(crate) fn unwrap_text(&self, text: &str) -> DecodeResult<Vec<u8>> {
        let body = text
            .strip_prefix(self.magic())
            .ok_or(DecodeError::MagicMismatch {
                expected: self.magic(),
            })?;
        let bytes = ascii85::decode(body)?;
        debug!(
            "unwrapped {} payload: {} characters -> {} bytes",
            self,
            body.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

/// Decoded clipboard contents of either kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardData {
    Tempo {
        bpms: Vec<TempoPoint>,
        stops: Vec<StopPoint>,
    },
    Notes(Vec<Note>),
}

impl ClipboardData {
    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::Tempo { .. } => PayloadKind::Tempo,
            Self::Notes(_) => PayloadKind::Notes,
        }
    }
}

/// Decodes clipboard text of whichever kind its magic prefix names.
pub fn decode_clipboard(text: &str) -> DecodeResult<ClipboardData> {
    match PayloadKind::detect(text) {
        Some(PayloadKind::Tempo) => {
            let (bpms, stops) = decode_tempo(text)?;
            Ok(ClipboardData::Tempo { bpms, stops })
        }
        Some(PayloadKind::Notes) => Ok(ClipboardData::Notes(decode_notes(text)?)),
        None => Err(DecodeError::MagicMismatch {
            expected: ANY_MAGIC,
        }),
    }
}
