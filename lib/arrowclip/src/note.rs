use std::fmt::Display;

use int_enum::IntEnum;

/// The highest column a note can occupy; the wire format keeps the column
/// in the low seven bits of the control byte.
pub const MAX_COLUMN: u8 = 0x7f;

/// The `special` value of a plain step, which is implied by the short wire
/// form and never written as a byte.
pub const STEP_SPECIAL: i16 = -1;

/// The wire value of the `special` byte for every note except a plain step.
#[derive(IntEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Special {
    Hold = 0,
    Mine = 1,
    Roll = 2,
    Lift = 3,
    Fake = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteKind {
    Step { tick: u64 },
    Mine { tick: u64 },
    Lift { tick: u64 },
    Fake { tick: u64 },
    Hold { start: u64, end: u64 },
    Roll { start: u64, end: u64 },
    /// A long-form record that matches none of the other kinds, such as an
    /// unknown special byte or a mine spanning two ticks. It is kept verbatim
    /// so that it encodes back to the same bytes.
    Unknown { start: u64, end: u64, special: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    column: u8,
    kind: NoteKind,
}

impl Note {
    fn new(column: u8, kind: NoteKind) -> Note {
        assert!(
            column <= MAX_COLUMN,
            "note column {} is larger than {}",
            column,
            MAX_COLUMN
        );
        Note { column, kind }
    }

    pub fn step(tick: u64, column: u8) -> Note {
        Note::new(column, NoteKind::Step { tick })
    }

    pub fn mine(tick: u64, column: u8) -> Note {
        Note::new(column, NoteKind::Mine { tick })
    }

    pub fn lift(tick: u64, column: u8) -> Note {
        Note::new(column, NoteKind::Lift { tick })
    }

    pub fn fake(tick: u64, column: u8) -> Note {
        Note::new(column, NoteKind::Fake { tick })
    }

    pub fn hold(start: u64, end: u64, column: u8) -> Note {
        Note::new(column, NoteKind::Hold { start, end })
    }

    pub fn roll(start: u64, end: u64, column: u8) -> Note {
        Note::new(column, NoteKind::Roll { start, end })
    }

    /// Builds the note a long-form wire record describes. The six known kinds
    /// are chosen by the special byte together with whether the note spans
    /// any ticks; anything else becomes [`NoteKind::Unknown`].
    pub(crate) fn from_long_form(start: u64, end: u64, column: u8, special: u8) -> Note {
        let point = start == end;
        let kind = match Special::try_from(special) {
            Ok(Special::Hold) => NoteKind::Hold { start, end },
            Ok(Special::Roll) => NoteKind::Roll { start, end },
            Ok(Special::Mine) if point => NoteKind::Mine { tick: start },
            Ok(Special::Lift) if point => NoteKind::Lift { tick: start },
            Ok(Special::Fake) if point => NoteKind::Fake { tick: start },
            _ => NoteKind::Unknown {
                start,
                end,
                special,
            },
        };
        Note::new(column, kind)
    }

    /// Builds a note from its flat `(start, end, column, special)` form.
    /// Returns `None` when the fields have no representation: a column above
    /// [`MAX_COLUMN`], a special outside `-1..=255`, or a step with
    /// `start != end`.
    pub fn from_raw(start: u64, end: u64, column: u8, special: i16) -> Option<Note> {
        if column > MAX_COLUMN {
            return None;
        }
        if special == STEP_SPECIAL {
            return (start == end).then(|| Note::step(start, column));
        }
        let special = u8::try_from(special).ok()?;
        Some(Note::from_long_form(start, end, column, special))
    }

    pub fn kind(&self) -> &NoteKind {
        &self.kind
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    pub fn start(&self) -> u64 {
        match self.kind {
            NoteKind::Step { tick }
            | NoteKind::Mine { tick }
            | NoteKind::Lift { tick }
            | NoteKind::Fake { tick } => tick,
            NoteKind::Hold { start, .. }
            | NoteKind::Roll { start, .. }
            | NoteKind::Unknown { start, .. } => start,
        }
    }

    pub fn end(&self) -> u64 {
        match self.kind {
            NoteKind::Step { tick }
            | NoteKind::Mine { tick }
            | NoteKind::Lift { tick }
            | NoteKind::Fake { tick } => tick,
            NoteKind::Hold { end, .. }
            | NoteKind::Roll { end, .. }
            | NoteKind::Unknown { end, .. } => end,
        }
    }

    pub fn special(&self) -> i16 {
        match self.kind {
            NoteKind::Step { .. } => STEP_SPECIAL,
            NoteKind::Mine { .. } => Special::Mine as i16,
            NoteKind::Lift { .. } => Special::Lift as i16,
            NoteKind::Fake { .. } => Special::Fake as i16,
            NoteKind::Hold { .. } => Special::Hold as i16,
            NoteKind::Roll { .. } => Special::Roll as i16,
            NoteKind::Unknown { special, .. } => special as i16,
        }
    }

    pub fn is_step(&self) -> bool {
        matches!(self.kind, NoteKind::Step { .. })
    }

    pub fn is_mine(&self) -> bool {
        matches!(self.kind, NoteKind::Mine { .. })
    }

    pub fn is_lift(&self) -> bool {
        matches!(self.kind, NoteKind::Lift { .. })
    }

    pub fn is_fake(&self) -> bool {
        matches!(self.kind, NoteKind::Fake { .. })
    }

    pub fn is_hold(&self) -> bool {
        matches!(self.kind, NoteKind::Hold { .. })
    }

    pub fn is_roll(&self) -> bool {
        matches!(self.kind, NoteKind::Roll { .. })
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Note(start={}, end={}, column={}, special={})",
            self.start(),
            self.end(),
            self.column,
            self.special()
        ))
    }
}
