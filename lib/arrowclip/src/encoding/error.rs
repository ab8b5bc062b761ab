use thiserror::Error;

/// The classification of a [`DecodeError`], without any positional detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    MagicMismatch,
    Truncated,
    UnknownBlockType,
    MalformedTextEncoding,
    VarintOverflow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("clipboard data does not start with '{expected}'")]
    MagicMismatch { expected: &'static str },

    #[error("payload ended early: needed {needed} byte(s) at offset {offset} of {len}")]
    Truncated {
        needed: usize,
        offset: usize,
        len: usize,
    },

    #[error("unknown tempo block type {block_type} at offset {offset}")]
    UnknownBlockType { block_type: u8, offset: usize },

    #[error("malformed ascii85 text: {message} at character {offset}")]
    MalformedTextEncoding { message: String, offset: usize },

    #[error("varint at offset {offset} does not fit in 64 bits")]
    VarintOverflow { offset: usize },
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            Self::MagicMismatch { .. } => DecodeErrorKind::MagicMismatch,
            Self::Truncated { .. } => DecodeErrorKind::Truncated,
            Self::UnknownBlockType { .. } => DecodeErrorKind::UnknownBlockType,
            Self::MalformedTextEncoding { .. } => DecodeErrorKind::MalformedTextEncoding,
            Self::VarintOverflow { .. } => DecodeErrorKind::VarintOverflow,
        }
    }
}

pub type DecodeResult<T> = Result<T, DecodeError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn test_error_messages() {
        let err = DecodeError::Truncated {
            needed: 8,
            offset: 6,
            len: 10,
        };
        assert_eq!(err.kind(), DecodeErrorKind::Truncated);
        assert_eq!(
            err.to_string(),
            "payload ended early: needed 8 byte(s) at offset 6 of 10"
        );

        let err = DecodeError::MagicMismatch {
            expected: "ArrowVortex:notes:",
        };
        assert_eq!(err.kind(), DecodeErrorKind::MagicMismatch);
        assert_eq!(
            err.to_string(),
            "clipboard data does not start with 'ArrowVortex:notes:'"
        );
    }
}
