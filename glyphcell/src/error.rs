//! Error types for outline replay and fallback accounting.

use core::fmt;

use crate::charset::CodePoint;

/// Errors that may occur when replaying a recorded outline through a pen.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ReplayError {
    /// A command at this index appeared outside an open subpath.
    ///
    /// Every subpath must open with `MoveTo`; `Close` ends one without
    /// implying the next.
    MissingMoveTo(usize),
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMoveTo(index) => {
                write!(f, "Command at index {index} is not preceded by a MoveTo")
            }
        }
    }
}

/// Why a cell was drawn with the fallback face instead of its outline.
///
/// None of these surface as errors to the caller; the renderer recovers by
/// drawing the fallback and reports the reason through its outcome.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FallbackReason {
    /// No font has been supplied yet.
    MissingFont,
    /// The font has no outline for the code point.
    NoOutline(CodePoint),
    /// The font metrics define an empty drawable box.
    DegenerateMetrics,
    /// The outline's command stream was malformed.
    Replay(ReplayError),
}

impl From<ReplayError> for FallbackReason {
    fn from(value: ReplayError) -> Self {
        Self::Replay(value)
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFont => write!(f, "No font is available"),
            Self::NoOutline(code_point) => {
                write!(f, "Font has no outline for U+{code_point}")
            }
            Self::DegenerateMetrics => write!(f, "Font metrics yield an empty drawable box"),
            Self::Replay(e) => write!(f, "{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_code_point() {
        let reason = FallbackReason::NoOutline(CodePoint::from('A'));
        assert_eq!(reason.to_string(), "Font has no outline for U+0041");
    }

    #[test]
    fn replay_error_converts() {
        let reason: FallbackReason = ReplayError::MissingMoveTo(3).into();
        assert_eq!(reason, FallbackReason::Replay(ReplayError::MissingMoveTo(3)));
    }
}
