use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Error conditions raised by the tokenizer.
    ///
    /// Each condition is one bit; a set of bits describes an error that hit
    /// several conditions at once.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ErrorCode: u32 {
        /// Unclassified failure.
        const UNKNOWN = 1 << 0;
        /// A rightward activation never found its terminator before the end of the text.
        const UNTERMINATED_RIGHT = 1 << 1;
        /// A leftward activation was still open when the scan stopped.
        const UNTERMINATED_LEFT = 1 << 2;
        /// A rule with the same name is already registered.
        const DUPLICATE_RULE = 1 << 3;
        /// A rule descriptor cannot be used (empty terminator, bad pattern).
        const INVALID_RULE = 1 << 4;
        /// The scan exceeded its step budget without reaching either end of the text.
        const STEP_LIMIT = 1 << 5;

        const UNTERMINATED = Self::UNTERMINATED_RIGHT.bits() | Self::UNTERMINATED_LEFT.bits();
        const ANY = Self::UNKNOWN.bits()
            | Self::UNTERMINATED_RIGHT.bits()
            | Self::UNTERMINATED_LEFT.bits()
            | Self::DUPLICATE_RULE.bits()
            | Self::INVALID_RULE.bits()
            | Self::STEP_LIMIT.bits();
    }
}

impl ErrorCode {
    /// Default message for the lowest condition set in this code.
    pub fn message(self) -> &'static str {
        if self.contains(Self::UNKNOWN) {
            "unknown error"
        } else if self.contains(Self::UNTERMINATED_RIGHT) {
            "unterminated construct: terminator not found before end of text"
        } else if self.contains(Self::UNTERMINATED_LEFT) {
            "unterminated construct: terminator not found before start of text"
        } else if self.contains(Self::DUPLICATE_RULE) {
            "a rule with this name is already registered"
        } else if self.contains(Self::INVALID_RULE) {
            "invalid rule descriptor"
        } else if self.contains(Self::STEP_LIMIT) {
            "scan stopped after exceeding its step limit"
        } else {
            "no error"
        }
    }

    /// Check if this code reports an unterminated construct in either direction.
    #[inline]
    pub const fn is_unterminated(self) -> bool {
        self.intersects(Self::UNTERMINATED)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }
        // Composite names (`ANY`, `UNTERMINATED`) are skipped so a code always
        // renders as its individual conditions.
        let mut first = true;
        for (name, flag) in self.iter_names() {
            if flag.bits().count_ones() != 1 {
                continue;
            }
            if !first {
                write!(f, "|")?;
            }
            write!(f, "{name}")?;
            first = false;
        }
        Ok(())
    }
}
