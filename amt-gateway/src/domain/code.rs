//! Stop and line code types.

use std::fmt;

use super::error::CodeError;

/// A validated AMT stop code.
///
/// Stop codes are exactly four ASCII digits (e.g., "0123"). Leading zeros are
/// significant, so the code is kept as text rather than a number.
///
/// # Examples
///
/// ```
/// use amt_gateway::domain::StopCode;
///
/// let code = StopCode::parse("0123").unwrap();
/// assert_eq!(code.as_str(), "0123");
///
/// assert!(StopCode::parse("123").is_err());
/// assert!(StopCode::parse("12a4").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StopCode([u8; 4]);

impl StopCode {
    /// Parse a stop code, rejecting anything that is not four ASCII digits.
    pub fn parse(s: &str) -> Result<Self, CodeError> {
        let bytes = s.as_bytes();

        if bytes.len() != 4 {
            return Err(CodeError::InvalidStop(s.to_string()));
        }

        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(CodeError::InvalidStop(s.to_string()));
        }

        Ok(StopCode([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Returns the stop code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopCode({})", self.as_str())
    }
}

impl fmt::Display for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated AMT line code.
///
/// Line codes are one to three characters, each an uppercase ASCII letter or
/// a digit (e.g., "1", "20", "N1", "640"). Lowercase input is rejected rather
/// than normalized, matching the routes the site publishes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineCode {
    bytes: [u8; 3],
    len: u8,
}

impl LineCode {
    /// Maximum number of characters in a line code.
    pub const MAX_LEN: usize = 3;

    /// Parse a line code, rejecting empty, overlong or non-`[A-Z0-9]` input.
    pub fn parse(s: &str) -> Result<Self, CodeError> {
        let raw = s.as_bytes();

        if raw.is_empty() || raw.len() > Self::MAX_LEN {
            return Err(CodeError::InvalidLine(s.to_string()));
        }

        if !raw
            .iter()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
        {
            return Err(CodeError::InvalidLine(s.to_string()));
        }

        let mut bytes = [0u8; 3];
        bytes[..raw.len()].copy_from_slice(raw);

        Ok(LineCode {
            bytes,
            len: raw.len() as u8,
        })
    }

    /// Returns the line code as a string slice.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }
}

impl fmt::Debug for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCode({})", self.as_str())
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_stop_codes() {
        assert!(StopCode::parse("0000").is_ok());
        assert!(StopCode::parse("0123").is_ok());
        assert!(StopCode::parse("9999").is_ok());
    }

    #[test]
    fn stop_code_keeps_leading_zeros() {
        let code = StopCode::parse("0042").unwrap();
        assert_eq!(code.as_str(), "0042");
        assert_eq!(code.to_string(), "0042");
    }

    #[test]
    fn reject_stop_code_wrong_length() {
        assert!(StopCode::parse("").is_err());
        assert!(StopCode::parse("123").is_err());
        assert!(StopCode::parse("12345").is_err());
    }

    #[test]
    fn reject_stop_code_non_digits() {
        assert!(StopCode::parse("12a4").is_err());
        assert!(StopCode::parse("ABCD").is_err());
        assert!(StopCode::parse("12 4").is_err());
        assert!(StopCode::parse("-123").is_err());
    }

    #[test]
    fn reject_stop_code_unicode_digits() {
        // Arabic-Indic digits are numeric but not ASCII.
        assert!(StopCode::parse("١٢٣٤").is_err());
    }

    #[test]
    fn parse_valid_line_codes() {
        for s in ["1", "20", "N1", "640", "ABC", "7B"] {
            assert!(LineCode::parse(s).is_ok(), "{s} should parse");
        }
    }

    #[test]
    fn reject_line_code_shape() {
        assert!(LineCode::parse("").is_err());
        assert!(LineCode::parse("1234").is_err());
        assert!(LineCode::parse("n1").is_err());
        assert!(LineCode::parse("1-2").is_err());
        assert!(LineCode::parse(" 1").is_err());
    }

    #[test]
    fn line_code_as_str() {
        assert_eq!(LineCode::parse("N1").unwrap().as_str(), "N1");
        assert_eq!(LineCode::parse("7").unwrap().as_str(), "7");
    }

    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", StopCode::parse("0123").unwrap()),
            "StopCode(0123)"
        );
        assert_eq!(format!("{:?}", LineCode::parse("20").unwrap()), "LineCode(20)");
    }

    #[test]
    fn error_carries_input() {
        let err = StopCode::parse("12").unwrap_err();
        assert_eq!(err, CodeError::InvalidStop("12".into()));
    }
}
