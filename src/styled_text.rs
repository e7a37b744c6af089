/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter};

use crate::StylePayload;

pub mod escape {
    /// Control sequence introducer.
    pub const CSI: &str = "\x1b[";
    /// Terminates an SGR parameter list.
    pub const SGR: &str = "m";
    /// Parameter that resets all attributes.
    pub const RESET: &str = "0";
}

/// A message paired with a composed SGR payload. The [Display] impl does the
/// wrapping, so a styled value can be routed to any writer, not just stdout.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_color_spec::{compose_style, StyleRequest, StyledText};
///
/// let payload = compose_style(&StyleRequest {
///     foreground: Some("lc"),
///     decorations: "i",
///     ..Default::default()
/// })?;
/// let styled = StyledText {
///     text: "ready",
///     payload,
/// };
/// assert_eq!(styled.to_string(), "\x1b[38;5;6;3mready\x1b[0m");
/// styled.println();
/// # Ok::<(), r3bl_color_spec::StyleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText<'a> {
    pub text: &'a str,
    pub payload: StylePayload,
}

mod styled_text_impl {
    use super::*;

    impl StyledText<'_> {
        pub fn println(&self) {
            println!("{}", self);
        }

        pub fn print(&self) {
            print!("{}", self);
        }
    }
}

mod display_trait_impl {
    use super::escape::{CSI, RESET, SGR};
    use super::*;

    /// Each line of a multi-line message is wrapped and reset individually.
    /// Some terminals and pagers drop attributes at line boundaries, so an
    /// escape sequence must never straddle a newline. An empty payload is the
    /// identity: the message passes through byte for byte.
    impl Display for StyledText<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            if self.payload.is_empty() {
                return write!(f, "{}", self.text);
            }
            let payload = &self.payload;
            for (count, line) in self.text.split('\n').enumerate() {
                if count > 0 {
                    write!(f, "\n")?;
                }
                write!(f, "{CSI}{payload}{SGR}{line}{CSI}{RESET}{SGR}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{compose_payload, ColorCode};

    fn payload_for(spec: &str) -> StylePayload {
        compose_payload(Some(ColorCode::parse(spec).unwrap()), None, &[], false)
    }

    #[test]
    fn single_line_is_wrapped_and_reset() {
        let styled = StyledText {
            text: "Hello",
            payload: payload_for("r"),
        };
        assert_eq!(styled.to_string(), "\x1b[31mHello\x1b[0m");
    }

    #[test]
    fn empty_payload_is_the_identity() {
        let styled = StyledText {
            text: "plain\ntext",
            payload: StylePayload::new(),
        };
        assert_eq!(styled.to_string(), "plain\ntext");
    }

    #[test]
    fn each_line_is_wrapped_independently() {
        let styled = StyledText {
            text: "a\nb",
            payload: payload_for("r"),
        };
        assert_eq!(styled.to_string(), "\x1b[31ma\x1b[0m\n\x1b[31mb\x1b[0m");
    }

    #[test]
    fn multi_line_equals_the_lines_styled_one_by_one() {
        let whole = StyledText {
            text: "a\nb",
            payload: payload_for("lc"),
        }
        .to_string();
        let first = StyledText {
            text: "a",
            payload: payload_for("lc"),
        }
        .to_string();
        let second = StyledText {
            text: "b",
            payload: payload_for("lc"),
        }
        .to_string();
        assert_eq!(whole, format!("{first}\n{second}"));
    }

    #[test]
    fn trailing_newline_wraps_the_empty_final_line() {
        let styled = StyledText {
            text: "a\n",
            payload: payload_for("g"),
        };
        assert_eq!(styled.to_string(), "\x1b[32ma\x1b[0m\n\x1b[32m\x1b[0m");
    }
}
