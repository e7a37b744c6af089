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

//! The compact color-spec notation and its resolution to SGR code fragments.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>

use std::fmt::{Display, Formatter};

use smallstr::SmallString;
use strum_macros::{EnumCount, EnumIter};

use crate::StyleError;

/// The eight colors every terminal knows, in SGR table order. The discriminant
/// order is load bearing: [BasicColor::index] maps straight into the `30..37`
/// (foreground) and `40..47` (background) SGR ranges, and into the first eight
/// slots of the 256-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount, EnumIter)]
pub enum BasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

mod basic_color_impl {
    use super::*;

    impl BasicColor {
        #[rustfmt::skip]
        pub fn parse(letter: char) -> Option<BasicColor> {
            match letter {
                'k' => Some(BasicColor::Black),
                'r' => Some(BasicColor::Red),
                'g' => Some(BasicColor::Green),
                'y' => Some(BasicColor::Yellow),
                'b' => Some(BasicColor::Blue),
                'm' => Some(BasicColor::Magenta),
                'c' => Some(BasicColor::Cyan),
                'w' => Some(BasicColor::White),
                _   => None,
            }
        }

        #[rustfmt::skip]
        pub fn letter(&self) -> char {
            match self {
                BasicColor::Black   => 'k',
                BasicColor::Red     => 'r',
                BasicColor::Green   => 'g',
                BasicColor::Yellow  => 'y',
                BasicColor::Blue    => 'b',
                BasicColor::Magenta => 'm',
                BasicColor::Cyan    => 'c',
                BasicColor::White   => 'w',
            }
        }

        #[rustfmt::skip]
        pub fn index(&self) -> u8 {
            match self {
                BasicColor::Black   => 0,
                BasicColor::Red     => 1,
                BasicColor::Green   => 2,
                BasicColor::Yellow  => 3,
                BasicColor::Blue    => 4,
                BasicColor::Magenta => 5,
                BasicColor::Cyan    => 6,
                BasicColor::White   => 7,
            }
        }
    }
}

/// The grayscale ramp occupies the top of the 256-color palette: 24 steps
/// from near-black (palette 232) to near-white (palette 255). Indices past
/// [grayscale_ramp::MAX_INDEX] are an error, never clamped.
pub mod grayscale_ramp {
    pub const OFFSET: u8 = 232;
    pub const MAX_INDEX: u8 = 23;
    /// Ramp entries above this read as light, at or below as dark.
    pub const MIDPOINT: u8 = 11;
}

/// A color spec parsed into its tagged form. The textual notation:
///
/// | Form        | Example | Meaning                                          |
/// |-------------|---------|--------------------------------------------------|
/// | bare letter | `r`     | basic color, SGR code 0-7                        |
/// | `l<letter>` | `lc`    | light variant, extended palette slot 0-7         |
/// | `d<letter>` | `dy`    | dark variant, extended palette slot 8-15         |
/// | `a<r><g><b>`| `a520`  | base-6 RGB triple in the 6x6x6 cube (slots 16-231)|
/// | `s<int>`    | `s12`   | grayscale ramp index 0-23 (slots 232-255)        |
///
/// Every valid spec resolves deterministically to a single palette slot.
/// The grayscale prefix is `s` rather than `g` so that the bare letter `g`
/// stays unambiguously green.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCode {
    Basic(BasicColor),
    Light(BasicColor),
    Dark(BasicColor),
    Cube { red: u8, green: u8, blue: u8 },
    Grayscale(u8),
}

/// The resolved fragment for one color, e.g. `1` or `8;5;208`. Owned in a
/// stack allocated buffer; the longest fragment (`8;5;NNN`) is 7 bytes.
pub const MAX_CODE_FRAGMENT_SIZE: usize = 8;
pub type CodeFragment = SmallString<[u8; MAX_CODE_FRAGMENT_SIZE]>;

mod color_code_impl {
    use super::*;

    fn invalid(spec: &str) -> StyleError {
        StyleError::InvalidColorSpec {
            spec: spec.to_string(),
        }
    }

    impl ColorCode {
        /// Parses the compact textual notation. Unknown letters, malformed
        /// digit runs, and out-of-range grayscale indices are typed errors.
        ///
        /// # Errors
        ///
        /// Returns an error if:
        /// - The spec is empty or its letter prefix is unrecognized
        /// - A light/dark prefix is not followed by exactly one basic letter
        /// - The cube form is not followed by exactly three base-6 digits
        /// - The grayscale index is not a number, or lies past the ramp end
        pub fn parse(spec: &str) -> Result<ColorCode, StyleError> {
            let mut chars = spec.chars();
            let first = chars.next().ok_or_else(|| invalid(spec))?;
            let rest = &spec[first.len_utf8()..];

            match first {
                'l' | 'd' => {
                    let mut rest_chars = rest.chars();
                    match (rest_chars.next(), rest_chars.next()) {
                        (Some(letter), None) => {
                            let base =
                                BasicColor::parse(letter).ok_or_else(|| invalid(spec))?;
                            Ok(match first {
                                'l' => ColorCode::Light(base),
                                _ => ColorCode::Dark(base),
                            })
                        }
                        _ => Err(invalid(spec)),
                    }
                }

                'a' => {
                    let mut digits = rest.chars();
                    match (digits.next(), digits.next(), digits.next(), digits.next()) {
                        (Some(red), Some(green), Some(blue), None) => {
                            let parse_digit =
                                |digit: char| digit.to_digit(6).map(|it| it as u8);
                            match (parse_digit(red), parse_digit(green), parse_digit(blue))
                            {
                                (Some(red), Some(green), Some(blue)) => {
                                    Ok(ColorCode::Cube { red, green, blue })
                                }
                                _ => Err(invalid(spec)),
                            }
                        }
                        _ => Err(invalid(spec)),
                    }
                }

                's' => {
                    let index: usize = rest.parse().map_err(|_| invalid(spec))?;
                    if index > grayscale_ramp::MAX_INDEX as usize {
                        return Err(StyleError::GrayscaleOutOfRange {
                            index,
                            max: grayscale_ramp::MAX_INDEX as usize,
                        });
                    }
                    Ok(ColorCode::Grayscale(index as u8))
                }

                _ => {
                    if !rest.is_empty() {
                        return Err(invalid(spec));
                    }
                    BasicColor::parse(first)
                        .map(ColorCode::Basic)
                        .ok_or_else(|| invalid(spec))
                }
            }
        }

        /// Palette slot selected by this code in the 256-color scheme. The
        /// basic codes share the palette's first eight slots.
        pub fn palette_index(&self) -> u8 {
            match self {
                ColorCode::Basic(base) | ColorCode::Light(base) => base.index(),
                ColorCode::Dark(base) => base.index() + 8,
                ColorCode::Cube { red, green, blue } => 16 + red * 36 + green * 6 + blue,
                ColorCode::Grayscale(index) => grayscale_ramp::OFFSET + index,
            }
        }

        /// The SGR code fragment for this color: the bare table index for a
        /// basic code, or an `8;5;<slot>` extended-palette selector. Callers
        /// prepend `3` (foreground) or `4` (background) to form the full
        /// parameter.
        pub fn resolve(&self) -> CodeFragment {
            match self {
                ColorCode::Basic(base) => format!("{}", base.index()).into(),
                _ => format!("8;5;{}", self.palette_index()).into(),
            }
        }
    }
}

mod display_trait_impl {
    use super::*;

    /// Round-trips with [ColorCode::parse]: printing a parsed code yields the
    /// spec back in canonical form.
    impl Display for ColorCode {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            match self {
                ColorCode::Basic(base) => write!(f, "{}", base.letter()),
                ColorCode::Light(base) => write!(f, "l{}", base.letter()),
                ColorCode::Dark(base) => write!(f, "d{}", base.letter()),
                ColorCode::Cube { red, green, blue } => {
                    write!(f, "a{red}{green}{blue}")
                }
                ColorCode::Grayscale(index) => write!(f, "s{index}"),
            }
        }
    }
}
