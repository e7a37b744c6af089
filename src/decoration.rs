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

use smallvec::SmallVec;
use strum::EnumCount as _;
use strum_macros::{EnumCount, EnumIter};

use crate::StyleError;

/// Non-color text attributes, one letter each in the compact notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount, EnumIter)]
pub enum Decoration {
    Bold,
    Faint,
    Italic,
    Underline,
    SlowBlink,
    RapidBlink,
    Invert,
    Hidden,
    Strikethrough,
}

/// A request naming every attribute once fits inline; repeated letters spill
/// to the heap.
pub const MAX_DECORATION_ATTRIB_SIZE: usize = Decoration::COUNT;
pub type InlineVecDecorations = SmallVec<[Decoration; MAX_DECORATION_ATTRIB_SIZE]>;

mod decoration_impl {
    use super::*;

    impl Decoration {
        #[rustfmt::skip]
        pub fn parse(letter: char) -> Option<Decoration> {
            match letter {
                'b' => Some(Decoration::Bold),
                'f' => Some(Decoration::Faint),
                'i' => Some(Decoration::Italic),
                'u' => Some(Decoration::Underline),
                'x' => Some(Decoration::SlowBlink),
                'y' => Some(Decoration::RapidBlink),
                'r' => Some(Decoration::Invert),
                'h' => Some(Decoration::Hidden),
                's' => Some(Decoration::Strikethrough),
                _   => None,
            }
        }

        #[rustfmt::skip]
        pub fn letter(&self) -> char {
            match self {
                Decoration::Bold          => 'b',
                Decoration::Faint         => 'f',
                Decoration::Italic        => 'i',
                Decoration::Underline     => 'u',
                Decoration::SlowBlink     => 'x',
                Decoration::RapidBlink    => 'y',
                Decoration::Invert        => 'r',
                Decoration::Hidden        => 'h',
                Decoration::Strikethrough => 's',
            }
        }

        /// SGR parameter for this attribute.
        #[rustfmt::skip]
        pub fn sgr_code(&self) -> u8 {
            match self {
                Decoration::Bold          => 1,
                Decoration::Faint         => 2,
                Decoration::Italic        => 3,
                Decoration::Underline     => 4,
                Decoration::SlowBlink     => 5,
                Decoration::RapidBlink    => 6,
                Decoration::Invert        => 7,
                Decoration::Hidden        => 8,
                Decoration::Strikethrough => 9,
            }
        }
    }
}

/// Parses a run of decoration letters, preserving input order. Order is
/// semantically irrelevant to the terminal but kept so that composed output
/// is deterministic.
///
/// # Errors
///
/// Returns an error if any letter is outside the recognized set.
pub fn parse_decorations(letters: &str) -> Result<InlineVecDecorations, StyleError> {
    let mut acc = InlineVecDecorations::new();
    for letter in letters.chars() {
        match Decoration::parse(letter) {
            Some(it) => acc.push(it),
            None => return Err(StyleError::InvalidDecorationLetter { letter }),
        }
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator as _;
    use test_case::test_case;

    use super::*;

    #[test_case('b', 1)]
    #[test_case('f', 2)]
    #[test_case('i', 3)]
    #[test_case('u', 4)]
    #[test_case('x', 5)]
    #[test_case('y', 6)]
    #[test_case('r', 7)]
    #[test_case('h', 8)]
    #[test_case('s', 9)]
    fn letters_map_to_fixed_sgr_codes(letter: char, code: u8) {
        assert_eq!(Decoration::parse(letter).unwrap().sgr_code(), code);
    }

    #[test]
    fn letter_round_trips_for_every_attribute() {
        for decoration in Decoration::iter() {
            assert_eq!(Decoration::parse(decoration.letter()), Some(decoration));
        }
    }

    #[test]
    fn input_order_is_preserved() {
        let decorations = parse_decorations("ubi").unwrap();
        assert_eq!(
            decorations.as_slice(),
            [Decoration::Underline, Decoration::Bold, Decoration::Italic].as_slice()
        );
    }

    #[test_case('a')]
    #[test_case('z')]
    #[test_case('1')]
    fn unrecognized_letters_are_rejected(letter: char) {
        assert_eq!(
            parse_decorations(&letter.to_string()),
            Err(StyleError::InvalidDecorationLetter { letter })
        );
    }

    #[test]
    fn empty_run_parses_to_no_attributes() {
        assert!(parse_decorations("").unwrap().is_empty());
    }
}
