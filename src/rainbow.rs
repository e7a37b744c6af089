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

//! Per-character hue rotation through the 6x6x6 color cube, driven by three
//! phase-shifted sine waves (one per channel). Pure function of character
//! position; identical inputs produce byte-identical output.

use std::f64::consts::PI;
use std::fmt::Write as _;

use crate::{compose_payload, parse_decorations, ColorCode, StyleError, StyledText};

/// Phase offset between the red, green, and blue channels: one third of a
/// full rotation each, so the channels peak in sequence.
const CHANNEL_PHASE_STEP: f64 = 0.333;

/// Base-6 channel intensities for the character at `position`. Each channel
/// rides its own sine wave, mapped from `[-1, 1]` into the `0..=5` digit
/// range. The wave tops out at exactly 6.0 before the clamp, hence the clamp
/// rather than plain truncation.
pub fn rainbow_channels(frequency: f64, position: usize) -> (u8, u8, u8) {
    let mut channels = [0_u8; 3];
    for (channel, intensity) in channels.iter_mut().enumerate() {
        let phase = frequency * position as f64 + CHANNEL_PHASE_STEP * channel as f64;
        let wave = (2.0 * PI * phase).sin();
        *intensity = (6.0 * (wave / 2.0 + 0.5)).floor().clamp(0.0, 5.0) as u8;
    }
    (channels[0], channels[1], channels[2])
}

/// Renders `message` with each character individually wrapped in its own
/// cube color, sweeping `rotations` full hue cycles across the whole
/// message. A multi-line message is one continuous sweep: the character
/// index keeps advancing across newlines, but the newline characters
/// themselves are emitted unstyled so no escape sequence straddles a line
/// break.
///
/// # Errors
///
/// Returns an error if any decoration letter is unrecognized; nothing is
/// rendered in that case.
pub fn render_rainbow(
    message: &str,
    rotations: f64,
    decorations: &str,
) -> Result<String, StyleError> {
    let decorations = parse_decorations(decorations)?;

    let char_count = message.chars().count();
    if char_count == 0 {
        return Ok(String::new());
    }
    let frequency = rotations / char_count as f64;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🌈 render rainbow",
        char_count = %char_count,
        rotations = %rotations
    );

    // Each styled character costs the wrap/reset pair on top of the glyph.
    let mut acc = String::with_capacity(char_count * 24);
    let mut buffer = [0_u8; 4];
    for (position, character) in message.chars().enumerate() {
        if character == '\n' {
            acc.push('\n');
            continue;
        }
        let (red, green, blue) = rainbow_channels(frequency, position);
        let payload = compose_payload(
            Some(ColorCode::Cube { red, green, blue }),
            None,
            &decorations,
            false,
        );
        let styled = StyledText {
            text: character.encode_utf8(&mut buffer),
            payload,
        };
        let _ = write!(acc, "{styled}");
    }
    Ok(acc)
}

/// [render_rainbow], written to stdout with a trailing newline.
///
/// # Errors
///
/// Same failure modes as [render_rainbow]; nothing is printed on error.
pub fn print_rainbow(
    message: &str,
    rotations: f64,
    decorations: &str,
) -> Result<(), StyleError> {
    println!("{}", render_rainbow(message, rotations, decorations)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(0.0, 0, (3, 5, 0))]
    #[test_case(0.25, 1, (5, 1, 1))]
    #[test_case(0.5, 1, (3, 0, 5))]
    fn channels_follow_the_phase_shifted_waves(
        frequency: f64,
        position: usize,
        expected: (u8, u8, u8),
    ) {
        assert_eq!(rainbow_channels(frequency, position), expected);
    }

    #[test]
    fn channels_stay_inside_the_cube_digit_range() {
        for position in 0..500 {
            let (red, green, blue) = rainbow_channels(0.037, position);
            assert!(red <= 5, "red digit escaped the cube at {position}");
            assert!(green <= 5, "green digit escaped the cube at {position}");
            assert!(blue <= 5, "blue digit escaped the cube at {position}");
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let first = render_rainbow("abc", 1.0, "").unwrap();
        let second = render_rainbow("abc", 1.0, "").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn every_character_gets_its_own_wrap_and_reset() {
        let rendered = render_rainbow("abc", 1.0, "").unwrap();
        assert_eq!(rendered.matches("\x1b[0m").count(), 3);
        assert_eq!(rendered.matches("\x1b[38;5;").count(), 3);
    }

    #[test]
    fn decorations_ride_along_with_each_character() {
        let rendered = render_rainbow("ab", 1.0, "b").unwrap();
        // Foreground selector then the bold code, per character.
        assert_eq!(rendered.matches(";1m").count(), 2);
    }

    #[test]
    fn newlines_are_emitted_unstyled_and_the_sweep_continues() {
        let rendered = render_rainbow("a\nb", 1.0, "").unwrap();
        let lines: Vec<&str> = rendered.split('\n').collect();
        assert_eq!(lines.len(), 2);
        // The newline itself is never wrapped.
        assert!(lines[0].ends_with("\x1b[0m"));
        assert!(lines[1].starts_with("\x1b[38;5;"));
        // Position 2 of the sweep, not position 0 of a restarted one.
        let continuous = render_rainbow("axb", 1.0, "").unwrap();
        let continuous_last = continuous.rsplit("\x1b[38;5;").next().unwrap();
        let multiline_last = rendered.rsplit("\x1b[38;5;").next().unwrap();
        assert_eq!(continuous_last, multiline_last);
    }

    #[test]
    fn empty_message_renders_to_nothing() {
        assert_eq!(render_rainbow("", 5.0, "b").unwrap(), "");
    }

    #[test]
    fn invalid_decorations_fail_before_any_rendering() {
        assert_eq!(
            render_rainbow("abc", 1.0, "q"),
            Err(StyleError::InvalidDecorationLetter { letter: 'q' })
        );
    }
}
