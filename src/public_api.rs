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

use crate::{compose_payload, parse_decorations, CodeFragment, ColorCode, PresetTable,
            StyleError, StylePayload, StyledText};

/// One bag of style attributes, recognized across every call. Built for
/// struct-literal update syntax:
///
/// ```rust
/// use r3bl_color_spec::StyleRequest;
///
/// let request = StyleRequest {
///     foreground: Some("dg"),
///     decorations: "bi",
///     ..Default::default()
/// };
/// ```
///
/// When `preset` is set it wins and the other fields are ignored. When
/// `auto_contrast` is set and exactly one of `foreground`/`background` is
/// given, the missing side is filled with a legible counterpart via
/// [ColorCode::contrast].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleRequest<'a> {
    /// Name of a registered preset; takes precedence over everything else.
    pub preset: Option<&'a str>,
    /// Foreground color spec, e.g. `r`, `lc`, `a520`, `s12`.
    pub foreground: Option<&'a str>,
    /// Background color spec.
    pub background: Option<&'a str>,
    /// Decoration letters, e.g. `"bu"` for bold underline.
    pub decorations: &'a str,
    /// Render the color as its bright/intense variant. Only takes effect when
    /// a color is set.
    pub bright: bool,
    /// Fill the missing half of a fg/bg pair with a contrasting color.
    pub auto_contrast: bool,
}

/// Parses and composes the request's attributes into one SGR payload. The
/// `preset` field is ignored here; this is the raw-attribute path.
///
/// # Errors
///
/// Returns an error if a color spec or decoration letter fails to parse.
pub fn compose_style(request: &StyleRequest<'_>) -> Result<StylePayload, StyleError> {
    let maybe_fg = request.foreground.map(ColorCode::parse).transpose()?;
    let maybe_bg = request.background.map(ColorCode::parse).transpose()?;
    let decorations = parse_decorations(request.decorations)?;

    let (maybe_fg, maybe_bg) = if request.auto_contrast {
        match (maybe_fg, maybe_bg) {
            (Some(fg), None) => (Some(fg), Some(fg.contrast())),
            (None, Some(bg)) => (Some(bg.contrast()), Some(bg)),
            other => other,
        }
    } else {
        (maybe_fg, maybe_bg)
    };

    Ok(compose_payload(
        maybe_fg,
        maybe_bg,
        &decorations,
        request.bright,
    ))
}

/// Resolves a single color spec to its SGR code fragment, e.g. `"8;5;208"`
/// for `a520`. Prepend `3` or `4` to select foreground or background.
///
/// # Errors
///
/// Same parse failures as [ColorCode::parse].
pub fn resolve_color_code(spec: &str) -> Result<CodeFragment, StyleError> {
    Ok(ColorCode::parse(spec)?.resolve())
}

/// Returns `message` styled per `request`: looked up from `presets` when a
/// preset name is given, composed from raw attributes otherwise. A request
/// with no attributes at all returns the message unchanged.
///
/// # Errors
///
/// Returns an error on an unknown preset name, or on any parse failure in
/// the raw attributes. No output is produced for that call.
pub fn colorize(
    presets: &PresetTable,
    message: &str,
    request: &StyleRequest<'_>,
) -> Result<String, StyleError> {
    let payload = match request.preset {
        Some(name) => presets.payload(name)?.clone(),
        None => compose_style(request)?,
    };
    Ok(StyledText {
        text: message,
        payload,
    }
    .to_string())
}

/// [colorize], written to stdout with a trailing newline. For any other
/// writer or terminator, use [StyledText] directly; it implements
/// [std::fmt::Display].
///
/// # Errors
///
/// Same failure modes as [colorize]; nothing is printed on error.
pub fn print_colorized(
    presets: &PresetTable,
    message: &str,
    request: &StyleRequest<'_>,
) -> Result<(), StyleError> {
    println!("{}", colorize(presets, message, request)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn builtins() -> PresetTable {
        PresetTable::with_builtins().unwrap()
    }

    #[test]
    fn empty_request_is_the_identity() {
        let presets = builtins();
        let message = "no styling at all";
        assert_eq!(
            colorize(&presets, message, &StyleRequest::default()).unwrap(),
            message
        );
    }

    #[test]
    fn foreground_wraps_the_message() {
        let presets = builtins();
        let styled = colorize(
            &presets,
            "Hello",
            &StyleRequest {
                foreground: Some("r"),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(styled, "\x1b[31mHello\x1b[0m");
    }

    #[test]
    fn multi_line_message_equals_lines_styled_separately() {
        let presets = builtins();
        let request = StyleRequest {
            foreground: Some("r"),
            ..Default::default()
        };
        let whole = colorize(&presets, "a\nb", &request).unwrap();
        let first = colorize(&presets, "a", &request).unwrap();
        let second = colorize(&presets, "b", &request).unwrap();
        assert_eq!(whole, format!("{first}\n{second}"));
    }

    #[test]
    fn preset_wins_over_raw_attributes() {
        let presets = builtins();
        let styled = colorize(
            &presets,
            "boom",
            &StyleRequest {
                preset: Some("error"),
                foreground: Some("g"),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(styled, "\x1b[31;1;1;4mboom\x1b[0m");
    }

    #[test]
    fn preset_lookup_is_idempotent() {
        let presets = builtins();
        let request = StyleRequest {
            preset: Some("info"),
            ..Default::default()
        };
        let first = colorize(&presets, "msg", &request).unwrap();
        let second = colorize(&presets, "msg", &request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_preset_produces_no_output() {
        let presets = builtins();
        assert_eq!(
            colorize(
                &presets,
                "msg",
                &StyleRequest {
                    preset: Some("nope"),
                    ..Default::default()
                }
            ),
            Err(StyleError::UnknownPreset {
                name: "nope".to_string()
            })
        );
    }

    #[test_case("r", "31")]
    #[test_case("lb", "38;5;4")]
    #[test_case("a000", "38;5;16")]
    fn compose_style_prefixes_the_foreground_selector(spec: &str, payload: &str) {
        let composed = compose_style(&StyleRequest {
            foreground: Some(spec),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(composed.as_str(), payload);
    }

    #[test]
    fn compose_style_of_nothing_is_empty() {
        assert_eq!(
            compose_style(&StyleRequest::default()).unwrap().as_str(),
            ""
        );
    }

    #[test]
    fn auto_contrast_fills_the_missing_background() {
        // White foreground pairs with near-black (palette slot 0).
        let composed = compose_style(&StyleRequest {
            foreground: Some("w"),
            auto_contrast: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(composed.as_str(), "37;48;5;0");
    }

    #[test]
    fn auto_contrast_fills_the_missing_foreground() {
        let composed = compose_style(&StyleRequest {
            background: Some("a555"),
            auto_contrast: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(composed.as_str(), "38;5;232;48;5;231");
    }

    #[test]
    fn auto_contrast_leaves_a_complete_pair_alone() {
        let composed = compose_style(&StyleRequest {
            foreground: Some("r"),
            background: Some("k"),
            auto_contrast: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(composed.as_str(), "31;40");
    }

    #[test_case("w", "7")]
    #[test_case("dr", "8;5;9")]
    #[test_case("a520", "8;5;208")]
    #[test_case("s0", "8;5;232")]
    fn resolve_color_code_returns_the_bare_fragment(spec: &str, fragment: &str) {
        assert_eq!(resolve_color_code(spec).unwrap().as_str(), fragment);
    }

    #[test]
    fn resolve_color_code_propagates_parse_failures() {
        assert_eq!(
            resolve_color_code("lx"),
            Err(StyleError::InvalidColorSpec {
                spec: "lx".to_string()
            })
        );
    }
}
