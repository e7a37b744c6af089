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

//! # r3bl_color_spec
//!
//! <!-- When you change this, make sure to update `README.md` and `Cargo.toml` as well. -->
//!
//! This crate turns a compact color-spec notation into styled ANSI terminal
//! output: single letters for the basic colors, `l`/`d` prefixes for the
//! light and dark variants of the extended palette, base-6 RGB triples for
//! the 6x6x6 color cube, and a grayscale ramp. Attributes compose into one
//! SGR escape sequence per line of output, named presets cache a composed
//! style for reuse, and a rainbow renderer sweeps the cube one character at
//! a time.
//!
//! # Example usage:
//!
//! ```rust
//! use r3bl_color_spec::*;
//!
//! let mut presets = PresetTable::with_builtins()?;
//!
//! // Print a message with a particular color and style.
//! print_colorized(&presets, "Hello", &StyleRequest {
//!     foreground: Some("r"),
//!     decorations: "bi",
//!     ..Default::default()
//! })?;
//!
//! // Mix styled fragments into a larger string.
//! let tag = colorize(&presets, "ERROR: ", &StyleRequest {
//!     preset: Some("error"),
//!     ..Default::default()
//! })?;
//! println!("{tag}something went wrong!");
//!
//! // Register a preset of your own and reuse it by name.
//! presets.register("important", &StyleRequest {
//!     foreground: Some("a530"),
//!     decorations: "rb",
//!     ..Default::default()
//! })?;
//! print_colorized(&presets, "read this first", &StyleRequest {
//!     preset: Some("important"),
//!     ..Default::default()
//! })?;
//!
//! // Rainbows.
//! print_rainbow(&"~".repeat(40), 5.0, "b")?;
//! # Ok::<(), StyleError>(())
//! ```
//!
//! # The notation
//!
//! Colors (for `foreground` and `background`):
//!
//! | Spec | Color |
//! |------|-------|
//! | `k` `r` `g` `y` `b` `m` `c` `w` | the eight basic colors, black through white |
//! | `lk` .. `lw` | light variants (extended palette slots 0-7) |
//! | `dk` .. `dw` | dark variants (extended palette slots 8-15) |
//! | `a000` .. `a555` | base-6 RGB triples in the 6x6x6 cube, e.g. `a520` is orange |
//! | `s0` .. `s23` | grayscale ramp, black to white |
//!
//! Decorations (for `decorations`, order preserved):
//!
//! | Letter | Attribute |
//! |--------|-----------|
//! | `b` | bold |
//! | `f` | faint |
//! | `i` | italic |
//! | `u` | underline |
//! | `x` | blinking |
//! | `y` | fast blinking |
//! | `r` | reverse |
//! | `h` | hide |
//! | `s` | strikethrough |
//!
//! # What this crate does not do
//!
//! It does not detect or negotiate terminal color capability, move the
//! cursor, or clear the screen. It only formats strings; routing them
//! anywhere other than stdout is the caller's business via [std::fmt::Display].
//!
//! # Demo binary
//!
//! `cargo run --bin colorspec` prints the full palette, a sample line per
//! preset, and a rainbow banner. See `colorspec --help` for the subcommands.

// Attach sources.
pub mod color_code;
pub mod contrast;
pub mod decoration;
pub mod preset;
pub mod public_api;
pub mod rainbow;
pub mod style_error;
pub mod style_payload;
pub mod styled_text;

pub use color_code::*;
pub use contrast::*;
pub use decoration::*;
pub use preset::*;
pub use public_api::*;
pub use rainbow::*;
pub use style_error::*;
pub use style_payload::*;
pub use styled_text::*;
