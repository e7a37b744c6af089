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

use std::fmt::Write as _;

use crate::{ColorCode, Decoration};

pub mod sizing {
    use smallstr::SmallString;

    /// Enough for a foreground and background extended selector, the bright
    /// flag, and every decoration code, semicolon joined. Owned in a stack
    /// allocated buffer which spills to the heap past this size.
    pub const MAX_STYLE_PAYLOAD_SIZE: usize = 40;
    pub type StylePayload = SmallString<[u8; MAX_STYLE_PAYLOAD_SIZE]>;
}
pub use sizing::StylePayload;

/// Joins the requested attributes into one SGR parameter list, in a fixed
/// order: foreground selector, background selector, bright flag, then one
/// code per decoration in input order. An empty payload means "no styling
/// requested" and formatting becomes the identity.
///
/// The bright flag only takes effect when a color is set alongside it; SGR
/// code `1` with no color selector would read as plain bold.
pub fn compose_payload(
    maybe_fg: Option<ColorCode>,
    maybe_bg: Option<ColorCode>,
    decorations: &[Decoration],
    bright: bool,
) -> StylePayload {
    let mut acc = StylePayload::new();

    if let Some(fg) = maybe_fg {
        let _ = write!(acc, "3{}", fg.resolve());
    }

    if let Some(bg) = maybe_bg {
        if !acc.is_empty() {
            acc.push(';');
        }
        let _ = write!(acc, "4{}", bg.resolve());
    }

    if bright && (maybe_fg.is_some() || maybe_bg.is_some()) {
        if !acc.is_empty() {
            acc.push(';');
        }
        acc.push('1');
    }

    for decoration in decorations {
        if !acc.is_empty() {
            acc.push(';');
        }
        let _ = write!(acc, "{}", decoration.sgr_code());
    }

    acc
}
