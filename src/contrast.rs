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

use crate::{color_code::grayscale_ramp, BasicColor, ColorCode, StyleError};

/// The counterpart colors the cascade picks from.
mod counterparts {
    use super::*;

    /// Darkest and lightest steps of the grayscale ramp.
    pub const DARKEST_STEP: ColorCode = ColorCode::Grayscale(0);
    pub const BRIGHTEST_STEP: ColorCode = ColorCode::Grayscale(grayscale_ramp::MAX_INDEX);

    /// Near-black and light-grey slots of the extended palette.
    pub const LIGHT_BLACK: ColorCode = ColorCode::Light(BasicColor::Black);
    pub const DARK_WHITE: ColorCode = ColorCode::Dark(BasicColor::White);
}

mod contrast_impl {
    use super::counterparts::*;
    use super::*;

    impl ColorCode {
        /// A counterpart color that stays legible next to `self`, for
        /// auto-picking the other half of a foreground/background pair.
        /// Deterministic rule cascade; the cube rule is a rough luminance
        /// proxy over the green and blue digits, red contributes too little
        /// to matter at cube resolution.
        pub fn contrast(&self) -> ColorCode {
            match *self {
                ColorCode::Basic(BasicColor::White) => LIGHT_BLACK,
                ColorCode::Basic(_) => DARK_WHITE,

                // Brown and dark cyan sit mid-luminance; only the darkest
                // ramp step stays readable on them.
                ColorCode::Dark(BasicColor::Yellow) | ColorCode::Dark(BasicColor::Cyan) => {
                    DARKEST_STEP
                }
                ColorCode::Dark(BasicColor::White)
                | ColorCode::Light(BasicColor::White)
                | ColorCode::Dark(BasicColor::Black) => LIGHT_BLACK,
                ColorCode::Light(_) | ColorCode::Dark(_) => DARK_WHITE,

                ColorCode::Cube { green, blue, .. } => {
                    // g/2 + b > 2, scaled by two to stay in integers.
                    if green + 2 * blue > 4 {
                        DARKEST_STEP
                    } else {
                        BRIGHTEST_STEP
                    }
                }

                ColorCode::Grayscale(index) => {
                    if index > grayscale_ramp::MIDPOINT {
                        DARKEST_STEP
                    } else {
                        BRIGHTEST_STEP
                    }
                }
            }
        }
    }
}

/// Parses `spec` and picks its legible counterpart. `cancel` keeps the call
/// shape while disabling the advice: the spec is still validated, but `None`
/// is returned, meaning "apply only the single requested color".
///
/// # Errors
///
/// Same parse failures as [ColorCode::parse].
pub fn contrast_for(spec: &str, cancel: bool) -> Result<Option<ColorCode>, StyleError> {
    let code = ColorCode::parse(spec)?;
    if cancel {
        return Ok(None);
    }
    Ok(Some(code.contrast()))
}
