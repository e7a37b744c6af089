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

/// Input validation failures for color specs, decoration letters, and preset
/// lookups. All of these are raised immediately to the caller before any
/// output is produced for that call. Invalid input is never silently
/// defaulted or clamped.
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("🎨 Invalid color spec: '{spec}'")]
    InvalidColorSpec { spec: String },

    #[error("🌫️ Grayscale index {index} is out of range (the ramp ends at {max})")]
    GrayscaleOutOfRange { index: usize, max: usize },

    #[error("🏷️ Unknown style preset: '{name}'")]
    UnknownPreset { name: String },

    #[error("✏️ Invalid decoration letter: '{letter}'")]
    InvalidDecorationLetter { letter: char },
}
