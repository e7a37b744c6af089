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

use std::collections::HashMap;

use crate::{compose_style, StyleError, StylePayload, StyleRequest, StyledText};

/// Named cache of composed style payloads. The table is an explicit value
/// owned by the caller and passed by reference to every call that needs
/// presets; construct it once at startup and keep it for the process
/// lifetime. Registration overwrites silently; there is no removal.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_color_spec::{colorize, PresetTable, StyleRequest};
///
/// let mut presets = PresetTable::with_builtins()?;
/// presets.register(
///     "important",
///     &StyleRequest {
///         foreground: Some("a530"),
///         decorations: "rb",
///         ..Default::default()
///     },
/// )?;
/// let styled = colorize(
///     &presets,
///     "read this",
///     &StyleRequest {
///         preset: Some("important"),
///         ..Default::default()
///     },
/// )?;
/// assert_eq!(styled, "\x1b[38;5;214;7;1mread this\x1b[0m");
/// # Ok::<(), r3bl_color_spec::StyleError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetTable {
    map: HashMap<String, StylePayload>,
}

impl PresetTable {
    /// An empty table, no presets registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table preloaded with the five severity presets registered before any
    /// user code runs: `info`, `debug`, `warning`, `error`, `critical`.
    ///
    /// # Errors
    ///
    /// Registration of a built-in only fails if one of the built-in specs is
    /// invalid, which would be a bug in this crate.
    #[rustfmt::skip]
    pub fn with_builtins() -> Result<Self, StyleError> {
        let mut table = Self::new();
        table.register("info",     &StyleRequest { foreground: Some("lc"),               decorations: "i",   ..Default::default() })?;
        table.register("debug",    &StyleRequest { foreground: Some("lm"),               decorations: "i",   ..Default::default() })?;
        table.register("warning",  &StyleRequest { foreground: Some("y"),  bright: true, decorations: "iu",  ..Default::default() })?;
        table.register("error",    &StyleRequest { foreground: Some("r"),  bright: true, decorations: "bu",  ..Default::default() })?;
        table.register("critical", &StyleRequest { foreground: Some("dr"),               decorations: "rbu", ..Default::default() })?;
        Ok(table)
    }

    /// Composes the payload for `request` and stores it under `name`,
    /// overwriting any existing entry of that name. The `preset` field of the
    /// request is ignored here.
    ///
    /// # Errors
    ///
    /// Returns an error if the request's color specs or decoration letters
    /// fail to parse; nothing is stored in that case.
    pub fn register(
        &mut self,
        name: &str,
        request: &StyleRequest<'_>,
    ) -> Result<(), StyleError> {
        let payload = compose_style(request)?;

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🏷️ register style preset",
            name = %name,
            payload = %payload
        );

        self.map.insert(name.to_string(), payload);
        Ok(())
    }

    /// Same as [Self::register], then prints one sample line rendered with
    /// the freshly stored preset so it can be eyeballed immediately.
    ///
    /// # Errors
    ///
    /// Same failure modes as [Self::register].
    pub fn register_with_preview(
        &mut self,
        name: &str,
        request: &StyleRequest<'_>,
    ) -> Result<(), StyleError> {
        self.register(name, request)?;
        let payload = self.payload(name)?.clone();
        let text = format!("Sample line using the new style preset: ({name}) {payload}");
        StyledText {
            text: &text,
            payload,
        }
        .println();
        Ok(())
    }

    /// Looks up the composed payload stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [StyleError::UnknownPreset] if no preset of that name exists.
    pub fn payload(&self, name: &str) -> Result<&StylePayload, StyleError> {
        self.map
            .get(name)
            .ok_or_else(|| StyleError::UnknownPreset {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Registered names in sorted order, for stable iteration.
    pub fn names(&self) -> Vec<&str> {
        let mut acc: Vec<&str> = self.map.keys().map(String::as_str).collect();
        acc.sort_unstable();
        acc
    }
}
