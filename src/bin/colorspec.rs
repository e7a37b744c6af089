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

use clap::{Parser, Subcommand};
use r3bl_color_spec::{colorize, print_colorized, print_rainbow, BasicColor, Decoration,
                      PresetTable, StyleRequest};
use strum::IntoEnumIterator as _;

#[derive(Debug, Parser)]
#[command(bin_name = "colorspec")]
#[command(about = "Demo of the compact color-spec notation: palette sweeps, presets, and rainbows 🌈", long_about = None)]
#[command(version)]
#[command(next_line_help = true)]
struct CliArgs {
    #[command(subcommand)]
    command: Option<DemoCommand>,
}

#[derive(Debug, Subcommand)]
enum DemoCommand {
    /// Print the basic, light, dark, cube, and grayscale palette sweeps 🎨
    Palette,
    /// Print a sample line for every registered preset 🏷️
    Presets,
    /// Print a rainbow banner 🌈
    Rainbow {
        /// How many full hue rotations to spread across the banner.
        #[arg(value_name = "rotations", long, short = 'r', default_value_t = 5.0)]
        rotations: f64,
    },
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli_args = CliArgs::parse();
    let presets = PresetTable::with_builtins()?;

    match cli_args.command {
        Some(DemoCommand::Palette) => show_palette(&presets)?,
        Some(DemoCommand::Presets) => show_presets(&presets)?,
        Some(DemoCommand::Rainbow { rotations }) => show_rainbow(rotations)?,
        None => {
            show_palette(&presets)?;
            show_presets(&presets)?;
            show_rainbow(5.0)?;
        }
    }

    Ok(())
}

/// One row per basic color with its light and dark variants, then a slice
/// through the color cube, the grayscale ramp, and a decoration legend. Every
/// cell is labeled with the spec that produced it, with a contrasting
/// foreground picked automatically.
fn show_palette(presets: &PresetTable) -> miette::Result<()> {
    println!("Basic colors with their light and dark variants:");
    for color in BasicColor::iter() {
        let letter = color.letter();
        let mut row = String::new();
        for spec in [
            format!("{letter}"),
            format!("l{letter}"),
            format!("d{letter}"),
        ] {
            let cell = colorize(
                presets,
                &format!(" {spec:>3} "),
                &StyleRequest {
                    background: Some(spec.as_str()),
                    auto_contrast: true,
                    ..Default::default()
                },
            )?;
            row.push_str(&cell);
            row.push(' ');
        }
        println!("{row}");
    }

    println!("\nA slice through the color cube (red varies down the rows):");
    for red in 0..6 {
        let mut row = String::new();
        for green in 0..6 {
            for blue in 0..6 {
                let spec = format!("a{red}{green}{blue}");
                let cell = colorize(
                    presets,
                    "  ",
                    &StyleRequest {
                        background: Some(spec.as_str()),
                        ..Default::default()
                    },
                )?;
                row.push_str(&cell);
            }
        }
        println!("{row}");
    }

    println!("\nThe grayscale ramp:");
    let mut row = String::new();
    for index in 0..24 {
        let spec = format!("s{index}");
        let cell = colorize(
            presets,
            "  ",
            &StyleRequest {
                background: Some(spec.as_str()),
                ..Default::default()
            },
        )?;
        row.push_str(&cell);
    }
    println!("{row}");

    println!("\nDecorations:");
    for decoration in Decoration::iter() {
        let letter = decoration.letter();
        let sample = colorize(
            presets,
            &format!("{letter}: {decoration:?}"),
            &StyleRequest {
                decorations: &letter.to_string(),
                ..Default::default()
            },
        )?;
        println!("  {sample}");
    }
    println!();

    Ok(())
}

fn show_presets(presets: &PresetTable) -> miette::Result<()> {
    println!("Registered presets:");
    for name in presets.names() {
        print_colorized(
            presets,
            &format!("Sample message using preset: {name}"),
            &StyleRequest {
                preset: Some(name),
                ..Default::default()
            },
        )?;
    }
    println!();
    Ok(())
}

fn show_rainbow(rotations: f64) -> miette::Result<()> {
    // Reverse video turns the foreground sweep into solid colored bars.
    let bars = format!("{}\n", " ".repeat(72)).repeat(4);
    print_rainbow(bars.trim_end_matches('\n'), rotations * 2.3, "r")?;

    let fringe = "~".repeat(16);
    let banner = format!("{fringe} the cube, one sine wave at a time {fringe}");
    print_rainbow(&banner, rotations, "b")?;
    Ok(())
}
