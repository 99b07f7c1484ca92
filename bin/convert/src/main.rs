//! Command-line front end for the trichroma conversion core.
//!
//! One subcommand per representation the user can edit. Prints the other
//! two views at their display precision and warns when the requested color
//! had to be clamped into the sRGB cube.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use trichroma::{Cmyk, Lab, Rgb, Swatch};

#[derive(Parser)]
#[command(name = "trichroma-convert")]
#[command(about = "Convert a color between sRGB, CMYK and CIE-Lab")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start from 8-bit sRGB channels.
    #[command(allow_negative_numbers = true)]
    Rgb {
        /// Red channel, nominally 0..=255.
        red: i32,
        /// Green channel, nominally 0..=255.
        green: i32,
        /// Blue channel, nominally 0..=255.
        blue: i32,
    },
    /// Start from CIE-Lab coordinates.
    #[command(allow_negative_numbers = true)]
    Lab {
        /// Lightness, 0..=100.
        lightness: f64,
        /// Green to red axis, -128..=127.
        a: f64,
        /// Blue to yellow axis, -128..=127.
        b: f64,
    },
    /// Start from CMYK ink percentages.
    Cmyk {
        /// Cyan percent, 0..=100.
        cyan: i32,
        /// Magenta percent, 0..=100.
        magenta: i32,
        /// Yellow percent, 0..=100.
        yellow: i32,
        /// Black percent, 0..=100.
        black: i32,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let swatch = resolve(cli.command)?;

    log::debug!("resolved swatch: {swatch:?}");
    print_swatch(&swatch);

    Ok(())
}

/// Validate the edited representation and resolve the other two from it.
/// Range checks mirror the entry widgets of a graphical front end; RGB
/// channels are deliberately not checked, matching text fields that accept
/// out-of-range values.
fn resolve(command: Command) -> Result<Swatch> {
    match command {
        Command::Rgb { red, green, blue } => Ok(Swatch::from_rgb(Rgb::new(red, green, blue))),
        Command::Lab { lightness, a, b } => {
            if !(0.0..=100.0).contains(&lightness) {
                bail!("lightness must be between 0 and 100");
            }
            for (name, value) in [("a", a), ("b", b)] {
                if !(-128.0..=127.0).contains(&value) {
                    bail!("{name} must be between -128 and 127");
                }
            }
            Ok(Swatch::from_lab(Lab::new(lightness, a, b)))
        }
        Command::Cmyk {
            cyan,
            magenta,
            yellow,
            black,
        } => {
            let channels = [
                ("cyan", cyan),
                ("magenta", magenta),
                ("yellow", yellow),
                ("black", black),
            ];
            for (name, value) in channels {
                if !(0..=100).contains(&value) {
                    bail!("{name} must be between 0 and 100 percent");
                }
            }
            Ok(Swatch::from_cmyk(Cmyk::from_percentages(
                cyan, magenta, yellow, black,
            )))
        }
    }
}

fn print_swatch(swatch: &Swatch) {
    let Rgb { red, green, blue } = swatch.rgb;
    let [cyan, magenta, yellow, black] = swatch.cmyk.to_percentages();

    // The hex preview always shows a displayable color, even when the RGB
    // channels were typed in out of range.
    let preview = (
        red.clamp(0, 255),
        green.clamp(0, 255),
        blue.clamp(0, 255),
    );

    println!(
        "rgb   {red} {green} {blue}  (#{:02x}{:02x}{:02x})",
        preview.0, preview.1, preview.2
    );
    println!(
        "lab   {} {} {}",
        swatch.lab.lightness.round() as i32,
        swatch.lab.a.round() as i32,
        swatch.lab.b.round() as i32
    );
    println!("cmyk  {cyan}% {magenta}% {yellow}% {black}%");

    if swatch.clipped() {
        println!(
            "warning: the color lies outside the sRGB gamut; clamped channels: {:?}",
            swatch.gamut
        );
    }
}
