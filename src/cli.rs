//! Command-line interface for the picker host.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use harmony_wheel::{HarmonyType, Point};

use crate::swatch::parse_hex_color;

#[derive(Parser, Debug)]
#[command(name = "harmony-picker")]
#[command(version, about = "Color wheel picker with harmony palettes")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base color as #RRGGBB
    #[arg(long, short = 'c', value_name = "HEX", value_parser = parse_color)]
    pub color: Option<u32>,

    /// Harmony rule by name (e.g. triadic, split-complementary) or index 0-11
    #[arg(long, short = 'H', value_name = "HARMONY", value_parser = parse_harmony)]
    pub harmony: Option<HarmonyType>,

    /// Picker view width in pixels
    #[arg(long, short = 'w', value_name = "PIXELS")]
    pub width: Option<f32>,

    /// Simulate a pointer press at X,Y (repeatable, applied in order)
    #[arg(long, short = 't', value_name = "X,Y", value_parser = parse_point)]
    pub touch: Vec<Point>,

    /// Ignore pointer input
    #[arg(long, action = ArgAction::SetTrue)]
    pub untouchable: bool,

    /// Session file to restore from and save to
    #[arg(long, short = 's', value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// Print the render descriptor as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    pub descriptor: bool,
}

fn parse_color(input: &str) -> Result<u32, String> {
    parse_hex_color(input).ok_or_else(|| format!("'{input}' is not a #RRGGBB color"))
}

fn parse_harmony(input: &str) -> Result<HarmonyType, String> {
    if let Ok(index) = input.parse::<u32>() {
        return HarmonyType::from_ordinal(index)
            .ok_or_else(|| format!("harmony index {index} is out of range 0-11"));
    }
    input.parse::<HarmonyType>().map_err(|e| e.to_string())
}

fn parse_point(input: &str) -> Result<Point, String> {
    let (x, y) = input
        .split_once(',')
        .ok_or_else(|| format!("'{input}' is not X,Y"))?;
    let x: f32 = x.trim().parse().map_err(|_| format!("bad x in '{input}'"))?;
    let y: f32 = y.trim().parse().map_err(|_| format!("bad y in '{input}'"))?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_harmony_by_name_and_index() {
        assert_eq!(parse_harmony("triadic"), Ok(HarmonyType::Triadic));
        assert_eq!(parse_harmony("5"), Ok(HarmonyType::Triadic));
        assert_eq!(parse_harmony("0"), Ok(HarmonyType::None));
        assert!(parse_harmony("12").is_err());
        assert!(parse_harmony("rainbow").is_err());
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("400,200"), Ok(Point::new(400.0, 200.0)));
        assert_eq!(parse_point(" 1.5 , 2 "), Ok(Point::new(1.5, 2.0)));
        assert!(parse_point("400").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#00FF00"), Ok(0x00FF00));
        assert!(parse_color("green").is_err());
    }

    #[test]
    fn test_cli_collects_touches_in_order() {
        let cli = Cli::try_parse_from([
            "harmony-picker",
            "--touch",
            "1,2",
            "--touch",
            "3,4",
            "--harmony",
            "square",
        ])
        .unwrap();
        assert_eq!(cli.touch, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        assert_eq!(cli.harmony, Some(HarmonyType::Square));
        assert!(!cli.untouchable);
    }
}
