//! Command-line demo for colorkit
//!
//! Inspects a color and optionally generates a palette:
//!
//! ```text
//! cargo run --example picker -- "#3B82F6"
//! cargo run --example picker -- "#3B82F6" --palette 5
//! cargo run --example picker -- "#3B82F6" --json
//! ```

use std::{env, process};

use colorkit::{classify_palette_theme, inspect, PaletteGenerator};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut json_mode = false;
    let mut palette_count: Option<usize> = None;
    let mut hex_arg = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => json_mode = true,
            "--palette" => {
                let Some(raw) = args.get(i + 1) else {
                    eprintln!("Error: --palette requires a count");
                    process::exit(1);
                };
                match raw.parse() {
                    Ok(count) => palette_count = Some(count),
                    Err(_) => {
                        eprintln!("Error: invalid palette count: {raw}");
                        process::exit(1);
                    }
                }
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if hex_arg.is_none() {
                    hex_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: multiple colors provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(hex) = hex_arg else {
        print_help(&args[0]);
        process::exit(1);
    };

    let report = match inspect(&hex) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("{}", err.user_message());
            process::exit(1);
        }
    };

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
    } else {
        println!("HEX            {}", report.hex);
        println!("RGB            {}", report.rgb);
        println!("HSL            {}", report.hsl);
        println!("HSV            {}", report.hsv);
        println!("CMYK           {}", report.cmyk);
        println!("Complementary  {}", report.complementary);
        println!("Luminance      {:.4}", report.luminance);
        println!(
            "Contrast       white {:.2}:1, black {:.2}:1",
            report.contrast_white, report.contrast_black
        );
        println!(
            "Overlay text   {}",
            if report.is_light { "black" } else { "white" }
        );
    }

    if let Some(count) = palette_count {
        let generator = PaletteGenerator::new();
        match generator.generate(count) {
            Ok(palette) => {
                println!();
                println!("Palette ({})", classify_palette_theme(&palette));
                println!("{}", palette.to_copy_string());
                println!();
                println!("{}", palette.to_css_variables());
            }
            Err(err) => {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        }
    }
}

fn print_help(program: &str) {
    println!("Usage: {program} <hex-color> [--palette <count>] [--json]");
    println!();
    println!("Options:");
    println!("  --palette <count>  Also generate a palette of <count> colors (1-12)");
    println!("  --json             Print the color report as JSON");
    println!("  --help, -h         Show this help");
}
