//! Command-line interface for dominant_colors
//!
//! Prints the most frequent colors of an image, excluding transparent and
//! navy-background pixels.

use dominant_colors::{analyze_image_with_config, AnalyzerConfig, PaletteReport};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut json_mode = false;
    let mut top_override = None;
    let mut config_path: Option<PathBuf> = None;
    let mut image_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                json_mode = true;
            }
            "--top" => {
                i += 1;
                let value = args.get(i).and_then(|v| v.parse::<usize>().ok());
                match value {
                    Some(n) if n > 0 => top_override = Some(n),
                    _ => {
                        eprintln!("Error: --top requires a positive number");
                        process::exit(1);
                    }
                }
            }
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(p) => config_path = Some(PathBuf::from(p)),
                    None => {
                        eprintln!("Error: --config requires a file path");
                        process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
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

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let mut config = match config_path {
        Some(path) => match AnalyzerConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Error: Failed to load config {}: {}", path.display(), error);
                process::exit(1);
            }
        },
        None => AnalyzerConfig::default(),
    };
    if let Some(n) = top_override {
        config.top_colors = n;
    }

    match analyze_image_with_config(Path::new(&image_path_str), &config) {
        Ok(report) => {
            if json_mode {
                print_json(&report);
            } else {
                print_report(&report);
            }
        }
        Err(error) => {
            // Analysis failures are terminal but non-crashing: one printed
            // line, normal exit
            println!("Error: {}", error);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Report the most frequent colors in an image, skipping transparent");
    eprintln!("and navy-background pixels.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --top N          Number of colors to report (default: 5)");
    eprintln!("  --config FILE    Load thresholds from a JSON config file");
    eprintln!("  --json           Emit the report as JSON instead of text");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} logo.png", program_name);
    eprintln!("  {} --top 10 --json logo.png", program_name);
}

fn print_report(report: &PaletteReport) {
    if report.is_empty() {
        println!("No non-navy colors found.");
        return;
    }

    println!("Most common colors (R, G, B):");
    for entry in &report.colors {
        println!(
            "Color: {}, Hex: {}, Count: {}",
            entry.color, entry.hex, entry.count
        );
    }
}

fn print_json(report: &PaletteReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(error) => eprintln!("Error serializing report: {}", error),
    }
}
