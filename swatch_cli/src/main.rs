use anyhow::Context;
use std::env;
use swatch_core::{PaletteConfig, PaletteLibrary, stops};
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!(
        r##"Swatch CLI

            Commands:
            palette <hex>
            swatches <hex> [h] [s] [lMin] [lMax] [lightness|luminance]
            new <lib.json> <name>
            add <lib.json> <name> <hex> [h] [s] [lMin] [lMax] [lightness|luminance]
            remove <lib.json> <id>
            list <lib.json>
            export <lib.json>

            Examples:
            cargo run -p swatch_cli -- palette "#22C55E"
            cargo run -p swatch_cli -- swatches 3B82F6 4 0 5 95 luminance
            cargo run -p swatch_cli -- new palettes.json "Brand"
            cargo run -p swatch_cli -- add palettes.json primary "#7C3AED" 2
            cargo run -p swatch_cli -- export palettes.json

            Set RUST_LOG=debug to trace generation on stderr.
        "##
    );
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_f64(arg: Option<&String>, what: &str, default: f64) -> anyhow::Result<f64> {
    match arg {
        None => Ok(default),
        Some(s) => s
            .parse()
            .with_context(|| format!("{what} must be a number, got '{s}'")),
    }
}

fn parse_mode(arg: Option<&String>) -> anyhow::Result<bool> {
    match arg.map(|s| s.to_lowercase()).as_deref() {
        None | Some("lightness") => Ok(true),
        Some("luminance") => Ok(false),
        Some(other) => anyhow::bail!("mode must be 'lightness' or 'luminance', got '{other}'"),
    }
}

/// Reads `[h] [s] [lMin] [lMax] [mode]` starting at `args[start]`.
fn config_from_args(
    name: &str,
    hex: &str,
    args: &[String],
    start: usize,
) -> anyhow::Result<PaletteConfig> {
    let h = parse_f64(args.get(start), "h", 0.0)?;
    let s = parse_f64(args.get(start + 1), "s", 0.0)?;
    let l_min = parse_f64(args.get(start + 2), "lMin", 0.0)?;
    let l_max = parse_f64(args.get(start + 3), "lMax", 100.0)?;
    let use_lightness = parse_mode(args.get(start + 4))?;

    Ok(PaletteConfig::new(name, hex)
        .with_spread(h, s)
        .with_bounds(l_min, l_max)
        .with_lightness(use_lightness))
}

/// `palette <hex>` output: `c50` .. `c900` as a JSON object.
fn palette_json(hex: &str) -> anyhow::Result<String> {
    let palette = swatch_core::palette_from_hex(hex)
        .with_context(|| format!("generate palette for '{hex}'"))?;
    Ok(serde_json::to_string_pretty(&palette)?)
}

fn print_swatches(cfg: &PaletteConfig) -> anyhow::Result<()> {
    let swatches = swatch_core::generate_palette(cfg)
        .with_context(|| format!("generate palette for '{}'", cfg.value))?;

    println!(
        "{:>5} | {:<8} | {:>7} {:>7} | {:>6} {:>6} | {:>5} | {:>6}",
        "stop", "hex", "h", "hScale", "s", "sScale", "l", "lum"
    );
    for sw in &swatches {
        let marker = if stops::is_sentinel(sw.stop) { "*" } else { " " };
        println!(
            "{:>4}{} | {:<8} | {:>7.1} {:>7.1} | {:>6.1} {:>6.1} | {:>5.1} | {:>6.2}",
            sw.stop,
            marker,
            sw.hex,
            sw.h,
            sw.h_scale,
            sw.s,
            sw.s_scale,
            sw.l,
            swatch_core::luminance_from_hex(&sw.hex)
        );
    }
    println!("(* sentinel stops, not part of exported palettes)");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_help();
        return Ok(());
    }

    tracing::debug!(command = %args[1], "dispatch");

    match args[1].as_str() {
        "palette" => {
            let hex = args.get(2).context("missing <hex>")?;
            println!("{}", palette_json(hex)?);
        }
        "swatches" => {
            let hex = args.get(2).context("missing <hex>")?;
            let cfg = config_from_args("cli", hex, &args, 3)?;
            print_swatches(&cfg)?;
        }
        "new" => {
            let path = args.get(2).context("missing <lib.json>")?;
            let name = args.get(3).context("missing <name>")?;
            let library = PaletteLibrary::new(name.as_str());
            library.save_json_file(path)?;
            println!("Saved empty library '{}' to: {}", library.name, path);
        }
        "add" => {
            let path = args.get(2).context("missing <lib.json>")?;
            let name = args.get(3).context("missing <name>")?;
            let hex = args.get(4).context("missing <hex>")?;
            let cfg = config_from_args(name, hex, &args, 5)?;

            let mut library = PaletteLibrary::load_json_file(path)
                .with_context(|| format!("failed to load library '{path}'"))?;
            library.add_palette(cfg)?;
            library.save_json_file(path)?;
            println!("Added palette '{}' and saved {}", name, path);
        }
        "remove" => {
            let path = args.get(2).context("missing <lib.json>")?;
            let id = args.get(3).context("missing <id>")?;

            let mut library = PaletteLibrary::load_json_file(path)
                .with_context(|| format!("failed to load library '{path}'"))?;
            library.remove_palette(id)?;
            library.save_json_file(path)?;
            println!("Removed palette '{}' and saved {}", id, path);
        }
        "list" => {
            let path = args.get(2).context("missing <lib.json>")?;
            let library = PaletteLibrary::load_json_file(path)?;
            println!("Library: {}", library.name);
            println!("Palettes:");
            for p in library.list_palettes() {
                println!(
                    "  {:<12} | {:<12} | {:<8} | h {:>5} s {:>5} | l {}..{} | {}",
                    p.id,
                    p.name,
                    p.value,
                    p.h,
                    p.s,
                    p.l_min,
                    p.l_max,
                    if p.use_lightness { "lightness" } else { "luminance" }
                );
            }
        }
        "export" => {
            let path = args.get(2).context("missing <lib.json>")?;
            let library = PaletteLibrary::load_json_file(path)?;
            let shaped = library.shaped()?;
            println!("{}", serde_json::to_string_pretty(&shaped)?);
        }

        _ => print_help(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn config_defaults_when_tweaks_omitted() -> anyhow::Result<()> {
        let cfg = config_from_args("x", "#22C55E", &args(&["swatches", "#22C55E"]), 2)?;
        assert_eq!(cfg, PaletteConfig::new("x", "#22C55E"));
        Ok(())
    }

    #[test]
    fn config_reads_all_tweaks() -> anyhow::Result<()> {
        let a = args(&[
            "swatch_cli",
            "add",
            "lib.json",
            "x",
            "abc",
            "3",
            "-1.5",
            "10",
            "90",
            "Luminance",
        ]);
        let cfg = config_from_args("x", "abc", &a, 5)?;
        assert_eq!(cfg.h, 3.0);
        assert_eq!(cfg.s, -1.5);
        assert_eq!(cfg.l_min, 10.0);
        assert_eq!(cfg.l_max, 90.0);
        assert!(!cfg.use_lightness);
        Ok(())
    }

    #[test]
    fn bad_numbers_and_modes_are_reported() {
        assert!(config_from_args("x", "abc", &args(&["a", "b", "wide"]), 2).is_err());
        assert!(config_from_args("x", "abc", &args(&["0", "0", "0", "100", "hsl"]), 0).is_err());
    }

    #[test]
    fn palette_command_prints_stops_in_order() -> anyhow::Result<()> {
        let json = palette_json("#22c55e")?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(value["c50"], "#E9FBF0");
        assert_eq!(value["c900"], "#072713");

        let positions: Vec<usize> = stops::output_stops()
            .map(|stop| json.find(&format!("\"{}\"", stops::stop_label(stop))))
            .collect::<Option<_>>()
            .context("every label present")?;
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
        Ok(())
    }

    #[test]
    fn palette_command_reports_bad_hex() {
        let err = palette_json("#22C5").map(|_| ()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid color format"));
    }
}
