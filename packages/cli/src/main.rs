#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line presentation for the field finder pipeline.
//!
//! Selects a city, loads its fields, applies the requested filters, and
//! prints the visible list plus the city's map center.

use clap::Parser;
use field_map_filter::{FilterState, SurfaceFilter, apply_filters, hours};
use field_map_loader::FieldLoader;
use field_map_source::registry;

#[derive(Parser)]
#[command(name = "field_map_cli", about = "Public sports field finder")]
struct Cli {
    /// City to load (e.g., "pasadena" or "irvine")
    #[arg(long, default_value = "pasadena")]
    city: String,
    /// Only show fields with lights
    #[arg(long)]
    lights: bool,
    /// Only show fields lined for soccer
    #[arg(long)]
    soccer: bool,
    /// Only show fields open right now
    #[arg(long)]
    open_now: bool,
    /// Surface restriction: any, turf, or grass
    #[arg(long, default_value = "any")]
    surface: String,
    /// Case-insensitive search over name or neighborhood
    #[arg(long, default_value = "")]
    search: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let Some(city) = registry::lookup(&cli.city) else {
        let known: Vec<String> = registry::all_cities()
            .into_iter()
            .map(|city| city.id)
            .collect();
        return Err(format!(
            "unknown city {:?} (known cities: {})",
            cli.city,
            known.join(", ")
        )
        .into());
    };

    let surface: SurfaceFilter = cli
        .surface
        .parse()
        .map_err(|_| format!("unknown surface {:?} (expected any, turf, or grass)", cli.surface))?;

    let filter = FilterState {
        lights_only: cli.lights,
        soccer_lines_only: cli.soccer,
        open_now_only: cli.open_now,
        surface,
        search: cli.search,
    };

    let loader = FieldLoader::new();
    let token = loader.begin();
    let fields = loader.load(&city, token).await?;

    let now = chrono::Local::now().naive_local();
    let visible = apply_filters(&fields, &filter, now);

    println!(
        "{} — map center {:.4}, {:.4}",
        city.label, city.center.lat, city.center.lng
    );
    println!("Showing {} of {} fields", visible.len(), fields.len());

    if visible.is_empty() {
        println!("No fields match your filters.");
        return Ok(());
    }

    for field in visible {
        let status = if hours::is_open_at(field, now) {
            "Open now"
        } else {
            "Closed now"
        };

        println!();
        println!("{}", field.name);
        println!("  {} · {}", field.neighborhood, field.address);
        println!(
            "  surface: {}  lights: {}  soccer: {}  goals: {}",
            field.surface,
            yes_no(field.has_lights),
            yes_no(field.has_soccer_lines),
            yes_no(field.has_goals)
        );
        let desc = if field.short_desc.is_empty() {
            &field.extra_desc
        } else {
            &field.short_desc
        };
        if !desc.is_empty() {
            println!("  {desc}");
        }
        println!("  {status} · Today: {}", hours::format_today_hours(field, now));
        if let Some(website) = &field.website {
            println!("  {website}");
        }
    }

    Ok(())
}

const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
