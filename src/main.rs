use clap::Parser;
use integri_geo::gazetteer::{format_coords, Gazetteer, DEFAULT_LIMIT};
use integri_geo::server;
use std::path::PathBuf;

/// IntegriHomes location engine — resolves free-text queries against the
/// platform gazetteer, suggests autocomplete candidates, and ranks places
/// by great-circle distance.
///
/// Examples:
///   igeo Accra
///   igeo --query "east legon"
///   igeo --suggest ea --limit 3
///   igeo --near --lat 5.60 --lng -0.15
///   igeo --list
///   igeo --serve --port 8787
#[derive(Parser)]
#[command(name = "igeo", version, about, long_about = None)]
struct Cli {
    /// Location query (positional). Example: igeo Accra
    #[arg(index = 1)]
    query_positional: Option<String>,

    /// Location query (named). Example: --query "East Legon"
    #[arg(long)]
    query: Option<String>,

    /// Suggest autocomplete candidates for a partial input.
    #[arg(long)]
    suggest: Option<String>,

    /// Rank gazetteer entries by distance from --lat/--lng.
    #[arg(long)]
    near: bool,

    /// Latitude (-90 to 90), used with --near.
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude (-180 to 180), used with --near.
    #[arg(long, allow_hyphen_values = true)]
    lng: Option<f64>,

    /// Maximum results for --suggest and --near.
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Print the full gazetteer as JSON and exit.
    #[arg(long)]
    list: bool,

    /// Run the HTTP API server.
    #[arg(long)]
    serve: bool,

    /// Host to bind with --serve.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind with --serve.
    #[arg(long, short = 'p', default_value_t = 8787)]
    port: u16,

    /// Load the gazetteer from a JSON file instead of the built-in table.
    #[arg(long)]
    gazetteer: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // ── Load the gazetteer ──────────────────────────────────────

    let gazetteer = match &cli.gazetteer {
        Some(path) => Gazetteer::load_from(path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => Gazetteer::load_default(),
    };

    // ── Serve mode ──────────────────────────────────────────────

    if cli.serve {
        let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("Error: Cannot start async runtime: {}", e);
            std::process::exit(1);
        });
        runtime.block_on(server::start(&cli.host, cli.port, gazetteer));
        return;
    }

    // ── List mode ───────────────────────────────────────────────

    if cli.list {
        eprintln!("  {} gazetteer entries", gazetteer.len());
        println!("{}", serde_json::to_string_pretty(gazetteer.locations()).unwrap());
        return;
    }

    // ── Suggest mode ────────────────────────────────────────────

    if let Some(ref input) = cli.suggest {
        let suggestions = gazetteer.suggest(input, cli.limit);
        eprintln!("  {} candidate(s) for '{}'", suggestions.len(), input);
        println!("{}", serde_json::to_string_pretty(&suggestions).unwrap());
        return;
    }

    // ── Nearby mode ─────────────────────────────────────────────

    if cli.near {
        let (lat, lng) = match (cli.lat, cli.lng) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => {
                eprintln!("Error: --near requires --lat and --lng.");
                std::process::exit(1);
            }
        };
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            eprintln!("Error: Invalid coordinates. Lat: -90..90, Lng: -180..180");
            std::process::exit(1);
        }

        let results = gazetteer.nearby(lat, lng, cli.limit);
        eprintln!("  Nearest to {}:", format_coords(lat, lng));
        for entry in &results {
            eprintln!("    {:>8.2} km  {}", entry.distance_km, entry.location.name);
        }
        println!("{}", serde_json::to_string_pretty(&results).unwrap());
        return;
    }

    // ── Resolve mode ────────────────────────────────────────────

    // Priority: --query > positional > usage
    let query = match cli.query.as_deref().or(cli.query_positional.as_deref()) {
        Some(q) => q,
        None => {
            eprintln!("Error: No query specified.");
            eprintln!();
            eprintln!("Usage:");
            eprintln!("  igeo Accra");
            eprintln!("  igeo --query \"East Legon\"");
            eprintln!("  igeo --suggest ea");
            eprintln!("  igeo --near --lat 5.60 --lng -0.15");
            eprintln!("  igeo --serve --port 8787");
            std::process::exit(1);
        }
    };

    match gazetteer.resolve(query) {
        Ok(resolved) => {
            eprintln!(
                "  \u{1F4CD} {} \u{2014} {} (zoom {}, {} match)",
                resolved.location.name,
                format_coords(resolved.location.lat, resolved.location.lng),
                resolved.location.zoom,
                resolved.kind,
            );
            println!("{}", serde_json::to_string_pretty(&resolved).unwrap());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
