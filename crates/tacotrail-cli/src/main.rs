use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::sync::{mpsc, Arc};
use tacotrail_core::models::Venue;
use tacotrail_core::{Catalog, Config, FavoriteSet, FilterCriteria, VenueBrowser};
use tacotrail_maps::{
    compose, embedded, links, FixedLocation, LinkTarget, LocationProvider, NoLocation,
    SystemOpener, UrlOpener,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tacotrail")]
#[command(version, about = "Terminal guide to the Chattanooga taco trail", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List venues matching the given filters
    List {
        /// Free-text search over names, descriptions, and menus
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        vegetarian: bool,
        #[arg(long)]
        vegan: bool,
        #[arg(long)]
        gluten_free: bool,
        /// Emit JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Print (or open) a directions link for one venue
    Directions {
        /// Venue id, as shown by `list`
        id: String,
        #[arg(long, value_enum, default_value = "web")]
        target: TargetArg,
        /// Hand the link to the system opener instead of printing it
        #[arg(long)]
        open: bool,
    },
    /// Print the embeddable map URL for the filtered set
    MapUrl {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        vegetarian: bool,
        #[arg(long)]
        vegan: bool,
        #[arg(long)]
        gluten_free: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TargetArg {
    Web,
    Ios,
    Android,
}

impl From<TargetArg> for LinkTarget {
    fn from(target: TargetArg) -> Self {
        match target {
            TargetArg::Web => LinkTarget::Web,
            TargetArg::Ios => LinkTarget::Ios,
            TargetArg::Android => LinkTarget::Android,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when things go sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tacotrail=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;
    let catalog = Catalog::builtin().context("Failed to load venue catalog")?;

    match cli.command {
        Some(Commands::List {
            search,
            vegetarian,
            vegan,
            gluten_free,
            json,
        }) => {
            let criteria = criteria_from_flags(search, vegetarian, vegan, gluten_free);
            let venues =
                tacotrail_core::filter(catalog.venues(), &criteria, &FavoriteSet::new());
            if json {
                println!("{}", serde_json::to_string_pretty(&venues)?);
            } else {
                print_cards(&venues);
            }
        }
        Some(Commands::Directions { id, target, open }) => {
            let venue = catalog
                .get(&id)
                .ok_or_else(|| tacotrail_core::Error::NotFound(id.clone()))?;
            let url = links::directions_url(&venue.name, venue.coord(), target.into());
            if open {
                SystemOpener.open(&url)?;
                println!("Opening directions to {}", venue.name);
            } else {
                println!("{}", url);
            }
        }
        Some(Commands::MapUrl {
            search,
            vegetarian,
            vegan,
            gluten_free,
        }) => {
            let criteria = criteria_from_flags(search, vegetarian, vegan, gluten_free);
            let venues =
                tacotrail_core::filter(catalog.venues(), &criteria, &FavoriteSet::new());
            println!(
                "{}",
                embedded::embed_url(config.map.center(), config.map.zoom, &venues)
            );
        }
        None => {
            run_browser(config, catalog).await?;
        }
    }

    Ok(())
}

fn criteria_from_flags(
    search: Option<String>,
    vegetarian: bool,
    vegan: bool,
    gluten_free: bool,
) -> FilterCriteria {
    FilterCriteria {
        search: search.unwrap_or_default(),
        favorites_only: false,
        vegetarian,
        vegan,
        gluten_free,
    }
}

fn print_cards(venues: &[Venue]) {
    if venues.is_empty() {
        println!("No venues match those filters.");
        return;
    }

    for venue in venues {
        println!("[{}] {}", venue.id, venue.name);
        println!("    {}", venue.address);
        if let Some(description) = &venue.description {
            println!("    {}", description);
        }
        println!("    Featured: {}", venue.featured_item_display());
        if !venue.specialties.is_empty() {
            println!("    Specialties: {}", venue.specialties.join(", "));
        }
        if let Some(website) = &venue.website {
            println!("    {}", website);
        }
        println!();
    }
}

/// Wire everything together and hand off to the TUI.
///
/// This is the composition root: the map backend and the location
/// provider are both chosen here, once, from config.
async fn run_browser(config: Config, catalog: Catalog) -> anyhow::Result<()> {
    let browser = VenueBrowser::new(catalog);
    let opener: Arc<dyn UrlOpener> = Arc::new(SystemOpener);

    // Marker taps flow back to the app through this channel
    let (tap_tx, tap_rx) = mpsc::channel();
    let on_tap = Box::new(move |venue: &Venue| {
        let _ = tap_tx.send(venue.id.clone());
    });

    let presenter = compose(&config.map, on_tap, opener.clone());

    let location: Arc<dyn LocationProvider> = match config.location.fixed_position() {
        Some(position) => {
            tracing::info!("Using fixed location {}", position);
            Arc::new(FixedLocation::new(position))
        }
        None => Arc::new(NoLocation),
    };

    let app = tacotrail_tui::App::new(browser, presenter, opener);
    tacotrail_tui::run_tui(app, location, tap_rx, config.ui.mouse_enabled).await
}
