use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::warn;

use fuel_dispatch::storefront::{
    LocationStatus, ServiceType, Session, SessionConfig, VendorId, DEFAULT_DISTANCE_KM,
    TICK_INTERVAL_SECS,
};

#[derive(Parser)]
#[command(name = "fuel_dispatch")]
#[command(about = "Play a headless fuel & mechanic storefront session")]
struct Cli {
    /// Service tab to browse
    #[arg(long, value_enum, default_value_t = ServiceArg::Fuel)]
    service: ServiceArg,

    /// Search text matched against vendor names
    #[arg(long, default_value = "")]
    search: String,

    /// Distance filter in km (clamped to 1..=20)
    #[arg(long, default_value_t = DEFAULT_DISTANCE_KM)]
    max_distance: f64,

    /// Vendor id to add to the cart (repeatable)
    #[arg(long = "add")]
    add: Vec<u32>,

    /// Cart index to remove after adding (repeatable, applied in order)
    #[arg(long = "remove")]
    remove: Vec<usize>,

    /// Seed for the discount coin
    #[arg(long)]
    seed: Option<u64>,

    /// Stop tracking after this many ticks even if the delivery is not done
    #[arg(long, default_value = "1000")]
    max_ticks: u32,

    /// Wall-clock milliseconds to sleep between ticks
    #[arg(long, default_value = "1000")]
    tick_ms: u64,

    /// Resolved position as "LAT,LON"
    #[arg(long, value_parser = parse_coordinates, conflicts_with = "location_error")]
    location: Option<(f64, f64)>,

    /// Simulate a failed position request
    #[arg(long, value_enum)]
    location_error: Option<LocationErrorArg>,

    /// Print the profile and order history at the end
    #[arg(long)]
    profile: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ServiceArg {
    Fuel,
    Mechanic,
}

impl From<ServiceArg> for ServiceType {
    fn from(arg: ServiceArg) -> Self {
        match arg {
            ServiceArg::Fuel => ServiceType::Fuel,
            ServiceArg::Mechanic => ServiceType::Mechanic,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LocationErrorArg {
    Unsupported,
    Denied,
    Unavailable,
    Timeout,
    Unknown,
}

fn parse_coordinates(value: &str) -> Result<(f64, f64), String> {
    let (lat, lon) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got '{}'", value))?;
    let lat = lat.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let lon = lon.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok((lat, lon))
}

fn location_status(cli: &Cli) -> LocationStatus {
    match (cli.location, cli.location_error) {
        (Some((latitude, longitude)), _) => LocationStatus::Resolved {
            latitude,
            longitude,
        },
        (None, Some(LocationErrorArg::Unsupported)) => LocationStatus::Unsupported,
        (None, Some(LocationErrorArg::Denied)) => LocationStatus::PermissionDenied,
        (None, Some(LocationErrorArg::Unavailable)) => LocationStatus::PositionUnavailable,
        (None, Some(LocationErrorArg::Timeout)) => LocationStatus::Timeout,
        (None, Some(LocationErrorArg::Unknown)) => LocationStatus::Unknown,
        (None, None) => LocationStatus::Pending,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,fuel_dispatch=info"),
    )
    .init();

    let cli = Cli::parse();
    run_headless(&cli)
}

/// Play one session: browse, fill the cart, order, then track until delivered
fn run_headless(cli: &Cli) -> Result<()> {
    let config = SessionConfig {
        tick_interval_secs: TICK_INTERVAL_SECS,
        initial_max_distance_km: cli.max_distance,
        initial_service: cli.service.into(),
        seed: cli.seed,
    };
    let mut session = Session::with_config(config);
    session.set_location(location_status(cli));

    println!("Initial state:");
    println!("{}", session.summary());
    println!("Catalog: {} vendor(s)", session.catalog().len());
    println!();

    session
        .choose_service(cli.service.into())
        .context("Failed to start browsing")?;
    session.filter.search_term = cli.search.clone();

    println!(
        "--- Browsing {} within {} km ({}) ---",
        session.filter.service_type,
        session.filter.max_distance_km(),
        session.location_text()
    );
    let visible = session.visible_vendors();
    if visible.is_empty() {
        println!("{}", session.filter.empty_message());
    }
    for vendor in visible {
        println!("  {}", vendor.describe());
    }
    println!();

    for id in &cli.add {
        if let Err(e) = session.add_to_cart_by_id(VendorId(*id)) {
            warn!("Skipping vendor: {}", e);
        }
    }
    for index in &cli.remove {
        if let Err(e) = session.remove_from_cart(*index) {
            warn!("Skipping removal: {}", e);
        }
    }

    session.open_cart();
    println!("--- Cart ({} item(s)) ---", session.cart_count());
    for (index, vendor) in session.cart().iter().enumerate() {
        println!("  [{}] {}", index, vendor.describe());
    }
    println!("{}", session.price_breakdown().summary());
    println!();

    let receipt = match session.place_order() {
        Ok(receipt) => receipt,
        Err(e) => {
            warn!("Order not placed: {}", e);
            println!("Your cart is empty. Add items to your cart to place an order.");
            println!("{}", session.summary());
            return Ok(());
        }
    };
    println!(
        "Order placed: {} item(s), discount ₹{}, total ₹{}",
        receipt.items.len(),
        receipt.discount,
        receipt.total
    );
    println!();

    let tick_delta = session.config().tick_interval_secs;
    let mut tick = 0;
    while tick < cli.max_ticks && session.is_ticking() {
        tick += 1;
        session.update(tick_delta);

        let snapshot = session
            .tracking_snapshot()
            .context("Tracked order disappeared while ticking")?;
        if tick % 10 == 0 || snapshot.is_delivered {
            println!("--- After tick {} ---", tick);
            println!("{}", snapshot.summary());
        }

        if cli.tick_ms > 0 && session.is_ticking() {
            std::thread::sleep(std::time::Duration::from_millis(cli.tick_ms));
        }
    }

    let snapshot = session
        .tracking_snapshot()
        .context("Tracked order disappeared after ticking")?;
    println!();
    println!("=== Final State ===");
    println!("{}", snapshot.summary());
    println!("[{}]", snapshot.dismiss_label());
    session.dismiss_tracking();

    if cli.profile {
        session.open_profile();
        println!();
        println!("--- Profile ---");
        println!("{}", session.profile.summary());
        println!("Order history:");
        for vendor in session.order_history() {
            println!("  {}", vendor.describe());
        }
    }

    println!("{}", session.summary());
    Ok(())
}
