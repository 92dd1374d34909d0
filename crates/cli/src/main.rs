//! regdesk CLI entry point.
//!
//! Drives the registration desk against a remote registrant store: list and
//! search visitors, register/edit/remove them, and print badges. Badge
//! handoff goes through the file-backed channel, so `print` and `badge` can
//! run in separate invocations, like the two browser pages they stand for.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use regdesk_channel::FileChannel;
use regdesk_core::badge::BadgeRecord;
use regdesk_core::listview::PageSize;
use regdesk_core::visitor::{Attendance, Visitor, VisitorDraft};
use regdesk_screen::{BadgeScreen, BadgeState, ListScreen, Printer, ScreenResult};
use regdesk_store::{HttpVisitorStore, StoreError};

mod config;

use config::DeskConfig;

/// Event registration badge desk.
#[derive(Parser, Debug)]
#[command(name = "regdesk", about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List visitors with the live name filter and page window.
    List(ListArgs),
    /// Register a new visitor, optionally printing their badge right away.
    Add(AddArgs),
    /// Reassign a visitor's hall (omit --hall to clear the assignment).
    SetHall(SetHallArgs),
    /// Delete a visitor.
    Remove(IdArg),
    /// Print a visitor's badge: store the record and open the badge view.
    Print(IdArg),
    /// Render the badge view for a slug (triggers the one-shot print).
    Badge(BadgeArgs),
    /// Show halls with capacity and availability.
    Halls,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Case-insensitive name filter.
    #[arg(long, default_value = "")]
    query: String,

    /// Page to show (1-based).
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Rows per page: 10, 25, 50 or 100.
    #[arg(long, default_value_t = 10)]
    page_size: u32,
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long, default_value = "")]
    phone: String,

    #[arg(long, default_value = "")]
    organization: String,

    #[arg(long, default_value = "")]
    job_title: String,

    #[arg(long)]
    department: Option<String>,

    #[arg(long)]
    country: Option<String>,

    /// Mark attendance as confirmed.
    #[arg(long)]
    confirmed: bool,

    /// Hall display name; must match a hall known to the store.
    #[arg(long)]
    hall: Option<String>,

    /// Print the badge immediately after the store confirms the record.
    #[arg(long)]
    print: bool,
}

#[derive(Args, Debug)]
struct SetHallArgs {
    id: String,

    /// New hall display name. Omitting this clears the assignment.
    #[arg(long)]
    hall: Option<String>,
}

#[derive(Args, Debug)]
struct IdArg {
    id: String,
}

#[derive(Args, Debug)]
struct BadgeArgs {
    slug: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "regdesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = DeskConfig::from_env();

    match run(cli.command, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, config: DeskConfig) -> ScreenResult<()> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(StoreError::from)?;
    let store = Arc::new(HttpVisitorStore::with_client(http, config.store_base_url));
    let channel = Arc::new(FileChannel::new(config.badge_dir));

    match command {
        Commands::List(args) => {
            let mut screen = ListScreen::new(store, channel);
            screen.mount().await?;
            screen.set_page_size(PageSize::try_from(args.page_size)?);
            screen.set_query(args.query);
            if args.page > 1 {
                screen.go_to_page(args.page)?;
            }
            render_list(&screen);
        }
        Commands::Add(args) => {
            let mut screen = ListScreen::new(store, channel.clone());
            screen.mount().await?;
            let draft = VisitorDraft {
                name: args.name,
                email: args.email,
                phone: args.phone,
                organization: args.organization,
                job_title: args.job_title,
                department: args.department,
                country: args.country,
                attendance: args.confirmed.then_some(Attendance::Confirmed),
                hall: args.hall,
            };
            if args.print {
                let route = screen.add_and_print(draft).await?;
                println!("Registered and printed; badge stored at {}", route.path());
                open_badge_view(channel, route.slug()).await?;
            } else {
                let id = screen.add(draft).await?;
                println!("Registered visitor {id}");
            }
        }
        Commands::SetHall(args) => {
            let mut screen = ListScreen::new(store, channel);
            screen.mount().await?;
            screen.set_hall(&args.id, args.hall.as_deref()).await?;
            match screen.find(&args.id).and_then(|v| v.hall.as_deref()) {
                Some(hall) => println!("Visitor {} assigned to {hall}", args.id),
                None => println!("Visitor {} hall cleared", args.id),
            }
        }
        Commands::Remove(args) => {
            let mut screen = ListScreen::new(store, channel);
            screen.mount().await?;
            screen.remove(&args.id).await?;
            println!("Removed visitor {}", args.id);
        }
        Commands::Print(args) => {
            let mut screen = ListScreen::new(store, channel.clone());
            screen.mount().await?;
            let route = screen.print(&args.id).await?;
            println!("Badge stored; navigating to {}", route.path());
            open_badge_view(channel, route.slug()).await?;
        }
        Commands::Badge(args) => {
            open_badge_view(channel, &args.slug).await?;
        }
        Commands::Halls => {
            let mut screen = ListScreen::new(store, channel);
            screen.mount().await?;
            println!("{:<4} {:<20} {:>8} {:>12}", "ID", "Name", "Capacity", "Available");
            for hall in screen.halls() {
                println!(
                    "{:<4} {:<20} {:>8} {:>12}",
                    hall.id, hall.name, hall.capacity, hall.availability
                );
            }
        }
    }

    Ok(())
}

/// Mount the badge view for `slug` and let its deferred print run.
async fn open_badge_view(channel: Arc<FileChannel>, slug: &str) -> ScreenResult<()> {
    let mut badge = BadgeScreen::new(channel, Arc::new(ConsolePrinter));
    badge.mount(slug).await?;
    match badge.state() {
        BadgeState::Loading => {
            // No record under this slug; the real page would sit on its
            // loading screen forever, so just say so and return.
            println!("Loading badge...");
        }
        BadgeState::Ready(record) => {
            println!("Badge ready for {}", record.name);
        }
    }
    if let Some(task) = badge.take_print_task() {
        task.await.map_err(|err| {
            regdesk_core::error::CoreError::Internal(format!("print task failed: {err}"))
        })?;
    }
    Ok(())
}

fn render_list(screen: &ListScreen) {
    println!(
        "{:<4} {:<20} {:<28} {:<22} {:<10} {:<12}",
        "ID", "Name", "Email", "Organization", "Status", "Hall"
    );
    for visitor in screen.visible() {
        println!(
            "{:<4} {:<20} {:<28} {:<22} {:<10} {:<12}",
            visitor.id,
            visitor.name,
            visitor.email,
            visitor.organization,
            attendance_label(visitor),
            visitor.hall.as_deref().unwrap_or("-"),
        );
    }
    let window = screen.window();
    if window.total_rows == 0 {
        println!("No visitors found");
    }
    println!(
        "Showing {}-{} of {} (page {} of {})",
        window.first_row, window.last_row, window.total_rows, window.page, window.total_pages
    );
}

/// Uniform display mapping: confirmed and pending are spelled out, unset is
/// shown as pending as well (the store cannot tell the two apart on read
/// anyway once a write normalizes them to null).
fn attendance_label(visitor: &Visitor) -> &'static str {
    match visitor.attendance {
        Some(Attendance::Confirmed) => "Confirmed",
        Some(Attendance::Pending) | None => "Pending",
    }
}

/// Stands in for the browser's print dialog: renders the badge as text on
/// stdout.
struct ConsolePrinter;

impl Printer for ConsolePrinter {
    fn print(&self, badge: &BadgeRecord) {
        println!("+----------------------------------------+");
        println!("| {:^38} |", badge.name.to_uppercase());
        println!("| {:^38} |", badge.organization);
        println!("| {:^38} |", badge.job_title);
        println!(
            "| {:^38} |",
            badge.hall.as_deref().unwrap_or("").to_uppercase()
        );
        println!("| {:^38} |", format!("band color {}", badge.color));
        println!("+----------------------------------------+");
    }
}
