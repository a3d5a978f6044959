use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use serde_json::Value;
use shared::{BookingListResponse, CalendarMonth, VenueBooking};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use venue_calendar::{parse_calendar_date, BookingService, CalendarConfig, CalendarService};

/// Render a venue's availability calendar from a bookings file
#[derive(Parser, Debug)]
#[command(name = "venue-calendar", version, about)]
struct Cli {
    /// JSON file with the venue's bookings (a list, or `{ "data": [...] }`)
    #[arg(short, long)]
    bookings: PathBuf,

    /// Month to show (YYYY-MM); defaults to the check-in month or today
    #[arg(short, long)]
    month: Option<String>,

    /// Override today's date (YYYY-MM-DD)
    #[arg(long)]
    today: Option<String>,

    /// YAML calendar config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Days to click, in order (YYYY-MM-DD)
    #[arg(short, long, num_args = 1..)]
    pick: Vec<String>,

    /// Print the month as JSON instead of a text grid
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let calendar = CalendarService::with_config(CalendarConfig::load_or_default(cli.config.as_deref())?);
    let bookings_service = BookingService::with_config(calendar.config().clone());
    info!(
        "Calendar weeks start on {:?}, checkout day {:?}",
        calendar.config().week_start,
        calendar.config().checkout_day
    );

    let today = match &cli.today {
        Some(raw) => parse_day(raw)?,
        None => Local::now().date_naive(),
    };

    let bookings = load_bookings(&cli.bookings)?;
    info!("Loaded {} bookings from {:?}", bookings.len(), cli.bookings);

    let blocked = calendar.build_blocked_dates(&bookings);

    let mut selection = calendar.clear_selection();
    for raw in &cli.pick {
        let day = parse_day(raw)?;
        let grid = calendar.build_month_grid(day, today, &blocked, &selection);
        let Some(cell) = grid.days.iter().find(|cell| cell.date == day) else {
            bail!("{} is not on its own month grid", day);
        };
        if cell.is_disabled {
            warn!("{} is not available, click ignored", day);
        }
        selection = calendar.on_day_click(cell, &selection, &blocked);
    }

    let anchor = match &cli.month {
        Some(raw) => parse_day(&format!("{}-01", raw))?,
        None => calendar.initial_month(&selection, today),
    };
    let month = calendar.build_month_grid(anchor, today, &blocked, &selection);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&month)?);
    } else {
        print!("{}", render_month(&month));
        println!("Selection: {}", selection);
        if let Some(nights) = bookings_service.nights(&selection) {
            println!("Nights: {}", nights);
        }
    }

    Ok(())
}

fn parse_day(raw: &str) -> Result<NaiveDate> {
    parse_calendar_date(raw).with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", raw))
}

fn load_bookings(path: &Path) -> Result<Vec<VenueBooking>> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

    parse_bookings(&content).with_context(|| format!("Failed to parse bookings in {:?}", path))
}

/// Accepts either a bare list of bookings or the API's `{ "data": [...] }` envelope
fn parse_bookings(content: &str) -> Result<Vec<VenueBooking>> {
    let value: Value = serde_json::from_str(content)?;
    match value {
        Value::Array(_) => Ok(serde_json::from_value::<Vec<VenueBooking>>(value)?),
        Value::Object(_) => Ok(serde_json::from_value::<BookingListResponse>(value)?.data),
        _ => bail!("expected a list of bookings or an object with a \"data\" list"),
    }
}

fn render_month(month: &CalendarMonth) -> String {
    let mut out = format!("{:^28}\n", month.label);
    for label in &month.weekday_labels {
        out.push_str(&format!(" {:<3}", label));
    }
    out.push('\n');

    for week in month.weeks() {
        for day in week {
            let cell = if day.is_blocked {
                " xx ".to_string()
            } else if day.is_past {
                " .. ".to_string()
            } else if day.is_range_start || day.is_range_end || day.is_in_range {
                format!("[{:>2}]", day.day)
            } else if !day.in_current_month {
                "    ".to_string()
            } else {
                format!(" {:>2} ", day.day)
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}
