//! CLI front-end for the Slotify vendor-booking API.
#![allow(
    clippy::exit,
    reason = "CLI binary uses process::exit for fatal errors"
)]

use std::io::{self, BufRead as _, Write as _};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use slotify_rs::error::Result as SlotifyResult;
use slotify_rs::flow::{BookingForm, LoginEvent, LoginFlow};
use slotify_rs::models::{
    AdminStats, Booking, BookingId, BookingStatus, Category, CategoryId, CategoryInput, Event,
    EventId, EventInput, EventStatus, Notification, UpdateProfileRequest, Vendor, VendorId,
    VendorInput,
};
use slotify_rs::storage::FileProfileStore;
use slotify_rs::store::BlockingStore;

/// Environment variable overriding the API base URL.
const API_URL_ENV: &str = "SLOTIFY_API_URL";

/// Fallback text for an unpopulated reference.
const UNKNOWN_VENDOR: &str = "Unknown Vendor";

/// Fallback text for an unpopulated category reference.
const UNKNOWN_CATEGORY: &str = "Unknown Category";

/// Fallback text for a missing contact detail.
const CONTACT_FOR_DETAILS: &str = "Contact for details";

/// Slotify API CLI — browse vendors, book services, manage the
/// marketplace.
#[derive(Debug, Parser)]
#[command(name = "slotify", version, about)]
struct Cli {
    /// Override the API base URL (default: $SLOTIFY_API_URL).
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,
    /// Override the profile storage directory (default: XDG data dir).
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Sign in with a one-time passcode sent to your email.
    Login,
    /// Sign out and forget the stored session.
    Logout,
    /// Show the signed-in profile, or update it with the given flags.
    Profile {
        /// New display name.
        #[arg(long)]
        name: Option<String>,
        /// New phone number.
        #[arg(long)]
        phone: Option<String>,
    },
    /// List vendor categories.
    Categories,
    /// List vendors, optionally filtered by category.
    Vendors {
        /// Category id to filter by.
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one vendor in detail.
    Vendor {
        /// Vendor id.
        id: String,
    },
    /// Book a vendor (pay-later: the booking starts as "pending").
    Book(BookArgs),
    /// List your own bookings.
    MyBookings,
    /// List bookings addressed to a vendor.
    VendorBookings {
        /// Vendor id to filter by.
        #[arg(long)]
        vendor: Option<String>,
    },
    /// Confirm or cancel a booking (vendor action).
    BookingStatus {
        /// Booking id.
        id: String,
        /// New status: pending, confirmed, or cancelled.
        #[arg(value_parser = parse_status)]
        status: BookingStatus,
    },
    /// Show notifications, or act on them with the given flags.
    Notifications(NotificationArgs),
    /// Administrator surface: stats and CRUD for events, vendors,
    /// categories, and bookings.
    #[command(subcommand)]
    Admin(AdminCommand),
}

/// Arguments for the `book` subcommand: the five booking form fields.
#[derive(Debug, Args)]
struct BookArgs {
    /// Vendor id to book.
    vendor_id: String,
    /// Your full name.
    #[arg(long, default_value = "")]
    name: String,
    /// Your email address.
    #[arg(long, default_value = "")]
    email: String,
    /// Your phone number.
    #[arg(long, default_value = "")]
    phone: String,
    /// Event date (YYYY-MM-DD).
    #[arg(long, default_value = "")]
    date: String,
    /// Special requests.
    #[arg(long, default_value = "")]
    notes: String,
}

/// Arguments for the `notifications` subcommand.
#[derive(Debug, Args)]
struct NotificationArgs {
    /// Mark one notification as read.
    #[arg(long, value_name = "ID")]
    mark_read: Option<String>,
    /// Mark every notification as read.
    #[arg(long)]
    read_all: bool,
    /// Delete one notification.
    #[arg(long, value_name = "ID")]
    delete: Option<String>,
}

/// Admin subcommands, one per dashboard tab.
#[derive(Debug, Subcommand)]
enum AdminCommand {
    /// Show aggregate counters.
    Stats,
    /// Manage event listings.
    #[command(subcommand)]
    Events(EventCommand),
    /// Manage vendors.
    #[command(subcommand)]
    Vendors(VendorCommand),
    /// Manage categories.
    #[command(subcommand)]
    Categories(CategoryCommand),
    /// Manage bookings.
    #[command(subcommand)]
    Bookings(BookingCommand),
}

/// Event CRUD subcommands.
#[derive(Debug, Subcommand)]
enum EventCommand {
    /// List all event listings.
    List,
    /// Create an event listing.
    Add(EventForm),
    /// Update an event listing.
    Edit {
        /// Event id.
        id: String,
        /// Replacement field values.
        #[command(flatten)]
        form: EventForm,
    },
    /// Delete an event listing (asks for confirmation).
    Delete {
        /// Event id.
        id: String,
    },
}

/// Event form fields, shared by add and edit.
#[derive(Debug, Args)]
struct EventForm {
    /// Event name.
    #[arg(long)]
    name: String,
    /// Owning category id.
    #[arg(long)]
    category: String,
    /// Description.
    #[arg(long)]
    description: Option<String>,
    /// Venue name.
    #[arg(long)]
    venue: Option<String>,
    /// Street address.
    #[arg(long)]
    address: Option<String>,
    /// City.
    #[arg(long)]
    city: Option<String>,
    /// Event date (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    date: Option<slotify_rs::models::NaiveDate>,
    /// Start time (HH:MM).
    #[arg(long)]
    start_time: Option<String>,
    /// End time (HH:MM).
    #[arg(long)]
    end_time: Option<String>,
    /// Maximum attendance.
    #[arg(long)]
    capacity: Option<u32>,
    /// Ticket price.
    #[arg(long)]
    ticket_price: Option<f64>,
    /// Organizer name.
    #[arg(long)]
    organizer: Option<String>,
    /// Organizer phone contact.
    #[arg(long)]
    organizer_contact: Option<String>,
    /// Organizer email.
    #[arg(long)]
    organizer_email: Option<String>,
    /// Image URL.
    #[arg(long)]
    image: Option<String>,
    /// Status: upcoming, ongoing, completed, or cancelled.
    #[arg(long, value_parser = parse_event_status, default_value = "upcoming")]
    status: EventStatus,
    /// Feature the event on the home page.
    #[arg(long)]
    featured: bool,
    /// Comma-separated search tags.
    #[arg(long, default_value = "")]
    tags: String,
}

impl EventForm {
    /// Converts the form into the request body.
    fn into_input(self) -> EventInput {
        EventInput {
            name: self.name,
            category_id: CategoryId::new(self.category),
            description: self.description,
            venue: self.venue,
            address: self.address,
            city: self.city,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            capacity: self.capacity,
            ticket_price: self.ticket_price,
            organizer: self.organizer,
            organizer_contact: self.organizer_contact,
            organizer_email: self.organizer_email,
            image: self.image,
            status: self.status,
            is_featured: self.featured,
            tags: split_csv(&self.tags),
        }
    }
}

/// Vendor CRUD subcommands.
#[derive(Debug, Subcommand)]
enum VendorCommand {
    /// List all vendors.
    List,
    /// Create a vendor.
    Add(VendorForm),
    /// Update a vendor.
    Edit {
        /// Vendor id.
        id: String,
        /// Replacement field values.
        #[command(flatten)]
        form: VendorForm,
    },
    /// Delete a vendor (asks for confirmation).
    Delete {
        /// Vendor id.
        id: String,
    },
}

/// Vendor form fields, shared by add and edit.
#[derive(Debug, Args)]
struct VendorForm {
    /// Vendor name.
    #[arg(long)]
    name: String,
    /// Owning category id.
    #[arg(long)]
    category: String,
    /// Contact email.
    #[arg(long)]
    email: Option<String>,
    /// Contact phone number.
    #[arg(long)]
    phone: Option<String>,
    /// Starting price.
    #[arg(long)]
    price: Option<f64>,
    /// Upper bound of the price range.
    #[arg(long)]
    max_price: Option<f64>,
    /// Average rating.
    #[arg(long)]
    rating: Option<f64>,
    /// Image URL.
    #[arg(long)]
    image: Option<String>,
    /// Comma-separated services.
    #[arg(long, default_value = "")]
    services: String,
    /// Description.
    #[arg(long)]
    description: Option<String>,
    /// Mark the vendor as unavailable for new bookings.
    #[arg(long)]
    unavailable: bool,
}

impl VendorForm {
    /// Converts the form into the request body.
    fn into_input(self) -> VendorInput {
        VendorInput {
            name: self.name,
            category_id: CategoryId::new(self.category),
            email: self.email,
            phone: self.phone,
            price: self.price,
            max_price: self.max_price,
            rating: self.rating,
            image: self.image,
            services: split_csv(&self.services),
            description: self.description,
            availability: !self.unavailable,
        }
    }
}

/// Category CRUD subcommands.
#[derive(Debug, Subcommand)]
enum CategoryCommand {
    /// List all categories.
    List,
    /// Create a category.
    Add {
        /// Category name.
        #[arg(long)]
        name: String,
        /// Image URL.
        #[arg(long)]
        image: Option<String>,
        /// Description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a category.
    Edit {
        /// Category id.
        id: String,
        /// Category name.
        #[arg(long)]
        name: String,
        /// Image URL.
        #[arg(long)]
        image: Option<String>,
        /// Description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a category (asks for confirmation).
    Delete {
        /// Category id.
        id: String,
    },
}

/// Booking admin subcommands.
#[derive(Debug, Subcommand)]
enum BookingCommand {
    /// List all bookings.
    List,
    /// Set a booking's status.
    Status {
        /// Booking id.
        id: String,
        /// New status: pending, confirmed, or cancelled.
        #[arg(value_parser = parse_status)]
        status: BookingStatus,
    },
}

/// Parses a date string in `YYYY-MM-DD` format for clap.
fn parse_date(s: &str) -> Result<slotify_rs::models::NaiveDate, String> {
    slotify_rs::models::NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|err| format!("{err}"))
}

/// Parses a booking status for clap.
fn parse_status(s: &str) -> Result<BookingStatus, String> {
    match s {
        "pending" => Ok(BookingStatus::Pending),
        "confirmed" => Ok(BookingStatus::Confirmed),
        "cancelled" => Ok(BookingStatus::Cancelled),
        other => Err(format!(
            "unknown status '{other}' (expected pending, confirmed, or cancelled)"
        )),
    }
}

/// Parses an event status for clap.
fn parse_event_status(s: &str) -> Result<EventStatus, String> {
    match s {
        "upcoming" => Ok(EventStatus::Upcoming),
        "ongoing" => Ok(EventStatus::Ongoing),
        "completed" => Ok(EventStatus::Completed),
        "cancelled" => Ok(EventStatus::Cancelled),
        other => Err(format!(
            "unknown status '{other}' (expected upcoming, ongoing, completed, or cancelled)"
        )),
    }
}

/// Splits a comma-separated flag value, dropping empty entries.
fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// The store type used by the CLI.
type CliStore = BlockingStore<FileProfileStore>;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            let _ignored = writeln!(io::stderr().lock(), "error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the CLI, returning an appropriate exit code.
fn run() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let _dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let api_url = cli
        .api_url
        .or_else(|| std::env::var(API_URL_ENV).ok().filter(|v| !v.is_empty()));

    let store = match create_store(api_url, cli.data_dir) {
        Ok(store) => store,
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to initialize: {err}",
                "error:".red().bold()
            )?;
            return Ok(ExitCode::FAILURE);
        }
    };

    dispatch(store, cli.command)
}

/// Creates the store: file-backed profile storage plus the configured
/// base URL. A persisted session is restored here.
fn create_store(api_url: Option<String>, data_dir: Option<PathBuf>) -> SlotifyResult<CliStore> {
    let dir = match data_dir {
        Some(dir) => dir,
        None => FileProfileStore::default_dir()?,
    };
    let profiles = FileProfileStore::new(dir)?;

    let mut builder = CliStore::builder().profile_store(profiles);
    if let Some(url) = api_url {
        builder = builder.base_url(url);
    }
    builder.build()
}

/// Dispatches to the appropriate subcommand handler.
fn dispatch(mut store: CliStore, command: Command) -> io::Result<ExitCode> {
    match command {
        Command::Login => cmd_login(&mut store),
        Command::Logout => cmd_logout(&mut store),
        Command::Profile { name, phone } => cmd_profile(&mut store, name, phone),
        Command::Categories => cmd_categories(&mut store),
        Command::Vendors { category } => cmd_vendors(&mut store, category),
        Command::Vendor { id } => cmd_vendor(&mut store, id),
        Command::Book(args) => cmd_book(&mut store, args),
        Command::MyBookings => cmd_my_bookings(&mut store),
        Command::VendorBookings { vendor } => cmd_vendor_bookings(&mut store, vendor),
        Command::BookingStatus { id, status } => cmd_booking_status(&mut store, id, status),
        Command::Notifications(args) => cmd_notifications(&mut store, args),
        Command::Admin(admin) => dispatch_admin(&store, admin),
    }
}

/// Dispatches admin subcommands.
fn dispatch_admin(store: &CliStore, command: AdminCommand) -> io::Result<ExitCode> {
    match command {
        AdminCommand::Stats => cmd_admin_stats(store),
        AdminCommand::Events(events) => cmd_admin_events(store, events),
        AdminCommand::Vendors(vendors) => cmd_admin_vendors(store, vendors),
        AdminCommand::Categories(categories) => cmd_admin_categories(store, categories),
        AdminCommand::Bookings(bookings) => cmd_admin_bookings(store, bookings),
    }
}

// ── Shared helpers ──────────────────────────────────────────────────────

/// Creates a spinner with the given message.
fn make_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_owned());
    spinner.enable_steady_tick(core::time::Duration::from_millis(100));
    spinner
}

/// Prints an error line to stderr.
fn print_error(err: &dyn core::fmt::Display) -> io::Result<()> {
    writeln!(io::stderr().lock(), "{} {err}", "error:".red().bold())
}

/// Prints a success line to stdout.
fn print_ok(message: &str) -> io::Result<()> {
    writeln!(io::stdout().lock(), "{} {message}", "ok:".green().bold())
}

/// Reads one trimmed line from stdin after printing a prompt.
fn prompt(label: &str) -> io::Result<String> {
    let mut out = io::stdout().lock();
    write!(out, "{label}: ")?;
    out.flush()?;
    let mut line = String::new();
    let _read = io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

/// Asks for deletion confirmation; anything but `y`/`yes` declines.
fn confirm_delete() -> io::Result<bool> {
    let answer = prompt("Are you sure you want to delete this item? [y/N]")?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

/// Runs a store operation behind a spinner, printing the slice-style
/// error on failure.
fn with_spinner<T, F: FnOnce() -> SlotifyResult<T>>(
    message: &str,
    op: F,
) -> io::Result<Option<T>> {
    let spinner = make_spinner(message);
    let result = op();
    spinner.finish_and_clear();
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            print_error(&err)?;
            Ok(None)
        }
    }
}

/// Formats a price range with the defensive fallback.
fn format_price_range(vendor: &Vendor) -> String {
    match (vendor.price, vendor.max_price) {
        (Some(min), Some(max)) => format!("{min:.0} - {max:.0}"),
        (Some(min), None) => format!("from {min:.0}"),
        (None, _) => CONTACT_FOR_DETAILS.to_owned(),
    }
}

/// Formats an optional string cell with an `N/A` fallback.
fn or_na(value: Option<&str>) -> String {
    value.map_or_else(|| "N/A".to_owned(), ToOwned::to_owned)
}

/// Returns the colored cell for a booking status.
fn status_cell(status: BookingStatus) -> Cell {
    let cell = Cell::new(status.as_str());
    match status {
        BookingStatus::Pending => cell.fg(Color::Yellow),
        BookingStatus::Confirmed => cell.fg(Color::Green),
        BookingStatus::Cancelled => cell.fg(Color::Red),
    }
}

// ── Session commands ────────────────────────────────────────────────────

/// Executes the `login` subcommand: the two-step OTP flow.
fn cmd_login(store: &mut CliStore) -> io::Result<ExitCode> {
    if store.is_authenticated() {
        print_ok("already signed in; run `slotify logout` first to switch accounts")?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut flow = LoginFlow::default();

    let email = prompt("Email address")?;
    let sent = with_spinner("Sending OTP...", || store.send_otp(&email))?;
    if sent.is_none() {
        return Ok(ExitCode::FAILURE);
    }
    flow = flow.on(LoginEvent::OtpSent {
        email: email.clone(),
    });

    writeln!(
        io::stdout().lock(),
        "Code sent to {}",
        flow.pending_email().unwrap_or(&email).bold()
    )?;

    let otp = prompt("Verification code")?;
    let verified = with_spinner("Verifying...", || store.verify_otp(&email, &otp))?;
    if verified.is_none() {
        return Ok(ExitCode::FAILURE);
    }
    flow = flow.on(LoginEvent::OtpVerified);
    if !flow.is_authenticated() {
        return Ok(ExitCode::FAILURE);
    }

    let name = store
        .state()
        .auth
        .user
        .as_ref()
        .map_or_else(String::new, |user| user.name.clone());
    print_ok(&format!("signed in as {name}"))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `logout` subcommand.
fn cmd_logout(store: &mut CliStore) -> io::Result<ExitCode> {
    match store.logout() {
        Ok(()) => {
            print_ok("signed out")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            print_error(&err)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Executes the `profile` subcommand: show, or update when flags are
/// given.
fn cmd_profile(
    store: &mut CliStore,
    name: Option<String>,
    phone: Option<String>,
) -> io::Result<ExitCode> {
    if !store.is_authenticated() {
        print_error(&"not signed in; run `slotify login`")?;
        return Ok(ExitCode::FAILURE);
    }

    if name.is_some() || phone.is_some() {
        let request = UpdateProfileRequest { name, phone };
        if with_spinner("Updating profile...", || store.update_profile(&request))?.is_none() {
            return Ok(ExitCode::FAILURE);
        }
    }

    let mut out = io::stdout().lock();
    if let Some(user) = &store.state().auth.user {
        writeln!(out, "{}  {}", "Name:".bold(), user.name)?;
        writeln!(out, "{} {}", "Email:".bold(), user.email)?;
        writeln!(out, "{} {}", "Phone:".bold(), or_na(user.phone.as_deref()))?;
        if let Some(role) = &user.role {
            writeln!(out, "{}  {role}", "Role:".bold())?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

// ── Browse commands ─────────────────────────────────────────────────────

/// Executes the `categories` subcommand.
fn cmd_categories(store: &mut CliStore) -> io::Result<ExitCode> {
    if with_spinner("Loading categories...", || store.fetch_categories())?.is_none() {
        return Ok(ExitCode::FAILURE);
    }

    let slice = &store.state().category;
    if slice.is_demo() {
        writeln!(io::stdout().lock(), "{}", "Demo Mode".italic().dimmed())?;
    }
    print_categories_table(&slice.display_categories())?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `vendors` subcommand.
fn cmd_vendors(store: &mut CliStore, category: Option<String>) -> io::Result<ExitCode> {
    let category_id = category.map(CategoryId::new);
    if with_spinner("Loading vendors...", || {
        store.fetch_vendors(category_id.as_ref())
    })?
    .is_none()
    {
        return Ok(ExitCode::FAILURE);
    }

    print_vendors_table(&store.state().vendor.vendors)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `vendor` subcommand: a detail view.
fn cmd_vendor(store: &mut CliStore, id: String) -> io::Result<ExitCode> {
    let vendor_id = VendorId::new(id);
    if with_spinner("Loading vendor...", || store.fetch_vendor(&vendor_id))?.is_none() {
        return Ok(ExitCode::FAILURE);
    }

    let Some(vendor) = &store.state().vendor.selected else {
        return Ok(ExitCode::FAILURE);
    };
    let mut out = io::stdout().lock();
    writeln!(out, "{}", vendor.name.bold())?;
    writeln!(out, "Category: {}", vendor.category.name_or(UNKNOWN_CATEGORY))?;
    writeln!(out, "Price:    {}", format_price_range(vendor))?;
    writeln!(
        out,
        "Rating:   {}",
        vendor
            .rating
            .map_or_else(|| "unrated".to_owned(), |r| format!("{r:.1}"))
    )?;
    writeln!(out, "Email:    {}", or_na(vendor.email.as_deref()))?;
    writeln!(out, "Phone:    {}", or_na(vendor.phone.as_deref()))?;
    if !vendor.services.is_empty() {
        writeln!(out, "Services: {}", vendor.services.join(", "))?;
    }
    if let Some(description) = &vendor.description {
        writeln!(out, "\n{description}")?;
    }
    if !vendor.availability {
        writeln!(out, "\n{}", "Currently not accepting bookings".yellow())?;
    }
    Ok(ExitCode::SUCCESS)
}

// ── Booking commands ────────────────────────────────────────────────────

/// Executes the `book` subcommand: the pay-later path. Missing required
/// fields are rejected locally before any network call.
fn cmd_book(store: &mut CliStore, args: BookArgs) -> io::Result<ExitCode> {
    // Prefill from the signed-in profile, like the booking form does.
    let (profile_name, profile_email, profile_phone) = store.state().auth.user.as_ref().map_or(
        (String::new(), String::new(), String::new()),
        |user| {
            (
                user.name.clone(),
                user.email.clone(),
                user.phone.clone().unwrap_or_default(),
            )
        },
    );

    let form = BookingForm {
        user_name: if args.name.is_empty() {
            profile_name
        } else {
            args.name
        },
        user_email: if args.email.is_empty() {
            profile_email
        } else {
            args.email
        },
        user_phone: if args.phone.is_empty() {
            profile_phone
        } else {
            args.phone
        },
        event_date: args.date,
        notes: args.notes,
    };

    let vendor_id = VendorId::new(args.vendor_id);
    let Some(booking) = with_spinner("Creating booking...", || {
        store.book_pay_later(vendor_id, &form)
    })?
    else {
        return Ok(ExitCode::FAILURE);
    };

    print_ok(&format!(
        "booking {} created with status {}",
        booking.id,
        booking.status.as_str()
    ))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `my-bookings` subcommand.
fn cmd_my_bookings(store: &mut CliStore) -> io::Result<ExitCode> {
    if !store.is_authenticated() {
        print_error(&"not signed in; run `slotify login`")?;
        return Ok(ExitCode::FAILURE);
    }
    if with_spinner("Loading bookings...", || store.fetch_my_bookings())?.is_none() {
        return Ok(ExitCode::FAILURE);
    }

    print_bookings_table(&store.state().booking.bookings)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `vendor-bookings` subcommand.
fn cmd_vendor_bookings(store: &mut CliStore, vendor: Option<String>) -> io::Result<ExitCode> {
    let vendor_id = vendor.map(VendorId::new);
    if with_spinner("Loading bookings...", || {
        store.fetch_vendor_bookings(vendor_id.as_ref())
    })?
    .is_none()
    {
        return Ok(ExitCode::FAILURE);
    }

    print_bookings_table(&store.state().booking.bookings)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `booking-status` subcommand (vendor action).
fn cmd_booking_status(
    store: &mut CliStore,
    id: String,
    status: BookingStatus,
) -> io::Result<ExitCode> {
    let booking_id = BookingId::new(id);
    if with_spinner("Updating status...", || {
        store.change_booking_status(&booking_id, status)
    })?
    .is_none()
    {
        return Ok(ExitCode::FAILURE);
    }

    print_ok(&format!("booking {booking_id} is now {}", status.as_str()))?;
    Ok(ExitCode::SUCCESS)
}

// ── Notification commands ───────────────────────────────────────────────

/// Executes the `notifications` subcommand: act on flags, then show the
/// refreshed list with the unread badge.
fn cmd_notifications(store: &mut CliStore, args: NotificationArgs) -> io::Result<ExitCode> {
    if !store.is_authenticated() {
        print_error(&"not signed in; run `slotify login`")?;
        return Ok(ExitCode::FAILURE);
    }

    if with_spinner("Loading notifications...", || store.fetch_notifications())?.is_none() {
        return Ok(ExitCode::FAILURE);
    }

    if let Some(id) = args.mark_read {
        let notification_id = slotify_rs::models::NotificationId::new(id);
        if with_spinner("Marking read...", || {
            store.mark_notification_read(&notification_id)
        })?
        .is_none()
        {
            return Ok(ExitCode::FAILURE);
        }
    }
    if args.read_all
        && with_spinner("Marking all read...", || store.mark_all_notifications_read())?.is_none()
    {
        return Ok(ExitCode::FAILURE);
    }
    if let Some(id) = args.delete {
        let notification_id = slotify_rs::models::NotificationId::new(id);
        if with_spinner("Deleting...", || store.delete_notification(&notification_id))?.is_none() {
            return Ok(ExitCode::FAILURE);
        }
    }

    let slice = &store.state().notification;
    let mut out = io::stdout().lock();
    writeln!(
        out,
        "{} ({} unread)",
        "Notifications".bold(),
        slice.unread_count
    )?;
    drop(out);
    print_notifications(&slice.items)?;
    Ok(ExitCode::SUCCESS)
}

// ── Admin commands ──────────────────────────────────────────────────────

/// Executes `admin stats`.
fn cmd_admin_stats(store: &CliStore) -> io::Result<ExitCode> {
    let Some(stats) = with_spinner("Loading stats...", || store.admin_stats())? else {
        return Ok(ExitCode::FAILURE);
    };
    print_stats_table(stats)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `admin events ...`; every mutation refetches the list and
/// the stats.
fn cmd_admin_events(store: &CliStore, command: EventCommand) -> io::Result<ExitCode> {
    match command {
        EventCommand::List => {
            let Some(events) = with_spinner("Loading events...", || store.admin_events())? else {
                return Ok(ExitCode::FAILURE);
            };
            print_events_table(&events)?;
            Ok(ExitCode::SUCCESS)
        }
        EventCommand::Add(form) => {
            let input = form.into_input();
            let Some(event) = with_spinner("Creating event...", || store.create_event(&input))?
            else {
                return Ok(ExitCode::FAILURE);
            };
            print_ok(&format!("event {} created", event.id))?;
            refetch_events(store)
        }
        EventCommand::Edit { id, form } => {
            let event_id = EventId::new(id);
            let input = form.into_input();
            if with_spinner("Updating event...", || store.update_event(&event_id, &input))?
                .is_none()
            {
                return Ok(ExitCode::FAILURE);
            }
            print_ok(&format!("event {event_id} updated"))?;
            refetch_events(store)
        }
        EventCommand::Delete { id } => {
            if !confirm_delete()? {
                return Ok(ExitCode::SUCCESS);
            }
            let event_id = EventId::new(id);
            if with_spinner("Deleting event...", || store.delete_event(&event_id))?.is_none() {
                return Ok(ExitCode::FAILURE);
            }
            print_ok(&format!("event {event_id} deleted"))?;
            refetch_events(store)
        }
    }
}

/// Refetches the event list and stats after a mutation.
fn refetch_events(store: &CliStore) -> io::Result<ExitCode> {
    if let Some(events) = with_spinner("Refreshing...", || store.admin_events())? {
        print_events_table(&events)?;
    }
    if let Some(stats) = with_spinner("Refreshing stats...", || store.admin_stats())? {
        print_stats_table(stats)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes `admin vendors ...`.
fn cmd_admin_vendors(store: &CliStore, command: VendorCommand) -> io::Result<ExitCode> {
    match command {
        VendorCommand::List => {
            let Some(vendors) = with_spinner("Loading vendors...", || store.admin_vendors())?
            else {
                return Ok(ExitCode::FAILURE);
            };
            print_vendors_table(&vendors)?;
            Ok(ExitCode::SUCCESS)
        }
        VendorCommand::Add(form) => {
            let input = form.into_input();
            let Some(vendor) = with_spinner("Creating vendor...", || store.create_vendor(&input))?
            else {
                return Ok(ExitCode::FAILURE);
            };
            print_ok(&format!("vendor {} created", vendor.id))?;
            refetch_vendors(store)
        }
        VendorCommand::Edit { id, form } => {
            let vendor_id = VendorId::new(id);
            let input = form.into_input();
            if with_spinner("Updating vendor...", || {
                store.update_vendor(&vendor_id, &input)
            })?
            .is_none()
            {
                return Ok(ExitCode::FAILURE);
            }
            print_ok(&format!("vendor {vendor_id} updated"))?;
            refetch_vendors(store)
        }
        VendorCommand::Delete { id } => {
            if !confirm_delete()? {
                return Ok(ExitCode::SUCCESS);
            }
            let vendor_id = VendorId::new(id);
            if with_spinner("Deleting vendor...", || store.delete_vendor(&vendor_id))?.is_none() {
                return Ok(ExitCode::FAILURE);
            }
            print_ok(&format!("vendor {vendor_id} deleted"))?;
            refetch_vendors(store)
        }
    }
}

/// Refetches the vendor list and stats after a mutation.
fn refetch_vendors(store: &CliStore) -> io::Result<ExitCode> {
    if let Some(vendors) = with_spinner("Refreshing...", || store.admin_vendors())? {
        print_vendors_table(&vendors)?;
    }
    if let Some(stats) = with_spinner("Refreshing stats...", || store.admin_stats())? {
        print_stats_table(stats)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes `admin categories ...`.
fn cmd_admin_categories(store: &CliStore, command: CategoryCommand) -> io::Result<ExitCode> {
    match command {
        CategoryCommand::List => {
            let Some(categories) =
                with_spinner("Loading categories...", || store.admin_categories())?
            else {
                return Ok(ExitCode::FAILURE);
            };
            print_categories_table(&categories)?;
            Ok(ExitCode::SUCCESS)
        }
        CategoryCommand::Add {
            name,
            image,
            description,
        } => {
            let input = CategoryInput {
                name,
                image,
                description,
            };
            let Some(category) =
                with_spinner("Creating category...", || store.create_category(&input))?
            else {
                return Ok(ExitCode::FAILURE);
            };
            print_ok(&format!("category {} created", category.id))?;
            refetch_categories(store)
        }
        CategoryCommand::Edit {
            id,
            name,
            image,
            description,
        } => {
            let category_id = CategoryId::new(id);
            let input = CategoryInput {
                name,
                image,
                description,
            };
            if with_spinner("Updating category...", || {
                store.update_category(&category_id, &input)
            })?
            .is_none()
            {
                return Ok(ExitCode::FAILURE);
            }
            print_ok(&format!("category {category_id} updated"))?;
            refetch_categories(store)
        }
        CategoryCommand::Delete { id } => {
            if !confirm_delete()? {
                return Ok(ExitCode::SUCCESS);
            }
            let category_id = CategoryId::new(id);
            if with_spinner("Deleting category...", || {
                store.delete_category(&category_id)
            })?
            .is_none()
            {
                return Ok(ExitCode::FAILURE);
            }
            print_ok(&format!("category {category_id} deleted"))?;
            refetch_categories(store)
        }
    }
}

/// Refetches the category list and stats after a mutation.
fn refetch_categories(store: &CliStore) -> io::Result<ExitCode> {
    if let Some(categories) = with_spinner("Refreshing...", || store.admin_categories())? {
        print_categories_table(&categories)?;
    }
    if let Some(stats) = with_spinner("Refreshing stats...", || store.admin_stats())? {
        print_stats_table(stats)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes `admin bookings ...`.
fn cmd_admin_bookings(store: &CliStore, command: BookingCommand) -> io::Result<ExitCode> {
    match command {
        BookingCommand::List => {
            let Some(bookings) = with_spinner("Loading bookings...", || store.admin_bookings())?
            else {
                return Ok(ExitCode::FAILURE);
            };
            print_bookings_table(&bookings)?;
            Ok(ExitCode::SUCCESS)
        }
        BookingCommand::Status { id, status } => {
            let booking_id = BookingId::new(id);
            if with_spinner("Updating status...", || {
                store.admin_set_booking_status(&booking_id, status)
            })?
            .is_none()
            {
                return Ok(ExitCode::FAILURE);
            }
            print_ok(&format!("booking {booking_id} is now {}", status.as_str()))?;
            if let Some(bookings) = with_spinner("Refreshing...", || store.admin_bookings())? {
                print_bookings_table(&bookings)?;
            }
            if let Some(stats) = with_spinner("Refreshing stats...", || store.admin_stats())? {
                print_stats_table(stats)?;
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ── Table renderers ─────────────────────────────────────────────────────

/// Prints the category grid.
fn print_categories_table(categories: &[Category]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if categories.is_empty() {
        return writeln!(out, "no categories");
    }

    let mut table = Table::new();
    let _styled = table
        .load_preset(UTF8_FULL)
        .set_header(["Id", "Name", "Description"]);
    for category in categories {
        let _row = table.add_row([
            Cell::new(category.id.as_inner()),
            Cell::new(&category.name).fg(Color::Cyan),
            Cell::new(or_na(category.description.as_deref())),
        ]);
    }
    writeln!(out, "{table}")
}

/// Prints the vendor grid.
fn print_vendors_table(vendors: &[Vendor]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if vendors.is_empty() {
        return writeln!(out, "no vendors");
    }

    let mut table = Table::new();
    let _styled = table
        .load_preset(UTF8_FULL)
        .set_header(["Id", "Name", "Category", "Price", "Rating", "Services"]);
    for vendor in vendors {
        let rating = vendor
            .rating
            .map_or_else(|| "-".to_owned(), |r| format!("{r:.1}"));
        let _row = table.add_row([
            Cell::new(vendor.id.as_inner()),
            Cell::new(&vendor.name).fg(Color::Cyan),
            Cell::new(vendor.category.name_or(UNKNOWN_CATEGORY)),
            Cell::new(format_price_range(vendor)),
            Cell::new(rating),
            Cell::new(vendor.services.join(", ")),
        ]);
    }
    writeln!(out, "{table}")
}

/// Prints a booking list (either scope).
fn print_bookings_table(bookings: &[Booking]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if bookings.is_empty() {
        return writeln!(out, "no bookings");
    }

    let mut table = Table::new();
    let _styled = table
        .load_preset(UTF8_FULL)
        .set_header(["Id", "Vendor", "Event date", "Customer", "Status", "Notes"]);
    for booking in bookings {
        let _row = table.add_row([
            Cell::new(booking.id.as_inner()),
            Cell::new(booking.vendor.name_or(UNKNOWN_VENDOR)),
            Cell::new(booking.event_date.to_string()),
            Cell::new(format!("{} <{}>", booking.user_name, booking.user_email)),
            status_cell(booking.status),
            Cell::new(booking.notes.as_deref().unwrap_or("")),
        ]);
    }
    writeln!(out, "{table}")
}

/// Prints the notification list, unread items marked with a dot.
fn print_notifications(items: &[Notification]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if items.is_empty() {
        return writeln!(out, "no notifications yet");
    }

    for item in items {
        let marker = if item.read { " " } else { "\u{2022}" };
        let stamp = item.created_at.format("%Y-%m-%d %H:%M");
        if item.read {
            writeln!(out, "{marker} [{}] {stamp}  {}", item.id, item.message)?;
        } else {
            writeln!(
                out,
                "{} [{}] {stamp}  {}",
                marker.magenta(),
                item.id,
                item.message.bold()
            )?;
        }
    }
    Ok(())
}

/// Prints the admin stats counters.
fn print_stats_table(stats: AdminStats) -> io::Result<()> {
    let mut table = Table::new();
    let _styled = table.load_preset(UTF8_FULL).set_header(["Metric", "Count"]);
    let rows = [
        ("Total events", stats.total_events),
        ("Total vendors", stats.total_vendors),
        ("Categories", stats.total_categories),
        ("Upcoming events", stats.upcoming_events),
        ("Total bookings", stats.total_bookings),
        ("Pending bookings", stats.pending_bookings),
    ];
    for (label, count) in rows {
        let _row = table.add_row([Cell::new(label), Cell::new(count)]);
    }
    writeln!(io::stdout().lock(), "{table}")
}

/// Prints the admin event list.
fn print_events_table(events: &[Event]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if events.is_empty() {
        return writeln!(out, "no events");
    }

    let mut table = Table::new();
    let _styled = table
        .load_preset(UTF8_FULL)
        .set_header(["Id", "Name", "Category", "City", "Date", "Status", "Featured"]);
    for event in events {
        let date = event
            .date
            .map_or_else(|| "-".to_owned(), |d| d.to_string());
        let status = match event.status {
            EventStatus::Upcoming => Cell::new("upcoming").fg(Color::Cyan),
            EventStatus::Ongoing => Cell::new("ongoing").fg(Color::Green),
            EventStatus::Completed => Cell::new("completed"),
            EventStatus::Cancelled => Cell::new("cancelled").fg(Color::Red),
        };
        let _row = table.add_row([
            Cell::new(event.id.as_inner()),
            Cell::new(&event.name).fg(Color::Cyan),
            Cell::new(event.category.name_or(UNKNOWN_CATEGORY)),
            Cell::new(or_na(event.city.as_deref())),
            Cell::new(date),
            status,
            Cell::new(if event.is_featured { "yes" } else { "" }),
        ]);
    }
    writeln!(out, "{table}")
}
