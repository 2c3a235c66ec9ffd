use chrono::Local;
use clap::{ArgGroup, Args, Parser, Subcommand};
use frontdesk::config::AppConfig;
use frontdesk::desk::{FrontDesk, RoomType, StayRef};
use frontdesk::error::AppError;
use frontdesk::money::Money;
use frontdesk::storage::JsonFileStore;
use frontdesk::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "frontdesk",
    about = "Track rooms, bookings, stays, and billing for a single property",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new room
    RegisterRoom(RegisterRoomArgs),
    /// List all rooms with their current status
    Rooms,
    /// Book an available room for a guest
    Book(BookArgs),
    /// List open bookings
    Bookings,
    /// Cancel a booking (the most recent one unless --room is given)
    Cancel(CancelArgs),
    /// Check a booked guest into their room
    CheckIn(StayArgs),
    /// Check a guest out and issue the bill
    CheckOut(StayArgs),
    /// Record a service charge against an occupied room
    AddService(AddServiceArgs),
    /// List recorded service charges
    Services(ServicesArgs),
    /// List issued bills
    Bills,
}

#[derive(Args, Debug)]
struct RegisterRoomArgs {
    /// Room number, e.g. 101
    number: String,
    /// Room type: single, double, or suite
    #[arg(long = "type")]
    kind: RoomType,
    /// Price per night, e.g. 100.00
    #[arg(long)]
    rate: Money,
}

#[derive(Args, Debug)]
struct BookArgs {
    /// Guest name
    #[arg(long)]
    guest: String,
    /// Contact details for the guest
    #[arg(long, default_value = "")]
    contact: String,
    /// Room type to book: single, double, or suite
    #[arg(long = "type")]
    kind: RoomType,
    /// Room number to book (must be an available room of the given type)
    #[arg(long)]
    room: String,
    /// Duration of the stay in nights
    #[arg(long)]
    nights: u32,
}

#[derive(Args, Debug)]
struct CancelArgs {
    /// Room number of the booking to cancel; defaults to the most recent booking
    #[arg(long)]
    room: Option<String>,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("stay").required(true)))]
struct StayArgs {
    /// Guest name on the booking or stay
    #[arg(long, group = "stay")]
    guest: Option<String>,
    /// Room number of the booking or stay
    #[arg(long, group = "stay")]
    room: Option<String>,
}

impl StayArgs {
    fn reference(self) -> StayRef {
        match (self.guest, self.room) {
            (Some(guest), _) => StayRef::Guest(guest),
            (None, Some(room)) => StayRef::Room(room),
            (None, None) => unreachable!("clap enforces the stay group"),
        }
    }
}

#[derive(Args, Debug)]
struct AddServiceArgs {
    /// Room number receiving the service
    #[arg(long)]
    room: String,
    /// Service description, e.g. laundry or room service
    #[arg(long)]
    description: String,
    /// Cost of the service, e.g. 20.00
    #[arg(long)]
    cost: Money,
}

#[derive(Args, Debug)]
struct ServicesArgs {
    /// Only show charges for this room
    #[arg(long)]
    room: Option<String>,
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let store = JsonFileStore::new(&config.storage.data_file);
    info!(data_file = %store.path().display(), "opening record set");
    // A failed load is the one fatal error: operating on an unknown record
    // set could corrupt it further.
    let mut desk = FrontDesk::open(store)?;
    let today = Local::now().date_naive();

    match cli.command {
        Command::RegisterRoom(args) => {
            let room = desk.register_room(&args.number, args.kind, args.rate)?;
            println!(
                "Registered room {} ({}, {} per night)",
                room.number, room.kind, room.rate
            );
        }
        Command::Rooms => {
            let rooms = desk.rooms();
            if rooms.is_empty() {
                println!("No rooms registered.");
            }
            for room in rooms {
                let status = if room.available { "available" } else { "occupied" };
                println!(
                    "- Room {}: {} | {} per night | {}",
                    room.number, room.kind, room.rate, status
                );
            }
        }
        Command::Book(args) => {
            let booking = desk.create_booking(
                &args.guest,
                &args.contact,
                args.kind,
                &args.room,
                args.nights,
                today,
            )?;
            println!(
                "Booked room {} for {} ({} nights)",
                booking.room_number, booking.guest_name, booking.nights
            );
        }
        Command::Bookings => {
            let bookings = desk.bookings();
            if bookings.is_empty() {
                println!("No open bookings.");
            }
            for booking in bookings {
                println!(
                    "- Room {} | {} | {} nights | booked {}",
                    booking.room_number, booking.guest_name, booking.nights, booking.created_on
                );
            }
        }
        Command::Cancel(args) => {
            let booking = desk.cancel_booking(args.room.as_deref())?;
            println!(
                "Cancelled booking for {} in room {}",
                booking.guest_name, booking.room_number
            );
        }
        Command::CheckIn(args) => {
            let stay = desk.check_in(&args.reference(), today)?;
            println!(
                "{} checked into room {} for {} nights",
                stay.guest_name, stay.room_number, stay.nights
            );
        }
        Command::CheckOut(args) => {
            let bill = desk.check_out(&args.reference(), today)?;
            println!("{} checked out.", bill.guest_name);
            println!("  Room charge:    {}", bill.room_charge);
            println!("  Service charge: {}", bill.service_charge);
            println!("  Total:          {}", bill.total);
        }
        Command::AddService(args) => {
            let entry = desk.add_service(&args.room, &args.description, args.cost)?;
            println!(
                "Added '{}' ({}) to room {}",
                entry.description, entry.cost, entry.room_number
            );
        }
        Command::Services(args) => {
            let entries = match args.room.as_deref() {
                Some(room) => desk.services_for(room),
                None => desk.services().iter().collect(),
            };
            if entries.is_empty() {
                println!("No services recorded.");
            }
            for entry in entries {
                println!(
                    "- Room {}: {} ({})",
                    entry.room_number, entry.description, entry.cost
                );
            }
        }
        Command::Bills => {
            let bills = desk.bills();
            if bills.is_empty() {
                println!("No bills issued.");
            }
            for bill in bills {
                println!(
                    "- {}: room {} + services {} = {} (issued {})",
                    bill.guest_name, bill.room_charge, bill.service_charge, bill.total,
                    bill.issued_on
                );
            }
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
