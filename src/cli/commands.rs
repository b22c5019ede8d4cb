//! Command line definition

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ArgAction, ColorChoice, Command,
};

fn event_field_args() -> Vec<Arg> {
    vec![
        Arg::new("title").long("title").help("Event title"),
        Arg::new("date").long("date").help("Event date, dd.mm.yyyy"),
        Arg::new("time").long("time").help("Event time, hh:mm"),
        Arg::new("place").long("place").help("Where the event happens"),
        Arg::new("capacity")
            .long("capacity")
            .help("Seat capacity")
            .value_parser(clap::value_parser!(i64)),
        Arg::new("description").long("description").help("Free-form description"),
        Arg::new("age-limit")
            .long("age-limit")
            .help("Minimum age")
            .value_parser(clap::value_parser!(i64)),
        Arg::new("event-type").long("event-type").help("Kind of event"),
        Arg::new("image-url").long("image-url").help("Poster image URL"),
    ]
}

fn event_id_arg() -> Arg {
    Arg::new("event_id")
        .help("Event id")
        .required(true)
        .value_parser(clap::value_parser!(i64))
}

fn credentials_args() -> Vec<Arg> {
    vec![
        Arg::new("username")
            .short('u')
            .long("username")
            .help("Account username"),
        Arg::new("password")
            .short('p')
            .long("password")
            .help("Account password (prompted when omitted)"),
    ]
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("eventpass")
        .about("Terminal client for the EventPass event registration service")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file name (without extension)")
                .env("EVENTPASS_CONFIG")
                .default_value("config")
                .global(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: -v warn, -vv info, -vvv debug, -vvvv trace")
                .global(true)
                .action(ArgAction::Count),
        )
        .subcommand(
            Command::new("register")
                .about("Create an account")
                .args(credentials_args()),
        )
        .subcommand(
            Command::new("login")
                .about("Log in and store the session token")
                .args(credentials_args()),
        )
        .subcommand(Command::new("logout").about("Drop the stored session token"))
        .subcommand(
            Command::new("events")
                .about("Browse upcoming events")
                .arg(
                    Arg::new("age")
                        .long("age")
                        .help("Keep events with an age limit up to this value")
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(Arg::new("find").long("find").help("Title substring to search for"))
                .arg(Arg::new("from").long("from").help("Earliest date, dd.mm.yyyy"))
                .arg(Arg::new("to").long("to").help("Latest date, dd.mm.yyyy"))
                .arg(
                    Arg::new("interactive")
                        .short('i')
                        .long("interactive")
                        .help("Refine filters interactively")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Show one event")
                .arg(event_id_arg()),
        )
        .subcommand(
            Command::new("join")
                .about("Register for an event and fetch the ticket QR")
                .arg(event_id_arg()),
        )
        .subcommand(
            Command::new("leave")
                .about("Cancel a registration")
                .arg(event_id_arg()),
        )
        .subcommand(
            Command::new("create")
                .about("Create an event (admin)")
                .arg(
                    Arg::new("image")
                        .long("image")
                        .help("Poster image to parse for prefilling the form"),
                )
                .args(event_field_args()),
        )
        .subcommand(
            Command::new("edit")
                .about("Edit an event (admin)")
                .arg(event_id_arg())
                .args(event_field_args()),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete an event (admin)")
                .arg(event_id_arg())
                .arg(
                    Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Skip the confirmation prompt")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("profile").about("Show the profile and ticket QR codes"))
        .subcommand(
            Command::new("passwd")
                .about("Change the account password")
                .arg(Arg::new("old").long("old").help("Current password"))
                .arg(Arg::new("new").long("new").help("New password")),
        )
        .subcommand(
            Command::new("account-delete")
                .about("Delete the account permanently")
                .arg(
                    Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Skip the confirmation prompt")
                        .action(ArgAction::SetTrue),
                ),
        )
}
