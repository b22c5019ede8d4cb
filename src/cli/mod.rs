//! Command line interface module
//!
//! Parses the command line into an `Action` the dispatcher in `main`
//! executes. Parsing is kept separate from page logic so the command
//! surface is testable without touching the network.

pub mod commands;

use clap::ArgMatches;

use crate::ui::pages::detail::EventFields;

/// One parsed invocation
#[derive(Debug)]
pub struct Cli {
    pub action: Action,
    pub verbosity: u8,
    pub config: String,
}

/// What the user asked for
#[derive(Debug)]
pub enum Action {
    Register {
        username: Option<String>,
        password: Option<String>,
    },
    Login {
        username: Option<String>,
        password: Option<String>,
    },
    Logout,
    Events {
        age: Option<i64>,
        find: Option<String>,
        from: Option<String>,
        to: Option<String>,
        interactive: bool,
    },
    Show {
        event_id: i64,
    },
    Join {
        event_id: i64,
    },
    Leave {
        event_id: i64,
    },
    Create {
        image: Option<String>,
        fields: EventFields,
    },
    Edit {
        event_id: i64,
        fields: EventFields,
    },
    Delete {
        event_id: i64,
        yes: bool,
    },
    Profile,
    Passwd {
        old_password: Option<String>,
        new_password: Option<String>,
    },
    AccountDelete {
        yes: bool,
    },
}

/// Parse the process arguments, exiting with usage on bad input
pub fn parse() -> Cli {
    from_matches(commands::new().get_matches())
}

fn from_matches(matches: ArgMatches) -> Cli {
    let verbosity = matches.get_count("verbosity");
    let config = matches
        .get_one::<String>("config")
        .cloned()
        .unwrap_or_else(|| "config".to_string());

    let action = match matches.subcommand() {
        Some(("register", sub)) => Action::Register {
            username: sub.get_one::<String>("username").cloned(),
            password: sub.get_one::<String>("password").cloned(),
        },
        Some(("login", sub)) => Action::Login {
            username: sub.get_one::<String>("username").cloned(),
            password: sub.get_one::<String>("password").cloned(),
        },
        Some(("logout", _)) => Action::Logout,
        Some(("events", sub)) => Action::Events {
            age: sub.get_one::<i64>("age").copied(),
            find: sub.get_one::<String>("find").cloned(),
            from: sub.get_one::<String>("from").cloned(),
            to: sub.get_one::<String>("to").cloned(),
            interactive: sub.get_flag("interactive"),
        },
        Some(("show", sub)) => Action::Show {
            event_id: event_id(sub),
        },
        Some(("join", sub)) => Action::Join {
            event_id: event_id(sub),
        },
        Some(("leave", sub)) => Action::Leave {
            event_id: event_id(sub),
        },
        Some(("create", sub)) => Action::Create {
            image: sub.get_one::<String>("image").cloned(),
            fields: event_fields(sub),
        },
        Some(("edit", sub)) => Action::Edit {
            event_id: event_id(sub),
            fields: event_fields(sub),
        },
        Some(("delete", sub)) => Action::Delete {
            event_id: event_id(sub),
            yes: sub.get_flag("yes"),
        },
        Some(("profile", _)) => Action::Profile,
        Some(("passwd", sub)) => Action::Passwd {
            old_password: sub.get_one::<String>("old").cloned(),
            new_password: sub.get_one::<String>("new").cloned(),
        },
        Some(("account-delete", sub)) => Action::AccountDelete {
            yes: sub.get_flag("yes"),
        },
        // subcommand_required(true) rules the rest out
        _ => unreachable!("clap enforces a known subcommand"),
    };

    Cli {
        action,
        verbosity,
        config,
    }
}

fn event_id(sub: &ArgMatches) -> i64 {
    sub.get_one::<i64>("event_id").copied().unwrap_or_default()
}

fn event_fields(sub: &ArgMatches) -> EventFields {
    EventFields {
        title: sub.get_one::<String>("title").cloned(),
        date: sub.get_one::<String>("date").cloned(),
        time: sub.get_one::<String>("time").cloned(),
        place: sub.get_one::<String>("place").cloned(),
        capacity: sub.get_one::<i64>("capacity").copied(),
        description: sub.get_one::<String>("description").cloned(),
        age_limit: sub.get_one::<i64>("age-limit").copied(),
        event_type: sub.get_one::<String>("event-type").cloned(),
        image_url: sub.get_one::<String>("image-url").cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> Cli {
        from_matches(commands::new().get_matches_from(args))
    }

    #[test]
    fn test_login_action() {
        let cli = parse_from(&["eventpass", "-vv", "login", "-u", "ivanovii25"]);
        assert_eq!(cli.verbosity, 2);
        match cli.action {
            Action::Login { username, password } => {
                assert_eq!(username.as_deref(), Some("ivanovii25"));
                assert!(password.is_none());
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_edit_collects_field_overrides() {
        let cli = parse_from(&["eventpass", "edit", "7", "--place", "Main hall"]);
        match cli.action {
            Action::Edit { event_id, fields } => {
                assert_eq!(event_id, 7);
                assert_eq!(fields.place.as_deref(), Some("Main hall"));
                assert!(fields.title.is_none());
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
