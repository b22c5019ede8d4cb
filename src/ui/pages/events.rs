//! Events list page
//!
//! Fetches the full event set once per visit, drops events that are
//! already over, and applies the client-side filters. In interactive
//! mode filter edits are debounced before the list is recomputed.

use std::time::Duration;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::Settings;
use crate::models::Event;
use crate::services::ServiceFactory;
use crate::session::guard::{Destination, GateOutcome, SessionGate};
use crate::session::store::SessionStore;
use crate::ui::debounce::Debouncer;
use crate::ui::filters::{is_upcoming, parse_event_date, EventFilter};
use crate::ui::notify;
use crate::utils::errors::Result;
use crate::utils::helpers;

/// Gate the page, then run it
pub async fn open(
    services: &ServiceFactory,
    store: &SessionStore,
    settings: &Settings,
    filter: EventFilter,
    interactive: bool,
) -> Result<()> {
    let mut gate = SessionGate::new(
        services.user_service.clone(),
        store.clone(),
        Destination::Login,
    );
    match gate.check().await {
        GateOutcome::Authorized(_) => run(services, settings, filter, interactive).await,
        GateOutcome::Redirect(destination) => {
            redirect_hint(destination);
            Ok(())
        }
    }
}

pub(crate) fn redirect_hint(destination: Destination) {
    match destination {
        Destination::Login => notify::notice("Session required — run `eventpass login`"),
        Destination::Home => notify::notice("Session required — run `eventpass login` to start"),
        Destination::Events => notify::notice("Back to the events list: run `eventpass events`"),
    }
}

async fn run(
    services: &ServiceFactory,
    settings: &Settings,
    filter: EventFilter,
    interactive: bool,
) -> Result<()> {
    let events = match services.event_service.list().await {
        Ok(events) => events,
        Err(e) => {
            notify::failure(&e);
            return Ok(());
        }
    };

    let today = helpers::today();
    let upcoming: Vec<Event> = events
        .into_iter()
        .filter(|event| is_upcoming(&event.date, today))
        .collect();
    debug!(count = upcoming.len(), "Upcoming events fetched");

    if upcoming.is_empty() {
        notify::notice("No upcoming events");
        return Ok(());
    }

    render_list(&upcoming, &filter);

    if interactive {
        browse(&upcoming, filter, settings.ui.debounce_ms).await?;
    }
    Ok(())
}

fn render_list(events: &[Event], filter: &EventFilter) {
    let matched = filter.apply(events);
    if !filter.is_empty() {
        println!("{} of {} events match", matched.len(), events.len());
    }
    for event in matched {
        render_card(event);
    }
}

pub(crate) fn render_card(event: &Event) {
    let sold_out = if event.sold_out() { "  [SOLD OUT]" } else { "" };
    println!(
        "#{:<4} {}{}",
        event.id,
        helpers::truncate_text(&event.title, 60),
        sold_out
    );
    println!("      {} {} — {}", event.date, event.time, event.place);

    let mut details = Vec::new();
    if let Some(age) = event.age_limit {
        details.push(format!("{age}+"));
    }
    if let Some(kind) = &event.event_type {
        details.push(kind.clone());
    }
    if let Some(count) = event.registration_count {
        details.push(format!("{}/{} seats taken", count, event.capacity));
    }
    if !details.is_empty() {
        println!("      {}", details.join(" | "));
    }
}

/// Interactive filter loop: edits apply after the debounce delay
async fn browse(events: &[Event], initial: EventFilter, debounce_ms: u64) -> Result<()> {
    println!();
    println!("Filters: age <n|->  find <text|->  from <dd.mm.yyyy|->  to <dd.mm.yyyy|->  reset  quit");

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<String>();
    std::thread::spawn(move || {
        use std::io::BufRead;
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });

    let mut draft = initial;
    let mut debouncer = Debouncer::new(Duration::from_millis(debounce_ms));

    loop {
        tokio::select! {
            line = rx.recv() => {
                let Some(line) = line else { break };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if matches!(line, "quit" | "exit" | "q") {
                    break;
                }
                match apply_edit(&draft, line) {
                    Ok(edited) => {
                        draft = edited;
                        debouncer.push(draft.clone());
                    }
                    Err(usage) => notify::notice(&usage),
                }
            }
            settled = debouncer.settled() => {
                println!();
                render_list(events, &settled);
            }
        }
    }
    Ok(())
}

/// Apply one filter edit line, leaving the current filter untouched on error
fn apply_edit(current: &EventFilter, line: &str) -> std::result::Result<EventFilter, String> {
    let mut filter = current.clone();
    let (command, value) = match line.split_once(char::is_whitespace) {
        Some((command, value)) => (command, value.trim()),
        None => (line, ""),
    };

    match command {
        "age" => {
            filter.max_age = parse_clearable(value, "age", |v| {
                v.parse::<i64>().map_err(|_| "age takes a number, or - to clear".to_string())
            })?;
        }
        "find" => {
            filter.query = if value == "-" { String::new() } else { value.to_string() };
        }
        "from" => {
            filter.from = parse_clearable(value, "from", parse_filter_date)?;
        }
        "to" => {
            filter.to = parse_clearable(value, "to", parse_filter_date)?;
        }
        "reset" => filter = EventFilter::default(),
        other => return Err(format!("Unknown filter `{other}`")),
    }
    Ok(filter)
}

fn parse_clearable<T>(
    value: &str,
    name: &str,
    parse: impl Fn(&str) -> std::result::Result<T, String>,
) -> std::result::Result<Option<T>, String> {
    match value {
        "" => Err(format!("`{name}` needs a value, or - to clear")),
        "-" => Ok(None),
        other => parse(other).map(Some),
    }
}

/// Parse a `dd.mm.yyyy` filter bound from user input
pub fn parse_filter_date(raw: &str) -> std::result::Result<NaiveDate, String> {
    parse_event_date(raw).ok_or_else(|| format!("`{raw}` is not a dd.mm.yyyy date"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_sets_and_clears_age() {
        let filter = apply_edit(&EventFilter::default(), "age 16").unwrap();
        assert_eq!(filter.max_age, Some(16));
        let filter = apply_edit(&filter, "age -").unwrap();
        assert_eq!(filter.max_age, None);
    }

    #[test]
    fn test_edit_rejects_bad_values_without_touching_the_filter() {
        let current = apply_edit(&EventFilter::default(), "find disco").unwrap();
        assert!(apply_edit(&current, "age sixteen").is_err());
        assert!(apply_edit(&current, "from yesterday").is_err());
        assert_eq!(current.query, "disco");
    }

    #[test]
    fn test_edit_parses_date_bounds() {
        let filter = apply_edit(&EventFilter::default(), "from 01.08.2026").unwrap();
        let filter = apply_edit(&filter, "to 31.08.2026").unwrap();
        assert!(filter.from.is_some());
        assert!(filter.to.is_some());
        assert!(apply_edit(&filter, "reset").unwrap().is_empty());
    }
}
