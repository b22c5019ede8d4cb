//! Terminal pages
//!
//! One module per screen of the original application: login, register,
//! the events list, the event detail view, the admin create form and the
//! profile. Each protected page wraps its logic in an `open` entry point
//! that runs the session gate first and honors its redirect outcome.

pub mod create;
pub mod detail;
pub mod events;
pub mod login;
pub mod profile;
pub mod register;
