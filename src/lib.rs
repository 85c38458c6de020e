// Drill engine, content and persistence. The terminal front end lives in the
// binary (main.rs, app.rs, event.rs, ui/) and only renders over these modules.

pub mod config;
pub mod content;
pub mod literacy;
pub mod session;
pub mod store;
