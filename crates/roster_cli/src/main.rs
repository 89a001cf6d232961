//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roster_core` linkage.
//! - Exercise the in-memory session path without touching disk.

use roster_core::db::migrations::latest_version;
use roster_core::RosterSession;

fn main() {
    println!("roster_core ping={}", roster_core::ping());
    println!("roster_core version={}", roster_core::core_version());
    println!("roster_core storage_schema={}", latest_version());

    let session = RosterSession::in_memory();
    println!("roster_core students={}", session.students().len());
}
