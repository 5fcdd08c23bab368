//! Formdeck
//!
//! Desktop studio for managed forms.
//!
//! This is the main entry point for the Dioxus Desktop application.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .pretty()
        .init();

    // Print startup banner
    println!();
    println!("  🗂️  Formdeck — Managed Forms Studio");
    println!();

    // Launch the Dioxus desktop application
    formdeck_ui::launch();
}
