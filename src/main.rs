//! Component Gallery - Main Entry Point
//!
//! A native catalog of interface widget variants, states and sizes.

use component_gallery::app::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Component Gallery...");

    // Run the GPUI application
    run_app();
}
