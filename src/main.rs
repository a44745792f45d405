//! Motorpool - vehicle-rental dashboard core

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use motorpool::config::Args;
use motorpool::dashboard::Dashboard;
use motorpool::records::{
    BOOKING_COLLECTION, FEEDBACK_COLLECTION, USER_COLLECTION, VEHICLE_COLLECTION,
};
use motorpool::store::{MemoryStore, MongoStore, RecordSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing/logging
    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("motorpool={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration
    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // Print startup banner
    info!("======================================");
    info!("  Motorpool - Rental Dashboard Core");
    info!("======================================");
    info!("Mode: {}", if args.dev_mode { "DEVELOPMENT" } else { "PRODUCTION" });
    info!("MongoDB: {}", args.mongodb_uri);
    info!("Database: {}", args.mongodb_db);
    info!("Low-availability threshold: {}", args.low_availability_threshold);
    info!(
        "Recent windows: {} bookings, {} feedbacks",
        args.recent_bookings_limit, args.recent_feedbacks_limit
    );
    info!("======================================");

    // Connect the record store (in-memory in dev mode)
    let store: Arc<dyn RecordSource> = if args.dev_mode {
        warn!("Dev mode: using empty in-memory store instead of MongoDB");
        let memory = MemoryStore::new();
        for collection in [
            VEHICLE_COLLECTION,
            USER_COLLECTION,
            BOOKING_COLLECTION,
            FEEDBACK_COLLECTION,
        ] {
            memory.load(collection, vec![]);
        }
        Arc::new(memory)
    } else {
        match MongoStore::connect(&args.mongodb_uri, &args.mongodb_db).await {
            Ok(store) => {
                info!("MongoDB connected successfully");
                Arc::new(store)
            }
            Err(e) => {
                error!("MongoDB connection failed: {}", e);
                std::process::exit(1);
            }
        }
    };

    // Run one orchestration cycle and report the summary
    let dashboard = Dashboard::new(store, args.cycle_config());
    dashboard.refresh().await?;

    let summary = dashboard.summary();
    info!("Total cars:       {}", summary.total_cars);
    info!("Available cars:   {}", summary.available_cars);
    info!("Owners:           {}", summary.total_owners);
    info!("Customers:        {}", summary.total_customers);
    info!("Total bookings:   {}", summary.total_bookings);
    info!("Feedback entries: {}", summary.total_feedbacks);

    let breakdown = dashboard.status_breakdown();
    info!(
        "Recent booking statuses: {} pending, {} confirmed, {} completed, {} cancelled",
        breakdown.pending, breakdown.confirmed, breakdown.completed, breakdown.cancelled
    );

    for notification in dashboard.notifications() {
        info!("[{}] {}", notification.time, notification.message);
    }
    info!("Unread notifications: {}", dashboard.unread_notifications());

    Ok(())
}
