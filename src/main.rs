use chrono::Utc;
use tracing_subscriber::EnvFilter;

use hotelbook::backend::supabase::SupabaseBackend;
use hotelbook::backend::BookingApi;
use hotelbook::calendar::{add_days, format_day, BlockedDayIndex};
use hotelbook::config::AppConfig;

/// Smoke client: lists the room catalogue, then prints the blocked days of
/// one room over the booking window.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    anyhow::ensure!(
        !config.supabase_url.is_empty(),
        "SUPABASE_URL must be set"
    );
    anyhow::ensure!(
        !config.supabase_anon_key.is_empty(),
        "SUPABASE_ANON_KEY must be set"
    );

    let backend = SupabaseBackend::new(config.supabase_url.clone(), config.supabase_anon_key.clone());

    let rooms = backend.fetch_rooms().await?;
    tracing::info!("fetched {} rooms", rooms.len());
    for room in &rooms {
        println!(
            "room {} ({}) — ${}/night, sleeps {}{}",
            room.room_number,
            room.room_type,
            room.price_per_night,
            room.capacity,
            if room.is_available { "" } else { " [unavailable]" },
        );
    }

    let Some(room) = rooms.iter().find(|r| r.is_available) else {
        tracing::warn!("no available rooms to inspect");
        return Ok(());
    };

    let today = Utc::now().date_naive();
    let horizon = add_days(today, config.booking_window_days);
    let reservations = backend.fetch_reservations(&room.id, today, horizon).await?;
    let blocked = BlockedDayIndex::from_reservations(&reservations);

    tracing::info!(
        "room {}: {} reservations, {} blocked days through {}",
        room.room_number,
        reservations.len(),
        blocked.len(),
        format_day(horizon),
    );
    for day in blocked.iter() {
        println!("  booked: {}", format_day(day));
    }

    Ok(())
}
