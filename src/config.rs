use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub booking_window_days: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            supabase_url: env::var("SUPABASE_URL").unwrap_or_default(),
            supabase_anon_key: env::var("SUPABASE_ANON_KEY").unwrap_or_default(),
            booking_window_days: env::var("BOOKING_WINDOW_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}
