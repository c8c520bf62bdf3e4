use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub room_number: String,
    pub room_type: String,
    pub description: String,
    pub capacity: u32,
    pub price_per_night: f64,
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}
