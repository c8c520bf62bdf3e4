use crate::models::Room;

/// Filter criteria from the room browser. All set criteria must match.
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    /// Free-text search over room number, type and description.
    pub query: String,
    /// Room type to restrict to; `None` means all types.
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_capacity: Option<u32>,
}

pub fn filter_rooms(rooms: &[Room], filter: &RoomFilter) -> Vec<Room> {
    let query = filter.query.trim().to_lowercase();

    rooms
        .iter()
        .filter(|room| {
            if !query.is_empty() {
                let matches = room.room_number.to_lowercase().contains(&query)
                    || room.room_type.to_lowercase().contains(&query)
                    || room.description.to_lowercase().contains(&query);
                if !matches {
                    return false;
                }
            }
            if let Some(category) = &filter.category {
                if &room.room_type != category {
                    return false;
                }
            }
            if room.price_per_night < filter.min_price.unwrap_or(0.0) {
                return false;
            }
            if room.price_per_night > filter.max_price.unwrap_or(f64::MAX) {
                return false;
            }
            if let Some(min_capacity) = filter.min_capacity {
                if room.capacity < min_capacity {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// Distinct room types in first-seen order, for the category tabs.
pub fn room_categories(rooms: &[Room]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for room in rooms {
        if !categories.contains(&room.room_type) {
            categories.push(room.room_type.clone());
        }
    }
    categories
}
