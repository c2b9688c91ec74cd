use crate::geo::response::Location;

pub const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

pub fn map_url(loc: &Location) -> String {
    format!("{MAP_SEARCH_URL}{},{}", loc.lat, loc.lng)
}
