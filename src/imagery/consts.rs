pub const DEFAULT_SEARCH_RADIUS: u32 = 100;

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

pub const EARTH_RADIUS: f64 = 6371e3;

/// Largest page Mapillary's image search serves. Results come back in no distance order, so a
/// smaller page can leave out the nearest panorama.
pub const MAX_SEARCH_LIMIT: u32 = 2000;
