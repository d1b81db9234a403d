use serde::Serialize;

const DEFAULT_CENTER: (f64, f64) = (40.7128, -74.0060);

// Map centers for the cities the front end knows about
const CITY_COORDINATES: &[(&str, (f64, f64))] = &[
    ("new york", (40.7128, -74.0060)),
    ("london", (51.5074, -0.1278)),
    ("paris", (48.8566, 2.3522)),
    ("tokyo", (35.6762, 139.6503)),
    ("sydney", (-33.8688, 151.2093)),
    ("rome", (41.9028, 12.4964)),
    ("barcelona", (41.3851, 2.1734)),
    ("amsterdam", (52.3676, 4.9041)),
    ("berlin", (52.5200, 13.4050)),
    ("madrid", (40.4168, -3.7038)),
    ("dubai", (25.2048, 55.2708)),
    ("singapore", (1.3521, 103.8198)),
    ("mumbai", (19.0760, 72.8777)),
    ("delhi", (28.7041, 77.1025)),
    ("bangkok", (13.7563, 100.5018)),
    ("istanbul", (41.0082, 28.9784)),
    ("cairo", (30.0444, 31.2357)),
    ("moscow", (55.7558, 37.6176)),
    ("beijing", (39.9042, 116.4074)),
    ("seoul", (37.5665, 126.9780)),
];

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CityCoordinates {
    pub city: String,
    pub lat: f64,
    pub lng: f64,
    /// False when the city is not in the table and the default center was used
    pub known: bool,
}

pub struct LocationService;

impl LocationService {
    pub fn coordinates(city: &str) -> CityCoordinates {
        let normalized = city.trim().to_lowercase();
        let found = CITY_COORDINATES
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, coords)| *coords);

        let ((lat, lng), known) = match found {
            Some(coords) => (coords, true),
            None => (DEFAULT_CENTER, false),
        };

        CityCoordinates {
            city: city.trim().to_string(),
            lat,
            lng,
            known,
        }
    }
}
