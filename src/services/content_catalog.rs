use std::collections::HashMap;

use crate::models::preferences::TravelStyle;

/// Themed names for one (city, style) pair.
#[derive(Debug, Clone, Copy)]
pub struct StyleContent {
    pub attractions: &'static [&'static str],
    pub activities: &'static [&'static str],
}

#[derive(Debug)]
pub struct CityEntry {
    pub key: &'static str,
    pub styles: &'static [(TravelStyle, StyleContent)],
    pub restaurants: &'static [&'static str],
    pub neighborhoods: &'static [&'static str],
}

impl CityEntry {
    /// Content for `style`, skipped when it has no attractions to rotate through.
    fn style(&self, style: TravelStyle) -> Option<&StyleContent> {
        self.styles
            .iter()
            .find(|(s, content)| *s == style && !content.attractions.is_empty())
            .map(|(_, content)| content)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogContent {
    pub attractions: Vec<String>,
    pub activities: Vec<String>,
}

impl From<&StyleContent> for CatalogContent {
    fn from(content: &StyleContent) -> Self {
        Self {
            attractions: to_owned(content.attractions),
            activities: to_owned(content.activities),
        }
    }
}

/// Read-only lookup of attractions, restaurants and neighborhoods per city.
///
/// Resolution order for style content is city + style, then city + mixed,
/// then a generic template built from the city name. The generic template
/// never yields an empty list.
pub struct ContentCatalog {
    cities: HashMap<&'static str, &'static CityEntry>,
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentCatalog {
    pub fn new() -> Self {
        Self::from_entries(CITIES)
    }

    pub fn from_entries(entries: &'static [CityEntry]) -> Self {
        let cities = entries.iter().map(|entry| (entry.key, entry)).collect();
        Self { cities }
    }

    pub fn is_known(&self, city: &str) -> bool {
        self.city(city).is_some()
    }

    pub fn lookup(&self, city: &str, style: TravelStyle) -> CatalogContent {
        match self.city(city) {
            Some(entry) => entry
                .style(style)
                .or_else(|| entry.style(TravelStyle::Mixed))
                .map(CatalogContent::from)
                .unwrap_or_else(|| generic_content(city)),
            None => generic_content(city),
        }
    }

    pub fn restaurants(&self, city: &str) -> Vec<String> {
        match self.city(city) {
            Some(entry) if !entry.restaurants.is_empty() => to_owned(entry.restaurants),
            _ => generic_restaurants(city),
        }
    }

    pub fn neighborhoods(&self, city: &str) -> Vec<String> {
        match self.city(city) {
            Some(entry) if !entry.neighborhoods.is_empty() => to_owned(entry.neighborhoods),
            _ => generic_neighborhoods(city),
        }
    }

    fn city(&self, city: &str) -> Option<&'static CityEntry> {
        self.cities.get(city.trim().to_lowercase().as_str()).copied()
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn generic_content(city: &str) -> CatalogContent {
    CatalogContent {
        attractions: vec![
            format!("{} Historic Center", city),
            format!("{} Museum", city),
            format!("{} Cultural District", city),
            format!("{} Main Square", city),
            format!("{} Landmark", city),
        ],
        activities: vec![
            format!("{} Walking Tour", city),
            format!("{} Food Tasting", city),
            format!("{} Museum Visit", city),
            format!("{} Market Browse", city),
            format!("{} Sunset Viewing", city),
        ],
    }
}

fn generic_restaurants(city: &str) -> Vec<String> {
    vec![
        format!("Local {} Cuisine", city),
        format!("Traditional {} Restaurant", city),
        format!("{} Street Food", city),
        format!("Fine Dining {}", city),
        format!("{} Cafe", city),
    ]
}

fn generic_neighborhoods(city: &str) -> Vec<String> {
    vec![
        format!("Historic {}", city),
        format!("Modern {}", city),
        "Cultural Quarter".to_string(),
        "Local Markets".to_string(),
        "Residential District".to_string(),
    ]
}

const fn content(
    attractions: &'static [&'static str],
    activities: &'static [&'static str],
) -> StyleContent {
    StyleContent {
        attractions,
        activities,
    }
}

static CITIES: &[CityEntry] = &[
    CityEntry {
        key: "agra",
        styles: &[
            (TravelStyle::Culture, content(
                &["Taj Mahal", "Agra Fort", "Fatehpur Sikri", "Mehtab Bagh", "Itimad-ud-Daulah"],
                &["Heritage Walk", "Mughal Architecture Tour", "Historical Museum Visit"],
            )),
            (TravelStyle::Shopping, content(
                &["Sadar Bazaar", "Kinari Bazaar", "Raja Ki Mandi", "Taj Ganj Market", "Subhash Bazaar"],
                &["Marble Inlay Shopping", "Leather Goods Market", "Handicraft Shopping", "Carpet Shopping", "Jewelry Market Visit"],
            )),
            (TravelStyle::Foodie, content(
                &["Chaat Gali", "Deori Road Food Street", "Sadar Bazaar Food Market", "Taj Ganj Eateries", "Local Sweet Shops"],
                &["Street Food Tour", "Petha Tasting", "Mughlai Cuisine Experience", "Local Sweets Shopping"],
            )),
            (TravelStyle::Adventure, content(
                &["Yamuna River", "Chambal Safari", "Keoladeo National Park", "Bharatpur Bird Sanctuary", "Cycling Tours"],
                &["River Boating", "Wildlife Safari", "Bird Watching", "Heritage Cycling", "Photography Walk"],
            )),
            (TravelStyle::Relaxation, content(
                &["Mehtab Bagh Gardens", "Ram Bagh", "Soami Bagh", "Taj Nature Walk", "Spa Resorts"],
                &["Garden Stroll", "Sunset Viewing", "Spa Treatment", "Meditation Session", "Nature Photography"],
            )),
            (TravelStyle::Mixed, content(
                &["Taj Mahal", "Sadar Bazaar", "Agra Fort", "Kinari Bazaar", "Mehtab Bagh"],
                &["Heritage Tour", "Shopping Experience", "Cultural Walk", "Local Market Visit", "Garden Visit"],
            )),
        ],
        restaurants: &["Pinch of Spice", "Dasaprakash", "Joney's Place", "Shankara Vegis Restaurant", "The Charcoal Chimney"],
        neighborhoods: &["Taj Ganj", "Sadar Bazaar", "Civil Lines", "Kamla Nagar", "Dayalbagh"],
    },
    CityEntry {
        key: "paris",
        styles: &[
            (TravelStyle::Culture, content(
                &["Louvre Museum", "Notre-Dame Cathedral", "Arc de Triomphe", "Musée d'Orsay", "Sainte-Chapelle"],
                &["Museum Tour", "Historical Walk", "Art Gallery Visit", "Architecture Tour"],
            )),
            (TravelStyle::Shopping, content(
                &["Champs-Élysées", "Galeries Lafayette", "Le Marais Boutiques", "Rue de Rivoli", "Montmartre Artists Market"],
                &["Fashion Shopping", "Luxury Boutiques", "Vintage Shopping", "Art Market Browse", "Designer Stores"],
            )),
            (TravelStyle::Foodie, content(
                &["Marché des Enfants Rouges", "Latin Quarter Bistros", "Montmartre Cafes", "Seine Riverside Restaurants", "Local Patisseries"],
                &["Food Market Tour", "Wine Tasting", "Cooking Class", "Pastry Workshop", "Bistro Hopping"],
            )),
            (TravelStyle::Adventure, content(
                &["Seine River Cruise", "Eiffel Tower Climb", "Montmartre Hiking", "Bike Tours", "Catacombs Exploration"],
                &["River Adventure", "Tower Climbing", "City Cycling", "Underground Exploration", "Walking Tours"],
            )),
            (TravelStyle::Relaxation, content(
                &["Luxembourg Gardens", "Tuileries Garden", "Seine Riverbanks", "Spa Centers", "Park Benches"],
                &["Garden Stroll", "Picnic in Park", "Riverside Walk", "Spa Treatment", "Café Sitting"],
            )),
            (TravelStyle::Mixed, content(
                &["Eiffel Tower", "Louvre Museum", "Champs-Élysées", "Montmartre", "Seine River"],
                &["Sightseeing Tour", "Cultural Visit", "Shopping Walk", "Dining Experience", "City Exploration"],
            )),
        ],
        restaurants: &["Le Comptoir du Relais", "L'Arpège", "Le Jules Verne", "Le Chateaubriand", "Septime"],
        neighborhoods: &["Le Marais", "Montmartre", "Saint-Germain-des-Prés", "Latin Quarter", "Champs-Élysées"],
    },
    CityEntry {
        key: "tokyo",
        styles: &[
            (TravelStyle::Culture, content(
                &["Senso-ji Temple", "Meiji Shrine", "Tokyo National Museum", "Imperial Palace", "Ueno Park"],
                &["Temple Visit", "Traditional Garden Walk", "Museum Tour", "Cultural District Exploration"],
            )),
            (TravelStyle::Shopping, content(
                &["Shibuya Crossing", "Harajuku Takeshita Street", "Ginza District", "Akihabara Electronics", "Ameya-Yokocho Market"],
                &["Fashion Shopping", "Electronics Shopping", "Anime Merchandise", "Traditional Crafts", "Street Fashion"],
            )),
            (TravelStyle::Foodie, content(
                &["Tsukiji Outer Market", "Ramen Yokocho", "Izakaya District", "Sushi Restaurants", "Street Food Stalls"],
                &["Sushi Tasting", "Ramen Tour", "Street Food Experience", "Sake Tasting", "Cooking Class"],
            )),
            (TravelStyle::Adventure, content(
                &["Tokyo Skytree", "Mount Fuji Day Trip", "Tokyo Bay Cruise", "Cycling Tours", "Robot Restaurant"],
                &["Sky Tower Climb", "Mountain Hiking", "Bay Cruise", "City Cycling", "Unique Experiences"],
            )),
            (TravelStyle::Relaxation, content(
                &["Shinjuku Gyoen", "Ueno Park", "Traditional Onsen", "Zen Gardens", "Tea Houses"],
                &["Garden Stroll", "Hot Spring Bath", "Tea Ceremony", "Meditation", "Park Relaxation"],
            )),
            (TravelStyle::Mixed, content(
                &["Tokyo Skytree", "Shibuya Crossing", "Senso-ji Temple", "Ginza District", "Ueno Park"],
                &["City Tour", "Cultural Visit", "Shopping Experience", "Dining Adventure", "Sightseeing"],
            )),
        ],
        restaurants: &["Sukiyabashi Jiro", "Narisawa", "Den", "Kozasa", "Ramen Yashichi"],
        neighborhoods: &["Shibuya", "Shinjuku", "Harajuku", "Asakusa", "Ginza"],
    },
    CityEntry {
        key: "new york",
        styles: &[
            (TravelStyle::Culture, content(
                &["Metropolitan Museum", "MoMA", "Statue of Liberty", "9/11 Memorial", "Ellis Island"],
                &["Museum Tour", "Art Gallery Visit", "Historical Site Tour", "Architecture Walk"],
            )),
            (TravelStyle::Shopping, content(
                &["Fifth Avenue", "SoHo District", "Brooklyn Flea Market", "Macy's Herald Square", "Chelsea Market"],
                &["Luxury Shopping", "Boutique Browse", "Vintage Shopping", "Market Shopping", "Designer Stores"],
            )),
            (TravelStyle::Foodie, content(
                &["Little Italy", "Chinatown", "Food Trucks", "Smorgasburg", "Chelsea Market"],
                &["Food Tour", "Pizza Crawl", "Bagel Tasting", "Food Market Visit", "Fine Dining"],
            )),
            (TravelStyle::Adventure, content(
                &["Central Park Activities", "Brooklyn Bridge Walk", "High Line Park", "Helicopter Tours", "Kayaking Hudson"],
                &["Park Adventures", "Bridge Walking", "Urban Hiking", "Aerial Tours", "Water Sports"],
            )),
            (TravelStyle::Relaxation, content(
                &["Central Park", "Bryant Park", "The High Line", "Spa Centers", "Rooftop Gardens"],
                &["Park Stroll", "Garden Relaxation", "Spa Treatment", "Rooftop Views", "Peaceful Walks"],
            )),
            (TravelStyle::Mixed, content(
                &["Times Square", "Central Park", "Empire State Building", "Brooklyn Bridge", "Statue of Liberty"],
                &["City Sightseeing", "Cultural Visit", "Shopping Walk", "Dining Experience", "Urban Exploration"],
            )),
        ],
        restaurants: &["Le Bernardin", "Eleven Madison Park", "Per Se", "Daniel", "Gramercy Tavern"],
        neighborhoods: &["Manhattan", "Brooklyn", "Queens", "Bronx", "Staten Island"],
    },
    CityEntry {
        key: "london",
        styles: &[
            (TravelStyle::Culture, content(
                &["British Museum", "Tower of London", "Westminster Abbey", "Tate Modern", "National Gallery"],
                &["Museum Tour", "Historical Site Visit", "Art Gallery Browse", "Royal Palace Tour"],
            )),
            (TravelStyle::Shopping, content(
                &["Oxford Street", "Covent Garden", "Camden Market", "Portobello Road", "Harrods"],
                &["High Street Shopping", "Market Browse", "Vintage Shopping", "Luxury Department Store", "Antique Hunting"],
            )),
            (TravelStyle::Foodie, content(
                &["Borough Market", "Brick Lane", "Chinatown", "Food Markets", "Traditional Pubs"],
                &["Market Food Tour", "Curry Experience", "Pub Crawl", "Afternoon Tea", "Fish & Chips"],
            )),
            (TravelStyle::Adventure, content(
                &["Thames River Cruise", "London Eye", "Hyde Park Activities", "Cycling Tours", "Walking Tours"],
                &["River Adventure", "Ferris Wheel Ride", "Park Activities", "City Cycling", "Historical Walks"],
            )),
            (TravelStyle::Relaxation, content(
                &["Hyde Park", "Regent's Park", "Kew Gardens", "Spa Centers", "Thames Riverside"],
                &["Park Stroll", "Garden Visit", "Riverside Walk", "Spa Treatment", "Peaceful Gardens"],
            )),
            (TravelStyle::Mixed, content(
                &["Big Ben", "London Eye", "Tower Bridge", "Buckingham Palace", "Thames River"],
                &["Sightseeing Tour", "Cultural Experience", "Shopping Walk", "Dining Adventure", "City Exploration"],
            )),
        ],
        restaurants: &["Sketch", "Dishoom", "The Ledbury", "Hawksmoor", "Rules Restaurant"],
        neighborhoods: &["Covent Garden", "Shoreditch", "Camden", "Notting Hill", "Greenwich"],
    },
    CityEntry {
        key: "rome",
        styles: &[
            (TravelStyle::Culture, content(
                &["Colosseum", "Vatican Museums", "Roman Forum", "Pantheon", "Capitoline Museums"],
                &["Ancient Rome Tour", "Vatican Art Tour", "Archaeological Walk", "Historical Site Visit"],
            )),
            (TravelStyle::Shopping, content(
                &["Via del Corso", "Campo de' Fiori Market", "Trastevere Boutiques", "Via Nazionale", "Porta Portese Market"],
                &["Fashion Shopping", "Local Market Browse", "Artisan Shopping", "Vintage Finds", "Italian Design"],
            )),
            (TravelStyle::Foodie, content(
                &["Testaccio Market", "Trastevere Restaurants", "Campo de' Fiori", "Local Trattorias", "Gelato Shops"],
                &["Food Market Tour", "Pasta Making Class", "Wine Tasting", "Gelato Tasting", "Roman Cuisine"],
            )),
            (TravelStyle::Adventure, content(
                &["Appian Way Cycling", "Villa Borghese", "Tiber River", "Castel Sant'Angelo", "Roman Hills"],
                &["Ancient Road Cycling", "Park Adventures", "River Activities", "Castle Exploration", "Hill Climbing"],
            )),
            (TravelStyle::Relaxation, content(
                &["Villa Borghese", "Orange Garden", "Baths of Caracalla", "Spa Centers", "Tiber Riverside"],
                &["Garden Stroll", "Scenic Views", "Ancient Spa Experience", "Peaceful Walks", "Riverside Relaxation"],
            )),
            (TravelStyle::Mixed, content(
                &["Colosseum", "Trevi Fountain", "Vatican City", "Spanish Steps", "Roman Forum"],
                &["Historical Tour", "Cultural Visit", "Shopping Experience", "Culinary Adventure", "City Exploration"],
            )),
        ],
        restaurants: &["La Pergola", "Il Pagliaccio", "Armando al Pantheon", "Da Enzo al 29", "Trattoria Monti"],
        neighborhoods: &["Trastevere", "Campo de' Fiori", "Vatican", "Monti", "Testaccio"],
    },
    CityEntry {
        key: "mumbai",
        styles: &[
            (TravelStyle::Culture, content(
                &["Gateway of India", "Chhatrapati Shivaji Museum", "Elephanta Caves", "Crawford Market", "Dhobi Ghat"],
                &["Heritage Walk", "Museum Visit", "Cave Exploration", "Local Culture Tour"],
            )),
            (TravelStyle::Shopping, content(
                &["Linking Road", "Colaba Causeway", "Crawford Market", "Palladium Mall", "Chor Bazaar"],
                &["Street Shopping", "Fashion Browse", "Antique Shopping", "Mall Shopping", "Local Markets"],
            )),
            (TravelStyle::Foodie, content(
                &["Mohammed Ali Road", "Khau Galli", "Bandra Food Street", "Juhu Beach Food", "Local Restaurants"],
                &["Street Food Tour", "Vada Pav Tasting", "Seafood Experience", "Local Cuisine", "Food Markets"],
            )),
            (TravelStyle::Adventure, content(
                &["Marine Drive", "Juhu Beach", "Sanjay Gandhi National Park", "Elephanta Island", "Mumbai Harbor"],
                &["Beach Activities", "Nature Park Trek", "Island Hopping", "Harbor Cruise", "Urban Adventures"],
            )),
            (TravelStyle::Relaxation, content(
                &["Marine Drive", "Hanging Gardens", "Juhu Beach", "Spa Centers", "Worli Sea Face"],
                &["Seaside Stroll", "Garden Relaxation", "Beach Relaxation", "Spa Treatment", "Sunset Views"],
            )),
            (TravelStyle::Mixed, content(
                &["Gateway of India", "Marine Drive", "Colaba Causeway", "Juhu Beach", "Crawford Market"],
                &["City Tour", "Cultural Experience", "Shopping Walk", "Food Adventure", "Coastal Exploration"],
            )),
        ],
        restaurants: &["Trishna", "Britannia & Co.", "Leopold Cafe", "Bademiya", "Khyber Restaurant"],
        neighborhoods: &["Colaba", "Bandra", "Juhu", "Fort", "Worli"],
    },
    CityEntry {
        key: "delhi",
        styles: &[
            (TravelStyle::Culture, content(
                &["Red Fort", "Qutub Minar", "Humayun's Tomb", "Lotus Temple", "National Museum"],
                &["Heritage Walk", "Mughal Architecture Tour", "Museum Visit", "Historical Site Tour"],
            )),
            (TravelStyle::Shopping, content(
                &["Chandni Chowk", "Khan Market", "Karol Bagh", "Connaught Place", "Dilli Haat"],
                &["Traditional Market Shopping", "Designer Shopping", "Handicraft Shopping", "Street Shopping", "Artisan Markets"],
            )),
            (TravelStyle::Foodie, content(
                &["Paranthe Wali Gali", "Chandni Chowk Food Street", "Khan Market Eateries", "Old Delhi Food Tour", "Local Dhabas"],
                &["Street Food Tour", "Paratha Tasting", "Chaat Experience", "Mughlai Cuisine", "Local Food Markets"],
            )),
            (TravelStyle::Adventure, content(
                &["Yamuna River", "Ridge Forest", "Adventure Parks", "Cycling Tours", "Rock Climbing"],
                &["River Activities", "Forest Trek", "Adventure Sports", "City Cycling", "Outdoor Adventures"],
            )),
            (TravelStyle::Relaxation, content(
                &["Lodhi Gardens", "India Gate Lawns", "Spa Centers", "Buddha Jayanti Park", "Raj Ghat"],
                &["Garden Stroll", "Peaceful Walks", "Spa Treatment", "Park Relaxation", "Meditation"],
            )),
            (TravelStyle::Mixed, content(
                &["India Gate", "Red Fort", "Connaught Place", "Lotus Temple", "Chandni Chowk"],
                &["City Tour", "Cultural Walk", "Shopping Experience", "Food Adventure", "Historical Exploration"],
            )),
        ],
        restaurants: &["Indian Accent", "Bukhara", "Karim's", "Paranthe Wali Gali", "Lodi - The Garden Restaurant"],
        neighborhoods: &["Old Delhi", "Connaught Place", "Khan Market", "Hauz Khas", "Karol Bagh"],
    },
];
