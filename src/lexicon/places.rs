//! Place-noun vocabulary.
//!
//! `PLACE_NOUNS` are confident on their own; `AMBIGUOUS_PLACE_NOUNS` are
//! high-recall words that only count as a place with nearby context
//! (determiner, location preposition, or motion verb).

/// Known place nouns, grouped for readability.
pub const PLACE_NOUNS: &[&str] = &[
    // Food & drink
    "cafe", "coffee shop", "coffeehouse", "tea house", "teahouse", "bar", "pub", "tavern",
    "restaurant", "bistro", "brasserie", "cantina", "pizzeria", "steakhouse", "sushi bar",
    "noodle shop", "diner", "cafeteria", "canteen", "bakery", "deli", "food court", "food truck",
    "brewery", "taproom", "winery", "tasting room", "juice bar", "ice cream shop", "creamery",
    "dessert shop", "espresso bar", "tea shop", "bubble tea shop", "taco stand", "food hall",
    "roastery", "brewpub", "chophouse", "grill", "ramen shop", "pho shop", "sandwich shop",
    "burger joint", "cider house", "distillery", "speakeasy", "beer hall",
    // Homes & rooms
    "apartment", "flat", "condo", "home", "house", "loft", "studio apartment", "dorm", "duplex",
    "penthouse", "townhouse", "cottage", "bungalow", "cabin", "hut", "shack", "shed", "barn",
    "attic", "basement", "cellar", "pantry", "laundry room", "utility room", "closet", "mudroom",
    "kitchen", "bedroom", "bathroom", "restroom", "washroom", "living room", "dining room",
    "hallway", "corridor", "study", "home office", "guest room", "nursery", "playroom", "sunroom",
    "conservatory", "den", "family room", "rec room", "media room", "sitting room", "parlor",
    "storage room", "storeroom", "powder room", "garage", "yard", "backyard", "front yard",
    "courtyard", "garden", "patio", "porch", "deck", "terrace", "veranda", "balcony", "rooftop",
    "foyer", "lobby", "entryway", "stairwell",
    // Work & services
    "office", "workspace", "studio", "coworking space", "workshop", "warehouse", "factory",
    "plant", "lab", "laboratory", "clinic", "urgent care", "hospital", "doctor's office",
    "dental clinic", "veterinary clinic", "pharmacy", "drugstore", "bank", "post office",
    "city hall", "town hall", "courthouse", "police station", "fire station", "embassy",
    "consulate", "data center", "research center", "construction site", "repair shop",
    "service center", "call center", "headquarters", "law office", "travel agency",
    "ticket office", "mailroom", "machine shop", "foundry", "power plant",
    // Education & culture
    "school", "preschool", "daycare", "classroom", "lecture hall", "campus", "university",
    "college", "library", "reading room", "archives", "museum", "gallery", "exhibit hall",
    "theater", "cinema", "auditorium", "concert hall", "music hall", "assembly hall",
    "cultural center", "community center", "art center", "science center", "stadium", "arena",
    "gym", "gymnasium", "dojo", "track", "court", "field", "pitch", "playground", "schoolyard",
    "observatory", "planetarium", "student union", "training center", "makerspace",
    "computer lab", "seminar room", "rehearsal room", "practice room", "opera house",
    "art studio",
    // Retail & shopping
    "mall", "shopping mall", "shopping center", "store", "shop", "convenience store",
    "corner store", "department store", "grocery", "supermarket", "outlet", "bookstore",
    "record store", "music store", "game store", "toy store", "electronics store",
    "furniture store", "clothing store", "shoe store", "pet store", "hardware store",
    "liquor store", "boutique", "thrift store", "pawn shop", "kiosk", "market", "farm stand",
    "farmer's market", "fish market", "butcher", "florist", "gift shop", "souvenir shop",
    "newsstand", "marketplace", "bazaar", "antique shop", "comic shop", "bike shop",
    "jewelry store",
    // Transport
    "station", "train station", "railway station", "subway", "metro", "underground", "platform",
    "bus stop", "bus station", "bus terminal", "tram stop", "airport", "runway", "terminal",
    "harbor", "harbour", "port", "marina", "dock", "pier", "boardwalk", "ferry terminal",
    "depot", "railyard", "helipad", "hangar", "taxi stand", "parking lot", "car park",
    "parking garage", "subway station", "metro station", "truck stop", "border crossing",
    "checkpoint", "ticket booth",
    // Roads & outdoors
    "street", "road", "avenue", "lane", "alley", "alleyway", "boulevard", "highway", "freeway",
    "motorway", "intersection", "roundabout", "crossroads", "sidewalk", "crosswalk", "driveway",
    "bridge", "tunnel", "overpass", "underpass", "trailhead", "rest area", "rest stop",
    "gas station", "petrol station", "service station", "plaza", "square", "promenade",
    "esplanade", "walkway", "footpath", "greenway", "viaduct", "causeway",
    // Nature
    "park", "beach", "shore", "coast", "bay", "gulf", "lagoon", "lake", "river", "creek",
    "stream", "pond", "waterfall", "marsh", "swamp", "wetland", "delta", "estuary", "reef",
    "forest", "woods", "jungle", "meadow", "prairie", "savanna", "desert", "canyon", "valley",
    "gorge", "ravine", "mountain", "hill", "ridge", "summit", "cliff", "cave", "plateau",
    "mesa", "dune", "oasis", "spring", "hot spring", "glacier", "volcano", "crater", "island",
    "peninsula", "cape", "camp", "campsite", "trail", "path", "geyser", "nature reserve",
    "wildlife refuge", "national park", "state park", "botanical garden", "arboretum", "grove",
    "orchard", "vineyard", "thicket", "glade", "clearing", "brook", "bayou", "fjord",
    // Lodging & leisure
    "hotel", "motel", "inn", "hostel", "bed and breakfast", "guesthouse", "lodge", "resort",
    "spa", "club", "nightclub", "lounge", "barbershop", "salon", "pool", "skating rink",
    "ice rink", "bowling alley", "casino", "amusement park", "theme park", "water park",
    "golf course", "pool hall", "karaoke bar", "game room", "zoo", "aquarium", "campground",
    "fitness center", "yoga studio", "dance studio", "climbing gym", "skate park",
    "shooting range", "race track", "arcade",
    // Worship
    "church", "chapel", "cathedral", "mosque", "temple", "synagogue", "shrine", "monastery",
    "abbey", "convent", "pagoda", "basilica", "prayer hall", "prayer room", "sanctuary",
    "tabernacle", "church hall", "ashram",
];

/// High recall but ambiguous; only counted with nearby context.
pub const AMBIGUOUS_PLACE_NOUNS: &[&str] = &[
    // Generic structures
    "place", "spot", "area", "location", "site", "setting", "space", "zone", "section", "part",
    "side", "corner", "edge", "end", "structure", "facility", "premises", "grounds",
    // Buildings & interiors
    "building", "room", "hall", "floor", "level", "story", "storey", "suite", "unit", "workroom",
    "chamber", "cell", "vault", "vestibule", "passage", "stairs", "staircase", "landing",
    "elevator", "lift",
    // Entrances & transitions
    "entrance", "exit", "door", "doorway", "gate", "gateway", "threshold", "archway",
    "passageway",
    // Outdoor / urban
    "way", "route", "block", "lot", "green", "commons", "crossing", "junction",
    // Civic / regional (very ambiguous)
    "town", "city", "village", "district", "quarter", "center", "centre", "downtown", "uptown",
    "midtown", "neighborhood", "neighbourhood", "suburb", "suburbs",
    // Travel & transit (short forms)
    "stop", "stand",
    // Commerce & public
    "counter", "desk",
    // Nature (abstracted)
    "land", "terrain", "ground", "trees",
    // Event / gathering
    "venue",
];

/// Phrases too generic to ever be a useful place on their own.
pub const GENERIC_PLACE_PHRASES: &[&str] = &[
    "the city",
    "the town",
    "the area",
    "the place",
    "this place",
    "that place",
    "somewhere",
    "anywhere",
    "everywhere",
    "nowhere",
    "here",
    "there",
    "inside",
    "outside",
    "upstairs",
    "downstairs",
    "nearby",
    "around",
    "elsewhere",
];

/// Descriptive adjectives that make a captured phrase look like a real
/// location name ("the Grand Library", "the old mill").
pub const LOCATIONAL_ADJECTIVES: &[&str] = &[
    "grand", "central", "old", "new", "main", "royal", "city", "north", "northern", "south",
    "southern", "east", "eastern", "west", "western", "upper", "lower", "inner", "outer",
    "great", "little", "ancient", "abandoned", "hidden", "secret", "crowded", "quiet", "busy",
    "downtown",
];
