use std::collections::HashMap;

/// Used for any slug without a curated position; sits slightly above center.
pub const DEFAULT_CROP: f64 = 0.45;

/// Vertical center of the crop window per slug, as a fraction of the resized
/// height (0.0 is the top edge, 1.0 the bottom).
pub const CROP_POSITIONS: &[(&str, f64)] = &[
    // Museums
    ("san-diego-museum-of-art", 0.42),
    ("san-diego-natural-history-museum", 0.40),
    ("fleet-science-center", 0.50),
    ("mingei-international-museum", 0.45),
    ("museum-of-us", 0.42),
    ("museum-of-photographic-arts", 0.45),
    ("san-diego-history-center", 0.45),
    ("san-diego-model-railroad-museum", 0.45),
    ("san-diego-air-space-museum", 0.45),
    ("san-diego-automotive-museum", 0.45),
    ("comic-con-museum", 0.40),
    ("timken-museum-of-art", 0.45),
    ("centro-cultural-de-la-raza", 0.55),
    ("worldbeat-cultural-center", 0.50),
    ("veterans-museum", 0.45),
    ("marston-house", 0.40),
    ("institute-of-contemporary-art", 0.45),
    ("san-diego-hall-of-champions", 0.45),

    // Gardens
    ("alcazar-garden", 0.45),
    ("australian-garden", 0.45),
    ("botanical-building", 0.40),
    ("desert-garden", 0.45),
    ("inez-grant-parker-memorial-rose-garden", 0.45),
    ("japanese-friendship-garden", 0.45),
    ("palm-canyon", 0.45),
    ("zoro-garden", 0.45),
    ("redwood-circle", 0.45),
    ("casa-del-rey-moro-garden", 0.45),
    ("kate-sessions-cactus-garden", 0.45),
    ("ethnobotany-peace-garden", 0.45),
    ("veterans-memorial-garden", 0.45),
    ("trees-for-health-garden", 0.45),
    ("may-marcy-sculpture-garden", 0.42),
    ("florida-canyon-native-plant-garden", 0.45),
    ("california-native-plant-garden", 0.45),

    // Landmarks
    ("cabrillo-bridge", 0.40),
    ("california-tower", 0.40),
    ("balboa-park-visitor-center", 0.42),
    ("el-prado-walkway", 0.40),
    ("casa-de-balboa", 0.40),
    ("casa-del-prado", 0.55),
    ("house-of-hospitality", 0.42),
    ("spreckels-organ-pavilion", 0.38),
    ("spanish-village-art-center", 0.45),
    ("bea-evenson-fountain", 0.40),
    ("plaza-de-panama", 0.45),
    ("palisades-building", 0.45),
    ("balboa-park-club", 0.45),
    ("administration-building", 0.45),
    ("war-memorial-building", 0.45),

    // Theaters and dining
    ("old-globe-theatre", 0.42),
    ("san-diego-junior-theatre", 0.45),
    ("puppet-theater", 0.45),
    ("starlight-bowl", 0.42),
    ("the-prado-restaurant", 0.45),
    ("panama-66", 0.45),
    ("tea-pavilion", 0.45),
    ("craft-coffee", 0.45),
    ("food-truck-alley", 0.45),

    // Recreation
    ("san-diego-zoo", 0.42),
    ("balboa-park-carousel", 0.45),
    ("balboa-park-miniature-train", 0.45),
    ("balboa-park-dog-park", 0.45),
    ("grape-street-dog-park", 0.45),
    ("morley-field-dog-park", 0.45),
    ("morley-field-disc-golf", 0.45),
    ("morley-field-tennis", 0.45),
    ("morley-field-baseball", 0.45),
    ("morley-field-pool", 0.45),
    ("morley-field-velodrome", 0.42),
    ("balboa-park-golf-course", 0.45),
    ("lawn-bowling-green", 0.45),
    ("golden-hill-recreation-center", 0.45),
    ("rube-powell-archery-range", 0.45),
    ("canyonside-community-park", 0.45),
    ("pan-american-community-park", 0.45),
    ("municipal-gymnasium", 0.45),
    ("international-cottages", 0.45),
    ("arizona-street-landfill-park", 0.45),
];

/// Build the read-only slug -> center fraction lookup
pub fn crop_positions() -> HashMap<&'static str, f64> {
    CROP_POSITIONS.iter().copied().collect()
}

/// Center fraction for a slug, falling back to [`DEFAULT_CROP`]
pub fn center_for(positions: &HashMap<&str, f64>, slug: &str) -> f64 {
    positions.get(slug).copied().unwrap_or(DEFAULT_CROP)
}
