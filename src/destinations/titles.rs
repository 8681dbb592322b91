use std::collections::HashMap;

/// Destination slug to Wikipedia article title.
///
/// Slugs without an article of their own map to a related or parent article,
/// most often "Balboa Park".
pub const TITLES: &[(&str, &str)] = &[
    ("alcazar-garden", "Alcazar Garden (Balboa Park)"),
    ("botanical-building", "Botanical Building"),
    ("california-tower", "California Tower (Balboa Park)"),
    ("cabrillo-bridge", "Cabrillo Bridge"),
    ("fleet-science-center", "Fleet Science Center"),
    ("japanese-friendship-garden", "Japanese Friendship Garden (San Diego)"),
    ("mingei-international-museum", "Mingei International Museum"),
    ("museum-of-us", "Museum of Us"),
    ("old-globe-theatre", "The Old Globe"),
    ("san-diego-air-space-museum", "San Diego Air & Space Museum"),
    ("san-diego-automotive-museum", "San Diego Automotive Museum"),
    ("san-diego-history-center", "San Diego History Center"),
    ("san-diego-model-railroad-museum", "San Diego Model Railroad Museum"),
    ("san-diego-museum-of-art", "San Diego Museum of Art"),
    ("san-diego-natural-history-museum", "San Diego Natural History Museum"),
    ("san-diego-zoo", "San Diego Zoo"),
    ("spanish-village-art-center", "Spanish Village Art Center"),
    ("spreckels-organ-pavilion", "Spreckels Organ Pavilion"),
    ("timken-museum-of-art", "Timken Museum of Art"),
    ("veterans-museum", "Veterans Museum and Memorial Center"),
    ("worldbeat-cultural-center", "WorldBeat Cultural Center"),
    ("comic-con-museum", "Comic-Con Museum"),
    ("marston-house", "Marston House"),
    ("casa-de-balboa", "Casa de Balboa"),
    ("casa-del-prado", "Casa del Prado"),
    ("house-of-hospitality", "House of Hospitality"),
    ("centro-cultural-de-la-raza", "Centro Cultural de la Raza"),
    ("museum-of-photographic-arts", "Museum of Photographic Arts"),
    ("san-diego-junior-theatre", "San Diego Junior Theatre"),
    ("starlight-bowl", "Starlight Bowl"),
    ("war-memorial-building", "Balboa Park"),
    ("palisades-building", "Balboa Park"),
    ("palm-canyon", "Balboa Park"),
    ("redwood-circle", "Balboa Park"),
    ("zoro-garden", "Zoro Garden"),
    ("inez-grant-parker-memorial-rose-garden", "Inez Grant Parker Memorial Rose Garden"),
    ("san-diego-hall-of-champions", "Hall of Champions (museum)"),
    ("balboa-park-carousel", "Balboa Park"),
    ("balboa-park-miniature-train", "Balboa Park"),
    ("balboa-park-visitor-center", "Balboa Park"),
    ("balboa-park-club", "Balboa Park"),
    ("el-prado-walkway", "El Prado (San Diego)"),
    ("puppet-theater", "Marie Hitchcock Puppet Theatre"),
    ("bea-evenson-fountain", "Bea Evenson Fountain"),
    ("plaza-de-panama", "Balboa Park"),
    ("international-cottages", "House of Pacific Relations"),
    ("the-prado-restaurant", "The Prado at Balboa Park"),
    ("panama-66", "San Diego Museum of Art"),
    ("institute-of-contemporary-art", "Institute of Contemporary Art San Diego"),
    ("desert-garden", "Balboa Park"),
    ("florida-canyon-native-plant-garden", "Balboa Park"),
    ("florida-canyon-nature-center", "Florida Canyon"),
    ("kate-sessions-cactus-garden", "Kate Sessions"),
    ("casa-del-rey-moro-garden", "Balboa Park"),
    ("ethnobotany-peace-garden", "Balboa Park"),
    ("veterans-memorial-garden", "Balboa Park"),
    ("trees-for-health-garden", "Balboa Park"),
    ("may-marcy-sculpture-garden", "San Diego Museum of Art"),
    ("california-native-plant-garden", "Balboa Park"),
    ("australian-garden", "Balboa Park"),
    ("administration-building", "Balboa Park"),
    ("balboa-park-golf-course", "Balboa Park Golf Course"),
    ("morley-field-tennis", "Morley Field"),
    ("morley-field-disc-golf", "Morley Field"),
    ("morley-field-pool", "Morley Field"),
    ("morley-field-baseball", "Morley Field"),
    ("morley-field-velodrome", "San Diego Velodrome"),
    ("morley-field-dog-park", "Morley Field"),
    ("san-diego-lawn-bowling-club", "Balboa Park"),
    ("lawn-bowling-green", "Balboa Park"),
    ("golden-hill-recreation-center", "Golden Hill, San Diego"),
    ("grape-street-dog-park", "Balboa Park"),
    ("balboa-park-dog-park", "Balboa Park"),
    ("municipal-gymnasium", "Balboa Park"),
    ("rube-powell-archery-range", "Balboa Park"),
    ("canyonside-community-park", "Balboa Park"),
    ("pan-american-community-park", "Balboa Park"),
    ("food-truck-alley", "Balboa Park"),
    ("craft-coffee", "Balboa Park"),
    ("tea-pavilion", "Japanese Friendship Garden (San Diego)"),
    ("arizona-street-landfill-park", "Balboa Park"),
];

/// Build the read-only slug -> article title lookup
pub fn title_map() -> HashMap<&'static str, &'static str> {
    TITLES.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slug_is_mapped_once() {
        assert_eq!(title_map().len(), TITLES.len());
    }

    #[test]
    fn slugs_without_article_fall_back_to_park() {
        let titles = title_map();
        assert_eq!(titles["palm-canyon"], "Balboa Park");
        assert_eq!(titles["old-globe-theatre"], "The Old Globe");
        assert!(!titles.contains_key("not-a-destination"));
    }
}
