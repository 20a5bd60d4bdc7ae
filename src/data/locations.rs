use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub id: &'static str,
    pub name: &'static str,
    pub state: &'static str,
    pub full_name: &'static str,
    pub description: &'static str,
    pub population: &'static str,
    pub key_industries: &'static [&'static str],
    pub business_stats: &'static str,
    pub social_media_stats: &'static str,
    pub is_headquarters: bool,
    pub image: &'static str,
    pub map_url: &'static str,
    pub seo_keywords: &'static [&'static str],
}

pub static LOCATIONS: &[Location] = &[
    Location {
        id: "nashville-tn",
        name: "Nashville",
        state: "TN",
        full_name: "Nashville, Tennessee",
        description: "Music City and the capital of Tennessee, known for its vibrant music scene, creative culture, and growing business community.",
        population: "About 700,000",
        key_industries: &["Music and Entertainment", "Healthcare", "Tourism", "Education", "Technology", "Publishing"],
        business_stats: "Home to over 40,000 businesses with a rapidly growing startup ecosystem",
        social_media_stats: "92% of Nashville residents use social media regularly, with Facebook and Instagram being the most popular platforms",
        is_headquarters: true,
        image: "/images/Social_Media_Music_PromotionSubheadingArtist_performing_stage_lights_0001.jpg",
        map_url: "https://www.google.com/maps/place/Nashville,+TN",
        seo_keywords: &[
            "Nashville social media marketing",
            "Nashville content creation",
            "Nashville digital marketing",
            "social media management Nashville TN",
            "Nashville Facebook marketing",
            "Nashville Instagram content",
        ],
    },
    Location {
        id: "chattanooga-tn",
        name: "Chattanooga",
        state: "TN",
        full_name: "Chattanooga, Tennessee",
        description: "Known as the 'Scenic City,' Chattanooga offers a perfect blend of outdoor adventure, technological innovation, and southern hospitality.",
        population: "About 180,000",
        key_industries: &["Technology", "Manufacturing", "Healthcare", "Tourism", "Outdoor Recreation", "Education"],
        business_stats: "Home to a growing innovation district with over 1,000 new businesses in the last decade",
        social_media_stats: "89% of Chattanooga residents are active on at least one social media platform",
        is_headquarters: false,
        image: "/images/Social_Media_Travel_AdventureSubheadingPerson_on_mountain_edge_sunset_0001.jpg",
        map_url: "https://www.google.com/maps/place/Chattanooga,+TN",
        seo_keywords: &[
            "Chattanooga social media services",
            "Chattanooga content creation",
            "Chattanooga digital marketing",
            "social media management Chattanooga TN",
            "Chattanooga business marketing",
            "Chattanooga Instagram strategy",
        ],
    },
    Location {
        id: "memphis-tn",
        name: "Memphis",
        state: "TN",
        full_name: "Memphis, Tennessee",
        description: "A city with a rich cultural heritage, known for its influential music scene, delicious barbecue, and important role in American history.",
        population: "About 650,000",
        key_industries: &["Logistics and Transportation", "Healthcare", "Manufacturing", "Tourism", "Food Production", "Music and Entertainment"],
        business_stats: "Home to several Fortune 500 companies and a growing entrepreneurial ecosystem",
        social_media_stats: "87% of Memphis residents use social media daily, with high engagement rates on visual platforms",
        is_headquarters: false,
        image: "/images/Social_Media_Food_PhotographySubheadingOverhead_shot_of_colorful_breakfast_spread_0001.jpg",
        map_url: "https://www.google.com/maps/place/Memphis,+TN",
        seo_keywords: &[
            "Memphis social media marketing",
            "Memphis content creation",
            "Memphis digital marketing",
            "social media management Memphis TN",
            "Memphis business promotion",
            "Memphis online presence",
        ],
    },
    Location {
        id: "louisville-ky",
        name: "Louisville",
        state: "KY",
        full_name: "Louisville, Kentucky",
        description: "Kentucky's largest city, known for the Kentucky Derby, bourbon distilleries, and a vibrant arts and culinary scene.",
        population: "About 620,000",
        key_industries: &["Healthcare", "Manufacturing", "Food and Beverage", "Logistics", "Tourism", "Education"],
        business_stats: "Over 25,000 businesses call Louisville home, with strong growth in healthcare and technology sectors",
        social_media_stats: "91% of Louisville residents have at least one social media account, with Facebook being the most popular platform",
        is_headquarters: false,
        image: "/images/Social_Media_Restaurant_PromotionSubheadingChef_plating_gourmet_dish_0001.jpg",
        map_url: "https://www.google.com/maps/place/Louisville,+KY",
        seo_keywords: &[
            "Louisville social media services",
            "Louisville content creation",
            "Louisville digital marketing",
            "social media management Louisville KY",
            "Louisville business marketing",
            "Louisville online presence",
        ],
    },
    Location {
        id: "huntsville-al",
        name: "Huntsville",
        state: "AL",
        full_name: "Huntsville, Alabama",
        description: "Known as 'Rocket City,' Huntsville is a hub for aerospace and technology innovation with a rapidly growing economy.",
        population: "About 215,000",
        key_industries: &["Aerospace and Defense", "Technology", "Research and Development", "Manufacturing", "Education", "Healthcare"],
        business_stats: "One of the fastest-growing tech economies in the South, with over 300 new tech companies in the last five years",
        social_media_stats: "93% of Huntsville residents are active on social media, with higher than average engagement on professional platforms",
        is_headquarters: false,
        image: "/images/Social_Media_Car_ShowcaseSubheadingLuxury_vehicle_dramatic_lighting_0001.jpg",
        map_url: "https://www.google.com/maps/place/Huntsville,+AL",
        seo_keywords: &[
            "Huntsville social media marketing",
            "Huntsville content creation",
            "Huntsville digital marketing",
            "social media management Huntsville AL",
            "Huntsville tech marketing",
            "Huntsville business promotion",
        ],
    },
    Location {
        id: "lexington-ky",
        name: "Lexington",
        state: "KY",
        full_name: "Lexington, Kentucky",
        description: "Known as the 'Horse Capital of the World,' Lexington combines rich equestrian traditions with education and innovation.",
        population: "About 325,000",
        key_industries: &["Equine Industry", "Healthcare", "Education", "Manufacturing", "Technology", "Food and Beverage"],
        business_stats: "Home to over 17,000 businesses with strong growth in healthcare and technology sectors",
        social_media_stats: "88% of Lexington residents use social media regularly, with high engagement on visual and community-focused platforms",
        is_headquarters: false,
        image: "/images/Social_Media_Sports_HighlightSubheadingAthlete_action_shot_stadium_0001.jpg",
        map_url: "https://www.google.com/maps/place/Lexington,+KY",
        seo_keywords: &[
            "Lexington social media services",
            "Lexington content creation",
            "Lexington digital marketing",
            "social media management Lexington KY",
            "Lexington business marketing",
            "Lexington online presence",
        ],
    },
];

pub fn get_location_by_id(id: &str) -> Option<&'static Location> {
    LOCATIONS.iter().find(|location| location.id == id)
}

pub fn get_all_location_ids() -> Vec<&'static str> {
    LOCATIONS.iter().map(|location| location.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_locations_by_id() {
        let location = get_location_by_id("huntsville-al").expect("location exists");
        assert_eq!(location.name, "Huntsville");
        assert_eq!(location.state, "AL");
        assert!(get_location_by_id("atlanta-ga").is_none());
    }

    #[test]
    fn ids_are_listed_in_order() {
        assert_eq!(
            get_all_location_ids(),
            vec!["nashville-tn", "chattanooga-tn", "memphis-tn", "louisville-ky", "huntsville-al", "lexington-ky"]
        );
    }

    #[test]
    fn nashville_is_the_only_headquarters() {
        let hq: Vec<_> = LOCATIONS.iter().filter(|l| l.is_headquarters).map(|l| l.id).collect();
        assert_eq!(hq, vec!["nashville-tn"]);
    }
}
