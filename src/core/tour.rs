use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Physical effort a tour asks of its guests
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
    Strenuous,
}

impl Difficulty {
    /// Badge colours for the destination card
    pub fn badge_class(&self) -> &'static str {
        match self {
            Difficulty::Easy => "bg-emerald-100 text-emerald-700",
            Difficulty::Moderate => "bg-amber-100 text-amber-700",
            Difficulty::Challenging => "bg-orange-100 text-orange-700",
            Difficulty::Strenuous => "bg-red-100 text-red-700",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Season {
    Spring,
    Summer,
    Monsoon,
    Autumn,
    Winter,
}

/// A travel package shown on the destination cards.
///
/// Field names on the wire follow the camelCase layout of the sample data,
/// with the identifier stored under `_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub destination: String,
    pub duration_days: u16,
    /// Price in whole US dollars
    pub price_per_person: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub best_season: Vec<Season>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Tour {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            destination: destination.into(),
            duration_days: 1,
            price_per_person: 1,
            difficulty: Difficulty::Easy,
            best_season: Vec::new(),
            highlights: Vec::new(),
            images: Vec::new(),
            is_available: true,
            description: None,
        }
    }

    pub fn with_duration(mut self, days: u16) -> Self {
        self.duration_days = days;
        self
    }

    pub fn with_price(mut self, usd: u32) -> Self {
        self.price_per_person = usd;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_seasons(mut self, seasons: impl IntoIterator<Item = Season>) -> Self {
        self.best_season = seasons.into_iter().collect();
        self
    }

    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.images.push(path.into());
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }

    /// First image, used as the card cover
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Price with thousands separators, e.g. `$1,299`
    pub fn formatted_price(&self) -> String {
        let digits = self.price_per_person.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        out.push('$');
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    pub fn duration_label(&self) -> String {
        match self.duration_days {
            1 => "1 Day".to_string(),
            n => format!("{} Days", n),
        }
    }

    /// Seasons joined for display, e.g. `Spring, Autumn`
    pub fn seasons_label(&self) -> String {
        self.best_season
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_price_groups_thousands() {
        assert_eq!(Tour::new("a", "t", "d").with_price(999).formatted_price(), "$999");
        assert_eq!(Tour::new("a", "t", "d").with_price(1299).formatted_price(), "$1,299");
        assert_eq!(
            Tour::new("a", "t", "d").with_price(1_250_000).formatted_price(),
            "$1,250,000"
        );
    }

    #[test]
    fn test_duration_label_singular_and_plural() {
        assert_eq!(Tour::new("a", "t", "d").with_duration(1).duration_label(), "1 Day");
        assert_eq!(Tour::new("a", "t", "d").with_duration(14).duration_label(), "14 Days");
    }

    #[test]
    fn test_seasons_label() {
        let tour = Tour::new("a", "t", "d").with_seasons([Season::Spring, Season::Autumn]);
        assert_eq!(tour.seasons_label(), "Spring, Autumn");

        let tour = Tour::new("a", "t", "d");
        assert_eq!(tour.seasons_label(), "");
    }

    #[test]
    fn test_cover_image_is_first_image() {
        let tour = Tour::new("a", "t", "d")
            .with_image("/tours/one.svg")
            .with_image("/tours/two.svg");
        assert_eq!(tour.cover_image(), Some("/tours/one.svg"));
        assert_eq!(Tour::new("a", "t", "d").cover_image(), None);
    }

    #[test]
    fn test_deserialize_sample_layout() {
        let json = r#"{
            "_id": "everest-base-camp",
            "title": "Everest Base Camp Trek",
            "destination": "Khumbu",
            "durationDays": 14,
            "pricePerPerson": 1450,
            "difficulty": "Challenging",
            "bestSeason": ["Spring", "Autumn"],
            "highlights": ["Kala Patthar sunrise"],
            "images": ["/tours/everest.svg"],
            "isAvailable": true
        }"#;

        let tour: Tour = serde_json::from_str(json).unwrap();
        assert_eq!(tour.id, "everest-base-camp");
        assert_eq!(tour.duration_days, 14);
        assert_eq!(tour.price_per_person, 1450);
        assert_eq!(tour.difficulty, Difficulty::Challenging);
        assert_eq!(tour.best_season, vec![Season::Spring, Season::Autumn]);
        assert!(tour.is_available);
        assert!(tour.description.is_none());
    }

    #[test]
    fn test_serialize_uses_underscore_id() {
        let json = serde_json::to_value(Tour::new("abc", "t", "d")).unwrap();
        assert_eq!(json["_id"], "abc");
        assert!(json.get("description").is_none());
        assert_eq!(json["isAvailable"], true);
    }

    #[test]
    fn test_sold_out_tour_builder() {
        let tour = Tour::new("upper-mustang", "Upper Mustang Trek", "Mustang")
            .with_difficulty(Difficulty::Strenuous)
            .unavailable();
        assert!(!tour.is_available);
        assert_eq!(tour.difficulty.badge_class(), "bg-red-100 text-red-700");

        let json = serde_json::to_value(&tour).unwrap();
        assert_eq!(json["isAvailable"], false);
        assert_eq!(json["difficulty"], "Strenuous");

        assert!(Tour::new("a", "t", "d").is_available);
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Moderate.to_string(), "Moderate");
        assert_eq!(Season::Monsoon.to_string(), "Monsoon");
    }
}
