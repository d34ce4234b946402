//! Tour catalog
//!
//! The sample tours ship as JSON embedded in the binary and are parsed once,
//! on first access. Both the server render and the hydrated client read the
//! same document, so the cards always match.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::tour::Tour;

const SAMPLE_TOURS: &str = include_str!("../../data/tours.json");

static BUILTIN: LazyLock<TourCatalog> = LazyLock::new(|| {
    TourCatalog::from_json(SAMPLE_TOURS).unwrap_or_else(|err| {
        leptos::logging::error!("Failed to load sample tours: {}", err);
        TourCatalog::default()
    })
});

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Tour data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate tour id: {0}")]
    DuplicateId(String),

    #[error("Invalid tour {id}: {reason}")]
    InvalidTour { id: String, reason: &'static str },
}

/// Ordered, validated list of tours
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TourCatalog {
    tours: Vec<Tour>,
}

impl TourCatalog {
    /// The embedded sample catalog. Empty if the embedded data is broken.
    pub fn builtin() -> &'static TourCatalog {
        &BUILTIN
    }

    pub fn new(tours: Vec<Tour>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(tours.len());
        for tour in &tours {
            validate(tour)?;
            if !seen.insert(tour.id.as_str()) {
                return Err(CatalogError::DuplicateId(tour.id.clone()));
            }
        }
        Ok(Self { tours })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let tours: Vec<Tour> = serde_json::from_str(json)?;
        Self::new(tours)
    }

    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// The first `limit` tours, in catalog order
    pub fn featured(&self, limit: usize) -> &[Tour] {
        &self.tours[..limit.min(self.tours.len())]
    }

    /// Whether tours exist beyond the first `limit`
    pub fn has_more_than(&self, limit: usize) -> bool {
        self.tours.len() > limit
    }

    pub fn get(&self, id: &str) -> Option<&Tour> {
        self.tours.iter().find(|t| t.id == id)
    }
}

fn validate(tour: &Tour) -> Result<(), CatalogError> {
    let invalid = |reason| CatalogError::InvalidTour {
        id: tour.id.clone(),
        reason,
    };

    if tour.id.trim().is_empty() {
        return Err(invalid("id is empty"));
    }
    if tour.title.trim().is_empty() {
        return Err(invalid("title is empty"));
    }
    if tour.destination.trim().is_empty() {
        return Err(invalid("destination is empty"));
    }
    if tour.duration_days == 0 {
        return Err(invalid("duration must be at least one day"));
    }
    if tour.price_per_person == 0 {
        return Err(invalid("price must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tours(n: usize) -> Vec<Tour> {
        (0..n)
            .map(|i| Tour::new(format!("tour-{i}"), format!("Tour {i}"), "Kathmandu"))
            .collect()
    }

    #[test]
    fn test_featured_takes_first_entries_in_order() {
        let catalog = TourCatalog::new(tours(5)).unwrap();
        let featured = catalog.featured(3);

        assert_eq!(featured.len(), 3);
        assert_eq!(featured[0].id, "tour-0");
        assert_eq!(featured[2].id, "tour-2");
        assert!(catalog.has_more_than(3));
    }

    #[test]
    fn test_featured_with_short_list() {
        let catalog = TourCatalog::new(tours(2)).unwrap();

        assert_eq!(catalog.featured(3).len(), 2);
        assert!(!catalog.has_more_than(3));
    }

    #[test]
    fn test_exactly_three_tours_has_no_more() {
        let catalog = TourCatalog::new(tours(3)).unwrap();

        assert_eq!(catalog.featured(3).len(), 3);
        assert!(!catalog.has_more_than(3));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = TourCatalog::default();

        assert!(catalog.is_empty());
        assert!(catalog.featured(3).is_empty());
        assert!(!catalog.has_more_than(0));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = TourCatalog::new(tours(3)).unwrap();

        assert_eq!(catalog.get("tour-1").map(|t| t.title.as_str()), Some("Tour 1"));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut list = tours(2);
        list.push(Tour::new("tour-0", "Again", "Pokhara"));

        let err = TourCatalog::new(list).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "tour-0"));
    }

    #[test]
    fn test_invalid_tours_rejected() {
        let cases = [
            Tour::new("a", "", "Pokhara"),
            Tour::new("b", "Title", "  "),
            Tour::new("c", "Title", "Pokhara").with_duration(0),
            Tour::new("d", "Title", "Pokhara").with_price(0),
            Tour::new("", "Title", "Pokhara"),
        ];

        for tour in cases {
            let err = TourCatalog::new(vec![tour]).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidTour { .. }));
        }
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        let err = TourCatalog::from_json("[{\"_id\": 1}]").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().starts_with("Tour data is not valid JSON"));
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = TourCatalog::builtin();

        assert!(!catalog.is_empty());
        assert!(catalog.has_more_than(3));
        assert_eq!(catalog, &TourCatalog::from_json(SAMPLE_TOURS).unwrap());
    }
}
