#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::core::assets::{HERO_IMAGE, LOGIN_BACKGROUND};
    use crate::core::nav::{NavbarStyle, is_scrolled};
    use crate::core::{Difficulty, TourCatalog};

    fn shipped(url: &str) -> bool {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(url.trim_start_matches('/'))
            .is_file()
    }

    #[test]
    fn test_sample_catalog_featured_tours() {
        let catalog = TourCatalog::builtin();
        let ids: Vec<_> = catalog.featured(3).iter().map(|t| t.id.as_str()).collect();

        assert_eq!(ids, ["everest-base-camp", "annapurna-circuit", "chitwan-safari"]);
        assert_eq!(catalog.len(), 6);
        assert!(catalog.has_more_than(3));
    }

    #[test]
    fn test_sample_tours_have_cover_images() {
        for tour in TourCatalog::builtin().tours() {
            assert!(tour.cover_image().is_some(), "{} has no image", tour.id);
            assert!(!tour.highlights.is_empty(), "{} has no highlights", tour.id);
        }
    }

    #[test]
    fn test_referenced_images_are_shipped() {
        for url in [HERO_IMAGE, LOGIN_BACKGROUND, "/linearBg.svg", "/gonepal.svg"] {
            assert!(shipped(url), "{url} missing from public/");
        }
        for tour in TourCatalog::builtin().tours() {
            for url in &tour.images {
                assert!(shipped(url), "{} image {url} missing from public/", tour.id);
            }
        }
    }

    #[test]
    fn test_sample_includes_sold_out_tour() {
        let mustang = TourCatalog::builtin().get("upper-mustang").unwrap();

        assert!(!mustang.is_available);
        assert_eq!(mustang.difficulty, Difficulty::Strenuous);
        assert_eq!(mustang.formatted_price(), "$2,150");
        assert!(mustang.description.is_some());
    }

    #[test]
    fn test_navbar_style_from_scroll_offset() {
        assert_eq!(NavbarStyle::for_scroll(is_scrolled(0.0)), NavbarStyle::for_scroll(false));
        assert_eq!(NavbarStyle::for_scroll(is_scrolled(11.0)), NavbarStyle::for_scroll(true));
    }
}
