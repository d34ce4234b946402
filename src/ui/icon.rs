use leptos::prelude::*;

/// Inline stroke icon. Colour follows `currentColor`, so wrap it in an
/// element with a text colour class to tint it.
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon_paths(name).iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

pub mod icons {
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const SEARCH: &str = "search";
    pub const MOUNTAIN: &str = "mountain";
    pub const MAIL: &str = "mail";
    pub const LOCK: &str = "lock";
    pub const USER: &str = "user";
    pub const EYE: &str = "eye";
    pub const EYE_OFF: &str = "eye-off";
    pub const LOADER: &str = "loader";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const MAP_PIN: &str = "map-pin";
    pub const CLOCK: &str = "clock";
    pub const CALENDAR: &str = "calendar";
    pub const CHECK: &str = "check";
}

/// SVG path data on a 24x24 grid. Unknown names draw nothing.
pub fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        icons::MENU => &["M4 6h16", "M4 12h16", "M4 18h16"],
        icons::X => &["M18 6 6 18", "m6 6 12 12"],
        icons::SEARCH => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "m21 21-4.3-4.3"],
        icons::MOUNTAIN => &["m8 3 4 8 5-5 5 15H2L8 3z"],
        icons::MAIL => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "m22 6-10 7L2 6",
        ],
        icons::LOCK => &[
            "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
            "M7 11V7a5 5 0 0 1 10 0v4",
        ],
        icons::USER => &[
            "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
            "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
        ],
        icons::EYE => &[
            "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7z",
            "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
        ],
        icons::EYE_OFF => &[
            "M9.88 9.88a3 3 0 1 0 4.24 4.24",
            "M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68",
            "M6.61 6.61A13.53 13.53 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61",
            "m2 2 20 20",
        ],
        icons::LOADER => &["M21 12a9 9 0 1 1-6.22-8.56"],
        icons::ARROW_RIGHT => &["M5 12h14", "m12 5 7 7-7 7"],
        icons::ARROW_LEFT => &["m12 19-7-7 7-7", "M19 12H5"],
        icons::MAP_PIN => &[
            "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
            "M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
        ],
        icons::CLOCK => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 6v6l4 2"],
        icons::CALENDAR => &[
            "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M16 2v4",
            "M8 2v4",
            "M3 10h18",
        ],
        icons::CHECK => &["M20 6 9 17l-5-5"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icons_have_paths() {
        for name in [
            icons::MENU,
            icons::X,
            icons::SEARCH,
            icons::MOUNTAIN,
            icons::MAIL,
            icons::LOCK,
            icons::USER,
            icons::EYE,
            icons::EYE_OFF,
            icons::LOADER,
            icons::ARROW_RIGHT,
            icons::ARROW_LEFT,
            icons::MAP_PIN,
            icons::CLOCK,
            icons::CALENDAR,
            icons::CHECK,
        ] {
            assert!(!icon_paths(name).is_empty(), "missing paths for {name}");
        }
    }

    #[test]
    fn test_unknown_icon_is_empty() {
        assert!(icon_paths("does-not-exist").is_empty());
    }
}
