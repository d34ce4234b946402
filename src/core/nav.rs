//! Navigation bar model: links, scroll threshold and the class sets that
//! depend on the scroll position and the drawer state.

/// Vertical scroll offset (px) past which the navbar switches to its solid style
pub const SCROLL_THRESHOLD: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { name: "Home", path: "/" },
    NavLink { name: "Destinations", path: "/destinations" },
    NavLink { name: "Tours", path: "/tours" },
    NavLink { name: "About", path: "/about" },
    NavLink { name: "Contact", path: "/contact" },
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Classes for every navbar element whose look follows the scroll position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub bar: &'static str,
    pub link: &'static str,
    pub underline: &'static str,
    pub explore_button: &'static str,
    pub login_button: &'static str,
    pub open_icon: &'static str,
    pub close_icon: &'static str,
}

impl NavbarStyle {
    pub fn for_scroll(scrolled: bool) -> Self {
        if scrolled {
            Self {
                bar: "bg-amber-50 text-slate-900 shadow-lg backdrop-blur-lg",
                link: "text-slate-800",
                underline: "bg-slate-800",
                explore_button: "bg-white text-slate-900",
                login_button: "bg-slate-900 text-white",
                open_icon: "text-slate-900",
                close_icon: "text-slate-900",
            }
        } else {
            Self {
                bar: "bg-transparent text-white",
                link: "text-black",
                underline: "bg-white",
                explore_button: "bg-amber-50 text-black",
                login_button: "bg-amber-50 text-slate-900",
                open_icon: "text-black",
                close_icon: "text-white",
            }
        }
    }
}

/// Open/closed state of the mobile drawer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    /// State after pressing the menu button
    pub fn toggled(self) -> Self {
        match self {
            DrawerState::Closed => DrawerState::Open,
            DrawerState::Open => DrawerState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == DrawerState::Open
    }

    /// Overlay behind the drawer
    pub fn overlay_class(self) -> &'static str {
        match self {
            DrawerState::Open => {
                "md:hidden fixed inset-0 bg-slate-900/40 backdrop-blur-sm transition-opacity duration-300 opacity-100"
            }
            DrawerState::Closed => {
                "md:hidden fixed inset-0 bg-slate-900/40 backdrop-blur-sm transition-opacity duration-300 pointer-events-none opacity-0"
            }
        }
    }

    /// The slide-in drawer itself
    pub fn drawer_class(self) -> &'static str {
        match self {
            DrawerState::Open => {
                "md:hidden fixed inset-y-0 left-0 flex w-5/6 max-w-sm flex-col bg-white text-slate-900 shadow-2xl transition-transform duration-500 translate-x-0"
            }
            DrawerState::Closed => {
                "md:hidden fixed inset-y-0 left-0 flex w-5/6 max-w-sm flex-col bg-white text-slate-900 shadow-2xl transition-transform duration-500 -translate-x-full"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
        assert!(is_scrolled(400.0));
    }

    #[test]
    fn test_nav_links_order() {
        let names: Vec<_> = NAV_LINKS.iter().map(|l| l.name).collect();
        assert_eq!(names, ["Home", "Destinations", "Tours", "About", "Contact"]);
        assert_eq!(NAV_LINKS[0].path, "/");
        assert!(NAV_LINKS.iter().all(|l| l.path.starts_with('/')));
    }

    #[test]
    fn test_style_follows_scroll_flag() {
        let top = NavbarStyle::for_scroll(false);
        let scrolled = NavbarStyle::for_scroll(true);

        assert!(top.bar.contains("bg-transparent"));
        assert!(scrolled.bar.contains("bg-amber-50"));
        assert!(scrolled.bar.contains("shadow-lg"));
        assert_eq!(scrolled.login_button, "bg-slate-900 text-white");
        assert_ne!(top, scrolled);
    }

    #[test]
    fn test_drawer_classes_follow_state() {
        assert!(DrawerState::Open.drawer_class().contains("translate-x-0"));
        assert!(DrawerState::Closed.drawer_class().contains("-translate-x-full"));
        assert!(DrawerState::Open.overlay_class().contains("opacity-100"));
        assert!(DrawerState::Closed.overlay_class().contains("pointer-events-none"));
    }

    #[test]
    fn test_menu_toggle_flips_drawer() {
        let closed = DrawerState::default();
        assert_eq!(closed, DrawerState::Closed);
        assert!(!closed.is_open());

        let open = closed.toggled();
        assert_eq!(open, DrawerState::Open);
        assert!(open.is_open());

        assert_eq!(open.toggled(), DrawerState::Closed);
    }
}
