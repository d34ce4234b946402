//! Site navigation bar
//!
//! Fixed to the top of the page. Turns solid once the page scrolls past a
//! few pixels, collapses into a slide-in drawer on small screens and owns the
//! auth modal opened by its Login buttons.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::AuthView;
use crate::core::nav::{DrawerState, NAV_LINKS, NavbarStyle};
use crate::ui::auth::AuthModal;
use crate::ui::dom::use_body_scroll_lock;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Navbar() -> impl IntoView {
    let (is_scrolled, set_is_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(DrawerState::Closed);
    let auth_open = RwSignal::new(false);
    let auth_view = RwSignal::new(AuthView::Login);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let read_scroll = move || {
            let y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            set_is_scrolled.set(crate::core::nav::is_scrolled(y));
        };

        // Page may already be scrolled when hydrated
        Effect::new(move |_| read_scroll());

        let handle_scroll = window_event_listener(scroll, move |_| read_scroll());
        on_cleanup(move || drop(handle_scroll));
    }
    #[cfg(feature = "ssr")]
    {
        let _ = set_is_scrolled;
    }

    use_body_scroll_lock(Signal::derive(move || menu_open.get().is_open()));

    let style = Memo::new(move |_| NavbarStyle::for_scroll(is_scrolled.get()));

    let open_login = move || {
        auth_view.set(AuthView::Login);
        auth_open.set(true);
    };
    let close_menu = move || set_menu_open.set(DrawerState::Closed);

    view! {
        <nav class=move || format!("fixed top-0 left-0 w-full z-50 transition-colors {}", style.get().bar)>
            <div class="mx-auto flex max-w-7xl items-center justify-between px-4 py-4 sm:px-6">
                // Logo
                <A href="/" attr:class="flex items-center gap-5">
                    <div class="rounded-full py-2">
                        <img src="/gonepal.svg" alt="Go Nepal logo" width="110" height="32" class="h-10 w-auto" />
                    </div>
                </A>

                // Desktop links
                <div class="hidden md:flex items-center gap-6 lg:gap-8">
                    {NAV_LINKS
                        .into_iter()
                        .map(move |link| {
                            view! {
                                <A
                                    href=link.path
                                    attr:class=move || {
                                        format!(
                                            "group flex flex-col items-center gap-1 text-lg font-medium {}",
                                            style.get().link,
                                        )
                                    }
                                >
                                    {link.name}
                                    <span class=move || {
                                        format!(
                                            "{} h-0.5 w-0 group-hover:w-full rounded-full transition-all",
                                            style.get().underline,
                                        )
                                    }></span>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>

                // Desktop actions
                <div class="hidden md:flex items-center gap-4">
                    <button
                        type="button"
                        class=move || {
                            format!(
                                "flex items-center gap-2 rounded-full border border-gray-400 px-4 py-2 text-sm font-medium transition-colors {}",
                                style.get().explore_button,
                            )
                        }
                    >
                        <Icon name=icons::SEARCH class="h-4 w-4" />
                        "Explore"
                    </button>
                    <button
                        type="button"
                        class=move || {
                            format!(
                                "rounded-full px-5 py-2 text-sm font-medium border border-gray-400 cursor-pointer transition-colors {}",
                                style.get().login_button,
                            )
                        }
                        on:click=move |_| open_login()
                    >
                        "Login"
                    </button>
                </div>

                // Mobile menu button
                <button
                    type="button"
                    class="md:hidden inline-flex items-center justify-center rounded-full p-2 transition hover:bg-white/10"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().is_open().to_string()
                    on:click=move |_| set_menu_open.update(|state| *state = state.toggled())
                >
                    {move || {
                        if menu_open.get().is_open() {
                            view! {
                                <span class=style.get().close_icon>
                                    <Icon name=icons::X class="h-6 w-6" />
                                </span>
                            }
                                .into_any()
                        } else {
                            view! {
                                <span class=style.get().open_icon>
                                    <Icon name=icons::MENU class="h-6 w-6" />
                                </span>
                            }
                                .into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile overlay
            <div
                class=move || menu_open.get().overlay_class()
                on:click=move |_| close_menu()
            ></div>

            // Mobile drawer
            <div class=move || menu_open.get().drawer_class() aria-hidden=move || (!menu_open.get().is_open()).to_string()>
                <div class="flex items-center justify-between px-5 py-4 shadow-sm bg-gradient-to-r from-white via-amber-50 to-orange-50">
                    <A href="/" attr:class="flex items-center gap-3" on:click=move |_| close_menu()>
                        <img src="/gonepal.svg" alt="Go Nepal" width="110" height="32" class="h-8 w-auto" />
                    </A>
                    <button type="button" aria-label="Close menu" on:click=move |_| close_menu()>
                        <Icon name=icons::X class="h-6 w-6" />
                    </button>
                </div>

                <div class="flex-1 space-y-5 px-6 py-8">
                    <div class="rounded-2xl bg-gradient-to-r from-orange-100 via-amber-50 to-white p-4 shadow-sm">
                        <p class="text-xs font-semibold text-amber-700 uppercase tracking-wide">
                            "Plan your trip"
                        </p>
                        <p class="text-base font-semibold text-slate-900 mt-1">
                            "Find epic Himalayan escapes tailored for you."
                        </p>
                    </div>

                    {NAV_LINKS
                        .into_iter()
                        .map(move |link| {
                            view! {
                                <A
                                    href=link.path
                                    attr:class="block text-lg font-semibold text-slate-900"
                                    on:click=move |_| close_menu()
                                >
                                    {link.name}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex flex-col gap-3 px-6 pb-8">
                    <button
                        type="button"
                        class="inline-flex items-center justify-between gap-2 rounded-2xl border border-slate-200 px-4 py-3 text-sm font-semibold shadow-sm hover:-translate-y-0.5 hover:shadow-md transition-transform"
                    >
                        <span class="inline-flex items-center gap-2">
                            <Icon name=icons::MOUNTAIN class="h-4 w-4" />
                            "Explore trips"
                        </span>
                        <span class="text-xs text-slate-500">"New"</span>
                    </button>
                    <button
                        type="button"
                        class="rounded-2xl bg-slate-900 px-5 py-3 text-sm font-semibold text-white shadow-sm hover:bg-slate-800 transition-colors text-center cursor-pointer"
                        on:click=move |_| {
                            close_menu();
                            open_login();
                        }
                    >
                        "Login"
                    </button>
                </div>
            </div>

            <AuthModal
                is_open=auth_open
                on_close=Callback::new(move |_| auth_open.set(false))
                initial_view=auth_view
            />
        </nav>
    }
}
