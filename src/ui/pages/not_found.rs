//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found - Go Nepal" />

        <div class="min-h-screen bg-[#FAFAF9] flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-amber-100 rounded-full flex items-center justify-center text-amber-600">
                    <Icon name=icons::MOUNTAIN class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-bold text-slate-900 mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-slate-900 mb-2">
                    "Trail Not Found"
                </h2>

                <p class="text-slate-600 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/"
                        attr:class="px-6 py-3 bg-slate-900 hover:bg-slate-800 text-white font-medium rounded-lg transition-colors"
                    >
                        "Go Home"
                    </A>
                    <A
                        href="/destinations"
                        attr:class="px-6 py-3 border border-slate-300 text-slate-900 hover:bg-white font-medium rounded-lg transition-colors"
                    >
                        "Browse Tours"
                    </A>
                </div>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-slate-400">
                    "© 2025 Go Nepal"
                </p>
            </div>
        </div>
    }
}
