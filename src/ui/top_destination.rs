//! "Top Destinations" section of the home page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::{Tour, TourCatalog};
use crate::ui::destination_card::DestinationCard;

/// Tours shown on the home page before "View All Tours"
pub const FEATURED_TOURS: usize = 3;

#[component]
pub fn TopDestination(
    /// Tours to pick from, the embedded sample catalog by default
    #[prop(default = TourCatalog::builtin())]
    catalog: &'static TourCatalog,
) -> impl IntoView {
    let featured = catalog.featured(FEATURED_TOURS);
    let has_more_tours = catalog.has_more_than(FEATURED_TOURS);

    view! {
        <section class="bg-[#FAFAF9] bg-[url('/linearBg.svg')] bg-cover py-16 md:py-20 text-slate-900">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="text-start mb-12 md:mb-16">
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold text-slate-900 mb-4">
                        "Top " <span class="text-amber-600">"Destinations"</span>
                    </h2>
                    <p class="text-lg text-slate-600">
                        "Discover Nepal's most iconic tours, curated for unforgettable experiences that blend adventure, culture, and natural beauty."
                    </p>
                </div>

                <TourGrid tours=featured />

                {has_more_tours.then(|| view! {
                    <div class="mt-12 pt-8 border-t border-amber-100 text-center">
                        <p class="text-slate-600 mb-4">
                            "Explore all our amazing destinations and tour packages"
                        </p>
                        <A
                            href="/destinations"
                            attr:class="inline-flex items-center justify-center rounded-md px-6 py-3 bg-gradient-to-r from-slate-900 to-slate-700 hover:from-slate-800 hover:to-slate-600 text-white font-semibold shadow-md transition-colors duration-200"
                        >
                            "View All Tours"
                        </A>
                    </div>
                })}
            </div>
        </section>
    }
}

/// Responsive grid of tour cards, or an empty state when there are none
#[component]
pub fn TourGrid(tours: &'static [Tour]) -> impl IntoView {
    if tours.is_empty() {
        return view! {
            <div class="rounded-2xl border border-dashed border-amber-200 bg-white/60 p-10 text-center text-slate-500">
                "No tours are available right now. Please check back soon."
            </div>
        }
        .into_any();
    }

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 lg:gap-8 mb-10">
            {tours.iter().map(|tour| view! { <DestinationCard tour=tour /> }).collect_view()}
        </div>
    }
    .into_any()
}
