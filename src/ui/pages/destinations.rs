//! Listing of every tour in the catalog

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::TourCatalog;
use crate::ui::navbar::Navbar;
use crate::ui::top_destination::TourGrid;

#[component]
pub fn DestinationsPage() -> impl IntoView {
    let catalog = TourCatalog::builtin();

    view! {
        <Title text="Destinations - Go Nepal" />

        <Navbar />

        <main class="min-h-screen bg-[#FAFAF9] pt-32 pb-20 text-slate-900">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="mb-12">
                    <h1 class="text-3xl md:text-4xl lg:text-5xl font-bold mb-4">
                        "All " <span class="text-amber-600">"Destinations"</span>
                    </h1>
                    <p class="text-lg text-slate-600">
                        {format!("{} tours across Nepal, from gentle lakeside stays to high passes.", catalog.len())}
                    </p>
                </div>

                <TourGrid tours=catalog.tours() />
            </div>
        </main>
    }
}
