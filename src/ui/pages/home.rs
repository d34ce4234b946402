//! Home page: hero banner and the top destinations

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::assets;
use crate::ui::navbar::Navbar;
use crate::ui::top_destination::TopDestination;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Go Nepal - Himalayan tours and treks" />
        <Meta
            name="description"
            content="Treks, safaris and cultural tours across Nepal, led by local guides."
        />

        <Navbar />

        <main>
            <section class="relative flex min-h-[80vh] items-center justify-center overflow-hidden bg-slate-900">
                <img
                    src=assets::HERO_IMAGE
                    alt="Prayer flags in front of the Himalayas"
                    class="absolute inset-0 h-full w-full object-cover opacity-70"
                />
                <div class="absolute inset-0 bg-gradient-to-b from-amber-50/60 via-transparent to-slate-900/60"></div>

                <div class="relative z-10 mx-auto max-w-3xl px-4 pt-24 text-center">
                    <p class="text-sm font-semibold uppercase tracking-widest text-amber-300">
                        "Namaste, traveller"
                    </p>
                    <h1 class="mt-4 text-4xl font-bold text-white sm:text-5xl lg:text-6xl">
                        "Discover the roof of the world"
                    </h1>
                    <p class="mt-6 text-lg text-slate-100">
                        "From Everest's shadow to the jungles of Chitwan, find the journey that fits you."
                    </p>
                    <div class="mt-10 flex justify-center">
                        <A
                            href="/destinations"
                            attr:class="rounded-full bg-amber-500 px-8 py-3 text-base font-semibold text-white shadow-lg hover:bg-amber-600 transition-colors"
                        >
                            "Browse tours"
                        </A>
                    </div>
                </div>
            </section>

            <TopDestination />
        </main>
    }
}
