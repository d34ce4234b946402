use leptos::prelude::*;

use crate::core::Tour;
use crate::ui::icon::{Icon, icons};

/// Highlights listed on a card before the rest are cut
const CARD_HIGHLIGHTS: usize = 3;

/// Card for a single tour
#[component]
pub fn DestinationCard(tour: &'static Tour) -> impl IntoView {
    let badge = format!(
        "rounded-full px-3 py-1 text-xs font-semibold shadow-sm {}",
        tour.difficulty.badge_class()
    );
    let seasons = tour.seasons_label();

    view! {
        <article class="group flex flex-col overflow-hidden rounded-2xl border border-amber-100 bg-white shadow-sm transition-shadow duration-300 hover:shadow-xl">
            <div class="relative h-56 overflow-hidden bg-slate-200">
                {tour.cover_image().map(|src| view! {
                    <img
                        src=src
                        alt=tour.title.as_str()
                        loading="lazy"
                        class="h-full w-full object-cover transition-transform duration-500 group-hover:scale-105"
                    />
                })}
                <div class="absolute left-4 top-4 flex gap-2">
                    <span class=badge>{tour.difficulty.to_string()}</span>
                    {(!tour.is_available).then(|| view! {
                        <span class="rounded-full bg-slate-900/80 px-3 py-1 text-xs font-semibold text-white">
                            "Sold out"
                        </span>
                    })}
                </div>
            </div>

            <div class="flex flex-1 flex-col gap-4 p-6">
                <div>
                    <h3 class="text-xl font-bold text-slate-900">{tour.title.as_str()}</h3>
                    <p class="mt-1 flex items-center gap-1.5 text-sm text-slate-500">
                        <Icon name=icons::MAP_PIN class="h-4 w-4 text-amber-600" />
                        {tour.destination.as_str()}
                    </p>
                </div>

                <div class="flex flex-wrap gap-x-5 gap-y-2 text-sm text-slate-600">
                    <span class="inline-flex items-center gap-1.5">
                        <Icon name=icons::CLOCK class="h-4 w-4" />
                        {tour.duration_label()}
                    </span>
                    {(!seasons.is_empty()).then(|| view! {
                        <span class="inline-flex items-center gap-1.5">
                            <Icon name=icons::CALENDAR class="h-4 w-4" />
                            {seasons.clone()}
                        </span>
                    })}
                </div>

                <ul class="space-y-1.5 text-sm text-slate-600">
                    {tour
                        .highlights
                        .iter()
                        .take(CARD_HIGHLIGHTS)
                        .map(|h| view! {
                            <li class="flex items-start gap-2">
                                <span class="mt-0.5 text-amber-600">
                                    <Icon name=icons::CHECK class="h-4 w-4" />
                                </span>
                                <span>{h.as_str()}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>

                <div class="mt-auto flex items-end justify-between border-t border-slate-100 pt-4">
                    <div>
                        <p class="text-xs uppercase tracking-wide text-slate-400">"From"</p>
                        <p class="text-2xl font-bold text-slate-900">
                            {tour.formatted_price()}
                            <span class="ml-1 text-sm font-normal text-slate-500">"/ person"</span>
                        </p>
                    </div>
                </div>
            </div>
        </article>
    }
}
