use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Spinning loader for buttons
#[component]
pub fn InlineSpinner(
    /// Size and spacing classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span class="inline-flex animate-spin" role="status" aria-live="polite">
            <Icon name=icons::LOADER class=class />
            <span class="sr-only">"Loading..."</span>
        </span>
    }
}
