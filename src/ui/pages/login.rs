//! Login page component
//!
//! A standalone sign-in card over a mountain photo. Submitting waits a fixed
//! delay and shows an alert; no credentials leave the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::assets;
use crate::core::auth::{LOGIN_PAGE_MESSAGE, LOGIN_PAGE_SUBMIT_DELAY};
use crate::ui::common::{FieldTheme, IconInput, InlineSpinner, OrDivider, PasswordInput, SocialButtons};
use crate::ui::dom::{notify, simulate_round_trip};
use crate::ui::icon::{Icon, icons};
use crate::ui::navbar::Navbar;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        is_loading.set(true);

        spawn_local(async move {
            simulate_round_trip(LOGIN_PAGE_SUBMIT_DELAY).await;
            // Page left while waiting
            if is_loading.try_set(false).is_some() {
                return;
            }
            notify(LOGIN_PAGE_MESSAGE);
        });
    };

    view! {
        <Title text="Sign in - Go Nepal" />

        <Navbar />

        <div class="relative min-h-screen w-full overflow-hidden flex items-center justify-center bg-slate-900">
            // Background
            <div class="absolute inset-0 z-0">
                <img
                    src=assets::LOGIN_BACKGROUND
                    alt="Himalayan Background"
                    class="absolute inset-0 h-full w-full object-cover"
                />
                <div class="absolute inset-0 bg-black/40 backdrop-blur-[2px]"></div>
            </div>

            <div class="relative z-10 w-full max-w-md px-4 pt-24 pb-12 animate-pop-in">
                <div class="overflow-hidden rounded-3xl bg-white/10 backdrop-blur-xl border border-white/20 shadow-2xl">
                    <div class="p-8 md:p-10 space-y-8">
                        // Header
                        <div class="text-center space-y-2">
                            <A href="/" attr:class="inline-block mb-4">
                                <img
                                    src="/gonepal.svg"
                                    alt="Go Nepal"
                                    width="120"
                                    height="40"
                                    class="h-10 w-auto mx-auto brightness-0 invert"
                                />
                            </A>
                            <h1 class="text-3xl font-bold text-white tracking-tight">"Welcome Back"</h1>
                            <p class="text-slate-200 text-sm">"Sign in to continue your adventure"</p>
                        </div>

                        <form on:submit=on_submit class="space-y-6">
                            <div class="space-y-4">
                                <div class="space-y-2">
                                    <label for="email" class="text-sm font-medium text-slate-100 ml-1">
                                        "Email Address"
                                    </label>
                                    <IconInput
                                        icon=icons::MAIL
                                        value=email
                                        input_type="email"
                                        id="email"
                                        autocomplete="email"
                                        placeholder="you@example.com"
                                        theme=FieldTheme::Glass
                                    />
                                </div>

                                <div class="space-y-2">
                                    <div class="flex items-center justify-between ml-1">
                                        <label for="password" class="text-sm font-medium text-slate-100">
                                            "Password"
                                        </label>
                                        <a href="#" class="text-xs text-amber-300 hover:text-amber-200 transition-colors">
                                            "Forgot password?"
                                        </a>
                                    </div>
                                    <PasswordInput
                                        value=password
                                        show_password=show_password
                                        id="password"
                                        theme=FieldTheme::Glass
                                    />
                                </div>
                            </div>

                            <button
                                type="submit"
                                class="w-full h-12 inline-flex items-center justify-center bg-amber-500 hover:bg-amber-600 text-white font-bold rounded-xl text-lg shadow-lg hover:shadow-amber-500/25 transition-all duration-300 disabled:opacity-70 disabled:cursor-not-allowed"
                                disabled=move || is_loading.get()
                            >
                                {move || {
                                    if is_loading.get() {
                                        view! {
                                            <span class="flex items-center justify-center">
                                                <InlineSpinner class="mr-2 h-5 w-5" />
                                                "Signing in..."
                                            </span>
                                        }
                                            .into_any()
                                    } else {
                                        view! { <span class="block">"Sign In"</span> }.into_any()
                                    }
                                }}
                            </button>
                        </form>

                        <div class="space-y-6">
                            <OrDivider theme=FieldTheme::Glass />
                            <SocialButtons theme=FieldTheme::Glass />

                            <p class="text-center text-sm text-slate-300">
                                "Don't have an account? "
                                <a
                                    href="#"
                                    class="text-amber-400 font-semibold hover:text-amber-300 hover:underline transition-all"
                                >
                                    "Sign up now"
                                </a>
                            </p>
                        </div>
                    </div>
                </div>

                <div class="mt-8 text-center">
                    <A
                        href="/"
                        attr:class="inline-flex items-center text-sm text-white/60 hover:text-white transition-colors"
                    >
                        <Icon name=icons::ARROW_LEFT class="mr-2 h-4 w-4" />
                        "Back to Home"
                    </A>
                </div>
            </div>
        </div>
    }
}
