//! Sign-in / sign-up modal
//!
//! One dialog with two views. Submitting either form waits a fixed delay,
//! alerts success and closes the dialog. No request is made.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::AuthView;
use crate::core::assets;
use crate::core::auth::MODAL_SUBMIT_DELAY;
use crate::ui::common::{FieldTheme, IconInput, InlineSpinner, OrDivider, PasswordInput, SocialButtons};
use crate::ui::dom::{notify, simulate_round_trip, use_body_scroll_lock, use_escape_key};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn AuthModal(
    /// Whether the modal is shown
    #[prop(into)]
    is_open: Signal<bool>,
    /// Called on backdrop click, close button, Escape and after a submit
    on_close: Callback<()>,
    /// View shown each time the modal opens
    #[prop(into, default = Signal::stored(AuthView::Login))]
    initial_view: Signal<AuthView>,
) -> impl IntoView {
    let view_mode = RwSignal::new(initial_view.get_untracked());
    let show_password = RwSignal::new(false);
    let is_loading = RwSignal::new(false);

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Every opening starts from the requested view with the password hidden
    Effect::new(move |_| {
        if is_open.get() {
            view_mode.set(initial_view.get());
            show_password.set(false);
        }
    });

    use_body_scroll_lock(is_open);
    use_escape_key(is_open, on_close);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        is_loading.set(true);

        let submitted = view_mode.get_untracked();
        spawn_local(async move {
            simulate_round_trip(MODAL_SUBMIT_DELAY).await;
            // Modal unmounted while waiting
            if is_loading.try_set(false).is_some() {
                return;
            }
            notify(submitted.success_message());
            on_close.run(());
        });
    };

    view! {
        <Show when=move || is_open.get()>
            // Backdrop
            <div
                class="fixed inset-0 z-[60] bg-black/60 backdrop-blur-sm animate-fade-in"
                on:click=move |_| on_close.run(())
            ></div>

            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4 pointer-events-none">
                <div
                    class="relative w-full max-w-[850px] bg-white rounded-3xl shadow-2xl overflow-hidden pointer-events-auto flex flex-col md:flex-row min-h-[550px] animate-pop-in"
                    role="dialog"
                    aria-modal="true"
                    aria-label=move || view_mode.get().form_title()
                >
                    <button
                        type="button"
                        class="absolute top-4 right-4 z-20 p-2 bg-black/10 hover:bg-black/20 text-slate-900 rounded-full transition-colors"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        <Icon name=icons::X class="w-5 h-5" />
                    </button>

                    <WelcomePanel view_mode=view_mode />

                    // Form side
                    <div class="flex-1 p-8 md:p-10 bg-white flex flex-col justify-center">
                        <div class="max-w-xs mx-auto w-full space-y-8">
                            <div class="text-center md:text-left">
                                <h3 class="text-2xl font-bold text-slate-900">
                                    {move || view_mode.get().form_title()}
                                </h3>
                                <p class="text-slate-500 mt-2 text-sm">
                                    {move || view_mode.get().form_subtitle()}
                                </p>
                            </div>

                            <form on:submit=on_submit class="space-y-4">
                                <Show when=move || view_mode.get().is_signup()>
                                    <div class="space-y-1">
                                        <label for="auth-name" class="text-xs font-semibold text-slate-700 ml-1">
                                            "Full Name"
                                        </label>
                                        <IconInput
                                            icon=icons::USER
                                            value=full_name
                                            id="auth-name"
                                            autocomplete="name"
                                            placeholder="John Doe"
                                        />
                                    </div>
                                </Show>

                                <div class="space-y-1">
                                    <label for="auth-email" class="text-xs font-semibold text-slate-700 ml-1">
                                        "Email"
                                    </label>
                                    <IconInput
                                        icon=icons::MAIL
                                        value=email
                                        input_type="email"
                                        id="auth-email"
                                        autocomplete="email"
                                        placeholder="you@example.com"
                                    />
                                </div>

                                <div class="space-y-1">
                                    <div class="flex justify-between items-center ml-1">
                                        <label for="auth-password" class="text-xs font-semibold text-slate-700">
                                            "Password"
                                        </label>
                                        <Show when=move || !view_mode.get().is_signup()>
                                            <button
                                                type="button"
                                                class="text-xs text-amber-600 hover:text-amber-700 font-medium"
                                            >
                                                "Forgot?"
                                            </button>
                                        </Show>
                                    </div>
                                    <PasswordInput
                                        value=password
                                        show_password=show_password
                                        id="auth-password"
                                        theme=FieldTheme::Light
                                    />
                                </div>

                                <button
                                    type="submit"
                                    class="w-full h-11 mt-2 inline-flex items-center justify-center bg-slate-900 hover:bg-slate-800 text-white font-semibold rounded-xl text-base transition-colors disabled:opacity-60 disabled:cursor-not-allowed"
                                    disabled=move || is_loading.get()
                                >
                                    {move || {
                                        if is_loading.get() {
                                            view! { <InlineSpinner class="w-5 h-5" /> }.into_any()
                                        } else {
                                            view! { <span>{view_mode.get().submit_label()}</span> }.into_any()
                                        }
                                    }}
                                </button>
                            </form>

                            <OrDivider />
                            <SocialButtons />

                            <p class="text-center text-sm text-slate-500">
                                {move || view_mode.get().footer_prompt()}
                                " "
                                <button
                                    type="button"
                                    class="text-amber-600 font-bold hover:text-amber-700 hover:underline"
                                    on:click=move |_| view_mode.update(|v| *v = v.toggled())
                                >
                                    {move || view_mode.get().footer_action()}
                                </button>
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Photo side of the modal, hidden on small screens
#[component]
fn WelcomePanel(view_mode: RwSignal<AuthView>) -> impl IntoView {
    view! {
        <div class="hidden md:flex flex-1 relative bg-slate-900 text-white flex-col justify-between p-10 overflow-hidden">
            <div class="absolute inset-0 z-0">
                <img src=assets::LOGIN_BACKGROUND alt="Himalayas" class="absolute inset-0 h-full w-full object-cover opacity-60" />
                <div class="absolute inset-0 bg-gradient-to-b from-slate-900/40 to-slate-900/90"></div>
            </div>

            <div class="relative z-10">
                <img src="/gonepal.svg" alt="Go Nepal" width="120" height="40" class="brightness-0 invert mb-6" />
                <h2 class="text-3xl font-bold leading-tight mb-4">
                    {move || view_mode.get().panel_heading()}
                </h2>
                <p class="text-slate-200/90 leading-relaxed">
                    {move || view_mode.get().panel_blurb()}
                </p>
            </div>

            <div class="relative z-10 space-y-4">
                <Perk text="Best Rate Guarantee" />
                <Perk text="Expert Local Guides" />
            </div>
        </div>
    }
}

#[component]
fn Perk(text: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 text-sm text-slate-300">
            <div class="w-8 h-8 rounded-full bg-amber-500/20 flex items-center justify-center text-amber-500">
                <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
            </div>
            <span>{text}</span>
        </div>
    }
}
