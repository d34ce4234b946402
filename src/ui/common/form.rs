use crate::core::auth::password_input_type;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

const INPUT_BASE: &str = "flex w-full border px-3 py-1 text-sm shadow-sm outline-none \
                          focus-visible:ring-2 disabled:cursor-not-allowed disabled:opacity-50";

/// Look of an input: solid on the white modal, translucent on the photo background
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FieldTheme {
    Light,
    Glass,
}

impl FieldTheme {
    fn input_class(&self, trailing_button: bool) -> String {
        let (theme, right_pad) = match self {
            FieldTheme::Light => (
                "pl-9 h-11 rounded-md bg-slate-50 border-slate-200 text-slate-900 focus-visible:ring-amber-500",
                "pr-9",
            ),
            FieldTheme::Glass => (
                "pl-10 h-12 rounded-xl bg-white/5 border-white/10 text-white placeholder:text-slate-400 \
                 focus-visible:ring-amber-400 focus-visible:border-amber-400 transition-all",
                "pr-10",
            ),
        };
        if trailing_button {
            format!("{} {} {}", INPUT_BASE, theme, right_pad)
        } else {
            format!("{} {}", INPUT_BASE, theme)
        }
    }

    fn icon_wrapper_class(&self) -> &'static str {
        match self {
            FieldTheme::Light => {
                "pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 text-slate-400"
            }
            FieldTheme::Glass => {
                "pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 text-slate-400 \
                 group-focus-within:text-amber-400 transition-colors"
            }
        }
    }

    fn icon_size(&self) -> &'static str {
        match self {
            FieldTheme::Light => "w-4 h-4",
            FieldTheme::Glass => "h-5 w-5",
        }
    }

    fn toggle_class(&self) -> &'static str {
        match self {
            FieldTheme::Light => {
                "absolute right-3 top-1/2 -translate-y-1/2 text-slate-400 hover:text-slate-600"
            }
            FieldTheme::Glass => {
                "absolute right-3 top-1/2 -translate-y-1/2 text-slate-400 hover:text-white transition-colors"
            }
        }
    }
}

/// Required input with a leading icon, bound to a string signal
#[component]
pub fn IconInput(
    /// Leading icon name
    icon: &'static str,
    /// Bound value
    value: RwSignal<String>,
    /// Input type (text, email, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Element id for a matching `<label for=...>`
    #[prop(optional)]
    id: Option<&'static str>,
    /// Autocomplete hint
    #[prop(optional)]
    autocomplete: Option<&'static str>,
    #[prop(default = FieldTheme::Light)]
    theme: FieldTheme,
) -> impl IntoView {
    view! {
        <div class="relative group">
            <span class=theme.icon_wrapper_class()>
                <Icon name=icon class=theme.icon_size() />
            </span>
            <input
                type=input_type
                id=id
                name=id
                autocomplete=autocomplete
                placeholder=placeholder
                required=true
                class=theme.input_class(false)
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Required password input with a show/hide toggle
#[component]
pub fn PasswordInput(
    /// Bound value
    value: RwSignal<String>,
    /// Whether the password is shown in clear text
    show_password: RwSignal<bool>,
    /// Element id for a matching `<label for=...>`
    #[prop(optional)]
    id: Option<&'static str>,
    /// Autocomplete hint
    #[prop(default = "current-password")]
    autocomplete: &'static str,
    #[prop(default = FieldTheme::Light)]
    theme: FieldTheme,
) -> impl IntoView {
    view! {
        <div class="relative group">
            <span class=theme.icon_wrapper_class()>
                <Icon name=icons::LOCK class=theme.icon_size() />
            </span>
            <input
                type=move || password_input_type(show_password.get())
                id=id
                name=id
                autocomplete=autocomplete
                placeholder="••••••••"
                required=true
                class=theme.input_class(true)
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                type="button"
                class=theme.toggle_class()
                aria-label=move || if show_password.get() { "Hide password" } else { "Show password" }
                on:click=move |_| show_password.update(|v| *v = !*v)
            >
                {move || {
                    if show_password.get() {
                        view! { <Icon name=icons::EYE_OFF class=theme.icon_size() /> }.into_any()
                    } else {
                        view! { <Icon name=icons::EYE class=theme.icon_size() /> }.into_any()
                    }
                }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_inputs_leave_room_for_toggle() {
        assert!(FieldTheme::Light.input_class(true).ends_with("pr-9"));
        assert!(FieldTheme::Glass.input_class(true).ends_with("pr-10"));
        assert!(!FieldTheme::Light.input_class(false).contains("pr-9"));
    }

    #[test]
    fn test_glass_theme_highlights_icon_on_focus() {
        assert!(FieldTheme::Glass.icon_wrapper_class().contains("group-focus-within:text-amber-400"));
        assert!(!FieldTheme::Light.icon_wrapper_class().contains("group-focus-within"));
    }
}
