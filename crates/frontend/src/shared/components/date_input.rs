use crate::shared::date_utils::{format_date_safe, parse_local_date_string};
use chrono::NaiveDate;
use leptos::prelude::*;

/// Native date picker bound to a local calendar date.
/// The browser shows the date in its locale format; the value stays `yyyy-mm-dd`.
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<Option<NaiveDate>>,
    /// Receives `None` when the field is cleared or holds an invalid date
    on_change: impl Fn(Option<NaiveDate>) + 'static,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let text = move || value.get().map(format_date_safe).unwrap_or_default();
    let class = move || format!("date-input {}", class.get().unwrap_or_default());

    view! {
        <input
            type="date"
            class=class
            prop:value=text
            on:input=move |ev| {
                let raw = event_target_value(&ev);
                let date = if raw.is_empty() { None } else { parse_local_date_string(&raw) };
                on_change(date);
            }
        />
    }
}
