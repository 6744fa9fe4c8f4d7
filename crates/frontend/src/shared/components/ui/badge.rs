use crate::shared::category_color::{resolve_color, ColorPolicy};
use contracts::shared::category_colors::ClubColorConfig;
use leptos::prelude::*;

/// Category badge colored from its label
#[component]
pub fn CategoryBadge(
    /// Category label; an empty label renders the neutral color
    #[prop(into)]
    label: Signal<String>,
    /// Hash (default), intense hash, keyword rules or club overrides
    #[prop(optional)]
    policy: ColorPolicy,
    /// Club overrides, used by `ColorPolicy::Config`
    #[prop(optional, into)]
    config: MaybeProp<ClubColorConfig>,
) -> impl IntoView {
    let color_class = move || {
        let label = label.get();
        let config = config.get();
        resolve_color(policy, label.as_str(), config.as_ref()).to_string()
    };

    view! {
        <span class=move || format!("badge badge--category {}", color_class())>
            {move || label.get()}
        </span>
    }
}
