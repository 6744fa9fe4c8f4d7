use crate::domain::a101_categoria::ui::list::CategoriaList;
use crate::usecases::u601_export_all_tables::ExportAllView;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-shell">
            <CategoriaList />
            <ExportAllView />
        </main>
    }
}
