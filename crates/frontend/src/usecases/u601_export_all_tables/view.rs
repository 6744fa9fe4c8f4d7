use crate::shared::components::date_input::DateInput;
use crate::shared::data_source::RestDataSource;
use crate::shared::date_utils::today_utc;
use crate::shared::export::{export_all_known_tables, BrowserDownload, LogReporter};
use contracts::enums::export_table::ExportTable;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Downloads every club table as CSV
#[component]
pub fn ExportAllView() -> impl IntoView {
    let (is_running, set_is_running) = signal(false);
    let (exported, set_exported) = signal(Option::<Vec<&'static str>>::None);
    // date stamped into the filenames; cleared input means today
    let (file_date, set_file_date) = signal(Some(today_utc()));

    let start_export = move |_| {
        set_is_running.set(true);
        set_exported.set(None);

        let date = file_date.get_untracked().unwrap_or_else(today_utc);

        spawn_local(async move {
            let source = RestDataSource::from_config();
            let labels =
                export_all_known_tables(&source, &BrowserDownload, &LogReporter, date).await;
            set_exported.set(Some(labels));
            set_is_running.set(false);
        });
    };

    let summary = move || {
        exported.get().map(|labels| {
            if labels.is_empty() {
                view! { <p class="export-summary export-summary--empty">"No hay datos para exportar"</p> }
                    .into_any()
            } else {
                view! {
                    <div class="export-summary">
                        <p>{format!("Exportadas {} de {} tablas:", labels.len(), ExportTable::ALL.len())}</p>
                        <ul>
                            {labels.into_iter().map(|label| view! { <li>{label}</li> }).collect_view()}
                        </ul>
                    </div>
                }
                .into_any()
            }
        })
    };

    view! {
        <div id="u601_export_all_tables--usecase" class="usecase-panel">
            <h2>"Exportar datos"</h2>
            <p class="usecase-panel__hint">
                "Descarga un archivo CSV por cada tabla del club."
            </p>
            <label class="usecase-panel__field">
                "Fecha del archivo "
                <DateInput value=file_date on_change=move |date| set_file_date.set(date) />
            </label>
            <button
                class="button button--primary"
                on:click=start_export
                disabled=move || is_running.get()
            >
                {move || if is_running.get() { "Exportando..." } else { "Exportar todo" }}
            </button>
            {summary}
        </div>
    }
}
