use crate::shared::api_utils::stored_color_config;
use crate::shared::category_color::badge_policy;
use crate::shared::components::ui::CategoryBadge;
use crate::shared::data_source::{ClubDataSource, RestDataSource};
use contracts::enums::export_table::ExportTable;
use contracts::shared::table_data::Record;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct CategoriaRow {
    pub id: String,
    pub nombre: String,
}

impl From<&Record> for CategoriaRow {
    fn from(record: &Record) -> Self {
        let text = |field: &str| match record.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        Self {
            id: text("id"),
            nombre: text("nombre"),
        }
    }
}

/// Club categories, each shown with its badge color
#[component]
#[allow(non_snake_case)]
pub fn CategoriaList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<CategoriaRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let config = stored_color_config();

    spawn_local(async move {
        let source = RestDataSource::from_config();
        match source.fetch(ExportTable::Categorias).await.into_result() {
            Ok(rows) => {
                set_items.set(rows.iter().map(CategoriaRow::from).collect());
                set_error.set(None);
            }
            Err(e) => {
                log::warn!("Failed to load categories: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    });

    let rows = move || {
        items
            .get()
            .into_iter()
            .map(|row| {
                let policy = badge_policy(&row.nombre, config.as_ref());
                view! {
                    <li data-id=row.id>
                        <CategoryBadge label=row.nombre policy=policy config=config.clone() />
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <section id="a101_categoria--list" class="list-panel">
            <h2>"Categorías"</h2>
            {move || error.get().map(|e| view! { <p class="list-panel__error">{e}</p> })}
            <ul class="category-list">{rows}</ul>
        </section>
    }
}
