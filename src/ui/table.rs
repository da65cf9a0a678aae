use crate::adapter::LanguageRegistry;
use crate::classify::NodeCategory;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct LanguageRow {
    #[tabled(rename = "Id")]
    pub id: String,
    #[tabled(rename = "Language")]
    pub name: String,
    #[tabled(rename = "Extensions")]
    pub extensions: String,
    #[tabled(rename = "Table entries")]
    pub entries: usize,
    #[tabled(rename = "Categories")]
    pub categories: String,
}

pub fn language_rows(registry: &LanguageRegistry) -> Vec<LanguageRow> {
    registry
        .adapters()
        .iter()
        .map(|adapter| {
            let classifier = adapter.classifier();
            let categories: Vec<&str> = NodeCategory::all()
                .iter()
                .filter(|c| !classifier.category_kinds(**c).is_empty())
                .map(|c| c.as_str())
                .collect();
            LanguageRow {
                id: adapter.language_id().to_string(),
                name: adapter.language_name().to_string(),
                extensions: adapter
                    .file_extensions()
                    .iter()
                    .map(|e| format!(".{}", e))
                    .collect::<Vec<_>>()
                    .join(" "),
                entries: classifier.len(),
                categories: categories.join(", "),
            }
        })
        .collect()
}

pub fn languages_table(registry: &LanguageRegistry) -> String {
    let rows = language_rows(registry);
    if rows.is_empty() {
        return String::new();
    }
    Table::new(&rows).with(Style::rounded()).to_string()
}
