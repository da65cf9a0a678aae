pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, header, moved, no_movement, success, tree_line, warn};
pub use table::{language_rows, languages_table, LanguageRow};
pub use theme::{theme, Theme};
