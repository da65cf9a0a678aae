pub struct Icons;

impl Icons {
    pub const TREE: &str = "🌳";
    pub const TARGET: &str = "🎯";
    pub const CHECK: &str = "✅";
    pub const WARN: &str = "⚠️";
    pub const STOP: &str = "⛔";
    pub const CURRENT: &str = "▶";
    pub const BRANCH: &str = "├─";
}
