use site_kit_core::StatsSection;

use super::stat_items;

pub fn render(stats: &StatsSection) -> String {
    format!(
        r#"<section class="stats">
    <div class="container stat-grid">{}</div>
</section>"#,
        stat_items(&stats.stats)
    )
}
