use super::views::PackingDocument;
use crate::packing::catalog::SHOP_URL;

const RULE_WIDTH: usize = 60;

/// Console report with an unchecked box in front of every item.
pub fn render_text(document: &PackingDocument) -> String {
    let heavy_rule = "=".repeat(RULE_WIDTH);
    let light_rule = "-".repeat(RULE_WIDTH);
    let info = &document.trip_info;
    let pack = &document.recommended_pack;

    let mut lines = vec![
        String::new(),
        heavy_rule.clone(),
        "DIGITAL NOMAD PACKING LIST".to_string(),
        heavy_rule.clone(),
        String::new(),
        "Trip Details:".to_string(),
        format!("   Type: {}", info.trip_type.as_str().to_uppercase()),
        format!("   Duration: {}", info.duration),
        format!(
            "   Work Intensity: {}",
            info.work_intensity.as_str().to_uppercase()
        ),
        format!("   Generated: {}", info.generated_at),
        String::new(),
        "Recommended Base Pack:".to_string(),
        format!("   {} ({})", pack.pack, pack.capacity),
        format!("   {}", pack.url),
        String::new(),
        "Required Modules:".to_string(),
    ];

    for module in &document.modules {
        lines.push(format!("   ✓ {module}"));
    }

    lines.push(String::new());
    lines.push(format!("Packing List ({} items):", document.total_items));
    lines.push(light_rule);

    for category in &document.items {
        lines.push(String::new());
        lines.push(format!("{}:", category.name));
        for item in &category.items {
            lines.push(format!("   [ ] {item}"));
        }
    }

    lines.push(String::new());
    lines.push(heavy_rule.clone());
    lines.push("Tip: Check off items as you pack them!".to_string());
    lines.push(format!("Shop FIKA CARRY: {SHOP_URL}"));
    lines.push(heavy_rule);
    lines.push(String::new());

    lines.join("\n")
}
