use eframe::egui::Color32;

/// Parse an HTML color (`#28a745`, `goldenrod`, ...) into an egui color.
/// Falls back to gray so a typo in config never takes the UI down.
pub fn html_to_color32(html: &str) -> Color32 {
    match colorgrad::Color::from_html(html) {
        Ok(color) => to_egui_color(color),
        Err(e) => {
            log::warn!("Unparsable color '{}': {}", html, e);
            Color32::GRAY
        }
    }
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], rgba8[3])
}
