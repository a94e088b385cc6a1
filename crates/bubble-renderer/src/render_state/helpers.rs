use bubble_common::types::Color;
use bubble_config::colors::parse_color_or;

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

/// Linear clear color for a configured background string.
pub(crate) fn clear_color(background: &str) -> wgpu::Color {
    let [r, g, b, a] =
        parse_color_or(background, Color::from_rgba(255, 255, 255, 255)).to_linear_rgba();
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}
