//! Utility functions for rendering UI components

use ratatui::{layout::Rect, style::Color};

use crate::model::MIN_INTENSITY;

/// Grey level for a report row. Terminals have no opacity, so a brighter
/// foreground stands in for a more opaque one.
pub fn intensity_color(intensity: f64) -> Color {
    let weight = intensity.clamp(MIN_INTENSITY, 1.0);
    let level = (weight * 255.0).round() as u8;
    Color::Rgb(level, level, level)
}

/// A `width` x `height` rect centred in `area`, shrunk to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_maps_to_grey_level() {
        assert_eq!(intensity_color(1.0), Color::Rgb(255, 255, 255));
        assert_eq!(intensity_color(0.4), Color::Rgb(102, 102, 102));
        assert_eq!(intensity_color(0.0), intensity_color(MIN_INTENSITY));
    }

    #[test]
    fn centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(area, 60, 30);
        assert!(rect.width <= 16 && rect.height <= 8);
        assert!(rect.x + rect.width <= area.width);
        assert!(rect.y + rect.height <= area.height);
    }
}
