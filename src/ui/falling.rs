//! Falling emoji overlay

use crate::state::{FallingItem, SeasonalAnimation};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;

/// Items at or above this size are drawn bold
const LARGE_ITEM_SIZE: u16 = 23;

/// Screen cell for an item at `elapsed`, or None if it is outside `area`
pub fn item_position(item: &FallingItem, area: Rect, elapsed: Duration) -> Option<(u16, u16)> {
    if area.width < 2 || area.height == 0 {
        return None;
    }
    // leave room for double-width glyphs
    let max_x = area.width - 2;
    let x = area.x + ((item.left_pct / 100.0) * max_x as f32).round() as u16;
    let y = area.y + (item.progress(elapsed) * area.height as f32) as u16;
    (y < area.bottom()).then_some((x.min(area.x + max_x), y))
}

/// Draw every item still falling
pub fn draw(frame: &mut Frame, area: Rect, animation: &SeasonalAnimation, elapsed: Duration) {
    for item in &animation.items {
        let Some((x, y)) = item_position(item, area, elapsed) else {
            continue;
        };
        let style = if item.size >= LARGE_ITEM_SIZE {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let cell = Rect {
            x,
            y,
            width: 2,
            height: 1,
        };
        frame.render_widget(Paragraph::new(Span::styled(item.emoji, style)), cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(left_pct: f32) -> FallingItem {
        FallingItem {
            emoji: "❄️",
            left_pct,
            fall_duration: Duration::from_secs(10),
            size: 20,
            spawned_at: Duration::ZERO,
        }
    }

    #[test]
    fn test_starts_at_top() {
        let area = Rect::new(0, 0, 102, 20);
        assert_eq!(item_position(&item(0.0), area, Duration::ZERO), Some((0, 0)));
    }

    #[test]
    fn test_falls_with_progress() {
        let area = Rect::new(0, 0, 102, 20);
        assert_eq!(
            item_position(&item(50.0), area, Duration::from_secs(5)),
            Some((50, 10))
        );
    }

    #[test]
    fn test_landed_item_is_not_drawn() {
        let area = Rect::new(0, 0, 102, 20);
        assert_eq!(item_position(&item(50.0), area, Duration::from_secs(10)), None);
    }

    #[test]
    fn test_tiny_area_draws_nothing() {
        assert_eq!(item_position(&item(50.0), Rect::new(0, 0, 1, 5), Duration::ZERO), None);
    }
}
