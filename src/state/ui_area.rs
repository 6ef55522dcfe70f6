//! UI area positioning for mouse event handling
//!
//! ```text
//! Row 0-4:  Header with the wave title (3 inner rows plus borders)
//! Row 5+:   Menu on the left (MENU_WIDTH cols), content on the right
//! Bottom:   Status bar (1 row)
//! ```

/// Height of the header (borders plus room for the title to rise and fall a row)
pub const HEADER_HEIGHT: u16 = 5;

/// Width of the menu column
pub const MENU_WIDTH: u16 = 20;

/// UI area for calculating mouse offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    /// Header with the title (rows 0-4)
    Header,
    /// Menu buttons (starts after header)
    Menu,
}

impl UiArea {
    /// Get the starting Y row for this UI area (absolute screen position)
    #[inline]
    pub const fn start_y(self) -> u16 {
        match self {
            UiArea::Header => 0,
            UiArea::Menu => HEADER_HEIGHT,
        }
    }

    /// Convert absolute mouse row to row relative to this UI area
    #[inline]
    pub fn relative_row(self, mouse_row: u16) -> u16 {
        mouse_row.saturating_sub(self.start_y())
    }

    /// Check if a mouse position falls inside this area
    #[inline]
    pub fn contains(self, mouse_col: u16, mouse_row: u16) -> bool {
        match self {
            UiArea::Header => mouse_row < HEADER_HEIGHT,
            UiArea::Menu => mouse_row >= self.start_y() && mouse_col < MENU_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_y_values() {
        assert_eq!(UiArea::Header.start_y(), 0);
        assert_eq!(UiArea::Menu.start_y(), 5);
    }

    #[test]
    fn test_relative_row() {
        assert_eq!(UiArea::Menu.relative_row(5), 0);
        assert_eq!(UiArea::Menu.relative_row(7), 2);
    }

    #[test]
    fn test_relative_row_saturates() {
        assert_eq!(UiArea::Menu.relative_row(0), 0);
        assert_eq!(UiArea::Menu.relative_row(4), 0);
    }

    #[test]
    fn test_contains() {
        assert!(UiArea::Header.contains(50, 0));
        assert!(UiArea::Header.contains(0, 4));
        assert!(!UiArea::Header.contains(0, 5));

        assert!(UiArea::Menu.contains(0, 5));
        assert!(!UiArea::Menu.contains(MENU_WIDTH, 5));
        assert!(!UiArea::Menu.contains(0, 4));
    }
}
