use crate::snapshot::Role;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_normal: Color,
    pub status_bg: Color,
    pub bar_default: Color,
    pub bar_comparing: Color,
    pub bar_pivot: Color,
    pub bar_swapping: Color,
    pub bar_sorted: Color,
    pub bar_heap_active: Color,
    pub bar_insertion_active: Color,
}

impl Theme {
    /// Bar color for a role tag
    pub fn role_color(&self, role: Role) -> Color {
        match role {
            Role::Default => self.bar_default,
            Role::Comparing => self.bar_comparing,
            Role::Pivot => self.bar_pivot,
            Role::Swapping => self.bar_swapping,
            Role::Sorted => self.bar_sorted,
            Role::HeapActive => self.bar_heap_active,
            Role::InsertionActive => self.bar_insertion_active,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_normal: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
    bar_default: Color::Rgb(135, 206, 235),          // skyblue
    bar_comparing: Color::Rgb(255, 165, 0),          // orange
    bar_pivot: Color::Rgb(255, 0, 0),                // red
    bar_swapping: Color::Rgb(160, 32, 240),          // purple
    bar_sorted: Color::Rgb(0, 200, 0),               // green
    bar_heap_active: Color::Rgb(240, 128, 128),      // lightcoral
    bar_insertion_active: Color::Rgb(255, 255, 0),   // yellow
};
