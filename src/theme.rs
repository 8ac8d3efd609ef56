use ratatui::style::Color;

/// Colors applied to every visual element.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    /// Fill for empty play-area cells.
    pub play_bg: Color,
    /// Dot drawn in empty cells to suggest the grid.
    pub grid_line: Color,
    pub border_fg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Green snake on a deep navy board.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::Rgb(0, 204, 0),
    snake_body: Color::Rgb(0, 153, 0),
    food: Color::Rgb(255, 0, 0),
    play_bg: Color::Rgb(0, 0, 25),
    grid_line: Color::Rgb(25, 25, 51),
    border_fg: Color::Rgb(60, 60, 110),
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Plain named colors for terminals without truecolor support.
pub const THEME_BASIC: Theme = Theme {
    name: "Basic",
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    food: Color::Red,
    play_bg: Color::Black,
    grid_line: Color::DarkGray,
    border_fg: Color::Gray,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Picks the palette based on the `COLORTERM` advertisement.
#[must_use]
pub fn detect_theme() -> &'static Theme {
    theme_for_colorterm(std::env::var("COLORTERM").ok().as_deref())
}

fn theme_for_colorterm(colorterm: Option<&str>) -> &'static Theme {
    match colorterm {
        Some(value) if value.eq_ignore_ascii_case("truecolor") || value == "24bit" => {
            &THEME_CLASSIC
        }
        _ => &THEME_BASIC,
    }
}

#[cfg(test)]
mod tests {
    use super::theme_for_colorterm;

    #[test]
    fn truecolor_terminals_get_rgb_palette() {
        assert_eq!(theme_for_colorterm(Some("truecolor")).name, "Classic");
        assert_eq!(theme_for_colorterm(Some("24bit")).name, "Classic");
        assert_eq!(theme_for_colorterm(None).name, "Basic");
    }

    #[test]
    fn head_and_body_colors_differ() {
        for theme in [&super::THEME_CLASSIC, &super::THEME_BASIC] {
            assert_ne!(theme.snake_head, theme.snake_body);
            assert_ne!(theme.food, theme.play_bg);
        }
    }
}
