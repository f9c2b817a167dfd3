use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::Error;

const APP_DIR_NAME: &str = "pocket-snake";

/// A color theme applied to all visual elements.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_fg: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake with red food on dark theme.
#[must_use]
pub fn classic_theme() -> Theme {
    Theme {
        name: "Classic".to_owned(),
        snake_head: Color::White,
        snake_body: Color::Green,
        snake_tail: Color::DarkGray,
        food: Color::Red,
        play_bg: Color::Black,
        border_fg: Color::White,
        hud_fg: Color::White,
        menu_title: Color::Green,
        menu_footer: Color::DarkGray,
    }
}

/// Ocean cyan theme.
#[must_use]
pub fn ocean_theme() -> Theme {
    Theme {
        name: "Ocean".to_owned(),
        snake_head: Color::White,
        snake_body: Color::Cyan,
        snake_tail: Color::DarkGray,
        food: Color::Yellow,
        play_bg: Color::Black,
        border_fg: Color::Cyan,
        hud_fg: Color::Cyan,
        menu_title: Color::Cyan,
        menu_footer: Color::DarkGray,
    }
}

/// Neon magenta/yellow theme.
#[must_use]
pub fn neon_theme() -> Theme {
    Theme {
        name: "Neon".to_owned(),
        snake_head: Color::White,
        snake_body: Color::Magenta,
        snake_tail: Color::DarkGray,
        food: Color::Yellow,
        play_bg: Color::Black,
        border_fg: Color::Magenta,
        hud_fg: Color::Magenta,
        menu_title: Color::Magenta,
        menu_footer: Color::DarkGray,
    }
}

/// Returns a built-in theme by id.
#[must_use]
pub fn builtin_theme(id: &str) -> Option<Theme> {
    match id {
        id if id.eq_ignore_ascii_case("classic") => Some(classic_theme()),
        id if id.eq_ignore_ascii_case("ocean") => Some(ocean_theme()),
        id if id.eq_ignore_ascii_case("neon") => Some(neon_theme()),
        _ => None,
    }
}

/// Resolves a theme id: built-ins first, then user theme files under
/// `<config_dir>/pocket-snake/themes/<id>.json`.
pub fn load_theme(id: &str) -> Result<Theme, Error> {
    if let Some(theme) = builtin_theme(id) {
        return Ok(theme);
    }

    let Some(path) = user_theme_path(id) else {
        return Err(Error::UnknownTheme(id.to_owned()));
    };

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::UnknownTheme(id.to_owned()));
        }
        Err(e) => return Err(Error::Io(e)),
    };

    parse_theme_from_str(id, &raw).map_err(|source| Error::Malformed { path, source })
}

fn user_theme_path(id: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|config_dir| {
        config_dir
            .join(APP_DIR_NAME)
            .join("themes")
            .join(format!("{id}.json"))
    })
}

/// On-disk theme representation: a flat map of element names to color
/// strings (`#rrggbb` or an ANSI color name).
#[derive(Debug, Deserialize)]
struct ThemeFile {
    #[serde(default)]
    name: Option<String>,
    theme: HashMap<String, String>,
}

/// Parses a user theme, falling back to classic colors for any element
/// that is missing or unparseable.
fn parse_theme_from_str(id: &str, raw: &str) -> Result<Theme, serde_json::Error> {
    let parsed = serde_json::from_str::<ThemeFile>(raw)?;
    let fallback = classic_theme();

    let resolve = |token: &str, fallback: Color| {
        parsed
            .theme
            .get(token)
            .and_then(|value| parse_color(value))
            .unwrap_or(fallback)
    };

    Ok(Theme {
        name: parsed.name.clone().unwrap_or_else(|| id.to_owned()),
        snake_head: resolve("snake_head", fallback.snake_head),
        snake_body: resolve("snake_body", fallback.snake_body),
        snake_tail: resolve("snake_tail", fallback.snake_tail),
        food: resolve("food", fallback.food),
        play_bg: resolve("play_bg", fallback.play_bg),
        border_fg: resolve("border_fg", fallback.border_fg),
        hud_fg: resolve("hud_fg", fallback.hud_fg),
        menu_title: resolve("menu_title", fallback.menu_title),
        menu_footer: resolve("menu_footer", fallback.menu_footer),
    })
}

fn parse_color(value: &str) -> Option<Color> {
    if let Some(color) = parse_hex_color(value) {
        return Some(color);
    }

    parse_named_ansi_color(value)
}

fn parse_named_ansi_color(value: &str) -> Option<Color> {
    match value {
        value if value.eq_ignore_ascii_case("black") => Some(Color::Black),
        value if value.eq_ignore_ascii_case("red") => Some(Color::Red),
        value if value.eq_ignore_ascii_case("green") => Some(Color::Green),
        value if value.eq_ignore_ascii_case("yellow") => Some(Color::Yellow),
        value if value.eq_ignore_ascii_case("blue") => Some(Color::Blue),
        value if value.eq_ignore_ascii_case("magenta") => Some(Color::Magenta),
        value if value.eq_ignore_ascii_case("cyan") => Some(Color::Cyan),
        value if value.eq_ignore_ascii_case("white") => Some(Color::White),
        value if value.eq_ignore_ascii_case("gray") || value.eq_ignore_ascii_case("grey") => {
            Some(Color::Gray)
        }
        value
            if value.eq_ignore_ascii_case("darkgray") || value.eq_ignore_ascii_case("darkgrey") =>
        {
            Some(Color::DarkGray)
        }
        _ => None,
    }
}

fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(red, green, blue))
}
