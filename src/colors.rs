use crossterm::style::{available_color_count, Color};
use crossterm::tty::IsTty;
use std::env;
use std::io::stdout;

/// Minimum palette size needed to tell the faces apart
const MIN_COLORS: u16 = 8;

/// Named palette entries, in color id order (1-6)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Material {
    Grass = 1,
    Dirt,
    Stone,
    Water,
    Sand,
    Crystal,
}

impl Material {
    pub const ALL: [Material; 6] = [
        Material::Grass,
        Material::Dirt,
        Material::Stone,
        Material::Water,
        Material::Sand,
        Material::Crystal,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.id() == id)
    }

    /// Foreground/background pair bound to this material
    pub fn pair(self) -> ColorPair {
        let fg = match self {
            Material::Grass => Color::DarkGreen,
            Material::Dirt => Color::DarkRed,
            Material::Stone => Color::Grey,
            Material::Water => Color::DarkBlue,
            Material::Sand => Color::DarkYellow,
            Material::Crystal => Color::DarkMagenta,
        };
        ColorPair { fg, bg: Color::Black }
    }
}

/// A foreground color drawn over a background color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: Color,
    pub bg: Color,
}

/// Look up a palette pair by id. Unknown ids draw in the terminal default.
pub fn pair(color_id: u8) -> Option<ColorPair> {
    Material::from_id(color_id).map(Material::pair)
}

/// What the environment says about the output terminal
#[derive(Clone, Debug, Default)]
pub struct ColorEnv {
    pub term: Option<String>,
    pub colorterm: Option<String>,
    pub is_tty: bool,
}

impl ColorEnv {
    pub fn detect() -> Self {
        Self {
            term: env::var("TERM").ok(),
            colorterm: env::var("COLORTERM").ok(),
            is_tty: stdout().is_tty(),
        }
    }

    /// Whether this terminal can show the palette
    pub fn supports_color(&self) -> bool {
        if !self.is_tty {
            return false;
        }
        if self.colorterm.as_deref().is_some_and(|c| !c.is_empty()) {
            return true;
        }
        match self.term.as_deref() {
            None | Some("") | Some("dumb") => false,
            Some(term) if term.ends_with("-mono") || term.ends_with("-m") => false,
            Some(_) => available_color_count() >= MIN_COLORS,
        }
    }
}

/// Whether the attached terminal can show the palette
pub fn supports_color() -> bool {
    ColorEnv::detect().supports_color()
}
