use std::io::IsTerminal;

use clap::builder::styling::{Ansi256Color, AnsiColor, Color as ClapColor, RgbColor, Style, Styles};
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

struct Palette {
  timestamp: Color,
  primary: Color,
  accent: Color,
  info: Color,
  success: Color,
  label: Color,
  value: Color,
}

const DARK: Palette = Palette {
  timestamp: Color::Rgb { r: 118, g: 166, b: 166 },
  primary: Color::Rgb { r: 191, g: 126, b: 4 },
  accent: Color::Rgb { r: 166, g: 84, b: 55 },
  info: Color::Rgb { r: 118, g: 166, b: 166 },
  success: Color::Rgb { r: 118, g: 166, b: 166 },
  label: Color::Rgb { r: 217, g: 164, b: 4 },
  value: Color::Rgb { r: 242, g: 211, b: 56 },
};

const LIGHT: Palette = Palette {
  timestamp: Color::Rgb { r: 92, g: 62, b: 38 },
  primary: Color::Rgb { r: 70, g: 42, b: 25 },
  accent: Color::Rgb { r: 211, g: 99, b: 70 },
  info: Color::Rgb { r: 40, g: 111, b: 170 },
  success: Color::Rgb { r: 34, g: 142, b: 90 },
  label: Color::Rgb { r: 176, g: 103, b: 66 },
  value: Color::Rgb { r: 199, g: 146, b: 76 },
};

/// Theme-aware terminal colors; every accessor yields `Color::Reset` when color is off.
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn palette(&self) -> &'static Palette {
    match self.theme {
      Theme::Dark => &DARK,
      Theme::Light => &LIGHT,
    }
  }

  const fn pick(&self, color: Color) -> Color {
    if self.enabled { color } else { Color::Reset }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(self.palette().timestamp)
  }

  pub const fn primary(&self) -> Color {
    self.pick(self.palette().primary)
  }

  pub const fn accent(&self) -> Color {
    self.pick(self.palette().accent)
  }

  pub const fn info(&self) -> Color {
    self.pick(self.palette().info)
  }

  pub const fn success(&self) -> Color {
    self.pick(self.palette().success)
  }

  pub const fn label(&self) -> Color {
    self.pick(self.palette().label)
  }

  pub const fn value(&self) -> Color {
    self.pick(self.palette().value)
  }

  pub fn clap_styles() -> Styles {
    let colors = Self::new(true, Theme::Dark);

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(to_clap(colors.label())))
      .usage(Style::new().bold().fg_color(to_clap(colors.label())))
      .literal(Style::new().fg_color(to_clap(colors.success())))
      .placeholder(Style::new().fg_color(to_clap(colors.info())))
      .error(Style::new().bold().fg_color(to_clap(colors.accent())))
      .valid(Style::new().fg_color(to_clap(colors.success())))
      .invalid(Style::new().bold().fg_color(to_clap(colors.accent())))
  }
}

fn to_clap(color: Color) -> Option<ClapColor> {
  let ansi = match color {
    Color::Reset => return None,
    Color::Rgb { r, g, b } => return Some(ClapColor::Rgb(RgbColor(r, g, b))),
    Color::AnsiValue(value) => return Some(ClapColor::Ansi256(Ansi256Color(value))),
    Color::Black => AnsiColor::Black,
    Color::Blue | Color::DarkBlue => AnsiColor::Blue,
    Color::Cyan | Color::DarkCyan => AnsiColor::Cyan,
    Color::Green | Color::DarkGreen => AnsiColor::Green,
    Color::Grey | Color::DarkGrey => AnsiColor::BrightBlack,
    Color::Magenta | Color::DarkMagenta => AnsiColor::Magenta,
    Color::Red | Color::DarkRed => AnsiColor::Red,
    Color::Yellow | Color::DarkYellow => AnsiColor::Yellow,
    Color::White => AnsiColor::White,
  };
  Some(ClapColor::Ansi(ansi))
}

/// Table cells take comfy-table's own color type.
pub fn comfy(color: Color) -> ComfyColor {
  match color {
    Color::Reset => ComfyColor::Reset,
    Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
    Color::AnsiValue(value) => ComfyColor::AnsiValue(value),
    Color::Black => ComfyColor::Black,
    Color::DarkGrey => ComfyColor::DarkGrey,
    Color::Red => ComfyColor::Red,
    Color::DarkRed => ComfyColor::DarkRed,
    Color::Green => ComfyColor::Green,
    Color::DarkGreen => ComfyColor::DarkGreen,
    Color::Yellow => ComfyColor::Yellow,
    Color::DarkYellow => ComfyColor::DarkYellow,
    Color::Blue => ComfyColor::Blue,
    Color::DarkBlue => ComfyColor::DarkBlue,
    Color::Magenta => ComfyColor::Magenta,
    Color::DarkMagenta => ComfyColor::DarkMagenta,
    Color::Cyan => ComfyColor::Cyan,
    Color::DarkCyan => ComfyColor::DarkCyan,
    Color::White => ComfyColor::White,
    Color::Grey => ComfyColor::Grey,
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => detect_terminal_theme(),
  }
}

/// `COLORFGBG` ends with the background palette index; 8 and above are light backgrounds.
fn detect_terminal_theme() -> Theme {
  let background = std::env::var("COLORFGBG")
    .ok()
    .and_then(|value| value.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()));

  match background {
    Some(index) if index >= 8 => Theme::Light,
    _ => Theme::Dark,
  }
}
