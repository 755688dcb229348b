// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boxed terminal output for the sitescout CLI.
//!
//! Text is painted by role ([`Tone`]) rather than by color name, and each
//! role maps to a OneDark shade on dark terminals or a One Light shade on
//! light ones. `SITESCOUT_THEME=light|dark` picks the theme; otherwise a
//! light `COLORFGBG` background selects light. `NO_COLOR` or a non-TTY
//! stdout prints plain text.

use std::sync::OnceLock;

use sitescout::Category;

/// Inner width of every box, between the two vertical borders.
pub const BOX_WIDTH: usize = 80;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Theme {
    Dark,
    Light,
}

impl Theme {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "dark" | "d" => Some(Theme::Dark),
            "light" | "l" => Some(Theme::Light),
            _ => None,
        }
    }

    /// `COLORFGBG` is "fg;bg"; ANSI backgrounds 7 and 9-15 are light.
    fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg: u8 = value.rsplit(';').next()?.parse().ok()?;
        Some(if bg >= 7 && bg != 8 { Theme::Light } else { Theme::Dark })
    }

    fn current() -> Self {
        static THEME: OnceLock<Theme> = OnceLock::new();
        *THEME.get_or_init(|| {
            std::env::var("SITESCOUT_THEME")
                .ok()
                .and_then(|v| Theme::parse(&v))
                .or_else(|| {
                    std::env::var("COLORFGBG")
                        .ok()
                        .and_then(|v| Theme::from_colorfgbg(&v))
                })
                .unwrap_or(Theme::Dark)
        })
    }
}

/// What a piece of text is, independent of how it is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Section labels and language codes.
    Heading,
    /// Banner titles.
    Title,
    /// Frames and secondary text.
    Muted,
    Link,
    Good,
    Best,
    Fair,
    Error,
    Plain,
    /// Category badges.
    Badge(Category),
}

impl Tone {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        let dark = theme == Theme::Dark;
        match self {
            Tone::Heading => if dark { (86, 182, 194) } else { (1, 132, 188) },
            Tone::Title => if dark { (102, 217, 239) } else { (1, 112, 158) },
            Tone::Muted => if dark { (92, 99, 112) } else { (160, 161, 167) },
            Tone::Link | Tone::Badge(Category::Main) => {
                if dark { (97, 175, 239) } else { (64, 120, 242) }
            }
            Tone::Good | Tone::Badge(Category::Docs) => {
                if dark { (152, 195, 121) } else { (80, 161, 79) }
            }
            Tone::Best => if dark { (166, 226, 46) } else { (68, 140, 39) },
            Tone::Fair | Tone::Badge(Category::Info) => {
                if dark { (229, 192, 123) } else { (193, 132, 1) }
            }
            Tone::Badge(Category::Examples) => if dark { (198, 120, 221) } else { (166, 38, 164) },
            Tone::Error => if dark { (224, 108, 117) } else { (228, 86, 73) },
            Tone::Plain => if dark { (171, 178, 191) } else { (56, 58, 66) },
        }
    }

    fn escape(self) -> String {
        let (r, g, b) = self.rgb(Theme::current());
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Color `text` by role.
pub fn paint(tone: Tone, text: &str) -> String {
    if colors_enabled() {
        format!("{}{}{}", tone.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Color `text` by role, in bold.
pub fn paint_bold(tone: Tone, text: &str) -> String {
    if colors_enabled() {
        format!("{}{}{}{}", BOLD, tone.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Characters a terminal will show, skipping SGR escape sequences.
pub fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            width += 1;
        }
    }
    width
}

/// Cut plain text to at most `max` characters, marking the cut with "...".
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Right-pad a painted string to a visible width.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

// ============================================================================
// BOXES
// ============================================================================

/// One horizontal edge, optionally carrying a label after the corner.
fn edge(left: char, right: char, fill: &str, frame: Tone, label: Option<&str>) -> String {
    let label = label
        .map(|label| format!("{} {} ", fill, paint_bold(Tone::Heading, label)))
        .unwrap_or_default();
    let rest = BOX_WIDTH.saturating_sub(display_width(&label));
    format!(
        "{}{}{}{}",
        paint(frame, &left.to_string()),
        label,
        paint(frame, &fill.repeat(rest)),
        paint(frame, &right.to_string())
    )
}

/// `┌─ label ───┐`
pub fn open_section(label: &str) {
    println!("{}", edge('┌', '┐', "─", Tone::Muted, Some(label)));
}

/// `├─ label ───┤`
pub fn divide_section(label: &str) {
    println!("{}", edge('├', '┤', "─", Tone::Muted, Some(label)));
}

/// `└───────────┘`
pub fn close_section() {
    println!("{}", edge('└', '┘', "─", Tone::Muted, None));
}

/// `│ content   │`, padded to the box width.
pub fn line(content: &str) {
    let side = paint(Tone::Muted, "│");
    println!("{}{}{}", side, pad_right(content, BOX_WIDTH), side);
}

/// Double-framed title block opening a command's output.
pub fn banner(text: &str) {
    let title = paint_bold(Tone::Title, text);
    let spare = BOX_WIDTH.saturating_sub(display_width(&title));
    let side = paint(Tone::Link, "║");
    println!("{}", edge('╔', '╗', "═", Tone::Link, None));
    println!(
        "{}{}{}{}{}",
        side,
        " ".repeat(spare / 2),
        title,
        " ".repeat(spare - spare / 2),
        side
    );
    println!("{}", edge('╚', '╝', "═", Tone::Link, None));
}

// ============================================================================
// FIELDS
// ============================================================================

/// `[label]` in the category's color.
pub fn category_badge(category: Category, label: &str) -> String {
    paint(Tone::Badge(category), &format!("[{}]", label))
}

/// Right-aligned total score, brighter for stronger matches.
pub fn score_value(score: u32) -> String {
    let tone = match score {
        100.. => Tone::Best,
        50..=99 => Tone::Good,
        20..=49 => Tone::Fair,
        _ => Tone::Muted,
    };
    paint(tone, &format!("{:>5}", score))
}

/// One column of a score breakdown; zero signals fade out.
pub fn signal_value(points: u32) -> String {
    let tone = if points == 0 { Tone::Muted } else { Tone::Plain };
    paint(tone, &format!("{:>4}", points))
}

pub fn error_line(text: &str) -> String {
    paint_bold(Tone::Error, text)
}
