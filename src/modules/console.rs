use colored::{Color, Colorize};
use std::{
    fmt,
    io::{self, Write},
    str::FromStr,
};

/// The sixteen classic console colors, named the way shell scripts spell them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

const ALL_COLORS: [ConsoleColor; 16] = [
    ConsoleColor::Black,
    ConsoleColor::DarkBlue,
    ConsoleColor::DarkGreen,
    ConsoleColor::DarkCyan,
    ConsoleColor::DarkRed,
    ConsoleColor::DarkMagenta,
    ConsoleColor::DarkYellow,
    ConsoleColor::Gray,
    ConsoleColor::DarkGray,
    ConsoleColor::Blue,
    ConsoleColor::Green,
    ConsoleColor::Cyan,
    ConsoleColor::Red,
    ConsoleColor::Magenta,
    ConsoleColor::Yellow,
    ConsoleColor::White,
];

impl ConsoleColor {
    pub fn name(self) -> &'static str {
        match self {
            ConsoleColor::Black => "Black",
            ConsoleColor::DarkBlue => "DarkBlue",
            ConsoleColor::DarkGreen => "DarkGreen",
            ConsoleColor::DarkCyan => "DarkCyan",
            ConsoleColor::DarkRed => "DarkRed",
            ConsoleColor::DarkMagenta => "DarkMagenta",
            ConsoleColor::DarkYellow => "DarkYellow",
            ConsoleColor::Gray => "Gray",
            ConsoleColor::DarkGray => "DarkGray",
            ConsoleColor::Blue => "Blue",
            ConsoleColor::Green => "Green",
            ConsoleColor::Cyan => "Cyan",
            ConsoleColor::Red => "Red",
            ConsoleColor::Magenta => "Magenta",
            ConsoleColor::Yellow => "Yellow",
            ConsoleColor::White => "White",
        }
    }

    // Dark variants are the normal ANSI colors, the plain names are the bright ones.
    fn ansi(self) -> Color {
        match self {
            ConsoleColor::Black => Color::Black,
            ConsoleColor::DarkBlue => Color::Blue,
            ConsoleColor::DarkGreen => Color::Green,
            ConsoleColor::DarkCyan => Color::Cyan,
            ConsoleColor::DarkRed => Color::Red,
            ConsoleColor::DarkMagenta => Color::Magenta,
            ConsoleColor::DarkYellow => Color::Yellow,
            ConsoleColor::Gray => Color::White,
            ConsoleColor::DarkGray => Color::BrightBlack,
            ConsoleColor::Blue => Color::BrightBlue,
            ConsoleColor::Green => Color::BrightGreen,
            ConsoleColor::Cyan => Color::BrightCyan,
            ConsoleColor::Red => Color::BrightRed,
            ConsoleColor::Magenta => Color::BrightMagenta,
            ConsoleColor::Yellow => Color::BrightYellow,
            ConsoleColor::White => Color::BrightWhite,
        }
    }
}

impl fmt::Display for ConsoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConsoleColor {
    type Err = String;

    /// Accepts `DarkBlue`, `darkblue`, `dark-blue` and `dark_blue` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        ALL_COLORS
            .iter()
            .copied()
            .find(|color| color.name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = ALL_COLORS.iter().map(|c| c.name()).collect();
                format!("unknown color '{}' (expected one of {})", s, names.join(", "))
            })
    }
}

/// Where formatted console text goes.
pub trait Console {
    fn write(&mut self, text: &str, color: ConsoleColor);
    fn write_line(&mut self, text: &str, color: ConsoleColor);
}

/// Console sink backed by stdout. Write failures such as a closed pipe are
/// dropped so a script's log line still gets appended.
pub struct Terminal<W: Write = io::Stdout> {
    out: W,
}

impl Terminal {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Console for Terminal<W> {
    fn write(&mut self, text: &str, color: ConsoleColor) {
        write!(self.out, "{}", text.color(color.ansi())).ok();
        // Text without a line break must be visible before the next call.
        self.out.flush().ok();
    }

    fn write_line(&mut self, text: &str, color: ConsoleColor) {
        writeln!(self.out, "{}", text.color(color.ansi())).ok();
        self.out.flush().ok();
    }
}

#[cfg(test)]
pub mod recording {
    use super::{Console, ConsoleColor};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ConsoleWrite {
        pub text: String,
        pub color: ConsoleColor,
        pub newline: bool,
    }

    #[derive(Default)]
    pub struct RecordingConsole {
        pub writes: Vec<ConsoleWrite>,
    }

    impl RecordingConsole {
        pub fn rendered(&self) -> String {
            self.writes
                .iter()
                .map(|w| {
                    if w.newline {
                        format!("{}\n", w.text)
                    } else {
                        w.text.clone()
                    }
                })
                .collect()
        }
    }

    impl Console for RecordingConsole {
        fn write(&mut self, text: &str, color: ConsoleColor) {
            self.writes.push(ConsoleWrite {
                text: text.to_string(),
                color,
                newline: false,
            });
        }

        fn write_line(&mut self, text: &str, color: ConsoleColor) {
            self.writes.push(ConsoleWrite {
                text: text.to_string(),
                color,
                newline: true,
            });
        }
    }
}
