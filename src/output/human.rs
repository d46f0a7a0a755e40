#![forbid(unsafe_code)]

//! Human-readable report formatter with colorization support

use crate::engine::FileScan;
use std::env;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Human-readable report formatter
///
/// Formats one file's scan for terminal display with optional colors.
pub struct HumanFormatter {
    color_choice: ColorChoice,
    verbose: bool,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with the specified color choice
    pub fn new(color_choice: ColorChoice, verbose: bool) -> Self {
        HumanFormatter {
            color_choice,
            verbose,
        }
    }

    /// Format one file's report as plain text.
    ///
    /// Non-verbose output is a single summary line, with the frame count
    /// appended only for multi-frame files. Verbose output is a path header
    /// followed by the frequency-sorted color listing, one `#RRGGBB: N×`
    /// line per distinct color.
    pub fn format(&self, scan: &FileScan) -> String {
        let mut output = String::new();

        if self.verbose {
            output.push_str(&format!("{}:\n", scan.path.display()));
            for (key, count) in scan.sorted_colors() {
                let (r, g, b) = scan.keying.display_rgb(key);
                output.push_str(&format!("#{r:02X}{g:02X}{b:02X}: {count}×\n"));
            }
        } else if scan.frames > 1 {
            output.push_str(&format!(
                "{}: {} colors in {} frames\n",
                scan.path.display(),
                scan.distinct_colors(),
                scan.frames
            ));
        } else {
            output.push_str(&format!(
                "{}: {} colors\n",
                scan.path.display(),
                scan.distinct_colors()
            ));
        }

        output
    }

    /// Write one file's report to stdout, with colors when enabled.
    ///
    /// When colors are active and the terminal advertises truecolor, each
    /// verbose line is prefixed with a swatch of the color itself. With
    /// colors disabled the byte output is identical to [`format`].
    ///
    /// [`format`]: HumanFormatter::format
    pub fn write_to_stdout(&self, scan: &FileScan) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);

        if self.verbose {
            stdout.set_color(ColorSpec::new().set_bold(true))?;
            write!(stdout, "{}:", scan.path.display())?;
            stdout.reset()?;
            writeln!(stdout)?;

            let swatches = self.color_choice != ColorChoice::Never && supports_truecolor();

            for (key, count) in scan.sorted_colors() {
                let (r, g, b) = scan.keying.display_rgb(key);

                if swatches {
                    stdout.set_color(ColorSpec::new().set_bg(Some(Color::Rgb(r, g, b))))?;
                    write!(stdout, "  ")?;
                    stdout.reset()?;
                    write!(stdout, " ")?;
                }

                write!(stdout, "#{r:02X}{g:02X}{b:02X}: ")?;
                stdout.set_color(ColorSpec::new().set_bold(true))?;
                write!(stdout, "{count}")?;
                stdout.reset()?;
                writeln!(stdout, "×")?;
            }
        } else {
            write!(stdout, "{}: ", scan.path.display())?;
            stdout.set_color(ColorSpec::new().set_bold(true))?;
            write!(stdout, "{}", scan.distinct_colors())?;
            stdout.reset()?;
            write!(stdout, " colors")?;

            if scan.frames > 1 {
                write!(stdout, " in ")?;
                stdout.set_color(ColorSpec::new().set_bold(true))?;
                write!(stdout, "{}", scan.frames)?;
                stdout.reset()?;
                write!(stdout, " frames")?;
            }
            writeln!(stdout)?;
        }

        Ok(())
    }
}

/// Write a diagnostic to stderr with a colored `error:` prefix
pub fn write_diagnostic(color_choice: ColorChoice, message: &str) -> io::Result<()> {
    let mut stderr = StandardStream::stderr(color_choice);

    stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stderr, "error")?;
    stderr.reset()?;
    writeln!(stderr, ": {message}")
}

/// True when the terminal advertises 24-bit color support
fn supports_truecolor() -> bool {
    env::var("COLORTERM").is_ok_and(|value| value == "truecolor")
}
