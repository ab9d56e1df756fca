//! Output formatting for substring search results

use crate::index::StringId;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print matched strings, one per line, as `id:string` with the first
/// occurrence of `pattern` highlighted.
pub fn print_matches(
    corpus: &[String],
    ids: &[StringId],
    pattern: &str,
    color: bool,
) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for &id in ids {
        let Some(text) = corpus.get(id as usize) else {
            continue;
        };

        // Print the id prefix
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{}", id)?;
        stdout.reset()?;
        write!(stdout, ":")?;

        match text.find(pattern) {
            Some(start) if !pattern.is_empty() => {
                let end = start + pattern.len();

                // Text before the match
                write!(stdout, "{}", &text[..start])?;

                // The match itself (highlighted)
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
                write!(stdout, "{}", &text[start..end])?;
                stdout.reset()?;

                // Text after the match
                writeln!(stdout, "{}", &text[end..])?;
            }
            _ => {
                writeln!(stdout, "{}", text)?;
            }
        }
    }

    Ok(())
}

/// Print matched ids only, one per line (for scripting).
pub fn print_ids_only(ids: &[StringId]) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    for &id in ids {
        writeln!(stdout, "{}", id)?;
    }
    Ok(())
}

/// Print only the number of matches.
pub fn print_match_count(ids: &[StringId]) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    writeln!(stdout, "{}", ids.len())?;
    Ok(())
}
