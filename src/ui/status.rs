//! Status-line text composition.
//!
//! The status line shows the program name, the filename, the cursor's line
//! number and display column, and the remaining free capacity. Narrow
//! terminals drop the right-hand sections first; the text is always padded
//! to exactly the grid width.

/// Status prefix, also used for the filename prompt.
pub const PREFIX: &str = "scrib: ";

/// Longest filename shown on a wide terminal.
const NAME_WIDE: usize = 16;
/// Longest filename shown on a narrow terminal.
const NAME_NARROW: usize = 11;

/// Compose the status line, padded to `width`.
pub fn status_line(
    name: Option<&str>,
    line: usize,
    col: usize,
    free: usize,
    width: usize,
) -> String {
    let mut out = String::with_capacity(width);
    out.push_str(PREFIX);

    if let Some(name) = name {
        let max = if width > 21 { NAME_WIDE } else { NAME_NARROW };
        out.extend(name.chars().take(max));
    }

    if width > 34 {
        pad_to(&mut out, 23);
        out.push_str("L: ");
        out.push_str(&line.to_string());

        if width > 48 {
            pad_to(&mut out, 37);
            out.push_str("C: ");
            out.push_str(&col.to_string());

            if width > 64 {
                pad_to(&mut out, width - 13);
                out.push_str(&format!("Rest: {free:>7}"));
            }
        }
    }

    pad_to(&mut out, width);
    out.truncate(width);
    out
}

/// Prompt line shown while entering a filename, padded to `width`.
pub fn prompt_line(entered: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    out.push_str(PREFIX);
    out.push_str(entered);
    pad_to(&mut out, width);
    out.truncate(width);
    out
}

/// Notice line (errors and acknowledgments), padded to `width`.
pub fn notice_line(message: &str, width: usize) -> String {
    prompt_line(message, width)
}

fn pad_to(s: &mut String, width: usize) {
    while s.len() < width {
        s.push(' ');
    }
}
