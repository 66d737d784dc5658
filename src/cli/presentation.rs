//! CLI presentation: text for each outcome.

use crate::selection::Outcome;

/// Text written to standard output, one newline-terminated line per listed
/// device. A successful selection prints nothing.
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Listed { lines } => lines.iter().fold(String::new(), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        }),
        Outcome::Selected { .. } => String::new(),
    }
}
