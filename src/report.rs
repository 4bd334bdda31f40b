//! Plain text rendering of the collected authors.
use std::fmt::Write;

use crate::authors::AuthorSet;

pub const REPORT_HEADER: &str = "Results obtained (different users)";

/// Renders the indexed author list printed at the end of a run.
pub fn render(authors: &AuthorSet) -> String {
    let mut out = format!("\n{REPORT_HEADER}\n");

    for (index, author) in authors.iter().enumerate() {
        // writing to a String cannot fail
        let _ = writeln!(out, "    Index {index}, value {author}");
    }

    out
}
