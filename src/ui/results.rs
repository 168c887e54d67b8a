//! Numbered result list
//!
//! Each entry is shown as:
//!
//! ```text
//! 0] Title:	Some.Release.1080p
//! Seeders:	42	Size:		4.20 GB
//! ```

use crate::models::ResultSet;

/// Render the result list, indexed from 0. An empty set renders nothing.
pub fn render_results(results: &ResultSet) -> String {
    let mut out = String::new();
    for (i, result) in results.iter().enumerate() {
        out.push_str(&format!("{}] Title:\t{}\n", i, result.title));
        out.push_str(&format!(
            "Seeders:\t{}\tSize:\t\t{}\n\n",
            result.seeders,
            result.format_size()
        ));
    }
    out
}
