//! Link audit table
//!
//! One row per alternate link written to any sitemap, x-default included,
//! with the header `URL,Sitemap,Hreflang`.

use crate::output::traits::OutputResult;
use crate::sitemap::LinkRecord;
use std::io::Write;

/// Writes the audit table as CSV
pub fn write_audit<W: Write>(writer: W, links: &[LinkRecord]) -> OutputResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Written explicitly so an empty run still gets a header
    wtr.write_record(["URL", "Sitemap", "Hreflang"])?;
    for link in links {
        wtr.serialize(link)?;
    }
    wtr.flush()?;
    Ok(())
}
