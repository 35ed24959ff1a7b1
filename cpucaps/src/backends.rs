//! Listing of every compiled-in backend and the dispatcher's choice.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::probe::Extension;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub primitive: &'static str,
    pub backend: &'static str,
    pub features: &'static [&'static str],
    pub available: bool,
    pub selected: bool,
}

macro_rules! rows {
    ($rows:expr, $primitive:expr, $backend:ty) => {{
        let selected = <$backend>::detect();
        debug!(primitive = $primitive, backend = selected.name(), "dispatcher choice");

        for backend in <$backend>::ALL {
            $rows.push(Row {
                primitive: $primitive,
                backend: backend.name(),
                features: backend.required_features(),
                available: backend.is_available(),
                selected: backend == selected,
            });
        }
    }};
}

pub fn rows() -> Vec<Row> {
    let mut rows = Vec::new();
    rows!(rows, "sha1", sha1_compress::Backend);
    rows!(rows, "sha256", sha2_compress::sha256::Backend);
    rows!(rows, "sha512", sha2_compress::sha512::Backend);
    rows!(rows, "gf128", gf128::Backend);
    rows
}

pub fn run(out: &mut impl Write) -> Result<()> {
    for extension in Extension::ALL {
        let mark = if extension.is_supported() { '+' } else { '-' };
        writeln!(out, "{mark}{}", extension.label())?;
    }
    writeln!(out)?;

    for row in rows() {
        let status = match (row.selected, row.available) {
            (true, _) => "selected",
            (false, true) => "available",
            (false, false) => "unavailable",
        };
        let features = if row.features.is_empty() {
            "-".to_owned()
        } else {
            row.features.join(",")
        };
        writeln!(
            out,
            "{:<6} {:<12} {status:<11} {features}",
            row.primitive, row.backend
        )?;
    }

    Ok(())
}
