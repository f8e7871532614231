pub mod config;
pub mod error;
pub mod layout;
pub mod render;

use common::{selection::select_family_minima, table::Table};
use log::info;

use crate::{
    config::ReportConfig,
    error::Error,
    layout::{LAYOUTS, Layout},
    render::render,
};

/// Selects and renders the minima of both families of one table.
pub fn analyse(layout: &Layout, table: &Table) -> Result<String, Error> {
    layout.check(table)?;

    let [first, second] = &layout.families;
    let selections = select_family_minima(table, first.group, second.group)?;

    render(layout, table, &selections)
}

/// Builds the full report for `config`. Nothing is returned unless both
/// tables were read and analysed.
pub fn generate(config: &ReportConfig) -> Result<String, Error> {
    let mut report = String::new();

    for layout in LAYOUTS {
        let path = config.table_path(layout.suffix);
        info!("analysing {} timings from '{}'", layout.name, path.display());

        let table = Table::load(&path)?;
        report.push_str(&analyse(layout, &table)?);
    }
    Ok(report)
}
