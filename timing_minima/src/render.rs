use common::{
    N_COLUMN, T_COLUMN,
    error::ErrorKind::{ColumnOutOfRange, RowOutOfRange},
    selection::Selection,
    table::Table,
};

use crate::{
    error::{Error, ErrorKind::MissingCompanion},
    layout::{Family, Layout},
};

fn cell(table: &Table, column: usize, row: usize) -> Result<u64, Error> {
    table.value(column, row).ok_or_else(|| {
        let kind = if column >= table.n_columns() {
            ColumnOutOfRange(column, table.n_columns())
        } else {
            RowOutOfRange(row, table.n_rows())
        };
        common::error::Error::from_kind(kind).into()
    })
}

/// One output line: N and t of `row` followed by the companion columns.
pub fn render_row(
    layout: &Layout,
    table: &Table,
    row: usize,
    companions: &[usize],
) -> Result<String, Error> {
    let mut fields = vec![
        format!("{} {}", layout.labels[N_COLUMN], cell(table, N_COLUMN, row)?),
        format!("{} {}", layout.labels[T_COLUMN], cell(table, T_COLUMN, row)?),
    ];
    for &column in companions {
        let label = layout.labels.get(column).copied().unwrap_or("?");
        fields.push(format!("{:<2} {}", label, cell(table, column, row)?));
    }
    Ok(fields.join("\t"))
}

pub fn render_family(
    out: &mut String,
    layout: &Layout,
    family: &Family,
    table: &Table,
    selection: &Selection,
) -> Result<(), Error> {
    out.push_str(family.heading);
    out.push('\n');

    for winner in &selection.winners {
        let companions = family
            .companions_of(winner.column)
            .ok_or_else(|| Error::from_kind(MissingCompanion(family.name, winner.column)))?;

        for &row in &winner.rows {
            out.push_str(&render_row(layout, table, row, companions)?);
            out.push('\n');
        }
    }
    Ok(())
}

/// Renders both families of `layout`; `selections` is in family order.
pub fn render(
    layout: &Layout,
    table: &Table,
    selections: &(Selection, Selection),
) -> Result<String, Error> {
    let [first, second] = &layout.families;

    let mut out = String::new();
    render_family(&mut out, layout, first, table, &selections.0)?;
    render_family(&mut out, layout, second, table, &selections.1)?;
    Ok(out)
}
