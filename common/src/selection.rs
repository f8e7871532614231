use log::{debug, warn};

use crate::{
    error::{
        Error,
        ErrorKind::{ColumnOutOfRange, EmptyGroup},
    },
    table::Table,
};

/// A column attaining its group's minimum, with every row holding that value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Winner {
    pub column: usize,
    pub rows: Vec<usize>,
}

/// Outcome of a minimum query over one candidate group.
///
/// `winners` follows the order of the group's column indices. Ties across
/// columns are all kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub minimum: u64,
    pub winners: Vec<Winner>,
}

impl Selection {
    pub fn winning_columns(&self) -> Vec<usize> {
        self.winners.iter().map(|w| w.column).collect()
    }
}

/// Smallest value of `values` ignoring the zero "not measured" sentinel.
pub fn min_nonzero(values: &[u64]) -> Option<u64> {
    values.iter().copied().filter(|v| *v != 0).min()
}

pub fn select_minima(table: &Table, group: &[usize]) -> Result<Selection, Error> {
    let mut column_minima: Vec<(usize, &[u64], Option<u64>)> = Vec::with_capacity(group.len());

    for &column in group {
        let values = table
            .column(column)
            .ok_or_else(|| Error::from_kind(ColumnOutOfRange(column, table.n_columns())))?;

        let minimum = min_nonzero(values);
        if minimum.is_none() {
            warn!("column {column} holds no measured value, skipping it");
        }
        column_minima.push((column, values, minimum));
    }

    let minimum = column_minima
        .iter()
        .filter_map(|(_, _, m)| *m)
        .min()
        .ok_or_else(|| Error::from_kind(EmptyGroup(group.to_vec())))?;

    let winners: Vec<Winner> = column_minima
        .into_iter()
        .filter(|(_, _, m)| *m == Some(minimum))
        .map(|(column, values, _)| Winner {
            column,
            rows: values
                .iter()
                .enumerate()
                .filter(|(_, v)| **v == minimum)
                .map(|(row, _)| row)
                .collect(),
        })
        .collect();

    debug!(
        "group {:?}: minimum {} attained by columns {:?}",
        group,
        minimum,
        winners.iter().map(|w| w.column).collect::<Vec<usize>>()
    );

    Ok(Selection { minimum, winners })
}

/// Runs [`select_minima`] over the two disjoint groups of one table.
pub fn select_family_minima(
    table: &Table,
    first: &[usize],
    second: &[usize],
) -> Result<(Selection, Selection), Error> {
    Ok((select_minima(table, first)?, select_minima(table, second)?))
}
