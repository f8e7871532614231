use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::debug;

use crate::error::{
    Error,
    ErrorKind::{EmptyTable, FileAccess, MalformedTable, ParseField},
    ResultExt,
};

/// Column-major integer table: `columns[j][i]` holds column `j` of row `i`.
///
/// Column 0 is N and column 1 is t; the remaining columns hold timings whose
/// meaning depends on the file the table was read from. Rows keep file order,
/// so a row index identifies the same measurement in every column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Vec<u64>>,
}

impl Table {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let source = path.display().to_string();

        let file = File::open(path).chain_err(|| FileAccess(source.clone()))?;
        let table = Self::from_reader(BufReader::new(file), &source)?;

        debug!(
            "loaded '{}': {} rows x {} columns",
            source,
            table.n_rows(),
            table.n_columns()
        );
        Ok(table)
    }

    /// Parses tab (or whitespace) separated rows. Blank lines are skipped,
    /// `source` only names the input in error messages.
    pub fn from_reader<R: BufRead>(reader: R, source: &str) -> Result<Self, Error> {
        let mut columns: Vec<Vec<u64>> = vec![];

        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line.chain_err(|| FileAccess(source.to_string()))?;

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }

            let row = fields
                .iter()
                .map(|field| {
                    field
                        .parse::<u64>()
                        .chain_err(|| ParseField(source.to_string(), line_no, field.to_string()))
                })
                .collect::<Result<Vec<u64>, Error>>()?;

            push_row(&mut columns, row, source, line_no)?;
        }

        if columns.is_empty() {
            return Err(EmptyTable(source.to_string()).into());
        }
        Ok(Self { columns })
    }

    pub fn from_rows(rows: &[Vec<u64>]) -> Result<Self, Error> {
        let mut columns: Vec<Vec<u64>> = vec![];
        for (index, row) in rows.iter().enumerate() {
            push_row(&mut columns, row.clone(), "<memory>", index + 1)?;
        }

        if columns.is_empty() {
            return Err(EmptyTable("<memory>".to_string()).into());
        }
        Ok(Self { columns })
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn column(&self, index: usize) -> Option<&[u64]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    pub fn value(&self, column: usize, row: usize) -> Option<u64> {
        self.columns.get(column)?.get(row).copied()
    }
}

fn push_row(
    columns: &mut Vec<Vec<u64>>,
    row: Vec<u64>,
    source: &str,
    line_no: usize,
) -> Result<(), Error> {
    if columns.is_empty() {
        columns.resize_with(row.len(), Vec::new);
    } else if row.len() != columns.len() {
        return Err(MalformedTable(source.to_string(), line_no, columns.len(), row.len()).into());
    }

    columns
        .iter_mut()
        .zip(row)
        .for_each(|(column, value)| column.push(value));
    Ok(())
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use crate::{error::ErrorKind, table::Table};

    #[test]
    fn column_major_layout() {
        let input = "10\t2\t5\t9\n10\t3\t5\t7\n20\t2\t3\t0\n";
        let table = Table::from_reader(Cursor::new(input), "edtime").unwrap();

        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.n_columns(), 4);
        assert_eq!(table.column(0).unwrap(), &[10, 10, 20]);
        assert_eq!(table.column(3).unwrap(), &[9, 7, 0]);
        assert_eq!(table.value(1, 1), Some(3));
        assert_eq!(table.value(4, 0), None);
        assert_eq!(table.value(0, 3), None);
    }

    #[test]
    fn whitespace_and_blank_lines() {
        let input = "\n16  7 \t 120\n\n32\t15\t240\n\n";
        let table = Table::from_reader(Cursor::new(input), "sctime").unwrap();

        assert_eq!(
            table,
            Table::from_rows(&[vec![16, 7, 120], vec![32, 15, 240]]).unwrap()
        );
    }

    #[test]
    fn ragged_rows() {
        let input = "1\t2\t3\n4\t5\t6\n7\t8\n";
        let err = Table::from_reader(Cursor::new(input), "ragged").unwrap_err();

        match err.kind() {
            ErrorKind::MalformedTable(path, line, expected, found) => {
                assert_eq!(path, "ragged");
                assert_eq!((*line, *expected, *found), (3, 3, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_integer_fields() {
        for (input, bad) in [("1\t2\tx3\n", "x3"), ("1\t-2\t3\n", "-2"), ("1\t2.5\t3\n", "2.5")] {
            let err = Table::from_reader(Cursor::new(input), "bad").unwrap_err();
            match err.kind() {
                ErrorKind::ParseField(_, line, field) => {
                    assert_eq!(*line, 1);
                    assert_eq!(field, bad);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn empty_input() {
        let err = Table::from_reader(Cursor::new("\n\n"), "empty").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::EmptyTable(_)));

        let err = Table::from_rows(&[]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::EmptyTable(_)));
    }

    #[test]
    fn missing_file() {
        let err = Table::load("no/such/dir/full_rawedtime.txt").unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::FileAccess(_)));
        assert!(err.iter().nth(1).is_some(), "io error should be chained");
    }
}
