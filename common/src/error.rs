use error_chain::error_chain;

error_chain! {
    errors{
        FileAccess(path: String) {
            description("Unable to read timing table")
            display("Unable to read timing table '{}'", path)
        }
        MalformedTable(path: String, line: usize, expected: usize, found: usize) {
            description("Inconsistent column count in timing table")
            display("Inconsistent column count in '{}' at line {}: expected {} fields, found {}.", path, line, expected, found)
        }
        ParseField(path: String, line: usize, field: String) {
            description("Timing table field is not a non-negative integer")
            display("Field '{}' in '{}' at line {} is not a non-negative integer", field, path, line)
        }
        EmptyTable(path: String) {
            description("Timing table holds no rows")
            display("Timing table '{}' holds no rows", path)
        }
        ColumnOutOfRange(column: usize, count: usize) {
            description("Candidate column index is past the table width")
            display("Candidate column {} is out of range: the table has {} columns", column, count)
        }
        RowOutOfRange(row: usize, count: usize) {
            description("Row index is past the table end")
            display("Row {} is out of range: the table has {} rows", row, count)
        }
        EmptyGroup(columns: Vec<usize>) {
            description("Candidate group holds no measured (non-zero) value")
            display("Candidate group {:?} holds no measured (non-zero) value; refusing to report 0 as its minimum", columns)
        }
    }
}
