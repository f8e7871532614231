pub mod error;
pub mod selection;
pub mod table;

/// Columns shared by every timing table: N then t.
pub const N_COLUMN: usize = 0;
pub const T_COLUMN: usize = 1;
