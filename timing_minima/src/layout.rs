//! Column layouts of the two timing tables.
//!
//! Which columns compete for a minimum and which columns are printed next to
//! a winner is plain data here; the renderer refuses a winner that has no
//! entry instead of printing nothing for it.

use common::table::Table;

use crate::error::{Error, ErrorKind::LayoutMismatch};

/// Columns printed after N and t when `winner` attains a family's minimum.
#[derive(Debug)]
pub struct Companion {
    pub winner: usize,
    pub columns: &'static [usize],
}

#[derive(Debug)]
pub struct Family {
    pub name: &'static str,
    pub heading: &'static str,
    pub group: &'static [usize],
    pub companions: &'static [Companion],
}

impl Family {
    pub fn companions_of(&self, winner: usize) -> Option<&'static [usize]> {
        self.companions
            .iter()
            .find(|c| c.winner == winner)
            .map(|c| c.columns)
    }
}

#[derive(Debug)]
pub struct Layout {
    pub name: &'static str,
    pub suffix: &'static str,
    pub labels: &'static [&'static str],
    pub families: [Family; 2],
}

impl Layout {
    pub fn check(&self, table: &Table) -> Result<(), Error> {
        if table.n_columns() != self.labels.len() {
            return Err(LayoutMismatch(self.name, self.labels.len(), table.n_columns()).into());
        }
        Ok(())
    }
}

// N t E D D1 E2 D2 E3 D3
pub static CRYPTO: Layout = Layout {
    name: "cryptographic",
    suffix: "rawedtime",
    labels: &["N", "t", "E", "D", "D1", "E2", "D2", "E3", "D3"],
    families: [
        Family {
            name: "encryption",
            heading: "The smallest encryption values are:",
            group: &[2, 5, 7],
            companions: &[
                Companion {
                    winner: 2,
                    columns: &[2, 3, 4],
                },
                Companion {
                    winner: 5,
                    columns: &[5, 6],
                },
                Companion {
                    winner: 7,
                    columns: &[7, 8],
                },
            ],
        },
        Family {
            name: "decryption",
            heading: "The smallest decryption values are:",
            group: &[3, 4, 6, 8],
            companions: &[
                Companion {
                    winner: 3,
                    columns: &[2, 3],
                },
                Companion {
                    winner: 4,
                    columns: &[2, 4],
                },
                Companion {
                    winner: 6,
                    columns: &[5, 6],
                },
                Companion {
                    winner: 8,
                    columns: &[7, 8],
                },
            ],
        },
    ],
};

// N t S C S2 C2 S3 C3
pub static HOMOMORPHIC: Layout = Layout {
    name: "homomorphic",
    suffix: "rawsctime",
    labels: &["N", "t", "S", "C", "S2", "C2", "S3", "C3"],
    families: [
        Family {
            name: "evalsum",
            heading: "The smallest EvalSum values are:",
            group: &[2, 4, 6],
            companions: &[
                Companion {
                    winner: 2,
                    columns: &[2, 3],
                },
                Companion {
                    winner: 4,
                    columns: &[4, 5],
                },
                Companion {
                    winner: 6,
                    columns: &[6, 7],
                },
            ],
        },
        Family {
            name: "evalscal",
            heading: "The smallest EvalScal values are:",
            group: &[3, 5, 7],
            companions: &[
                Companion {
                    winner: 3,
                    columns: &[2, 3],
                },
                Companion {
                    winner: 5,
                    columns: &[4, 5],
                },
                Companion {
                    winner: 7,
                    columns: &[6, 7],
                },
            ],
        },
    ],
};

/// Tables in report order.
pub static LAYOUTS: [&Layout; 2] = [&CRYPTO, &HOMOMORPHIC];
