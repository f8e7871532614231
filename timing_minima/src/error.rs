use error_chain::error_chain;

error_chain! {
    links {
        Common(common::error::Error, common::error::ErrorKind);
    }
    errors{
        Usage(t: String) {
            description("Invalid command line argument")
            display("{}", t)
        }
        LayoutMismatch(layout: &'static str, expected: usize, found: usize) {
            description("Timing table width does not match its layout")
            display("The {} table should have {} columns but has {}.", layout, expected, found)
        }
        MissingCompanion(family: &'static str, column: usize) {
            description("Winning column has no companion columns to report")
            display("No companion columns are defined for {} winner column {}", family, column)
        }
    }
}
