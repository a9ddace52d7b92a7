/// Absolute path of a file from the test resources of the crate.
///
/// Based on https://stackoverflow.com/a/74550371
#[macro_export]
macro_rules! test_ressource {
    ($fname:expr) => {
        concat!(env!("CARGO_MANIFEST_DIR"), "/ressources/tests/", $fname) // assumes Linux ('/')!
    };
}
