use crate::exact::Exact;
use crate::one_of::{OneOf, OrExt};

/// `-h` or `--help`, recorded under the `help` key
///
/// Each call builds a fresh parser.
pub fn help() -> OneOf {
    Exact::new("help", "-h").or(Exact::new("help", "--help"))
}
