/// Integer helpers.
///
/// This module holds the arbitrary-precision integer routines shared by the
/// value coercions and the numeric primitives: reading an integer prefix out
/// of a string and the floor and truncating division variants.
pub mod num;
