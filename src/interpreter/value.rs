/// The `Value` tree shared by the parser and the evaluator, its printer and
/// its argument coercions.
pub mod core;
