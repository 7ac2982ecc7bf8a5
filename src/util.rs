/// Number rendering helpers.
///
/// Values are `f64` throughout the interpreter; these helpers decide how they
/// read when printed.
pub mod num;
