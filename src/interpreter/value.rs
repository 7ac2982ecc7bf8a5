/// Object values.
///
/// Defines `ObjectValue`, an insertion-ordered key/value map. Writing an
/// existing key replaces its value in place, so the key keeps its original
/// position.
pub mod object;
/// Callable values.
///
/// Defines user-defined functions, which carry the environment they were
/// declared in, and native functions supplied by the host.
pub mod function;

pub mod core;
