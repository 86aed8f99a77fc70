/// Function definitions and calls.
///
/// Builds closures, checks arity and runs user-defined functions in their
/// own context.
pub mod core;
/// The built-in function table and its dispatch.
pub mod builtin;
/// The `PRINT` function.
pub mod print;
/// The `NOW` function.
///
/// Reports the current UTC time as text.
pub mod now;
/// The `LEN` function.
pub mod len;
/// The `VERSION` and `HELP` functions.
pub mod info;
