/// The `Value` enum and its conversions, truthiness and display.
pub mod core;

/// User-defined function values and their captured scope.
pub mod function;
