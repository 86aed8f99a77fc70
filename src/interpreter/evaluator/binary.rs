/// Dispatch of binary operators to their handlers.
pub mod core;

/// Arithmetic on numbers and string concatenation.
pub mod arithmetic;

/// List append, element removal and indexing.
pub mod list;

/// Equality and ordering comparisons.
pub mod comparison;

/// Logical conjunction and disjunction.
pub mod logic;
