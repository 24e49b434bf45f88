/// Numeric conversion helpers.
///
/// Provides checked promotion between integer and floating-point types,
/// used wherever evaluation mixes integers and reals.
pub mod num;
