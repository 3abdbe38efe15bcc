/// Numeric conversion helpers.
///
/// Small, explicit conversions between the integer and floating-point types
/// the evaluator moves between, so lossy casts live in one place.
pub mod num;
/// Logging setup.
///
/// Installs a `tracing` subscriber for the command-line front end. The
/// library itself only emits events and never installs a subscriber.
pub mod logger;
