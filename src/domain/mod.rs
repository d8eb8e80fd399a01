// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust structs and traits that name the concepts of the
// data-preparation pipeline.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, traits and the error type
//
// Everything in data/ and application/ is written in terms of
// these types, so a record read from CSV and a record built in
// a unit test look exactly the same to the pipeline.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Raw and cleaned text records
pub mod record;

// Ordered class list and one-hot label vectors
pub mod labels;

// Typed errors raised by the data layer
pub mod error;

// Seams for loading records and persisting the label dictionary
pub mod traits;
