// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// goal: turning a labelled CSV into training and validation
// batches.
//
// Rules for this layer:
//   - No text-processing logic here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern

// The data-preparation workflow
pub mod prepare_use_case;
