// CareDirectory-api lib.rs
//
// This is the main library file for the CareDirectory API.
// It re-exports the APIs from the various modules.

// Public modules
pub mod api;
pub mod openapi;
