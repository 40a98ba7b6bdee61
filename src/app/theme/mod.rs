//! Theme Module
//!
//! Color palette for the client UI.

pub mod colors;
