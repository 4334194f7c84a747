//! Driven adapters on the outbound edge of the hexagon.

pub mod persistence;
