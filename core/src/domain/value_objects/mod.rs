//! Value objects exchanged with the host UI.

pub mod destination;

pub use destination::Destination;
