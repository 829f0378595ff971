//! Domain models and operation parameter types.
//!
//! Each module pairs the domain model for one entity with the parameter
//! structs its operations accept. Conversions to and from the entity layer
//! (`from_entity`) and the wire layer (`into_dto`) live here so that neither
//! repositories nor controllers deal with foreign shapes.

pub mod auth;
pub mod comment;
pub mod event;
pub mod favorite;
pub mod user;
pub mod venue;
