//! Network layer for the remote token-auth API.
//!
//! DESIGN
//! ======
//! `types` holds the wire DTOs and body parsing shared by every transport;
//! `transport` holds the HTTP seam the auth client is generic over.

pub mod transport;
pub mod types;
