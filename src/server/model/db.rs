//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models so the rest of the server
//! does not import from the generated `entity` crate directly.

/// A row of the client roster (`clientes`).
pub type ClientModel = entity::cliente::Model;

/// A row of the active policy book (`seguros`).
pub type PolicyModel = entity::seguro::Model;

/// A row of the lapsed-policy archive (`ex_seguros`).
pub type LapsedPolicyModel = entity::ex_seguro::Model;
