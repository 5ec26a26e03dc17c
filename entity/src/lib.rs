//! SeaORM entities for the corredora database schema.
//!
//! Three tables back the whole system: the client roster (`clientes`), the
//! active policy book (`seguros`), and the lapsed-policy archive
//! (`ex_seguros`). A policy carries no status column; its active/expired
//! state is always derived from `vigencia_hasta` at query time.

pub mod cliente;
pub mod ex_seguro;
pub mod prelude;
pub mod seguro;
