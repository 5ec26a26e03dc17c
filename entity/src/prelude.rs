pub use super::cliente::Entity as Cliente;
pub use super::ex_seguro::Entity as ExSeguro;
pub use super::seguro::Entity as Seguro;
