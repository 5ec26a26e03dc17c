//! Mock-data factories. Each factory returns an `ActiveModel` with
//! plausible defaults; tests override individual fields before inserting.

pub mod cliente;
pub mod seguro;

pub use cliente::mock_cliente;
pub use seguro::{mock_ex_seguro, mock_seguro};
