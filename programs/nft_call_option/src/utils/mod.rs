pub mod accounts;
pub mod custody;
pub mod pda;
pub mod settlement;
pub mod validation;

pub use accounts::*;
pub use custody::*;
pub use pda::*;
pub use settlement::*;
pub use validation::*;
