pub mod commit_expiration;
pub mod exercise;
pub mod find_due_expiration;
pub mod initialize_store;
pub mod issue_option;
pub mod option;
pub mod resolve;
pub mod settle;
pub mod transfer_instrument;

// Note: Glob imports are required for Anchor's #[program] macro
// The handler name collision is intentional - each module's handler is accessed via module path
#[allow(ambiguous_glob_reexports)]
pub use commit_expiration::*;
#[allow(ambiguous_glob_reexports)]
pub use exercise::*;
#[allow(ambiguous_glob_reexports)]
pub use find_due_expiration::*;
#[allow(ambiguous_glob_reexports)]
pub use initialize_store::*;
#[allow(ambiguous_glob_reexports)]
pub use issue_option::*;
#[allow(ambiguous_glob_reexports)]
pub use resolve::*;
#[allow(ambiguous_glob_reexports)]
pub use transfer_instrument::*;
pub use option::*;
