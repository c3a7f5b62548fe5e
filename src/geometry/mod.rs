pub mod hit_testing;
pub mod layout;

pub use hit_testing::{first_hit, hits};
