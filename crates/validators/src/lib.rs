// validators crate

mod fields;
mod records;
mod users;

pub use fields::validate_fields;
pub use records::validate_record;
pub use users::{validate_users, validate_users_str};
