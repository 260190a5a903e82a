pub mod contact_number;
pub mod display_name;
pub mod email;

pub use contact_number::ContactNumber;
pub use display_name::DisplayName;
pub use email::Email;
