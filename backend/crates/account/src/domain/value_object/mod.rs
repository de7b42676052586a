//! Value Objects

pub mod card_number;
pub mod contact;
pub mod country;
pub mod expiry_date;

pub use card_number::CardNumber;
pub use contact::ContactDetails;
pub use country::Country;
pub use expiry_date::ExpiryDate;
