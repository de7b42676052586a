pub mod access_token;
pub mod user;

pub use access_token::AccessToken;
pub use user::User;
