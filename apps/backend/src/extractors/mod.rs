pub mod auth_token;
pub mod current_professor;

pub use auth_token::AuthToken;
pub use current_professor::CurrentProfessor;
