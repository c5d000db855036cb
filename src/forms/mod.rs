//! Forms Module
//!
//! Login and registration workflows: input validation, credential
//! lookup/creation, and session establishment. Rendering goes through
//! the `FormRenderer` contract; the controllers never touch a DOM.

pub mod login;
pub mod register;
pub mod types;
pub mod validate;

pub use login::LoginController;
pub use register::RegisterController;
pub use types::{
    Field, FormRenderer, LoginForm, LoginOutcome, RegisterForm, RegisterOutcome,
};
