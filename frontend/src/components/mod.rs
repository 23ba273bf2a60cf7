pub mod contact;
pub mod layout;
pub mod projects;
