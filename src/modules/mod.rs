pub mod blog;
pub mod contact;
pub mod content;
pub mod email;
pub mod profile;
pub mod project;
pub mod site;
pub mod skill;
pub mod theme;
