pub mod answer;
pub mod question;
pub mod spec;
pub mod view;
