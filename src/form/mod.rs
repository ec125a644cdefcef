pub mod controller;
pub mod validation;
