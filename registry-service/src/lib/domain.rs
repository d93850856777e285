pub mod company;
pub mod employee;
pub mod registration;
pub mod values;
