pub mod company;
pub mod employee;
