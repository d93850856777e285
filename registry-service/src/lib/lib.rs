pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::company;
pub use domain::employee;
pub use domain::registration;
pub use outbound::repositories;
