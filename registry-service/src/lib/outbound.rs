pub mod principals;
pub mod repositories;
