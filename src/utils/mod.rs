pub mod error;
pub mod logger;
pub mod opener;
pub mod validation;
