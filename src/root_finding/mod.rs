// common helpers 
pub mod algorithms; 
pub mod report; 
pub mod errors; 
pub mod signs; 
pub mod quadratic; 
pub(crate) mod config;
pub(crate) mod common; 

// algorithms 
pub mod bisection;
pub mod muller;
pub mod regula_falsi;

// facade 
pub mod finder; 
pub use finder::RootFinder; 
