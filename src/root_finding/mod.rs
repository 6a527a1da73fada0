// common helpers 
pub mod algorithms; 
pub mod config;
pub mod errors; 
pub mod interval;
pub mod report; 
pub(crate) mod signs; 

// algorithms 
pub mod bisection;
pub mod newton;
pub mod secant;

// sign-change detection 
pub mod scan;
