pub mod aggregate;
pub mod deductions;
pub mod dimensions;
pub mod handlers;
