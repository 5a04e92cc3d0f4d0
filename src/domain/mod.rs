pub mod field;
pub mod gateway;
pub mod payment;
pub mod ports;
pub mod response;
pub mod transaction;
pub mod validation;
