//! Application layer: the payment processor and the batch runner built on it.
//!
//! `PaymentProcessor` owns one transaction attempt at a time and talks to the
//! gateway through a boxed `GatewayTransport`. `BatchRunner` drives a
//! processor over CSV requests for the command-line tool.

pub mod batch;
pub mod processor;
