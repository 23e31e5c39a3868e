pub mod catalog_source;
pub mod client;
pub mod order_submitter;
