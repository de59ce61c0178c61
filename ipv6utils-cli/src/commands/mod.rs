pub mod arpa;
pub mod convert;
pub mod format;
pub mod mac;
pub mod subnets;
