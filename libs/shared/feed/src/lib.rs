pub mod ehr;

pub use ehr::EhrFeedClient;
