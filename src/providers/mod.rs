pub mod ecb;

pub use ecb::EcbFeedProvider;
