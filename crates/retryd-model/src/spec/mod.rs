mod retry;
pub use retry::RetrySpec;
