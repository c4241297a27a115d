pub mod error;
pub use error::KdSearchError;

#[cfg(test)]
mod tests {
    mod error_tests;
}
