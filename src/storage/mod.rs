pub mod interface;
pub mod sessions;
#[cfg(test)]
pub mod tests;
