pub mod build;
pub mod check;
pub mod serve;

#[cfg(test)]
pub(crate) mod testing;
