pub mod limit;
pub mod tasks;

#[cfg(test)]
pub mod testing;
