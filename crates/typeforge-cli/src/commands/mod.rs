pub mod check;
pub mod normalize;
pub mod types_loader;

#[cfg(test)]
mod test_utils;
