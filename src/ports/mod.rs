pub mod guest_repository;

#[cfg(test)]
pub(crate) mod testing;
