pub(crate) mod generate;
pub(crate) mod solve;
