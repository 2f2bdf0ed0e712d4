#[allow(non_snake_case)]
pub mod Dilution;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Solutions;
