#[cfg(any(feature = "ch32v20x", feature = "ch32v30x", feature = "ch32x035"))]
pub mod ch32v;
