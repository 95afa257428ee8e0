pub mod clock;
pub mod interrupt;
pub mod tick;
pub mod timer;
