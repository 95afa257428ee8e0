/// Stop the processor after an unrecoverable fault.
///
/// Interrupts are masked and the core spins forever, so no handler runs and no
/// state changes after entry.
pub fn halt() -> ! {
    #[cfg(target_arch = "riscv32")]
    unsafe {
        riscv::register::mstatus::clear_mie();
    }

    loop {
        core::hint::spin_loop();
    }
}
