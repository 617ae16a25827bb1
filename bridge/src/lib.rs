//! Rust side of the native `bridge` library compiled from `csrc/` by the
//! build script.

mod ffi {
    unsafe extern "C" {
        // Prints one line to stdout and flushes it.
        pub fn call_c_function();
    }
}

/// Calls into the C library. Takes no arguments and returns nothing.
pub fn call_c_function() {
    unsafe { ffi::call_c_function() };
}
