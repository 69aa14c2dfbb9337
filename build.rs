use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let target = env::var("TARGET").unwrap_or_default();
    if !target.contains("avr") {
        // Host builds only carry the library and its tests
        return;
    }

    // Configure for ATmega128
    println!("cargo:rustc-link-arg=-mmcu=atmega128");

    println!("cargo:warning=Building for ATmega128 at 16MHz");
    if env::var("CARGO_FEATURE_DEBUG").is_ok() {
        println!("cargo:warning=Debug logging enabled");
    }
}
