/// Build script that uses `cbuild` to compile the C sources in `csrc/`
/// into a static library before the Rust crate is built.
///
/// The archive (`libbridge.a`) is placed into `OUT_DIR`,
/// and the Rust linker is instructed to search there.
use cbuild::Cmd;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::var("OUT_DIR")?;

    Cmd::default()
        .set_path("csrc")
        .set_preset("bridge")
        .set_binary_path(format!("{}/obj", out_dir))
        .set_output_path(&out_dir)
        .build()?;

    println!("cargo::rustc-link-search=native={}", out_dir);
    println!("cargo::rustc-link-lib=static=bridge");

    println!("cargo::rerun-if-changed=csrc/bridge.c");
    println!("cargo::rerun-if-changed=csrc/bridge.h");
    println!("cargo::rerun-if-changed=csrc/BuildPresets.json");
    println!("cargo::rerun-if-env-changed=CC");
    println!("cargo::rerun-if-env-changed=AR");

    Ok(())
}
