//! Build Script for Auction Stream Client
//!
//! The protobuf stubs are checked in under `packages/schema-gen/rust/auction/v1/`
//! (regenerate them from `packages/proto/auction/v1/` with buf), so this script
//! only tracks their changes and emits the coverage cfg.

use std::env;

fn main() {
    // Rerun build script if it changes
    println!("cargo:rerun-if-changed=build.rs");

    // Rerun if the generated stubs change
    println!("cargo:rerun-if-changed=../../packages/schema-gen/rust/auction/v1/");

    // Emit cfg for coverage detection
    if env::var("CARGO_LLVM_COV").is_ok()
        || env::var("LLVM_PROFILE_FILE").is_ok()
        || env::var("RUSTFLAGS")
            .map(|f| f.contains("instrument-coverage"))
            .unwrap_or(false)
    {
        println!("cargo:rustc-cfg=coverage");
    }
}
