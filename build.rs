use std::env;

fn main() {
    // ✅ Timestamp de compilación usando chrono
    let build_time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    // ✅ Versión desde Cargo.toml
    let version = env!("CARGO_PKG_VERSION");

    // ✅ Target platform (e.g., x86_64-pc-windows-msvc)
    let target = env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());

    // Perfil (debug/release) para el comando `version`
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=BARRIOS_TOOLS_VERSION={}", version);
    println!("cargo:rustc-env=BUILD_DATE={}", build_time);
    println!("cargo:rustc-env=BUILD_TARGET={}", target);
    println!("cargo:rustc-env=BUILD_PROFILE={}", profile);
    println!("cargo:rerun-if-changed=build.rs");
}
