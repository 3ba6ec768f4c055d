fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let platform = std::env::var_os("CARGO_FEATURE_PLATFORM_LOCK").is_some();
    let external = std::env::var_os("CARGO_FEATURE_EXTERNAL_LOCK").is_some();
    if !platform && !external {
        println!(
            "cargo:warning=dispatcher built without a locking backend; \
             operations are NOT thread-safe unless a lock hook is installed \
             via Logger::set_lock_hook"
        );
    }
}
