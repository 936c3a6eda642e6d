//! Enables the pretty log formatter when built with `RUST_LOG_PRETTY=1`.

const PRETTY_ENV: &str = "RUST_LOG_PRETTY";

fn main() {
    println!("cargo::rustc-check-cfg=cfg(tracing_pretty)");
    println!("cargo::rerun-if-env-changed={PRETTY_ENV}");

    let pretty = std::env::var(PRETTY_ENV).is_ok_and(|value| value == "1");
    if pretty {
        println!("cargo::rustc-cfg=tracing_pretty");
    }
}
