// SPDX-License-Identifier: MPL-2.0

pub fn init() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        // Set the environment variable `RUST_LOG` to one of `TRACE`, `DEBUG`, `INFO`, `WARN`, or
        // `ERROR`. Without it, only `INFO` and above are shown.
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        // Standard output is reserved for the dumps themselves.
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_level(true)
        .with_target(false)
        .without_time()
        .init();
}
