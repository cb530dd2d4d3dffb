//=========================================================================
// Logger
//=========================================================================
//
// env_logger setup for the binary. `RUST_LOG` overrides the default
// filter entirely.
//
//=========================================================================

use log::debug;

/// Crate at `info`, the noisy graphics and windowing crates at `warn`.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn,winit=warn";

/// Installs the global logger. Later calls are no-ops.
pub fn init() {
    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_millis()
        .try_init();

    if result.is_err() {
        debug!("Logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init();
        init();
    }

    #[test]
    fn default_filter_quiets_backends() {
        for target in ["wgpu_core", "wgpu_hal", "naga", "winit"] {
            assert!(DEFAULT_FILTER.contains(&format!("{}=warn", target)));
        }
        assert!(DEFAULT_FILTER.starts_with("info"));
    }
}
