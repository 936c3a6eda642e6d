mod macros;

/// Returns the version string reported by the command line interface.
pub fn contact_form_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
