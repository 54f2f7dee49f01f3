use monopack_config::is_js_identifier;

/// Parse and validate the global variable name of a UMD bundle.
///
/// Valid identifiers: deck, _internal, $jquery, lib123
/// Invalid identifiers: 123abc, my-lib, my.lib, ""
pub fn parse_global(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Global name cannot be empty".to_string());
    }

    if !is_js_identifier(s) {
        return Err(format!(
            "Global name must start with a letter, underscore, or dollar sign and contain only letters, numbers, underscores, or dollar signs: '{}'",
            s
        ));
    }

    Ok(s.to_string())
}
