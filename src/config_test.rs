use super::*;

#[test]
fn default_config_writes_to_dist_without_script() {
    let config = SiteConfig::default();
    assert_eq!(config.out_dir, PathBuf::from("dist"));
    assert_eq!(config.index_path(), PathBuf::from("dist/index.html"));
    assert_eq!(config.stylesheet_path(), PathBuf::from("dist/style.css"));
    assert_eq!(config.shell_assets(), ShellAssets::default());
}

#[test]
fn render_env_defaults_to_full_motion() {
    let env = SiteConfig::default().render_env();
    assert!(!env.reduced_motion);
}

#[test]
fn render_env_honours_forced_reduced_motion() {
    let config = SiteConfig { reduced_motion: true, ..SiteConfig::default() };
    assert!(config.render_env().reduced_motion);
}

#[test]
fn shell_assets_normalize_wasm_pkg() {
    let config = SiteConfig { wasm_pkg: Some(" pkg/portfolio.js ".to_owned()), ..SiteConfig::default() };
    assert_eq!(config.shell_assets().wasm_pkg.as_deref(), Some("pkg/portfolio"));

    let blank = SiteConfig { wasm_pkg: Some("  ".to_owned()), ..SiteConfig::default() };
    assert_eq!(blank.shell_assets().wasm_pkg, None);
}
