use super::*;

fn config_in(dir: &Path) -> SiteConfig {
    SiteConfig { out_dir: dir.join("site"), ..SiteConfig::default() }
}

#[test]
fn export_writes_index_and_stylesheet() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());

    let summary = export_site(&SiteContent::default(), &config).unwrap();

    assert_eq!(summary.index_path, tmp.path().join("site/index.html"));
    assert_eq!(summary.publications, 3);
    let html = fs::read_to_string(&summary.index_path).unwrap();
    assert_eq!(html.len(), summary.index_bytes);
    assert!(html.contains("href=\"style.css\""));
    assert!(html.contains("Anton Putintsev"));
    let css = fs::read_to_string(&summary.stylesheet_path).unwrap();
    assert!(css.contains("@keyframes hero-enter"));
}

#[test]
fn export_rejects_invalid_content_without_writing() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());
    let mut content = SiteContent::default();
    content.publications[0].link = "not a url".to_owned();

    let err = export_site(&content, &config).unwrap_err();

    assert!(matches!(err, SiteError::Content(_)));
    assert!(!config.out_dir.exists());
}

#[test]
fn export_embeds_boot_script_when_wasm_configured() {
    let tmp = tempfile::tempdir().unwrap();
    let config = SiteConfig { wasm_pkg: Some("pkg/portfolio".to_owned()), ..config_in(tmp.path()) };

    let summary = export_site(&SiteContent::default(), &config).unwrap();

    let html = fs::read_to_string(summary.index_path).unwrap();
    assert!(html.contains("from 'pkg/portfolio.js'"));
}

#[test]
fn export_reports_io_error_with_path() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "file, not a directory").unwrap();
    let config = SiteConfig { out_dir: blocker.join("site"), ..SiteConfig::default() };

    let err = export_site(&SiteContent::default(), &config).unwrap_err();

    match err {
        SiteError::Io { path, .. } => assert_eq!(path, blocker.join("site")),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn exported_stylesheet_disables_hero_animation_for_reduced_motion_viewers() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path());

    let summary = export_site(&SiteContent::default(), &config).unwrap();

    let html = fs::read_to_string(&summary.index_path).unwrap();
    assert!(html.contains("hero__media--enter"));
    assert!(!html.contains("<script"));
    let css = fs::read_to_string(&summary.stylesheet_path).unwrap();
    let (_, reduced) = css.split_once("@media (prefers-reduced-motion: reduce)").unwrap();
    let block = &reduced[..reduced.find("\n}").unwrap()];
    assert!(block.contains(".hero__media--enter { animation: none; }"));
}
