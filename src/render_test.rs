use super::*;

fn env() -> RenderEnv {
    RenderEnv { reduced_motion: false, year: 2026 }
}

#[test]
fn renders_document_with_every_region() {
    let html = render_document(&SiteContent::default(), env(), &ShellAssets::default());
    assert!(html.to_ascii_lowercase().starts_with("<!doctype html>"));
    for marker in ["site-header", "class=\"hero\"", "id=\"work\"", "id=\"about\"", "id=\"contact\"", "site-footer"] {
        assert!(html.contains(marker), "missing {marker}");
    }
    assert!(html.contains("© 2026 Anton Putintsev"));
}

#[test]
fn rendering_is_deterministic_for_same_inputs() {
    let content = SiteContent::default();
    let assets = ShellAssets::default();
    assert_eq!(render_document(&content, env(), &assets), render_document(&content, env(), &assets));
}

#[test]
fn reduced_motion_changes_only_hero_motion() {
    let content = SiteContent::default();
    let assets = ShellAssets::default();
    let animated = render_document(&content, env(), &assets);
    let still = render_document(&content, RenderEnv { reduced_motion: true, year: 2026 }, &assets);
    assert!(animated.contains("hero__media--enter"));
    assert!(!still.contains("hero__media--enter"));
    assert!(still.contains("opacity:1;transform:translateY(0px)"));
}

#[test]
fn empty_publications_render_without_cards() {
    let mut content = SiteContent::default();
    content.publications.clear();
    let html = render_document(&content, env(), &ShellAssets::default());
    assert!(!html.contains("<article"));
    assert!(html.contains("Highlighted Publications"));
}
