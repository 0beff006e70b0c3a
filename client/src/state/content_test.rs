use super::*;

fn sample_profile() -> Profile {
    SiteContent::default().profile
}

// =============================================================
// Profile helpers
// =============================================================

#[test]
fn mailto_uses_email_verbatim() {
    assert_eq!(sample_profile().mailto(), "mailto:putintsev.ad@gmail.com");
}

#[test]
fn image_alt_names_subject() {
    assert_eq!(sample_profile().image_alt(), "Anton Putintsev headshot");
}

#[test]
fn image_src_skips_template_placeholder() {
    let profile = sample_profile();
    assert_eq!(profile.image.as_deref(), Some(IMAGE_PLACEHOLDER_SRC));
    assert_eq!(profile.image_src(), None);
}

#[test]
fn image_src_skips_missing_and_blank() {
    let mut profile = sample_profile();
    profile.image = None;
    assert_eq!(profile.image_src(), None);
    profile.image = Some("   ".to_owned());
    assert_eq!(profile.image_src(), None);
}

#[test]
fn image_src_returns_real_source() {
    let mut profile = sample_profile();
    profile.image = Some("/img/anton.jpg".to_owned());
    assert_eq!(profile.image_src(), Some("/img/anton.jpg"));
}

#[test]
fn initials_take_first_two_words() {
    assert_eq!(sample_profile().initials(), "AP");
    let mut profile = sample_profile();
    profile.name = "ada".to_owned();
    assert_eq!(profile.initials(), "A");
    profile.name = "jean luc van damme".to_owned();
    assert_eq!(profile.initials(), "JL");
    profile.name = String::new();
    assert_eq!(profile.initials(), "");
}

// =============================================================
// Default content
// =============================================================

#[test]
fn default_content_is_valid() {
    let content = SiteContent::default();
    assert_eq!(content.validate(), Ok(()));
    assert!(content.issues().is_empty());
}

#[test]
fn default_publications_keep_authoring_order() {
    let content = SiteContent::default();
    let journals: Vec<&str> = content.publications.iter().map(|p| p.journal.as_str()).collect();
    assert_eq!(
        journals,
        [
            "Nature Communications (2024)",
            "Physical Review B – Letter (2025)",
            "Physical Review Letters (2023)",
        ]
    );
    assert!(content.publications.iter().all(|p| p.indexed));
}

#[test]
fn default_full_publications_url_is_anchor() {
    assert_eq!(SiteContent::default().full_publications_url, "#publications");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_returns_first_issue_in_page_order() {
    let mut content = SiteContent::default();
    content.profile.email = "broken".to_owned();
    content.publications[1].title = "  ".to_owned();

    assert_eq!(
        content.validate(),
        Err(ContentError::InvalidEmail { field: "profile.email".to_owned(), value: "broken".to_owned() })
    );
    assert_eq!(content.issues().len(), 2);
}

#[test]
fn issues_flag_empty_publication_fields_with_index() {
    let mut content = SiteContent::default();
    content.publications[2].journal = String::new();
    assert_eq!(
        content.issues(),
        vec![ContentError::EmptyField { field: "publications[2].journal".to_owned() }]
    );
}

#[test]
fn issues_flag_relative_publication_link() {
    let mut content = SiteContent::default();
    content.publications[0].link = "paper.pdf".to_owned();
    let issues = content.issues();
    assert_eq!(issues.len(), 1);
    assert!(matches!(
        &issues[0],
        ContentError::DisallowedLink { field, kind: LinkTarget::Relative, .. } if field == "publications[0].link"
    ));
}

#[test]
fn resume_may_be_relative_or_absolute_but_not_anchor() {
    let mut content = SiteContent::default();
    content.profile.links.resume = "https://example.com/cv.pdf".to_owned();
    assert_eq!(content.validate(), Ok(()));
    content.profile.links.resume = "#cv".to_owned();
    assert!(content.validate().is_err());
}

#[test]
fn github_must_be_absolute() {
    let mut content = SiteContent::default();
    content.profile.links.github = "github.com/antonputintsev".to_owned();
    assert!(matches!(
        content.validate(),
        Err(ContentError::DisallowedLink { kind: LinkTarget::Relative, .. })
    ));
}

#[test]
fn empty_publication_list_is_valid() {
    let mut content = SiteContent::default();
    content.publications.clear();
    assert_eq!(content.validate(), Ok(()));
}

// =============================================================
// Serde
// =============================================================

#[test]
fn publication_deserializes_authoring_field_names() {
    let json = serde_json::json!({
        "title": "T",
        "journal": "J",
        "link": "https://example.com/t",
        "desc": "D"
    });
    let publication: Publication = serde_json::from_value(json).unwrap();
    assert_eq!(publication.description, "D");
    assert!(!publication.indexed);
}
