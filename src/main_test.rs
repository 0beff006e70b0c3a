use super::*;

#[test]
fn issue_report_lists_each_issue_once() {
    let mut content = SiteContent::default();
    content.profile.email = "broken".to_owned();
    content.publications[0].title = String::new();

    let report = issue_report(&content.issues());

    assert_eq!(report.lines().count(), 2);
    assert_eq!(report.matches("profile.email").count(), 1);
    assert_eq!(report.matches("publications[0].title").count(), 1);
}

#[test]
fn issue_report_is_empty_for_valid_content() {
    assert_eq!(issue_report(&SiteContent::default().issues()), "");
}
