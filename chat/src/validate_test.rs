use super::*;

#[test]
fn blank_drafts_are_rejected_silently() {
    for draft in ["", " ", "\n\t  "] {
        assert_eq!(message_draft(draft), Err(DraftRejection::Blank));
    }
    assert_eq!(DraftRejection::Blank.message(), None);
}

#[test]
fn draft_is_sent_untrimmed() {
    assert_eq!(message_draft("  hi  "), Ok("  hi  "));
}

#[test]
fn draft_length_counts_characters_not_bytes() {
    let at_limit = "я".repeat(MESSAGE_MAX_CHARS);
    assert!(message_draft(&at_limit).is_ok());

    let over = "a".repeat(MESSAGE_MAX_CHARS + 1);
    assert_eq!(message_draft(&over), Err(DraftRejection::TooLong));
    assert_eq!(DraftRejection::TooLong.message(), Some(text::MESSAGE_TOO_LONG));
}

#[test]
fn credentials_are_sent_as_typed() {
    let creds = credentials("  alice ", " secret1 ").unwrap();
    assert_eq!(creds.username, "  alice ");
    assert_eq!(creds.password, " secret1 ");
}

#[test]
fn whitespace_fields_pass_the_required_check() {
    let creds = credentials("   ", "x").unwrap();
    assert_eq!(creds.username, "   ");
}

#[test]
fn credentials_require_both_fields() {
    assert_eq!(credentials("", "secret1"), Err(text::FIELDS_REQUIRED));
    assert_eq!(credentials("alice", ""), Err(text::FIELDS_REQUIRED));
    assert_eq!(credentials("", "x"), Err(text::FIELDS_REQUIRED));
}
