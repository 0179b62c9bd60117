use super::*;
use crate::state::chat::ReplySnapshot;

fn msg(id: Option<&str>, user: &str, text: &str) -> ChatMessage {
    ChatMessage {
        id: id.map(str::to_owned),
        user: user.to_owned(),
        text: text.to_owned(),
        time: "10:00".to_owned(),
        reply_to: None,
    }
}

#[test]
fn empty_list_projects_to_nothing() {
    assert!(message_views(&[], Some("Al")).is_empty());
}

#[test]
fn one_row_per_message_in_order() {
    let rows = message_views(&[msg(Some("1"), "Al", "a"), msg(Some("2"), "Bo", "b")], Some("Al"));
    let texts: Vec<_> = rows.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, ["a", "b"]);
}

#[test]
fn is_me_follows_current_username() {
    let rows = message_views(&[msg(Some("1"), "Al", "a"), msg(Some("2"), "Bo", "b")], Some("Al"));
    assert!(rows[0].is_me);
    assert!(!rows[1].is_me);

    let anonymous = message_views(&[msg(Some("1"), "Al", "a")], None);
    assert!(!anonymous[0].is_me);
}

#[test]
fn same_author_same_colors() {
    let rows = message_views(&[msg(Some("1"), "Al", "a"), msg(Some("2"), "Al", "b")], None);
    assert_eq!(rows[0].hue, rows[1].hue);
    assert_eq!(rows[0].border_color, rows[1].border_color);
    assert_eq!(rows[0].border_color, "hsla(323, 85%, 55%, 0.35)");
    assert_eq!(rows[0].background_color, "hsla(323, 85%, 55%, 0.10)");
}

#[test]
fn key_prefers_id_and_falls_back_for_legacy_records() {
    let rows = message_views(&[msg(Some("abc"), "Al", "a"), msg(None, "Al", "a"), msg(None, "Al", "a")], None);
    assert_eq!(rows[0].key, "abc");
    assert_ne!(rows[1].key, rows[2].key);
    assert!(rows[1].id.is_none());
}

#[test]
fn reply_projects_quote() {
    let mut reply = msg(Some("2"), "Bo", "agreed");
    reply.reply_to = Some(ReplySnapshot { id: "1".to_owned(), user: "Al".to_owned(), text: "plan".to_owned() });
    let rows = message_views(&[reply], None);
    assert_eq!(rows[0].quote, Some(QuoteView { user: "Al".to_owned(), text: "plan".to_owned() }));
}
