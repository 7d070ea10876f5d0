//! Plain-text rendering of the two views.

use std::fmt::Write;

use crate::models::{AdminRow, EventCard};

pub const EMPTY_LIST: &str = "No events scheduled yet.";

pub fn render_public(cards: &[EventCard]) -> String {
    if cards.is_empty() {
        return format!("{}\n", EMPTY_LIST);
    }
    let mut out = String::new();
    for card in cards {
        write_card(&mut out, card);
        out.push('\n');
    }
    out
}

pub fn render_admin(rows: &[AdminRow]) -> String {
    if rows.is_empty() {
        return format!("{}\n", EMPTY_LIST);
    }
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(out, "[{}] order: {}", row.id, row.order_input);
        write_card(&mut out, &row.card);
        out.push('\n');
    }
    out
}

fn write_card(out: &mut String, card: &EventCard) {
    let _ = writeln!(out, "{}", card.title);
    let _ = writeln!(out, "  When:  {}", card.time);
    let _ = writeln!(out, "  Where: {}", card.location);
    if !card.description.is_empty() {
        let _ = writeln!(out, "  {}", card.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card(title: &str, description: &str) -> EventCard {
        EventCard {
            title: title.to_string(),
            time: "9am".to_string(),
            location: "Room A".to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn empty_views_show_placeholder() {
        assert_eq!(render_public(&[]), "No events scheduled yet.\n");
        assert_eq!(render_admin(&[]), "No events scheduled yet.\n");
    }

    #[test]
    fn public_view_lists_cards() {
        let text = render_public(&[card("Standup", ""), card("Retro", "Bring notes")]);
        assert_eq!(
            text,
            "Standup\n  When:  9am\n  Where: Room A\n\n\
             Retro\n  When:  9am\n  Where: Room A\n  Bring notes\n\n"
        );
    }

    #[test]
    fn admin_view_shows_id_and_order_input() {
        let rows = [AdminRow {
            id: 7,
            card: card("Standup", ""),
            order_input: "2".to_string(),
        }];
        assert_eq!(
            render_admin(&rows),
            "[7] order: 2\nStandup\n  When:  9am\n  Where: Room A\n\n"
        );
    }
}
