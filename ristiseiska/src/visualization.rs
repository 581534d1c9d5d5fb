use crate::{is_legal, GameState, Hand, Suit, Table};

/// Draws the table as one row per suit: the low end, the seven and the high end.
///
/// ```text
/// ♥ │ 5♥ │ 7♥ │ 9♥ │
/// ♣ │  - │ 7♣ │  - │
/// ```
pub fn visualize_table(table: &Table) -> String {
    if table.is_empty() {
        return String::from("(the table is empty)");
    }
    let mut result = String::new();
    for suit in Suit::ALL {
        let Some(pile) = table.pile(suit) else {
            continue;
        };
        let ends = pile.ends();
        let slot = |card: Option<crate::Card>| match card {
            Some(card) => format!("{:>3}", card.to_string()),
            None => String::from("  -"),
        };
        result += &format!(
            "{} │{} │{} │{} │\n",
            suit.symbol(),
            slot(ends.low),
            slot(ends.seven),
            slot(ends.high)
        );
    }
    result.truncate(result.trim_end().len());
    result
}

/// The cards in hand, with the playable ones marked by `*`.
pub fn visualize_hand(hand: &Hand, table: &Table) -> String {
    hand.iter()
        .map(|dealt| {
            if is_legal(dealt.card, table) {
                format!("{}*", dealt.card)
            } else {
                dealt.card.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per seat, with `>` marking the player to move.
pub fn visualize_seats(state: &GameState) -> String {
    state
        .players()
        .iter()
        .enumerate()
        .map(|(seat, player)| {
            let marker = if seat == state.current_player_index() {
                "> "
            } else {
                "  "
            };
            let pantti = if state.penalty_holder() == Some(player.id) {
                " (pantti)"
            } else {
                ""
            };
            format!(
                "{}{} ({}) - {} cards{}",
                marker,
                player.name,
                player.kind,
                player.hand.len(),
                pantti
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
