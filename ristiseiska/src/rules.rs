use crate::{Card, DealtCard, Hand, Rank, Table};

/// Can this card be placed on the table right now?
///
/// A suit is opened with its seven. After that, the six and the eight are the
/// only cards that can be played on it, and once both are down the run can be
/// extended one rank at a time towards the ace and the king.
pub fn is_legal(card: Card, table: &Table) -> bool {
    let Some(pile) = table.pile(card.suit) else {
        return card.rank == Rank::Seven;
    };

    // Piles are only opened with a seven, so this should never trigger.
    if !pile.contains_rank(Rank::Seven) {
        return false;
    }

    let inner = (Rank::Six..=Rank::Eight).contains(&card.rank);
    if !inner && !(pile.contains_rank(Rank::Six) && pile.contains_rank(Rank::Eight)) {
        return false;
    }

    let extends_low = pile.min_rank().and_then(Rank::pred) == Some(card.rank);
    let extends_high = pile.max_rank().and_then(Rank::succ) == Some(card.rank);
    extends_low || extends_high
}

/// The cards in `hand` that can be played, in hand order.
pub fn legal_moves(hand: &Hand, table: &Table) -> Vec<DealtCard> {
    hand.iter()
        .copied()
        .filter(|dealt| is_legal(dealt.card, table))
        .collect()
}

pub fn has_legal_move(hand: &Hand, table: &Table) -> bool {
    hand.iter().any(|dealt| is_legal(dealt.card, table))
}

/// Aces and kings close a run. Playing one may earn an extra turn.
pub fn is_boundary_card(card: Card) -> bool {
    matches!(card.rank, Rank::Ace | Rank::King)
}
