//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the initial cards to be dealt.
    Dealing,
    /// Waiting for the player to hit or stay.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and can be settled.
    Settled,
}
