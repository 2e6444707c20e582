use log::debug;
use rand::Rng;

use crate::{
    error::GameError,
    event::TurnOutcome,
    game::Game,
};

/// Plays up to `max_plies` uniformly random legal actions for whichever side
/// is to move, stopping early once the game is over.
///
/// Choices are ordered by board position before drawing, so the same seed
/// replays the same game regardless of piece ids.
///
/// # Errors
///
/// Propagates any error from [`Game::request_action`].
pub fn random_playout<R>(
    game: &mut Game,
    rng: &mut R,
    max_plies: usize,
) -> Result<Vec<TurnOutcome>, GameError>
where
    R: Rng + ?Sized,
{
    let mut outcomes = Vec::new();
    while outcomes.len() < max_plies && game.end_state().is_none() {
        let mut choices = game
            .choices()
            .map(|(id, option)| game.position_of(id).map(|origin| (origin, id, option)))
            .collect::<Result<Vec<_>, _>>()?;
        if choices.is_empty() {
            break;
        }
        choices.sort_unstable_by_key(|(origin, _, option)| (*origin, *option));
        let (origin, id, option) = choices[rng.random_range(0..choices.len())];
        debug!("random playout picks {origin}: {option}");
        outcomes.push(game.request_action(id, option.destination)?);
    }
    Ok(outcomes)
}
#[cfg(test)]
mod test {
    use rand::{SeedableRng, rngs::SmallRng};

    use crate::{
        board::BoardState,
        game::Game,
        movegen::is_frozen,
        piece::PieceKind,
        playout::random_playout,
        side::Side,
    };

    fn check_invariants(game: &Game) {
        let board = game.board();
        assert!(BoardState::from_placements(board.pieces()).is_ok());
        if game.end_state().is_some() {
            return;
        }
        for side in Side::ALL {
            let kings = board
                .pieces_of(side)
                .filter(|(_, piece)| piece.is_king())
                .count();
            assert_eq!(kings, 1);
            for (position, piece) in board.pieces_of(side) {
                let options = game.options(piece.id()).unwrap();
                if is_frozen(&board, piece, position) {
                    assert!(options.is_empty(), "{piece} on {position} is frozen");
                }
                if game.is_targeted(side) && !piece.is_king() {
                    assert!(options.is_empty(), "{piece} must let its king act");
                }
                if piece.kind() == PieceKind::Basilisk {
                    assert!(options.iter().all(|option| option.destination.level()
                        == position.level()));
                }
            }
        }
    }

    #[test]
    fn random_games_keep_invariants() {
        for seed in 0..8 {
            let mut game = Game::new().unwrap();
            let mut rng = SmallRng::seed_from_u64(seed);
            for _ in 0..60 {
                let outcomes = random_playout(&mut game, &mut rng, 5).unwrap();
                for outcome in &outcomes {
                    assert!(!outcome.is_rejected());
                }
                check_invariants(&game);
                if game.end_state().is_some() {
                    break;
                }
            }
            assert!(game.history().len() <= 300);
        }
    }
    #[test]
    fn same_seed_same_game() {
        let play = |seed| {
            let mut game = Game::new().unwrap();
            let mut rng = SmallRng::seed_from_u64(seed);
            random_playout(&mut game, &mut rng, 40).unwrap();
            game.board()
                .pieces()
                .map(|(position, piece)| (position, piece.kind(), piece.side()))
                .collect::<Vec<_>>()
        };
        assert_eq!(play(7), play(7));
    }
    #[test]
    fn stops_at_the_limit() {
        let mut game = Game::new().unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let outcomes = random_playout(&mut game, &mut rng, 3).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current_side(), Side::Scarlet);
    }
}
