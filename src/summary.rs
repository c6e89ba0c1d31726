//! Per-round presentation summary for dashboards and bots.
//!
//! The original consumers each assembled their own ad-hoc JSON from the
//! decoded accounts, and drifted apart. [`summarize`] is now the only
//! place a [`RoundSummary`] is constructed.

use crate::error::Result;
use crate::timing::compute_timing;
use crate::types::{Board, Round, RoundSummary, RoundTiming, SquareSummary, SQUARE_COUNT};
use crate::winner::resolve_winner;

/// Build the presentation summary for one round.
///
/// Never fails: upstream decode/timing errors are handled before this
/// point, so a dashboard always receives something renderable.
pub fn summarize(
    board: &Board,
    round: &Round,
    winner: Option<u8>,
    timing: &RoundTiming,
) -> RoundSummary {
    let total_deployed = round.total_deployed;

    let squares = (0..SQUARE_COUNT)
        .map(|i| {
            let square_num = (i + 1) as u8;
            let deployed_amount = round.deployed[i];
            let percentage_of_total = if total_deployed > 0 {
                deployed_amount as f64 / total_deployed as f64 * 100.0
            } else {
                0.0
            };
            SquareSummary {
                square_num,
                deployed_amount,
                depositor_count: round.count[i],
                percentage_of_total,
                is_winning: winner == Some(square_num),
            }
        })
        .collect();

    let (top_depositor, top_depositor_reward) = if round.has_top_depositor() {
        (
            Some(round.top_depositor.to_string()),
            Some(round.top_depositor_reward),
        )
    } else {
        (None, None)
    };

    RoundSummary {
        round_id: round.id,
        start_unit: board.start_unit,
        end_unit: board.end_unit,
        current_unit: timing.current_unit,
        units_remaining: timing.units_remaining,
        seconds_remaining: timing.seconds_remaining,
        is_intermission: timing.is_intermission,
        squares,
        total_deployed: round.total_deployed,
        total_depositors: round.total_depositors,
        total_vaulted: round.total_vaulted,
        top_depositor,
        top_depositor_reward,
        jackpot_pool: round.jackpot_pool,
    }
}

/// Resolve winner and timing for a board/round pair, then summarize.
///
/// The composition a collaborator runs once per poll after fetching and
/// decoding both accounts.
pub fn assemble_summary(
    board: &Board,
    round: &Round,
    current_unit: u64,
    unit_duration_secs: f64,
) -> Result<RoundSummary> {
    let timing = compute_timing(
        board.start_unit,
        board.end_unit,
        current_unit,
        unit_duration_secs,
    )?;
    let winner = resolve_winner(&round.randomness);
    Ok(summarize(board, round, winner, &timing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    fn board_fixture() -> Board {
        Board {
            round_id: 900,
            start_unit: 1000,
            end_unit: 1150,
            epoch_id: 3,
        }
    }

    fn round_fixture() -> Round {
        let mut deployed = [0u64; SQUARE_COUNT];
        deployed[0] = 250;
        deployed[5] = 250;
        deployed[24] = 500;
        Round {
            id: 900,
            deployed,
            randomness: [0; 32],
            count: [2; SQUARE_COUNT],
            expires_at: 1300,
            jackpot_pool: 1_000_000,
            rent_payer: Pubkey::new_unique(),
            top_depositor: Pubkey::new_unique(),
            top_depositor_reward: 4200,
            total_deployed: 1000,
            total_depositors: 50,
            total_vaulted: 30,
        }
    }

    fn timing_fixture() -> RoundTiming {
        RoundTiming {
            current_unit: 1100,
            units_remaining: 50,
            seconds_remaining: 20,
            is_intermission: false,
        }
    }

    #[test]
    fn test_percentages_follow_recorded_total() {
        let summary = summarize(&board_fixture(), &round_fixture(), None, &timing_fixture());

        assert_eq!(summary.squares.len(), SQUARE_COUNT);
        assert_eq!(summary.squares[0].square_num, 1);
        assert_eq!(summary.squares[24].square_num, 25);
        assert!((summary.squares[0].percentage_of_total - 25.0).abs() < 1e-9);
        assert!((summary.squares[24].percentage_of_total - 50.0).abs() < 1e-9);
        assert!((summary.squares[1].percentage_of_total - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_never_divides() {
        let mut round = round_fixture();
        round.deployed = [0; SQUARE_COUNT];
        round.total_deployed = 0;

        let summary = summarize(&board_fixture(), &round, None, &timing_fixture());
        for square in &summary.squares {
            assert_eq!(square.percentage_of_total, 0.0);
            assert!(square.percentage_of_total.is_finite());
        }
    }

    #[test]
    fn test_winner_flags_exactly_one_square() {
        let summary = summarize(
            &board_fixture(),
            &round_fixture(),
            Some(13),
            &timing_fixture(),
        );
        let winners: Vec<_> = summary.squares.iter().filter(|s| s.is_winning).collect();
        assert_eq!(winners.len(), 1);
        assert_eq!(winners[0].square_num, 13);

        let summary = summarize(&board_fixture(), &round_fixture(), None, &timing_fixture());
        assert!(summary.squares.iter().all(|s| !s.is_winning));
    }

    #[test]
    fn test_unset_top_depositor_serializes_as_null() {
        let mut round = round_fixture();
        round.top_depositor = Pubkey::default();

        let summary = summarize(&board_fixture(), &round, None, &timing_fixture());
        assert_eq!(summary.top_depositor, None);
        assert_eq!(summary.top_depositor_reward, None);

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["top_depositor"].is_null());
        assert!(json["top_depositor_reward"].is_null());
    }

    #[test]
    fn test_serialized_field_names_are_stable() {
        let summary = summarize(
            &board_fixture(),
            &round_fixture(),
            Some(6),
            &timing_fixture(),
        );
        let json = serde_json::to_value(&summary).unwrap();

        let object = json.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "current_unit",
                "end_unit",
                "is_intermission",
                "jackpot_pool",
                "round_id",
                "seconds_remaining",
                "squares",
                "start_unit",
                "top_depositor",
                "top_depositor_reward",
                "total_deployed",
                "total_depositors",
                "total_vaulted",
                "units_remaining",
            ]
        );

        let square = json["squares"][0].as_object().unwrap();
        let mut square_keys: Vec<_> = square.keys().map(String::as_str).collect();
        square_keys.sort_unstable();
        assert_eq!(
            square_keys,
            [
                "deployed_amount",
                "depositor_count",
                "is_winning",
                "percentage_of_total",
                "square_num",
            ]
        );
    }

    #[test]
    fn test_assemble_summary_composes_core_pieces() {
        let board = board_fixture();
        let mut round = round_fixture();
        // Little-endian words (5, 0, 0, 0) resolve to square 6.
        round.randomness[0] = 5;

        let summary = assemble_summary(&board, &round, 1160, 0.4).unwrap();
        assert!(summary.is_intermission);
        assert_eq!(summary.units_remaining, 0);
        assert_eq!(summary.seconds_remaining, 0);
        assert_eq!(summary.start_unit, 1000);
        assert_eq!(summary.end_unit, 1150);
        assert!(summary.squares[5].is_winning);
    }

    #[test]
    fn test_assemble_summary_propagates_bad_window() {
        let mut board = board_fixture();
        board.start_unit = 2000;

        let err = assemble_summary(&board, &round_fixture(), 1100, 0.4).unwrap_err();
        assert!(matches!(
            err,
            crate::error::WatchError::InvalidSlotRange { .. }
        ));
    }
}
