//! Integration tests for a full commit/reveal round.
//!
//! These tests walk a round from move-set validation to offline
//! verification, using only the public API.

use fair_rps_core::{
    build_relation, commit,
    games::{Move, Outcome},
    protocol::{CommitMessage, RevealMessage},
    secure_rng, Commitment, CommittedRound, GameError, MoveSetError, RoundResult, SecretKey,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Play a classic round and verify the reveal the way a user would
#[test]
fn test_full_classic_round() {
    let relation = build_relation(["Rock", "Paper", "Scissors"]).unwrap();
    let mut rng = secure_rng().unwrap();

    // Phase 1: computer commits and publishes the HMAC
    let round = CommittedRound::new(relation.moves(), &mut rng).unwrap();
    let published = round.commit_message();
    let published_json = serde_json::to_string(&published).unwrap();

    // Phase 2: user picks, round resolves and the key is revealed
    let revealed = round.resolve(&Move::from("Paper"), &relation).unwrap();
    let reveal_json = serde_json::to_string(&revealed.reveal_message()).unwrap();

    // Phase 3: verifier works from the published strings only
    let published: CommitMessage = serde_json::from_str(&published_json).unwrap();
    let reveal: RevealMessage = serde_json::from_str(&reveal_json).unwrap();
    assert!(reveal.verify(&published));
    assert_eq!(
        commit(&reveal.key, &reveal.computer_move),
        published.hmac.to_string()
    );

    let expected = match reveal.computer_move.as_str() {
        "Paper" => RoundResult::Draw,
        "Rock" => RoundResult::UserWins,
        "Scissors" => RoundResult::SystemWins,
        other => panic!("unexpected computer move {other}"),
    };
    assert_eq!(reveal.result, expected);
}

/// RPSLS ordering yields a balanced, consistent 5x5 table
#[test]
fn test_rpsls_relation_is_consistent() {
    let relation = build_relation(["Rock", "Spock", "Paper", "Lizard", "Scissors"]).unwrap();

    for a in relation.moves() {
        let mut wins = 0;
        let mut losses = 0;
        for b in relation.moves() {
            let there = relation.outcome(a, b).unwrap();
            let back = relation.outcome(b, a).unwrap();
            match there {
                Outcome::Draw => assert_eq!(a, b),
                Outcome::Win => {
                    wins += 1;
                    assert_eq!(back, Outcome::Lose);
                }
                Outcome::Lose => {
                    losses += 1;
                    assert_eq!(back, Outcome::Win);
                }
            }
        }
        assert_eq!((wins, losses), (2, 2), "unbalanced row for {a}");
    }
}

#[test]
fn test_invalid_move_sets_fail_before_any_round() {
    assert!(matches!(
        build_relation(["Rock", "Paper"]),
        Err(GameError::InvalidMoveSet(MoveSetError::TooFewMoves { .. }))
    ));
    assert!(matches!(
        build_relation(["Rock", "Rock", "Paper"]),
        Err(GameError::InvalidMoveSet(MoveSetError::DuplicateMove { .. }))
    ));
    assert!(matches!(
        build_relation(["Rock", "Paper", "Scissors", "Lizard"]),
        Err(GameError::InvalidMoveSet(MoveSetError::EvenMoveCount { .. }))
    ));
}

/// The computer's move is spread over the whole move set
#[test]
fn test_computer_moves_are_spread() {
    let relation = build_relation(["a", "b", "c", "d", "e", "f", "g"]).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let mut counts = vec![0usize; relation.moves().len()];

    for _ in 0..7000 {
        let round = CommittedRound::new(relation.moves(), &mut rng).unwrap();
        let revealed = round.resolve(&Move::from("a"), &relation).unwrap();
        counts[relation.moves().index_of(revealed.system_move.as_str()).unwrap()] += 1;
    }

    for count in counts {
        assert!((800..1200).contains(&count), "skewed count {count}");
    }
}

/// A recomputation after reveal matches bit for bit
#[test]
fn test_commitment_recomputed_after_reveal() {
    let key = SecretKey::generate(&mut secure_rng().unwrap()).unwrap();
    let digest = commit(&key, &Move::from("Rock"));

    let revealed: SecretKey = key.to_string().parse().unwrap();
    assert_eq!(commit(&revealed, &Move::from("Rock")), digest);

    let parsed: Commitment = digest.parse().unwrap();
    assert!(parsed.verify(&revealed, &Move::from("Rock")));
    assert!(!parsed.verify(&revealed, &Move::from("Paper")));
}
