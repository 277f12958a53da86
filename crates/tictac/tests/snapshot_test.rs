//! Serialization of game snapshots.

use tictac::{Game, Outcome, Player};

#[test]
fn test_snapshot_restores_game() {
    let mut game = Game::new();
    for (x, y) in [(1, 1), (0, 0), (2, 2)] {
        game.play(x, y).unwrap();
    }

    let json = serde_json::to_string(&game).expect("serialize");
    let restored: Game = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, game);
    assert_eq!(restored.current_player(), Player::Player2);
    assert_eq!(restored.to_string(), game.to_string());
}

#[test]
fn test_snapshot_fields() {
    let game = Game::new();
    let value = serde_json::to_value(&game).expect("serialize");

    assert_eq!(value["current_player"], "Player1");
    assert_eq!(value["move_count"], 0);
    assert_eq!(value["game_over"], false);
    assert_eq!(value["has_winner"], false);
    assert_eq!(value["board"]["cells"].as_array().map(Vec::len), Some(9));
}

#[test]
fn test_outcome_serializes_winner() {
    let value = serde_json::to_value(Outcome::Won(Player::Player2)).expect("serialize");
    assert_eq!(value, serde_json::json!({ "Won": "Player2" }));
}

#[test]
fn test_snapshot_of_finished_game_restores() {
    let mut game = Game::new();
    for (x, y) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
        game.play(x, y).unwrap();
    }

    let json = serde_json::to_string(&game).expect("serialize");
    let restored: Game = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored.outcome(), Outcome::Won(Player::Player1));
}

#[test]
fn test_snapshot_with_unplayed_line_rejected() {
    // A completed row that no move counter accounts for, with the game still open.
    let json = serde_json::json!({
        "board": { "cells": [
            "Player1", "Player1", "Player1",
            "Empty", "Empty", "Empty",
            "Empty", "Empty", "Empty"
        ] },
        "current_player": "Player1",
        "move_count": 0,
        "game_over": false,
        "has_winner": false
    });

    let err = serde_json::from_value::<Game>(json).unwrap_err();
    assert!(err.to_string().starts_with("Invalid game snapshot"));
}

#[test]
fn test_snapshot_with_open_completed_line_rejected() {
    let mut game = Game::new();
    for (x, y) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
        game.play(x, y).unwrap();
    }
    let mut value = serde_json::to_value(&game).expect("serialize");
    value["game_over"] = serde_json::json!(false);
    value["has_winner"] = serde_json::json!(false);

    assert!(serde_json::from_value::<Game>(value).is_err());
}

#[test]
fn test_snapshot_over_without_cause_rejected() {
    let mut value = serde_json::to_value(Game::new()).expect("serialize");
    value["game_over"] = serde_json::json!(true);

    assert!(serde_json::from_value::<Game>(value).is_err());
}

#[test]
fn test_snapshot_with_wrong_turn_rejected() {
    let mut game = Game::new();
    game.play(1, 1).unwrap();
    let mut value = serde_json::to_value(&game).expect("serialize");
    value["current_player"] = serde_json::json!("Player1");

    assert!(serde_json::from_value::<Game>(value).is_err());
}
