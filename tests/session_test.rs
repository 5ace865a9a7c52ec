//! Tests for the console session driving a whole game.

use std::fmt::Display;
use std::io::{self, Cursor};
use tictactoe_console::{
    Board, ConsoleConfig, GameResult, InputError, Mark, MoveSource, Player, RenderSink, Session,
    SessionError, TextRenderer, TokenMoveSource,
};

type TextSession = Session<TokenMoveSource<Cursor<String>>, TextRenderer<Vec<u8>>>;

fn text_session(input: &str) -> TextSession {
    Session::new(
        TokenMoveSource::new(Cursor::new(input.to_string())),
        TextRenderer::new(Vec::new(), &ConsoleConfig::default()),
    )
}

fn output(session: TextSession) -> String {
    let (_, _, sink) = session.into_parts();
    String::from_utf8(sink.into_inner()).unwrap()
}

#[test]
fn test_row_win_transcript() {
    let mut session = text_session("0 0\n1 0\n0 1\n1 1\n0 2\n");
    assert_eq!(session.play().unwrap(), GameResult::CrossWon);

    let text = output(session);
    assert!(text.starts_with(
        "next player to place a mark is: cross\n   |   |  \n------------\n   |   |  \n------------\n   |   |  \n\n"
    ));
    assert!(text.contains("next player to place a mark is: circle\n X |   |  \n"));
    assert!(text.ends_with(
        " X | X | X\n------------\n O | O |  \n------------\n   |   |  \ncross won the game!\n"
    ));
    assert_eq!(text.matches("next player to place a mark is:").count(), 5);
}

#[test]
fn test_draw_transcript() {
    let mut session = text_session("0 0 0 1 0 2 1 1 1 0 1 2 2 1 2 0 2 2\n");
    assert_eq!(session.play().unwrap(), GameResult::Draw);
    assert!(output(session).ends_with(" O | X | X\nthe game has ended with a draw!\n"));
}

#[test]
fn test_rejected_moves_are_retried() {
    let input = "3 0\n0 0\n0 0\nx\n1 0\n0 1\n1 1\n0 2\n";
    let mut session = text_session(input);
    assert_eq!(session.play().unwrap(), GameResult::CrossWon);

    let board = *session.game().board();
    assert_eq!(board.get(1, 0), Some(Mark::Circle));
    assert_eq!(board.count(Mark::Cross), 3);
    assert_eq!(board.count(Mark::Circle), 2);

    let text = output(session);
    assert!(text.contains("position (3,0) is out of bounds.\nplease re-enter a position:\n> "));
    assert!(text.contains("position (0,0) already has a mark on it.\nplease re-enter a position:\n> "));
    assert!(text.contains("could not read a position from 'x'\nplease re-enter a position:\n> "));
}

#[test]
fn test_input_closed_mid_game() {
    let mut session = text_session("0 0\n");
    let err = session.play().unwrap_err();
    assert!(matches!(
        err,
        SessionError::Input {
            source: InputError::Closed
        }
    ));
    assert_eq!(session.game().board().get(0, 0), Some(Mark::Cross));
    assert_eq!(session.game().current_player(), Player::Circle);
}

#[test]
fn test_input_error_message_is_not_repeated() {
    use std::error::Error;

    let mut session = text_session("");
    let err = session.play().unwrap_err();
    assert_eq!(err.to_string(), "could not read a move");

    let source = err.source().expect("input error as source");
    assert_eq!(source.to_string(), "input ended before the game finished");
    assert!(!err.to_string().contains(&source.to_string()));
}

#[test]
fn test_play_after_game_over_does_nothing() {
    let mut session = text_session("0 0\n1 0\n0 1\n1 1\n0 2\n");
    session.play().unwrap();
    let game = session.game().clone();

    assert_eq!(session.play().unwrap(), GameResult::CrossWon);
    assert_eq!(session.game(), &game);
    assert!(output(session).ends_with("cross won the game!\n"));
}

#[test]
fn test_custom_prompt_and_symbols() {
    let config = ConsoleConfig::from_toml("cross_symbol = \"#\"\nprompt = \"row col? \"").unwrap();
    let mut session = Session::new(
        TokenMoveSource::new(Cursor::new("9 9\n0 0\n1 0\n0 1\n1 1\n0 2\n".to_string())),
        TextRenderer::new(Vec::new(), &config),
    );
    session.play().unwrap();

    let text = output(session);
    assert!(text.contains("please re-enter a position:\nrow col? "));
    assert!(text.contains(" # | # | #\n"));
}

/// Event seen by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Turn(Player),
    Board(Board),
    Rejected(String),
    EndTurn,
    Result(GameResult),
}

#[derive(Default)]
struct RecordingSink {
    events: Vec<Event>,
}

impl RenderSink for RecordingSink {
    fn announce_turn(&mut self, player: Player) -> io::Result<()> {
        self.events.push(Event::Turn(player));
        Ok(())
    }

    fn render(&mut self, board: &Board) -> io::Result<()> {
        self.events.push(Event::Board(*board));
        Ok(())
    }

    fn reject_move(&mut self, reason: &dyn Display) -> io::Result<()> {
        self.events.push(Event::Rejected(reason.to_string()));
        Ok(())
    }

    fn end_turn(&mut self) -> io::Result<()> {
        self.events.push(Event::EndTurn);
        Ok(())
    }

    fn announce_result(&mut self, result: GameResult) -> io::Result<()> {
        self.events.push(Event::Result(result));
        Ok(())
    }
}

/// Replays a fixed list of moves.
struct ScriptedMoves(std::vec::IntoIter<(i64, i64)>);

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self) -> Result<(i64, i64), InputError> {
        self.0.next().ok_or(InputError::Closed)
    }
}

#[test]
fn test_render_once_per_turn_and_once_at_end() {
    let moves = vec![(0, 0), (0, 1), (1, 1), (1, 0), (2, 2)];
    let mut session = Session::new(ScriptedMoves(moves.into_iter()), RecordingSink::default());
    assert_eq!(session.play().unwrap(), GameResult::CrossWon);

    let (game, _, sink) = session.into_parts();
    let boards = sink
        .events
        .iter()
        .filter(|event| matches!(event, Event::Board(_)))
        .count();
    assert_eq!(boards, 6);

    let turns: Vec<_> = sink
        .events
        .iter()
        .filter_map(|event| match event {
            Event::Turn(player) => Some(*player),
            _ => None,
        })
        .collect();
    assert_eq!(
        turns,
        vec![
            Player::Cross,
            Player::Circle,
            Player::Cross,
            Player::Circle,
            Player::Cross
        ]
    );

    assert_eq!(
        sink.events[sink.events.len() - 2..],
        [Event::Board(*game.board()), Event::Result(GameResult::CrossWon)]
    );
    assert!(!sink.events.contains(&Event::Result(GameResult::NoWinner)));
}

#[test]
fn test_engine_rejections_reach_the_sink() {
    let moves = vec![(0, 0), (0, 0), (-1, 2), (1, 1), (0, 1), (2, 2), (0, 2)];
    let mut session = Session::new(ScriptedMoves(moves.into_iter()), RecordingSink::default());
    assert_eq!(session.play().unwrap(), GameResult::CrossWon);

    let (_, _, sink) = session.into_parts();
    let rejected: Vec<_> = sink
        .events
        .iter()
        .filter_map(|event| match event {
            Event::Rejected(reason) => Some(reason.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        rejected,
        vec![
            "position (0,0) already has a mark on it.",
            "position (-1,2) is out of bounds."
        ]
    );
    assert_eq!(
        sink.events.iter().filter(|e| **e == Event::EndTurn).count(),
        4
    );
}
