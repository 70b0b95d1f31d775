use blockfall::core::{GameConfig, GameSession, GameSnapshot, Phase, ScriptedSource, LOCKED_COLOR};
use blockfall::term::{encode_diff_into, GameView, Viewport};
use blockfall::types::PieceKind;

fn snapshot_of(kind: PieceKind) -> GameSnapshot {
    GameSession::with_source(
        GameConfig::default(),
        "eve",
        ScriptedSource::new([kind]),
        0,
    )
    .unwrap()
    .snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = snapshot_of(PieceKind::T);
    let view = GameView::default();

    // 10 cells * 2 columns plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = snapshot_of(PieceKind::T);
    snap.board[19 * snap.width] = true;
    snap.active = None;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin.
    let (x0, y0) = (1, 1 + 19);
    for x in [x0, x0 + 1] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, LOCKED_COLOR);
    }
    assert_ne!(fb.get(x0 + 2, y0).unwrap().ch, '█');
}

#[test]
fn term_view_shows_game_over() {
    let mut snap = snapshot_of(PieceKind::I);
    snap.phase = Phase::GameOver;
    snap.active = None;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!((0..22).any(|y| fb.row_text(y).contains("GAME OVER")));
}

#[test]
fn term_diff_only_touches_moved_piece() {
    let view = GameView::default();
    let vp = Viewport::new(40, 22);
    let a = snapshot_of(PieceKind::O);
    let mut b = a.clone();
    if let Some(active) = b.active.as_mut() {
        active.y += 1;
    }

    let fa = view.render(&a, vp);
    let fb = view.render(&b, vp);
    let mut out = Vec::new();
    encode_diff_into(&fa, &fb, &mut out).unwrap();
    assert!(!out.is_empty());

    let mut same = Vec::new();
    encode_diff_into(&fa, &fa.clone(), &mut same).unwrap();
    assert!(same.is_empty());
}
