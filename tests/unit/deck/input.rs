use super::*;
use crate::scene::catalog::default_deck;
use crate::foundation::core::{SceneIndex, ShotIndex};

fn feed(adapter: &mut InputAdapter, keys: &str) -> Vec<NavCommand> {
    keys.chars()
        .filter_map(|c| adapter.handle(Key::Char(c)))
        .collect()
}

#[test]
fn arrow_names_map_to_single_steps() {
    assert_eq!(
        command_for_key_name("ArrowRight"),
        Some(NavCommand::Advance(1))
    );
    assert_eq!(
        command_for_key_name("ArrowLeft"),
        Some(NavCommand::Advance(-1))
    );
    assert_eq!(command_for_key_name("ArrowUp"), None);
    assert_eq!(command_for_key_name("x"), None);
}

#[test]
fn key_names_parse() {
    assert_eq!(Key::from_name("Enter"), Some(Key::Enter));
    assert_eq!(Key::from_name("Esc"), Some(Key::Escape));
    assert_eq!(Key::from_name("7"), Some(Key::Char('7')));
    assert_eq!(Key::from_name("Shift"), None);
    assert_eq!(Key::from_name(""), None);
}

#[test]
fn digits_commit_as_jump() {
    let mut input = InputAdapter::new();
    assert!(feed(&mut input, "12").is_empty());
    assert_eq!(input.pending_entry(), "12");
    assert_eq!(input.handle(Key::Enter), Some(NavCommand::JumpTo(12)));
    assert_eq!(input.pending_entry(), "");
}

#[test]
fn leading_minus_is_accepted_once() {
    let mut input = InputAdapter::new();
    feed(&mut input, "-3-");
    assert_eq!(input.pending_entry(), "-3");
    assert_eq!(input.handle(Key::Enter), Some(NavCommand::JumpTo(-3)));
}

#[test]
fn empty_or_bare_minus_entry_does_nothing() {
    let mut input = InputAdapter::new();
    assert_eq!(input.handle(Key::Enter), None);
    feed(&mut input, "-");
    assert_eq!(input.handle(Key::Enter), None);
    assert_eq!(input.pending_entry(), "");
}

#[test]
fn overflowing_entry_saturates() {
    let mut input = InputAdapter::new();
    feed(&mut input, "99999999999999999999999");
    assert_eq!(input.handle(Key::Enter), Some(NavCommand::JumpTo(i64::MAX)));
    assert_eq!(input.pending_entry(), "");

    feed(&mut input, "-99999999999999999999999");
    assert_eq!(input.handle(Key::Enter), Some(NavCommand::JumpTo(i64::MIN)));
}

#[test]
fn backspace_and_escape_edit_entry() {
    let mut input = InputAdapter::new();
    feed(&mut input, "45");
    input.handle(Key::Backspace);
    assert_eq!(input.pending_entry(), "4");
    assert_eq!(input.handle(Key::Escape), None);
    assert_eq!(input.pending_entry(), "");
    assert_eq!(input.handle(Key::Escape), Some(NavCommand::Quit));
}

#[test]
fn arrows_act_immediately_and_q_quits() {
    let mut input = InputAdapter::new();
    feed(&mut input, "x");
    assert_eq!(input.pending_entry(), "");
    assert_eq!(input.handle(Key::ArrowRight), Some(NavCommand::Advance(1)));
    assert_eq!(input.handle(Key::ArrowLeft), Some(NavCommand::Advance(-1)));
    assert_eq!(input.handle(Key::Char('q')), Some(NavCommand::Quit));
}

#[test]
fn terminal_events_map_to_keys() {
    let press = |code| KeyEvent::new(code, KeyModifiers::NONE);
    assert_eq!(Key::from_key_event(&press(KeyCode::Right)), Some(Key::ArrowRight));
    assert_eq!(Key::from_key_event(&press(KeyCode::Char('5'))), Some(Key::Char('5')));
    assert_eq!(Key::from_key_event(&press(KeyCode::Tab)), None);

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(Key::from_key_event(&ctrl_c), Some(Key::Escape));

    let mut release = press(KeyCode::Right);
    release.kind = KeyEventKind::Release;
    assert_eq!(Key::from_key_event(&release), None);

    let mut repeat = press(KeyCode::Char('1'));
    repeat.kind = KeyEventKind::Repeat;
    assert_eq!(Key::from_key_event(&repeat), None);
}

#[test]
fn commands_drive_the_presentation() {
    let mut p = Presentation::new(default_deck().unwrap()).unwrap();
    let mut input = InputAdapter::new();

    let cmd = input.handle(Key::ArrowRight).unwrap();
    assert!(cmd.apply(&mut p).is_some());
    assert_eq!(p.position(), (SceneIndex(0), ShotIndex(1)));

    feed(&mut input, "4");
    let cmd = input.handle(Key::Enter).unwrap();
    assert_eq!(
        cmd.apply(&mut p),
        Some(NavOutcome::SceneChanged {
            from: SceneIndex(0),
            to: SceneIndex(1)
        })
    );

    assert_eq!(NavCommand::Quit.apply(&mut p), None);
}
