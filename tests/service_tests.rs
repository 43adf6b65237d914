use bot_game::game::Side;
mod common;

#[ctor::ctor]
fn _init() {
    common::init();
}

#[test]
fn name_commands() {
    let mut service = common::service_with_rolls(&[]);

    assert!(service.handle_text("name ").is_empty());
    assert_eq!(service.state().player().name, "유저");

    let out = service.handle_text("name Bob");
    assert_eq!(out, vec!["[Bob] 1000\n[Boss 똔코치] 1000".to_string()]);
    assert_eq!(service.state().player().name, "Bob");

    assert!(service.handle_text("name Bob Smith").is_empty());
    assert_eq!(service.state().player().name, "Bob");
}

#[test]
fn start_resets_health_but_not_name() {
    let mut service = common::service_with_rolls(&[]);
    service.handle_text("이름 철수");
    service.state_mut().set_hp(Side::Player, -20);
    service.state_mut().set_hp(Side::Enemy, 7);

    let out = service.handle_text("시작");
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], "\u{1F3AE} 게임시작 \u{1F3AE}");
    assert_eq!(out[1], "[철수] 1000\n[Boss 똔코치] 1000");
}

#[test]
fn attack_flow_until_win_then_notice() {
    let mut service = common::service_with_rolls(&[400, 100, 400, 100, 400]);
    service.handle_text("start");

    assert_eq!(service.handle_text("attack").len(), 2);
    assert_eq!(service.handle_text("공격").len(), 2);
    let last = service.handle_text("attack");
    assert_eq!(last.len(), 2);
    assert!(last[1].contains("You Win."));
    assert!(service.is_ended());
    assert_eq!(service.state().enemy().hp, -200);
    assert_eq!(service.state().player().hp, 800);

    let notice = service.handle_text("attack");
    assert_eq!(notice, vec!["이미 게임이 종료 되었습니다. 다시 시작해 주세요".to_string()]);
    assert_eq!(service.state().enemy().hp, -200);
}

#[test]
fn unrecognized_input_is_inert() {
    let mut service = common::service_with_rolls(&[500]);
    for text in ["", "hello", "Attack", "start now", "이름", "name\tBob"] {
        assert!(service.handle_text(text).is_empty(), "{text:?} produced output");
    }
    assert_eq!(service.state().player().hp, 1000);
    assert_eq!(service.state().enemy().hp, 1000);
}
