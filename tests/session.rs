use std::{
    thread,
    time::{Duration, Instant},
};

use scical::{
    EvalOptions, Evaluator, Grammar,
    error::DispatchError,
    session::{
        core::{Session, Status, format_value},
        dispatcher::Dispatcher,
        keypad::{KEY_LABELS, Key},
    },
};

fn press_all(session: &mut Session<'_>, labels: &[&str]) {
    for label in labels {
        assert!(session.press(Key::from_label(label)),
                "key {label:?} was ignored");
    }
}

#[test]
fn keys_append_their_labels() {
    let dispatcher = Dispatcher::new(1, Evaluator::default()).unwrap();
    let mut session = Session::new(&dispatcher);

    press_all(&mut session, &["sqrt", "(", "9", "+", "1", "6", ")"]);
    assert_eq!(session.display(), "sqrt(9+16)");

    press_all(&mut session, &["!", "%", "|x|"]);
    assert_eq!(session.display(), "sqrt(9+16)!%|x|");
}

#[test]
fn backspace_and_clear_edit_the_display() {
    let dispatcher = Dispatcher::new(1, Evaluator::default()).unwrap();
    let mut session = Session::new(&dispatcher);

    press_all(&mut session, &["1", "2", "3", "<="]);
    assert_eq!(session.display(), "12");

    press_all(&mut session, &["Clear"]);
    assert_eq!(session.display(), "");

    press_all(&mut session, &["<="]);
    assert_eq!(session.display(), "");
}

#[test]
fn submit_disables_input_until_the_answer_is_collected() {
    let dispatcher = Dispatcher::new(2, Evaluator::default()).unwrap();
    let mut session = Session::new(&dispatcher);

    press_all(&mut session, &["2", "^", "3", "*", "2", "="]);
    assert_eq!(session.status(), Status::Calculating);
    assert_eq!(session.status().to_string(), "Calculating...");
    assert!(!session.is_input_enabled());
    assert!(!session.press(Key::from_label("1")));
    assert_eq!(session.display(), "2^3*2");

    session.wait();
    assert_eq!(session.status(), Status::Idle);
    assert!(session.is_input_enabled());
    assert_eq!(session.display(), "16.0");
}

#[test]
fn poll_eventually_applies_the_answer() {
    let dispatcher = Dispatcher::new(1, Evaluator::default()).unwrap();
    let mut session = Session::new(&dispatcher);

    assert!(!session.poll());
    press_all(&mut session, &["5", "/", "1", "0", "0", "="]);

    let deadline = Instant::now() + Duration::from_secs(10);
    while !session.poll() {
        assert!(Instant::now() < deadline, "no answer arrived");
        thread::sleep(Duration::from_millis(1));
    }
    assert_eq!(session.display(), "0.05");
    assert!(session.is_input_enabled());
}

#[test]
fn errors_are_rendered_into_the_display() {
    let dispatcher = Dispatcher::new(1, Evaluator::default()).unwrap();
    let mut session = Session::new(&dispatcher);

    press_all(&mut session, &["5", "!", "="]);
    session.wait();
    assert_eq!(session.display(), "Error: Unexpected character '!' at position 1.");

    press_all(&mut session, &["Clear", "="]);
    session.wait();
    assert_eq!(session.display(), "Error: Unexpected end of input.");
}

#[test]
fn extended_grammar_reaches_factorial_keys() {
    let evaluator = Evaluator::new(EvalOptions::default().with_grammar(Grammar::Extended));
    let dispatcher = Dispatcher::new(1, evaluator).unwrap();
    let mut session = Session::new(&dispatcher);

    press_all(&mut session, &["5", "!", "="]);
    session.wait();
    assert_eq!(session.display(), "120.0");
}

#[test]
fn answers_can_be_edited_further() {
    let dispatcher = Dispatcher::new(1, Evaluator::default()).unwrap();
    let mut session = Session::new(&dispatcher);

    press_all(&mut session, &["9", "="]);
    session.wait();
    press_all(&mut session, &["*", "2", "="]);
    session.wait();
    assert_eq!(session.display(), "18.0");
}

#[test]
fn sessions_share_one_dispatcher() {
    let dispatcher = Dispatcher::new(4, Evaluator::default()).unwrap();
    let mut first = Session::new(&dispatcher);
    let mut second = Session::new(&dispatcher);

    press_all(&mut first, &["1", "+", "1", "="]);
    press_all(&mut second, &["3", "*", "3", "="]);
    assert!(!first.is_input_enabled());
    assert!(!second.is_input_enabled());

    second.wait();
    first.wait();
    assert_eq!(first.display(), "2.0");
    assert_eq!(second.display(), "9.0");
}

#[test]
fn wait_without_submission_does_nothing() {
    let dispatcher = Dispatcher::new(1, Evaluator::default()).unwrap();
    let mut session = Session::new(&dispatcher);

    press_all(&mut session, &["4", "2"]);
    session.wait();
    assert_eq!(session.display(), "42");
}

#[test]
fn dropped_tickets_do_not_stop_workers() {
    let dispatcher = Dispatcher::new(1, Evaluator::default()).unwrap();

    drop(dispatcher.submit("1+1").unwrap());
    let ticket = dispatcher.submit("2+2").unwrap();
    assert_eq!(ticket.wait(), Ok(Ok(4.0)));
}

#[test]
fn many_submissions_all_answer() {
    let dispatcher = Dispatcher::new(3, Evaluator::default()).unwrap();

    let tickets = (0..50).map(|i| (i, dispatcher.submit(format!("{i}*2")).unwrap()))
                         .collect::<Vec<_>>();
    for (i, ticket) in tickets {
        assert_eq!(ticket.wait(), Ok(Ok(f64::from(i) * 2.0)));
    }
}

#[test]
fn worker_count_is_at_least_one() {
    assert_eq!(Dispatcher::new(0, Evaluator::default()).unwrap().worker_count(), 1);
    assert_eq!(Dispatcher::with_defaults().unwrap().worker_count(), 10);
}

#[test]
fn disconnected_error_is_readable() {
    assert_eq!(DispatchError::Disconnected.to_string(),
               "The evaluation worker stopped before answering.");
}

#[test]
fn labels_map_to_actions() {
    assert_eq!(Key::from_label("="), Key::Submit);
    assert_eq!(Key::from_label("<="), Key::Backspace);
    assert_eq!(Key::from_label("Clear"), Key::Clear);
    assert_eq!(Key::from_label("|x|"), Key::Append("|x|".to_string()));
    assert!(KEY_LABELS.contains(&"sqrt"));
    assert!(KEY_LABELS.contains(&"<="));
}

#[test]
fn values_render_canonically() {
    assert_eq!(format_value(16.0), "16.0");
    assert_eq!(format_value(-2.5), "-2.5");
    assert_eq!(format_value(0.05), "0.05");
    assert_eq!(format_value(1e7), "10000000.0");
    assert_eq!(format_value(1e-4), "0.0001");
    assert_eq!(format_value(1e21), "1e21");
    assert_eq!(format_value(f64::INFINITY), "Infinity");
    assert_eq!(format_value(f64::NAN), "NaN");
}
