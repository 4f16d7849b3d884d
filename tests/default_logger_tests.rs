//! Tests against the process default logger.
//!
//! Every test that reconfigures the shared instance runs under `#[serial]` and
//! restores the defaults before returning.

mod common;

use common::{setup, SharedBuffer};
use lvlog::{Flags, Severity};
use serial_test::serial;

/// Point the default logger at a fresh buffer with its initial settings.
fn capture() -> SharedBuffer {
    let buffer = SharedBuffer::new();
    lvlog::set_output(buffer.clone());
    lvlog::set_flags(Flags::STD);
    lvlog::set_level(Severity::Error);
    lvlog::set_prefix("");
    buffer
}

fn restore() {
    lvlog::set_output(std::io::stderr());
    lvlog::set_flags(Flags::STD);
    lvlog::set_level(Severity::Error);
    lvlog::set_prefix("");
}

#[test]
#[serial]
fn test_free_functions_share_std_logger() {
    setup();
    let buffer = capture();

    lvlog::std_logger().set_prefix("shared: ");
    lvlog::std_logger().set_flags(Flags::LABEL);
    assert_eq!(lvlog::prefix(), "shared: ");
    assert_eq!(lvlog::flags(), Flags::LABEL);

    lvlog::set_level(Severity::Warn);
    assert_eq!(lvlog::std_logger().level(), Severity::Warn);
    assert!(std::ptr::eq(lvlog::std_logger(), lvlog::std_logger()));

    lvlog::std_logger().warn(&[&"one"]);
    lvlog::warn(&[&"two"]);
    assert_eq!(buffer.lines(), vec!["shared: [WARN ] one", "shared: [WARN ] two"]);

    restore();
}

#[test]
#[serial]
fn test_default_error_line_has_date_time_and_no_label() {
    setup();
    let buffer = capture();

    lvlog::error(&[&"fail"]);

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    // 2009/01/23 01:23:23 fail
    assert_eq!(line.len(), "YYYY/MM/DD HH:MM:SS fail".len(), "got {line:?}");
    assert!(line.ends_with(" fail"));
    assert!(!line.contains('['));
    let bytes = line.as_bytes();
    assert_eq!((bytes[4], bytes[7], bytes[10]), (b'/', b'/', b' '));
    assert_eq!((bytes[13], bytes[16], bytes[19]), (b':', b':', b' '));

    restore();
}

#[test]
#[serial]
fn test_default_filters_below_error() {
    setup();
    let buffer = capture();
    lvlog::set_flags(Flags::LABEL);

    lvlog::warn(&[&"w"]);
    lvlog::info(&[&"i"]);
    lvlog::debug(&[&"d"]);
    lvlog::print(&[&"p"]);
    assert_eq!(buffer.contents(), "");

    lvlog::errorln(&[&"e", &1]);
    assert_eq!(buffer.contents(), "[ERROR] e 1\n");

    restore();
}

#[test]
#[serial]
fn test_free_functions_delegate_to_shared_instance() {
    setup();
    let buffer = capture();

    lvlog::set_level(Severity::Debug);
    lvlog::set_flags(Flags::LABEL);
    lvlog::set_prefix("std: ");

    assert_eq!(lvlog::std_logger().level(), Severity::Debug);
    assert_eq!(lvlog::std_logger().flags(), Flags::LABEL);
    assert_eq!(lvlog::std_logger().prefix(), "std: ");
    assert!(lvlog::enabled(Severity::Debug));

    lvlog::debugf(format_args!("d{}", 1));
    lvlog::infoln(&[&"i", &2]);
    lvlog::warnf(format_args!("w{}", 3));
    lvlog::printf(format_args!("p{}", 4));
    lvlog::println(&[&"p", &5]);

    assert_eq!(
        buffer.lines(),
        vec![
            "std: [DEBUG] d1",
            "std: [INFO ] i 2",
            "std: [WARN ] w3",
            "std: [INFO ] p4",
            "std: [INFO ] p 5",
        ]
    );

    restore();
}

#[test]
#[serial]
fn test_macros_target_default_instance() {
    setup();
    let buffer = capture();
    lvlog::set_flags(Flags::LABEL);
    lvlog::set_level(Severity::Info);

    lvlog::errorf!("code {}", 7);
    lvlog::infof!("{} ok", "all");
    lvlog::debugf!("hidden {}", 0);

    assert_eq!(buffer.lines(), vec!["[ERROR] code 7", "[INFO ] all ok"]);

    restore();
}

#[test]
#[serial]
fn test_default_output_and_level_value() {
    setup();
    let buffer = capture();
    lvlog::set_flags(Flags::empty());

    lvlog::set_level_value(5);
    assert_eq!(lvlog::level(), Severity::Debug);

    lvlog::output("raw").expect("write to memory succeeds");
    assert_eq!(buffer.contents(), "raw\n");

    restore();
}

#[test]
#[serial]
fn test_default_panic_carries_message() {
    setup();
    let buffer = capture();
    lvlog::set_flags(Flags::LABEL);

    let result = std::panic::catch_unwind(|| lvlog::panicf(format_args!("bad {}", "state")));
    let payload = result.expect_err("panicf always panics");
    assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("bad state"));
    assert_eq!(buffer.contents(), "[PANIC] bad state\n");

    // The shared lock was released before unwinding.
    lvlog::error(&[&"still usable"]);
    assert!(buffer.contents().ends_with("[ERROR] still usable\n"));

    restore();
}
