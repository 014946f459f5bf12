//! Fallback reporting through the event and log callbacks.
//!
//! Callbacks are process-wide, so this binary holds a single test.

use std::sync::{Arc, Mutex};

use brailleline::event::EVENT_FALLBACK;
use brailleline::{
    ContractedLine, ContractionMode, ContractionOptions, LogLevel, TableSet, Unavailable,
    contract_line, set_event_callback, set_log_callback,
};

#[test]
fn fallbacks_emit_events_and_warnings() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let warnings = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&events);
    set_event_callback(move |name, data| {
        sink.lock().unwrap().push(format!("{name}:{data}"));
    });
    let sink = Arc::clone(&warnings);
    set_log_callback(move |level, msg| {
        if level >= LogLevel::Warn {
            sink.lock().unwrap().push(msg.to_string());
        }
    });

    let options = ContractionOptions::new(TableSet::single("en-us-g2.ctb"));

    // Prefix and suffix both fail; the word is never sent to the port.
    let line = contract_line(&Unavailable, &options, "the cat sat", 5);
    assert_eq!(line, ContractedLine::literal("the cat sat", 5));
    assert_eq!(
        *events.lock().unwrap(),
        vec![
            format!("{EVENT_FALLBACK}:span:0"),
            format!("{EVENT_FALLBACK}:span:7"),
        ]
    );

    events.lock().unwrap().clear();
    let options = options.with_mode(ContractionMode::FullyContracted);
    let _ = contract_line(&Unavailable, &options, "the cat sat", 5);
    assert_eq!(*events.lock().unwrap(), vec![format!("{EVENT_FALLBACK}:line")]);

    {
        let warnings = warnings.lock().unwrap();
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("span at 0"));
        assert!(warnings[2].contains("rendering line literally"));
    }

    // Literal mode never touches the port.
    events.lock().unwrap().clear();
    let options = options.with_mode(ContractionMode::FullyLiteral);
    let _ = contract_line(&Unavailable, &options, "the cat sat", 5);
    assert!(events.lock().unwrap().is_empty());
}
