use error_detail::traits::{Detalizer, Render};
use error_detail::{CallStack, CallStackDetalizer, DetailValue, ErrorFactory, CALL_STACK_DETAIL_KEY};
use std::backtrace::Backtrace;
use std::sync::Arc;

#[cfg(feature = "timestamp")]
mod timestamp {
    use chrono::{DateTime, TimeZone, Utc};
    use error_detail::{DetailValue, ErrorFactory, TimestampDetalizer, TIMESTAMP_DETAIL_KEY};

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2017, 10, 31, 22, 0, 5).unwrap()
    }

    #[test]
    fn stamps_errors_with_the_clock_time() {
        let factory = ErrorFactory::builder()
            .chain_store()
            .detalizer(TimestampDetalizer::with_clock(fixed_clock))
            .build();

        let err = factory.error("nothing to do");

        assert_eq!(err.detailed(), "nothing to do\nTimestamp : 2017-10-31 22:00:05 UTC\n");
        assert_eq!(
            err.get(TIMESTAMP_DETAIL_KEY).and_then(|v| v.downcast_ref::<DateTime<Utc>>()),
            Some(&fixed_clock())
        );
    }

    #[test]
    fn caused_errors_get_their_own_timestamp() {
        let factory = ErrorFactory::builder()
            .chain_store()
            .detalizer(TimestampDetalizer::with_clock(fixed_clock))
            .build();

        let err = factory.error("low").caused("high", error_detail::details![]);

        assert_eq!(err.details().filter(|d| d.key == DetailValue::from(TIMESTAMP_DETAIL_KEY)).count(), 1);
        assert_eq!(err.report().cause.map(|cause| cause.details.len()), Some(1));
    }

    #[test]
    fn system_clock_is_close_to_now() {
        let before = Utc::now();
        let err = ErrorFactory::builder()
            .chain_store()
            .detalizer(TimestampDetalizer::new())
            .build()
            .error("now");
        let stamped = err.get(TIMESTAMP_DETAIL_KEY).and_then(|v| v.downcast_ref::<DateTime<Utc>>());

        assert!(stamped.is_some_and(|time| *time >= before && *time <= Utc::now()));
    }
}

#[cfg(feature = "tracing")]
mod span {
    use error_detail::{ErrorFactory, SpanDetalizer, SPAN_DETAIL_KEY};

    #[test]
    fn records_the_current_span_name() {
        let factory = ErrorFactory::builder().chain_store().detalizer(SpanDetalizer::new()).build();

        let err = tracing::subscriber::with_default(tracing_subscriber::registry(), || {
            let span = tracing::info_span!("ingest_batch");
            let _guard = span.enter();
            factory.error("batch rejected")
        });

        assert_eq!(err.detailed(), "batch rejected\nSpan : ingest_batch\n");
        assert!(err.contains(SPAN_DETAIL_KEY));
    }

    #[test]
    fn outside_a_span_attaches_nothing() {
        let factory = ErrorFactory::builder().chain_store().detalizer(SpanDetalizer::new()).build();

        let err = tracing::subscriber::with_default(tracing_subscriber::registry(), || {
            factory.error("no span")
        });

        assert_eq!(err.detailed(), "no span\n");
    }
}

#[test]
fn forced_call_stack_renders_under_its_key() {
    let factory = ErrorFactory::builder()
        .chain_store()
        .detalizer(CallStackDetalizer::forced())
        .build();

    let err = factory.error("unexpected state");
    let value = err.get(CALL_STACK_DETAIL_KEY).unwrap();

    assert!(value.is::<CallStack>());
    assert!(!value.is_comparable());
    assert!(err.detailed().starts_with("unexpected state\nCall Stack : \n"));
}

#[test]
fn call_stack_text_is_computed_once_and_shared() {
    let stack = Arc::new(CallStack::new(Backtrace::force_capture()));
    let first = stack.render();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let stack = Arc::clone(&stack);
            std::thread::spawn(move || stack.render())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), first);
    }
    assert!(first.is_some_and(|text| text.starts_with('\n')));
}

#[test]
fn uncaptured_call_stack_renders_nothing() {
    let stack = CallStack::new(Backtrace::disabled());

    assert_eq!(stack.render(), None);
}

#[test]
fn forced_detalizer_always_yields_one_detail() {
    let details = CallStackDetalizer::forced().details();

    assert_eq!(details.len(), 1);
    assert_eq!(details[0].key, DetailValue::from(CALL_STACK_DETAIL_KEY));
}

#[inline(never)]
fn detailed_from_helper(detalizer: CallStackDetalizer) -> String {
    let factory = ErrorFactory::builder().chain_store().detalizer(detalizer).build();
    factory.error("helper").detailed()
}

#[test]
fn call_stack_starts_at_the_factory_caller() {
    let text = detailed_from_helper(CallStackDetalizer::forced());
    let first_frame = text.lines().nth(2).unwrap();

    assert!(first_frame.contains("detailed_from_helper"), "{}", text);
    assert!(!text.contains("error_detail::"), "{}", text);
    assert!(!text.contains("std::backtrace"), "{}", text);
}

#[test]
fn skip_drops_caller_frames() {
    let text = detailed_from_helper(CallStackDetalizer::forced().skip(1));
    let first_frame = text.lines().nth(2).unwrap();

    assert!(!first_frame.contains("detailed_from_helper"), "{}", text);
    assert!(first_frame.contains("skip_drops_caller_frames"), "{}", text);
}

#[test]
fn depth_caps_printed_frames() {
    let text = detailed_from_helper(CallStackDetalizer::forced().depth(2));

    // Message line, key line, then the frames.
    assert_eq!(text.lines().count(), 4, "{}", text);
    assert!(text.lines().skip(2).all(|line| line.starts_with('\t')));
}

#[test]
fn zero_depth_attaches_nothing() {
    let text = detailed_from_helper(CallStackDetalizer::forced().depth(0));

    assert_eq!(text, "helper\n");
}
