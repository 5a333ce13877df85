use error_detail::{
    details, DecoratedError, Detail, DetailError, DetailValue, DetailVec, ErrorFactory, StoreResult,
    CAUSED_BY_DETAIL_KEY,
};
use std::error::Error;

#[derive(Debug)]
struct Socket(u32);

#[test]
fn message_excludes_details() {
    let err = ErrorFactory::default().new_error("write failed", details!["fd" => "3"]);

    assert_eq!(err.message(), "write failed");
    assert_eq!(err.to_string(), "write failed");
    assert_eq!(err.detailed(), "write failed\nfd : 3\n");
}

#[test]
fn alternate_display_prints_detailed_text() {
    let err = ErrorFactory::default().new_error("write failed", details!["fd" => "3"]);

    assert_eq!(format!("{:#}", err), err.detailed());
}

#[test]
fn detailed_without_details_is_message_line() {
    let err = ErrorFactory::default().error("plain");

    assert_eq!(err.detailed(), "plain\n");
    assert_eq!(err.details().count(), 0);
}

#[test]
fn get_returns_latest_value_for_key() {
    let err = ErrorFactory::default()
        .new_error("quota", details!["limit" => 10_u32, "limit" => 20_u32, "user" => "ann"]);

    assert_eq!(err.get("limit"), Some(&DetailValue::from(20_u32)));
    assert_eq!(err.get("user").and_then(DetailValue::as_str), Some("ann"));
    assert!(err.contains("user"));
    assert!(!err.contains("group"));
}

#[test]
fn get_with_uncomparable_query_misses() {
    let err = ErrorFactory::default().new_error("quota", details!["limit" => 10_u32]);

    assert_eq!(err.get(DetailValue::opaque(Socket(1))), None);
}

#[test]
fn caused_prefixes_message_and_links_cause() {
    let factory = ErrorFactory::default();
    let e1 = factory.error("A");
    let e2 = e1.caused("B", details![]);

    assert_eq!(e2.to_string(), "B caused by: A");
    assert_eq!(e2.get(CAUSED_BY_DETAIL_KEY), Some(&DetailValue::from(e1.clone())));
    assert_eq!(e2.cause(), Some(&e1));
}

#[test]
fn caused_detail_does_not_render() {
    let factory = ErrorFactory::default();
    let e1 = factory.new_error("A", details!["inner" => "x"]);
    let e2 = e1.caused("B", details!["outer" => "y"]);

    assert_eq!(e2.detailed(), "B caused by: A\nouter : y\n");
    assert_eq!(e2.get("inner"), None);
}

#[test]
fn caller_cannot_shadow_the_cause_key() {
    let factory = ErrorFactory::default();
    let impostor = factory.error("impostor");
    let e1 = factory.error("real");

    let e2 = e1.caused("wrapped", [Detail::new(CAUSED_BY_DETAIL_KEY, impostor)]);

    assert_eq!(e2.cause(), Some(&e1));
}

#[test]
fn caused_uses_the_original_factory() {
    let factory = ErrorFactory::builder()
        .chain_store()
        .detalizer(|| vec![Detail::new("Service", "billing")])
        .build();
    let e1 = factory.error("A");
    let e2 = e1.caused("B", details![]);

    assert_eq!(e2.get("Service"), Some(&DetailValue::from("billing")));
    assert_eq!(e2.detailed(), "B caused by: A\nService : billing\n");
}

#[test]
fn try_caused_reports_bad_keys() {
    let e1 = ErrorFactory::default().error("A");
    let result = e1.try_caused("B", [Detail::new(DetailValue::opaque(Socket(2)), "v")]);

    assert!(matches!(result, Err(DetailError::InvalidKeyKind { .. })));
}

#[test]
fn source_and_root_cause_walk_the_history() {
    let factory = ErrorFactory::default();
    let low = factory.error("low");
    let mid = low.caused("mid", details![]);
    let top = mid.caused("top", details![]);

    let source = top.source().and_then(|s| s.downcast_ref::<DecoratedError>());
    assert_eq!(source, Some(&mid));
    assert_eq!(top.root_cause(), &low);
    assert_eq!(low.root_cause(), &low);
    assert!(low.source().is_none());

    let messages: Vec<_> = top.causes().map(DecoratedError::message).collect();
    assert_eq!(messages, ["mid caused by: low", "low"]);
}

#[test]
fn equality_is_identity() {
    let factory = ErrorFactory::default();
    let err = factory.error("same");

    assert_eq!(err, err.clone());
    assert_ne!(err, factory.error("same"));
}

#[test]
fn store_builder_may_decline_storage() {
    let factory = ErrorFactory::builder()
        .store_builder(|_: DetailVec| -> StoreResult { Ok(None) })
        .build();

    let err = factory.new_error("dropped", details!["k" => "v"]);

    assert_eq!(err.get("k"), None);
    assert_eq!(err.detailed(), "dropped\n");
    assert_eq!(err.details().count(), 0);
    assert_eq!(err.caused("outer", details![]).cause(), None);
}

#[test]
fn errors_are_shareable_across_threads() {
    let err = ErrorFactory::default().new_error("shared", details!["k" => "v"]);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let err = err.clone();
            std::thread::spawn(move || err.detailed())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "shared\nk : v\n");
    }
}

#[cfg(feature = "tracing")]
#[test]
fn trace_emits_an_error_event() {
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<(String, String)>>>);

    impl Visit for Capture {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            self.0.lock().unwrap().push((field.name().to_owned(), format!("{:?}", value)));
        }
    }

    impl<S: Subscriber> Layer<S> for Capture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            event.record(&mut self.clone());
        }
    }

    let capture = Capture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    let err = ErrorFactory::default().new_error("disk full", details!["mount" => "/var"]);

    tracing::subscriber::with_default(subscriber, || err.trace());

    let fields = capture.0.lock().unwrap();
    assert!(fields.contains(&("error.message".to_owned(), "disk full".to_owned())));
    assert!(fields.contains(&("error.details".to_owned(), "mount : /var".to_owned())));
}

fn deep_history(depth: usize) -> DecoratedError {
    let factory = ErrorFactory::default();
    // Messages repeat every cause, so keep them short.
    (0..depth).fold(factory.error("root"), |err, level| {
        err.caused("e", details!["Level" => level.to_string()])
    })
}

#[test]
fn deep_histories_drop_on_a_small_stack() {
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| {
            let err = deep_history(2_000);
            assert_eq!(err.causes().count(), 2_000);
            assert_eq!(err.root_cause().message(), "root");
            drop(err);
        })
        .unwrap();

    handle.join().unwrap();
}

#[test]
fn dropping_the_newest_error_keeps_shared_causes_alive() {
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| {
            let middle = deep_history(1_000);
            let newest = middle.caused("newest", details![]);
            drop(newest);

            assert_eq!(middle.causes().count(), 1_000);
            assert_eq!(middle.get("Level").and_then(DetailValue::as_str), Some("999"));
        })
        .unwrap();

    handle.join().unwrap();
}

#[test]
fn report_of_a_deep_history_is_built_without_recursion() {
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| {
            let err = deep_history(500);
            let mut next = Some(err.report());
            let mut levels = 0;
            while let Some(mut report) = next {
                levels += 1;
                next = report.cause.take().map(|cause| *cause);
            }
            assert_eq!(levels, 501);
        })
        .unwrap();

    handle.join().unwrap();
}
