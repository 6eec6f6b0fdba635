use super::*;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn create_temp_asset_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write to temp file");
    file
}

/// Records every snapshot it is notified with.
struct RecordingObserver {
    snapshots: Mutex<Vec<NavigatorSnapshot>>,
}

impl RecordingObserver {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            snapshots: Mutex::new(Vec::new()),
        })
    }

    fn count(&self) -> usize {
        self.snapshots.lock().len()
    }

    fn last(&self) -> Option<NavigatorSnapshot> {
        self.snapshots.lock().last().cloned()
    }
}

impl NavigatorObserver for RecordingObserver {
    fn on_slide_change(&self, snapshot: &NavigatorSnapshot) {
        self.snapshots.lock().push(snapshot.clone());
    }
}

fn standard_navigator() -> SlideNavigator {
    SlideNavigator::new(SlideDeck::standard())
}

#[test]
fn test_standard_deck_order() {
    let deck = SlideDeck::standard();
    assert_eq!(deck.len(), 8);
    assert_eq!(deck.get(0).unwrap().id, "introduction");
    assert_eq!(deck.get(7).unwrap().id, "summary");
    assert_eq!(deck.position_of("trees"), Some(4));
    assert_eq!(deck.position_of("missing"), None);
}

#[test]
fn test_deck_rejects_duplicate_ids() {
    let slides = vec![
        Slide::new("arrays", "Arrays"),
        Slide::new("arrays", "Arrays Again"),
    ];
    let result = SlideDeck::new(slides);
    assert!(matches!(result, Err(SlidesError::ValidationError(_))));
}

#[test]
fn test_deck_rejects_empty() {
    let result = SlideDeck::new(Vec::new());
    assert!(matches!(result, Err(SlidesError::ValidationError(_))));
}

#[test]
fn test_navigator_starts_at_first_slide() {
    let navigator = standard_navigator();
    assert_eq!(navigator.current_index(), 0);
    assert_eq!(navigator.total_slides(), 8);
    assert!(navigator.is_first());
    assert!(!navigator.is_last());
}

#[test]
fn test_next_never_exceeds_last_slide() {
    let navigator = standard_navigator();
    for _ in 0..20 {
        navigator.request(Transition::Next);
        assert!(navigator.current_index() <= navigator.total_slides() - 1);
    }
    assert_eq!(navigator.current_index(), 7);
    assert!(navigator.is_last());
}

#[test]
fn test_prev_never_drops_below_zero() {
    let navigator = standard_navigator();
    for _ in 0..20 {
        navigator.request(Transition::Prev);
        assert_eq!(navigator.current_index(), 0);
    }
    assert!(navigator.is_first());
}

#[test]
fn test_goto_in_range_moves_exactly_there() {
    let navigator = standard_navigator();
    for index in [3, 0, 7, 5] {
        assert!(navigator.request(Transition::GoTo(index)) || navigator.current_index() == index);
        assert_eq!(navigator.current_index(), index);
    }
}

#[test]
fn test_goto_out_of_range_is_a_silent_noop() {
    let navigator = standard_navigator();
    navigator.request(Transition::GoTo(3));

    for index in [8, 9, usize::MAX] {
        assert!(!navigator.request(Transition::GoTo(index)));
        assert_eq!(navigator.current_index(), 3);
    }
}

#[test]
fn test_boundary_requests_are_idempotent() {
    let navigator = standard_navigator();

    navigator.request(Transition::GoTo(7));
    for _ in 0..5 {
        assert!(!navigator.request(Transition::Next));
        assert_eq!(navigator.current_index(), 7);
    }

    navigator.request(Transition::GoTo(0));
    for _ in 0..5 {
        assert!(!navigator.request(Transition::Prev));
        assert_eq!(navigator.current_index(), 0);
    }
}

#[test]
fn test_progress_fraction_bounds_and_monotonicity() {
    let navigator = standard_navigator();
    let total = navigator.total_slides() as f64;

    assert_eq!(navigator.progress_fraction(), 1.0 / total);

    let mut previous = navigator.progress_fraction();
    while navigator.request(Transition::Next) {
        let progress = navigator.progress_fraction();
        assert!(progress > previous);
        assert!(progress <= 1.0);
        previous = progress;
    }

    assert_eq!(navigator.progress_fraction(), 1.0);
}

#[test]
fn test_presentation_walkthrough() {
    // 8 slides: three forward, one back, jump to the end, bounce off it
    let navigator = standard_navigator();

    navigator.request(Transition::Next);
    navigator.request(Transition::Next);
    navigator.request(Transition::Next);
    assert_eq!(navigator.current_index(), 3);

    navigator.request(Transition::Prev);
    assert_eq!(navigator.current_index(), 2);

    navigator.request(Transition::GoTo(7));
    assert_eq!(navigator.current_index(), 7);
    assert!(navigator.is_last());

    navigator.request(Transition::Next);
    assert_eq!(navigator.current_index(), 7);
}

#[test]
fn test_observers_see_accepted_transitions_only() {
    let navigator = standard_navigator();
    let observer = RecordingObserver::new();
    navigator.observe(observer.clone());

    navigator.request(Transition::Next);
    navigator.request(Transition::Prev);
    assert_eq!(observer.count(), 2);

    // Clamped requests notify nobody
    navigator.request(Transition::Prev);
    navigator.request(Transition::GoTo(42));
    assert_eq!(observer.count(), 2);

    navigator.request(Transition::GoTo(5));
    let last = observer.last().unwrap();
    assert_eq!(last.index, 5);
    assert_eq!(last.slide_id, "hash-tables");
    assert_eq!(last.total, 8);
    assert!(!last.is_first);
    assert!(!last.is_last);
}

#[test]
fn test_dropped_observer_is_detached() {
    let navigator = standard_navigator();
    let observer = RecordingObserver::new();
    navigator.observe(observer.clone());

    navigator.request(Transition::Next);
    assert_eq!(observer.count(), 1);

    let counted = Arc::downgrade(&observer);
    drop(observer);

    // The weak registration no longer reaches anything
    navigator.request(Transition::Next);
    assert!(counted.upgrade().is_none());
    assert_eq!(navigator.current_index(), 2);
}

#[test]
fn test_snapshot_reflects_current_state() {
    let navigator = standard_navigator();
    let snapshot = navigator.snapshot();
    assert_eq!(snapshot.index, 0);
    assert_eq!(snapshot.total, 8);
    assert_eq!(snapshot.slide_id, "introduction");
    assert_eq!(snapshot.progress, 1.0 / 8.0);
    assert!(snapshot.is_first);
    assert!(!snapshot.is_last);

    navigator.request(Transition::GoTo(7));
    let snapshot = navigator.snapshot();
    assert_eq!(snapshot.slide_id, "summary");
    assert_eq!(snapshot.progress, 1.0);
    assert!(snapshot.is_last);
}

#[test]
fn test_keyboard_binding() {
    assert_eq!(transition_for_key("ArrowRight"), Some(Transition::Next));
    assert_eq!(transition_for_key("ArrowLeft"), Some(Transition::Prev));
    assert_eq!(transition_for_key("ArrowUp"), None);
    assert_eq!(transition_for_key("Enter"), None);
    assert_eq!(transition_for_key(""), None);
}

#[test]
fn test_action_binding() {
    assert_eq!(transition_for_action("next", None), Some(Transition::Next));
    assert_eq!(transition_for_action("prev", None), Some(Transition::Prev));
    assert_eq!(
        transition_for_action("goto", Some(4)),
        Some(Transition::GoTo(4))
    );
    assert_eq!(transition_for_action("goto", None), None);
    assert_eq!(transition_for_action("jump", Some(4)), None);
}

#[test]
fn test_structure_key_conversion() {
    assert_eq!(structure_key("arrays"), "arrays");
    assert_eq!(structure_key("linked-lists"), "linkedLists");
    assert_eq!(structure_key("hash-tables"), "hashTables");
    assert_eq!(structure_key("stacks-queues"), "stacksQueues");
}

#[test]
fn test_content_store_tables() {
    let content = ContentStore::standard();

    let complexity = content.complexity();
    assert_eq!(complexity.as_object().unwrap().len(), 7);
    assert_eq!(complexity["arrays"]["access"], "O(1)");
    assert_eq!(complexity["trees"]["search"], "O(log n)*");
    assert_eq!(complexity["graphs"]["space"], "O(V+E)");

    let descriptions = content.descriptions();
    assert_eq!(descriptions.as_object().unwrap().len(), 7);
    assert!(
        descriptions["hashTables"]
            .as_str()
            .unwrap()
            .contains("hash function")
    );

    let examples = content.code_examples();
    assert_eq!(examples.as_object().unwrap().len(), 7);
    assert!(
        examples["arraySearch"]
            .as_str()
            .unwrap()
            .contains("linearSearch")
    );

    let applications = content.applications();
    assert_eq!(applications["linkedLists"].as_array().unwrap().len(), 3);
    assert_eq!(applications["queues"][0]["title"], "Print Jobs");
}

#[test]
fn test_structure_detail_lookup() {
    let content = ContentStore::standard();

    let detail = content.structure_detail("linked-lists").unwrap();
    assert!(
        detail["description"]
            .as_str()
            .unwrap()
            .contains("sequence of nodes")
    );
    assert_eq!(detail["complexity"]["insert"], "O(1)");
    assert!(detail["codeExamples"]["linkedListInsert"].is_string());

    let detail = content.structure_detail("hash-tables").unwrap();
    assert!(detail["codeExamples"]["hashTableImplementation"].is_string());

    assert!(content.structure_detail("binary-heaps").is_none());
    assert!(content.structure_detail("").is_none());
}

#[test]
fn test_render_page_basic() {
    let deck = SlideDeck::standard();
    let html = render_page(&deck, &PageOptions::default()).unwrap();

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("<title>Algorithms &amp; Data Structures</title>"));

    // Exactly one slide starts active
    assert_eq!(html.matches("<section class=\"slide\"").count(), 7);
    assert_eq!(html.matches("<section class=\"slide active\"").count(), 1);
    assert!(html.contains("id=\"introduction\""));
    assert!(html.contains("id=\"summary\""));

    // Initial control state: first slide, prev disabled
    assert!(html.contains("<button id=\"prev-button\" disabled>"));
    assert!(html.contains("<button id=\"next-button\">"));
    assert!(html.contains("<span id=\"slide-counter\">1/8</span>"));
}

#[test]
fn test_render_page_with_local_css() {
    let css_file = create_temp_asset_file("body { background: #000; }");
    let options = PageOptions {
        css: vec![ThemeAsset::new(css_file.path().to_str().unwrap())],
        ..PageOptions::default()
    };

    let html = render_page(&SlideDeck::standard(), &options).unwrap();
    assert!(html.contains("<style>body { background: #000; }</style>"));
}

#[test]
fn test_render_page_with_linked_js() {
    let options = PageOptions {
        js: vec![ThemeAsset::new("https://example.com/theme.js")],
        ..PageOptions::default()
    };

    let html = render_page(&SlideDeck::standard(), &options).unwrap();
    assert!(html.contains(r#"<script src="https://example.com/theme.js"></script>"#));
}

#[test]
fn test_render_page_ws_url_switches_viewer_mode() {
    let deck = SlideDeck::standard();

    let connected = PageOptions {
        ws_url: Some("ws://{host}:5001".to_string()),
        ..PageOptions::default()
    };
    let html = render_page(&deck, &connected).unwrap();
    assert!(html.contains(r#"var wsUrl = "ws://{host}:5001";"#));

    // No sync channel: the viewer script falls back to local navigation
    let standalone = render_page(&deck, &PageOptions::default()).unwrap();
    assert!(standalone.contains(r#"var wsUrl = "";"#));
}

#[test]
fn test_theme_asset_remote_detection() {
    assert!(ThemeAsset::new("https://example.com/style.css").is_remote);
    assert!(ThemeAsset::new("http://example.com/theme.js").is_remote);
    assert!(!ThemeAsset::new("theme/style.css").is_remote);
    assert!(!ThemeAsset::new("/absolute/path.css").is_remote);
}

#[test]
fn test_theme_asset_tags() {
    let remote = ThemeAsset::new("https://example.com/style.css");
    assert_eq!(
        remote.tag(AssetKind::Css, true).unwrap(),
        r#"<link rel="stylesheet" href="https://example.com/style.css">"#
    );

    let js_file = create_temp_asset_file("function theme() { return true; }");
    let local = ThemeAsset::new(js_file.path().to_str().unwrap());
    assert_eq!(
        local.tag(AssetKind::Js, true).unwrap(),
        "<script>function theme() { return true; }</script>"
    );
    assert_eq!(
        local.tag(AssetKind::Js, false).unwrap(),
        format!(r#"<script src="{}"></script>"#, local.path)
    );
}

#[test]
fn test_theme_asset_missing_local_file() {
    let asset = ThemeAsset::new("does/not/exist.css");
    assert!(matches!(
        asset.content(),
        Err(SlidesError::PathNotFoundError(_))
    ));
}

#[test]
fn test_config_serve_option_defaults() {
    let config = Config::new();
    let options = config.get_serve_options(None, None, None);
    assert_eq!(options.host, "0.0.0.0");
    assert_eq!(options.port, 5000);
    assert_eq!(options.ws_port, 5001);

    let options = config.get_serve_options(Some("127.0.0.1".to_string()), Some(8000), None);
    assert_eq!(options.host, "127.0.0.1");
    assert_eq!(options.port, 8000);
    assert_eq!(options.ws_port, 8001);

    let options = config.get_serve_options(None, Some(8000), Some(9100));
    assert_eq!(options.ws_port, 9100);
}

#[test]
fn test_broadcaster_tracks_live_clients() {
    let navigator = Arc::new(standard_navigator());
    let broadcaster = Arc::new(SnapshotBroadcaster::new());
    navigator.observe(broadcaster.clone());
    assert_eq!(broadcaster.client_count(), 0);

    // Without clients a broadcast is a no-op
    navigator.request(Transition::Next);
    assert_eq!(navigator.current_index(), 1);
}
