// SPDX-License-Identifier: MPL-2.0

use super::*;
use std::sync::Arc;

fn test_image(width: u32, height: u32) -> ImageData {
    let pixels = vec![128_u8; (width * height * 4) as usize];
    ImageData::from_rgba(width, height, pixels)
}

fn test_state() -> State {
    State::new(
        FilterCatalog::builtin(),
        test_image(4, 3),
        Path::new("/photos/holiday.png"),
        ExportFormat::Png,
        None,
    )
}

fn preset(state: &State, name: &str) -> FilterPreset {
    state.catalog().get(name).cloned().expect("catalog preset")
}

// ===== Initialization =====

#[test]
fn new_session_starts_on_default_preset() {
    let state = test_state();

    assert_eq!(state.active_filter(), state.catalog().default_preset());
    assert!(state.active_filter().is_identity());
    assert!(!state.is_exporting());
}

#[test]
fn new_session_preview_shares_source_pixels() {
    // Small sources need neither downscale nor filtering at open time.
    let state = test_state();

    assert!(Arc::ptr_eq(
        &state.preview().rgba_arc(),
        &state.source.rgba_arc()
    ));
}

#[test]
fn file_stem_is_derived_from_source_path() {
    let state = test_state();
    assert_eq!(state.file_stem, "holiday");
}

// ===== Selection =====

#[test]
fn selecting_a_preset_activates_it_and_recomputes_preview() {
    let mut state = test_state();
    let negative = preset(&state, "Negative");

    let event = state.update(Message::FilterSelected(negative.clone()));

    assert!(matches!(event, Event::None));
    assert_eq!(state.active_filter(), &negative);
    // 128 inverts to 127; alpha stays untouched.
    assert_eq!(state.preview().rgba_bytes()[0], 127);
    assert_eq!(state.preview().rgba_bytes()[3], 128);
}

#[test]
fn selecting_the_active_preset_is_a_no_op() {
    let mut state = test_state();
    let sepia = preset(&state, "Sepia");
    let _ = state.update(Message::FilterSelected(sepia.clone()));
    let before = state.preview().rgba_arc();

    let event = state.update(Message::FilterSelected(sepia));

    assert!(matches!(event, Event::None));
    // Same buffer: the preview was not recomputed.
    assert!(Arc::ptr_eq(&before, &state.preview().rgba_arc()));
}

#[test]
fn selecting_unknown_filter_is_ignored() {
    let mut state = test_state();
    let rogue = FilterPreset::new("Nightvision", "invert(1)");

    let event = state.update(Message::FilterSelected(rogue));

    assert!(matches!(event, Event::None));
    assert_eq!(state.active_filter(), state.catalog().default_preset());
}

#[test]
fn selection_resolves_presets_by_name() {
    // Name is the preset's identity: a doctored transform smuggled in under
    // a known name must never reach the render layer.
    let mut state = test_state();
    let doctored = FilterPreset::new("Negative", "garbage(");

    let _ = state.update(Message::FilterSelected(doctored));

    assert_eq!(state.active_filter().transform, "invert(1)");
}

// ===== Download =====

#[test]
fn download_snapshots_the_active_filter() {
    let mut state = test_state();
    let sepia = preset(&state, "Sepia");
    let _ = state.update(Message::FilterSelected(sepia.clone()));

    let event = state.update(Message::DownloadPressed);

    let Event::ExportRequested(request) = event else {
        panic!("expected an export request");
    };
    assert!(state.is_exporting());
    assert_eq!(request.filter_name, "Sepia");
    assert_eq!(request.transform, sepia.transform);
    assert_eq!(request.file_stem, "holiday");
    assert_eq!((request.width, request.height), (4, 3));
    // The snapshot borrows the frame instead of copying it.
    assert!(Arc::ptr_eq(&request.rgba, &state.source.rgba_arc()));
}

#[test]
fn second_download_while_exporting_is_rejected() {
    let mut state = test_state();
    let first = state.update(Message::DownloadPressed);
    assert!(matches!(first, Event::ExportRequested(_)));

    let second = state.update(Message::DownloadPressed);

    assert!(matches!(second, Event::None));
    assert!(state.is_exporting());
}

#[test]
fn selection_during_export_changes_preview_not_snapshot() {
    let mut state = test_state();
    let Event::ExportRequested(request) = state.update(Message::DownloadPressed) else {
        panic!("expected an export request");
    };

    let noir = preset(&state, "Noir");
    let event = state.update(Message::FilterSelected(noir.clone()));

    assert!(matches!(event, Event::None));
    assert!(state.is_exporting());
    assert_eq!(state.active_filter(), &noir);
    // The in-flight request still carries the filter from trigger time.
    assert_eq!(request.filter_name, "Original");
}

#[test]
fn download_carries_format_and_destination() {
    let dest = PathBuf::from("/exports");
    let mut state = State::new(
        FilterCatalog::builtin(),
        test_image(2, 2),
        Path::new("/photos/cat.jpg"),
        ExportFormat::Jpeg,
        Some(dest.clone()),
    );

    let Event::ExportRequested(request) = state.update(Message::DownloadPressed) else {
        panic!("expected an export request");
    };
    assert_eq!(request.format, ExportFormat::Jpeg);
    assert_eq!(request.destination, Some(dest));
}

#[test]
fn oversized_source_previews_downscaled_but_exports_full_resolution() {
    let source = test_image(filter_render::PREVIEW_MAX_EDGE * 2, 2);
    let mut state = State::new(
        FilterCatalog::builtin(),
        source,
        Path::new("/photos/pano.png"),
        ExportFormat::Png,
        None,
    );

    assert_eq!(state.preview().width, filter_render::PREVIEW_MAX_EDGE);

    let Event::ExportRequested(request) = state.update(Message::DownloadPressed) else {
        panic!("expected an export request");
    };
    assert_eq!(request.width, filter_render::PREVIEW_MAX_EDGE * 2);
}

// ===== Completion =====

#[test]
fn successful_completion_resets_state_and_closes() {
    let mut state = test_state();
    let _ = state.update(Message::DownloadPressed);

    let event = state.update(Message::ExportFinished(Ok(PathBuf::from(
        "/downloads/holiday-sepia.png",
    ))));

    assert!(!state.is_exporting());
    assert!(matches!(event, Event::CloseRequested));
}

#[test]
fn failed_export_still_closes_the_dialog() {
    let mut state = test_state();
    let _ = state.update(Message::DownloadPressed);

    let event = state.update(Message::ExportFinished(Err(ExportError::Io(
        "disk full".to_string(),
    ))));

    assert!(!state.is_exporting());
    assert!(matches!(event, Event::CloseRequested));
}

#[test]
fn session_can_export_again_after_completion() {
    let mut state = test_state();
    let _ = state.update(Message::DownloadPressed);
    let _ = state.update(Message::ExportFinished(Ok(PathBuf::from("/tmp/out.png"))));

    let noir = preset(&state, "Noir");
    let _ = state.update(Message::FilterSelected(noir));
    let event = state.update(Message::DownloadPressed);

    let Event::ExportRequested(request) = event else {
        panic!("expected an export request");
    };
    assert_eq!(request.filter_name, "Noir");
}

// ===== Close =====

#[test]
fn close_while_idle_requests_teardown() {
    let mut state = test_state();

    let event = state.update(Message::ClosePressed);

    assert!(matches!(event, Event::CloseRequested));
}

#[test]
fn close_is_ignored_while_exporting() {
    let mut state = test_state();
    let _ = state.update(Message::DownloadPressed);

    let event = state.update(Message::ClosePressed);

    assert!(matches!(event, Event::None));
    assert!(state.is_exporting());
}
