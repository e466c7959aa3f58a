//! End-to-end positioning scenarios: dropdowns near viewport edges, scrolled
//! pages, relatively positioned parents and configured offsets.

use anchor_positioner::{
    position, position_with_config, AnchorSpec, OffsetParent, PositionError, PositionRequest,
    PositionResult, PositionerConfig, Positioning, Rect, Size, SpecError, Viewport, WindowMetrics,
};
use pretty_assertions::assert_eq;

fn viewport(width: f64, height: f64) -> Viewport {
    Viewport::from_rect(Rect::new(0.0, 0.0, width, height))
}

/// Position and flatten to (left, top, label)
fn place(request: &PositionRequest) -> (f64, f64, String) {
    let result = position(request).expect("Positioning should succeed");
    (result.left, result.top, result.label())
}

#[test]
fn test_dropdown_near_bottom_opens_above() {
    let request = PositionRequest::new(Size::new(40.0, 30.0), viewport(800.0, 515.0))
        .with_context(Rect::new(100.0, 500.0, 50.0, 20.0))
        .with_points("lt lb")
        .with_offset("0 0");

    assert_eq!(place(&request), (100.0, 470.0, "top".to_string()));
}

#[test]
fn test_side_panel_near_right_edge_right_aligns() {
    let request = PositionRequest::new(Size::new(100.0, 20.0), viewport(750.0, 600.0))
        .with_context(Rect::new(700.0, 10.0, 50.0, 20.0))
        .with_points("lt rt");

    assert_eq!(place(&request), (650.0, 10.0, "right-right".to_string()));
}

#[test]
fn test_no_room_either_side_keeps_default() {
    let request = PositionRequest::new(Size::new(40.0, 50.0), viewport(800.0, 80.0))
        .with_context(Rect::new(100.0, 40.0, 50.0, 20.0))
        .with_points("lt lb");

    assert_eq!(place(&request), (100.0, 60.0, "bottom".to_string()));
}

#[test]
fn test_dropdown_fits_below_with_offset() {
    let request = PositionRequest::new(Size::new(40.0, 30.0), viewport(800.0, 600.0))
        .with_context(Rect::new(100.0, 100.0, 50.0, 20.0))
        .with_points("lt lb")
        .with_offset("0 5");

    assert_eq!(place(&request), (100.0, 125.0, "bottom".to_string()));
}

#[test]
fn test_scrolled_page_uses_page_coordinates() {
    let config = PositionerConfig::default();
    let window = WindowMetrics::new(1024.0, 768.0).with_scroll(0.0, 1000.0);
    let request = PositionRequest::new(Size::new(120.0, 60.0), config.viewport(&window))
        .with_context(Rect::new(200.0, 1740.0, 80.0, 20.0))
        .with_points("lt lb");

    let result = position_with_config(&request, &config).unwrap();
    assert_eq!(result, PositionResult::new(200.0, 1680.0, result.direction));
    assert_eq!(result.label(), "top");
}

#[test]
fn test_relative_parent_shifts_coordinates() {
    let parent = OffsetParent::new(Rect::new(50.0, 300.0, 400.0, 400.0), Positioning::Relative);
    let request = PositionRequest::new(Size::new(40.0, 30.0), viewport(800.0, 600.0))
        .with_offset_parent(parent)
        .with_points("lt lb");

    let near_top = request.clone().with_context(Rect::new(100.0, 350.0, 50.0, 20.0));
    assert_eq!(place(&near_top), (50.0, 70.0, "bottom".to_string()));

    // 280 below the context is 580 on the page, too low for a 30px element
    let near_bottom = request.with_context(Rect::new(100.0, 560.0, 50.0, 20.0));
    assert_eq!(place(&near_bottom), (50.0, 230.0, "top".to_string()));
}

#[test]
fn test_static_parent_is_ignored() {
    let parent = OffsetParent::new(Rect::new(50.0, 300.0, 400.0, 400.0), Positioning::Absolute);
    let request = PositionRequest::new(Size::new(40.0, 30.0), viewport(800.0, 600.0))
        .with_offset_parent(parent)
        .with_context(Rect::new(100.0, 350.0, 50.0, 20.0))
        .with_points("lt lb");

    assert_eq!(place(&request), (100.0, 370.0, "bottom".to_string()));
}

#[test]
fn test_hold_ignores_overflow() {
    let request = PositionRequest::new(Size::new(40.0, 30.0), viewport(800.0, 515.0))
        .with_context(Rect::new(100.0, 500.0, 50.0, 20.0))
        .with_points("lt lb")
        .with_hold(true);

    assert_eq!(place(&request), (100.0, 520.0, "bottom".to_string()));
}

#[test]
fn test_centered_ignores_viewport() {
    let request = PositionRequest::new(Size::new(400.0, 300.0), viewport(100.0, 100.0))
        .with_context(Rect::new(80.0, 80.0, 40.0, 40.0));

    assert_eq!(place(&request), (-100.0, -50.0, "center".to_string()));
}

#[test]
fn test_unlabeled_points_have_no_direction() {
    let request = PositionRequest::new(Size::new(40.0, 30.0), viewport(800.0, 600.0))
        .with_context(Rect::new(100.0, 100.0, 50.0, 20.0))
        .with_points("lt lt");

    let result = position(&request).unwrap();
    assert_eq!(result, PositionResult::new(100.0, 100.0, None));
}

#[test]
fn test_malformed_points_rejected() {
    let request = PositionRequest::new(Size::new(40.0, 30.0), viewport(800.0, 600.0))
        .with_points("left bottom");

    let err = position(&request).unwrap_err();
    assert_eq!(
        err,
        PositionError::Configuration(SpecError::anchor_length("left", 0..4))
    );
}

#[test]
fn test_preset_labels_are_stable() {
    let labels: Vec<String> = ["lt lb", "lb lt", "rt rb", "rb rt", "lt rt", "cm cm"]
        .iter()
        .map(|points| {
            AnchorSpec::parse(points)
                .unwrap()
                .direction()
                .map(|d| d.to_string())
                .unwrap_or_default()
        })
        .collect();

    insta::assert_snapshot!(labels.join(" "), @"bottom top bottom top right center");
}
