use approx::assert_relative_eq;
use stacked_area::ChartError;
use stacked_area::core::{CartesianMapper, CoordinateMapper, LinearScale, Viewport};

fn mapper() -> CartesianMapper {
    CartesianMapper::from_ranges(Viewport::new(1000, 500), (0.0, 10.0), (0.0, 100.0))
        .expect("mapper")
}

#[test]
fn linear_scale_rejects_degenerate_domain() {
    assert!(LinearScale::new(5.0, 5.0).is_err());
    assert!(LinearScale::new(0.0, f64::INFINITY).is_err());
}

#[test]
fn linear_scale_pixel_round_trip() {
    let scale = LinearScale::new(-50.0, 50.0).expect("scale");
    let px = scale.domain_to_pixel(25.0, 800.0);
    assert!((px - 600.0).abs() <= 1e-9);
    let value = scale.pixel_to_domain(px, 800.0).expect("to domain");
    assert!((value - 25.0).abs() <= 1e-9);
    assert!(scale.pixel_to_domain(f64::NAN, 800.0).is_err());
}

#[test]
fn upright_mapper_puts_maximum_at_top_row() {
    let mapper = mapper();
    assert_relative_eq!(mapper.point_to_pixel_x(5.0, 0.0), 500.0);
    assert_relative_eq!(mapper.point_to_pixel_y(5.0, 100.0), 0.0);
    assert_relative_eq!(mapper.point_to_pixel_y(5.0, 25.0), 375.0);
    assert_relative_eq!(mapper.visible_range_minimum(), 0.0);
}

#[test]
fn transposed_mapper_swaps_axes() {
    let mapper = mapper().with_transposed(true);
    assert!(mapper.is_transposed());
    // y data runs horizontally across the width, x data vertically.
    assert_relative_eq!(mapper.point_to_pixel_x(5.0, 50.0), 500.0);
    assert_relative_eq!(mapper.point_to_pixel_y(10.0, 50.0), 0.0);
    assert_relative_eq!(mapper.primary_pixel(0.0), 500.0);
}

#[test]
fn inverted_axes_flip_pixel_direction() {
    let mapper = mapper().with_x_inverted(true).with_y_inverted(true);
    assert_relative_eq!(mapper.point_to_pixel_x(0.0, 0.0), 1000.0);
    assert_relative_eq!(mapper.point_to_pixel_y(0.0, 100.0), 500.0);
}

#[test]
fn missing_values_map_to_nan() {
    let mapper = mapper();
    assert!(mapper.point_to_pixel_y(1.0, f64::NAN).is_nan());
    assert!(mapper.point_to_pixel_x(f64::NAN, 1.0).is_nan());
}

#[test]
fn mapper_rejects_invalid_viewport() {
    let err = CartesianMapper::from_ranges(Viewport::new(0, 10), (0.0, 1.0), (0.0, 1.0))
        .expect_err("invalid viewport");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, height: 10 }));
}
