// Host-side tests for the toon gradient ramp.

use toon_scroll::gradient::*;

#[test]
fn fallback_steps_are_grey_and_increasing() {
    let ramp = GradientRamp::steps(3);
    assert_eq!((ramp.width, ramp.height), (3, 1));
    assert_eq!(ramp.bytes_per_row(), 12);
    let lum: Vec<u8> = ramp.rgba.chunks(4).map(|px| px[0]).collect();
    assert_eq!(lum, vec![0, 128, 255]);
    assert!(ramp.rgba.chunks(4).all(|px| px[0] == px[1] && px[1] == px[2] && px[3] == 255));
}

#[test]
fn steps_has_at_least_two_texels() {
    assert_eq!(GradientRamp::steps(0).width, 2);
    assert_eq!(GradientRamp::steps(1).width, 2);
}

#[test]
fn from_rgba_validates_size() {
    assert!(GradientRamp::from_rgba(3, 1, vec![0; 12]).is_ok());
    assert_eq!(
        GradientRamp::from_rgba(0, 1, Vec::new()),
        Err(GradientError::Empty)
    );
    assert_eq!(
        GradientRamp::from_rgba(3, 1, vec![0; 9]),
        Err(GradientError::Size {
            width: 3,
            height: 1,
            expected: 12,
            actual: 9,
        })
    );
}
