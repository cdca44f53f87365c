// Host-side tests for color parsing and the shared material color.

use toon_scroll::color::*;

#[test]
fn parses_with_and_without_hash() {
    let a = Color::from_hex("#ffeded").unwrap();
    let b: Color = "FFEDED".parse().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.r, 1.0);
    assert!((a.g - 237.0 / 255.0).abs() < 1e-6);
    assert_eq!(a.to_hex(), "#ffeded");
    assert_eq!(a.to_string(), "#ffeded");
}

#[test]
fn rejects_malformed_hex() {
    assert_eq!(
        Color::from_hex("#fff"),
        Err(ColorParseError::Length("#fff".into()))
    );
    assert_eq!(
        Color::from_hex("#gg0000"),
        Err(ColorParseError::Digit("#gg0000".into()))
    );
    assert_eq!(
        Color::from_hex("#+f+f+f"),
        Err(ColorParseError::Digit("#+f+f+f".into()))
    );
    assert_eq!(
        Color::from_hex("-fffff"),
        Err(ColorParseError::Digit("-fffff".into()))
    );
    assert!(Color::from_hex("#ffé000").is_err());
}

#[test]
fn srgb_to_linear_endpoints() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    assert!(srgb_to_linear(0.5) < 0.5);
    assert_eq!(Color::WHITE.to_linear(), [1.0, 1.0, 1.0].map(srgb_to_linear));
}

#[derive(Default)]
struct Probe {
    color: Option<Color>,
    applied: usize,
}

impl ColorTarget for Probe {
    fn apply_color(&mut self, color: Color) {
        self.color = Some(color);
        self.applied += 1;
    }
}

#[test]
fn set_reaches_every_target() {
    let mut shared = SharedColor::new(Color::WHITE);
    let mut a = Probe::default();
    let mut b = Probe::default();
    let red = Color::new(1.0, 0.0, 0.0);
    {
        let mut targets: [&mut dyn ColorTarget; 2] = [&mut a, &mut b];
        shared.set(red, &mut targets);
    }
    assert_eq!(shared.get(), red);
    assert_eq!(shared.revision(), 1);
    assert_eq!((a.color, b.color), (Some(red), Some(red)));
    assert_eq!((a.applied, b.applied), (1, 1));
}
