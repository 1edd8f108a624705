//! Configuration file through to a running input core

use framekey_shared::{ButtonCode, Scancode, TargetVersion};

use crate::config::{CONFIG_FILE, InputConfig, load_from, save_to};
use crate::input::{Input, default_bindings};
use crate::platform::PlatformState;
use crate::test_utils::FrameDriver;

#[test]
fn test_user_key_map_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    std::fs::write(
        &path,
        r#"
target_version = 3
joystick_axis_threshold = 8192

[[bindings]]
target = "A"
source = { key = "J" }

[[bindings]]
target = "Right"
source = { joy_axis = { axis = 0, dir = "positive" } }
"#,
    )
    .unwrap();

    let config = load_from(&path).unwrap();
    let mut driver = FrameDriver::with_config(config);
    driver.press(Scancode::J);
    driver.platform.joystick.axes[0] = 0x2001;

    let input = driver.frame();
    assert_eq!(input.target_version(), TargetVersion::V3);
    assert!(input.is_pressed(ButtonCode::A.value()));
    // Lowered threshold
    assert!(input.is_pressed(ButtonCode::Right.value()));
}

#[test]
fn test_saved_defaults_behave_like_builtin_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);

    let config = InputConfig {
        target_version: TargetVersion::V2,
        bindings: Some(default_bindings(TargetVersion::V2)),
        ..InputConfig::default()
    };
    save_to(&config, &path).unwrap();

    let loaded = load_from(&path).unwrap();
    let builtin = InputConfig {
        target_version: TargetVersion::V2,
        ..InputConfig::default()
    };

    let mut from_file = Input::new(&loaded);
    let mut from_defaults = Input::new(&builtin);
    let mut platform = PlatformState::new();
    for scancode in [Scancode::Z, Scancode::ESCAPE, Scancode::LEFT] {
        platform.set_key(scancode, true);
    }
    from_file.update(&platform);
    from_defaults.update(&platform);

    for button in ButtonCode::ALL {
        assert_eq!(
            from_file.state(button),
            from_defaults.state(button),
            "{} differs",
            button
        );
    }
    assert!(from_file.is_pressed(ButtonCode::C.value()));
}
