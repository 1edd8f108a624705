//! Replay command - step a scripted frame sequence through the input core
//!
//! Scenario files are TOML:
//!
//! ```toml
//! target_version = 2
//! frames = 40
//! watch = ["Down", "C"]
//!
//! [[steps]]
//! frame = 0
//! press = ["Down"]
//!
//! [[steps]]
//! frame = 30
//! release = ["Down"]
//! axes = [{ axis = 0, value = -32768 }]
//! ```

use anyhow::{Context, Result, bail};
use clap::Args;
use serde::Deserialize;
use std::fmt::Write as _;
use std::path::PathBuf;

use framekey_core::platform::FingerState;
use framekey_core::{
    BindingDesc, ButtonCode, HatPos, Input, InputConfig, PlatformState, Scancode,
    ScreenTransform, TargetVersion,
};

/// Arguments for the replay command
#[derive(Args)]
pub struct ReplayArgs {
    /// Scenario file (.toml)
    pub scenario: PathBuf,

    /// Override the scenario's target version
    #[arg(short = 't', long = "target")]
    pub target_version: Option<u8>,

    /// Only print frames where a watched button changed
    #[arg(long)]
    pub changes_only: bool,
}

/// A scripted input sequence.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub target_version: Option<TargetVersion>,

    /// Number of frames to run
    pub frames: u32,

    /// Buttons to report (default: all)
    #[serde(default)]
    pub watch: Vec<ButtonCode>,

    /// Key map to start with (default: the version's defaults)
    #[serde(default)]
    pub bindings: Option<Vec<BindingDesc>>,

    #[serde(default)]
    pub touch_emulates_mouse: bool,

    #[serde(default)]
    pub screen: Option<ScreenStep>,

    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Changes applied to the platform snapshot before a frame's update.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub frame: u32,
    #[serde(default)]
    pub press: Vec<Scancode>,
    #[serde(default)]
    pub release: Vec<Scancode>,
    #[serde(default)]
    pub mouse_down: Vec<u8>,
    #[serde(default)]
    pub mouse_up: Vec<u8>,
    #[serde(default)]
    pub cursor: Option<(i32, i32)>,
    #[serde(default)]
    pub axes: Vec<AxisStep>,
    #[serde(default)]
    pub hats: Vec<HatStep>,
    #[serde(default)]
    pub joy_down: Vec<u8>,
    #[serde(default)]
    pub joy_up: Vec<u8>,
    #[serde(default)]
    pub touch: Vec<TouchStep>,
    /// Post a new key map through the mailbox
    #[serde(default)]
    pub rebind: Option<Vec<BindingDesc>>,
}

#[derive(Debug, Deserialize)]
pub struct AxisStep {
    pub axis: u8,
    pub value: i16,
}

#[derive(Debug, Deserialize)]
pub struct HatStep {
    pub hat: u8,
    pub pos: HatPos,
}

#[derive(Debug, Deserialize)]
pub struct TouchStep {
    pub finger: usize,
    pub down: bool,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

#[derive(Debug, Deserialize)]
pub struct ScreenStep {
    #[serde(default)]
    pub offset: (i32, i32),
    pub ratio: (f64, f64),
}

/// Execute the replay command
pub fn execute(args: ReplayArgs) -> Result<()> {
    let content = std::fs::read_to_string(&args.scenario)
        .with_context(|| format!("Failed to read scenario: {}", args.scenario.display()))?;
    let mut scenario: Scenario = toml::from_str(&content)
        .with_context(|| format!("Failed to parse scenario: {}", args.scenario.display()))?;

    if let Some(version) = args.target_version {
        scenario.target_version = Some(TargetVersion(version));
    }

    let lines = run(&scenario, args.changes_only)?;
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

/// Run a scenario and return one report line per printed frame.
pub fn run(scenario: &Scenario, changes_only: bool) -> Result<Vec<String>> {
    if let Some(step) = scenario.steps.iter().find(|s| s.frame >= scenario.frames) {
        bail!(
            "Step at frame {} is past the end of the scenario ({} frames)",
            step.frame,
            scenario.frames
        );
    }

    let config = InputConfig {
        target_version: scenario.target_version.unwrap_or_default(),
        touch_emulates_mouse: scenario.touch_emulates_mouse,
        bindings: scenario.bindings.clone(),
        ..InputConfig::default()
    };
    let mut input = Input::new(&config);
    if let Some(screen) = &scenario.screen {
        input.set_screen_transform(ScreenTransform {
            offset_x: screen.offset.0,
            offset_y: screen.offset.1,
            ratio_x: screen.ratio.0,
            ratio_y: screen.ratio.1,
        });
    }
    let mailbox = input.mailbox();
    let mut platform = PlatformState::new();

    let watch: Vec<ButtonCode> = if scenario.watch.is_empty() {
        ButtonCode::ALL.to_vec()
    } else {
        scenario.watch.clone()
    };

    tracing::info!(
        "Replaying {} frames at target version {}",
        scenario.frames,
        config.target_version.0
    );

    let mut lines = Vec::new();
    let mut last_report = String::new();
    for frame in 0..scenario.frames {
        for step in scenario.steps.iter().filter(|s| s.frame == frame) {
            apply_step(&mut platform, step);
            if let Some(bindings) = &step.rebind {
                mailbox.post(bindings.clone());
            }
        }

        input.update(&platform);

        let report = report(&input, &watch);
        if !changes_only || report != last_report {
            lines.push(format!("{:>5}  {}", frame, report));
        }
        last_report = report;
    }

    Ok(lines)
}

fn apply_step(platform: &mut PlatformState, step: &Step) {
    for &scancode in &step.press {
        platform.set_key(scancode, true);
    }
    for &scancode in &step.release {
        platform.set_key(scancode, false);
    }
    for &button in &step.mouse_down {
        platform.set_mouse_button(button, true);
    }
    for &button in &step.mouse_up {
        platform.set_mouse_button(button, false);
    }
    if let Some((x, y)) = step.cursor {
        platform.mouse.x = x;
        platform.mouse.y = y;
    }
    for axis in &step.axes {
        match platform.joystick.axes.get_mut(axis.axis as usize) {
            Some(value) => *value = axis.value,
            None => tracing::warn!("Ignoring step for axis {}", axis.axis),
        }
    }
    for hat in &step.hats {
        match platform.joystick.hats.get_mut(hat.hat as usize) {
            Some(pos) => *pos = hat.pos,
            None => tracing::warn!("Ignoring step for hat {}", hat.hat),
        }
    }
    for (buttons, down) in [(&step.joy_down, true), (&step.joy_up, false)] {
        for &button in buttons {
            match platform.joystick.buttons.get_mut(button as usize) {
                Some(state) => *state = down,
                None => tracing::warn!("Ignoring step for joystick button {}", button),
            }
        }
    }
    for touch in &step.touch {
        match platform.touch.fingers.get_mut(touch.finger) {
            Some(finger) => {
                *finger = FingerState {
                    down: touch.down,
                    x: touch.x,
                    y: touch.y,
                }
            }
            None => tracing::warn!("Ignoring touch step for finger {}", touch.finger),
        }
    }
}

/// One-line summary of the watched buttons: `+` pressed, `!` triggered,
/// `*` repeated.
fn report(input: &Input, watch: &[ButtonCode]) -> String {
    let mut line = format!("dir4={} dir8={}", input.dir4_value(), input.dir8_value());
    for &button in watch {
        let state = input.state(button);
        if !state.pressed {
            continue;
        }
        let _ = write!(line, " {}+", button);
        if state.triggered {
            line.push('!');
        }
        if state.repeated {
            line.push('*');
        }
    }
    let (x, y) = input.cursor_pos();
    let _ = write!(line, " cursor=({}, {})", x, y);
    line
}
