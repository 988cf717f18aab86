//! Interactive session state driven by discrete input events.
//!
//! [`Session::update`] is a pure step: it consumes one [`Command`] and the
//! current state and returns the next state. Where the commands come from
//! (keyboard, script, test) is up to the caller.

use log::debug;

use crate::quaternion::Quaternion;
use crate::render::{Frame, Renderer};
use crate::scene::{EntityId, Scene};
use crate::sphere::Sphere;
use crate::vector::{Scalar, Vector3};

/// One discrete input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the selected entity forward.
    Forward,
    /// Move the selected entity backward.
    Backward,
    /// Turn the selected entity to its left.
    TurnLeft,
    /// Turn the selected entity to its right.
    TurnRight,
    /// Scale the selected entity up.
    Grow,
    /// Scale the selected entity down.
    Shrink,
    /// Select the next entity.
    NextEntity,
    /// Switch between third-person and first-person view.
    ToggleView,
}

impl Command {
    /// Map a key to a command: `w s a d` move and turn, `+ -` scale,
    /// `n` or tab cycles the selection, `v` or space toggles the view.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Self::Forward),
            's' => Some(Self::Backward),
            'a' => Some(Self::TurnLeft),
            'd' => Some(Self::TurnRight),
            '+' | '=' => Some(Self::Grow),
            '-' | '_' => Some(Self::Shrink),
            'n' | '\t' => Some(Self::NextEntity),
            'v' | ' ' => Some(Self::ToggleView),
            _ => None,
        }
    }

    /// Parse every recognised key in `keys`, skipping the rest.
    pub fn parse_keys(keys: &str) -> Vec<Self> {
        keys.chars().filter_map(Self::from_key).collect()
    }
}

/// Where the frame is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Fixed camera at the world origin.
    #[default]
    ThirdPerson,
    /// Camera attached to the selected entity.
    FirstPerson,
}

/// Step sizes applied by movement commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    /// Distance covered by one forward/backward step
    pub step: Scalar,
    /// Angle of one turn, in degrees, around world `+Y`
    pub turn_degrees: Scalar,
    /// Factor applied by one grow step (shrink uses its reciprocal)
    pub scale_factor: Scalar,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            step: 0.5,
            turn_degrees: 10.0,
            scale_factor: 1.1,
        }
    }
}

/// Scene plus the interaction state around it.
#[derive(Debug, Clone)]
pub struct Session {
    /// Entities being rendered
    pub scene: Scene,
    /// Entity the commands act on
    pub selected: Option<EntityId>,
    /// Current view mode
    pub view: ViewMode,
    /// Number of updates applied so far
    pub frame: u64,
    /// Step sizes
    pub controls: Controls,
}

impl Session {
    /// Start a session on `scene`, selecting its first entity.
    pub fn new(scene: Scene, controls: Controls) -> Self {
        let selected = scene.first_id();
        Self {
            scene,
            selected,
            view: ViewMode::default(),
            frame: 0,
            controls,
        }
    }

    /// Apply one command and return the next state.
    pub fn update(mut self, command: Command) -> Self {
        self.frame += 1;
        debug!("Frame {}: {:?}", self.frame, command);

        match command {
            Command::NextEntity => {
                self.selected = self.selected.and_then(|id| self.scene.next_id(id));
                return self;
            }
            Command::ToggleView => {
                self.view = match self.view {
                    ViewMode::ThirdPerson => ViewMode::FirstPerson,
                    ViewMode::FirstPerson => ViewMode::ThirdPerson,
                };
                return self;
            }
            _ => {}
        }

        let controls = self.controls;
        if let Some(entity) = self.selected.and_then(|id| self.scene.entity_mut(id)) {
            match command {
                Command::Forward => entity.advance(controls.step),
                Command::Backward => entity.advance(-controls.step),
                Command::TurnLeft => entity.turn(&Quaternion::from_angle_axis(
                    -controls.turn_degrees,
                    Vector3::UNIT_Y,
                )),
                Command::TurnRight => entity.turn(&Quaternion::from_angle_axis(
                    controls.turn_degrees,
                    Vector3::UNIT_Y,
                )),
                Command::Grow => entity.rescale(controls.scale_factor),
                Command::Shrink => entity.rescale(1.0 / controls.scale_factor),
                Command::NextEntity | Command::ToggleView => {}
            }
        }
        self
    }

    /// Spheres as seen from the current view.
    ///
    /// First-person view falls back to world space when nothing is selected.
    pub fn visible_spheres(&self) -> Vec<Sphere> {
        let observer = self.selected.and_then(|id| self.scene.entity(id));
        match (self.view, observer) {
            (ViewMode::FirstPerson, Some(entity)) => self.scene.to_view(&entity.transform),
            _ => self.scene.to_world(),
        }
    }

    /// Render the current view.
    pub fn render(&self, renderer: &Renderer) -> Frame {
        renderer.render(&self.visible_spheres())
    }
}
