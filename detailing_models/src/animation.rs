use std::{fmt, time::Duration};

/// Transitions the booking form plays while moving between its states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The form fades out upwards after a submission.
    FormExit,
    /// The success panel pops in.
    SuccessEntrance,
    /// The form slides back in after a reset.
    FormEntrance,
}

impl Transition {
    pub fn tween(self) -> Tween {
        match self {
            Self::FormExit => Tween {
                direction: TweenDirection::To,
                duration: Duration::from_millis(500),
                y: -30.0,
                scale: 1.0,
                opacity: 0.0,
                ease: Ease::Power1Out,
            },
            Self::SuccessEntrance => Tween {
                direction: TweenDirection::From,
                duration: Duration::from_millis(800),
                y: 0.0,
                scale: 0.8,
                opacity: 0.0,
                ease: Ease::BackOut,
            },
            Self::FormEntrance => Tween {
                direction: TweenDirection::From,
                duration: Duration::from_millis(800),
                y: 30.0,
                scale: 1.0,
                opacity: 0.0,
                ease: Ease::Power3Out,
            },
        }
    }
}

/// Declarative description of a property animation, handed to whatever
/// animation engine the host page uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub direction: TweenDirection,
    pub duration: Duration,
    /// Vertical offset in pixels.
    pub y: f32,
    pub scale: f32,
    pub opacity: f32,
    pub ease: Ease,
}

/// Whether the tween animates from the given values to the element's current
/// state, or from the current state to the given values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenDirection {
    From,
    To,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ease {
    Power1Out,
    Power3Out,
    BackOut,
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power1Out => f.write_str("power1.out"),
            Self::Power3Out => f.write_str("power3.out"),
            Self::BackOut => f.write_str("back.out(1.7)"),
        }
    }
}
