//! Birth stages

use strum::Display;

/// Stage of the birth flow.
///
/// `Reset` through `FinalConfirm` form a strict linear order. `Complete`
/// and `Quit` are terminal; `Back` is the pseudo-stage a handler returns
/// to step back, and the terminal state after backing out of the first
/// menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Stage {
    Reset,
    SexChoice,
    RaceChoice,
    ClassChoice,
    RollerChoice,
    Roller,
    FinalConfirm,
    Complete,
    Quit,
    Back,
}

impl Stage {
    /// The stage after this one in the linear order
    pub const fn next(self) -> Stage {
        match self {
            Stage::Reset => Stage::SexChoice,
            Stage::SexChoice => Stage::RaceChoice,
            Stage::RaceChoice => Stage::ClassChoice,
            Stage::ClassChoice => Stage::RollerChoice,
            Stage::RollerChoice => Stage::Roller,
            Stage::Roller => Stage::FinalConfirm,
            Stage::FinalConfirm => Stage::Complete,
            other => other,
        }
    }

    /// The stage a Back transition from this one lands on.
    ///
    /// `SexChoice` has no predecessor: backing out of it leaves birth.
    pub const fn prev(self) -> Stage {
        match self {
            Stage::SexChoice => Stage::Back,
            Stage::RaceChoice => Stage::SexChoice,
            Stage::ClassChoice => Stage::RaceChoice,
            Stage::RollerChoice => Stage::ClassChoice,
            Stage::Roller => Stage::RollerChoice,
            Stage::FinalConfirm => Stage::Roller,
            other => other,
        }
    }

    /// Terminal stages end the birth loop
    pub const fn is_terminal(self) -> bool {
        matches!(self, Stage::Complete | Stage::Quit | Stage::Back)
    }
}
