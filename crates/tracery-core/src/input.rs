//! Keyboard modifier state as seen by hit-testing and snapping.

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Modifier keys held while a query is issued.
    ///
    /// Only [`ModifierFlags::SHIFT`] changes query results: it drills into
    /// figure segments instead of treating the figure as one unit.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ModifierFlags: u8 {
        const ALT     = 0b0000_0001;
        const CONTROL = 0b0000_0010;
        const SHIFT   = 0b0000_0100;
    }
}

/// Modifier keys state, as reported by the windowing layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Only Shift held.
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

impl From<Modifiers> for ModifierFlags {
    fn from(modifiers: Modifiers) -> Self {
        let mut flags = ModifierFlags::empty();
        flags.set(ModifierFlags::SHIFT, modifiers.shift);
        // Cmd acts as Control on macOS.
        flags.set(ModifierFlags::CONTROL, modifiers.ctrl || modifiers.meta);
        flags.set(ModifierFlags::ALT, modifiers.alt);
        flags
    }
}
