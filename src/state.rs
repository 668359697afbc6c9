//! Permission flags, menu cursor and the gate decision.
//!
//! [`SystemState`] is the single record that drives every output. The menu
//! edits it one field per joystick event through [`SystemState::apply`], and
//! [`SystemState::recompute_gate`] derives the gate decision from it.

use crate::direction::Direction;

/// Number of editable toggle lines in the menu.
pub const LINE_COUNT: usize = 4;

/// One editable line of the menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToggleLine {
    /// General access check (GR).
    General,
    /// Opening-hours check (HO).
    Hours,
    /// Identity check (DI).
    Identity,
    /// Free-passage switch (PT), stored inverted.
    PassThrough,
}

impl ToggleLine {
    /// All lines in display order.
    pub const ALL: [ToggleLine; LINE_COUNT] = [
        ToggleLine::General,
        ToggleLine::Hours,
        ToggleLine::Identity,
        ToggleLine::PassThrough,
    ];

    /// Returns the line at `index`, or `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this line in the menu.
    pub fn index(self) -> usize {
        match self {
            ToggleLine::General => 0,
            ToggleLine::Hours => 1,
            ToggleLine::Identity => 2,
            ToggleLine::PassThrough => 3,
        }
    }

    /// Two-letter label shown on the display.
    pub fn label(self) -> &'static str {
        match self {
            ToggleLine::General => "GR",
            ToggleLine::Hours => "HO",
            ToggleLine::Identity => "DI",
            ToggleLine::PassThrough => "PT",
        }
    }
}

/// Menu cursor. Always selects one of the [`LINE_COUNT`] toggle lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor(u8);

impl Cursor {
    /// Cursor on the first line.
    pub const fn new() -> Self {
        Cursor(0)
    }

    /// Places the cursor at `index`, wrapping into range.
    pub fn at(index: usize) -> Self {
        Cursor((index % LINE_COUNT) as u8)
    }

    /// Selected line index, in `0..LINE_COUNT`.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Selected line.
    pub fn line(self) -> ToggleLine {
        ToggleLine::ALL[self.index()]
    }

    /// Moves one line up, wrapping from the first line to the last.
    pub fn up(self) -> Self {
        Cursor::at(self.index() + LINE_COUNT - 1)
    }

    /// Moves one line down, wrapping from the last line to the first.
    pub fn down(self) -> Self {
        Cursor::at(self.index() + 1)
    }
}

/// The four stored permission flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Permissions {
    /// GR
    pub general: bool,
    /// HO
    pub hours: bool,
    /// DI
    pub identity: bool,
    /// PT as stored. While `true`, passage requires GR, HO and DI; the PT
    /// line reads OFF.
    pub locked: bool,
}

impl Permissions {
    /// Power-on flags: every check off and the lock engaged.
    pub const fn new() -> Self {
        Self {
            general: false,
            hours: false,
            identity: false,
            locked: true,
        }
    }

    /// Displayed ON/OFF state of `line`.
    ///
    /// For [`ToggleLine::PassThrough`] this is the inverse of the stored
    /// `locked` flag, so ON always means the line is letting people through.
    pub fn is_on(&self, line: ToggleLine) -> bool {
        match line {
            ToggleLine::General => self.general,
            ToggleLine::Hours => self.hours,
            ToggleLine::Identity => self.identity,
            ToggleLine::PassThrough => !self.locked,
        }
    }

    /// Switches `line` ON or OFF, using the same inversion as [`is_on`](Self::is_on).
    pub fn set(&mut self, line: ToggleLine, on: bool) {
        match line {
            ToggleLine::General => self.general = on,
            ToggleLine::Hours => self.hours = on,
            ToggleLine::Identity => self.identity = on,
            ToggleLine::PassThrough => self.locked = !on,
        }
    }

    /// Gate decision: open when unlocked, or when every check passes.
    #[inline]
    pub fn gate_open(&self) -> bool {
        !self.locked || (self.general && self.hours && self.identity)
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the outputs are derived from.
///
/// Equality is structural over every field and is what the change detector
/// compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SystemState {
    pub permissions: Permissions,
    pub cursor: Cursor,
    /// CT: cached result of [`Permissions::gate_open`].
    pub gate_open: bool,
}

impl SystemState {
    /// Power-on state: all checks off, locked, cursor on GR, gate closed.
    pub const fn new() -> Self {
        Self {
            permissions: Permissions::new(),
            cursor: Cursor::new(),
            gate_open: false,
        }
    }

    /// Applies one joystick event to the menu.
    ///
    /// Returns `true` when the event was accepted, which is every direction
    /// except [`Direction::None`], whether or not a field actually changed.
    pub fn apply(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::None => return false,
            Direction::Up => self.cursor = self.cursor.up(),
            Direction::Down => self.cursor = self.cursor.down(),
            Direction::Right => self.permissions.set(self.cursor.line(), true),
            Direction::Left => self.permissions.set(self.cursor.line(), false),
        }

        debug!("menu: {} -> {}", direction, self.cursor);
        true
    }

    /// Re-derives [`gate_open`](Self::gate_open) from the permissions.
    pub fn recompute_gate(&mut self) -> bool {
        self.gate_open = self.permissions.gate_open();
        self.gate_open
    }
}

impl Default for SystemState {
    fn default() -> Self {
        Self::new()
    }
}
