//! Open/close state for the modal's three dropdown pickers.
//!
//! Each picker is an independent flag with a close-on-outside-interaction
//! rule: a global pointer-down closes every open dropdown whose container
//! does not contain the interaction target. Nothing enforces that only
//! one list is open at a time.

/// The dropdowns the modal renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Picker {
    Timezone,
    PhoneNumber,
    IvrGroup,
}

pub const ALL_PICKERS: [Picker; 3] = [Picker::Timezone, Picker::PhoneNumber, Picker::IvrGroup];

/// Open flags for all pickers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickerState {
    timezone_open: bool,
    phone_number_open: bool,
    ivr_group_open: bool,
}

impl PickerState {
    /// All dropdowns closed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, picker: Picker) -> bool {
        match picker {
            Picker::Timezone => self.timezone_open,
            Picker::PhoneNumber => self.phone_number_open,
            Picker::IvrGroup => self.ivr_group_open,
        }
    }

    fn flag_mut(&mut self, picker: Picker) -> &mut bool {
        match picker {
            Picker::Timezone => &mut self.timezone_open,
            Picker::PhoneNumber => &mut self.phone_number_open,
            Picker::IvrGroup => &mut self.ivr_group_open,
        }
    }

    pub fn open(&mut self, picker: Picker) {
        *self.flag_mut(picker) = true;
    }

    pub fn close(&mut self, picker: Picker) {
        *self.flag_mut(picker) = false;
    }

    pub fn toggle(&mut self, picker: Picker) {
        let flag = self.flag_mut(picker);
        *flag = !*flag;
    }

    pub fn close_all(&mut self) {
        for picker in ALL_PICKERS {
            self.close(picker);
        }
    }

    pub fn any_open(&self) -> bool {
        ALL_PICKERS.iter().any(|&p| self.is_open(p))
    }

    /// Handle a global pointer-down.
    ///
    /// `target` names the picker whose container the press landed in,
    /// `None` when it landed outside all of them. Every other open
    /// dropdown closes.
    pub fn pointer_down(&mut self, target: Option<Picker>) {
        for picker in ALL_PICKERS {
            if Some(picker) != target {
                self.close(picker);
            }
        }
    }
}
