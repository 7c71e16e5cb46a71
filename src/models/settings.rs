use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Setting {
    ShowHidden,
    ShowOwner,
    ShowGroup,
    ShowSize,
    ShowPermissions,
}

impl Setting {
    /// Settings that add a field to the bracketed block before each name.
    pub const METADATA: [Setting; 4] = [
        Setting::ShowPermissions,
        Setting::ShowOwner,
        Setting::ShowGroup,
        Setting::ShowSize,
    ];
}

/// Set of active display options. Insertion order is irrelevant.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Settings(BTreeSet<Setting>);

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, setting: Setting) {
        self.0.insert(setting);
    }

    pub fn contains(&self, setting: Setting) -> bool {
        self.0.contains(&setting)
    }

    /// Whether any entry needs its metadata fetched.
    pub fn wants_metadata(&self) -> bool {
        Setting::METADATA.iter().any(|s| self.contains(*s))
    }
}

impl FromIterator<Setting> for Settings {
    fn from_iter<I: IntoIterator<Item = Setting>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
