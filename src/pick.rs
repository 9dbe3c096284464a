//! Channel selection by name and by type
//!
//! Selection semantics follow the MNE toolbox `fiff_pick_channels` /
//! `fiff_pick_types` functions: indices come back strictly increasing,
//! `exclude` always wins, and an empty `include` means "every channel".

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name-based include/exclude lists for [`pick_channels`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickOptions {
    /// Channels to include; empty selects all available channels
    pub include: Vec<String>,
    /// Channels to exclude; empty excludes nothing
    pub exclude: Vec<String>,
}

impl PickOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = names.into_iter().map(Into::into).collect();
        self
    }
}

/// Which MEG sensors a type pick selects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MegPick {
    None,
    /// Every MEG and MEG reference channel regardless of unit
    #[default]
    All,
    /// MEG-class channels measuring in T/m (planar gradiometers)
    Grad,
    /// MEG-class channels measuring in T (magnetometers)
    Mag,
}

impl From<bool> for MegPick {
    fn from(meg: bool) -> Self {
        if meg {
            MegPick::All
        } else {
            MegPick::None
        }
    }
}

/// Type filter for `InfoBase::pick_types`.
///
/// The default selects all MEG and MEG reference channels and nothing else.
/// Names in `include` are added on top of the type filter, names in `exclude`
/// veto both.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickTypes {
    pub meg: MegPick,
    pub eeg: bool,
    pub stim: bool,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    /// Also exclude every channel listed in `bads`
    pub exclude_bads: bool,
}

impl Default for PickTypes {
    fn default() -> Self {
        PickTypes {
            meg: MegPick::All,
            eeg: false,
            stim: false,
            include: Vec::new(),
            exclude: Vec::new(),
            exclude_bads: false,
        }
    }
}

impl PickTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nothing selected by type; only `include` names can contribute
    pub fn none() -> Self {
        PickTypes {
            meg: MegPick::None,
            ..Self::default()
        }
    }

    pub fn meg(mut self, meg: impl Into<MegPick>) -> Self {
        self.meg = meg.into();
        self
    }

    pub fn eeg(mut self, eeg: bool) -> Self {
        self.eeg = eeg;
        self
    }

    pub fn stim(mut self, stim: bool) -> Self {
        self.stim = stim;
        self
    }

    pub fn include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude_bads(mut self, exclude_bads: bool) -> Self {
        self.exclude_bads = exclude_bads;
        self
    }
}

/// Make a selector to pick desired channels from `ch_names`.
///
/// Returns the indices of every name that is in `include` (or all names when
/// `include` is empty) and not in `exclude`. Matching is exact and
/// case-sensitive. A name is only ever selected once: for duplicated names
/// the first occurrence wins.
pub fn pick_channels<S: AsRef<str>>(ch_names: &[S], opts: &PickOptions) -> Vec<usize> {
    let include: HashSet<&str> = opts.include.iter().map(String::as_str).collect();
    let exclude: HashSet<&str> = opts.exclude.iter().map(String::as_str).collect();

    let mut seen: HashSet<&str> = HashSet::with_capacity(ch_names.len());
    let mut sel = Vec::with_capacity(ch_names.len());

    for (k, name) in ch_names.iter().enumerate() {
        let name = name.as_ref();
        if (include.is_empty() || include.contains(name))
            && !exclude.contains(name)
            && seen.insert(name)
        {
            sel.push(k);
        }
    }

    log::debug!(
        "pick_channels: selected {} of {} channels",
        sel.len(),
        ch_names.len()
    );

    sel
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        ["MEG001", "MEG002", "EEG001", "STI001"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_pick_channels_default_selects_all() {
        let ch_names = names();
        assert_eq!(pick_channels(&ch_names, &PickOptions::new()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_pick_channels_empty_names() {
        let ch_names: Vec<String> = Vec::new();
        let opts = PickOptions::new().include(["MEG001"]);
        assert!(pick_channels(&ch_names, &opts).is_empty());
        assert!(pick_channels(&ch_names, &PickOptions::new()).is_empty());
    }

    #[test]
    fn test_pick_channels_exclude() {
        let opts = PickOptions::new().exclude(["EEG001"]);
        assert_eq!(pick_channels(&names(), &opts), vec![0, 1, 3]);
    }

    #[test]
    fn test_pick_channels_include_narrows_and_keeps_channel_order() {
        // include order does not influence output order
        let opts = PickOptions::new().include(["STI001", "MEG001"]);
        assert_eq!(pick_channels(&names(), &opts), vec![0, 3]);
    }

    #[test]
    fn test_pick_channels_unknown_include_ignored() {
        let opts = PickOptions::new().include(["MEG002", "NOPE"]);
        assert_eq!(pick_channels(&names(), &opts), vec![1]);

        let opts = PickOptions::new().include(["NOPE"]);
        assert!(pick_channels(&names(), &opts).is_empty());
    }

    #[test]
    fn test_pick_channels_exclude_wins_over_include() {
        let opts = PickOptions::new()
            .include(["MEG001", "EEG001"])
            .exclude(["EEG001"]);
        assert_eq!(pick_channels(&names(), &opts), vec![0]);
    }

    #[test]
    fn test_pick_channels_case_sensitive() {
        let opts = PickOptions::new().include(["meg001"]);
        assert!(pick_channels(&names(), &opts).is_empty());
    }

    #[test]
    fn test_pick_channels_duplicates_first_wins() {
        let ch_names = ["A", "B", "A", "C"];
        assert_eq!(pick_channels(&ch_names, &PickOptions::new()), vec![0, 1, 3]);

        let opts = PickOptions::new().include(["A"]);
        assert_eq!(pick_channels(&ch_names, &opts), vec![0]);
    }

    #[test]
    fn test_pick_channels_strictly_increasing() {
        let ch_names: Vec<String> = (0..50).map(|i| format!("CH{:03}", i)).collect();
        let opts = PickOptions::new()
            .include(ch_names.iter().rev().step_by(3).cloned())
            .exclude(["CH010", "CH049"]);
        let sel = pick_channels(&ch_names, &opts);

        assert!(!sel.is_empty());
        assert!(sel.windows(2).all(|w| w[0] < w[1]));
        for &k in &sel {
            assert!(opts.include.contains(&ch_names[k]));
            assert!(!opts.exclude.contains(&ch_names[k]));
        }
    }

    #[test]
    fn test_pick_types_defaults() {
        let pick = PickTypes::default();
        assert_eq!(pick.meg, MegPick::All);
        assert!(!pick.eeg && !pick.stim && !pick.exclude_bads);
        assert!(pick.include.is_empty() && pick.exclude.is_empty());

        assert_eq!(PickTypes::none().meg, MegPick::None);
        assert_eq!(PickTypes::new().meg(false).meg, MegPick::None);
        assert_eq!(PickTypes::new().meg(MegPick::Grad).meg, MegPick::Grad);
    }
}
