//! Light measurement info (`InfoBase`) and the MNE pick functions over it

use super::ch_info::ChannelInfo;
use super::coord_trans::CoordTrans;
use super::error::{FiffError, Result};
use super::pick::{pick_channels, MegPick, PickOptions, PickTypes};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Light measurement info: the channel layout of one recording session.
///
/// `chs` and `ch_names` are index-aligned and `nchan` equals their length.
/// Cloning produces fully independent storage.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InfoBase {
    pub nchan: usize,                // Number of channels
    pub chs: Vec<ChannelInfo>,       // Channel descriptors, in channel index order
    pub ch_names: Vec<String>,       // Channel names, aligned with chs
    pub dev_head_t: CoordTrans,      // Device -> head transform
    pub ctf_head_t: CoordTrans,      // CTF head -> head transform
    pub bads: Vec<String>,           // Bad channel names
}

impl InfoBase {
    /// Build from channel descriptors; names and count are derived from `chs`
    pub fn from_channels(chs: Vec<ChannelInfo>) -> Self {
        let ch_names = chs.iter().map(|ch| ch.ch_name.clone()).collect();
        InfoBase {
            nchan: chs.len(),
            chs,
            ch_names,
            ..Default::default()
        }
    }

    /// Bulk population from separately loaded descriptors and names.
    ///
    /// Fails with `ChannelCountMismatch` if the two sequences disagree.
    pub fn from_parts(
        chs: Vec<ChannelInfo>,
        ch_names: Vec<String>,
        dev_head_t: CoordTrans,
        ctf_head_t: CoordTrans,
        bads: Vec<String>,
    ) -> Result<Self> {
        let info = InfoBase {
            nchan: chs.len(),
            chs,
            ch_names,
            dev_head_t,
            ctf_head_t,
            bads,
        };
        info.validate()?;
        Ok(info)
    }

    pub fn with_bads<I, S>(mut self, bads: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bads = bads.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dev_head_t(mut self, trans: CoordTrans) -> Self {
        self.dev_head_t = trans;
        self
    }

    pub fn with_ctf_head_t(mut self, trans: CoordTrans) -> Self {
        self.ctf_head_t = trans;
        self
    }

    /// Check the `nchan == chs.len() == ch_names.len()` invariant
    pub fn validate(&self) -> Result<()> {
        if self.nchan != self.chs.len() || self.ch_names.len() != self.chs.len() {
            return Err(FiffError::ChannelCountMismatch {
                nchan: self.nchan,
                chs: self.chs.len(),
                names: self.ch_names.len(),
            });
        }
        Ok(())
    }

    /// Reset to the empty state
    pub fn clear(&mut self) {
        *self = InfoBase::default();
    }

    /// True if no channels are described
    pub fn is_empty(&self) -> bool {
        self.nchan == 0
    }

    /// fiff_pick_types: select channels by type, then apply include/exclude.
    ///
    /// Channels matching a requested type are gathered by name together with
    /// `include`; if that list is empty the result is empty. Otherwise the
    /// list goes through [`pick_channels`] with `exclude` (plus `bads` when
    /// `exclude_bads` is set), so an excluded name always loses.
    pub fn pick_types(&self, pick: &PickTypes) -> Vec<usize> {
        let mut include: Vec<String> = self
            .chs
            .iter()
            .zip(&self.ch_names)
            .filter(|(ch, _)| Self::type_selected(ch, pick))
            .map(|(_, name)| name.clone())
            .collect();
        include.extend(pick.include.iter().cloned());

        if include.is_empty() {
            log::debug!("pick_types: no channel matched the requested types");
            return Vec::new();
        }

        let mut exclude = pick.exclude.clone();
        if pick.exclude_bads {
            exclude.extend(self.bads.iter().cloned());
        }

        pick_channels(&self.ch_names, &PickOptions { include, exclude })
    }

    fn type_selected(ch: &ChannelInfo, pick: &PickTypes) -> bool {
        // MEG picks cover reference sensors too, split by unit for grad/mag
        let meg = match pick.meg {
            MegPick::None => false,
            MegPick::All => ch.is_meg_class(),
            MegPick::Grad => ch.is_gradiometer(),
            MegPick::Mag => ch.is_magnetometer(),
        };
        meg || (pick.eeg && ch.is_eeg())
            || (pick.stim && ch.is_stim())
    }

    /// fiff_pick_info: restrict the info to the channels in `sel`.
    ///
    /// `None` returns an unmodified copy. Otherwise channels are taken in the
    /// order given, which may differ from the original order. `bads` keeps
    /// only names still present; transforms are carried over unchanged. An
    /// index outside `0..nchan` yields `InvalidSelection` and no result.
    pub fn pick_info(&self, sel: Option<&[usize]>) -> Result<InfoBase> {
        let Some(sel) = sel else {
            return Ok(self.clone());
        };

        let mut chs = Vec::with_capacity(sel.len());
        let mut ch_names = Vec::with_capacity(sel.len());
        for &k in sel {
            match (self.chs.get(k), self.ch_names.get(k)) {
                (Some(ch), Some(name)) if k < self.nchan => {
                    chs.push(ch.clone());
                    ch_names.push(name.clone());
                }
                _ => {
                    return Err(FiffError::InvalidSelection {
                        index: k,
                        nchan: self.nchan,
                    })
                }
            }
        }

        let bads = self
            .bads
            .iter()
            .filter(|bad| ch_names.contains(*bad))
            .cloned()
            .collect();

        log::debug!("pick_info: kept {} of {} channels", chs.len(), self.nchan);

        Ok(InfoBase {
            nchan: chs.len(),
            chs,
            ch_names,
            dev_head_t: self.dev_head_t.clone(),
            ctf_head_t: self.ctf_head_t.clone(),
            bads,
        })
    }

    /// Index of the first channel called `name`
    pub fn channel_index(&self, name: &str) -> Option<usize> {
        self.ch_names.iter().position(|n| n == name)
    }

    /// Indices of all channels of the given FIFFV_*_CH kind
    pub fn channels_of_kind(&self, kind: i32) -> Vec<usize> {
        self.chs
            .iter()
            .enumerate()
            .filter(|(_, ch)| ch.kind == kind)
            .map(|(i, _)| i)
            .collect()
    }

    /// Get indices of good (non-bad) channels
    pub fn get_good_channels(&self) -> Vec<usize> {
        self.ch_names
            .iter()
            .enumerate()
            .filter(|(_, name)| !self.bads.contains(*name))
            .map(|(i, _)| i)
            .collect()
    }

    /// Check if a channel is marked as bad
    pub fn is_bad_channel(&self, channel_name: &str) -> bool {
        self.bads.iter().any(|bad| bad == channel_name)
    }

    /// Bad channels in FIFF_MNE_BAD_CHS form (colon-separated)
    pub fn bads_string(&self) -> String {
        self.bads.join(":")
    }
}

/// Parse a colon-separated FIFF_MNE_BAD_CHS string
pub fn parse_bads(s: &str) -> Vec<String> {
    s.split(':')
        .map(str::trim)
        .filter(|ch| !ch.is_empty())
        .map(str::to_string)
        .collect()
}
