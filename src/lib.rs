/*! FIFF measurement info model and channel selection
 *
 * Holds the channel layout of a FIFF (Functional Imaging File Format)
 * recording, as loaded from a measurement-info block, and implements the MNE
 * toolbox selection functions over it. Selections produced here are meant to
 * be byte-for-byte compatible with MNE's `fiff_pick_channels`,
 * `fiff_pick_types` and `fiff_pick_info`.
 *
 * # Public API
 *
 * ## Selection
 * - [`pick_channels`]: Select channel indices by name
 * - [`InfoBase::pick_types`]: Select channel indices by type
 * - [`InfoBase::pick_info`]: Restrict measurement info to a selection
 *
 * ## Data Structures
 * - [`InfoBase`]: Channel descriptors, names, transforms and bad channels
 * - [`ChannelInfo`]: Channel information (name, type, calibration, etc.)
 * - [`CoordTrans`]: Rigid coordinate transformation
 * - [`PickOptions`], [`PickTypes`], [`MegPick`]: Selection parameters
 *
 * ## Constants
 * FIFF constants are re-exported from the [`constants`] module, including
 * channel types (FIFFV_*_CH), units (FIFF_UNIT_*) and coordinate frames.
 *
 * # Example
 * ```
 * use fiff_info::{ChannelInfo, InfoBase, PickTypes, FIFFV_EEG_CH, FIFFV_MEG_CH, FIFF_UNIT_T, FIFF_UNIT_V};
 *
 * let info = InfoBase::from_channels(vec![
 *     ChannelInfo::new("MEG 0111", FIFFV_MEG_CH, FIFF_UNIT_T),
 *     ChannelInfo::new("EEG 001", FIFFV_EEG_CH, FIFF_UNIT_V),
 * ]);
 * let sel = info.pick_types(&PickTypes::none().eeg(true));
 * let eeg = info.pick_info(Some(sel.as_slice())).unwrap();
 * assert_eq!(eeg.ch_names, vec!["EEG 001"]);
 * ```
 */

// Submodules
pub mod ch_info;
pub mod constants;
pub mod coord_trans;
pub mod error;
pub mod info_base;
pub mod pick;

// Re-exports: Public API
pub use ch_info::ChannelInfo;
pub use constants::*;
pub use coord_trans::CoordTrans;
pub use error::{FiffError, Result};
pub use info_base::{parse_bads, InfoBase};
pub use pick::{pick_channels, MegPick, PickOptions, PickTypes};
