//! FIFF channel descriptors and the FIFFT_CH_INFO_STRUCT record codec

use super::constants::*;
use super::error::{FiffError, Result};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Cursor, Read};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Channel descriptor stored as FIFF_CH_INFO_STRUCT (96 bytes)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChannelInfo {
    pub scanno: i32,     // Scan number (4 bytes)
    pub logno: i32,      // Logical channel number (4 bytes)
    pub kind: i32,       // Channel type (MEG, EEG, etc.) (4 bytes)
    pub range: f32,      // Range scaling factor (4 bytes)
    pub cal: f32,        // Calibration coefficient (4 bytes)
    pub coil_type: i32,  // Coil/sensor type (4 bytes)
    pub loc: [f32; 12],  // r0, ex, ey, ez (48 bytes: 12 × f32)
    pub unit: i32,       // Physical unit (4 bytes)
    pub unit_mul: i32,   // Unit multiplier (4 bytes)
    pub ch_name: String, // Channel name (16 bytes null-terminated)
}

impl Default for ChannelInfo {
    fn default() -> Self {
        ChannelInfo {
            scanno: 0,
            logno: 0,
            kind: FIFFV_MISC_CH,
            range: 1.0,
            cal: 1.0,
            coil_type: 0,
            loc: [0.0; 12],
            unit: FIFF_UNIT_NONE,
            unit_mul: 0,
            ch_name: String::new(),
        }
    }
}

impl ChannelInfo {
    /// Create a unit-calibrated channel of the given kind and unit
    pub fn new(ch_name: impl Into<String>, kind: i32, unit: i32) -> Self {
        ChannelInfo {
            kind,
            unit,
            ch_name: ch_name.into(),
            ..Default::default()
        }
    }

    /// Parse channel info from FIFF_CH_INFO_STRUCT binary data (96 bytes)
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < CH_INFO_STRUCT_SIZE {
            return Err(FiffError::RecordTooShort {
                record: "channel info",
                len: data.len(),
                expected: CH_INFO_STRUCT_SIZE,
            });
        }

        let mut cursor = Cursor::new(data);

        let scanno = cursor.read_i32::<BigEndian>()?;
        let logno = cursor.read_i32::<BigEndian>()?;
        let kind = cursor.read_i32::<BigEndian>()?;
        let range = cursor.read_f32::<BigEndian>()?;
        let cal = cursor.read_f32::<BigEndian>()?;
        let coil_type = cursor.read_i32::<BigEndian>()?;

        let mut loc = [0.0f32; 12];
        cursor.read_f32_into::<BigEndian>(&mut loc)?;

        let unit = cursor.read_i32::<BigEndian>()?;
        let unit_mul = cursor.read_i32::<BigEndian>()?;

        let mut name_bytes = [0u8; CH_NAME_LEN];
        cursor.read_exact(&mut name_bytes)?;

        // Stop at the first null, the remainder is padding
        let end = name_bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(CH_NAME_LEN);
        let ch_name = match std::str::from_utf8(&name_bytes[..end]) {
            Ok(name) => name.to_string(),
            Err(_) => {
                log::warn!("Channel {} has a non UTF-8 name, decoding lossily", logno);
                String::from_utf8_lossy(&name_bytes[..end]).into_owned()
            }
        };

        Ok(ChannelInfo {
            scanno,
            logno,
            kind,
            range,
            cal,
            coil_type,
            loc,
            unit,
            unit_mul,
            ch_name,
        })
    }

    /// Encode as a FIFF_CH_INFO_STRUCT record.
    ///
    /// Names longer than 15 bytes are truncated so the record stays null-terminated.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(CH_INFO_STRUCT_SIZE);

        bytes.write_i32::<BigEndian>(self.scanno)?;
        bytes.write_i32::<BigEndian>(self.logno)?;
        bytes.write_i32::<BigEndian>(self.kind)?;
        bytes.write_f32::<BigEndian>(self.range)?;
        bytes.write_f32::<BigEndian>(self.cal)?;
        bytes.write_i32::<BigEndian>(self.coil_type)?;
        for value in self.loc {
            bytes.write_f32::<BigEndian>(value)?;
        }
        bytes.write_i32::<BigEndian>(self.unit)?;
        bytes.write_i32::<BigEndian>(self.unit_mul)?;

        let mut name = [0u8; CH_NAME_LEN];
        let raw = self.ch_name.as_bytes();
        let len = raw.len().min(CH_NAME_LEN - 1);
        name[..len].copy_from_slice(&raw[..len]);
        bytes.extend_from_slice(&name);

        Ok(bytes)
    }

    /// Get the full calibration factor (cal * range)
    pub fn calibration(&self) -> f64 {
        self.cal as f64 * self.range as f64
    }

    /// Sensor origin (first three entries of `loc`)
    pub fn position(&self) -> [f32; 3] {
        [self.loc[0], self.loc[1], self.loc[2]]
    }

    /// Check if this is a data channel (not stimulus, etc.)
    pub fn is_data_channel(&self) -> bool {
        is_data_channel(self.kind)
    }

    pub fn is_meg(&self) -> bool {
        self.kind == FIFFV_MEG_CH
    }

    pub fn is_ref_meg(&self) -> bool {
        self.kind == FIFFV_REF_MEG_CH
    }

    pub fn is_eeg(&self) -> bool {
        self.kind == FIFFV_EEG_CH
    }

    pub fn is_stim(&self) -> bool {
        self.kind == FIFFV_STIM_CH
    }

    /// MEG sensor or MEG reference sensor, the class a MEG type pick selects
    pub fn is_meg_class(&self) -> bool {
        self.is_meg() || self.is_ref_meg()
    }

    /// Gradiometer: MEG-class channel measuring in T/m
    pub fn is_gradiometer(&self) -> bool {
        self.is_meg_class() && self.unit == FIFF_UNIT_T_M
    }

    /// Magnetometer: MEG-class channel measuring in T
    pub fn is_magnetometer(&self) -> bool {
        self.is_meg_class() && self.unit == FIFF_UNIT_T
    }

    /// Get human-readable channel type name
    pub fn type_name(&self) -> &'static str {
        channel_type_name(self.kind)
    }
}
