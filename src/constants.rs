/// FIFF Constants used by the measurement info model
/// Values follow MNE's fiff_constants / _fiff/constants.py

// Record types carried by measurement info tags
pub const FIFFT_CH_INFO_STRUCT: i32 = 30; // Channel info structure (96 bytes)
pub const FIFFT_COORD_TRANS_STRUCT: i32 = 35; // Coordinate transformation structure

// Tag kinds whose payloads populate InfoBase
pub const FIFF_NCHAN: i32 = 200; // Number of channels
pub const FIFF_CH_INFO: i32 = 203; // Channel information
pub const FIFF_COORD_TRANS: i32 = 222; // Coordinate transformation
pub const FIFF_MNE_BAD_CHS: i32 = 3502; // Bad channel names (colon-separated string)

// Record sizes in bytes
pub const CH_INFO_STRUCT_SIZE: usize = 96;
pub const COORD_TRANS_STRUCT_SIZE: usize = 56;
pub const CH_NAME_LEN: usize = 16;

// Coordinate frames (FIFFV_COORD_*)
pub const FIFFV_COORD_UNKNOWN: i32 = 0; // Unknown coordinate frame
pub const FIFFV_COORD_DEVICE: i32 = 1; // Device coordinates (MEG sensor array)
pub const FIFFV_COORD_ISOTRAK: i32 = 2; // Isotrak digitizer coordinates
pub const FIFFV_COORD_HPI: i32 = 3; // HPI coil coordinates
pub const FIFFV_COORD_HEAD: i32 = 4; // Head coordinates (fiducial-based)
pub const FIFFV_COORD_MRI: i32 = 5; // MRI coordinates
pub const FIFFV_MNE_COORD_CTF_DEVICE: i32 = 1001; // CTF device coordinates
pub const FIFFV_MNE_COORD_CTF_HEAD: i32 = 1004; // CTF head coordinates

// Channel types (FIFFV_*_CH)
pub const FIFFV_MEG_CH: i32 = 1; // MEG channel (magnetometer or gradiometer)
pub const FIFFV_REF_MEG_CH: i32 = 301; // MEG reference channel
pub const FIFFV_EEG_CH: i32 = 2; // EEG channel
pub const FIFFV_MCG_CH: i32 = 201; // MCG channel
pub const FIFFV_STIM_CH: i32 = 3; // Stimulus channel
pub const FIFFV_EOG_CH: i32 = 202; // EOG channel
pub const FIFFV_EMG_CH: i32 = 302; // EMG channel
pub const FIFFV_ECG_CH: i32 = 402; // ECG channel
pub const FIFFV_MISC_CH: i32 = 502; // Miscellaneous channel
pub const FIFFV_RESP_CH: i32 = 602; // Respiration channel

// Physical units (FIFF_UNIT_*)
pub const FIFF_UNIT_NONE: i32 = -1;
pub const FIFF_UNIT_UNITLESS: i32 = 0;
pub const FIFF_UNIT_M: i32 = 1; // Meter
pub const FIFF_UNIT_V: i32 = 107; // Volt
pub const FIFF_UNIT_T: i32 = 112; // Tesla (magnetometers)
pub const FIFF_UNIT_T_M: i32 = 201; // Tesla/meter (planar gradiometers)

/// Check if a channel type is a data channel (not stimulus, etc.)
pub fn is_data_channel(kind: i32) -> bool {
    matches!(
        kind,
        FIFFV_MEG_CH
            | FIFFV_REF_MEG_CH
            | FIFFV_EEG_CH
            | FIFFV_MCG_CH
            | FIFFV_EOG_CH
            | FIFFV_EMG_CH
            | FIFFV_ECG_CH
            | FIFFV_MISC_CH
            | FIFFV_RESP_CH
    )
}

/// Get human-readable channel type name
pub fn channel_type_name(kind: i32) -> &'static str {
    match kind {
        FIFFV_MEG_CH => "MEG",
        FIFFV_REF_MEG_CH => "REF_MEG",
        FIFFV_EEG_CH => "EEG",
        FIFFV_MCG_CH => "MCG",
        FIFFV_STIM_CH => "STIM",
        FIFFV_EOG_CH => "EOG",
        FIFFV_EMG_CH => "EMG",
        FIFFV_ECG_CH => "ECG",
        FIFFV_MISC_CH => "MISC",
        FIFFV_RESP_CH => "RESP",
        _ => "UNKNOWN",
    }
}

/// Get human-readable unit name
pub fn unit_name(unit: i32) -> &'static str {
    match unit {
        FIFF_UNIT_UNITLESS => "unitless",
        FIFF_UNIT_M => "m",
        FIFF_UNIT_V => "V",
        FIFF_UNIT_T => "T",
        FIFF_UNIT_T_M => "T/m",
        _ => "none",
    }
}

/// Get human-readable coordinate frame name
pub fn coord_frame_name(frame: i32) -> &'static str {
    match frame {
        FIFFV_COORD_DEVICE => "Device",
        FIFFV_COORD_ISOTRAK => "Isotrak",
        FIFFV_COORD_HPI => "HPI",
        FIFFV_COORD_HEAD => "Head",
        FIFFV_COORD_MRI => "MRI",
        FIFFV_MNE_COORD_CTF_DEVICE => "CTF Device",
        FIFFV_MNE_COORD_CTF_HEAD => "CTF Head",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_data_channel() {
        assert!(is_data_channel(FIFFV_MEG_CH));
        assert!(is_data_channel(FIFFV_REF_MEG_CH));
        assert!(is_data_channel(FIFFV_EEG_CH));
        assert!(is_data_channel(FIFFV_EOG_CH));
        assert!(is_data_channel(FIFFV_MISC_CH));

        // Non-data channels
        assert!(!is_data_channel(FIFFV_STIM_CH));
        assert!(!is_data_channel(999)); // Unknown type
    }

    #[test]
    fn test_channel_type_name() {
        assert_eq!(channel_type_name(FIFFV_MEG_CH), "MEG");
        assert_eq!(channel_type_name(FIFFV_REF_MEG_CH), "REF_MEG");
        assert_eq!(channel_type_name(FIFFV_EEG_CH), "EEG");
        assert_eq!(channel_type_name(FIFFV_STIM_CH), "STIM");
        assert_eq!(channel_type_name(FIFFV_ECG_CH), "ECG");
        assert_eq!(channel_type_name(999), "UNKNOWN");
    }

    #[test]
    fn test_unit_name() {
        assert_eq!(unit_name(FIFF_UNIT_T), "T");
        assert_eq!(unit_name(FIFF_UNIT_T_M), "T/m");
        assert_eq!(unit_name(FIFF_UNIT_V), "V");
        assert_eq!(unit_name(FIFF_UNIT_NONE), "none");
    }

    #[test]
    fn test_coord_frame_name() {
        assert_eq!(coord_frame_name(FIFFV_COORD_UNKNOWN), "Unknown");
        assert_eq!(coord_frame_name(FIFFV_COORD_DEVICE), "Device");
        assert_eq!(coord_frame_name(FIFFV_COORD_HEAD), "Head");
        assert_eq!(coord_frame_name(FIFFV_MNE_COORD_CTF_HEAD), "CTF Head");
        assert_eq!(coord_frame_name(999), "Unknown");
    }

    #[test]
    fn test_constant_values() {
        // Verify critical constants match MNE values
        assert_eq!(FIFF_CH_INFO, 203);
        assert_eq!(FIFF_COORD_TRANS, 222);
        assert_eq!(FIFF_MNE_BAD_CHS, 3502);
        assert_eq!(FIFFT_CH_INFO_STRUCT, 30);

        assert_eq!(FIFFV_MEG_CH, 1);
        assert_eq!(FIFFV_EEG_CH, 2);
        assert_eq!(FIFFV_STIM_CH, 3);

        assert_eq!(FIFF_UNIT_T, 112);
        assert_eq!(FIFF_UNIT_T_M, 201);
    }
}
